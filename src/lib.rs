#[cfg(unix)]
use jemallocator::Jemalloc;

#[cfg(unix)]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;
use log::info;

use crate::benchmarks::benchmark_helpers;
use crate::error::BenchmarkError;

pub mod arguments;
pub mod benchmarks;
pub mod error;
pub mod order;
pub mod queues;
pub mod stack;
pub mod traits;
pub mod workloads;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Elements per timed run.
pub const N: usize = 10_000;
/// How many times each workload is repeated per measurement.
pub const TIME_N: u32 = 10;

/// Parse arguments and run the whole suite, writing the report to stdout.
pub fn start_benchmark() -> Result<(), BenchmarkError> {
    let args = arguments::Args::parse();
    let bench_conf = benchmark_helpers::create_bench_config(args);

    if bench_conf.args.pin_core {
        benchmark_helpers::pin_to_first_core();
    }
    if bench_conf.args.print_info {
        // Info goes to stderr so the report on stdout keeps its format
        benchmark_helpers::print_info(&bench_conf, &mut std::io::stderr().lock())?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    benchmarks::benchmark_all(&bench_conf, &mut out)?;
    info!("Benchmark {} done", bench_conf.benchmark_id);
    Ok(())
}
