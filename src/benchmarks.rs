use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::arguments::QueueType;
use crate::error::{BenchmarkError, EmptyError};
use crate::order;
use crate::queues::{FrontInsertQueue, LinkedQueue, RearInsertQueue, StackQueue, VecStackQueue};
use crate::traits::Queue;
use crate::workloads;

pub mod benchmark_helpers;

pub use benchmark_helpers::BenchConfig;

/// Total elapsed time of each workload for one queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadTiming {
    pub enqueue: Duration,
    pub enqueue_dequeue: Duration,
    pub enqueue_dequeue_alt: Duration,
}

/// Runs `workload` `repetitions` times and returns the total elapsed time.
fn time_workload<F>(repetitions: u32, mut workload: F) -> Result<Duration, EmptyError>
where
    F: FnMut() -> Result<(), EmptyError>,
{
    let start = Instant::now();
    for _ in 0..repetitions {
        workload()?;
    }
    Ok(start.elapsed())
}

fn rng_for(bench_conf: &BenchConfig) -> StdRng {
    match bench_conf.args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Times all three workloads against queue `Q`.
pub fn time_it<Q>(bench_conf: &BenchConfig) -> Result<WorkloadTiming, EmptyError>
where
    Q: Queue<usize>,
{
    let n = bench_conf.args.elements;
    let repetitions = bench_conf.args.time_n;
    let mut rng = rng_for(bench_conf);
    let name = Q::new().get_id();

    let enqueue = time_workload(repetitions, || workloads::simulate_enqueue::<Q>(n))?;
    debug!("enqueue: {:?}", enqueue);
    benchmark_helpers::log_allocated(&name, "enqueue");

    let enqueue_dequeue = time_workload(repetitions, || workloads::simulate_enqueue_dequeue::<Q>(n))?;
    debug!("enqueue-dequeue: {:?}", enqueue_dequeue);
    benchmark_helpers::log_allocated(&name, "enqueue-dequeue");

    let enqueue_dequeue_alt = time_workload(repetitions, || {
        workloads::simulate_enqueue_dequeue_interleaved::<Q, _>(n, &mut rng)
    })?;
    debug!("enqueue-dequeue-alt: {:?}", enqueue_dequeue_alt);
    benchmark_helpers::log_allocated(&name, "enqueue-dequeue-alt");

    Ok(WorkloadTiming {
        enqueue,
        enqueue_dequeue,
        enqueue_dequeue_alt,
    })
}

/// Formats the report block for one queue, trailing blank line included.
pub fn format_report(name: &str, description: &str, timing: &WorkloadTiming) -> String {
    format!(
        "`{}`: {}\nenqueue time: {:.3}\nenqueue-dequeue time: {:.3}\nenqueue-dequeue-alt time: {:.3}\n\n",
        name,
        description,
        timing.enqueue.as_secs_f64(),
        timing.enqueue_dequeue.as_secs_f64(),
        timing.enqueue_dequeue_alt.as_secs_f64(),
    )
}

/// Optionally verify, then time queue `Q` and write its report block.
pub fn benchmark_queue<Q, W>(bench_conf: &BenchConfig, out: &mut W) -> Result<(), BenchmarkError>
where
    Q: Queue<usize>,
    W: Write,
{
    let (name, description) = {
        let q = Q::new();
        (q.get_id(), q.description())
    };
    info!("Benchmarking {}", name);

    if bench_conf.args.verify_order {
        let mut rng = rng_for(bench_conf);
        order::verify_order::<Q, _>(bench_conf.args.elements, &mut rng).map_err(|source| {
            BenchmarkError::Order {
                queue: name.clone(),
                source,
            }
        })?;
    }

    let timing = time_it::<Q>(bench_conf)?;
    benchmark_helpers::output_result(&format_report(&name, &description, &timing), bench_conf, out)?;
    Ok(())
}

/// Run every selected queue, in report order.
pub fn benchmark_all<W: Write>(bench_conf: &BenchConfig, out: &mut W) -> Result<(), BenchmarkError> {
    for queue in bench_conf.args.selected_queues() {
        match queue {
            QueueType::Queue => benchmark_queue::<FrontInsertQueue<usize>, _>(bench_conf, out)?,
            QueueType::Queue2 => benchmark_queue::<RearInsertQueue<usize>, _>(bench_conf, out)?,
            QueueType::Queue3 => benchmark_queue::<StackQueue<usize>, _>(bench_conf, out)?,
            QueueType::Queue4 => benchmark_queue::<VecStackQueue<usize>, _>(bench_conf, out)?,
            QueueType::Queue5 => benchmark_queue::<LinkedQueue<usize>, _>(bench_conf, out)?,
        }
    }
    Ok(())
}
