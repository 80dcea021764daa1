#[cfg(all(unix, feature = "memory_tracking"))]
use jemalloc_ctl::{epoch, stats};
use chrono::Local;
use log::{debug, warn};
use std::collections::hash_map::DefaultHasher;
use std::fs::OpenOptions;
use std::hash::{Hash, Hasher};
use std::io::Write;
use sysinfo::System;

use crate::arguments::Args;

/// Benchmark config struct
/// Needs to be fully filled for benchmarks to be able to run.
pub struct BenchConfig {
    pub args: Args,
    pub date_time: String,
    pub benchmark_id: String,
}

/// Stamps the arguments with the current time and a hashed benchmark id.
pub fn create_bench_config(args: Args) -> BenchConfig {
    let date_time = Local::now().format("%Y%m%d%H%M%S").to_string();
    // Create benchmark hashed id
    let benchmark_id = {
        let mut hasher = DefaultHasher::new();
        date_time.hash(&mut hasher);
        format!("{:x}", hasher.finish())
    };

    debug!("Benchmark ID: {}", benchmark_id);
    debug!("Arguments: {:?}", args);

    BenchConfig {
        args,
        date_time,
        benchmark_id,
    }
}

/// Writes one block of the report to `out`, and appends it to the output
/// file as well if one was configured.
pub fn output_result<W: Write>(
    block: &str,
    bench_conf: &BenchConfig,
    out: &mut W,
) -> Result<(), std::io::Error> {
    write!(out, "{}", block)?;
    out.flush()?;
    if let Some(path) = &bench_conf.args.path_output {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)?;
        write!(file, "{}", block)?;
    }
    Ok(())
}

/// Pins the current thread to the first core the OS reports.
pub fn pin_to_first_core() {
    match core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        Some(core) => {
            if core_affinity::set_for_current(core) {
                debug!("Pinned benchmark thread to core {}", core.id);
            } else {
                warn!("Couldn't pin benchmark thread to core {}", core.id);
            }
        }
        None => warn!("No core ids available, running unpinned"),
    }
}

/// Function to print the specifications of the hardware used and the benchmark config that ran
pub fn print_info<W: Write>(bench_conf: &BenchConfig, out: &mut W) -> Result<(), std::io::Error> {
    let num: u64 = 1000;
    let sys = System::new_all();
    writeln!(out, "Benchmark ID:           {}", bench_conf.benchmark_id)?;
    writeln!(out, "Started at:             {}", bench_conf.date_time)?;
    writeln!(out, "Arguments used in test:")?;
    writeln!(out, "\n{}", bench_conf.args)?;
    writeln!(out, "Test ran on hardware specs:")?;
    writeln!(out, "System name:            {}", System::name().unwrap_or_default())?;
    writeln!(out, "System kernel version:  {}", System::kernel_version().unwrap_or_default())?;
    writeln!(out, "System OS version:      {}", System::os_version().unwrap_or_default())?;
    writeln!(out, "Total RAM (in GB):      {:?}", sys.total_memory() / (num.pow(3)))?;
    out.flush()
}

/// Logs how many bytes jemalloc currently has allocated.
#[cfg(all(unix, feature = "memory_tracking"))]
pub fn log_allocated(queue_name: &str, workload: &str) {
    // Update stats
    if let Err(e) = epoch::advance() {
        warn!("Error occured while advancing epoch: {}", e);
        return;
    }
    match stats::allocated::read() {
        Ok(allocated) => log::info!("{} {}: {} bytes allocated", queue_name, workload, allocated),
        Err(e) => warn!("Couldn't read allocated bytes: {}", e),
    }
}

#[cfg(not(all(unix, feature = "memory_tracking")))]
pub fn log_allocated(_queue_name: &str, _workload: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_has_id_and_timestamp() {
        let bench_conf = create_bench_config(Args::default());
        assert_eq!(bench_conf.date_time.len(), 14);
        assert!(!bench_conf.benchmark_id.is_empty());
        assert!(bench_conf.benchmark_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn output_goes_to_writer() {
        let bench_conf = create_bench_config(Args::default());
        let mut out = Vec::new();
        output_result("line one\nline two\n", &bench_conf, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn print_info_reaches_writer() {
        let args = Args {
            seed: Some(42),
            ..Default::default()
        };
        let bench_conf = create_bench_config(args);
        let mut out = Vec::new();
        print_info(&bench_conf, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("Benchmark ID:           {}", bench_conf.benchmark_id)));
        assert!(text.contains("Seed:                   42"));
        assert!(text.contains("Total RAM (in GB):"));
    }

    #[test]
    fn output_is_appended_to_file() {
        let path = std::env::temp_dir().join(format!("queue_benchmark_{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let args = Args {
            path_output: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let bench_conf = create_bench_config(args);
        let mut out = Vec::new();
        output_result("first\n", &bench_conf, &mut out).unwrap();
        output_result("second\n", &bench_conf, &mut out).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }
}
