use clap::{ArgAction, Parser, ValueEnum};
use std::fmt::Display;

use crate::{N, TIME_N};

/// Times five queue implementations against three workloads.
///
/// Every flag is optional; with none given the full suite runs with the
/// built-in sizes and the report goes to stdout.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Elements per timed run.
    #[arg(short = 'n', long, default_value_t = N)]
    pub elements: usize,

    /// How many times each workload is repeated per measurement.
    #[arg(short, long = "time-n", default_value_t = TIME_N)]
    pub time_n: u32,

    /// Seed for the interleaved workload. Drawn from the OS when absent.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Only benchmark these queues. Can be repeated. Defaults to all of them.
    #[arg(short, long = "queue", value_enum)]
    pub queues: Vec<QueueType>,

    /// Check FIFO order of each queue before timing it.
    #[arg(long, default_value_t = false, action = ArgAction::SetTrue)]
    pub verify_order: bool,

    /// Also append the report to this file.
    #[arg(long = "path")]
    pub path_output: Option<String>,

    /// Log benchmark configuration and hardware info.
    #[arg(long, default_value_t = false, action = ArgAction::SetTrue)]
    pub print_info: bool,

    /// Pin the benchmark thread to the first available core.
    #[arg(long, default_value_t = false, action = ArgAction::SetTrue)]
    pub pin_core: bool,
}

/// The queue variants, in report order.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueType {
    Queue,
    Queue2,
    Queue3,
    Queue4,
    Queue5,
}

impl QueueType {
    pub const ALL: [QueueType; 5] = [
        QueueType::Queue,
        QueueType::Queue2,
        QueueType::Queue3,
        QueueType::Queue4,
        QueueType::Queue5,
    ];
}

impl Args {
    /// The queues to run, in report order and without duplicates.
    pub fn selected_queues(&self) -> Vec<QueueType> {
        QueueType::ALL
            .into_iter()
            .filter(|q| self.queues.is_empty() || self.queues.contains(q))
            .collect()
    }
}

impl Display for QueueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueType::Queue => write!(f, "Queue"),
            QueueType::Queue2 => write!(f, "Queue2"),
            QueueType::Queue3 => write!(f, "Queue3"),
            QueueType::Queue4 => write!(f, "Queue4"),
            QueueType::Queue5 => write!(f, "Queue5"),
        }
    }
}

/// This is used in the print_info function.
impl Display for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Elements:               {}", self.elements)?;
        writeln!(f, "Repetitions:            {}", self.time_n)?;
        match self.seed {
            Some(seed) => writeln!(f, "Seed:                   {}", seed)?,
            None => writeln!(f, "Seed:                   random")?,
        }
        writeln!(f, "Verify order:           {}", self.verify_order)?;
        writeln!(f, "Pin core:               {}", self.pin_core)?;
        if let Some(path) = &self.path_output {
            writeln!(f, "Output path:            {}", path)?;
        }
        Ok(())
    }
}

/// Implemented so that tests are easier to write.
impl Default for Args {
    fn default() -> Self {
        Args {
            elements: N,
            time_n: TIME_N,
            seed: None,
            queues: Vec::new(),
            verify_order: false,
            path_output: None,
            print_info: false,
            pin_core: false,
        }
    }
}
