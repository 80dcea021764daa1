/// Returned when popping, peeking or dequeuing from a container with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{container} is empty")]
pub struct EmptyError {
    pub container: &'static str,
}

impl EmptyError {
    pub fn new(container: &'static str) -> Self {
        EmptyError { container }
    }
}

/// Returned by the order verifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("dequeued {got} but expected {expected}")]
    OutOfOrder { expected: usize, got: usize },
    #[error("enqueued {enqueued} items but only {dequeued} came back")]
    Lost { enqueued: usize, dequeued: usize },
    #[error(transparent)]
    Empty(#[from] EmptyError),
}

/// Everything that can stop a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("workload failed: {0}")]
    Empty(#[from] EmptyError),
    #[error("order verification failed for {queue}: {source}")]
    Order {
        queue: String,
        #[source]
        source: OrderError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
