use log::trace;
use rand::Rng;

use crate::error::EmptyError;
use crate::traits::Queue;

/// Most items enqueued in one round of the interleaved workload.
pub const MAX_ROUND_ENQUEUES: usize = 5;

/// Enqueues `0..n` into a fresh queue. No dequeues.
pub fn simulate_enqueue<Q>(n: usize) -> Result<(), EmptyError>
where
    Q: Queue<usize>,
{
    let mut q = Q::new();
    for i in 0..n {
        q.enqueue(i);
    }
    Ok(())
}

/// Enqueues `0..n` into a fresh queue, then dequeues all `n` items.
pub fn simulate_enqueue_dequeue<Q>(n: usize) -> Result<(), EmptyError>
where
    Q: Queue<usize>,
{
    let mut q = Q::new();
    for i in 0..n {
        q.enqueue(i);
    }
    for _ in 0..n {
        q.dequeue()?;
    }
    Ok(())
}

/// Runs `n` rounds against a fresh queue. Each round enqueues between 1 and
/// [`MAX_ROUND_ENQUEUES`] items, then dequeues between 1 and the current
/// size. A round that finds the queue empty skips its dequeue phase.
pub fn simulate_enqueue_dequeue_interleaved<Q, R>(n: usize, rng: &mut R) -> Result<(), EmptyError>
where
    Q: Queue<usize>,
    R: Rng,
{
    let mut q = Q::new();
    for round in 0..n {
        let enqueues = rng.random_range(1..=MAX_ROUND_ENQUEUES);
        for i in 0..enqueues {
            q.enqueue(i);
        }
        let size = q.size();
        if size == 0 {
            trace!("Round {}: queue empty, skipping dequeues", round);
            continue;
        }
        let dequeues = rng.random_range(1..=size);
        for _ in 0..dequeues {
            q.dequeue()?;
        }
    }
    Ok(())
}
