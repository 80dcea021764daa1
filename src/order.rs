use log::{error, info, trace};
use rand::Rng;

use crate::error::OrderError;
use crate::traits::Queue;
use crate::workloads::MAX_ROUND_ENQUEUES;

/// Checks that a queue hands items back in the order they went in.
///
/// Runs the same access pattern as the interleaved workload for `rounds`
/// rounds, but enqueues a globally increasing counter so every dequeued
/// value can be compared against the next expected one. The queue is fully
/// drained at the end.
pub fn verify_order<Q, R>(rounds: usize, rng: &mut R) -> Result<(), OrderError>
where
    Q: Queue<usize>,
    R: Rng,
{
    let mut q = Q::new();
    info!("Starting order test for {} with {} rounds", q.get_id(), rounds);

    let mut next_in: usize = 0;
    let mut next_out: usize = 0;

    for _ in 0..rounds {
        for _ in 0..rng.random_range(1..=MAX_ROUND_ENQUEUES) {
            q.enqueue(next_in);
            next_in += 1;
        }
        let size = q.size();
        if size == 0 {
            continue;
        }
        for _ in 0..rng.random_range(1..=size) {
            let got = q.dequeue()?;
            check(got, &mut next_out)?;
        }
    }
    trace!("Draining {} remaining items", q.size());
    while !q.is_empty() {
        let got = q.dequeue()?;
        check(got, &mut next_out)?;
    }
    if next_out != next_in {
        error!("Enqueued {} items but got {} back", next_in, next_out);
        return Err(OrderError::Lost { enqueued: next_in, dequeued: next_out });
    }
    info!("Queue {} seems ordered", q.get_id());
    Ok(())
}

fn check(got: usize, next_out: &mut usize) -> Result<(), OrderError> {
    if got != *next_out {
        error!("Not ordered, got {} but should have had {}", got, next_out);
        return Err(OrderError::OutOfOrder { expected: *next_out, got });
    }
    *next_out += 1;
    Ok(())
}
