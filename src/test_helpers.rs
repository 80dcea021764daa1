//! Checks shared by the tests of every queue variant.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::Queue;

pub fn fifo_law<Q: Queue<i32>>() {
    let mut q = Q::new();
    for i in 1..=3 {
        q.enqueue(i);
    }
    let out: Vec<i32> = (0..3).map(|_| q.dequeue().unwrap()).collect();
    assert_eq!(out, vec![1, 2, 3]);
}

pub fn empty_queue<Q: Queue<i32>>() {
    let mut q = Q::new();
    assert_eq!(q.size(), 0);
    assert!(q.is_empty());
    q.enqueue(5);
    assert!(!q.is_empty());
    q.dequeue().unwrap();
    assert_eq!(q.size(), 0);
    assert!(q.is_empty());
}

pub fn dequeue_empty_errors<Q: Queue<i32>>() {
    let mut q = Q::new();
    assert!(q.dequeue().is_err());
    q.enqueue(1);
    q.enqueue(2);
    q.dequeue().unwrap();
    q.dequeue().unwrap();
    assert!(q.dequeue().is_err());
    // A failed dequeue leaves the queue usable
    q.enqueue(3);
    assert_eq!(q.dequeue().unwrap(), 3);
}

pub fn size_tracks_operations<Q: Queue<i32>>() {
    let mut q = Q::new();
    for k in 0..20 {
        q.enqueue(k);
    }
    for j in 1..=7 {
        q.dequeue().unwrap();
        assert_eq!(q.size(), 20 - j);
        assert!(!q.is_empty());
    }
}

/// Enqueue 5, dequeue 2, enqueue 1, dequeue the remaining 4.
pub fn interleaved_phases<Q: Queue<i32>>() {
    let mut q = Q::new();
    let mut out = Vec::new();
    for i in 1..=5 {
        q.enqueue(i);
    }
    for _ in 0..2 {
        out.push(q.dequeue().unwrap());
    }
    q.enqueue(6);
    for _ in 0..4 {
        out.push(q.dequeue().unwrap());
    }
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
    assert!(q.is_empty());
}

pub fn fill_and_drain<Q: Queue<usize>>(n: usize) {
    let mut q = Q::new();
    for i in 0..n {
        q.enqueue(i);
    }
    assert_eq!(q.size(), n);
    let out: Vec<usize> = (0..n).map(|_| q.dequeue().unwrap()).collect();
    assert_eq!(out, (0..n).collect::<Vec<_>>());
}

/// Drives the queue with a random mix of operations and compares every
/// observation against a `VecDeque`.
pub fn matches_model<Q: Queue<usize>>(seed: u64, ops: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut q = Q::new();
    let mut model = VecDeque::new();
    let mut next = 0;
    for _ in 0..ops {
        if rng.random_bool(0.55) {
            q.enqueue(next);
            model.push_back(next);
            next += 1;
        } else {
            match model.pop_front() {
                Some(expected) => assert_eq!(q.dequeue().unwrap(), expected),
                None => assert!(q.dequeue().is_err()),
            }
        }
        assert_eq!(q.size(), model.len());
        assert_eq!(q.is_empty(), model.is_empty());
    }
    while let Some(expected) = model.pop_front() {
        assert_eq!(q.dequeue().unwrap(), expected);
    }
    assert!(q.is_empty());
}
