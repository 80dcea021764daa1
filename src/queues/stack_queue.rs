use log::trace;

use crate::error::EmptyError;
use crate::stack::Stack;
use crate::traits::Queue;

/// Queue built from two [`Stack`]s.
///
/// New items go onto `in_stack`. Dequeues are served from `out_stack`, which
/// is refilled from `in_stack` only once it runs dry. Everything in
/// `out_stack` is older than everything in `in_stack`.
pub struct StackQueue<T> {
    in_stack: Stack<T>,
    out_stack: Stack<T>,
}

impl<T> StackQueue<T> {
    /// Moves every element of `in_stack` onto `out_stack`, reversing it so
    /// the oldest element ends up on top.
    fn transfer(&mut self) -> Result<(), EmptyError> {
        trace!("Transferring {} items to out stack", self.in_stack.size());
        while !self.in_stack.is_empty() {
            let item = self.in_stack.pop()?;
            self.out_stack.push(item);
        }
        Ok(())
    }
}

impl<T> Queue<T> for StackQueue<T> {
    fn new() -> Self {
        StackQueue {
            in_stack: Stack::new(),
            out_stack: Stack::new(),
        }
    }
    fn get_id(&self) -> String {
        String::from("Queue3")
    }
    fn description(&self) -> String {
        String::from("Use 2 stacks.")
    }
    fn enqueue(&mut self, item: T) {
        self.in_stack.push(item);
    }
    fn dequeue(&mut self) -> Result<T, EmptyError> {
        if self.out_stack.is_empty() {
            self.transfer()?;
        }
        self.out_stack.pop().map_err(|_| EmptyError::new("queue"))
    }
    fn size(&self) -> usize {
        self.in_stack.size() + self.out_stack.size()
    }
    fn is_empty(&self) -> bool {
        self.in_stack.is_empty() && self.out_stack.is_empty()
    }
}
