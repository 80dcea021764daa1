use log::trace;

use crate::error::EmptyError;
use crate::traits::Queue;

/// Two-stack queue that manages its two vectors directly instead of going
/// through [`Stack`](crate::stack::Stack).
pub struct VecStackQueue<T> {
    in_stack: Vec<T>,
    out_stack: Vec<T>,
}

impl<T> Queue<T> for VecStackQueue<T> {
    fn new() -> Self {
        VecStackQueue {
            in_stack: Vec::new(),
            out_stack: Vec::new(),
        }
    }
    fn get_id(&self) -> String {
        String::from("Queue4")
    }
    fn description(&self) -> String {
        String::from("Use 2 stacks using native vectors.")
    }
    fn enqueue(&mut self, item: T) {
        self.in_stack.push(item);
    }
    fn dequeue(&mut self) -> Result<T, EmptyError> {
        if self.out_stack.is_empty() {
            trace!("Transferring {} items to out stack", self.in_stack.len());
            while let Some(item) = self.in_stack.pop() {
                self.out_stack.push(item);
            }
        }
        self.out_stack.pop().ok_or(EmptyError::new("queue"))
    }
    fn size(&self) -> usize {
        self.in_stack.len() + self.out_stack.len()
    }
    fn is_empty(&self) -> bool {
        self.in_stack.is_empty() && self.out_stack.is_empty()
    }
}
