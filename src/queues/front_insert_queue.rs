use crate::error::EmptyError;
use crate::traits::Queue;

/// Rear of the queue is at the start of the vector.
///
/// Enqueue shifts every stored element one slot to the right, dequeue pops
/// from the end.
pub struct FrontInsertQueue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> for FrontInsertQueue<T> {
    fn new() -> Self {
        FrontInsertQueue { items: Vec::new() }
    }
    fn get_id(&self) -> String {
        String::from("Queue")
    }
    fn description(&self) -> String {
        String::from("Rear of the queue is at the start of the list.")
    }
    fn enqueue(&mut self, item: T) {
        self.items.insert(0, item);
    }
    fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.items.pop().ok_or(EmptyError::new("queue"))
    }
    fn size(&self) -> usize {
        self.items.len()
    }
}
