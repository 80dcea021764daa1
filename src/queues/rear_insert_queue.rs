use crate::error::EmptyError;
use crate::traits::Queue;

/// Rear of the queue is at the end of the vector.
///
/// Enqueue is an amortized O(1) push, dequeue removes index 0 and shifts the
/// remaining elements left.
pub struct RearInsertQueue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> for RearInsertQueue<T> {
    fn new() -> Self {
        RearInsertQueue { items: Vec::new() }
    }
    fn get_id(&self) -> String {
        String::from("Queue2")
    }
    fn description(&self) -> String {
        String::from("Rear of the queue is at the end of the list.")
    }
    fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }
    fn dequeue(&mut self) -> Result<T, EmptyError> {
        if self.items.is_empty() {
            return Err(EmptyError::new("queue"));
        }
        Ok(self.items.remove(0))
    }
    fn size(&self) -> usize {
        self.items.len()
    }
}
