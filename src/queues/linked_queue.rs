use std::collections::LinkedList;

use crate::error::EmptyError;
use crate::traits::Queue;

/// Queue backed by a doubly linked list. O(1) worst case on both ends.
pub struct LinkedQueue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn new() -> Self {
        LinkedQueue {
            list: LinkedList::new(),
        }
    }
    fn get_id(&self) -> String {
        String::from("Queue5")
    }
    fn description(&self) -> String {
        String::from("Use a doubly linked list.")
    }
    fn enqueue(&mut self, item: T) {
        self.list.push_back(item);
    }
    fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.list.pop_front().ok_or(EmptyError::new("queue"))
    }
    fn size(&self) -> usize {
        self.list.len()
    }
}
