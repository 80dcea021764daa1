use crate::error::EmptyError;

/// Trait that all queue variants need to implement.
///
/// The harness and the workloads are generic over this trait, so a variant
/// only differs from the others in how it stores its elements.
pub trait Queue<T> {
    /// Used to create a new, empty queue.
    fn new() -> Self;
    /// Returns the name of the queue, as printed in the report.
    fn get_id(&self) -> String;
    /// One-line description of the storage strategy.
    fn description(&self) -> String;
    /// Adds an item to the rear of the queue.
    fn enqueue(&mut self, item: T);
    /// Removes and returns the item at the front of the queue.
    /// Fails if the queue holds no items.
    fn dequeue(&mut self) -> Result<T, EmptyError>;
    /// Number of items currently in the queue.
    fn size(&self) -> usize;
    /// Checks if the queue is empty
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
