pub mod front_insert_queue;
pub mod linked_queue;
pub mod rear_insert_queue;
pub mod stack_queue;
pub mod vec_stack_queue;

pub use front_insert_queue::FrontInsertQueue;
pub use linked_queue::LinkedQueue;
pub use rear_insert_queue::RearInsertQueue;
pub use stack_queue::StackQueue;
pub use vec_stack_queue::VecStackQueue;
