use crate::error::EmptyError;

/// A minimal LIFO container backed by a `Vec`.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop().ok_or(EmptyError::new("stack"))
    }

    /// Borrows the top item without removing it.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.last().ok_or(EmptyError::new("stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_stack() {
        let s: Stack<i32> = Stack::new();
        assert!(s.is_empty());
        assert_eq!(s.size(), 0);
    }

    #[test]
    fn pop_is_lifo() {
        let mut s = Stack::new();
        for i in 0..5 {
            s.push(i);
        }
        assert_eq!(s.size(), 5);
        for i in (0..5).rev() {
            assert_eq!(s.pop().unwrap(), i);
        }
        assert!(s.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut s = Stack::new();
        s.push("a");
        s.push("b");
        assert_eq!(*s.peek().unwrap(), "b");
        assert_eq!(s.size(), 2);
        assert_eq!(s.pop().unwrap(), "b");
        assert_eq!(*s.peek().unwrap(), "a");
    }

    #[test]
    fn empty_stack_errors() {
        let mut s: Stack<u8> = Stack::default();
        assert_eq!(s.pop(), Err(EmptyError::new("stack")));
        assert!(s.peek().is_err());
        s.push(1);
        s.pop().unwrap();
        assert!(s.pop().is_err());
    }
}
