use crate::list::{Iter, LinkedList};
use std::fmt;

/// A last-in first-out stack
/// The top of the stack is the front of the list, so push and pop are O(1).
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack
    pub fn new() -> Self {
        Stack {
            items: LinkedList::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an element onto the top of the stack
    pub fn push(&mut self, item: T) {
        self.items.prepend(item);
    }

    /// Removes and returns the top of the stack
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_first()
    }

    /// Returns the top of the stack without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes every element from the stack
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Calls `f` on every element, top to bottom
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.items.for_each(f);
    }

    /// Returns an iterator over the stack, top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns true if any element equals `item`
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns the depth from the top of the first element equal to `item`
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.index_of(item)
    }

    /// Returns the depth from the top of the last element equal to `item`
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.last_index_of(item)
    }
}

impl<T: Clone> Stack<T> {
    /// Copies the stack into a `Vec`, top to bottom
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.items).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Pushes every element in turn, so the last one ends up on top
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TestItem;

    #[test]
    fn test_new_stack() {
        let stack = Stack::<TestItem>::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_push_and_pop() {
        let mut stack = Stack::new();
        stack.push(TestItem::new(1, "a"));
        stack.push(TestItem::new(2, "b"));

        assert_eq!(stack.peek(), Some(&TestItem::new(2, "b")));
        assert_eq!(stack.pop(), Some(TestItem::new(2, "b")));
        assert_eq!(stack.pop(), Some(TestItem::new(1, "a")));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_from_iter_keeps_last_on_top() {
        let stack: Stack<i32> = (1..=3).collect();
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_debug() {
        let stack: Stack<i32> = (1..=2).collect();
        assert_eq!(format!("{:?}", stack), "Stack([2, 1])");
    }
}
