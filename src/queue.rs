use crate::list::{Iter, LinkedList};
use std::fmt;

/// A first-in first-out queue
/// Elements are enqueued at the back of the list and dequeued from the front.
pub struct Queue<T> {
    /// Elements in arrival order, the front is the next to leave
    items: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Queue {
            items: LinkedList::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            items: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element to the back of the queue
    pub fn enqueue(&mut self, item: T) {
        self.items.append(item);
    }

    /// Removes and returns the element at the front of the queue
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_first()
    }

    /// Returns the element at the front of the queue without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes all elements from the queue
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reverses the order of the queue in place
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Calls `f` on every element, front to back
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.items.for_each(f);
    }

    /// Returns an iterator over the queue, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns true if an element equal to `item` is queued
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns the distance from the front of the first element equal to `item`
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.index_of(item)
    }

    /// Returns the distance from the front of the last element equal to `item`
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.last_index_of(item)
    }
}

impl<T: Clone> Queue<T> {
    /// Copies the queue into a `Vec`, front to back
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.items).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
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
    fn test_new_queue() {
        let queue = Queue::<TestItem>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_enqueue_and_dequeue() {
        let mut queue = Queue::new();
        queue.enqueue(TestItem::new(1, "a"));
        queue.enqueue(TestItem::new(2, "b"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(), Some(&TestItem::new(1, "a")));
        assert_eq!(queue.dequeue(), Some(TestItem::new(1, "a")));
        assert_eq!(queue.dequeue(), Some(TestItem::new(2, "b")));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_reverse() {
        let mut queue: Queue<i32> = (1..=3).collect();
        queue.reverse();
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.to_vec(), vec![2, 1]);
    }

    #[test]
    fn test_debug() {
        let queue: Queue<i32> = (1..=2).collect();
        assert_eq!(format!("{:?}", queue), "Queue([1, 2])");
    }
}
