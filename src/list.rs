use crate::error::{Error, Result};
use log::{debug, trace};
use slab::Slab;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// A node in the doubly linked list
///
/// `next` and `prev` are keys into the owning list's arena. The arena owns
/// every node; `prev` is only a back-reference.
struct Node<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked list whose nodes live in a slab arena
///
/// Both ends are reachable in O(1). Positional access walks from whichever
/// end is closer to the requested index.
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty doubly linked list
    pub fn new() -> Self {
        LinkedList {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes the arena can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Releases arena slots that are not in use
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the length of the list
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the first element
    pub fn first(&self) -> Option<&T> {
        self.head.map(|key| &self.nodes[key].data)
    }

    /// Returns a mutable reference to the first element
    pub fn first_mut(&mut self) -> Option<&mut T> {
        let key = self.head?;
        Some(&mut self.nodes[key].data)
    }

    /// Returns a reference to the last element
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|key| &self.nodes[key].data)
    }

    /// Returns a mutable reference to the last element
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let key = self.tail?;
        Some(&mut self.nodes[key].data)
    }

    /// Replaces the first element
    ///
    /// On an empty list the value becomes the sole element and `None` is
    /// returned. Otherwise the previous first element is returned and the
    /// length is unchanged.
    pub fn set_first(&mut self, data: T) -> Option<T> {
        match self.head {
            Some(key) => Some(mem::replace(&mut self.nodes[key].data, data)),
            None => {
                self.append(data);
                None
            }
        }
    }

    /// Replaces the last element, see [`LinkedList::set_first`]
    pub fn set_last(&mut self, data: T) -> Option<T> {
        match self.tail {
            Some(key) => Some(mem::replace(&mut self.nodes[key].data, data)),
            None => {
                self.append(data);
                None
            }
        }
    }

    /// Removes and returns the first element
    pub fn pop_first(&mut self) -> Option<T> {
        match self.head {
            Some(key) => Some(self.unlink(key)),
            None => {
                trace!("pop_first on an empty list");
                None
            }
        }
    }

    /// Removes and returns the last element
    pub fn pop_last(&mut self) -> Option<T> {
        match self.tail {
            Some(key) => Some(self.unlink(key)),
            None => {
                trace!("pop_last on an empty list");
                None
            }
        }
    }

    /// Adds an element to the back of the list
    pub fn append(&mut self, data: T) {
        let key = self.nodes.insert(Node {
            data,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            // Empty list
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Adds an element to the front of the list
    pub fn prepend(&mut self, data: T) {
        let key = self.nodes.insert(Node {
            data,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.nodes[head].prev = Some(key),
            // Empty list
            None => self.tail = Some(key),
        }
        self.head = Some(key);
    }

    /// Inserts an element in front of the element currently at `index`
    /// Inserting before index 0 makes the element the new first.
    pub fn add_before(&mut self, index: usize, data: T) -> Result<()> {
        let at = self.key_at(index).ok_or_else(|| self.out_of_range(index))?;
        let prev = self.nodes[at].prev;
        let key = self.nodes.insert(Node {
            data,
            prev,
            next: Some(at),
        });

        self.nodes[at].prev = Some(key);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        Ok(())
    }

    /// Inserts an element behind the element currently at `index`
    /// Inserting after the last index makes the element the new last.
    pub fn add_after(&mut self, index: usize, data: T) -> Result<()> {
        let at = self.key_at(index).ok_or_else(|| self.out_of_range(index))?;
        let next = self.nodes[at].next;
        let key = self.nodes.insert(Node {
            data,
            prev: Some(at),
            next,
        });

        self.nodes[at].next = Some(key);
        match next {
            Some(next) => self.nodes[next].prev = Some(key),
            None => self.tail = Some(key),
        }
        Ok(())
    }

    /// Returns a reference to the element at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.key_at(index).map(|key| &self.nodes[key].data)
    }

    /// Returns a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let key = self.key_at(index)?;
        Some(&mut self.nodes[key].data)
    }

    /// Removes and returns the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let key = self.key_at(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(self.unlink(key))
    }

    /// Removes all elements from the list
    pub fn clear(&mut self) {
        debug!("clearing list of {} elements", self.len());
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Reverses the order of the elements in place
    pub fn reverse(&mut self) {
        debug!("reversing list of {} elements", self.len());
        let mut current = self.head;
        while let Some(key) = current {
            let node = &mut self.nodes[key];
            // Advance with the link as it was before the swap
            current = node.next;
            mem::swap(&mut node.next, &mut node.prev);
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Calls `f` on every element, first to last
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Calls `f` on a mutable reference to every element, first to last
    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        let mut current = self.head;
        while let Some(key) = current {
            let node = &mut self.nodes[key];
            f(&mut node.data);
            current = node.next;
        }
    }

    /// Returns an iterator over the list that borrows the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.head,
            tail: self.tail,
            len: self.len(),
        }
    }

    /// Finds the arena key of the node at `index`
    fn key_at(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if index >= len {
            return None;
        }

        if index <= len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = current.and_then(|key| self.nodes[key].next);
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..len - 1 - index {
                current = current.and_then(|key| self.nodes[key].prev);
            }
            current
        }
    }

    /// Detaches the node at `key` from its neighbours and frees its slot
    fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            // Removing head
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            // Removing tail
            None => self.tail = node.prev,
        }

        node.data
    }

    fn out_of_range(&self, index: usize) -> Error {
        trace!("index {} rejected for list of length {}", index, self.len());
        Error::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|data| data == item)
    }

    /// Returns the index of the last element equal to `item`
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|data| data == item)
    }

    /// Returns true if any element equals `item`
    pub fn contains(&self, item: &T) -> bool {
        self.find_key(item).is_some()
    }

    /// Removes the first element equal to `item`
    /// Returns false if no element matched.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.find_key(item) {
            Some(key) => {
                self.unlink(key);
                true
            }
            None => false,
        }
    }

    /// Removes the last element equal to `item`
    /// Returns false if no element matched.
    pub fn remove_last(&mut self, item: &T) -> bool {
        match self.rfind_key(item) {
            Some(key) => {
                self.unlink(key);
                true
            }
            None => false,
        }
    }

    fn find_key(&self, item: &T) -> Option<usize> {
        let mut current = self.head;
        while let Some(key) = current {
            let node = &self.nodes[key];
            if node.data == *item {
                return Some(key);
            }
            current = node.next;
        }
        None
    }

    fn rfind_key(&self, item: &T) -> Option<usize> {
        let mut current = self.tail;
        while let Some(key) = current {
            let node = &self.nodes[key];
            if node.data == *item {
                return Some(key);
            }
            current = node.prev;
        }
        None
    }
}

impl<T: Clone> LinkedList<T> {
    /// Copies every element into a `Vec`, first to last
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::with_capacity(self.len());
        for data in self {
            list.append(data.clone());
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.append(data);
        }
    }
}

/// An iterator over the doubly linked list that borrows the list
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.head?];
        self.head = node.next;
        self.len -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.tail?];
        self.tail = node.prev;
        self.len -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the doubly linked list that consumes the list
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.head.map(|key| self.0.unlink(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.tail.map(|key| self.0.unlink(key))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
