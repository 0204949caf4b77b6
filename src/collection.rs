use crate::element::Collectable;
use crate::hash::HashKey;
use crate::list::LinkedList;
use crate::queue::Queue;
use crate::set::Set;
use crate::stack::Stack;
use crate::store::Store;

/// Trait shared by every container in this crate
pub trait Collection<T> {
    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns true if there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element
    fn clear(&mut self);

    /// Returns true if an element equal to `item` is present
    fn contains(&self, item: &T) -> bool;

    /// Copies every element into a `Vec`
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T: PartialEq> Collection<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn contains(&self, item: &T) -> bool {
        LinkedList::contains(self, item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        LinkedList::to_vec(self)
    }
}

impl<T: PartialEq> Collection<T> for Queue<T> {
    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn clear(&mut self) {
        Queue::clear(self)
    }

    fn contains(&self, item: &T) -> bool {
        Queue::contains(self, item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        Queue::to_vec(self)
    }
}

impl<T: PartialEq> Collection<T> for Stack<T> {
    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&mut self) {
        Stack::clear(self)
    }

    fn contains(&self, item: &T) -> bool {
        Stack::contains(self, item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        Stack::to_vec(self)
    }
}

impl<T, M> Collection<T> for Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>>,
{
    fn len(&self) -> usize {
        Set::len(self)
    }

    fn clear(&mut self) {
        Set::clear(self)
    }

    fn contains(&self, item: &T) -> bool {
        Set::contains(self, item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        Set::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<C: Collection<i32>>(collection: &mut C, insert: impl Fn(&mut C, i32)) {
        for i in 1..=3 {
            insert(&mut *collection, i);
        }
    }

    fn check<C: Collection<i32>>(collection: &mut C) {
        assert_eq!(collection.len(), 3);
        assert!(!collection.is_empty());
        assert!(collection.contains(&2));
        assert!(!collection.contains(&4));
        assert_eq!(collection.to_vec().len(), 3);

        collection.clear();
        assert!(collection.is_empty());
        assert!(collection.to_vec().is_empty());
    }

    #[test]
    fn test_every_container_is_a_collection() {
        let mut list: LinkedList<i32> = LinkedList::new();
        fill(&mut list, |list, i| list.append(i));
        check(&mut list);

        let mut queue: Queue<i32> = Queue::new();
        fill(&mut queue, |queue, i| queue.enqueue(i));
        check(&mut queue);

        let mut stack: Stack<i32> = Stack::new();
        fill(&mut stack, |stack, i| stack.push(i));
        check(&mut stack);

        let mut set: Set<i32> = Set::new();
        fill(&mut set, |set, i| {
            set.add(i);
        });
        check(&mut set);
    }
}
