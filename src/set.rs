use crate::element::Collectable;
use crate::hash::{FxHashMap, HashKey};
use crate::list::LinkedList;
use crate::store::Store;
use log::debug;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

/// The default backing store of a `Set`
/// Each hash key maps to the bucket of elements that produced it.
pub type Buckets<T> = FxHashMap<HashKey, LinkedList<T>>;

/// A set of unique elements kept in an associative store
///
/// Elements are keyed by their `HashKey`. Unequal elements whose keys
/// collide share a bucket and are told apart by equality.
pub struct Set<T, M = Buckets<T>> {
    /// Buckets of elements, keyed by hash key
    data: M,
    /// Total number of elements across all buckets (cached)
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: Collectable> Set<T> {
    /// Creates a new empty set backed by an `FxHashMap`
    pub fn new() -> Self {
        Self::with_store(Buckets::default())
    }
}

impl<T, M> Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>>,
{
    /// Creates a set on top of the given store
    ///
    /// Elements already in the store are taken out and added back one by
    /// one, so duplicates are dropped and every element ends up filed
    /// under its own hash key.
    pub fn with_store(mut store: M) -> Self {
        let items: Vec<T> = store
            .values()
            .flat_map(|bucket| bucket.iter().cloned())
            .collect();
        store.clear();

        let mut set = Set {
            data: store,
            len: 0,
            _marker: PhantomData,
        };
        set.extend(items);
        set
    }

    /// Returns the number of elements in the set
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set has no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if an element equal to `item` is in the set
    pub fn contains(&self, item: &T) -> bool {
        self.data
            .get(&item.hash_key())
            .is_some_and(|bucket| bucket.contains(item))
    }

    /// Adds an element to the set
    /// Returns false, leaving the set unchanged, if an equal element is already present.
    pub fn add(&mut self, item: T) -> bool {
        let key = item.hash_key();
        match self.data.get_mut(&key) {
            Some(bucket) => {
                if bucket.contains(&item) {
                    return false;
                }
                bucket.append(item);
            }
            None => {
                let mut bucket = LinkedList::new();
                bucket.append(item);
                self.data.set(key, bucket);
            }
        }

        self.len += 1;
        true
    }

    /// Removes the element equal to `item`
    /// Returns false if no such element is in the set.
    pub fn remove(&mut self, item: &T) -> bool {
        let key = item.hash_key();
        let (removed, drained) = match self.data.get_mut(&key) {
            Some(bucket) => {
                let removed = bucket.remove(item);
                (removed, bucket.is_empty())
            }
            None => return false,
        };

        if drained {
            self.data.remove(&key);
        }
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Removes all elements from the set
    pub fn clear(&mut self) {
        debug!("clearing set of {} elements", self.len);
        self.data.clear();
        self.len = 0;
    }

    /// Calls `f` on every element, in no particular order
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Returns an iterator over the elements, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.values().flat_map(|bucket| bucket.iter())
    }

    /// Copies every element into a `Vec`, in no particular order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Adds every element of `other` that is not yet present
    pub fn union<N>(&mut self, other: &Set<T, N>)
    where
        N: Store<HashKey, LinkedList<T>>,
    {
        let before = self.len;
        for item in other.iter() {
            self.add(item.clone());
        }
        debug!("union added {} elements", self.len - before);
    }

    /// Returns true if every element of this set is also in `other`
    pub fn is_subset_of<N>(&self, other: &Set<T, N>) -> bool
    where
        N: Store<HashKey, LinkedList<T>>,
    {
        if self.len > other.len() {
            return false;
        }
        self.iter().all(|item| other.contains(item))
    }

    /// Returns true if every element of `other` is also in this set
    pub fn is_superset_of<N>(&self, other: &Set<T, N>) -> bool
    where
        N: Store<HashKey, LinkedList<T>>,
    {
        other.is_subset_of(self)
    }

    /// Returns true if the two sets share at least one element
    pub fn overlaps<N>(&self, other: &Set<T, N>) -> bool
    where
        N: Store<HashKey, LinkedList<T>>,
    {
        self.iter().any(|item| other.contains(item))
    }
}

impl<T, M> Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>> + Default,
{
    /// Keeps only the elements that are also in `other`
    pub fn intersect<N>(&mut self, other: &Set<T, N>)
    where
        N: Store<HashKey, LinkedList<T>>,
    {
        self.retain_by(|item| other.contains(item));
        debug!("intersect kept {} elements", self.len);
    }

    /// Drops every element that is also in `other`
    pub fn except<N>(&mut self, other: &Set<T, N>)
    where
        N: Store<HashKey, LinkedList<T>>,
    {
        self.retain_by(|item| !other.contains(item));
        debug!("except kept {} elements", self.len);
    }

    /// Rebuilds the backing store from the elements `keep` accepts
    fn retain_by<F: Fn(&T) -> bool>(&mut self, keep: F) {
        let previous = mem::take(&mut self.data);
        self.len = 0;
        for bucket in previous.values() {
            for item in bucket.iter().filter(|item| keep(*item)) {
                self.add(item.clone());
            }
        }
    }
}

impl<T, M: Default> Default for Set<T, M> {
    fn default() -> Self {
        Set {
            data: M::default(),
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<T, M> Clone for Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>> + Default,
{
    fn clone(&self) -> Self {
        let mut set = Set::default();
        set.union(self);
        set
    }
}

impl<T, M> PartialEq for Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.is_subset_of(other)
    }
}

impl<T, M> Eq for Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>>,
{
}

impl<T, M> fmt::Debug for Set<T, M>
where
    T: Collectable + fmt::Debug,
    M: Store<HashKey, LinkedList<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, M> Extend<T> for Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, M> FromIterator<T> for Set<T, M>
where
    T: Collectable,
    M: Store<HashKey, LinkedList<T>> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::default();
        set.extend(iter);
        set
    }
}
