use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Trait for the associative store a `Set` keeps its elements in
///
/// K: The key type, for a `Set` this is the element's `HashKey`.
/// V: The value stored under each key.
pub trait Store<K, V> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &K) -> bool;

    fn get(&self, key: &K) -> Option<&V>;

    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Stores `value` under `key`
    /// Returns the value previously stored under `key`, if any.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    /// Calls `f` on every key-value pair, in no particular order
    fn for_each<F: FnMut(&K, &V)>(&self, f: F);

    /// Returns an iterator over the stored values, in no particular order
    fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    fn clear(&mut self);
}

impl<K: Eq + Hash, V, S: BuildHasher> Store<K, V> for HashMap<K, V, S> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn for_each<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (key, value) in self {
            f(key, value);
        }
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        HashMap::values(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self)
    }
}
