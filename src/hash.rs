use std::hash::Hash;

pub use fxhash::FxHashMap;

/// The stable key derived from an element
pub type HashKey = u64;

/// Trait for elements that can derive a stable key
/// Equal elements must produce equal keys. Unequal elements may collide,
/// so stores keyed by `HashKey` still need an equality check.
pub trait Hashable {
    fn hash_key(&self) -> HashKey;
}

impl<T: Hash + ?Sized> Hashable for T {
    #[inline]
    fn hash_key(&self) -> HashKey {
        fxhash::hash64(self)
    }
}
