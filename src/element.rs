use crate::hash::Hashable;

/// Trait bundling the capabilities an element must provide to be stored in a `Set`
///
/// Clone: produce an independent copy.
/// Eq: value equality, reflexive and symmetric.
/// Hashable: stable key derivation, equal elements give equal keys.
///
/// Lists, queues and stacks only ask for the capability an operation needs
/// (`PartialEq` for searching, `Clone` for copying), so any `T` can be stored.
pub trait Collectable: Clone + Eq + Hashable {}

impl<T: Clone + Eq + Hashable> Collectable for T {}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestItem {
    id: u32,
    label: String,
}

#[cfg(test)]
impl TestItem {
    pub fn new(id: u32, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
        }
    }
}
