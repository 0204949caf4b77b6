//! Single threaded in-memory collections built around one doubly linked list.
//!
//! [`LinkedList`] keeps its nodes in a slab arena and is the core container.
//! [`Queue`] and [`Stack`] are thin FIFO/LIFO adapters over it, and [`Set`]
//! stores its elements in buckets of linked lists keyed by hash.

pub mod collection;
pub mod element;
pub mod error;
pub mod hash;
pub mod list;
pub mod queue;
pub mod set;
pub mod stack;
pub mod store;

pub use collection::Collection;
pub use element::Collectable;
pub use error::{Error, Result};
pub use hash::{HashKey, Hashable};
pub use list::LinkedList;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
pub use store::Store;
