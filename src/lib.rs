//! This crate provides an array-flavoured doubly-linked list, implemented
//! as a circular ring of nodes over a slot arena.
//!
//! The [`List`] keeps its elements on a ring: every node links to a
//! previous and a next neighbor, the node designated as *root* marks the
//! logical front (index 0), and the back wraps straight around to the
//! root, so the ring has no null terminal. On top of that structure the
//! list exposes an array-like surface: indexed access with negative
//! indices counting from the back, `push`/`pop`/`shift`, in-place `set`,
//! and the usual batch of derived operations (`map`, `filter`, `fold`,
//! `join`, `slice` and friends).
//!
//! Inserting or removing next to a known node takes *O*(1) time; in
//! compromise, resolving an index walks the ring and takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(["Jackson", "Liam", "Noah"]);
//!
//! list.push("John"); // append at the logical end
//! list.set(1, "Peter").unwrap(); // overwrite in place
//! assert_eq!(list.remove(0), Ok("Jackson"));
//!
//! assert_eq!(list.get(-1), Ok(&"John")); // negative indices count back
//! assert_eq!(list.to_string(), "[Peter, Noah, John]");
//! ```
//!
//! # Memory Layout
//!
//! The ring does not allocate one heap box per node. Instead, all nodes
//! live in a single `Vec` arena and link to each other by arena index:
//!
//! ```text
//!          ┌───────────────────────────────────────┐
//!          ▼                                       │
//!        ┌───────┐      ┌───────┐      ┌───────┐   │
//! root ─►│ "a"   │ next │ "b"   │ next │ "c"   │───┘
//!    ┌───│       │◄────►│       │◄────►│       │◄──┐
//!    │   └───────┘ prev └───────┘ prev └───────┘   │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! Removing a node unlinks it and parks its slot on an internal free
//! list; a later insertion reuses the slot, so surviving elements never
//! move and their [`NodeId`] handles stay valid. An operation handed a
//! handle whose node has been removed fails with
//! [`ListError::InvalidNode`] instead of touching a recycled slot.
//!
//! # Iteration
//!
//! [`List::iter`] starts a fresh traversal at the root on every call and
//! yields exactly `len` elements, so the circularity is never observable
//! through an iterator. [`List::entries`] pairs each element with its
//! index, [`List::nodes`] pairs it with its handle, and
//! [`List::iter_mut`] yields mutable references. All of them iterate
//! from both ends and report their exact length.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([10, 20, 30]);
//!
//! let entries: Vec<_> = list.entries().collect();
//! assert_eq!(entries, vec![(0, &10), (1, &20), (2, &30)]);
//!
//! // traversals are independent
//! let mut first = list.iter();
//! first.next();
//! assert!(list.iter().copied().eq([10, 20, 30]));
//! ```
//!
//! # Node Handles
//!
//! Operations that resolve a position return a [`NodeId`], a stable
//! handle into the ring. Handles allow *O*(1) splicing next to a known
//! node, and circular navigation with [`List::seek`], where any step
//! amount is legal and a full revolution returns to the start:
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 3]);
//! let root = list.root_node().unwrap();
//!
//! list.insert_after(root, 2).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! assert_eq!(list.seek(root, 3), Some(root)); // a full lap
//! assert_eq!(list.value(list.seek(root, -1).unwrap()), Some(&3));
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`ListError`]: [`ListError::Empty`] when
//! the list has no elements to give, [`ListError::OutOfRange`] when an
//! index misses the bounds after normalization (an out-of-range index is
//! reported, never silently wrapped around the ring), and
//! [`ListError::InvalidNode`] for stale handles. Errors are detected
//! before any link is rewired.
//!
//! # Serde
//!
//! With the `serde` feature enabled, a list serializes as a plain
//! sequence in logical order and deserializes from one.

pub use crate::error::ListError;
#[doc(inline)]
pub use crate::list::iterator::{Entries, IntoIter, Iter, IterMut, Nodes};
#[doc(inline)]
pub use crate::list::{List, NodeId};

mod error;
pub mod list;
