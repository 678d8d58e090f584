use std::fmt::{Debug, Formatter};
use std::mem;

use crate::error::ListError;

pub mod iterator;

mod algorithms;
#[cfg(feature = "serde")]
mod serde;

use crate::{Entries, Iter, IterMut, Nodes};

/// Sentinel for "no slot", used in the links of freshly allocated or freed
/// nodes and at the end of the free list.
const NIL: usize = usize::MAX;

/// The `List` is an array-flavoured doubly-linked list, implemented as a
/// circular ring of nodes stored in a slot arena.
///
/// Every live node is linked to a previous and a next neighbor; the node
/// designated as *root* marks the logical front (index 0) of the list, and
/// the ring wraps from the logical back straight to the root, with no null
/// terminal link. Inserting or removing next to a known node is *O*(1);
/// resolving an index to a node walks the ring and is *O*(*n*) worst-case.
///
/// The `List` contains:
/// - `nodes`, the arena of node slots — links are arena indices, not
///   pointers, so the ring owns no cyclic references;
/// - `root`, the index of the ring anchor (`None` iff the list is empty);
/// - `free`, the head of a free list threaded through the `next` links of
///   removed slots, so removal never shifts surviving elements;
/// - `len`, the number of live nodes.
pub struct List<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: Option<usize>,
    free: Option<usize>,
    pub(crate) len: usize,
}

/// One slot of the arena. A slot with `value: None` is free (parked on the
/// free list); its links are meaningless except for `next`, which threads
/// the free list.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// A stable, copyable handle to a node of a [`List`].
///
/// Handles are the arena rendition of holding a reference to a node: they
/// stay valid across unrelated insertions and removals, and operations
/// taking a handle detect and reject one whose node has been removed.
/// A freed slot may be reused by a later insertion, though, so a handle
/// kept across the removal of its own node must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

// Low-level link surgery over the arena. All of these assume both ends are
// live slots; they keep `n.next.prev == n` and `n.prev.next == n` symmetric.

fn link<T>(nodes: &mut [Node<T>], i: usize, j: usize) {
    nodes[i].next = j;
    nodes[j].prev = i;
}

fn splice_before<T>(nodes: &mut [Node<T>], target: usize, new: usize) {
    link(nodes, nodes[target].prev, new);
    link(nodes, new, target);
}

fn splice_after<T>(nodes: &mut [Node<T>], target: usize, new: usize) {
    link(nodes, new, nodes[target].next);
    link(nodes, target, new);
}

fn unlink<T>(nodes: &mut [Node<T>], target: usize) {
    link(nodes, nodes[target].prev, nodes[target].next);
}

// private methods
impl<T> List<T> {
    /// Take a slot off the free list, or grow the arena by one.
    ///
    /// The links of the returned slot are `NIL`; the caller must splice it
    /// into the ring (or self-link it) before the next traversal.
    fn alloc(&mut self, value: T) -> usize {
        match self.free {
            Some(slot) => {
                let next_free = self.nodes[slot].next;
                self.free = if next_free == NIL { None } else { Some(next_free) };
                self.nodes[slot] = Node {
                    value: Some(value),
                    prev: NIL,
                    next: NIL,
                };
                slot
            }
            None => {
                self.nodes.push(Node {
                    value: Some(value),
                    prev: NIL,
                    next: NIL,
                });
                self.nodes.len() - 1
            }
        }
    }

    /// Park an unlinked slot on the free list and return its value.
    fn release(&mut self, slot: usize) -> T {
        let value = self.nodes[slot].value.take().expect("released node is live");
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.free.take().unwrap_or(NIL);
        self.free = Some(slot);
        value
    }

    fn is_live(&self, slot: usize) -> bool {
        self.nodes.get(slot).map(|n| n.value.is_some()).unwrap_or(false)
    }

    fn payload(&self, slot: usize) -> &T {
        self.nodes[slot].value.as_ref().expect("live node holds a value")
    }

    fn payload_mut(&mut self, slot: usize) -> &mut T {
        self.nodes[slot].value.as_mut().expect("live node holds a value")
    }

    /// Resolve a normalized index to a slot by walking the ring from the
    /// root, taking whichever direction is shorter.
    ///
    /// Caller guarantees the list is non-empty and `at < len`.
    fn walk(&self, at: usize) -> usize {
        let mut slot = self.root.expect("walk on an empty list");
        if at <= self.len / 2 {
            for _ in 0..at {
                slot = self.nodes[slot].next;
            }
        } else {
            for _ in 0..self.len - at {
                slot = self.nodes[slot].prev;
            }
        }
        slot
    }

    /// Normalize an index, counting negative values from the back, and
    /// check it against `bound` (`len` for element access, `len + 1` for
    /// insertion).
    fn check_index(&self, index: isize, bound: usize) -> Result<usize, ListError> {
        let normalized = if index < 0 {
            index + self.len as isize
        } else {
            index
        };
        if normalized < 0 || normalized as usize >= bound {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(normalized as usize)
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            free: None,
            len: 0,
        }
    }

    /// Create an empty `List` with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
            free: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the `List` and releases the arena.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.free = None;
        self.len = 0;
    }

    /// Provides a reference to the front element (the root of the ring),
    /// or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.root.map(|slot| self.payload(slot))
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.root?;
        Some(self.payload_mut(slot))
    }

    /// Provides a reference to the back element (the root's predecessor in
    /// the ring), or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.root.map(|slot| self.payload(self.nodes[slot].prev))
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.root?;
        let back = self.nodes[slot].prev;
        Some(self.payload_mut(back))
    }

    /// Appends an element at the logical end of the list, immediately
    /// before the root in ring order, and returns its handle.
    ///
    /// On an empty list this creates a single self-linked node and makes
    /// it the root.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time (amortized over arena
    /// growth).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push(1);
    /// list.push(3);
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.get(-1), Ok(&3));
    /// ```
    pub fn push(&mut self, value: T) -> NodeId {
        let new = self.alloc(value);
        match self.root {
            Some(root) => splice_before(&mut self.nodes, root, new),
            None => {
                link(&mut self.nodes, new, new);
                self.root = Some(new);
            }
        }
        self.len += 1;
        NodeId(new)
    }

    /// Inserts an element so that it ends up *at* `index`, shifting the
    /// logical position of everything from `index` on by one. `index ==
    /// len` appends; inserting at index 0 of a non-empty list re-anchors
    /// the root to the new node. Negative indices count from the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::OutOfRange`] if the normalized index is
    /// outside `0..=len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(0, 5).unwrap();
    ///
    /// assert_eq!(list.to_vec(), vec![5, 1, 2, 4, 3]);
    /// assert!(list.insert(9, 6).is_err());
    /// ```
    pub fn insert(&mut self, index: isize, value: T) -> Result<NodeId, ListError> {
        let at = self.check_index(index, self.len + 1)?;
        if at == self.len {
            return Ok(self.push(value));
        }
        let target = self.walk(at);
        let new = self.alloc(value);
        splice_before(&mut self.nodes, target, new);
        if at == 0 {
            self.root = Some(new);
        }
        self.len += 1;
        Ok(NodeId(new))
    }

    /// Removes the logical last element (the root's predecessor) and
    /// returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop(), Err(ListError::Empty));
    ///
    /// list.push(1);
    /// list.push(3);
    /// assert_eq!(list.pop(), Ok(3));
    /// assert_eq!(list.pop(), Ok(1));
    /// assert_eq!(list.pop(), Err(ListError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, ListError> {
        let root = self.root.ok_or(ListError::Empty)?;
        let back = self.nodes[root].prev;
        unlink(&mut self.nodes, back);
        if back == root {
            self.root = None;
        }
        self.len -= 1;
        Ok(self.release(back))
    }

    /// Removes the root itself and returns its value; the root's former
    /// successor becomes the new root.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c']);
    /// assert_eq!(list.shift(), Ok('a'));
    /// assert_eq!(list.to_vec(), vec!['b', 'c']);
    /// ```
    pub fn shift(&mut self) -> Result<T, ListError> {
        let root = self.root.ok_or(ListError::Empty)?;
        let next = self.nodes[root].next;
        unlink(&mut self.nodes, root);
        self.root = if next == root { None } else { Some(next) };
        self.len -= 1;
        Ok(self.release(root))
    }

    /// Resolves an index to the handle of the node at that position,
    /// walking the ring from the root in whichever direction is shorter.
    ///
    /// Negative indices count from the back (`-1` is the last element).
    /// An index outside the bounds is reported, never silently wrapped
    /// around the ring.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::Empty`] on an empty list and
    /// [`ListError::OutOfRange`] if the normalized index is outside
    /// `0..len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let node = list.node_at(1).unwrap();
    /// assert_eq!(list.value(node), Some(&2));
    /// assert_eq!(list.node_at(-1), list.node_at(2));
    /// assert!(list.node_at(3).is_err());
    /// ```
    pub fn node_at(&self, index: isize) -> Result<NodeId, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let at = self.check_index(index, self.len)?;
        Ok(NodeId(self.walk(at)))
    }

    /// Provides a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::Empty`] on an empty list and
    /// [`ListError::OutOfRange`] for an index outside the bounds after
    /// normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(-1), Ok(&3));
    /// assert!(list.get(5).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, ListError> {
        let NodeId(slot) = self.node_at(index)?;
        Ok(self.payload(slot))
    }

    /// Provides a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let NodeId(slot) = self.node_at(index)?;
        Ok(self.payload_mut(slot))
    }

    /// Overwrites the element at `index` in place and returns the value
    /// it replaced.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::Empty`] or [`ListError::OutOfRange`]
    /// before touching the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 20, 3]);
    /// ```
    pub fn set(&mut self, index: isize, value: T) -> Result<T, ListError> {
        let NodeId(slot) = self.node_at(index)?;
        Ok(mem::replace(self.payload_mut(slot), value))
    }

    /// Removes the element at `index` and returns it. If the removed node
    /// was the root, its former successor becomes the new root.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::Empty`] or [`ListError::OutOfRange`]
    /// before touching the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list.to_vec(), vec![3]);
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<T, ListError> {
        let id = self.node_at(index)?;
        self.remove_node(id)
    }
}

// node-keyed operations
impl<T> List<T> {
    /// The handle of the ring anchor, or `None` if the list is empty.
    #[inline]
    pub fn root_node(&self) -> Option<NodeId> {
        self.root.map(NodeId)
    }

    /// The handle of the node after `id` in ring order. The ring is
    /// circular, so the successor of the back node is the root.
    ///
    /// Returns `None` only for a stale handle.
    #[inline]
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        if self.is_live(id.0) {
            Some(NodeId(self.nodes[id.0].next))
        } else {
            None
        }
    }

    /// The handle of the node before `id` in ring order.
    ///
    /// Returns `None` only for a stale handle.
    #[inline]
    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        if self.is_live(id.0) {
            Some(NodeId(self.nodes[id.0].prev))
        } else {
            None
        }
    }

    /// A reference to the value of the node behind `id`, or `None` if the
    /// handle is stale.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).and_then(|node| node.value.as_ref())
    }

    /// A mutable reference to the value of the node behind `id`, or
    /// `None` if the handle is stale.
    #[inline]
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).and_then(|node| node.value.as_mut())
    }

    /// Returns the node reached from `id` by following `next` links
    /// `steps` times (or `prev` links for negative `steps`).
    ///
    /// The walk is circular: any integer amount is legal, and moving by
    /// `len` in either direction comes back to `id`. The step count is
    /// reduced modulo the length first, so the walk itself never exceeds
    /// half a revolution.
    ///
    /// Returns `None` only for a stale handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let root = list.root_node().unwrap();
    ///
    /// assert_eq!(list.value(list.seek(root, 2).unwrap()), Some(&3));
    /// assert_eq!(list.value(list.seek(root, -1).unwrap()), Some(&3));
    /// assert_eq!(list.seek(root, 3), Some(root));
    /// assert_eq!(list.seek(root, -3), Some(root));
    /// ```
    pub fn seek(&self, id: NodeId, steps: isize) -> Option<NodeId> {
        if !self.is_live(id.0) {
            return None;
        }
        let forward = steps.rem_euclid(self.len as isize) as usize;
        let mut slot = id.0;
        if forward <= self.len / 2 {
            for _ in 0..forward {
                slot = self.nodes[slot].next;
            }
        } else {
            for _ in 0..self.len - forward {
                slot = self.nodes[slot].prev;
            }
        }
        Some(NodeId(slot))
    }

    /// Splices a fresh node holding `value` between `id` and its
    /// successor, rewiring exactly three nodes, and returns the handle of
    /// the inserted node. The root designation is never touched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::InvalidNode`] on a stale handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let root = list.root_node().unwrap();
    ///
    /// list.insert_after(root, 2).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, id: NodeId, value: T) -> Result<NodeId, ListError> {
        if !self.is_live(id.0) {
            return Err(ListError::InvalidNode);
        }
        let new = self.alloc(value);
        splice_after(&mut self.nodes, id.0, new);
        self.len += 1;
        Ok(NodeId(new))
    }

    /// Unlinks the node behind `id`, frees its slot for reuse, and
    /// returns its value. If the node was the root, its former successor
    /// becomes the new root.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::InvalidNode`] on a stale handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let node = list.node_at(1).unwrap();
    ///
    /// assert_eq!(list.remove_node(node), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// assert_eq!(list.remove_node(node), Err(ListError::InvalidNode));
    /// ```
    pub fn remove_node(&mut self, id: NodeId) -> Result<T, ListError> {
        if !self.is_live(id.0) {
            return Err(ListError::InvalidNode);
        }
        let slot = id.0;
        let next = self.nodes[slot].next;
        unlink(&mut self.nodes, slot);
        if self.root == Some(slot) {
            self.root = if next == slot { None } else { Some(next) };
        }
        self.len -= 1;
        Ok(self.release(slot))
    }
}

// iteration entry points; the iterator types live in `iterator`
impl<T> List<T> {
    /// Provides a forward iterator over the values, starting at the root.
    ///
    /// Each call starts an independent traversal at the current root; a
    /// produced iterator is lazy and forward-only, and yields exactly
    /// `len` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push(0);
    /// list.push(1);
    /// list.push(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a forward iterator over `(index, &value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b']);
    /// let entries: Vec<_> = list.entries().collect();
    /// assert_eq!(entries, vec![(0, &'a'), (1, &'b')]);
    /// ```
    #[inline]
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(self)
    }

    /// Provides a forward iterator over `(NodeId, &value)` pairs, for
    /// callers that want to keep handles into the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([10, 20]);
    /// for (id, value) in list.nodes() {
    ///     assert_eq!(list.value(id), Some(value));
    /// }
    /// ```
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod test_harness {
    use super::*;

    impl<T> List<T>
    where
        T: Debug + PartialEq,
    {
        /// Check every structural invariant of the ring against an
        /// expected front-to-back sequence.
        pub(crate) fn assert_ring(&self, expect: &[T]) {
            assert_eq!(self.len(), expect.len());
            assert_eq!(self.is_empty(), expect.is_empty());
            assert_eq!(self.root.is_none(), expect.is_empty());

            if let Some(root) = self.root {
                let mut slot = root;
                for value in expect {
                    assert_eq!(self.nodes[slot].value.as_ref(), Some(value));
                    assert_eq!(self.nodes[self.nodes[slot].next].prev, slot);
                    assert_eq!(self.nodes[self.nodes[slot].prev].next, slot);
                    slot = self.nodes[slot].next;
                }
                // exactly `len` steps bring the walk back to the root
                assert_eq!(slot, root);
            }

            assert_eq!(self.iter().count(), expect.len());

            let live = self.nodes.iter().filter(|n| n.value.is_some()).count();
            assert_eq!(live, expect.len());
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use crate::List;
    use quickcheck_macros::quickcheck;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    #[quickcheck]
    fn round_trip_preserves_order(seed: Vec<i32>) {
        let list = List::from_iter(seed.iter().cloned());
        assert_eq!(list.to_vec(), seed);
        assert_eq!(list.into_vec(), seed);
    }

    #[quickcheck]
    fn iteration_yields_exactly_len(seed: Vec<i32>) {
        let list = List::from_iter(seed.iter().cloned());
        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.entries().count(), list.len());
        assert_eq!(list.nodes().count(), list.len());
    }

    #[quickcheck]
    fn behaves_like_a_deque(seed: Vec<i32>, ops: Vec<(u8, i32, usize)>) {
        let mut expected = VecDeque::from_iter(seed.iter().cloned());
        let mut actual = List::from_iter(seed);

        for (op, value, at) in ops {
            let len = expected.len();
            match op % 6 {
                0 => {
                    expected.push_back(value);
                    actual.push(value);
                }
                1 => {
                    let at = at % (len + 1);
                    expected.insert(at, value);
                    actual.insert(at as isize, value).unwrap();
                }
                2 => assert_eq!(expected.pop_back(), actual.pop().ok()),
                3 => assert_eq!(expected.pop_front(), actual.shift().ok()),
                4 if len > 0 => {
                    let at = at % len;
                    assert_eq!(expected.remove(at), actual.remove(at as isize).ok());
                }
                5 if len > 0 => {
                    let at = at % len;
                    let old = expected[at];
                    expected[at] = value;
                    assert_eq!(actual.set(at as isize, value), Ok(old));
                }
                _ => {}
            }
            assert_eq!(expected.len(), actual.len());
            assert_eq!(expected.front(), actual.front());
            assert_eq!(expected.back(), actual.back());
        }

        let expected = Vec::from_iter(expected);
        actual.assert_ring(&expected);
    }

    #[quickcheck]
    fn circular_seek_is_modular(seed: Vec<i32>, steps: i16) {
        let list = List::from_iter(seed);
        if let Some(root) = list.root_node() {
            let steps = isize::from(steps);
            let there = list.seek(root, steps).unwrap();
            let back = list.seek(there, -steps).unwrap();
            assert_eq!(back, root);
            assert_eq!(list.seek(root, list.len() as isize), Some(root));
        }
    }
}
