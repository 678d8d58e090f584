use std::fmt::{self, Debug, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::{List, Node, NodeId};

/// An iterator over the elements of a [`List`].
///
/// This `struct` is created by [`List::iter`]. The traversal starts at the
/// root and follows `next` links; it is lazy, restartable (each call to
/// `iter` begins a fresh one) and yields exactly `len` elements, so the
/// circularity of the ring is never observable through it.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let (front, back) = match list.root {
            Some(root) => (root, list.nodes[root].prev),
            None => (0, 0),
        };
        Self {
            list,
            front,
            back,
            remaining: list.len,
        }
    }
}

// Not derived, to avoid the spurious `T: Clone` bound.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(self.list)
            .field(&self.remaining)
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a [`List`].
///
/// This `struct` is created by [`List::iter_mut`].
pub struct IterMut<'a, T> {
    // Base pointer of the arena; slots are addressed by offset from it.
    nodes: NonNull<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let (front, back) = match list.root {
            Some(root) => (root, list.nodes[root].prev),
            None => (0, 0),
        };
        let remaining = list.len;
        // An empty arena has a dangling (never dereferenced) base pointer.
        let nodes = NonNull::new(list.nodes.as_mut_ptr()).unwrap_or(NonNull::dangling());
        Self {
            nodes,
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }

    /// Dereference the slot at `at`.
    ///
    /// # Safety
    ///
    /// `at` must be a live slot of the borrowed arena, and no other
    /// reference to that slot may be alive. The cursors move strictly
    /// towards each other and stop when `remaining` hits zero, so each
    /// live slot is visited at most once per iteration.
    unsafe fn node_mut(&mut self, at: usize) -> &'a mut Node<T> {
        &mut *self.nodes.as_ptr().add(at)
    }
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `front` walks the ring from the root and meets `back`
        // after exactly `len` yields in total, so this slot is live and
        // has not been yielded before.
        let node = unsafe { self.node_mut(self.front) };
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: see `next`; `back` walks the opposite direction and the
        // shared `remaining` counter keeps the two cursors from crossing.
        let node = unsafe { self.node_mut(self.back) };
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// The iterator holds what amounts to `&mut List<T>`, so it inherits the
// threading behavior of that borrow.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An iterator over `(index, &value)` pairs of a [`List`], in logical
/// order from the root.
///
/// This `struct` is created by [`List::entries`].
#[derive(Clone)]
pub struct Entries<'a, T> {
    iter: Iter<'a, T>,
    index: usize,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            iter: list.iter(),
            index: 0,
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

/// An iterator over `(NodeId, &value)` pairs of a [`List`], in logical
/// order from the root.
///
/// This `struct` is created by [`List::nodes`].
#[derive(Clone)]
pub struct Nodes<'a, T> {
    list: &'a List<T>,
    front: usize,
    remaining: usize,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.root.unwrap_or(0),
            remaining: list.len,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        let node = &self.list.nodes[slot];
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref().map(|value| (NodeId(slot), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

/// An owning iterator over the elements of a [`List`].
///
/// This `struct` is created by the `into_iter` method on [`List`]
/// (provided by the [`IntoIterator`] trait).
#[derive(Debug)]
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.shift().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value, in
    /// logical order from the root.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn iter() {
        let list = List::from_iter(0..10);
        assert!(list.iter().copied().eq(0..10));
        assert!(list.iter().rev().copied().eq((0..10).rev()));
        assert_eq!(list.iter().len(), 10);
        assert_eq!(list.iter().last(), Some(&9));
    }

    #[test]
    fn iter_is_restartable() {
        let list = List::from_iter(0..3);
        let mut first = list.iter();
        first.next();
        // a second traversal starts over at the root
        assert!(list.iter().copied().eq(0..3));
        assert!(first.copied().eq(1..3));
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list = List::from_iter(0..4);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_empty() {
        let list = List::<i32>::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
    }

    #[test]
    fn iter_mut() {
        let mut list = List::from_iter(0..10);
        for (i, element) in list.iter_mut().enumerate() {
            *element += i as i32;
        }
        assert!(list.iter().copied().eq((0..10).map(|x| x * 2)));
        assert!(list.iter_mut().rev().map(|x| *x).eq((0..10).map(|x| x * 2).rev()));
    }

    #[test]
    fn iter_mut_empty() {
        let mut list = List::<i32>::new();
        assert_eq!(list.iter_mut().next(), None);
        assert_eq!(list.iter_mut().next_back(), None);
    }

    #[test]
    fn entries() {
        let list = List::from_iter(['a', 'b', 'c']);
        let entries: Vec<_> = list.entries().collect();
        assert_eq!(entries, vec![(0, &'a'), (1, &'b'), (2, &'c')]);
        assert_eq!(list.entries().len(), 3);
    }

    #[test]
    fn nodes_yield_resolvable_handles() {
        let mut list = List::from_iter(0..5);
        // churn the arena so slot order differs from logical order
        list.remove(0).unwrap();
        list.insert(2, 100).unwrap();

        let pairs: Vec<_> = list.nodes().map(|(id, v)| (id, *v)).collect();
        assert_eq!(pairs.len(), list.len());
        for (id, value) in pairs {
            assert_eq!(list.value(id), Some(&value));
        }
    }

    #[test]
    fn into_iter() {
        let list = List::from_iter(0..10);
        assert!(list.into_iter().eq(0..10));

        let list = List::from_iter(0..10);
        assert!(list.into_iter().rev().eq((0..10).rev()));
    }

    #[test]
    fn into_iter_partial_then_drop() {
        let list = List::from_iter(0..10);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(9));
        assert_eq!(iter.len(), 8);
        drop(iter);
    }

    #[test]
    fn ref_into_iter() {
        let mut list = List::from_iter(0..3);
        assert!((&list).into_iter().copied().eq(0..3));
        for element in &mut list {
            *element += 1;
        }
        assert!(list.iter().copied().eq(1..4));
    }

    #[test]
    fn extend() {
        let mut list = List::from_iter(0..3);
        list.extend(3..6);
        list.assert_ring(&[0, 1, 2, 3, 4, 5]);

        let more = [6, 7];
        list.extend(more.iter());
        list.assert_ring(&[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn from_array() {
        let list = List::from([1, 2, 3]);
        list.assert_ring(&[1, 2, 3]);
    }
}
