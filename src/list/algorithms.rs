use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Range;

use crate::list::List;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Display> Display for List<T> {
    /// Formats the list the way an array literal reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}

// array-flavoured derived operations; all of these are plain traversals
// that leave the ring untouched
impl<T> List<T> {
    /// Builds a new list by applying `f` to every `(value, index)` pair,
    /// in logical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let doubled = list.map(|value, _| value * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<R, F>(&self, mut f: F) -> List<R>
    where
        F: FnMut(&T, usize) -> R,
    {
        self.entries().map(|(index, value)| f(value, index)).collect()
    }

    /// Builds a new list holding clones of the elements `predicate`
    /// accepts, keeping their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(0..6);
    /// let even = list.filter(|value, _| value % 2 == 0);
    /// assert_eq!(even.to_vec(), vec![0, 2, 4]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> List<T>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        let mut out = List::new();
        for (index, value) in self.entries() {
            if predicate(value, index) {
                out.push(value.clone());
            }
        }
        out
    }

    /// Calls `f` on every `(value, index)` pair, in logical order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, value) in self.entries() {
            f(value, index);
        }
    }

    /// Returns a reference to the first element `predicate` accepts, or
    /// `None` if it rejects them all.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 8, 3]);
    /// assert_eq!(list.find(|value| *value > 2), Some(&8));
    /// assert_eq!(list.find(|value| *value > 10), None);
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Folds every element into an accumulator, front to back, starting
    /// from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.fold(0, |sum, value| sum + value), 6);
    /// ```
    pub fn fold<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut accumulator = seed;
        for value in self {
            accumulator = f(accumulator, value);
        }
        accumulator
    }

    /// Folds the elements into one value using the first element as the
    /// seed, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.reduce(|sum, value| sum + value), Some(6));
    ///
    /// let empty = List::<i32>::new();
    /// assert_eq!(empty.reduce(|sum, value| sum + value), None);
    /// ```
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        self.iter().cloned().reduce(f)
    }

    /// Returns `true` if `predicate` accepts at least one element. An
    /// empty list yields `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert!(list.any(|value| value % 2 == 0));
    /// assert!(!list.any(|value| *value > 5));
    /// ```
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|value| predicate(value))
    }

    /// Returns `true` if `predicate` accepts every element. An empty
    /// list yields `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert!(list.all(|value| *value > 0));
    /// assert!(!list.all(|value| value % 2 == 0));
    /// ```
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|value| predicate(value))
    }

    /// Returns `true` if the list holds an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Returns the index of the first element equal to `value`, or `None`
    /// if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b', 'c']);
    /// assert_eq!(list.position(&'b'), Some(1));
    /// assert_eq!(list.position(&'z'), None);
    /// ```
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Concatenates the elements into a `String`, inserting `separator`
    /// between neighbors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["a", "b", "c"]);
    /// assert_eq!(list.join("-"), "a-b-c");
    /// assert_eq!(List::<i32>::new().join("-"), "");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for (index, value) in self.entries() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(&value.to_string());
        }
        out
    }

    /// Builds a new list holding clones of a suffix of this one: a
    /// non-negative `amount` keeps everything from that index on, a
    /// negative `amount` keeps the last `|amount|` elements. An `amount`
    /// past either end yields an empty or a full copy rather than an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.slice(1).to_vec(), vec![2, 3, 4]);
    /// assert_eq!(list.slice(-2).to_vec(), vec![3, 4]);
    /// assert_eq!(list.slice(9).to_vec(), Vec::<i32>::new());
    /// assert_eq!(list.slice(-9).to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn slice(&self, amount: isize) -> List<T>
    where
        T: Clone,
    {
        let start = if amount < 0 {
            self.len.saturating_sub(amount.unsigned_abs())
        } else {
            (amount as usize).min(self.len)
        };
        self.iter().skip(start).cloned().collect()
    }

    /// The range of valid non-negative indices, `0..len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b', 'c']);
    /// assert_eq!(list.keys(), 0..3);
    /// ```
    #[inline]
    pub fn keys(&self) -> Range<usize> {
        0..self.len
    }

    /// Collects clones of the elements into a `Vec`, in logical order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list into a `Vec`, in logical order.
    pub fn into_vec(self) -> Vec<T> {
        Vec::from_iter(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn eq_and_ord_follow_logical_order() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(List::from_iter([1, 2]) < a);

        // equality ignores arena layout
        let mut churned = List::from_iter([0, 1, 2, 4]);
        churned.shift().unwrap();
        churned.set(-1, 3).unwrap();
        assert_eq!(churned, a);
    }

    #[test]
    fn clone_detaches_storage() {
        let mut original = List::from_iter([1, 2, 3]);
        let copy = original.clone();
        original.set(0, 10).unwrap();
        assert_eq!(copy.to_vec(), vec![1, 2, 3]);
        copy.assert_ring(&[1, 2, 3]);
    }

    #[test]
    fn hash_is_layout_independent() {
        let plain = List::from_iter([1, 2, 3]);
        let mut churned = List::from_iter([9, 1, 2, 3]);
        churned.shift().unwrap();
        assert_eq!(plain, churned);
        assert_eq!(hash_of(&plain), hash_of(&churned));
    }

    #[test]
    fn display_reads_like_an_array() {
        assert_eq!(List::from_iter([1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(List::from_iter([1]).to_string(), "[1]");
        assert_eq!(List::<i32>::new().to_string(), "[]");
    }

    #[test]
    fn join_with_separators() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(list.join(", "), "1, 2, 3");
        assert_eq!(list.join(""), "123");
        assert_eq!(List::from_iter(["solo"]).join("-"), "solo");
    }

    #[test]
    fn map_passes_indices() {
        let list = List::from_iter([10, 20, 30]);
        let indexed = list.map(|value, index| (*value, index));
        assert_eq!(indexed.to_vec(), vec![(10, 0), (20, 1), (30, 2)]);
    }

    #[test]
    fn filter_keeps_relative_order() {
        let list = List::from_iter(0..10);
        let picked = list.filter(|value, index| value % 3 == 0 || index == 1);
        picked.assert_ring(&[0, 1, 3, 6, 9]);
    }

    #[test]
    fn fold_and_reduce() {
        let list = List::from_iter([1, 2, 3, 4]);
        assert_eq!(list.fold(0, |sum, v| sum + v), 10);
        assert_eq!(list.fold(String::new(), |s, v| s + &v.to_string()), "1234");
        assert_eq!(list.reduce(|a, b| a.max(b)), Some(4));
        assert_eq!(List::<i32>::new().reduce(|a, b| a + b), None);
        assert_eq!(List::from_iter([7]).reduce(|a, b| a + b), Some(7));
    }

    #[test]
    fn any_all_on_empty() {
        let empty = List::<i32>::new();
        assert!(!empty.any(|_| true));
        assert!(empty.all(|_| false));
    }

    #[test]
    fn position_finds_the_first_match() {
        let list = List::from_iter([1, 2, 2, 3]);
        assert_eq!(list.position(&2), Some(1));
        assert_eq!(list.position(&9), None);
        assert!(list.contains(&3));
    }

    #[test]
    fn slice_suffixes() {
        let list = List::from_iter([1, 2, 3, 4, 5]);
        list.slice(0).assert_ring(&[1, 2, 3, 4, 5]);
        list.slice(3).assert_ring(&[4, 5]);
        list.slice(5).assert_ring(&[]);
        list.slice(99).assert_ring(&[]);
        list.slice(-1).assert_ring(&[5]);
        list.slice(-5).assert_ring(&[1, 2, 3, 4, 5]);
        list.slice(-99).assert_ring(&[1, 2, 3, 4, 5]);
    }

    #[test]
    fn keys_match_entries() {
        let list = List::from_iter(['x', 'y', 'z']);
        let from_keys: Vec<_> = list.keys().collect();
        let from_entries: Vec<_> = list.entries().map(|(i, _)| i).collect();
        assert_eq!(from_keys, from_entries);
    }

    #[test]
    fn for_each_visits_in_order() {
        let list = List::from_iter([5, 6, 7]);
        let mut seen = Vec::new();
        list.for_each(|value, index| seen.push((index, *value)));
        assert_eq!(seen, vec![(0, 5), (1, 6), (2, 7)]);
    }
}
