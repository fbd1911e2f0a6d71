use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::list::List;

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self::from_iter(self.iter().cloned())
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sorts the list in natural, non-decreasing order.
    ///
    /// The sort is stable: elements that compare equal keep their original
    /// relative order. It runs in place by relinking nodes, with *O*(*n*
    /// log *n*) comparisons and *O*(1) auxiliary space; values are never
    /// moved or copied. Sorting an already sorted list leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 3, 4]);
    /// list.sort();
    /// assert_eq!(Vec::from_iter(list), vec![3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a <= b);
    }

    /// Sorts the list with a caller-supplied order predicate.
    ///
    /// `keep_left_first(l, r)` returns `true` when `l` is permitted to stay
    /// ordered before `r`; for a natural sort this is `l <= r`. Returning
    /// `true` on equal keys is what makes the sort stable, so a predicate
    /// implementing a strict `<` trades stability away.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([("b", 2), ("a", 1), ("c", 0)]);
    /// list.sort_by(|l, r| l.1 <= r.1);
    /// assert_eq!(
    ///     Vec::from_iter(list),
    ///     vec![("c", 0), ("a", 1), ("b", 2)],
    /// );
    /// ```
    pub fn sort_by<F>(&mut self, keep_left_first: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        sort::merge_sort(self, keep_left_first);
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn list_comparisons() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn list_clone_is_deep() {
        let a = List::from_iter([1, 2, 3]);
        let mut b = a.clone();
        b.push_back(4);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);
        assert_ne!(a, b);
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(0..5);
        assert!(list.contains(&0));
        assert!(list.contains(&4));
        assert!(!list.contains(&5));
    }
}
