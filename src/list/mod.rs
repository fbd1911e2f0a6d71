use std::fmt::{self, Debug, Formatter};

use crate::error::ListError;
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::iterator::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// Slot index of the `start` sentinel. Reserved at construction, never freed.
pub(crate) const START: usize = 0;
/// Slot index of the `end` sentinel. Reserved at construction, never freed.
pub(crate) const END: usize = 1;

/// The `List` is a doubly-linked list whose nodes live in a contiguous slot
/// arena instead of individual heap allocations. `prev` and `next` are slot
/// indices, so the linked structure contains no reference cycles and no raw
/// pointers, and every operation is written in safe Rust.
///
/// Two permanent sentinel slots mark the boundaries: `start` (slot 0) and
/// `end` (slot 1). They are created once, carry no value, and are never
/// released until the list itself is dropped. An empty list satisfies
/// `start.next == end` and `end.prev == start`.
///
/// Removal puts a slot back on an internal free list and bumps the slot's
/// generation counter, so a [`NodeRef`] taken earlier is detected as stale
/// instead of silently observing a reused slot.
///
/// # Naming Conventions
///
/// - `front` / `back`: the first / last element slot (not a sentinel);
/// - `start` / `end`: the boundary sentinels enclosing all elements.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

/// One cell of the arena. A slot is either linked into the chain (`node` is
/// present) or on the free list (`node` is absent). The generation counter
/// is bumped every time the slot is freed.
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// A storage cell on the chain. The value is absent only in the two
/// sentinel slots.
pub(crate) struct Node<T> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) value: Option<T>,
}

/// A copyable position handle into one [`List`].
///
/// A `NodeRef` is an `(index, generation)` pair. It does not borrow from the
/// list, so it can be stored and used later; in exchange it is validated on
/// every use and fails with [`ListError::StaleHandle`] once the node it
/// names has been removed, even if the slot has since been reused.
///
/// A `NodeRef` is only meaningful with the list that produced it.
///
/// # Examples
///
/// ```
/// use slot_list::{List, ListError};
///
/// let mut list = List::new();
/// let a = list.push_back('a');
/// let b = list.push_back('b');
///
/// assert_eq!(list.remove_at(b), Ok('b'));
/// // The handle died with the node, even if the slot is later reused.
/// assert_eq!(list.remove_at(b), Err(ListError::StaleHandle));
/// assert_eq!(list.remove_at(a), Ok('a'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

// private methods
impl<T> List<T> {
    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index]
            .node
            .as_ref()
            .expect("index names a linked slot")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index]
            .node
            .as_mut()
            .expect("index names a linked slot")
    }

    pub(crate) fn next_of(&self, index: usize) -> usize {
        self.node(index).next
    }

    pub(crate) fn prev_of(&self, index: usize) -> usize {
        self.node(index).prev
    }

    pub(crate) fn value_of(&self, index: usize) -> &T {
        self.node(index)
            .value
            .as_ref()
            .expect("interior node carries a value")
    }

    pub(crate) fn value_of_mut(&mut self, index: usize) -> &mut T {
        self.node_mut(index)
            .value
            .as_mut()
            .expect("interior node carries a value")
    }

    pub(crate) fn node_ref(&self, index: usize) -> NodeRef {
        NodeRef {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Check a handle against the arena: the slot must exist, be linked, and
    /// its generation must match the one recorded in the handle.
    pub(crate) fn resolve(&self, at: NodeRef) -> Result<usize, ListError> {
        match self.slots.get(at.index) {
            Some(slot) if slot.generation == at.generation && slot.node.is_some() => {
                Ok(at.index)
            }
            _ => Err(ListError::StaleHandle),
        }
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    /// Link a new node holding `value` between the adjacent slots `prev` and
    /// `next`, reusing a free slot when one is available.
    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, value: T) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = Node {
            prev,
            next,
            value: Some(value),
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        };
        self.connect(prev, index);
        self.connect(index, next);
        self.len += 1;
        index
    }

    /// Unlink the node at `index` from the chain, free its slot and bump the
    /// slot generation so outstanding handles to it become stale.
    ///
    /// The caller must ensure `index` names a linked interior slot.
    pub(crate) fn detach_node(&mut self, index: usize) -> T {
        let node = self.slots[index]
            .node
            .take()
            .expect("detached index names a linked slot");
        self.slots[index].generation += 1;
        self.free.push(index);
        self.connect(node.prev, node.next);
        self.len -= 1;
        node.value.expect("interior node carries a value")
    }

    /// Unlink the node at `from` and relink it immediately before `to`.
    /// Pure relinking: the value is not moved or copied.
    pub(crate) fn move_node(&mut self, from: usize, to: usize) {
        let (prev, next) = {
            let node = self.node(from);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        let before = self.prev_of(to);
        self.connect(before, from);
        self.connect(from, to);
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.node(prev).next, next);
        assert_eq!(self.node(next).prev, prev);
    }

    fn with_sentinels(mut slots: Vec<Slot<T>>) -> Self {
        slots.push(Slot {
            generation: 0,
            node: Some(Node {
                prev: START,
                next: END,
                value: None,
            }),
        });
        slots.push(Slot {
            generation: 0,
            node: Some(Node {
                prev: START,
                next: END,
                value: None,
            }),
        });
        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use slot_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_sentinels(Vec::new())
    }

    /// Create an empty `List` with room for `capacity` elements before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_sentinels(Vec::with_capacity(capacity + 2))
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
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
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, keeping the sentinels alive for
    /// reuse.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.cursor_front().is_start());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.value_of(self.next_of(START)))
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let front = self.next_of(START);
        Some(self.value_of_mut(front))
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.value_of(self.prev_of(END)))
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let back = self.prev_of(END);
        Some(self.value_of_mut(back))
    }

    /// Adds an element first in the list and returns a handle to it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeRef {
        let first = self.next_of(START);
        let index = self.attach_node(START, first, value);
        self.node_ref(index)
    }

    /// Appends an element to the back of the list and returns a handle to
    /// it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let last = self.prev_of(END);
        let index = self.attach_node(last, END, value);
        self.node_ref(index)
    }

    /// Removes the first element and returns it, or fails with
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        let first = self.next_of(START);
        Ok(self.detach_node(first))
    }

    /// Removes the last element and returns it, or fails with
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        let last = self.prev_of(END);
        Ok(self.detach_node(last))
    }

    /// Removes the node a handle points to and returns its value.
    ///
    /// Fails with [`ListError::StaleHandle`] if the node has already been
    /// removed, and with [`ListError::InvalidCursorPosition`] if the handle
    /// names a boundary sentinel. The liveness check is an *O*(1) generation
    /// compare, so it is performed in all builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// let two = list.push_back(2);
    /// list.push_back(3);
    ///
    /// assert_eq!(list.remove_at(two), Ok(2));
    /// assert_eq!(list.remove_at(two), Err(ListError::StaleHandle));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove_at(&mut self, at: NodeRef) -> Result<T, ListError> {
        let index = self.resolve(at)?;
        if index == START || index == END {
            return Err(ListError::InvalidCursorPosition);
        }
        Ok(self.detach_node(index))
    }

    /// Provides a cursor at the first element, or at the `start` sentinel if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_front();
    /// assert_eq!(cursor.value(), Ok(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert!(empty.cursor_front().is_start());
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        let index = if self.is_empty() {
            START
        } else {
            self.next_of(START)
        };
        Cursor::new(self, self.node_ref(index))
    }

    /// Provides a cursor at the last element, or at the `end` sentinel if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_back();
    /// assert_eq!(cursor.value(), Ok(&3));
    ///
    /// let empty: List<i32> = List::new();
    /// assert!(empty.cursor_back().is_end());
    /// ```
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        let index = if self.is_empty() {
            END
        } else {
            self.prev_of(END)
        };
        Cursor::new(self, self.node_ref(index))
    }

    /// Provides a cursor with editing operations at the first element, or at
    /// the `start` sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    ///
    /// if let Ok(x) = cursor.value_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.value(), Ok(&5));
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let index = if self.is_empty() {
            START
        } else {
            self.next_of(START)
        };
        let at = self.node_ref(index);
        CursorMut::new(self, at)
    }

    /// Provides a cursor with editing operations at the last element, or at
    /// the `end` sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_back_mut();
    ///
    /// assert_eq!(cursor.remove_and_prev(), Ok(3));
    /// assert_eq!(cursor.value(), Ok(&2));
    /// ```
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let index = if self.is_empty() {
            END
        } else {
            self.prev_of(END)
        };
        let at = self.node_ref(index);
        CursorMut::new(self, at)
    }

    /// Re-anchors a cursor at a saved position.
    ///
    /// Fails with [`ListError::StaleHandle`] if the node the handle names
    /// has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// let two = list.push_back(2);
    ///
    /// let cursor = list.cursor_at(two).unwrap();
    /// assert_eq!(cursor.value(), Ok(&2));
    ///
    /// list.remove_at(two).unwrap();
    /// assert!(matches!(list.cursor_at(two), Err(ListError::StaleHandle)));
    /// ```
    pub fn cursor_at(&self, at: NodeRef) -> Result<Cursor<'_, T>, ListError> {
        self.resolve(at)?;
        Ok(Cursor::new(self, at))
    }

    /// Re-anchors a cursor with editing operations at a saved position.
    ///
    /// Fails with [`ListError::StaleHandle`] if the node the handle names
    /// has been removed.
    pub fn cursor_at_mut(&mut self, at: NodeRef) -> Result<CursorMut<'_, T>, ListError> {
        self.resolve(at)?;
        Ok(CursorMut::new(self, at))
    }

    /// Provides a forward iterator.
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
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type
// parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: crate::IntoIter<&'static str>) -> crate::IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the chain and check the structural invariants: pair links agree,
    /// sentinels are valueless, and `len` matches the interior node count.
    pub(crate) fn check_invariants(&self) {
        assert!(self.node(START).value.is_none());
        assert!(self.node(END).value.is_none());
        let mut count = 0;
        let mut index = START;
        loop {
            let next = self.next_of(index);
            assert_eq!(self.prev_of(next), index);
            if next == END {
                break;
            }
            assert!(self.node(next).value.is_some());
            count += 1;
            index = next;
        }
        assert_eq!(count, self.len);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
        assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn fifo_and_lifo_orders() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];

        let mut list = List::from_iter(values.iter().copied());
        for &expected in &values {
            assert_eq!(list.pop_front(), Ok(expected));
        }
        assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));

        let mut list = List::from_iter(values.iter().copied());
        for &expected in values.iter().rev() {
            assert_eq!(list.pop_back(), Ok(expected));
        }
        assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
    }

    #[test]
    fn list_clear_resets_to_empty_shape() {
        let mut list = List::from_iter(0..10);
        assert_eq!(list.len(), 10);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.cursor_front().is_start());
        assert!(list.cursor_back().is_end());
        list.check_invariants();

        // Sentinels survive a clear and the list is reusable.
        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
        list.check_invariants();
    }

    #[test]
    fn remove_at_by_handle() {
        let mut list = List::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove_at(b), Ok("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec!["a", "c"]);
        list.check_invariants();

        assert_eq!(list.remove_at(b), Err(ListError::StaleHandle));

        assert_eq!(list.remove_at(a), Ok("a"));
        assert_eq!(list.remove_at(c), Ok("c"));
        assert!(list.is_empty());
    }

    #[test]
    fn stale_handle_survives_slot_reuse() {
        let mut list = List::new();
        list.push_back(1);
        let two = list.push_back(2);

        assert_eq!(list.remove_at(two), Ok(2));
        // The freed slot is reused by the next push, with a new generation.
        let replacement = list.push_back(20);
        assert_eq!(replacement.index, two.index);
        assert_ne!(replacement.generation, two.generation);

        assert_eq!(list.remove_at(two), Err(ListError::StaleHandle));
        assert_eq!(list.remove_at(replacement), Ok(20));
    }

    #[test]
    fn stale_handle_after_clear() {
        let mut list = List::new();
        let one = list.push_back(1);
        list.clear();
        assert_eq!(list.remove_at(one), Err(ListError::StaleHandle));
        assert!(matches!(list.cursor_at(one), Err(ListError::StaleHandle)));
    }

    #[test]
    fn sentinel_handles_cannot_be_removed() {
        let mut list = List::from_iter([1, 2]);
        let first = list.cursor_front().position();
        let mut cursor = list.cursor_front_mut();
        cursor.move_prev().unwrap();
        let start_sentinel = cursor.position();
        assert_ne!(first, start_sentinel);
        assert_eq!(
            list.remove_at(start_sentinel),
            Err(ListError::InvalidCursorPosition)
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn with_capacity_behaves_like_new() {
        let mut list = List::with_capacity(16);
        assert!(list.is_empty());
        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.len(), 2);
        list.check_invariants();
    }
}
