use std::fmt::{self, Debug, Formatter};

use crate::error::ListError;
use crate::list::{List, NodeRef, END, START};

/// A bidirectional cursor over a [`List`].
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth. It is bound to its list by a shared borrow, so the list
/// cannot be mutated while the cursor is alive and the cursor can never
/// dangle.
///
/// A cursor has two observable kinds of position per direction: *on an
/// element*, and *at a boundary sentinel*. Stepping past the last element
/// parks the cursor on the `end` sentinel; stepping before the first element
/// parks it on the `start` sentinel. There is no wraparound: moving off a
/// boundary fails and leaves the cursor in place.
///
/// # Examples
///
/// ```
/// use slot_list::{List, ListError};
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(['A', 'B', 'C']);
///
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.value(), Ok(&'A'));
///
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.value(), Ok(&'B'));
///
/// // Step past the last element onto the end sentinel.
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.is_end());
/// assert_eq!(cursor.value(), Err(ListError::InvalidCursorPosition));
///
/// // No wraparound off the boundary.
/// assert_eq!(cursor.move_next(), Err(ListError::InvalidCursorPosition));
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) list: &'a List<T>,
    pub(crate) at: NodeRef,
}

/// A bidirectional cursor over a [`List`] with editing operations.
///
/// A `CursorMut` borrows its list exclusively, so it is the only way the
/// list can change while it is alive; every structural edit goes through the
/// cursor itself, which keeps its position up to date. To save a position
/// across other mutations, take a [`NodeRef`] with [`position`] and
/// re-anchor later with [`List::cursor_at_mut`], which re-validates the
/// handle.
///
/// [`position`]: CursorMut::position
///
/// # Examples
///
/// ```
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([132, 31]);
///
/// let mut cursor = list.cursor_front_mut();
/// assert_eq!(cursor.remove_and_next(), Ok(132));
/// assert_eq!(cursor.value(), Ok(&31));
/// assert_eq!(cursor.remove_and_next(), Ok(31));
/// assert!(cursor.is_end());
/// assert!(list.is_empty());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) list: &'a mut List<T>,
    pub(crate) at: NodeRef,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The saved position of this cursor, usable to re-anchor a new
            /// cursor after the current borrow ends.
            pub fn position(&self) -> NodeRef {
                self.at
            }

            /// Returns `true` if the cursor is parked on the `start`
            /// sentinel.
            pub fn is_start(&self) -> bool {
                self.at.index == START
            }

            /// Returns `true` if the cursor is parked on the `end` sentinel.
            pub fn is_end(&self) -> bool {
                self.at.index == END
            }

            /// The value at the current node, or
            /// [`ListError::InvalidCursorPosition`] if the cursor is at a
            /// boundary sentinel.
            pub fn value(&self) -> Result<&T, ListError> {
                let index = self.list.resolve(self.at)?;
                if index == START || index == END {
                    return Err(ListError::InvalidCursorPosition);
                }
                Ok(self.list.value_of(index))
            }

            /// Move one step towards the `end` sentinel.
            ///
            /// Stepping past the last element parks the cursor on the `end`
            /// sentinel; moving again from there fails with
            /// [`ListError::InvalidCursorPosition`] and the cursor does not
            /// move.
            pub fn move_next(&mut self) -> Result<(), ListError> {
                let index = self.list.resolve(self.at)?;
                if index == END {
                    return Err(ListError::InvalidCursorPosition);
                }
                self.at = self.list.node_ref(self.list.next_of(index));
                Ok(())
            }

            /// Move one step towards the `start` sentinel.
            ///
            /// Stepping before the first element parks the cursor on the
            /// `start` sentinel; moving again from there fails with
            /// [`ListError::InvalidCursorPosition`] and the cursor does not
            /// move.
            pub fn move_prev(&mut self) -> Result<(), ListError> {
                let index = self.list.resolve(self.at)?;
                if index == START {
                    return Err(ListError::InvalidCursorPosition);
                }
                self.at = self.list.node_ref(self.list.prev_of(index));
                Ok(())
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, at: NodeRef) -> Self {
        Self { list, at }
    }
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            at: self.at,
        }
    }
}

/// Compare cursors by position.
///
/// Only cursors belonging to the same list and parked on the same node are
/// considered equal.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.at == other.at
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: 'a> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("at", &self.at).finish()
    }
}

impl<'a, T: 'a> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("at", &self.at).finish()
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, at: NodeRef) -> Self {
        Self { list, at }
    }

    /// A mutable reference to the value at the current node, or
    /// [`ListError::InvalidCursorPosition`] if the cursor is at a boundary
    /// sentinel.
    ///
    /// This is how elements are mutated during traversal; the borrow it
    /// returns is tied to the cursor, so the linked structure cannot change
    /// underneath it.
    pub fn value_mut(&mut self) -> Result<&mut T, ListError> {
        let index = self.list.resolve(self.at)?;
        if index == START || index == END {
            return Err(ListError::InvalidCursorPosition);
        }
        Ok(self.list.value_of_mut(index))
    }

    /// Removes the current node from the list and repositions the cursor at
    /// the node's former successor (the `end` sentinel if there is none).
    ///
    /// Fails with [`ListError::InvalidCursorPosition`] if the cursor is at a
    /// boundary sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
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
    /// assert_eq!(cursor.remove_and_next(), Ok(1));
    /// assert_eq!(cursor.value(), Ok(&2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove_and_next(&mut self) -> Result<T, ListError> {
        let index = self.list.resolve(self.at)?;
        if index == START || index == END {
            return Err(ListError::InvalidCursorPosition);
        }
        let next = self.list.next_of(index);
        let value = self.list.detach_node(index);
        self.at = self.list.node_ref(next);
        Ok(value)
    }

    /// Removes the current node from the list and repositions the cursor at
    /// the node's former predecessor (the `start` sentinel if there is
    /// none).
    ///
    /// Fails with [`ListError::InvalidCursorPosition`] if the cursor is at a
    /// boundary sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
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
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove_and_prev(&mut self) -> Result<T, ListError> {
        let index = self.list.resolve(self.at)?;
        if index == START || index == END {
            return Err(ListError::InvalidCursorPosition);
        }
        let prev = self.list.prev_of(index);
        let value = self.list.detach_node(index);
        self.at = self.list.node_ref(prev);
        Ok(value)
    }

    /// Inserts a new element immediately before the current node and
    /// returns a handle to it. The cursor does not move.
    ///
    /// Inserting before the `end` sentinel appends to the list. Fails with
    /// [`ListError::InvalidCursorPosition`] at the `start` sentinel, which
    /// nothing can precede.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_back_mut();
    /// cursor.insert_before(2).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_before(&mut self, value: T) -> Result<NodeRef, ListError> {
        let index = self.list.resolve(self.at)?;
        if index == START {
            return Err(ListError::InvalidCursorPosition);
        }
        let prev = self.list.prev_of(index);
        let new = self.list.attach_node(prev, index, value);
        Ok(self.list.node_ref(new))
    }

    /// Inserts a new element immediately after the current node and returns
    /// a handle to it. The cursor does not move.
    ///
    /// Inserting after the `start` sentinel prepends to the list. Fails
    /// with [`ListError::InvalidCursorPosition`] at the `end` sentinel,
    /// which nothing can follow.
    pub fn insert_after(&mut self, value: T) -> Result<NodeRef, ListError> {
        let index = self.list.resolve(self.at)?;
        if index == END {
            return Err(ListError::InvalidCursorPosition);
        }
        let next = self.list.next_of(index);
        let new = self.list.attach_node(index, next, value);
        Ok(self.list.node_ref(new))
    }
}
