//! This crate provides a doubly-linked list whose nodes live in a slot
//! arena, with bidirectional cursors supporting *O*(1) removal during
//! traversal and a stable in-place merge sort driven by a caller-supplied
//! order predicate.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([5, 3, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//! assert_eq!(cursor.value(), Ok(&5));
//!
//! assert_eq!(cursor.remove_and_next(), Ok(5)); // remove 5, land on 3
//! assert_eq!(cursor.value(), Ok(&3));
//!
//! list.push_back(1);
//! list.sort();
//! assert_eq!(Vec::from_iter(list), vec![1, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! A doubly-linked chain is a cyclic graph of mutable references, which is
//! exactly the shape safe Rust refuses to express directly. Instead of
//! reaching for raw pointers, the list stores every node in one growable
//! slot arena and links nodes by slot index:
//!
//! ```text
//!  slot:       0         1         2         3         4
//!         ┌─────────┬─────────┬─────────┬─────────┬─────────┐
//!         │  start  │   end   │ value A │ (free)  │ value B │
//!         │ next: 2 │ next: 1 │ next: 4 │         │ next: 1 │
//!         │ prev: 0 │ prev: 4 │ prev: 0 │         │ prev: 2 │
//!         │ gen: 0  │ gen: 0  │ gen: 1  │ gen: 3  │ gen: 0  │
//!         └─────────┴─────────┴─────────┴─────────┴─────────┘
//!
//!  chain:  start ⇄ A ⇄ B ⇄ end        free list: [3]
//! ```
//!
//! Slots 0 and 1 are the permanent boundary sentinels `start` and `end`.
//! They carry no value, are created when the list is created, and survive
//! [`clear`] so the list can be reused. An empty list has `start.next ==
//! end` and `end.prev == start`.
//!
//! Removing a node frees its slot onto a free list and bumps the slot's
//! generation counter. A [`NodeRef`] — the `(index, generation)` pair a
//! cursor saves via [`position`] — therefore stops validating the moment
//! its node is unlinked, and using it afterwards reports
//! [`ListError::StaleHandle`] instead of silently reading whatever reused
//! the slot.
//!
//! # Cursors
//!
//! [`Cursor`] (shared) and [`CursorMut`] (exclusive) are bidirectional
//! position handles bound to one list. In a list with *n* elements a cursor
//! has *n* + 2 possible positions: each element, plus the two boundary
//! sentinels. Movement past either outermost element parks the cursor on
//! the adjacent sentinel; there is no wraparound, and value access on a
//! sentinel fails with [`ListError::InvalidCursorPosition`].
//!
//! [`CursorMut::remove_and_next`] and [`CursorMut::remove_and_prev`] are
//! the way to delete during traversal: they unlink the current node in
//! *O*(1) and reposition the cursor on its former neighbor.
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(0..10);
//!
//! // Drop the odd numbers in one pass.
//! let mut cursor = list.cursor_front_mut();
//! while let Ok(&value) = cursor.value() {
//!     if value % 2 == 1 {
//!         cursor.remove_and_next().unwrap();
//!     } else {
//!         cursor.move_next().unwrap();
//!     }
//! }
//! assert_eq!(Vec::from_iter(list), vec![0, 2, 4, 6, 8]);
//! ```
//!
//! # Sorting
//!
//! [`List::sort`] and [`List::sort_by`] run a stable bottom-up merge sort
//! directly on the chain: runs of doubling length are merged pairwise by
//! relinking nodes, with no auxiliary array and no value moves. The
//! predicate `keep_left_first(l, r)` returns `true` when `l` may stay
//! ordered before `r`; ties go to the left run, which preserves the
//! original relative order of equal keys.
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([(5, 'x'), (3, 'a'), (3, 'b'), (9, 'y')]);
//! list.sort_by(|l, r| l.0 <= r.0);
//!
//! // Stable: the 3-keyed elements keep their insertion order.
//! assert_eq!(
//!     Vec::from_iter(list),
//!     vec![(3, 'a'), (3, 'b'), (5, 'x'), (9, 'y')],
//! );
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns a `Result` with [`ListError`]; the
//! variants are local contract violations (empty pops, sentinel access,
//! stale handles) that always propagate to the caller and are never
//! retried internally. The crate performs no I/O and spawns no threads;
//! all operations run to completion on the calling thread.
//!
//! [`clear`]: crate::List::clear
//! [`position`]: crate::Cursor::position

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{List, NodeRef};

mod error;
pub mod list;
