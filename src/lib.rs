//! This crate provides a mutable string stored as a doubly-linked list of
//! single-character nodes.
//!
//! The [`CharList`] allows inserting and removing characters next to a known
//! node in constant time. In compromise, searching for a character takes
//! *O*(*n*) time. [`StringLibrary`] wraps a list with string-level
//! operations.
//!
//! Here is a quick example showing how the string works.
//!
//! ```
//! use char_list::StringLibrary;
//!
//! let mut s = StringLibrary::create("Hello").unwrap();
//! s.append_text("World!").unwrap();
//! assert_eq!(s.render(), "HelloWorld!");
//! assert_eq!(s.render_reverse(), "!dlroWolleH");
//!
//! let mut cursor = s.cursor();
//! s.insert_after_first(&mut cursor, 'o', ' ').unwrap(); // first 'o' only
//! assert_eq!(s.render(), "Hello World!");
//!
//! s.insert_after_all('l', 'X').unwrap(); // every 'l'
//! assert_eq!(s.render(), "HelXlXo WorlXd!");
//!
//! s.delete_first(' ');
//! s.delete_all('X');
//! assert_eq!(s.render(), "HelloWorld!");
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a list are kept in slots of a single vector owned by the
//! list, and link to each other by slot handles instead of pointers:
//! ```text
//!   head ───────┐                                   tail ──────────────┐
//!               ↓                                                      ↓
//!   slot 0      slot 1      slot 2      slot 3      slot 4      slot 5
//! ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐
//! │ gen 0   │ │ gen 0   │ │ gen 1   │ │ gen 0   │ │ gen 2   │ │ gen 0   │
//! │ 'e'     │ │ 'H'     │ │ vacant  │ │ 'l'     │ │ vacant  │ │ 'o'     │
//! │ next: 3 │ │ next: 0 │ │ free: 4 │ │ next: 5 │ │ free: - │ │ next: - │
//! │ prev: 1 │ │ prev: - │ │         │ │ prev: 0 │ │         │ │ prev: 3 │
//! └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘
//!                             ↑
//!   free ─────────────────────┘
//! ```
//! The `CharList` contains:
//! - the slot vector;
//! - `head` and `tail`, both absent if and only if the list is empty;
//! - a length field `len` indicating the length of the list. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! char_list = { default-features = false }
//! ```
//!
//! Each occupied slot holds:
//! - the `next` handle of the following node (absent for the tail);
//! - the `prev` handle of the preceding node (absent for the head);
//! - the character itself.
//!
//! `prev` never owns anything: the list owns every slot, and releases a
//! node by making its slot vacant. Vacant slots are chained into a free list
//! and reused by later insertions.
//!
//! A node handle is a slot index plus a generation. Vacating a slot bumps
//! its generation, so a handle to a removed node can never reach the node
//! that reuses its slot. A slot whose generation cannot be bumped any further
//! is retired instead of reused. Handles never leave the crate on their own:
//! callers hold [`Cursor`]s, which also name the list they belong to.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators. These
//! are double-ended iterators: `iter()` walks `next` links from the head, and
//! `iter().rev()` walks `prev` links from the tail.
//!
//! ```
//! use char_list::CharList;
//!
//! let list: CharList = "abc".parse().unwrap();
//! assert_eq!(list.iter().collect::<String>(), "abc");
//! assert_eq!(list.iter().rev().collect::<String>(), "cba");
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] is a position in a list, decoupled from the list itself: it
//! does not borrow it, can be copied freely, and any number of cursors can be
//! used at once. Mutations such as [`CharList::insert_after_first`] accept and
//! reposition a cursor.
//!
//! A cursor whose node has been removed is *stale*: using it returns
//! [`Error::StaleCursor`] rather than reading freed memory.
//!
//! ```
//! use char_list::{CharList, Error};
//!
//! let mut list: CharList = "abc".parse().unwrap();
//! let mut cursor = list.cursor_start();
//!
//! assert_eq!(list.insert_after_first(&mut cursor, 'b', '!'), Ok(true));
//! assert_eq!(list.to_string(), "ab!c");
//! assert_eq!(list.get(&cursor), Ok(Some('!')));
//!
//! let start = list.cursor_start();
//! assert_eq!(list.delete_all(&start, '!'), Ok(1));
//! assert_eq!(list.get(&cursor), Err(Error::StaleCursor));
//! ```
//!
//! # Errors
//!
//! A missing target character is not an error: insertions and deletions
//! report whether (or how often) they matched. Node allocation failure is
//! returned as [`Error::AllocationFailure`] instead of aborting.
//!
//! [`Cursor`]: crate::list::cursor::Cursor

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::CharList;
#[doc(inline)]
pub use string::StringLibrary;

pub mod list;
pub mod string;

mod error;
