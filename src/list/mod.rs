use std::fmt::{self, Debug, Display, Formatter, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::list::arena::{Arena, Node};
use crate::list::cursor::Cursor;
use crate::{IntoIter, Iter};

pub(crate) use arena::NodeId;

pub mod cursor;
pub mod iterator;

mod algorithms;
mod arena;

/// The `CharList` is a doubly-linked list of characters, one character per
/// node. It allows inserting and removing characters next to a known node in
/// constant time. In compromise, finding a character takes *O*(*n*) time.
///
/// The `CharList` contains:
/// - the node storage, from which every node is allocated;
/// - `head` and `tail`, the first and the last node, both `None` if and only
///   if the list is empty;
/// - a length field `len` indicating the length of the list. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// char_list = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - `prev`/`next`: the links of a node, `None` past either end of the list;
/// - `target`: the character being searched for;
/// - `value`: the character being inserted.
pub struct CharList {
    id: ListId,
    pub(crate) nodes: Arena,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

/// Identity of a list, so that cursors can tell which list they came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    fn next() -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
        ListId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// private methods
impl CharList {
    pub(crate) fn id(&self) -> ListId {
        self.id
    }

    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].next
    }

    pub(crate) fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].prev
    }

    /// Link `prev` and `next` to each other. A `None` side stands for the
    /// end of the list, so `head` or `tail` is updated instead.
    fn connect(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Allocate a node holding `element` and attach it between `prev` and
    /// `next`, which must be adjacent (only checked in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// On allocation failure the list is left untouched.
    pub(crate) fn attach_node(
        &mut self,
        prev: Option<NodeId>,
        next: Option<NodeId>,
        element: char,
    ) -> Result<NodeId> {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.insert(Node {
            next,
            prev,
            element,
        })?;
        self.connect(prev, Some(node));
        self.connect(Some(node), next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        log::trace!("attached {:?} ({:?}) after {:?}", node, element, prev);
        Ok(node)
    }

    /// Detach the node `id` from the list and release it, returning its
    /// contents.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list.
    pub(crate) fn detach_node(&mut self, id: NodeId) -> Node {
        let node = self.nodes.remove(id);
        self.connect(node.prev, node.next);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        log::trace!("detached {:?} ({:?})", id, node.element);
        node
    }

    /// Turn a cursor into the node it points at, checking that it was made
    /// by this list and that its node is still alive.
    pub(crate) fn resolve(&self, cursor: &Cursor) -> Result<Option<NodeId>> {
        if cursor.list != self.id {
            return Err(Error::ForeignCursor);
        }
        match cursor.node {
            None => Ok(None),
            Some(id) if self.nodes.contains(id) => Ok(Some(id)),
            Some(_) => Err(Error::StaleCursor),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(prev) => assert_eq!(self.nodes[prev].next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(self.nodes[next].prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl CharList {
    /// Create an empty `CharList`.
    ///
    /// # Examples
    /// ```
    /// use char_list::CharList;
    /// let list = CharList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            id: ListId::next(),
            nodes: Arena::new(),
            head: None,
            tail: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `CharList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list = CharList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back('a').unwrap();
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of characters in the `CharList`. Enabled by
    /// `feature = "length"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// #![cfg(feature = "length")]
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "ab".parse().unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back('c').unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Release every node of the list, from head to tail.
    ///
    /// Every [`Cursor`] taken from the list becomes stale.
    ///
    /// The node storage itself is kept for reuse by later insertions, so the
    /// list's peak memory is only returned when the list is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::{CharList, Error};
    ///
    /// let mut list: CharList = "abc".parse().unwrap();
    /// let cursor = list.cursor_start();
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// assert_eq!(list.get(&cursor), Err(Error::StaleCursor));
    /// ```
    pub fn clear(&mut self) {
        let mut released = 0_usize;
        while let Some(id) = self.head {
            self.detach_node(id);
            released += 1;
        }
        debug_assert_eq!(self.nodes.occupied(), 0);
        log::debug!("cleared list, released {} nodes", released);
    }

    /// Provides the first character, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list = CharList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back('a').unwrap();
    /// assert_eq!(list.front(), Some('a'));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<char> {
        self.head.map(|id| self.nodes[id].element)
    }

    /// Provides the last character, or `None` if the list is empty.
    #[inline]
    pub fn back(&self) -> Option<char> {
        self.tail.map(|id| self.nodes[id].element)
    }

    /// Appends a character to the back of the list and returns a cursor at
    /// its node.
    ///
    /// On an empty list the new node becomes both head and tail; otherwise
    /// it is linked after the old tail and becomes the new tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if no node can be allocated. The
    /// list is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list = CharList::new();
    /// list.push_back('a').unwrap();
    /// list.push_back('b').unwrap();
    /// let c = list.push_back('c').unwrap();
    /// assert_eq!(list.back(), Some('c'));
    /// assert_eq!(list.get(&c), Ok(Some('c')));
    /// assert_eq!(list.to_string(), "abc");
    /// ```
    pub fn push_back(&mut self, value: char) -> Result<Cursor> {
        let node = self.attach_node(self.tail, None, value)?;
        Ok(Cursor::new(self.id, Some(node)))
    }

    /// Adds a character first in the list, and returns a cursor at its
    /// node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "bc".parse().unwrap();
    /// list.push_front('a').unwrap();
    /// assert_eq!(list.to_string(), "abc");
    /// ```
    pub fn push_front(&mut self, value: char) -> Result<Cursor> {
        let node = self.attach_node(None, self.head, value)?;
        Ok(Cursor::new(self.id, Some(node)))
    }

    /// Removes the first character and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "ab".parse().unwrap();
    /// assert_eq!(list.pop_front(), Some('a'));
    /// assert_eq!(list.pop_front(), Some('b'));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<char> {
        let head = self.head?;
        Some(self.detach_node(head).element)
    }

    /// Removes the last character and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<char> {
        let tail = self.tail?;
        Some(self.detach_node(tail).element)
    }

    /// Appends every character yielded by `iter`, stopping at the first
    /// allocation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list = CharList::new();
    /// list.try_extend("Hello".chars()).unwrap();
    /// assert_eq!(list.to_string(), "Hello");
    /// ```
    pub fn try_extend<I: IntoIterator<Item = char>>(&mut self, iter: I) -> Result<()> {
        iter.into_iter()
            .try_for_each(|value| self.push_back(value).map(drop))
    }

    /// Provides a forward iterator over the characters, walking `next` from
    /// the head. Call `.rev()` on it to walk `prev` from the tail instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let list: CharList = "abc".parse().unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some('a'));
    /// assert_eq!(iter.next(), Some('b'));
    /// assert_eq!(iter.next(), Some('c'));
    /// assert_eq!(iter.next(), None);
    ///
    /// assert_eq!(list.iter().rev().collect::<String>(), "cba");
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Provides a reverse iterator over the characters, walking `prev` from
    /// the tail. The same as `self.iter().rev()`.
    #[inline]
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_>> {
        self.iter().rev()
    }
}

impl Debug for CharList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for CharList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| f.write_char(c))
    }
}

impl Default for CharList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CharList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut list = CharList::new();
        list.try_extend(s.chars())?;
        Ok(list)
    }
}

// Ensure that `CharList` and its iterators stay thread-safe.
#[allow(dead_code)]
fn assert_send_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<CharList>();
    is_send_sync::<Iter<'_>>();
    is_send_sync::<IntoIter>();
    is_send_sync::<Cursor>();
}

#[cfg(test)]
impl CharList {
    /// Walk the list both ways and check every structural invariant.
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());

        let mut forward = Vec::new();
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            assert!(
                forward.len() <= self.nodes.occupied(),
                "cycle detected in forward walk"
            );
            assert_eq!(self.nodes[id].prev, prev, "broken back link at {:?}", id);
            forward.push(id);
            prev = current;
            current = self.nodes[id].next;
        }
        assert_eq!(prev, self.tail);

        let mut backward = Vec::new();
        let mut current = self.tail;
        while let Some(id) = current {
            assert!(backward.len() <= self.nodes.occupied());
            backward.push(id);
            current = self.nodes[id].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        assert_eq!(forward.len(), self.nodes.occupied());
        #[cfg(feature = "length")]
        assert_eq!(forward.len(), self.len);
    }
}
