use crate::error::Result;
use crate::list::{CharList, ListId, NodeId};

/// A position in a [`CharList`].
///
/// A `Cursor` points either at a node of one particular list, or past the
/// end of it. It does not borrow the list: it is a small `Copy` handle, so
/// any number of cursors can coexist and be moved independently, and the
/// list stays free to be mutated while they exist.
///
/// Reading or moving a cursor always goes through the list it came from.
/// Once the node it points at is deleted (or the list is cleared), the
/// cursor is *stale* and every use of it fails with
/// [`Error::StaleCursor`]. Using it with another list fails with
/// [`Error::ForeignCursor`].
///
/// # Examples
///
/// Here is a simple example showing how the cursors work.
/// ```
/// use char_list::{CharList, Error};
///
/// let mut list: CharList = "ABC".parse().unwrap();
///
/// // Create a cursor at start: [|A B C]
/// let mut cursor = list.cursor_start();
/// assert_eq!(list.get(&cursor), Ok(Some('A')));
///
/// // Move cursor forward: [A|B C]
/// assert_eq!(list.move_next(&mut cursor), Ok(true));
/// assert_eq!(list.get(&cursor), Ok(Some('B')));
///
/// // A second cursor is not affected by the first one.
/// let end = list.cursor_end();
/// assert!(end.is_end());
/// assert_eq!(list.get(&end), Ok(None));
///
/// // Deleting the node under the cursor invalidates it.
/// list.delete_first('B');
/// assert_eq!(list.get(&cursor), Err(Error::StaleCursor));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) list: ListId,
    pub(crate) node: Option<NodeId>,
}

impl Cursor {
    pub(crate) fn new(list: ListId, node: Option<NodeId>) -> Self {
        Self { list, node }
    }

    /// Returns `true` if the cursor is past the end of its list.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

impl CharList {
    /// Provides a cursor at the first node.
    ///
    /// The cursor is past the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let list: CharList = "xyz".parse().unwrap();
    /// assert_eq!(list.get(&list.cursor_start()), Ok(Some('x')));
    /// assert!(CharList::new().cursor_start().is_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor {
        Cursor::new(self.id(), self.head)
    }

    /// Provides a cursor past the last node.
    pub fn cursor_end(&self) -> Cursor {
        Cursor::new(self.id(), None)
    }

    /// Returns the character under the cursor, or `None` if the cursor is
    /// past the end.
    pub fn get(&self, cursor: &Cursor) -> Result<Option<char>> {
        Ok(self.resolve(cursor)?.map(|id| self.nodes[id].element))
    }

    /// Returns the character after the cursor, or `None` if the cursor is
    /// at the last node or past the end.
    pub fn peek_next(&self, cursor: &Cursor) -> Result<Option<char>> {
        let next = self.resolve(cursor)?.and_then(|id| self.next_of(id));
        Ok(next.map(|id| self.nodes[id].element))
    }

    /// Returns the character before the cursor. Past the end, that is the
    /// last character of the list.
    pub fn peek_prev(&self, cursor: &Cursor) -> Result<Option<char>> {
        let prev = match self.resolve(cursor)? {
            Some(id) => self.prev_of(id),
            None => self.tail,
        };
        Ok(prev.map(|id| self.nodes[id].element))
    }

    /// Move the cursor to the next node, or past the end from the last
    /// node. Returns `false`, leaving the cursor put, if it is already past
    /// the end.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let list: CharList = "ab".parse().unwrap();
    /// let mut cursor = list.cursor_start();
    ///
    /// assert_eq!(list.move_next(&mut cursor), Ok(true));
    /// assert_eq!(list.move_next(&mut cursor), Ok(true));
    /// assert!(cursor.is_end());
    /// assert_eq!(list.move_next(&mut cursor), Ok(false));
    /// ```
    pub fn move_next(&self, cursor: &mut Cursor) -> Result<bool> {
        match self.resolve(cursor)? {
            Some(id) => {
                cursor.node = self.next_of(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Move the cursor to the previous node. From past the end it moves to
    /// the last node. Returns `false`, leaving the cursor put, if it is at
    /// the first node or the list is empty.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let list: CharList = "ab".parse().unwrap();
    /// let mut cursor = list.cursor_end();
    ///
    /// assert_eq!(list.move_prev(&mut cursor), Ok(true));
    /// assert_eq!(list.get(&cursor), Ok(Some('b')));
    /// assert_eq!(list.move_prev(&mut cursor), Ok(true));
    /// assert_eq!(list.move_prev(&mut cursor), Ok(false));
    /// assert_eq!(list.get(&cursor), Ok(Some('a')));
    /// ```
    pub fn move_prev(&self, cursor: &mut Cursor) -> Result<bool> {
        let prev = match self.resolve(cursor)? {
            Some(id) => self.prev_of(id),
            None => self.tail,
        };
        match prev {
            Some(_) => {
                cursor.node = prev;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
