use crate::error::Result;
use crate::list::cursor::Cursor;
use crate::list::{CharList, ListId, NodeId};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl PartialEq for CharList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for CharList {}

impl PartialOrd for CharList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharList {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl PartialEq<str> for CharList {
    fn eq(&self, other: &str) -> bool {
        self.iter().eq(other.chars())
    }
}

impl PartialEq<&str> for CharList {
    fn eq(&self, other: &&str) -> bool {
        self.iter().eq(other.chars())
    }
}

/// The clone is a separate list: cursors of `self` are foreign to it.
impl Clone for CharList {
    fn clone(&self) -> Self {
        Self {
            id: ListId::next(),
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            #[cfg(feature = "length")]
            len: self.len,
        }
    }
}

impl Hash for CharList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for c in self {
            c.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

// Searching
impl CharList {
    /// Returns `true` if the `CharList` contains the character `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let list: CharList = "abc".parse().unwrap();
    /// assert!(list.contains('b'));
    /// assert!(!list.contains('z'));
    /// ```
    pub fn contains(&self, target: char) -> bool {
        self.iter().any(|c| c == target)
    }

    /// Counts the occurrences of `target`.
    pub fn count(&self, target: char) -> usize {
        self.iter().filter(|&c| c == target).count()
    }

    /// Walk `next` links from `start` (inclusive) and return the first node
    /// holding `target`.
    fn find_from(&self, start: Option<NodeId>, target: char) -> Option<NodeId> {
        let mut current = start;
        while let Some(id) = current {
            if self.nodes[id].element == target {
                return Some(id);
            }
            current = self.next_of(id);
        }
        None
    }
}

// Insertion
impl CharList {
    /// Insert `value` right after the first `target` found at or after the
    /// cursor, and move the cursor onto the inserted node.
    ///
    /// The scan only walks forward and never wraps around. If no `target`
    /// is found (or the cursor is past the end), neither the list nor the
    /// cursor changes and `Ok(false)` is returned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleCursor`] / [`Error::ForeignCursor`] if the cursor
    ///   cannot be used with this list;
    /// - [`Error::AllocationFailure`] if the new node cannot be allocated,
    ///   in which case the list and the cursor are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "HelloWorld!".parse().unwrap();
    /// let mut cursor = list.cursor_start();
    ///
    /// assert_eq!(list.insert_after_first(&mut cursor, 'o', ' '), Ok(true));
    /// assert_eq!(list.to_string(), "Hello World!");
    /// assert_eq!(list.get(&cursor), Ok(Some(' ')));
    ///
    /// // Continue from the cursor: the next 'o' is the one in "World".
    /// assert_eq!(list.insert_after_first(&mut cursor, 'o', '-'), Ok(true));
    /// assert_eq!(list.to_string(), "Hello Wo-rld!");
    ///
    /// assert_eq!(list.insert_after_first(&mut cursor, 'z', '-'), Ok(false));
    /// ```
    ///
    /// [`Error::StaleCursor`]: crate::Error::StaleCursor
    /// [`Error::ForeignCursor`]: crate::Error::ForeignCursor
    /// [`Error::AllocationFailure`]: crate::Error::AllocationFailure
    pub fn insert_after_first(
        &mut self,
        cursor: &mut Cursor,
        target: char,
        value: char,
    ) -> Result<bool> {
        let start = self.resolve(cursor)?;
        match self.find_from(start, target) {
            Some(found) => {
                let inserted = self.attach_node(Some(found), self.next_of(found), value)?;
                cursor.node = Some(inserted);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Insert `value` after every `target` found at or after `from`, and
    /// return the number of insertions.
    ///
    /// After each insertion the walk resumes at the node that followed the
    /// match, so inserted nodes are never matched themselves, even when
    /// `value == target`. The cursor itself is not moved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) stack.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleCursor`] / [`Error::ForeignCursor`] if the cursor
    ///   cannot be used with this list;
    /// - [`Error::AllocationFailure`] if a node cannot be allocated. The
    ///   insertions made before the failure are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "Hello World!".parse().unwrap();
    /// let start = list.cursor_start();
    ///
    /// assert_eq!(list.insert_after_all(&start, 'l', 'X'), Ok(3));
    /// assert_eq!(list.to_string(), "HelXlXo WorlXd!");
    ///
    /// // Inserting the target itself does not cascade.
    /// let mut list: CharList = "aa".parse().unwrap();
    /// let start = list.cursor_start();
    /// assert_eq!(list.insert_after_all(&start, 'a', 'a'), Ok(2));
    /// assert_eq!(list.to_string(), "aaaa");
    /// ```
    ///
    /// [`Error::StaleCursor`]: crate::Error::StaleCursor
    /// [`Error::ForeignCursor`]: crate::Error::ForeignCursor
    /// [`Error::AllocationFailure`]: crate::Error::AllocationFailure
    pub fn insert_after_all(&mut self, from: &Cursor, target: char, value: char) -> Result<usize> {
        let mut current = self.resolve(from)?;
        let mut inserted = 0_usize;
        while let Some(found) = self.find_from(current, target) {
            let next = self.next_of(found);
            self.attach_node(Some(found), next, value)?;
            inserted += 1;
            current = next;
        }
        log::debug!("inserted {:?} after {} x {:?}", value, inserted, target);
        Ok(inserted)
    }
}

// Deletion
impl CharList {
    /// Remove the first `target` in the list, scanning from the head.
    /// Returns `false` if there is none.
    ///
    /// Only one character is removed per call.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "a b c".parse().unwrap();
    /// assert!(list.delete_first(' '));
    /// assert_eq!(list.to_string(), "ab c");
    /// assert!(!list.delete_first('z'));
    /// ```
    pub fn delete_first(&mut self, target: char) -> bool {
        match self.find_from(self.head, target) {
            Some(found) => {
                self.detach_node(found);
                true
            }
            None => false,
        }
    }

    /// Remove every `target` at or after `from`, and return the number of
    /// removed characters.
    ///
    /// Each removal continues at the removed node's successor. If `from`
    /// points at a `target`, its node is removed too and `from` becomes
    /// stale.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) stack.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`] / [`Error::ForeignCursor`] if the cursor
    /// cannot be used with this list. Nothing is removed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::CharList;
    ///
    /// let mut list: CharList = "XXaXbXX".parse().unwrap();
    /// let start = list.cursor_start();
    /// assert_eq!(list.delete_all(&start, 'X'), Ok(6));
    /// assert_eq!(list.to_string(), "ab");
    /// ```
    ///
    /// [`Error::StaleCursor`]: crate::Error::StaleCursor
    /// [`Error::ForeignCursor`]: crate::Error::ForeignCursor
    pub fn delete_all(&mut self, from: &Cursor, target: char) -> Result<usize> {
        let start = self.resolve(from)?;
        Ok(self.delete_all_from(start, target))
    }

    pub(crate) fn delete_all_from(&mut self, start: Option<NodeId>, target: char) -> usize {
        let mut current = start;
        let mut deleted = 0_usize;
        while let Some(found) = self.find_from(current, target) {
            current = self.detach_node(found).next;
            deleted += 1;
        }
        log::debug!("deleted {} x {:?}", deleted, target);
        deleted
    }
}
