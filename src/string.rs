//! A string built on top of [`CharList`].

use crate::error::Result;
use crate::list::cursor::Cursor;
use crate::list::CharList;
use std::fmt;
use std::io;
use std::str::FromStr;

/// A mutable string whose characters live in a [`CharList`].
///
/// Every operation delegates to the list. Searches start from the first
/// character unless a [`Cursor`] says otherwise.
///
/// # Examples
///
/// ```
/// use char_list::StringLibrary;
///
/// let mut s = StringLibrary::create("Hello").unwrap();
/// s.append_text("World!").unwrap();
/// assert_eq!(s.render(), "HelloWorld!");
/// assert_eq!(s.render_reverse(), "!dlroWolleH");
///
/// let mut cursor = s.cursor();
/// s.insert_after_first(&mut cursor, 'o', ' ').unwrap();
/// assert_eq!(s.render(), "Hello World!");
///
/// s.insert_after_all('l', 'X').unwrap();
/// assert_eq!(s.render(), "HelXlXo WorlXd!");
///
/// s.delete_first(' ');
/// s.delete_all('X');
/// assert_eq!(s.render(), "HelloWorld!");
///
/// s.destroy();
/// assert!(s.is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLibrary {
    list: CharList,
}

impl StringLibrary {
    /// An empty string.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a string holding the characters of `text`, in order.
    pub fn create(text: &str) -> Result<Self> {
        let mut s = Self::new();
        s.append_text(text)?;
        Ok(s)
    }

    /// Append the characters of `text`, in order.
    ///
    /// On allocation failure the characters appended so far are kept.
    pub fn append_text(&mut self, text: &str) -> Result<()> {
        self.list.try_extend(text.chars())
    }

    /// The string, front to back.
    pub fn render(&self) -> String {
        self.list.iter().collect()
    }

    /// The string, back to front.
    pub fn render_reverse(&self) -> String {
        self.list.iter_rev().collect()
    }

    /// Write the string followed by a newline.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Write the reversed string followed by a newline.
    pub fn print_reverse<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render_reverse())
    }

    /// A cursor at the first character, for [`insert_after_first`].
    ///
    /// [`insert_after_first`]: StringLibrary::insert_after_first
    pub fn cursor(&self) -> Cursor {
        self.list.cursor_start()
    }

    /// See [`CharList::insert_after_first`].
    pub fn insert_after_first(
        &mut self,
        cursor: &mut Cursor,
        target: char,
        value: char,
    ) -> Result<bool> {
        self.list.insert_after_first(cursor, target, value)
    }

    /// Insert `value` after every `target` in the string. See
    /// [`CharList::insert_after_all`].
    pub fn insert_after_all(&mut self, target: char, value: char) -> Result<usize> {
        let start = self.list.cursor_start();
        self.list.insert_after_all(&start, target, value)
    }

    /// See [`CharList::delete_first`].
    pub fn delete_first(&mut self, target: char) -> bool {
        self.list.delete_first(target)
    }

    /// Remove every `target` from the string, returning how many were
    /// removed.
    pub fn delete_all(&mut self, target: char) -> usize {
        self.list.delete_all_from(self.list.head, target)
    }

    /// Release every character. The string is empty afterwards and can be
    /// reused.
    ///
    /// Like [`CharList::clear`], this keeps the node storage for later
    /// appends; the memory itself is freed when the string is dropped.
    pub fn destroy(&mut self) {
        self.list.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[cfg(feature = "length")]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn as_list(&self) -> &CharList {
        &self.list
    }

    pub fn as_list_mut(&mut self) -> &mut CharList {
        &mut self.list
    }

    pub fn into_list(self) -> CharList {
        self.list
    }
}

impl From<CharList> for StringLibrary {
    fn from(list: CharList) -> Self {
        Self { list }
    }
}

impl FromStr for StringLibrary {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::create(s)
    }
}

impl fmt::Display for StringLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl fmt::Debug for StringLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StringLibrary").field(&self.render()).finish()
    }
}
