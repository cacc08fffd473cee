use crate::list::{CharList, NodeId};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the characters of a `CharList`.
///
/// It walks `next` links from `front` and `prev` links from `back`; both
/// ends are inclusive, and they are reset to `None` together once they meet,
/// so the two directions never yield the same node twice.
///
/// The iterator borrows the list immutably, so the list cannot be mutated
/// while it is alive.
///
/// # Examples
///
/// ```compile_fail
/// use char_list::CharList;
///
/// let mut list: CharList = "abc".parse().unwrap();
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back('d').unwrap();
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a CharList,
    front: Option<NodeId>,
    back: Option<NodeId>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a CharList) -> Self {
        Self {
            list,
            front: list.head,
            back: list.tail,
            #[cfg(feature = "length")]
            len: list.len(),
        }
    }

    /// Yield `id` and mark the range as exhausted if it was the last node
    /// left in it.
    fn yield_node(&mut self, id: NodeId) -> char {
        if self.front == self.back {
            self.front = None;
            self.back = None;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        self.list.nodes[id].element
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<String>()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = char;

    /// Return `*front` and move `front` to `front.next`, or return `None`
    /// if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.front?;
        let element = self.yield_node(id);
        if self.front.is_some() {
            self.front = self.list.next_of(id);
        }
        Some(element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Return `*back` and move `back` to `back.prev`, or return `None`
    /// if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.back?;
        let element = self.yield_node(id);
        if self.back.is_some() {
            self.back = self.list.prev_of(id);
        }
        Some(element)
    }
}

#[cfg(feature = "length")]
impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the characters of a `CharList`.
///
/// This `struct` is created by the [`into_iter`] method on [`CharList`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: CharList::into_iter
pub struct IntoIter {
    list: CharList,
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl Iterator for IntoIter {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

#[cfg(feature = "length")]
impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for CharList {
    type Item = char;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a> IntoIterator for &'a CharList {
    type Item = char;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::CharList;

    #[test]
    fn test_iter() {
        fn test_iter(input: &str, mid: usize) {
            let vec: Vec<char> = input.chars().collect();
            let list: CharList = input.parse().unwrap();
            #[cfg(feature = "length")]
            let len = vec.len();

            let mut iter = list.iter();
            for (_i, &item) in vec.iter().enumerate() {
                assert_eq!(iter.next(), Some(item));
                #[cfg(feature = "length")]
                assert_eq!(iter.len(), len - _i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);

            // meet in the middle
            let mut iter = list.iter();
            for &item in vec.iter().take(mid) {
                assert_eq!(iter.next(), Some(item));
            }
            let mut iter = iter.rev();
            for (_i, &item) in vec.iter().skip(mid).rev().enumerate() {
                assert_eq!(iter.next(), Some(item));
                #[cfg(feature = "length")]
                assert_eq!(iter.len(), len - mid - _i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
        }

        fn test_back_iter(input: &str) {
            let list: CharList = input.parse().unwrap();
            let expected: String = input.chars().rev().collect();
            assert_eq!(list.iter().rev().collect::<String>(), expected);
            assert_eq!(list.iter_rev().collect::<String>(), expected);
            // restartable
            assert_eq!(list.iter_rev().collect::<String>(), expected);
        }

        for (input, mid) in [
            ("0123456789", 10),
            ("0123456789", 8),
            ("0123456789", 5),
            ("0123456789", 2),
            ("0123456789", 0),
            ("01", 2),
            ("01", 1),
            ("01", 0),
            ("0", 1),
            ("0", 0),
            ("", 0),
        ] {
            test_iter(input, mid);
            test_back_iter(input);
        }
    }

    #[test]
    fn test_into_iter() {
        let list: CharList = "abcd".parse().unwrap();
        let mut iter = list.into_iter();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next_back(), Some('d'));
        assert_eq!(iter.collect::<String>(), "bc");

        let list: CharList = "xyz".parse().unwrap();
        assert_eq!(list.into_iter().last(), Some('z'));
    }

    #[test]
    fn test_borrowed_into_iter() {
        let list: CharList = "hey".parse().unwrap();
        let mut out = String::new();
        for c in &list {
            out.push(c);
        }
        assert_eq!(out, "hey");
        assert_eq!(format!("{:?}", list.iter()), "Iter(\"hey\")");
    }
}
