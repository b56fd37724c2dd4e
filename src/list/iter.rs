use std::iter::FusedIterator;

use super::{Node, SortedList};
use crate::value::Value;

impl<C> IntoIterator for SortedList<C> {
    type Item = Value;

    type IntoIter = IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<C> {
    // There is no point rewriting the traversal when the iterator can just hold the list and pop
    // the front off it.
    pub(crate) list: SortedList<C>,
}

impl<C> Iterator for IntoIter<C> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<C> FusedIterator for IntoIter<C> {}

impl<C> ExactSizeIterator for IntoIter<C> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, C> IntoIterator for &'a SortedList<C> {
    type Item = &'a Value;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

/// A borrowed cursor over a [`SortedList`], yielding values in sorted order.
///
/// Each cursor is self-contained: it holds its own position, so any number of them can run over
/// one list at the same time and restarting is just calling [`SortedList::iter`] again.
pub struct Iter<'a> {
    pub(crate) next: Option<&'a Node>,
    pub(crate) remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.remaining
    }
}
