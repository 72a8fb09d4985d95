//! Ordered containers that iterators traverse.
//!
//! A container only stores items. It exposes how many it holds and
//! indexed access; every traversal algorithm lives in [`crate::iterator`].

use crate::iterator::{AlphabeticalIterator, Direction, OrderIterator};

/// Count and indexed access over an ordered sequence.
pub trait Container {
    type Item: ?Sized;

    fn count(&self) -> usize;

    fn item_at(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> Container for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// A collection of words, the classic aggregate of the Iterator pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordsCollection {
    items: Vec<String>,
}

impl WordsCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn iterator(&self) -> OrderIterator<'_, Self> {
        OrderIterator::new(self, Direction::Forward)
    }

    pub fn reverse_iterator(&self) -> OrderIterator<'_, Self> {
        OrderIterator::new(self, Direction::Reverse)
    }

    pub fn alphabetical_iterator(&self) -> AlphabeticalIterator<'_, str> {
        AlphabeticalIterator::new(self, Direction::Forward)
    }
}

impl Container for WordsCollection {
    type Item = str;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WordsCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// For `for word in &collection`
impl<'a> IntoIterator for &'a WordsCollection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
