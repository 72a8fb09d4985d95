use itertools::Itertools;

use super::{Cursor, Direction, SequenceIterator};
use crate::container::Container;
use crate::error::Result;

/// Walks a container in sorted order.
///
/// The order is computed once at construction. Equal items keep their
/// insertion order, and [`key`](SequenceIterator::key) is the position
/// within the sorted order rather than the container index.
#[derive(Debug)]
pub struct AlphabeticalIterator<'a, T: ?Sized> {
    order: Vec<&'a T>,
    cursor: Cursor,
}

impl<'a, T> AlphabeticalIterator<'a, T>
where
    T: Ord + ?Sized,
{
    pub fn new<C>(collection: &'a C, direction: Direction) -> Self
    where
        C: Container<Item = T> + ?Sized,
    {
        let order: Vec<&'a T> = (0..collection.count())
            .filter_map(|index| collection.item_at(index))
            .sorted()
            .collect();
        let cursor = Cursor::new(order.len(), direction);
        Self { order, cursor }
    }
}

impl<'a, T> SequenceIterator<'a> for AlphabeticalIterator<'a, T>
where
    T: ?Sized + 'a,
{
    type Item = T;

    fn current(&self) -> Result<&'a T> {
        let index = self.cursor.index()?;
        Ok(self.order[index])
    }

    fn next(&mut self) -> Result<&'a T> {
        let item = self.current()?;
        self.cursor.advance();
        Ok(item)
    }

    fn key(&self) -> isize {
        self.cursor.position
    }

    fn valid(&self) -> bool {
        self.cursor.valid()
    }

    fn rewind(&mut self) {
        self.cursor.rewind();
    }
}

impl<T: ?Sized> Clone for AlphabeticalIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            cursor: self.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::WordsCollection;

    #[test]
    fn test_sorted_order() {
        let words: WordsCollection = ["pear", "apple", "fig"].into_iter().collect();
        let sorted: Vec<&str> = AlphabeticalIterator::new(&words, Direction::Forward)
            .traverse()
            .collect();
        assert_eq!(sorted, ["apple", "fig", "pear"]);
    }

    #[test]
    fn test_reverse_sorted_order() {
        let words: WordsCollection = ["pear", "apple", "fig"].into_iter().collect();
        let mut it = AlphabeticalIterator::new(&words, Direction::Reverse);
        assert_eq!(it.key(), 2);
        assert_eq!(it.next().unwrap(), "pear");
        assert_eq!(it.next().unwrap(), "fig");
        assert_eq!(it.next().unwrap(), "apple");
        assert!(!it.valid());
        assert!(it.current().is_err());
    }

    #[test]
    fn test_duplicates_are_all_visited() {
        let data = vec![3, 1, 3, 2, 1];
        let items: Vec<i32> = AlphabeticalIterator::new(&data, Direction::Forward)
            .traverse()
            .copied()
            .collect();
        assert_eq!(items, [1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_container_is_left_untouched() {
        let data = vec!["b", "a"];
        let mut it = AlphabeticalIterator::new(&data, Direction::Forward);
        it.next().unwrap();
        it.rewind();
        assert_eq!(it.current().unwrap(), &"a");
        assert_eq!(data, ["b", "a"]);
    }
}
