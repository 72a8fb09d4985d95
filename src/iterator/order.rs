use std::fmt;

use super::{Cursor, Direction, SequenceIterator};
use crate::container::Container;
use crate::error::{PatternError, Result};

/// Walks a container in insertion order, forward or in reverse.
pub struct OrderIterator<'a, C: ?Sized> {
    collection: &'a C,
    cursor: Cursor,
}

impl<'a, C> OrderIterator<'a, C>
where
    C: Container + ?Sized,
{
    pub fn new(collection: &'a C, direction: Direction) -> Self {
        Self {
            collection,
            cursor: Cursor::new(collection.count(), direction),
        }
    }

    pub fn forward(collection: &'a C) -> Self {
        Self::new(collection, Direction::Forward)
    }

    pub fn reverse(collection: &'a C) -> Self {
        Self::new(collection, Direction::Reverse)
    }

    pub fn direction(&self) -> Direction {
        self.cursor.direction
    }
}

impl<'a, C> SequenceIterator<'a> for OrderIterator<'a, C>
where
    C: Container + ?Sized,
    C::Item: 'a,
{
    type Item = C::Item;

    fn current(&self) -> Result<&'a C::Item> {
        let index = self.cursor.index()?;
        self.collection
            .item_at(index)
            .ok_or_else(|| PatternError::out_of_range(self.cursor.position, self.cursor.count))
    }

    fn next(&mut self) -> Result<&'a C::Item> {
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

// Manual impls: deriving would demand `C: Clone`/`C: Debug`.
impl<C: ?Sized> Clone for OrderIterator<'_, C> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            cursor: self.cursor,
        }
    }
}

impl<C: ?Sized> fmt::Debug for OrderIterator<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderIterator")
            .field("position", &self.cursor.position)
            .field("count", &self.cursor.count)
            .field("direction", &self.cursor.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_positions() {
        let data = vec!["x", "y", "z"];
        assert_eq!(OrderIterator::forward(&data).key(), 0);
        assert_eq!(OrderIterator::reverse(&data).key(), 2);
    }

    #[test]
    fn test_empty_container_is_never_valid() {
        let data: Vec<u32> = Vec::new();
        let forward = OrderIterator::forward(&data);
        let reverse = OrderIterator::reverse(&data);

        assert!(!forward.valid());
        assert!(!reverse.valid());
        assert_eq!(reverse.key(), -1);
        assert!(matches!(
            reverse.current(),
            Err(PatternError::OutOfRange {
                position: -1,
                count: 0
            })
        ));
    }

    #[test]
    fn test_rewind_keeps_direction() {
        let data = vec![1, 2, 3];
        let mut it = OrderIterator::reverse(&data);
        it.next().unwrap();
        it.next().unwrap();
        assert_eq!(it.key(), 0);

        it.rewind();
        assert_eq!(it.direction(), Direction::Reverse);
        assert_eq!(it.current().unwrap(), &3);
    }

    #[test]
    fn test_key_tracks_logical_index() {
        let data = vec!['a', 'b', 'c'];
        let mut it = OrderIterator::reverse(&data);
        let mut pairs = Vec::new();
        while it.valid() {
            let key = it.key();
            pairs.push((key, *it.next().unwrap()));
        }
        assert_eq!(pairs, [(2, 'c'), (1, 'b'), (0, 'a')]);
    }

    #[test]
    fn test_over_slice() {
        let data = [5u8, 6, 7];
        let slice: &[u8] = &data;
        let mut it = OrderIterator::forward(slice);
        assert_eq!(it.next().unwrap(), &5);
        assert_eq!(it.current().unwrap(), &6);
    }

    #[test]
    fn test_clone_is_independent() {
        let data = vec![1, 2];
        let mut original = OrderIterator::forward(&data);
        let copy = original.clone();
        original.next().unwrap();

        assert_eq!(original.key(), 1);
        assert_eq!(copy.key(), 0);
        assert!(format!("{copy:?}").contains("position: 0"));
    }
}
