//! # Iterator Pattern
//!
//! Traversal state (position and direction) lives outside the container,
//! so any number of independent traversals can run over one container,
//! each with its own strategy.
//!
//! - [`OrderIterator`]: insertion order, forward or reverse
//! - [`AlphabeticalIterator`]: sorted order, forward or reverse
//! - [`Strategy`]: picks one of the above at construction time
//! - [`Traversal`]: bridges any [`SequenceIterator`] into `std::iter::Iterator`

mod alphabetical;
mod order;
mod strategy;

pub use alphabetical::AlphabeticalIterator;
pub use order::OrderIterator;
pub use strategy::Strategy;

use std::marker::PhantomData;

use crate::error::{PatternError, Result};

/// Traversal direction of a [`SequenceIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    fn start(self, count: usize) -> isize {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => count as isize - 1,
        }
    }

    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Capability set shared by every traversal strategy.
///
/// Items are borrowed from the underlying container for `'a`, so the
/// container outlives the iterator and cannot change underneath it.
pub trait SequenceIterator<'a> {
    type Item: ?Sized + 'a;

    /// Item at the current position. Fails with
    /// [`PatternError::OutOfRange`] when [`valid`](Self::valid) is false.
    fn current(&self) -> Result<&'a Self::Item>;

    /// Returns the current item, then moves one step in the iterator's
    /// direction. Leaves the position untouched on failure.
    fn next(&mut self) -> Result<&'a Self::Item>;

    /// Logical position, independent of direction.
    fn key(&self) -> isize;

    fn valid(&self) -> bool;

    /// Back to the first position for the iterator's direction.
    fn rewind(&mut self);

    fn traverse(self) -> Traversal<'a, Self>
    where
        Self: Sized,
    {
        Traversal {
            inner: self,
            _items: PhantomData,
        }
    }
}

impl<'a, I> SequenceIterator<'a> for Box<I>
where
    I: SequenceIterator<'a> + ?Sized,
{
    type Item = I::Item;

    fn current(&self) -> Result<&'a Self::Item> {
        (**self).current()
    }

    fn next(&mut self) -> Result<&'a Self::Item> {
        (**self).next()
    }

    fn key(&self) -> isize {
        (**self).key()
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

/// Position bookkeeping shared by the concrete iterators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    position: isize,
    count: usize,
    direction: Direction,
}

impl Cursor {
    fn new(count: usize, direction: Direction) -> Self {
        Self {
            position: direction.start(count),
            count,
            direction,
        }
    }

    fn valid(&self) -> bool {
        match self.direction {
            Direction::Forward => self.position < self.count as isize,
            Direction::Reverse => self.position >= 0,
        }
    }

    /// Index to read, or `OutOfRange` when the cursor is exhausted.
    fn index(&self) -> Result<usize> {
        if self.valid() && self.position >= 0 {
            Ok(self.position as usize)
        } else {
            Err(PatternError::out_of_range(self.position, self.count))
        }
    }

    fn advance(&mut self) {
        self.position += self.direction.step();
    }

    fn rewind(&mut self) {
        self.position = self.direction.start(self.count);
    }
}

/// Adapter yielding items until the wrapped iterator becomes invalid.
#[derive(Debug, Clone)]
pub struct Traversal<'a, I> {
    inner: I,
    _items: PhantomData<&'a ()>,
}

impl<I> Traversal<'_, I> {
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<'a, I> Iterator for Traversal<'a, I>
where
    I: SequenceIterator<'a>,
{
    type Item = &'a I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inner.valid() {
            return None;
        }
        self.inner.next().ok()
    }
}
