use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use super::{AlphabeticalIterator, Direction, OrderIterator, SequenceIterator};
use crate::container::Container;

/// Traversal strategy selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Forward,
    Reverse,
    Alphabetical,
    ReverseAlphabetical,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Forward,
        Strategy::Reverse,
        Strategy::Alphabetical,
        Strategy::ReverseAlphabetical,
    ];

    pub fn direction(self) -> Direction {
        match self {
            Strategy::Forward | Strategy::Alphabetical => Direction::Forward,
            Strategy::Reverse | Strategy::ReverseAlphabetical => Direction::Reverse,
        }
    }

    /// Builds the iterator variant this strategy names over `collection`.
    pub fn iterate<'a, C>(
        self,
        collection: &'a C,
    ) -> Box<dyn SequenceIterator<'a, Item = C::Item> + 'a>
    where
        C: Container + ?Sized,
        C::Item: Ord + 'a,
    {
        let direction = self.direction();
        match self {
            Strategy::Forward | Strategy::Reverse => {
                Box::new(OrderIterator::new(collection, direction))
            }
            Strategy::Alphabetical | Strategy::ReverseAlphabetical => {
                Box::new(AlphabeticalIterator::new(collection, direction))
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Forward => "forward",
            Strategy::Reverse => "reverse",
            Strategy::Alphabetical => "alphabetical",
            Strategy::ReverseAlphabetical => "reverse-alphabetical",
        };
        f.write_str(name)
    }
}
