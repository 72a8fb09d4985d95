//! # Behavioral Patterns: Iterator and Mediator
//!
//! Two independent building blocks:
//!
//! ## Iterator
//! - [`container::Container`]: count plus indexed access, nothing else
//! - [`iterator::SequenceIterator`]: `current`, `next`, `key`, `valid`, `rewind`
//! - Insertion-order and alphabetical variants, forward or reverse
//! - [`iterator::Strategy`] to pick a variant at construction time
//!
//! ## Mediator
//! - [`mediator::Mediator`] receives `(sender, event)` notifications
//! - [`mediator::Component`]s report events and never call each other
//! - [`mediator::ReactionTable`] maps events to follow-up operations
//!
//! ## Running the Walkthrough
//!
//! ```bash
//! cargo run --bin patterns-demo
//! cargo run --bin patterns-demo -- iterate --strategy alphabetical
//! cargo run --bin patterns-demo -- --config demo.toml mediate
//! RUST_LOG=behavioral_patterns=trace cargo run --bin patterns-demo -- mediate
//! ```
//!
//! ## Example
//!
//! ```
//! use behavioral_patterns::container::WordsCollection;
//! use behavioral_patterns::iterator::SequenceIterator;
//!
//! let mut words = WordsCollection::new();
//! words.add_item("First");
//! words.add_item("Second");
//!
//! let mut it = words.reverse_iterator();
//! assert_eq!(it.next().unwrap(), "Second");
//! assert_eq!(it.next().unwrap(), "First");
//! assert!(!it.valid());
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod iterator;
pub mod mediator;

pub use error::{PatternError, Result};
