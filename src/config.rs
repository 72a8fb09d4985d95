//! Walkthrough configuration loaded from TOML.
//!
//! ```toml
//! items = ["First", "Second", "Third"]
//! strategy = "reverse"
//! script = ["do_a", "do_d"]
//! max_reaction_depth = 16
//!
//! [reactions]
//! A = ["do_c"]
//! D = ["do_b", "do_c"]
//! ```
//!
//! Every key is optional; missing keys fall back to [`DemoConfig::default`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::container::WordsCollection;
use crate::error::{PatternError, Result};
use crate::iterator::Strategy;
use crate::mediator::{Operation, ReactionTable, DEFAULT_MAX_REACTION_DEPTH};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Words placed in the collection the iterators walk.
    pub items: Vec<String>,
    /// Strategy used by the `iterate` walkthrough. `None` runs all of them.
    pub strategy: Option<Strategy>,
    pub reactions: ReactionTable,
    /// Operations the `mediate` walkthrough triggers, in order.
    pub script: Vec<Operation>,
    pub max_reaction_depth: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            items: vec!["First".into(), "Second".into(), "Third".into()],
            strategy: None,
            reactions: ReactionTable::classic(),
            script: vec![Operation::DoA, Operation::DoD],
            max_reaction_depth: DEFAULT_MAX_REACTION_DEPTH,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn collection(&self) -> WordsCollection {
        self.items.iter().map(String::as_str).collect()
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        match self.strategy {
            Some(strategy) => vec![strategy],
            None => Strategy::ALL.to_vec(),
        }
    }
}
