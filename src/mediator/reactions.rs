use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Event, Operation};

/// Maps each event to the operations the mediator runs in response.
///
/// The operations for one event run sequentially in the order they were
/// declared. Events without an entry cause no reaction.
///
/// In TOML the table is keyed by event label:
///
/// ```toml
/// [reactions]
/// A = ["do_c"]
/// D = ["do_b", "do_c"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<Operation>>")]
pub struct ReactionTable {
    reactions: BTreeMap<Event, Vec<Operation>>,
}

impl ReactionTable {
    pub fn empty() -> Self {
        Self {
            reactions: BTreeMap::new(),
        }
    }

    /// A triggers C; D triggers B then C.
    pub fn classic() -> Self {
        Self::empty()
            .on(Event::A, [Operation::DoC])
            .on(Event::D, [Operation::DoB, Operation::DoC])
    }

    /// Replaces the reactions for `event`.
    pub fn on(mut self, event: Event, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.reactions
            .insert(event, operations.into_iter().collect());
        self
    }

    pub fn reactions(&self, event: Event) -> &[Operation] {
        self.reactions
            .get(&event)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every operation any event can trigger, once each.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        let mut seen = Vec::new();
        self.reactions
            .values()
            .flatten()
            .copied()
            .filter(move |op| {
                if seen.contains(op) {
                    false
                } else {
                    seen.push(*op);
                    true
                }
            })
    }
}

impl Default for ReactionTable {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<BTreeMap<String, Vec<Operation>>> for ReactionTable {
    type Error = String;

    fn try_from(raw: BTreeMap<String, Vec<Operation>>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .try_fold(Self::empty(), |table, (label, operations)| {
                Ok(table.on(label.parse()?, operations))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table() {
        let table = ReactionTable::classic();
        assert_eq!(table.reactions(Event::A), [Operation::DoC]);
        assert_eq!(table.reactions(Event::D), [Operation::DoB, Operation::DoC]);
        assert!(table.reactions(Event::B).is_empty());
        assert!(table.reactions(Event::C).is_empty());
    }

    #[test]
    fn test_operations_are_unique() {
        let ops: Vec<Operation> = ReactionTable::classic().operations().collect();
        assert_eq!(ops, [Operation::DoC, Operation::DoB]);
    }

    #[test]
    fn test_on_replaces_previous_entry() {
        let table = ReactionTable::classic().on(Event::A, []);
        assert!(table.reactions(Event::A).is_empty());
    }

    #[test]
    fn test_from_raw_map() {
        let mut raw = BTreeMap::new();
        raw.insert("B".to_string(), vec![Operation::DoD]);
        let table = ReactionTable::try_from(raw).unwrap();
        assert_eq!(table.reactions(Event::B), [Operation::DoD]);

        let mut bad = BTreeMap::new();
        bad.insert("Z".to_string(), vec![]);
        assert_eq!(
            ReactionTable::try_from(bad).unwrap_err(),
            "unknown event `Z`"
        );
    }
}
