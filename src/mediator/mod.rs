//! # Mediator Pattern
//!
//! Components never call each other. Each domain operation applies its
//! local effect and then reports an [`Event`] to its mediator, which looks
//! the event up in a [`ReactionTable`] and invokes the listed operations,
//! in declared order, on whichever components own them.
//!
//! Components keep only a `Weak` back-reference to their mediator, set
//! after construction by the mediator itself. Notification is synchronous
//! and may nest: a reaction can trigger further notifications.

mod components;
mod concrete;
mod reactions;

pub use components::{Component1, Component2, Journal};
pub use concrete::{ConcreteMediator, MediatorBuilder, DEFAULT_MAX_REACTION_DEPTH};
pub use reactions::ReactionTable;

use std::fmt;
use std::rc::Weak;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Result;

/// Identity of a participant in mediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentId {
    Component1,
    Component2,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Component1 => f.write_str("Component 1"),
            ComponentId::Component2 => f.write_str("Component 2"),
        }
    }
}

/// Event a component reports after one of its operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    A,
    B,
    C,
    D,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Event::A => "A",
            Event::B => "B",
            Event::C => "C",
            Event::D => "D",
        };
        f.write_str(label)
    }
}

impl FromStr for Event {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Event::A),
            "B" | "b" => Ok(Event::B),
            "C" | "c" => Ok(Event::C),
            "D" | "d" => Ok(Event::D),
            other => Err(format!("unknown event `{other}`")),
        }
    }
}

/// Domain operation of a component. Each one is owned by exactly one
/// component and raises exactly one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    DoA,
    DoB,
    DoC,
    DoD,
}

impl Operation {
    pub fn owner(self) -> ComponentId {
        match self {
            Operation::DoA | Operation::DoB => ComponentId::Component1,
            Operation::DoC | Operation::DoD => ComponentId::Component2,
        }
    }

    pub fn event(self) -> Event {
        match self {
            Operation::DoA => Event::A,
            Operation::DoB => Event::B,
            Operation::DoC => Event::C,
            Operation::DoD => Event::D,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.do_{}()", self.owner(), self.event().to_string().to_lowercase())
    }
}

/// Receives notifications and reacts by invoking component operations.
pub trait Mediator {
    fn notify(&self, sender: ComponentId, event: Event) -> Result<()>;
}

/// A participant in mediation.
pub trait Component {
    fn id(&self) -> ComponentId;

    /// Attaches or replaces the mediator this component reports to.
    fn set_mediator(&self, mediator: Weak<dyn Mediator>);

    fn is_attached(&self) -> bool;

    /// Runs `operation` on behalf of the mediator.
    fn perform(&self, operation: Operation) -> Result<()>;
}
