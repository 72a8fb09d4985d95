//! Error taxonomy shared by the iterator and mediator modules.

use std::path::PathBuf;

use thiserror::Error;

use crate::mediator::{ComponentId, Operation};

/// Every failure the patterns can report.
///
/// Marked `#[non_exhaustive]` so new variants can be added without
/// breaking downstream matches.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("iterator position {position} is outside 0..{count}")]
    OutOfRange { position: isize, count: usize },

    #[error("{component} has no mediator attached")]
    UnwiredComponent { component: ComponentId },

    #[error("the mediator of {component} has been dropped")]
    MediatorDropped { component: ComponentId },

    #[error("{component} cannot perform {operation}")]
    UnsupportedOperation {
        component: ComponentId,
        operation: Operation,
    },

    #[error("{component} is registered more than once")]
    DuplicateComponent { component: ComponentId },

    #[error("reaction chain reached depth {depth} (limit {limit})")]
    ReactionChainTooDeep { depth: usize, limit: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatternError {
    pub fn out_of_range(position: isize, count: usize) -> Self {
        Self::OutOfRange { position, count }
    }

    /// True for the two precondition violations of the patterns
    /// themselves, as opposed to wiring or configuration problems.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::UnwiredComponent { .. }
        )
    }
}

pub type Result<T, E = PatternError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = PatternError::out_of_range(3, 3);
        assert_eq!(err.to_string(), "iterator position 3 is outside 0..3");
        assert!(err.is_precondition());
    }

    #[test]
    fn test_wiring_errors_are_not_preconditions() {
        let err = PatternError::DuplicateComponent {
            component: ComponentId::Component1,
        };
        assert_eq!(err.to_string(), "Component 1 is registered more than once");
        assert!(!err.is_precondition());
    }
}
