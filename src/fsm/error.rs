//! Errors reported by state machine operations.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur when declaring transitions or driving the machine.
///
/// Indices and conditions are rendered with `Debug` so the error does not
/// carry the machine's type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Source state {index} not found")]
    SourceNotFound { index: String },

    #[error("Destination state {index} not found")]
    DestinationNotFound { index: String },

    #[error("No transition for condition {condition} from state {state}")]
    ConditionNotFound { state: String, condition: String },

    #[error("State machine has no states")]
    EmptyMachine,
}

impl MachineError {
    pub(crate) fn source_not_found(index: &impl Debug) -> Self {
        Self::SourceNotFound {
            index: format!("{index:?}"),
        }
    }

    pub(crate) fn destination_not_found(index: &impl Debug) -> Self {
        Self::DestinationNotFound {
            index: format!("{index:?}"),
        }
    }

    pub(crate) fn condition_not_found(state: &impl Debug, condition: &impl Debug) -> Self {
        Self::ConditionNotFound {
            state: format!("{state:?}"),
            condition: format!("{condition:?}"),
        }
    }
}
