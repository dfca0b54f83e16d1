//! Build errors for the state machine builder.

use crate::fsm::MachineError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states declared. Call .state(index, output) before .build()")]
    NoStates,

    #[error("Initial state {index} was never declared")]
    UnknownInitialState { index: String },

    #[error("Invalid transition: {0}")]
    Transition(#[from] MachineError),
}
