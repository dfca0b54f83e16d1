//! The state machine and the results of driving it.
//!
//! # Key Concepts
//!
//! - **Declarations**: states and transitions are added or overwritten, never removed
//! - **Stepping**: one condition moves the machine along one transition, or not at all
//! - **Feeding**: a sequence of conditions produces a [`Trace`]

mod error;
mod machine;
mod trace;

pub use error::MachineError;
pub use machine::StateMachine;
pub use trace::{Trace, TraceStep};
