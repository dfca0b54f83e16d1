//! Builder API for ergonomic state machine construction.
//!
//! The builder collects states and transitions and either produces a machine
//! that already has a current state or reports why it could not. The
//! [`fsm_table!`](crate::fsm_table) macro offers the same as a literal table.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
