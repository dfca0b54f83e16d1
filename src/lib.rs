//! Statetable: a generic table-driven deterministic state machine
//!
//! A machine is a table of states, each with an output value and a map from
//! condition to destination state, plus a single current state. Feeding a
//! condition moves the current state along the matching transition.
//!
//! # Core Concepts
//!
//! - **Index** (`I`): identifies a state
//! - **Output** (`O`): the value a state emits
//! - **Condition** (`C`): labels a transition out of a state
//!
//! Declaring a state makes it the current state, so the machine starts in the
//! last state declared unless [`StateMachine::set_current_state`] says otherwise.
//! Before any state is declared, queries fail with [`MachineError::EmptyMachine`].
//!
//! # Example
//!
//! ```rust
//! use statetable::StateMachine;
//!
//! // Accepts binary strings whose last symbol is 1.
//! let mut machine: StateMachine<char, bool, u8> = StateMachine::new();
//! machine.declare_state('n', false);
//! machine.declare_state('y', true);
//! for state in ['n', 'y'] {
//!     machine.declare_transition(state, 0, 'n').unwrap();
//!     machine.declare_transition(state, 1, 'y').unwrap();
//! }
//! machine.set_current_state(&'n');
//!
//! let trace = machine.feed([1, 0, 1]).unwrap();
//! assert_eq!(trace.outputs(), vec![&true, &false, &true]);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod fsm;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use fsm::{MachineError, StateMachine, Trace, TraceStep};
