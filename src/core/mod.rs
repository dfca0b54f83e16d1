//! Core table types.
//!
//! This module contains the building blocks of the transition table:
//! - Type bounds for indices, conditions and outputs
//! - `StateEntry`, one state's output and outgoing transitions

mod entry;
mod state;

pub use entry::StateEntry;
pub use state::{Key, Output};
