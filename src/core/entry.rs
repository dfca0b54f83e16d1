//! A single state of the table: its output and outgoing transitions.

use super::state::{Key, Output};
use std::collections::HashMap;

/// One row of the transition table.
///
/// Holds the value the state emits and a map from condition to destination
/// index. Each condition appears at most once; inserting it again replaces
/// the destination.
///
/// # Example
///
/// ```rust
/// use statetable::core::StateEntry;
///
/// let mut entry: StateEntry<char, bool, u8> = StateEntry::new(false);
/// entry.insert_transition(1, 'b');
/// entry.insert_transition(1, 'c');
///
/// assert_eq!(entry.destination(&1), Some(&'c'));
/// assert_eq!(entry.transition_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateEntry<I, O, C>
where
    I: Key,
    O: Output,
    C: Key,
{
    output: O,
    transitions: HashMap<C, I>,
}

impl<I: Key, O: Output, C: Key> StateEntry<I, O, C> {
    /// Create a state with no outgoing transitions.
    pub fn new(output: O) -> Self {
        Self {
            output,
            transitions: HashMap::new(),
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Replace the output, keeping every transition.
    pub fn set_output(&mut self, output: O) {
        self.output = output;
    }

    /// Record `condition -> destination`, returning the destination it replaced.
    pub fn insert_transition(&mut self, condition: C, destination: I) -> Option<I> {
        self.transitions.insert(condition, destination)
    }

    pub fn destination(&self, condition: &C) -> Option<&I> {
        self.transitions.get(condition)
    }

    pub fn conditions(&self) -> impl Iterator<Item = &C> {
        self.transitions.keys()
    }

    pub fn transitions(&self) -> impl Iterator<Item = (&C, &I)> {
        self.transitions.iter()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}
