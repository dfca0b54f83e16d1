//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Key, Output};
use crate::fsm::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// States are declared first, in the order given, then transitions, so a
/// transition may name a state added later in the chain. Without
/// [`initial`](Self::initial) the machine starts in the last state declared.
pub struct StateMachineBuilder<I: Key, O: Output, C: Key> {
    states: Vec<(I, O)>,
    transitions: Vec<(I, C, I)>,
    initial: Option<I>,
}

impl<I: Key, O: Output, C: Key> StateMachineBuilder<I, O, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Add a state (at least one is required).
    pub fn state(mut self, index: I, output: O) -> Self {
        self.states.push((index, output));
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = (I, O)>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition `src --condition--> dst`.
    pub fn transition(mut self, src: I, condition: C, dst: I) -> Self {
        self.transitions.push((src, condition, dst));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = (I, C, I)>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the starting state (optional).
    pub fn initial(mut self, index: I) -> Self {
        self.initial = Some(index);
        self
    }

    /// Build the state machine.
    /// Returns an error if no state was given, a transition names an unknown
    /// state, or the initial state was never declared.
    pub fn build(self) -> Result<StateMachine<I, O, C>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = StateMachine::with_capacity(self.states.len());
        for (index, output) in self.states {
            machine.declare_state(index, output);
        }

        for (src, condition, dst) in self.transitions {
            machine.declare_transition(src, condition, dst)?;
        }

        if let Some(initial) = self.initial {
            if !machine.set_current_state(&initial) {
                return Err(BuildError::UnknownInitialState {
                    index: format!("{initial:?}"),
                });
            }
        }

        Ok(machine)
    }
}

impl<I: Key, O: Output, C: Key> Default for StateMachineBuilder<I, O, C> {
    fn default() -> Self {
        Self::new()
    }
}
