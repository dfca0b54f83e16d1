//! Record of a batch of conditions fed through a machine.

use crate::core::{Key, Output};

/// What happened to the machine after one condition was fed.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceStep<I, O, C> {
    /// The condition that was fed
    pub condition: C,
    /// Whether the current state had a transition for it
    pub accepted: bool,
    /// Current state after the step (unchanged when rejected)
    pub state: I,
    /// Output of `state`
    pub output: O,
}

/// Ordered steps produced by [`StateMachine::feed`](crate::StateMachine::feed).
///
/// The parallel views (`conditions`, `states`, `outputs`) line up index by
/// index, one entry per fed condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace<I, O, C> {
    steps: Vec<TraceStep<I, O, C>>,
}

impl<I: Key, O: Output, C: Key> Default for Trace<I, O, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Key, O: Output, C: Key> Trace<I, O, C> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, step: TraceStep<I, O, C>) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[TraceStep<I, O, C>] {
        &self.steps
    }

    pub fn conditions(&self) -> Vec<&C> {
        self.steps.iter().map(|s| &s.condition).collect()
    }

    pub fn states(&self) -> Vec<&I> {
        self.steps.iter().map(|s| &s.state).collect()
    }

    pub fn outputs(&self) -> Vec<&O> {
        self.steps.iter().map(|s| &s.output).collect()
    }

    /// Number of conditions the machine had no transition for.
    pub fn rejected(&self) -> usize {
        self.steps.iter().filter(|s| !s.accepted).count()
    }

    /// State the machine was left in, or `None` if nothing was fed.
    pub fn final_state(&self) -> Option<&I> {
        self.steps.last().map(|s| &s.state)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
