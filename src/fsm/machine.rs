//! Table-driven deterministic state machine.

use crate::core::{Key, Output, StateEntry};
use crate::fsm::error::MachineError;
use crate::fsm::trace::{Trace, TraceStep};
use std::collections::hash_map::{Entry, HashMap};
use tracing::{debug, trace};

/// Deterministic finite state machine over a state/transition table.
///
/// - `I` identifies a state
/// - `O` is the value a state emits
/// - `C` labels a transition out of a state
///
/// The machine tracks one current state. Declaring a state makes it current,
/// so a machine built by a chain of declarations starts in the last state
/// declared unless [`set_current_state`](Self::set_current_state) is called
/// afterwards. Until the first state is declared there is no current state and
/// queries fail with [`MachineError::EmptyMachine`].
///
/// # Example
///
/// ```rust
/// use statetable::StateMachine;
///
/// let mut machine: StateMachine<&str, bool, char> = StateMachine::new();
/// machine.declare_state("closed", false);
/// machine.declare_state("open", true);
/// machine.declare_transition("closed", 'o', "open").unwrap();
/// machine.declare_transition("open", 'c', "closed").unwrap();
///
/// assert!(machine.set_current_state(&"closed"));
/// machine.step(&'o').unwrap();
///
/// assert_eq!(machine.current_state().unwrap(), &"open");
/// assert_eq!(machine.current_output().unwrap(), true);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<I: Key, O: Output, C: Key> {
    states: HashMap<I, StateEntry<I, O, C>>,
    current: Option<I>,
}

impl<I: Key, O: Output, C: Key> Default for StateMachine<I, O, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Key, O: Output, C: Key> StateMachine<I, O, C> {
    /// Create a machine with no states.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
        }
    }

    /// Create a machine with room for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: HashMap::with_capacity(capacity),
            current: None,
        }
    }

    /// Declare a state, or overwrite the output of an existing one.
    ///
    /// Redeclaring an index keeps its transitions. In both cases the state
    /// becomes the current state.
    pub fn declare_state(&mut self, index: I, output: O) {
        match self.states.entry(index.clone()) {
            Entry::Occupied(mut occupied) => {
                debug!(index = ?index, output = ?output, "Overwriting state output");
                occupied.get_mut().set_output(output);
            }
            Entry::Vacant(vacant) => {
                debug!(index = ?index, output = ?output, "Declaring state");
                vacant.insert(StateEntry::new(output));
            }
        }
        self.current = Some(index);
    }

    /// Declare `src --condition--> dst`, replacing any destination already
    /// recorded for that condition.
    ///
    /// `src` is checked before `dst`. On failure the table is untouched. The
    /// current state never changes.
    pub fn declare_transition(
        &mut self,
        src: I,
        condition: C,
        dst: I,
    ) -> Result<(), MachineError> {
        let dst_known = self.states.contains_key(&dst);

        let Some(entry) = self.states.get_mut(&src) else {
            debug!(src = ?src, "Transition source not declared");
            return Err(MachineError::source_not_found(&src));
        };

        if !dst_known {
            debug!(dst = ?dst, "Transition destination not declared");
            return Err(MachineError::destination_not_found(&dst));
        }

        debug!(src = ?src, condition = ?condition, dst = ?dst, "Declaring transition");
        entry.insert_transition(condition, dst);
        Ok(())
    }

    /// Advance along the transition labeled `condition` and return the new
    /// current state.
    ///
    /// If the current state has no such transition the machine stays where it
    /// is and `ConditionNotFound` is returned.
    pub fn step(&mut self, condition: &C) -> Result<&I, MachineError> {
        let current = self.current.as_ref().ok_or(MachineError::EmptyMachine)?;

        let Some(next) = self
            .states
            .get(current)
            .and_then(|entry| entry.destination(condition))
            .cloned()
        else {
            debug!(state = ?current, condition = ?condition, "No transition for condition");
            return Err(MachineError::condition_not_found(current, condition));
        };

        trace!(from = ?current, condition = ?condition, to = ?next, "Step");
        let next: &I = self.current.insert(next);
        Ok(next)
    }

    /// Feed every condition through [`step`](Self::step) and record where the
    /// machine ends up after each one.
    ///
    /// A condition the current state has no transition for does not stop the
    /// run: the step is recorded as rejected and the state stays put.
    pub fn feed<It>(&mut self, conditions: It) -> Result<Trace<I, O, C>, MachineError>
    where
        It: IntoIterator<Item = C>,
    {
        if self.current.is_none() {
            return Err(MachineError::EmptyMachine);
        }

        let conditions = conditions.into_iter();
        let mut trace = Trace::with_capacity(conditions.size_hint().0);

        for condition in conditions {
            let accepted = match self.step(&condition) {
                Ok(_) => true,
                Err(MachineError::ConditionNotFound { .. }) => false,
                Err(err) => return Err(err),
            };

            trace.push(TraceStep {
                state: self.current_state()?.clone(),
                output: self.current_output()?,
                condition,
                accepted,
            });
        }

        debug!(steps = trace.len(), rejected = trace.rejected(), "Fed conditions");
        Ok(trace)
    }

    pub fn current_state(&self) -> Result<&I, MachineError> {
        self.current.as_ref().ok_or(MachineError::EmptyMachine)
    }

    /// Output of the current state, by value.
    pub fn current_output(&self) -> Result<O, MachineError> {
        let current = self.current_state()?;
        self.states
            .get(current)
            .map(|entry| entry.output().clone())
            .ok_or(MachineError::EmptyMachine)
    }

    /// Jump to `index` without a transition.
    ///
    /// Returns `false` and leaves the current state alone if `index` was never
    /// declared.
    pub fn set_current_state(&mut self, index: &I) -> bool {
        if !self.states.contains_key(index) {
            debug!(index = ?index, "Cannot set current state to undeclared index");
            return false;
        }

        self.current = Some(index.clone());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.states.values().map(StateEntry::transition_count).sum()
    }

    pub fn contains_state(&self, index: &I) -> bool {
        self.states.contains_key(index)
    }

    pub fn output_of(&self, index: &I) -> Option<&O> {
        self.states.get(index).map(StateEntry::output)
    }

    /// Destination of `src --condition-->`, if declared.
    pub fn destination(&self, src: &I, condition: &C) -> Option<&I> {
        self.states.get(src)?.destination(condition)
    }

    /// Conditions with a transition out of `index`, or `None` for an
    /// undeclared index.
    pub fn conditions(&self, index: &I) -> Option<impl Iterator<Item = &C>> {
        self.states.get(index).map(StateEntry::conditions)
    }

    /// Every declared state with its output, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = (&I, &O)> {
        self.states.iter().map(|(index, entry)| (index, entry.output()))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&I, &StateEntry<I, O, C>)> {
        self.states.iter()
    }

    pub(crate) fn current_index(&self) -> Option<&I> {
        self.current.as_ref()
    }
}
