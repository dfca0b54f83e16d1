//! Checkpoint and restore functionality for state machines.
//!
//! A checkpoint captures the full table and the current state so a machine
//! can be persisted as JSON or bincode and rebuilt later. Maps are stored as
//! vectors of records, which keeps non-string indices and conditions intact
//! in JSON.

use crate::core::{Key, Output};
use crate::fsm::StateMachine;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// One state of a checkpointed table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateRecord<I, O, C> {
    pub index: I,
    pub output: O,
    /// Outgoing transitions as `(condition, destination)` pairs
    pub transitions: Vec<(C, I)>,
}

/// Serializable snapshot of a state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<I, O, C> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state, `None` only for a machine with no states
    pub current: Option<I>,

    /// Every state with its transitions, in no particular order
    pub states: Vec<StateRecord<I, O, C>>,
}

impl<I, O, C> Checkpoint<I, O, C>
where
    I: Serialize + DeserializeOwned,
    O: Serialize + DeserializeOwned,
    C: Serialize + DeserializeOwned,
{
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<I, O, C> Checkpoint<I, O, C> {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }
}

impl<I: Key, O: Output, C: Key> StateMachine<I, O, C> {
    /// Snapshot the table and current state.
    pub fn checkpoint(&self) -> Checkpoint<I, O, C> {
        let states = self
            .entries()
            .map(|(index, entry)| StateRecord {
                index: index.clone(),
                output: entry.output().clone(),
                transitions: entry
                    .transitions()
                    .map(|(condition, dst)| (condition.clone(), dst.clone()))
                    .collect(),
            })
            .collect();

        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current: self.current_index().cloned(),
            states,
        }
    }

    /// Rebuild a machine from a checkpoint.
    ///
    /// Fails if the version is unsupported, an index or `(state, condition)`
    /// pair appears twice, a transition points at a missing state, or the
    /// current state is missing from the table.
    pub fn restore(checkpoint: Checkpoint<I, O, C>) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut machine = Self::with_capacity(checkpoint.states.len());
        let mut transitions = Vec::new();

        for record in checkpoint.states {
            if machine.contains_state(&record.index) {
                return Err(CheckpointError::ValidationFailed(format!(
                    "State {:?} appears more than once",
                    record.index
                )));
            }

            transitions.extend(
                record
                    .transitions
                    .into_iter()
                    .map(|(condition, dst)| (record.index.clone(), condition, dst)),
            );
            machine.declare_state(record.index, record.output);
        }

        for (src, condition, dst) in transitions {
            if machine.destination(&src, &condition).is_some() {
                return Err(CheckpointError::ValidationFailed(format!(
                    "Condition {condition:?} appears more than once on state {src:?}"
                )));
            }

            machine
                .declare_transition(src, condition, dst)
                .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;
        }

        match checkpoint.current {
            Some(current) => {
                if !machine.set_current_state(&current) {
                    return Err(CheckpointError::ValidationFailed(format!(
                        "Current state {current:?} is not in the table"
                    )));
                }
            }
            None if !machine.is_empty() => {
                return Err(CheckpointError::ValidationFailed(
                    "Checkpoint has states but no current state".to_string(),
                ));
            }
            None => {}
        }

        debug!(
            id = %checkpoint.id,
            states = machine.state_count(),
            transitions = machine.transition_count(),
            "Restored checkpoint"
        );
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;

    fn sample() -> StateMachine<char, bool, i32> {
        StateMachineBuilder::new()
            .state('a', false)
            .state('b', false)
            .state('c', true)
            .transition('a', 1, 'b')
            .transition('b', 1, 'c')
            .transition('b', 0, 'a')
            .transition('c', 0, 'a')
            .initial('b')
            .build()
            .unwrap()
    }

    fn assert_same_table(
        left: &StateMachine<char, bool, i32>,
        right: &StateMachine<char, bool, i32>,
    ) {
        assert_eq!(left.state_count(), right.state_count());
        assert_eq!(left.transition_count(), right.transition_count());
        assert_eq!(left.current_state(), right.current_state());
        for (index, output) in left.states() {
            assert_eq!(right.output_of(index), Some(output));
            for condition in [0, 1] {
                assert_eq!(
                    left.destination(index, &condition),
                    right.destination(index, &condition)
                );
            }
        }
    }

    #[test]
    fn checkpoint_captures_table() {
        let checkpoint = sample().checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.current, Some('b'));
        assert_eq!(checkpoint.state_count(), 3);
        assert_eq!(checkpoint.transition_count(), 4);
    }

    #[test]
    fn json_roundtrip_restores_machine() {
        let machine = sample();
        let json = machine.checkpoint().to_json().unwrap();

        let restored = StateMachine::restore(Checkpoint::from_json(&json).unwrap()).unwrap();

        assert_same_table(&machine, &restored);
    }

    #[test]
    fn binary_roundtrip_restores_machine() {
        let machine = sample();
        let bytes = machine.checkpoint().to_binary().unwrap();

        let restored = StateMachine::restore(Checkpoint::from_binary(&bytes).unwrap()).unwrap();

        assert_same_table(&machine, &restored);
    }

    #[test]
    fn empty_machine_roundtrips() {
        let machine: StateMachine<char, bool, i32> = StateMachine::new();

        let restored = StateMachine::restore(machine.checkpoint()).unwrap();

        assert!(restored.is_empty());
    }

    #[test]
    fn restore_rejects_unknown_version() {
        let mut checkpoint = sample().checkpoint();
        checkpoint.version = 99;

        let result = StateMachine::restore(checkpoint);

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: 1
            })
        ));
    }

    #[test]
    fn restore_rejects_dangling_destination() {
        let mut checkpoint = sample().checkpoint();
        checkpoint.states[0].transitions.push((7, 'z'));

        let result = StateMachine::restore(checkpoint);

        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_duplicate_state() {
        let mut checkpoint = sample().checkpoint();
        let duplicate = checkpoint.states[0].clone();
        checkpoint.states.push(duplicate);

        let result = StateMachine::restore(checkpoint);

        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_duplicate_condition() {
        let mut checkpoint = sample().checkpoint();
        let record = checkpoint
            .states
            .iter_mut()
            .find(|s| s.index == 'a')
            .unwrap();
        record.transitions.push((1, 'c'));

        let result = StateMachine::restore(checkpoint);

        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_missing_current_state() {
        let mut checkpoint = sample().checkpoint();
        checkpoint.current = Some('q');
        assert!(matches!(
            StateMachine::restore(checkpoint),
            Err(CheckpointError::ValidationFailed(_))
        ));

        let mut checkpoint = sample().checkpoint();
        checkpoint.current = None;
        assert!(matches!(
            StateMachine::restore(checkpoint),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }

    #[test]
    fn corrupt_json_fails_to_deserialize() {
        let result = Checkpoint::<char, bool, i32>::from_json("{ not json");

        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}
