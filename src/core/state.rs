//! Trait bounds for the three type parameters of a state machine.
//!
//! Indices and conditions key hash maps, so they need `Eq + Hash`. Outputs
//! are only stored and handed back by copy.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for state indices and transition conditions.
///
/// Implemented automatically for every type that is `Clone + Eq + Hash + Debug`,
/// so `char`, integers, `String` and plain enums all qualify.
///
/// # Example
///
/// ```rust
/// use statetable::core::Key;
///
/// fn assert_key<K: Key>() {}
///
/// assert_key::<char>();
/// assert_key::<i32>();
/// assert_key::<String>();
/// ```
pub trait Key: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Key for T {}

/// Bound for the value emitted by a state.
///
/// Implemented automatically for every `Clone + Debug` type.
pub trait Output: Clone + Debug {}

impl<T: Clone + Debug> Output for T {}
