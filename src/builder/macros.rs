//! Macros for declaring state machines as literal tables.

/// Build a [`StateMachine`](crate::StateMachine) from a literal table.
///
/// Expands to a [`StateMachineBuilder`](crate::builder::StateMachineBuilder)
/// chain and evaluates to its `Result<StateMachine, BuildError>`.
///
/// # Example
///
/// ```
/// use statetable::fsm_table;
///
/// let mut machine = fsm_table! {
///     states: {
///         "even" => true,
///         "odd" => false,
///     }
///     transitions: {
///         ("even", 1) => "odd",
///         ("odd", 1) => "even",
///         ("even", 0) => "even",
///         ("odd", 0) => "odd",
///     }
///     initial: "even"
/// }
/// .unwrap();
///
/// machine.step(&1).unwrap();
/// assert_eq!(machine.current_output().unwrap(), false);
/// ```
#[macro_export]
macro_rules! fsm_table {
    (
        states: {
            $($index:expr => $output:expr),* $(,)?
        }
        $(transitions: {
            $(($src:expr, $condition:expr) => $dst:expr),* $(,)?
        })?
        $(initial: $initial:expr)?
    ) => {
        $crate::builder::StateMachineBuilder::new()
            $(.state($index, $output))*
            $($(.transition($src, $condition, $dst))*)?
            $(.initial($initial))?
            .build()
    };
}
