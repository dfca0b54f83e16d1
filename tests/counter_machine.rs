//! The 25-state counter: `'0'` plus `'a'..='x'`.
//!
//! Condition `1` walks the letters in order, condition `0` jumps to `'x'`, and
//! both `'0'` and `'x'` go to `'a'` on either condition. Only `'x'` outputs `true`.

use statetable::{fsm_table, MachineError, StateMachine, StateMachineBuilder};

fn letters() -> impl Iterator<Item = char> {
    'a'..='x'
}

fn counter() -> StateMachine<char, bool, i32> {
    let mut machine = StateMachine::new();
    machine.declare_state('0', false);
    for index in letters() {
        machine.declare_state(index, false);
    }
    machine.declare_state('x', true);

    machine.declare_transition('0', 0, 'a').unwrap();
    machine.declare_transition('0', 1, 'a').unwrap();
    for index in 'a'..='w' {
        let next = char::from(index as u8 + 1);
        machine.declare_transition(index, 1, next).unwrap();
        machine.declare_transition(index, 0, 'x').unwrap();
    }
    machine.declare_transition('x', 0, 'a').unwrap();
    machine.declare_transition('x', 1, 'a').unwrap();
    machine
}

#[test]
fn counter_has_expected_shape() {
    let machine = counter();

    assert_eq!(machine.state_count(), 25);
    assert_eq!(machine.transition_count(), 50);
    assert_eq!(machine.output_of(&'x'), Some(&true));
    assert_eq!(machine.states().filter(|(_, output)| **output).count(), 1);
}

#[test]
fn last_declared_state_is_current_until_reset() {
    let mut machine = counter();
    assert_eq!(machine.current_state(), Ok(&'x'));

    assert!(machine.set_current_state(&'0'));
    assert_eq!(machine.current_state(), Ok(&'0'));
}

#[test]
fn ones_walk_the_letters_in_order() {
    let mut machine = counter();
    machine.set_current_state(&'0');

    let trace = machine.feed(vec![1; 24]).unwrap();

    let expected: Vec<char> = letters().collect();
    assert_eq!(trace.states(), expected.iter().collect::<Vec<_>>());
    assert_eq!(trace.rejected(), 0);

    let outputs = trace.outputs();
    assert!(outputs[..23].iter().all(|output| !**output));
    assert!(*outputs[23]);
    assert_eq!(machine.current_output(), Ok(true));
}

#[test]
fn zero_jumps_to_accepting_state() {
    let mut machine = counter();
    machine.set_current_state(&'0');

    let trace = machine.feed(vec![1, 1, 0, 1, 0]).unwrap();

    assert_eq!(trace.states(), vec![&'a', &'b', &'x', &'a', &'x']);
    assert_eq!(trace.outputs(), vec![&false, &false, &true, &false, &true]);
}

#[test]
fn unknown_symbol_is_rejected_without_moving() {
    let mut machine = counter();
    machine.set_current_state(&'c');

    let result = machine.step(&2);

    assert!(matches!(result, Err(MachineError::ConditionNotFound { .. })));
    assert_eq!(machine.current_state(), Ok(&'c'));

    let trace = machine.feed(vec![2, 1]).unwrap();
    assert_eq!(trace.states(), vec![&'c', &'d']);
    assert_eq!(trace.rejected(), 1);
}

#[test]
fn tight_loop_cycles_through_counter() {
    let mut machine = counter();
    machine.set_current_state(&'0');

    for _ in 0..1000 {
        machine.step(&1).unwrap();
    }

    // 1 step to 'a', 41 laps of 24, then 15 more
    assert_eq!(machine.current_state(), Ok(&'p'));
}

#[test]
fn builder_produces_same_counter() {
    let mut builder = StateMachineBuilder::new()
        .state('0', false)
        .states(letters().map(|index| (index, index == 'x')))
        .transition('0', 0, 'a')
        .transition('0', 1, 'a')
        .transition('x', 0, 'a')
        .transition('x', 1, 'a')
        .initial('0');
    for index in 'a'..='w' {
        builder = builder
            .transition(index, 1, char::from(index as u8 + 1))
            .transition(index, 0, 'x');
    }
    let mut built = builder.build().unwrap();

    let mut declared = counter();
    declared.set_current_state(&'0');

    let input = vec![1, 1, 1, 0, 1, 1, 0, 0, 1];
    assert_eq!(built.feed(input.clone()), declared.feed(input));
}

#[test]
fn fsm_table_declares_small_counter() {
    let mut machine = fsm_table! {
        states: {
            '0' => false,
            'a' => false,
            'b' => true,
        }
        transitions: {
            ('0', 1) => 'a',
            ('a', 1) => 'b',
            ('b', 1) => 'a',
            ('a', 0) => 'b',
        }
        initial: '0'
    }
    .unwrap();

    let trace = machine.feed([1, 1, 1, 0]).unwrap();

    assert_eq!(trace.states(), vec![&'a', &'b', &'a', &'b']);
    assert_eq!(trace.outputs(), vec![&false, &true, &false, &true]);
}
