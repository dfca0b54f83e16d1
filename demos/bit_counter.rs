//! Bit Counter
//!
//! Builds the 25-state counter (`'0'` plus `'a'..='x'`, only `'x'` accepting)
//! and feeds it every line of a file of whitespace-separated integers,
//! printing the inputs, the resulting states and the resulting outputs.
//!
//! Run with: cargo run --example bit_counter -- path/to/input.txt

use anyhow::{Context, Result};
use clap::Parser;
use statetable::StateMachine;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "bit_counter")]
#[command(about = "Feed integer streams through a 25-state counter")]
struct Args {
    /// File with one whitespace-separated integer stream per line
    input: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn counter() -> Result<StateMachine<char, bool, i32>> {
    let mut machine = StateMachine::with_capacity(25);
    machine.declare_state('0', false);
    for index in 'a'..='x' {
        machine.declare_state(index, false);
    }
    machine.declare_state('x', true);

    machine.declare_transition('0', 0, 'a')?;
    machine.declare_transition('0', 1, 'a')?;
    for index in 'a'..='w' {
        machine.declare_transition(index, 1, char::from(index as u8 + 1))?;
        machine.declare_transition(index, 0, 'x')?;
    }
    machine.declare_transition('x', 0, 'a')?;
    machine.declare_transition('x', 1, 'a')?;
    Ok(machine)
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        "bit_counter=debug,statetable=debug"
    } else {
        "bit_counter=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut machine = counter()?;
    info!(current = ?machine.current_state()?, "Counter built");
    machine.set_current_state(&'0');
    info!(current = ?machine.current_state()?, "Reset to start state");

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    for (number, line) in text.lines().enumerate() {
        let stream = line
            .split_whitespace()
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Line {} is not a list of integers", number + 1))?;

        let trace = machine.feed(stream)?;
        if trace.rejected() > 0 {
            info!(line = number + 1, rejected = trace.rejected(), "Ignored unknown symbols");
        }

        println!();
        println!("{}", join(trace.conditions()));
        println!("{}", join(trace.states()));
        println!("{}", join(trace.outputs()));
    }

    Ok(())
}
