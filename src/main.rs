use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ntmsim::{loader, Outcome, RunLimits, Simulator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ntmsim",
    about = "Breadth-first simulation of nondeterministic Turing machines"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a machine on an input string.
    Run {
        /// Machine definition file (tabular comma-separated format).
        machine: PathBuf,
        /// Input string written on the tape (may be empty).
        input: String,
        /// Maximum tree depth to explore.
        #[arg(long, default_value_t = 100)]
        max_depth: usize,
        /// Maximum total transitions across all branches.
        #[arg(long, default_value_t = 1000)]
        max_transitions: usize,
    },
    /// Print a summary of a machine definition file.
    Info {
        /// Machine definition file.
        machine: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            machine,
            input,
            max_depth,
            max_transitions,
        } => run_simulation(machine, input, RunLimits::new(max_depth, max_transitions)),
        Commands::Info { machine } => print_info(machine),
    }
}

fn run_simulation(path: PathBuf, input: String, limits: RunLimits) -> Result<()> {
    let machine = loader::load(&path)
        .with_context(|| format!("failed to load machine from {}", path.display()))?;

    println!("Machine name: {}", machine.name());
    println!("Initial string: '{}'", input);

    let mut simulator = Simulator::new(machine, limits);
    match simulator.run(&input) {
        Outcome::Accepted {
            transitions,
            depth,
            report,
        } => {
            println!("String accepted in {} transitions.", transitions);
            println!("Tree reached depth {}.", depth);
            for (level, configurations) in report.levels().enumerate() {
                for configuration in configurations {
                    println!("Level {}: {}", level, configuration);
                }
            }
            println!(
                "Configurations explored: {}",
                report.total_configurations()
            );
            match report.average_branching() {
                Some(average) => println!("Average nondeterminism: {:.2}", average),
                None => println!("Average nondeterminism: undefined at depth 0"),
            }
        }
        Outcome::Rejected { transitions, depth } => {
            println!("String rejected after {} steps.", depth);
            println!("Tree depth: {}, total transitions: {}", depth, transitions);
        }
        Outcome::DepthLimitExceeded { transitions, depth } => {
            println!("Execution stopped after reaching max depth of {}.", depth);
            println!("Tree depth: {}, total transitions: {}", depth, transitions);
        }
        Outcome::TransitionLimitExceeded { transitions } => {
            println!("Execution stopped after {} transitions.", transitions);
        }
        Outcome::NoPath => {
            println!("No remaining paths to explore. Machine halted.");
        }
    }

    Ok(())
}

fn print_info(path: PathBuf) -> Result<()> {
    let machine = loader::load(&path)
        .with_context(|| format!("failed to load machine from {}", path.display()))?;

    println!("Machine name: {}", machine.name());
    println!(
        "States: {} ({} declared)",
        machine
            .states()
            .iter()
            .map(|state| state.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        machine.states().len()
    );
    println!(
        "Input alphabet: {}",
        machine
            .input_alphabet()
            .iter()
            .map(|symbol| symbol.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Tape alphabet: {}",
        machine
            .tape_alphabet()
            .iter()
            .map(|symbol| symbol.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Start state: {}", machine.start_state());
    println!("Accept state: {}", machine.accept_state());
    println!("Reject state: {}", machine.reject_state());
    println!("Transition rules: {}", machine.rule_count());

    Ok(())
}
