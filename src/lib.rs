//! # Breadth-First Simulation of Nondeterministic Turing Machines
//!
//! This library simulates a nondeterministic Turing machine on an input
//! string, exploring all branches of nondeterminism in lockstep until one
//! branch accepts, all branches reject, or a structural limit is hit.
//!
//! ## Core Algorithm
//!
//! 1. **Configuration tree**: level `i` holds every configuration
//!    reachable in exactly `i` transition applications
//! 2. **Level expansion**: each round examines the newest level in order
//!    and appends all successors as the next level
//! 3. **Halting policy**: accept wins immediately, a fully rejecting
//!    level halts the run, and depth/transition limits bound the walk
//! 4. **Acceptance census**: on accept, report every configuration per
//!    level up to the accepting depth plus the average nondeterminism
//!
//! ## Usage Example
//!
//! ```ignore
//! use ntmsim::{Direction, MachineDescription, Outcome, RunLimits, Simulator};
//!
//! let machine = MachineDescription::builder()
//!     .name("unary-increment")
//!     .start_state("q0")
//!     .accept_state("qa")
//!     .reject_state("qr")
//!     .add_transition("q0", '0', "qa", '1', Direction::Right)
//!     .build()?;
//!
//! let mut simulator = Simulator::new(machine, RunLimits::default());
//! match simulator.run("0") {
//!     Outcome::Accepted { depth, transitions, .. } => {
//!         println!("accepted at depth {depth} after {transitions} transitions")
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one component of the simulator
pub mod machine;  // Machine description, configurations, loader
pub mod report;   // Acceptance census
pub mod simulate; // Breadth-first exploration engine
pub mod tree;     // Configuration tree (levels)

// Re-exports for convenience
pub use machine::loader;
pub use machine::{
    Configuration, Direction, MachineBuilder, MachineDescription, State, Symbol, Transition, BLANK,
};
pub use report::AcceptanceReport;
pub use simulate::{Outcome, RunLimits, Simulator};
pub use tree::ConfigTree;

use thiserror::Error;

/// Errors raised while constructing or loading a machine description
///
/// Simulation itself is total: once a description exists, every run ends
/// in an [`Outcome`], never an error.
#[derive(Error, Debug)]
pub enum DefinitionError {
    /// A designated state was never supplied to the builder
    #[error("Machine definition is missing its {field}")]
    MissingField {
        /// Which designation is absent
        field: &'static str,
    },

    /// The definition text ended before all header sections were present
    #[error("Machine definition ends early: no {expected} section")]
    Truncated {
        /// The first section that is missing
        expected: &'static str,
    },

    /// A symbol field held something other than a single character
    #[error("Invalid symbol '{value}' on line {line}: symbols are single characters")]
    InvalidSymbol {
        /// Line number in the definition text
        line: usize,
        /// The offending field content
        value: String,
    },

    /// A rule row did not have exactly five fields
    #[error("Malformed rule on line {line}: {reason}")]
    MalformedRule {
        /// Line number in the definition text
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// A rule row named a head direction other than `L` or `R`
    #[error("Invalid direction '{value}' on line {line}: use L or R")]
    InvalidDirection {
        /// Line number in the definition text
        line: usize,
        /// The offending field content
        value: String,
    },

    /// The definition file could not be read
    #[error("Failed to read machine definition: {0}")]
    Io(#[from] std::io::Error),
}
