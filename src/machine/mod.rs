//! Machine description and configurations
//!
//! Provides the immutable description of a nondeterministic Turing machine:
//! - Finite state set Q with distinguished start, accept, and reject states
//! - Input and tape alphabets over single-character symbols
//! - Transition relation δ: Q × Γ → ordered alternatives of Q × Γ × {L,R}
//!
//! Multiple alternatives for the same `(state, symbol)` key model
//! nondeterministic choice; their definition order is preserved and decides
//! the order in which successor configurations enter the next tree level.

mod config;
pub mod loader;
mod transition;

pub use config::Configuration;
pub use transition::{Direction, ParseDirectionError, Transition};

use crate::DefinitionError;
use std::collections::HashMap;
use std::fmt;

/// Tape symbol (element of the tape alphabet Γ)
pub type Symbol = char;

/// The reserved blank symbol, implicit on every never-written tape cell
pub const BLANK: Symbol = '_';

/// A machine state identifier
///
/// States are opaque strings; the description designates which of them are
/// the start, accept, and reject states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "visualize", serde(transparent))]
pub struct State(String);

impl State {
    /// Creates a state from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The state name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable description of a nondeterministic Turing machine
///
/// Built by [`MachineBuilder`] or parsed from a file by [`loader`]. The
/// description is never mutated after construction, and no validation ties
/// rule endpoints to the declared state set or alphabets: a rule that names
/// an undeclared state simply produces a branch no other rule can extend.
#[derive(Debug, Clone)]
pub struct MachineDescription {
    /// Human-readable machine name
    name: String,

    /// Declared state set Q (descriptive; rules are not checked against it)
    states: Vec<State>,

    /// Declared input alphabet Σ
    input_alphabet: Vec<Symbol>,

    /// Declared tape alphabet Γ
    tape_alphabet: Vec<Symbol>,

    /// Start state
    start_state: State,

    /// Accept state
    accept_state: State,

    /// Reject state
    reject_state: State,

    /// Transition relation, alternatives kept in definition order per key
    rules: HashMap<(State, Symbol), Vec<Transition>>,
}

impl MachineDescription {
    /// Creates a fluent builder.
    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    /// Human-readable machine name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared state set
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Declared input alphabet
    pub fn input_alphabet(&self) -> &[Symbol] {
        &self.input_alphabet
    }

    /// Declared tape alphabet
    pub fn tape_alphabet(&self) -> &[Symbol] {
        &self.tape_alphabet
    }

    /// Start state
    pub fn start_state(&self) -> &State {
        &self.start_state
    }

    /// Accept state
    pub fn accept_state(&self) -> &State {
        &self.accept_state
    }

    /// Reject state
    pub fn reject_state(&self) -> &State {
        &self.reject_state
    }

    /// Looks up the transition alternatives for `(state, symbol)`, in
    /// definition order. An empty slice means the branch is stuck; the
    /// engine treats that as a legitimate signal, not an error.
    pub fn transitions(&self, state: &State, symbol: Symbol) -> &[Transition] {
        self.rules
            .get(&(state.clone(), symbol))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of transition alternatives across all keys
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

/// Builder for machine descriptions (fluent API)
#[derive(Debug)]
pub struct MachineBuilder {
    name: Option<String>,
    states: Vec<State>,
    input_alphabet: Vec<Symbol>,
    tape_alphabet: Vec<Symbol>,
    start_state: Option<State>,
    accept_state: Option<State>,
    reject_state: Option<State>,
    rules: Vec<(State, Symbol, Transition)>,
}

impl MachineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            name: None,
            states: Vec::new(),
            input_alphabet: Vec::new(),
            tape_alphabet: Vec::new(),
            start_state: None,
            accept_state: None,
            reject_state: None,
            rules: Vec::new(),
        }
    }

    /// Sets the machine name (defaults to "unnamed").
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the declared state set.
    pub fn states(mut self, states: Vec<State>) -> Self {
        self.states = states;
        self
    }

    /// Sets the declared input alphabet.
    pub fn input_alphabet(mut self, alphabet: Vec<Symbol>) -> Self {
        self.input_alphabet = alphabet;
        self
    }

    /// Sets the declared tape alphabet.
    pub fn tape_alphabet(mut self, alphabet: Vec<Symbol>) -> Self {
        self.tape_alphabet = alphabet;
        self
    }

    /// Sets the start state.
    pub fn start_state(mut self, state: impl Into<State>) -> Self {
        self.start_state = Some(state.into());
        self
    }

    /// Sets the accept state.
    pub fn accept_state(mut self, state: impl Into<State>) -> Self {
        self.accept_state = Some(state.into());
        self
    }

    /// Sets the reject state.
    pub fn reject_state(mut self, state: impl Into<State>) -> Self {
        self.reject_state = Some(state.into());
        self
    }

    /// Adds one transition alternative. Repeated calls with the same
    /// `(from, read)` pair accumulate nondeterministic alternatives in
    /// call order.
    pub fn add_transition(
        mut self,
        from: impl Into<State>,
        read: Symbol,
        to: impl Into<State>,
        write: Symbol,
        direction: Direction,
    ) -> Self {
        let transition = Transition {
            next_state: to.into(),
            write,
            direction,
        };
        self.rules.push((from.into(), read, transition));
        self
    }

    /// Builds the machine description.
    pub fn build(self) -> Result<MachineDescription, DefinitionError> {
        let start_state = self
            .start_state
            .ok_or(DefinitionError::MissingField { field: "start state" })?;
        let accept_state = self
            .accept_state
            .ok_or(DefinitionError::MissingField { field: "accept state" })?;
        let reject_state = self
            .reject_state
            .ok_or(DefinitionError::MissingField { field: "reject state" })?;

        let mut rules: HashMap<(State, Symbol), Vec<Transition>> = HashMap::new();
        for (from, read, transition) in self.rules {
            rules.entry((from, read)).or_default().push(transition);
        }

        Ok(MachineDescription {
            name: self.name.unwrap_or_else(|| "unnamed".to_string()),
            states: self.states,
            input_alphabet: self.input_alphabet,
            tape_alphabet: self.tape_alphabet,
            start_state,
            accept_state,
            reject_state,
            rules,
        })
    }
}
