//! Configuration (instantaneous description) of a simulated machine
//!
//! A configuration snapshots the tape split at the head:
//! - `left`: everything strictly left of the head
//! - `state`: current control state
//! - `right`: the head cell and everything right of it
//!
//! The tape is conceptually infinite in both directions; only the written
//! region is materialized. Reading past either end yields the blank symbol.
//! Configurations are immutable: applying a transition produces a fresh
//! configuration and never mutates the source.

use super::{Direction, State, Symbol, Transition, BLANK};
use std::fmt;

/// Complete instantaneous description of one branch of the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    /// Tape content strictly left of the head
    left: Vec<Symbol>,

    /// Current control state
    state: State,

    /// Tape content from the head cell rightward
    right: Vec<Symbol>,
}

impl Configuration {
    /// Creates a configuration from explicit tape halves.
    pub fn new(left: &str, state: State, right: &str) -> Self {
        Self {
            left: left.chars().collect(),
            state,
            right: right.chars().collect(),
        }
    }

    /// Creates the initial configuration: empty left half, head on the
    /// first input symbol (an empty input is a tape of all blanks).
    pub fn initial(start_state: State, input: &str) -> Self {
        Self::new("", start_state, input)
    }

    /// Current control state
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Tape content strictly left of the head
    pub fn left(&self) -> &[Symbol] {
        &self.left
    }

    /// Tape content from the head cell rightward
    pub fn right(&self) -> &[Symbol] {
        &self.right
    }

    /// Symbol under the head; blank when nothing has been written there
    pub fn head_symbol(&self) -> Symbol {
        self.right.first().copied().unwrap_or(BLANK)
    }

    /// Produces the configuration that results from applying one
    /// transition alternative: write under the head, then move.
    pub fn successor(&self, transition: &Transition) -> Self {
        let mut left = self.left.clone();
        let mut right = self.right.clone();

        // Write the symbol; the head cell materializes if it was implicit.
        if right.is_empty() {
            right.push(transition.write);
        } else {
            right[0] = transition.write;
        }

        match transition.direction {
            Direction::Left => {
                right.insert(0, left.pop().unwrap_or(BLANK));
            }
            Direction::Right => {
                let head = right.remove(0);
                left.push(head);
                // The head cell must always exist.
                if right.is_empty() {
                    right.push(BLANK);
                }
            }
        }

        Self {
            left,
            state: transition.next_state.clone(),
            right,
        }
    }

    /// Produces the explicitly-rejected successor of a configuration with
    /// no applicable rule: same tape, reject state.
    pub fn stuck(&self, reject_state: &State) -> Self {
        Self {
            left: self.left.clone(),
            state: reject_state.clone(),
            right: self.right.clone(),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left: String = self.left.iter().collect();
        let right: String = self.right.iter().collect();
        write!(f, "[\"{}\", {}, \"{}\"]", left, self.state, right)
    }
}
