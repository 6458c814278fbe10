//! Transition alternatives: (next state, symbol to write, head direction)

use super::{State, Symbol};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Single transition alternative for a `(state, symbol)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Next state
    pub next_state: State,

    /// Symbol written under the head before the move
    pub write: Symbol,

    /// Head movement direction
    pub direction: Direction,
}

/// Head movement direction
///
/// There is no stay move; every applied transition shifts the head one
/// cell left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Move left (toward the written prefix)
    Left,

    /// Move right (toward the unwritten blanks)
    Right,
}

/// Error returned when a direction letter is neither `L` nor `R`
#[derive(Error, Debug)]
#[error("head direction must be 'L' or 'R'")]
pub struct ParseDirectionError;

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            _ => Err(ParseDirectionError),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}
