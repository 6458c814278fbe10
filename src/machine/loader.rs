//! Machine definition loader
//!
//! Parses the tabular, comma-separated definition format:
//!
//! ```text
//! example-machine        line 1: machine name
//! q0,q1,qa,qr            line 2: state list
//! 0,1                    line 3: input alphabet
//! 0,1,_                  line 4: tape alphabet
//! q0                     line 5: start state
//! qa                     line 6: accept state
//! qr                     line 7: reject state
//! q0,0,q1,1,R            remaining lines: state,read,next,write,direction
//! ```
//!
//! Symbols are single characters and directions are `L` or `R`; anything
//! else is a load-time error. Rules may freely reference states or symbols
//! absent from the declared lists; the description is taken as given and
//! the simulation engine performs no cross-checking of its own.

use super::{MachineDescription, State, Symbol};
use crate::DefinitionError;
use std::fs;
use std::path::Path;

/// Sections that must appear, in order, before any rule rows.
const SECTIONS: [&str; 7] = [
    "machine name",
    "state list",
    "input alphabet",
    "tape alphabet",
    "start state",
    "accept state",
    "reject state",
];

/// Reads and parses a machine definition file.
pub fn load(path: impl AsRef<Path>) -> Result<MachineDescription, DefinitionError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parses a machine definition from text.
pub fn parse(text: &str) -> Result<MachineDescription, DefinitionError> {
    // Keep original line numbers for error reporting; blank lines carry
    // no row content and are skipped.
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if rows.len() < SECTIONS.len() {
        return Err(DefinitionError::Truncated {
            expected: SECTIONS[rows.len()],
        });
    }

    let name = first_field(rows[0].1);
    let states: Vec<State> = rows[1]
        .1
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(State::new)
        .collect();
    let input_alphabet = parse_alphabet(rows[2].0, rows[2].1)?;
    let tape_alphabet = parse_alphabet(rows[3].0, rows[3].1)?;
    let start_state = first_field(rows[4].1);
    let accept_state = first_field(rows[5].1);
    let reject_state = first_field(rows[6].1);

    let mut builder = MachineDescription::builder()
        .name(name)
        .states(states)
        .input_alphabet(input_alphabet)
        .tape_alphabet(tape_alphabet)
        .start_state(start_state)
        .accept_state(accept_state)
        .reject_state(reject_state);

    for &(line, row) in &rows[SECTIONS.len()..] {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(DefinitionError::MalformedRule {
                line,
                reason: format!("expected 5 fields, found {}", fields.len()),
            });
        }

        let read = parse_symbol(line, fields[1])?;
        let write = parse_symbol(line, fields[3])?;
        let direction = fields[4]
            .parse()
            .map_err(|_| DefinitionError::InvalidDirection {
                line,
                value: fields[4].to_string(),
            })?;

        builder = builder.add_transition(fields[0], read, fields[2], write, direction);
    }

    builder.build()
}

fn first_field(row: &str) -> String {
    row.split(',').next().unwrap_or("").trim().to_string()
}

fn parse_alphabet(line: usize, row: &str) -> Result<Vec<Symbol>, DefinitionError> {
    row.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| parse_symbol(line, field))
        .collect()
}

fn parse_symbol(line: usize, field: &str) -> Result<Symbol, DefinitionError> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(DefinitionError::InvalidSymbol {
            line,
            value: field.to_string(),
        }),
    }
}
