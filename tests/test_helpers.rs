//! Test helper functions for creating test machines

#![allow(dead_code)]

use ntmsim::{Direction, MachineDescription};

/// Create a single-rule machine that rewrites '0' to '1' and accepts
pub fn unary_increment_machine() -> MachineDescription {
    MachineDescription::builder()
        .name("unary-increment")
        .states(vec!["q0".into(), "qa".into(), "qr".into()])
        .input_alphabet(vec!['0'])
        .tape_alphabet(vec!['0', '1', '_'])
        .start_state("q0")
        .accept_state("qa")
        .reject_state("qr")
        .add_transition("q0", '0', "qa", '1', Direction::Right)
        .build()
        .unwrap()
}

/// Create a machine with no rules at all; every branch gets stuck
pub fn stuck_machine() -> MachineDescription {
    MachineDescription::builder()
        .name("stuck")
        .start_state("q0")
        .accept_state("qa")
        .reject_state("qr")
        .build()
        .unwrap()
}

/// Create a machine that marches right forever, over input and blanks
pub fn runaway_machine() -> MachineDescription {
    MachineDescription::builder()
        .name("runaway")
        .start_state("q0")
        .accept_state("qa")
        .reject_state("qr")
        .add_transition("q0", 'a', "q0", 'a', Direction::Right)
        .add_transition("q0", '_', "q0", '_', Direction::Right)
        .build()
        .unwrap()
}

/// Create a machine with two alternatives on `(q0, 'a')`: one accepts,
/// one loops forever. `accept_first` controls the definition order.
pub fn branching_machine(accept_first: bool) -> MachineDescription {
    let builder = MachineDescription::builder()
        .name("branching")
        .start_state("q0")
        .accept_state("qa")
        .reject_state("qr");

    let builder = if accept_first {
        builder
            .add_transition("q0", 'a', "qa", 'a', Direction::Right)
            .add_transition("q0", 'a', "q0", 'a', Direction::Right)
    } else {
        builder
            .add_transition("q0", 'a', "q0", 'a', Direction::Right)
            .add_transition("q0", 'a', "qa", 'a', Direction::Right)
    };

    builder
        .add_transition("q0", '_', "q0", '_', Direction::Right)
        .build()
        .unwrap()
}

/// Create a machine whose tree doubles at every level: two alternatives
/// on every blank cell
pub fn doubling_machine() -> MachineDescription {
    MachineDescription::builder()
        .name("doubling")
        .start_state("q0")
        .accept_state("qa")
        .reject_state("qr")
        .add_transition("q0", '_', "q0", 'x', Direction::Right)
        .add_transition("q0", '_', "q0", '_', Direction::Right)
        .build()
        .unwrap()
}
