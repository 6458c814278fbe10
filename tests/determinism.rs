//! Determinism tests: identical inputs must produce identical outcomes
//!
//! Nondeterminism in the simulated machine is structural, not random;
//! the engine itself is a deterministic walk of the configuration tree.

use ntmsim::{RunLimits, Simulator};

mod test_helpers;
use test_helpers::*;

#[test]
fn test_reruns_on_one_simulator_are_identical() {
    let mut simulator = Simulator::new(branching_machine(false), RunLimits::default());

    let first = simulator.run("a");
    for _ in 0..5 {
        assert_eq!(simulator.run("a"), first, "outcomes diverged across reruns");
    }
}

#[test]
fn test_fresh_simulators_agree() {
    let limits = RunLimits::new(8, 200);

    let baseline = Simulator::new(doubling_machine(), limits).run("");
    for _ in 0..5 {
        let outcome = Simulator::new(doubling_machine(), limits).run("");
        assert_eq!(outcome, baseline, "outcomes diverged across simulators");
    }
}

#[test]
fn test_acceptance_reports_are_reproducible() {
    let mut simulator = Simulator::new(branching_machine(true), RunLimits::default());

    let first = simulator.run("a");
    let second = simulator.run("a");

    // The whole outcome, census levels included, must match bit for bit.
    assert_eq!(first, second);
}
