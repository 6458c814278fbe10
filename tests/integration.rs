//! Full pipeline tests: parse a definition, then simulate it

use ntmsim::{loader, Outcome, RunLimits, Simulator};

/// Nondeterministic machine accepting strings that contain "aa": while
/// scanning it may guess, on any 'a', that the pair starts here.
const CONTAINS_AA: &str = "\
contains-aa
q0,q1,qa,qr
a,b
a,b,_
q0
qa
qr
q0,a,q0,a,R
q0,a,q1,a,R
q0,b,q0,b,R
q1,a,qa,a,R
";

#[test]
fn test_loaded_machine_accepts_matching_input() {
    let machine = loader::parse(CONTAINS_AA).unwrap();
    let mut simulator = Simulator::new(machine, RunLimits::default());

    let outcome = simulator.run("baab");
    assert!(outcome.is_accepted());
    // The accepting branch reads 'b', guesses on the first 'a', and
    // confirms the pair: its accepting configuration sits at level 3.
    assert_eq!(outcome.depth(), Some(3));
}

#[test]
fn test_loaded_machine_rejects_input_without_the_pair() {
    let machine = loader::parse(CONTAINS_AA).unwrap();
    let mut simulator = Simulator::new(machine, RunLimits::default());

    match simulator.run("abab") {
        Outcome::Rejected { .. } => {}
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_acceptance_census_counts_all_branches() {
    let machine = loader::parse(CONTAINS_AA).unwrap();
    let mut simulator = Simulator::new(machine, RunLimits::default());

    match simulator.run("aa") {
        Outcome::Accepted { depth, report, .. } => {
            // Both alternatives of the first 'a' are in the census, not
            // just the lineage that accepted.
            assert_eq!(depth, 2);
            assert!(report.total_configurations() > depth + 1);
            assert!(report.average_branching().unwrap() > 1.0);
        }
        other => panic!("expected acceptance, got {:?}", other),
    }
}

#[test]
fn test_limits_flow_through_the_pipeline() {
    let machine = loader::parse(CONTAINS_AA).unwrap();
    let mut simulator = Simulator::new(machine, RunLimits::new(2, 1000));

    // The machine needs depth 3 on this input but the tree may only
    // reach depth 2: one transition for 'b', one for the branching 'a'.
    assert_eq!(
        simulator.run("baa"),
        Outcome::DepthLimitExceeded {
            transitions: 2,
            depth: 2,
        }
    );
}
