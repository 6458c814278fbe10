//! Breadth-first exploration engine
//!
//! Explores every branch of nondeterminism in lockstep: the configuration
//! tree grows one level per round, and every configuration reached in `k`
//! steps is examined before any reached in `k + 1` steps. The run halts as
//! soon as any branch accepts, when every surviving branch has rejected,
//! or when a structural limit (tree depth, total transitions) is hit.
//!
//! Exploration is single-threaded and synchronous; nondeterminism is a
//! branching tree walked in order, not concurrent execution, so identical
//! inputs always produce identical outcomes.

use crate::machine::{Configuration, MachineDescription};
use crate::report::AcceptanceReport;
use crate::tree::ConfigTree;

/// Structural limits bounding one simulation run
///
/// These are the only cancellation mechanism: there are no wall-clock
/// timeouts, and a run in progress cannot be interrupted from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLimits {
    /// Maximum tree depth (number of exploration levels past the root)
    pub max_depth: usize,

    /// Maximum total transitions examined across all branches
    pub max_transitions: usize,
}

impl RunLimits {
    /// Creates explicit limits.
    pub fn new(max_depth: usize, max_transitions: usize) -> Self {
        Self {
            max_depth,
            max_transitions,
        }
    }
}

impl Default for RunLimits {
    /// Depth 100, transitions 1000
    fn default() -> Self {
        Self {
            max_depth: 100,
            max_transitions: 1000,
        }
    }
}

/// Terminal result of one simulation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Some branch reached the accept state
    Accepted {
        /// Total transitions consumed before the halt
        transitions: usize,
        /// Depth of the level holding the accepting configuration
        depth: usize,
        /// Census of everything explored up to that depth
        report: AcceptanceReport,
    },

    /// Every surviving branch reached the reject state
    Rejected {
        /// Total transitions consumed before the halt
        transitions: usize,
        /// Depth of the fully rejecting level
        depth: usize,
    },

    /// The tree grew past the depth limit with branches still live
    DepthLimitExceeded {
        /// Total transitions consumed before the halt
        transitions: usize,
        /// The depth limit that was reached
        depth: usize,
    },

    /// The transition budget ran out partway through a level
    TransitionLimitExceeded {
        /// Total transitions consumed (equals the budget)
        transitions: usize,
    },

    /// The transition budget ran out at a level boundary, leaving no
    /// further configurations to examine
    NoPath,
}

impl Outcome {
    /// Transitions consumed, when the outcome carries them
    pub fn transitions(&self) -> Option<usize> {
        match self {
            Outcome::Accepted { transitions, .. }
            | Outcome::Rejected { transitions, .. }
            | Outcome::DepthLimitExceeded { transitions, .. }
            | Outcome::TransitionLimitExceeded { transitions } => Some(*transitions),
            Outcome::NoPath => None,
        }
    }

    /// Depth reached, when the outcome carries it
    pub fn depth(&self) -> Option<usize> {
        match self {
            Outcome::Accepted { depth, .. }
            | Outcome::Rejected { depth, .. }
            | Outcome::DepthLimitExceeded { depth, .. } => Some(*depth),
            Outcome::TransitionLimitExceeded { .. } | Outcome::NoPath => None,
        }
    }

    /// True for [`Outcome::Accepted`]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }
}

/// Breadth-first simulator for one machine description
///
/// The simulator owns the configuration tree and transition counter for
/// the duration of one [`run`](Simulator::run) call; both are reset at the
/// start of every run, so a simulator is freely reusable across sequential
/// runs with no cross-run state.
#[derive(Debug)]
pub struct Simulator {
    machine: MachineDescription,
    limits: RunLimits,
    tree: ConfigTree,
    transitions_consumed: usize,
}

impl Simulator {
    /// Creates a simulator for the given machine and limits.
    pub fn new(machine: MachineDescription, limits: RunLimits) -> Self {
        Self {
            machine,
            limits,
            tree: ConfigTree::new(),
            transitions_consumed: 0,
        }
    }

    /// The machine being simulated
    pub fn machine(&self) -> &MachineDescription {
        &self.machine
    }

    /// The limits bounding each run
    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    /// Runs the machine on the input until a terminal outcome.
    ///
    /// The engine is total: every well-formed run ends in one of the
    /// [`Outcome`] variants. A description whose rules reference
    /// undeclared states or symbols is not detected here; it yields a
    /// well-defined (if unintended) outcome such as a branch no rule can
    /// extend.
    pub fn run(&mut self, input: &str) -> Outcome {
        self.tree = ConfigTree::new();
        self.tree.push_level(vec![Configuration::initial(
            self.machine.start_state().clone(),
            input,
        )]);
        self.transitions_consumed = 0;

        tracing::debug!(
            "starting run of '{}' on input \"{}\" (max depth {}, max transitions {})",
            self.machine.name(),
            input,
            self.limits.max_depth,
            self.limits.max_transitions
        );

        loop {
            // Step budget exhausted at a level boundary: nothing further
            // may be examined.
            if self.transitions_consumed >= self.limits.max_transitions {
                tracing::debug!(
                    "no remaining paths after {} transitions",
                    self.transitions_consumed
                );
                return Outcome::NoPath;
            }

            let current_level = self.tree.last_level();
            let mut next_level: Vec<Configuration> = Vec::new();

            for config in current_level {
                if config.state() == self.machine.accept_state() {
                    // Tree-wide halt: siblings and later configurations in
                    // this level are not examined.
                    let depth = self.tree.depth();
                    tracing::debug!(
                        "accepted at depth {} after {} transitions",
                        depth,
                        self.transitions_consumed
                    );
                    return Outcome::Accepted {
                        transitions: self.transitions_consumed,
                        depth,
                        report: AcceptanceReport::from_tree(&self.tree, depth),
                    };
                }

                if config.state() == self.machine.reject_state() {
                    // Retained for the all-rejected check, never expanded.
                    continue;
                }

                if self.transitions_consumed >= self.limits.max_transitions {
                    // Mid-level abort; the remaining configurations in
                    // this level are never examined.
                    tracing::debug!(
                        "transition budget of {} exhausted mid-level",
                        self.limits.max_transitions
                    );
                    return Outcome::TransitionLimitExceeded {
                        transitions: self.transitions_consumed,
                    };
                }
                self.transitions_consumed += 1;

                let symbol = config.head_symbol();
                let alternatives = self.machine.transitions(config.state(), symbol);
                if alternatives.is_empty() {
                    // Record the stuck branch as explicitly rejected
                    // rather than letting it vanish from the accounting.
                    next_level.push(config.stuck(self.machine.reject_state()));
                } else {
                    for transition in alternatives {
                        next_level.push(config.successor(transition));
                    }
                }
            }

            let all_rejected = next_level
                .iter()
                .all(|config| config.state() == self.machine.reject_state());

            if !next_level.is_empty() {
                tracing::debug!(
                    "level {} holds {} configurations",
                    self.tree.len(),
                    next_level.len()
                );
                self.tree.push_level(next_level);
            }

            if self.tree.len() > self.limits.max_depth {
                tracing::debug!("depth limit {} reached", self.limits.max_depth);
                return Outcome::DepthLimitExceeded {
                    transitions: self.transitions_consumed,
                    depth: self.limits.max_depth,
                };
            }

            if all_rejected {
                let depth = self.tree.depth();
                tracing::debug!(
                    "all branches rejected at depth {} after {} transitions",
                    depth,
                    self.transitions_consumed
                );
                return Outcome::Rejected {
                    transitions: self.transitions_consumed,
                    depth,
                };
            }
        }
    }
}
