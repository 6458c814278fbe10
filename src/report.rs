//! Acceptance report: a census of everything explored
//!
//! When a branch accepts at depth `d`, the report captures every
//! configuration at every level `0..=d`, deliberately not just the
//! accepting lineage. The point is to surface how much nondeterminism the
//! run actually explored; isolating a single accepting path would hide
//! that.

use crate::machine::Configuration;
use crate::tree::ConfigTree;

/// Per-level census of all configurations explored up to the accepting
/// depth
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptanceReport {
    levels: Vec<Vec<Configuration>>,
}

impl AcceptanceReport {
    /// Captures levels `0..=depth` of the tree.
    ///
    /// # Panics
    ///
    /// When the tree has fewer than `depth + 1` levels.
    pub fn from_tree(tree: &ConfigTree, depth: usize) -> Self {
        let levels = (0..=depth).map(|index| tree.level(index).to_vec()).collect();
        Self { levels }
    }

    /// Depth of the accepting level
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Iterates the captured levels from the root down.
    pub fn levels(&self) -> impl Iterator<Item = &[Configuration]> + '_ {
        self.levels.iter().map(Vec::as_slice)
    }

    /// Total number of configurations across all captured levels
    pub fn total_configurations(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Average nondeterminism: total configurations divided by the
    /// accepting depth. Undefined (`None`) when acceptance happened at
    /// depth 0, where there was no expansion to average over.
    pub fn average_branching(&self) -> Option<f64> {
        match self.depth() {
            0 => None,
            depth => Some(self.total_configurations() as f64 / depth as f64),
        }
    }
}
