//! Exhaustive search configuration.

use serde::{Deserialize, Serialize};

/// Configuration shared by both minimax engines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum nodes a single search may visit (`None` = unlimited).
    ///
    /// Unlimited search only terminates on games whose trees are finite.
    /// Games with repeatable positions need a budget; when it runs out the
    /// search fails instead of choosing a move.
    pub node_budget: Option<u64>,
}

impl SearchConfig {
    /// Unlimited search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of nodes a search may visit.
    #[must_use]
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }
}
