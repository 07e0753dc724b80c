//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited, root included.
    pub nodes_visited: u64,

    /// Non-terminal states whose successors were generated.
    pub nodes_expanded: u64,

    /// Terminal states reached.
    pub leaves: u64,

    /// Deepest ply visited (root = 0).
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count a visit at `depth`, failing once `budget` is exceeded.
    pub fn record_visit(&mut self, depth: u32, budget: Option<u64>) -> Result<(), SearchError> {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
        match budget {
            Some(budget) if self.nodes_visited > budget => {
                Err(SearchError::NodeBudgetExhausted { budget })
            }
            _ => Ok(()),
        }
    }

    /// Visited nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average successors generated per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            // Every visited node except the root was generated by an expansion.
            self.nodes_visited.saturating_sub(1) as f64 / self.nodes_expanded as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_visit_tracks_depth() {
        let mut stats = SearchStats::new();
        stats.record_visit(0, None).unwrap();
        stats.record_visit(3, None).unwrap();
        stats.record_visit(1, None).unwrap();

        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_record_visit_budget() {
        let mut stats = SearchStats::new();
        assert!(stats.record_visit(0, Some(2)).is_ok());
        assert!(stats.record_visit(1, Some(2)).is_ok());
        assert_eq!(
            stats.record_visit(1, Some(2)),
            Err(SearchError::NodeBudgetExhausted { budget: 2 })
        );
    }

    #[test]
    fn test_rates() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);
        assert_eq!(stats.branching_factor(), 0.0);

        stats.nodes_visited = 7;
        stats.nodes_expanded = 3;
        stats.time_us = 1_000_000;

        assert_eq!(stats.nodes_per_second(), 7.0);
        assert_eq!(stats.branching_factor(), 2.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.leaves = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
