//! Search driver configuration.

use crate::utils::{Cost, Priority};

/// Order in which the driver pulls records off the frontier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Strategy {
    /// Cheapest cumulative cost first (Dijkstra).
    #[default]
    UniformCost,
    /// Smallest heuristic first, ignoring cost so far.
    Greedy,
    /// Cost so far plus heuristic.
    AStar,
    /// FIFO frontier, priorities ignored.
    BreadthFirst,
    /// LIFO frontier, priorities ignored.
    DepthFirst,
}

impl Strategy {
    /// Priority a record gets given its cost so far and its heuristic estimate.
    pub fn priority(self, cumulative_cost: Cost, heuristic: Cost) -> Priority {
        match self {
            Strategy::UniformCost => cumulative_cost,
            Strategy::Greedy => heuristic,
            Strategy::AStar => cumulative_cost + heuristic,
            Strategy::BreadthFirst | Strategy::DepthFirst => 0.0,
        }
    }

    pub fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }
}

/// Configuration for one call to [`crate::search::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub strategy: Strategy,

    /// Stop after this many states have been expanded.
    /// `None` searches until a goal is found or the frontier runs dry.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::UniformCost,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// Informed search with an expansion cap, for puzzles that may be large.
    pub fn informed(max_expansions: usize) -> Self {
        Self {
            strategy: Strategy::AStar,
            max_expansions: Some(max_expansions),
        }
    }

    /// Builder pattern: set strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: cap the number of expansions.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.strategy, Strategy::UniformCost);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::Greedy)
            .with_max_expansions(10);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.max_expansions, Some(10));
        assert_eq!(SearchConfig::informed(5).strategy, Strategy::AStar);
    }

    #[test]
    fn test_priorities() {
        assert_eq!(Strategy::UniformCost.priority(3.0, 10.0), 3.0);
        assert_eq!(Strategy::Greedy.priority(3.0, 10.0), 10.0);
        assert_eq!(Strategy::AStar.priority(3.0, 10.0), 13.0);
        assert!(!Strategy::BreadthFirst.uses_heuristic());
    }
}
