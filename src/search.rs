//! Best-first graph search built out of an [`Environment`] and a [`Frontier`].
//!
//! The driver loop is the plain one: dequeue a record, stop if it is a goal,
//! otherwise expand it through the environment and enqueue one record per
//! outcome. Expanded states go in a closed set keyed by state value, so each
//! state is expanded at most once per call.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::agent::{AgentRecord, RecordArena, RecordId};
use crate::config::{SearchConfig, Strategy};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::utils::*;

/// A path from the start state to a goal
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// States from start to goal, both included
    pub path: Vec<S>,
    /// Cumulative cost at each state of `path`
    pub costs: Vec<Cost>,
    pub expansions: usize,
}

impl<S> Solution<S> {
    pub fn cost(&self) -> Cost {
        self.costs.last().copied().unwrap_or(0.0)
    }

    /// Number of moves taken
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<S> {
    Solved(Solution<S>),
    /// Every reachable state was explored and none is a goal
    Exhausted { expansions: usize },
    /// The expansion cap was hit first
    OutOfBudget { expansions: usize },
}

impl<S> SearchOutcome<S> {
    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            SearchOutcome::Solved(s) => Some(s),
            _ => None,
        }
    }

    pub fn expansions(&self) -> usize {
        match self {
            SearchOutcome::Solved(s) => s.expansions,
            SearchOutcome::Exhausted { expansions } | SearchOutcome::OutOfBudget { expansions } => *expansions,
        }
    }
}

/// Register `agent` at `start` and search until a goal, exhaustion or the budget.
/// The frontier is picked from the configured strategy.
///
/// The environment must not have expanded anything yet. Memo hits hand back the
/// tokens of whichever agent expanded the state first, and those are spent, so a
/// search sharing an episode with an earlier one fails with
/// [`Error::EpisodeInProgress`] before registering. Call [`Environment::reset`]
/// between searches.
pub fn solve<P: Problem>(
    env: &mut Environment<P>,
    agent: AgentId,
    start: P::State,
    config: &SearchConfig,
) -> Result<SearchOutcome<P::State>> {
    match config.strategy {
        Strategy::BreadthFirst => solve_with(env, agent, start, config, QueueFrontier::default()),
        Strategy::DepthFirst => solve_with(env, agent, start, config, StackFrontier::default()),
        _ => solve_with(env, agent, start, config, PriorityFrontier::new()),
    }
}

/// Same as [`solve`] but with a caller supplied frontier (same episode rules)
pub fn solve_with<P: Problem, F: Frontier<RecordId>>(
    env: &mut Environment<P>,
    agent: AgentId,
    start: P::State,
    config: &SearchConfig,
    mut frontier: F,
) -> Result<SearchOutcome<P::State>> {
    let strategy = config.strategy;
    let estimate = |env: &Environment<P>, state: &P::State| {
        if strategy.uses_heuristic() { env.problem().heuristic(state) } else { 0.0 }
    };

    if env.memoized_states() > 0 {
        warn!("{} cannot search: {} states already expanded this episode", agent, env.memoized_states());
        return Err(Error::EpisodeInProgress { memoized: env.memoized_states() });
    }
    let token = env.register_agent(agent, start.clone())?;
    let priority = strategy.priority(0.0, estimate(env, &start));
    let mut arena = RecordArena::new();
    let root = arena.push(AgentRecord { state: start, token, predecessor: None, priority, cumulative_cost: 0.0 });
    frontier.enqueue(root, priority);

    let mut closed: HashSet<P::State> = HashSet::new();
    let mut expansions = 0;
    loop {
        let id = match frontier.dequeue() {
            Ok(id) => id,
            Err(Error::EmptyFrontier) => {
                debug!("{} exhausted the frontier after {} expansions, no path found", agent, expansions);
                return Ok(SearchOutcome::Exhausted { expansions });
            }
            Err(e) => return Err(e),
        };

        let record = arena.get(id);
        if env.problem().is_goal(&record.state) {
            let path = arena.path(id);
            let solution = Solution {
                costs: path.iter().map(|r| r.cumulative_cost).collect(),
                path: path.into_iter().map(|r| r.state.clone()).collect(),
                expansions,
            };
            debug!("{} reached a goal in {} moves (cost {}) after {} expansions",
                agent, solution.len(), solution.cost(), expansions);
            return Ok(SearchOutcome::Solved(solution));
        }
        if closed.contains(&record.state) {
            continue;
        }
        if config.max_expansions.is_some_and(|max| expansions >= max) {
            warn!("{} stopped at the expansion budget of {} with {} records queued", agent, expansions, frontier.count());
            return Ok(SearchOutcome::OutOfBudget { expansions });
        }

        let (token, cost_so_far) = (record.token, record.cumulative_cost);
        closed.insert(record.state.clone());
        let movements = env.get_movements(agent, token)?;
        expansions += 1;

        for outcome in movements.iter().flat_map(|m| m.outcomes.iter()) {
            if closed.contains(&outcome.state) {
                continue;
            }
            let cumulative_cost = cost_so_far + outcome.cost;
            let priority = strategy.priority(cumulative_cost, estimate(env, &outcome.state));
            let child = arena.push(AgentRecord {
                state: outcome.state.clone(),
                token: outcome.token,
                predecessor: Some(id),
                priority,
                cumulative_cost,
            });
            frontier.enqueue(child, priority);
        }
        trace!("{} frontier holds {} records, arena {}", agent, frontier.count(), arena.len());
    }
}
