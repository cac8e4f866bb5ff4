//! Domain agnostic state-space search and game-tree evaluation.
//!
//! - [`environment::Environment`] expands states of any [`utils::Problem`] into
//!   movements, hands out single-use [`token::StateToken`]s and memoizes expansions.
//! - [`frontier`] and [`agent`] hold the worklist and the predecessor chains a search
//!   driver needs, and [`search::solve`] is such a driver.
//! - [`expectimax`] and [`score_tree`] back scores up through trees of decision and chance nodes.

pub mod utils;
pub mod error;
pub mod token;
pub mod movement;
pub mod environment;
pub mod agent;
pub mod frontier;
pub mod config;
pub mod search;
pub mod expectimax;
pub mod score_tree;
pub mod games;

#[cfg(test)]
mod search_tests;

pub use config::{SearchConfig, Strategy};
pub use environment::Environment;
pub use error::{Error, Malformation, Result};
pub use expectimax::{Expectimax, GameNode};
pub use search::{solve, SearchOutcome, Solution};
pub use utils::{AgentId, Problem};
