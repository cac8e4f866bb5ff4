//! Error types for the search core

use thiserror::Error;

use crate::token::StateToken;
use crate::utils::{AgentId, Probability};

/// Everything that can go wrong while driving an environment, a frontier or an evaluator
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("{0} is already registered")]
    DuplicateAgent(AgentId),

    #[error("{0} was never registered")]
    UnknownAgent(AgentId),

    #[error("state token {0} was never issued or has already been consumed")]
    UnknownToken(StateToken),

    #[error("environment still holds {memoized} expanded states from an earlier search, reset it first")]
    EpisodeInProgress { memoized: usize },

    #[error("frontier is empty")]
    EmptyFrontier,

    #[error("malformed tree: {0}")]
    MalformedTree(Malformation),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Construction bugs in a game tree or an environment's movements
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Malformation {
    #[error("non-terminal node has no successors")]
    NoSuccessors,

    #[error("movement has no outcomes")]
    NoOutcomes,

    #[error("outcome probabilities sum to {sum} instead of 1")]
    ProbabilitySum { sum: Probability },
}

impl From<Malformation> for Error {
    fn from(m: Malformation) -> Self {
        Error::MalformedTree(m)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
