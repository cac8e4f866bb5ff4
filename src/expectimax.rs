//! Backed-up scores for game trees mixing decision and chance nodes.
//!
//! Deterministic nodes take the max (maximizer) or min (minimizer) of their
//! children, chance nodes take the probability weighted sum, terminal nodes keep
//! the score they were built with. Scores are written back into every node.

use crate::error::{Malformation, Result};
use crate::utils::*;

/// A successor together with how likely it is to be reached
#[derive(Debug, Clone, PartialEq)]
pub struct Branch<N> {
    pub node: N,
    pub probability: Probability,
}

impl<N> Branch<N> {
    pub fn new(node: N, probability: Probability) -> Self {
        Branch { node, probability }
    }

    /// A branch of a decision node, where probabilities play no part
    pub fn certain(node: N) -> Self {
        Branch { node, probability: 1.0 }
    }
}

pub trait GameNode: Sized {
    fn is_maximizer(&self) -> bool;
    fn is_terminal(&self) -> bool;
    fn is_deterministic(&self) -> bool;
    fn score(&self) -> Reward;
    fn set_score(&mut self, score: Reward);
    /// Children of this node, generated on first use if the node is lazy.
    /// Terminal nodes should return an empty slice.
    fn successors(&mut self) -> &mut [Branch<Self>];
}

/// Combine two child scores for a decision node. NaN wins so it is never hidden.
#[inline]
pub(crate) fn pick(maximizer: bool, a: Reward, b: Reward) -> Reward {
    if a.is_nan() || b.is_nan() {
        Reward::NAN
    } else if maximizer {
        a.max(b)
    } else {
        a.min(b)
    }
}

/// Score every node below `node` in post-order and return the root's new score.
/// Recursive, so meant for trees of modest depth (see [`crate::score_tree`] otherwise).
pub fn propagate_scores<N: GameNode>(node: &mut N) -> Result<Reward> {
    if node.is_terminal() {
        return Ok(node.score());
    }
    let deterministic = node.is_deterministic();
    let maximizer = node.is_maximizer();

    let branches = node.successors();
    if branches.is_empty() {
        return Err(Malformation::NoSuccessors.into());
    }
    let score = if deterministic {
        let mut best: Option<Reward> = None;
        for branch in branches.iter_mut() {
            let s = propagate_scores(&mut branch.node)?;
            best = Some(best.map_or(s, |b| pick(maximizer, b, s)));
        }
        best.unwrap_or(Reward::NAN)
    } else {
        sums_to_one(branches.iter().map(|b| b.probability))
            .map_err(|sum| Malformation::ProbabilitySum { sum })?;
        let mut expectation = 0.0;
        for branch in branches.iter_mut() {
            expectation += branch.probability * propagate_scores(&mut branch.node)?;
        }
        expectation
    };

    node.set_score(score);
    Ok(score)
}

/// Index of the child the player at a decision node should pick, using scores
/// already propagated. Ties go to the earliest child. `None` for terminal and chance nodes.
pub fn best_successor<N: GameNode>(node: &mut N) -> Option<usize> {
    if node.is_terminal() || !node.is_deterministic() {
        return None;
    }
    let maximizer = node.is_maximizer();
    let mut best: Option<(usize, Reward)> = None;
    for (i, branch) in node.successors().iter().enumerate() {
        let s = branch.node.score();
        let better = match best {
            None => true,
            Some((_, b)) => if maximizer { s > b } else { s < b },
        };
        if better {
            best = Some((i, s));
        }
    }
    best.map(|(i, _)| i)
}

/// Holds the root of a game tree and propagates scores through it on request.
/// Nothing is cached between calls; every propagation walks the whole tree again.
pub struct Expectimax<N: GameNode> {
    root: N,
}

impl<N: GameNode> Expectimax<N> {
    pub fn new(root: N) -> Self {
        Expectimax { root }
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut N {
        &mut self.root
    }

    pub fn into_root(self) -> N {
        self.root
    }

    pub fn propagate_scores(&mut self) -> Result<Reward> {
        propagate_scores(&mut self.root)
    }

    /// Propagate, then report which child the root's player should choose
    pub fn best_choice(&mut self) -> Result<Option<usize>> {
        self.propagate_scores()?;
        Ok(best_successor(&mut self.root))
    }
}
