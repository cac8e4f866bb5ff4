//! Arena-backed game tree evaluated with an explicit stack.
//!
//! Nodes live in one `Vec` and refer to their children by [`NodeId`]. Children are
//! always built before their parent, so the tree can never contain a cycle. The
//! evaluation order and combine rules are the same as [`crate::expectimax`], but
//! no recursion is involved so arbitrarily deep trees are fine.

use crate::error::{Malformation, Result};
use crate::expectimax::pick;
use crate::utils::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ScoreNode {
    maximizer: bool,
    terminal: bool,
    deterministic: bool,
    score: Reward,
    children: Vec<(NodeId, Probability)>,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreTree {
    nodes: Vec<ScoreNode>,
}

impl ScoreTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, node: ScoreNode) -> NodeId {
        debug_assert!(node.children.iter().all(|(c, _)| c.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Terminal node with a fixed score
    pub fn leaf(&mut self, score: Reward) -> NodeId {
        self.allocate(ScoreNode { maximizer: true, terminal: true, deterministic: true, score, children: vec![] })
    }

    /// Deterministic node taking the max or min of its children
    pub fn decision(&mut self, maximizer: bool, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        let children = children.into_iter().map(|c| (c, 1.0)).collect();
        self.allocate(ScoreNode { maximizer, terminal: false, deterministic: true, score: 0.0, children })
    }

    /// Chance node taking the expectation over its children
    pub fn chance(&mut self, children: impl IntoIterator<Item = (NodeId, Probability)>) -> NodeId {
        let children = children.into_iter().collect();
        self.allocate(ScoreNode { maximizer: false, terminal: false, deterministic: false, score: 0.0, children })
    }

    pub fn score(&self, id: NodeId) -> Reward {
        self.nodes[id.0].score
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0].children.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Post-order propagation from `root`, writing every visited node's score
    pub fn evaluate(&mut self, root: NodeId) -> Result<Reward> {
        // (node, children already pushed)
        let mut stack = vec![(root, false)];
        while let Some((id, ready)) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.terminal {
                continue;
            }
            if !ready {
                if node.children.is_empty() {
                    return Err(Malformation::NoSuccessors.into());
                }
                if !node.deterministic {
                    sums_to_one(node.children.iter().map(|(_, p)| *p))
                        .map_err(|sum| Malformation::ProbabilitySum { sum })?;
                }
                stack.push((id, true));
                stack.extend(node.children.iter().rev().map(|(c, _)| (*c, false)));
                continue;
            }
            let score = if node.deterministic {
                node.children.iter()
                    .map(|(c, _)| self.nodes[c.0].score)
                    .reduce(|a, b| pick(node.maximizer, a, b))
                    .unwrap_or(Reward::NAN)
            } else {
                node.children.iter().map(|(c, p)| p * self.nodes[c.0].score).sum()
            };
            self.nodes[id.0].score = score;
        }
        Ok(self.score(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn mixed_tree_matches_weighted_sums() {
        let mut t = ScoreTree::new();
        let (a, b) = (t.leaf(-3.0), t.leaf(6.0));
        let first = t.chance([(a, 0.33), (b, 0.67)]);
        let (c, d) = (t.leaf(7.0), t.leaf(0.0));
        let second = t.decision(false, [c, d]);
        let (e, f) = (t.leaf(3.0), t.leaf(0.0));
        let third = t.chance([(e, 0.33), (f, 0.67)]);
        let root = t.decision(true, [first, second, third]);

        let score = t.evaluate(root).unwrap();
        assert!((t.score(first) - 3.03).abs() < 1e-9);
        assert_eq!(t.score(second), 0.0);
        assert!((t.score(third) - 0.99).abs() < 1e-9);
        assert!((score - 3.03).abs() < 1e-9);
        assert_eq!(t.children(root).collect::<Vec<_>>(), vec![first, second, third]);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut t = ScoreTree::new();
        let mut at = t.leaf(1.0);
        for depth in 0..200_000 {
            at = if depth % 3 == 0 {
                let other = t.leaf(-1.0);
                t.chance([(at, 0.5), (other, 0.5)])
            } else {
                t.decision(depth % 2 == 0, [at])
            };
        }
        let score = t.evaluate(at).unwrap();
        assert!(score.is_finite());
        assert!((-1.0..=1.0).contains(&score));
        assert!(t.len() > 200_000);
    }

    #[test]
    fn subtrees_can_be_evaluated_alone() {
        let mut t = ScoreTree::new();
        let (a, b) = (t.leaf(2.0), t.leaf(8.0));
        let max = t.decision(true, [a, b]);
        let min = t.decision(false, [a, b]);
        let root = t.chance([(max, 0.25), (min, 0.75)]);
        assert_eq!(t.evaluate(min), Ok(2.0));
        assert_eq!(t.score(max), 0.0);
        assert_eq!(t.evaluate(root), Ok(0.25 * 8.0 + 0.75 * 2.0));
    }

    #[test]
    fn malformed_nodes_are_rejected() {
        let mut t = ScoreTree::new();
        let empty = t.decision(true, []);
        let root = t.decision(true, [empty]);
        assert_eq!(t.evaluate(root), Err(Error::MalformedTree(Malformation::NoSuccessors)));

        let leaf = t.leaf(1.0);
        let lopsided = t.chance([(leaf, 0.7)]);
        assert!(matches!(
            t.evaluate(lopsided),
            Err(Error::MalformedTree(Malformation::ProbabilitySum { .. }))
        ));
    }
}
