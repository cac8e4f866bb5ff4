use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;

use crate::error::Malformation;
use crate::token::StateToken;
use crate::utils::*;

// ---------- Outcome ----------
/// One possible result of taking a movement
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<S> {
    pub state: S,
    pub token: StateToken,
    pub cost: Cost,
    pub probability: Probability,
}

/// Outcome probabilities of one movement, before any token exists for them
pub fn check_distribution(probabilities: impl IntoIterator<Item = Probability>) -> Result<(), Malformation> {
    let mut probabilities = probabilities.into_iter().peekable();
    if probabilities.peek().is_none() {
        return Err(Malformation::NoOutcomes);
    }
    sums_to_one(probabilities).map_err(|sum| Malformation::ProbabilitySum { sum })
}

// ---------- Movement ----------
/// A candidate action from a state with every way it could turn out
#[derive(Debug, Clone, PartialEq)]
pub struct Movement<S, A> {
    pub action: A,
    pub outcomes: Vec<Outcome<S>>,
}

impl<S, A> Movement<S, A> {
    pub fn new(action: A, outcomes: Vec<Outcome<S>>) -> Self {
        Movement { action, outcomes }
    }

    #[inline] pub fn is_deterministic(&self) -> bool {
        self.outcomes.len() == 1
    }

    /// A movement needs at least one outcome and its probabilities must form a distribution
    pub fn validate(&self) -> Result<(), Malformation> {
        check_distribution(self.outcomes.iter().map(|o| o.probability))
    }

    /// The outcome the movement usually leads to (first one on ties)
    pub fn most_likely(&self) -> Option<&Outcome<S>> {
        self.outcomes.iter().reduce(|best, o| if o.probability > best.probability { o } else { best })
    }

    /// Roll the dice on which outcome actually happens
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Outcome<S>> {
        if self.is_deterministic() {
            return self.outcomes.first();
        }
        let dist = WeightedIndex::new(self.outcomes.iter().map(|o| o.probability)).ok()?;
        self.outcomes.get(dist.sample(rng))
    }
}
