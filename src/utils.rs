use std::fmt::Debug;
use std::hash::Hash;

// ---------- Tune-ables ---------- //
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;  // How far outcome probabilities may drift from summing to 1

// ---------- Basic types (renamed for pretty) ---------- //
pub type Cost = f64;
pub type Reward = f64;
pub type Probability = f64;
pub type Priority = f64;

/// Identity of an agent exploring an environment (chosen by the caller)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

// ---------- Traits the problem must provide ----------
/// Properties we want all states to have: equal content must compare and hash equal
pub trait StateI: Clone + Eq + Hash + Debug {}
impl<T: Clone + Eq + Hash + Debug> StateI for T {}
/// Properties we want all action labels to have
pub trait ActionI: Clone + Eq + Debug {}
impl<T: Clone + Eq + Debug> ActionI for T {}

/// A problem domain the search core can explore without knowing its representation
pub trait Problem {
    type State: StateI;
    type Action: ActionI;

    /// What actions are legal from this state (may be empty for dead ends)
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    /// Every state the action could lead to with (successor, step cost, probability)
    fn outcomes(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, Cost, Probability)>;
    /// Check if the search is done
    fn is_goal(&self, state: &Self::State) -> bool;
    /// Estimated remaining cost for informed strategies (defaults to uninformed)
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0.0
    }
}

/// Check that a set of probabilities forms a distribution
pub fn sums_to_one(probabilities: impl IntoIterator<Item = Probability>) -> Result<(), Probability> {
    let sum: Probability = probabilities.into_iter().sum();
    if (sum - 1.0).abs() <= PROBABILITY_TOLERANCE { Ok(()) } else { Err(sum) }
}
