use crate::token::StateToken;
use crate::utils::{Cost, Priority};

/// Index of a record inside a [`RecordArena`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RecordId(usize);

/// How an agent reached a state. Immutable once pushed into the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRecord<S> {
    pub state: S,
    pub token: StateToken,
    pub predecessor: Option<RecordId>,
    pub priority: Priority,
    pub cumulative_cost: Cost,
}

/// Append-only store of every record produced during a search. Predecessor
/// handles point backwards into it, so a path stays walkable after its
/// records have left the frontier.
#[derive(Debug)]
pub struct RecordArena<S> {
    records: Vec<AgentRecord<S>>,
}

impl<S> Default for RecordArena<S> {
    fn default() -> Self {
        Self { records: vec![] }
    }
}

impl<S> RecordArena<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: AgentRecord<S>) -> RecordId {
        debug_assert!(record.predecessor.map_or(true, |p| p.0 < self.records.len()));
        self.records.push(record);
        RecordId(self.records.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: RecordId) -> &AgentRecord<S> {
        &self.records[id.0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from the root down to `id`
    pub fn path(&self, id: RecordId) -> Vec<&AgentRecord<S>> {
        let mut path = vec![];
        let mut at = Some(id);
        while let Some(i) = at {
            let record = self.get(i);
            path.push(record);
            at = record.predecessor;
        }
        path.reverse();
        path
    }
}

impl<S: Clone> RecordArena<S> {
    pub fn states(&self, id: RecordId) -> Vec<S> {
        self.path(id).into_iter().map(|r| r.state.clone()).collect()
    }
}
