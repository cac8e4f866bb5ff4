use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Handle standing in for one live state instance during a search episode.
/// Tokens are compared by identity, never by the state they point at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StateToken(u64);

impl StateToken {
    #[inline] pub fn id(self) -> u64 { self.0 }
}

impl Display for StateToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tokens and remembers which state each live one refers to
#[derive(Debug)]
pub struct TokenTable<S> {
    next: u64,
    live: HashMap<StateToken, S>,
}

impl<S> Default for TokenTable<S> {
    fn default() -> Self {
        Self { next: 0, live: HashMap::new() }
    }
}

impl<S> TokenTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fresh token to the state
    pub fn issue(&mut self, state: S) -> StateToken {
        let token = StateToken(self.next);
        self.next += 1;
        self.live.insert(token, state);
        token
    }

    /// Take the state out, the token is dead afterwards
    pub fn consume(&mut self, token: StateToken) -> Result<S> {
        self.live.remove(&token).ok_or(Error::UnknownToken(token))
    }

    pub fn peek(&self, token: StateToken) -> Option<&S> {
        self.live.get(&token)
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn issued(&self) -> u64 {
        self.next
    }

    /// Forget every live binding. The counter keeps going so old tokens never resolve again.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_single_use() {
        let mut table = TokenTable::new();
        let t = table.issue("start");
        assert_eq!(table.peek(t), Some(&"start"));
        assert_eq!(table.consume(t), Ok("start"));
        assert_eq!(table.consume(t), Err(Error::UnknownToken(t)));
        assert_eq!(table.live(), 0);
    }

    #[test]
    fn equal_states_get_distinct_tokens() {
        let mut table = TokenTable::new();
        let a = table.issue(5);
        let b = table.issue(5);
        assert_ne!(a, b);
        assert_eq!(table.live(), 2);
    }

    #[test]
    fn clear_does_not_recycle_ids() {
        let mut table = TokenTable::new();
        let old = table.issue('a');
        table.clear();
        let new = table.issue('a');
        assert_ne!(old, new);
        assert!(table.consume(old).is_err());
        assert_eq!(table.issued(), 2);
    }
}
