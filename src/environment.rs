//! The environment an agent searches through.
//!
//! An [`Environment`] wraps a [`Problem`] and owns all mutable state of one search
//! episode: the live token table, the agents registered against it and the
//! memo of every state it has already expanded. Create one per episode (or call
//! [`Environment::reset`]) and pass it explicitly to whatever drives the search.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace};
use rand::Rng;

use crate::error::{Error, Result};
use crate::movement::{check_distribution, Movement, Outcome};
use crate::token::{StateToken, TokenTable};
use crate::utils::*;

pub type Movements<P> = Rc<Vec<Movement<<P as Problem>::State, <P as Problem>::Action>>>;

/// Counters for how much work the environment did this episode
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct EnvironmentStats {
    pub expansions: usize,
    pub memo_hits: usize,
    pub tokens_issued: u64,
}

pub struct Environment<P: Problem> {
    problem: P,
    tokens: TokenTable<P::State>,
    memo: HashMap<P::State, Movements<P>>,
    agents: HashMap<AgentId, P::State>,
    expansions: usize,
    memo_hits: usize,
}

impl<P: Problem> Environment<P> {
    pub fn new(problem: P) -> Self {
        Environment {
            problem,
            tokens: TokenTable::new(),
            memo: HashMap::new(),
            agents: HashMap::new(),
            expansions: 0,
            memo_hits: 0,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Bind an agent to where it starts and hand back the token for that state
    pub fn register_agent(&mut self, agent: AgentId, start: P::State) -> Result<StateToken> {
        if self.agents.contains_key(&agent) {
            return Err(Error::DuplicateAgent(agent));
        }
        self.agents.insert(agent, start.clone());
        let token = self.tokens.issue(start);
        debug!("registered {} with start token {}", agent, token);
        Ok(token)
    }

    pub fn start_state(&self, agent: AgentId) -> Option<&P::State> {
        self.agents.get(&agent)
    }

    /// Consume the token and list every movement out of the state it named.
    ///
    /// A state that was already expanded hands back the cached list untouched: the
    /// same `Rc`, holding the tokens issued on the first expansion. Otherwise every
    /// outcome gets a fresh live token and the list is memoized against the state value.
    pub fn get_movements(&mut self, agent: AgentId, token: StateToken) -> Result<Movements<P>> {
        if !self.agents.contains_key(&agent) {
            return Err(Error::UnknownAgent(agent));
        }
        let state = self.tokens.consume(token)?;

        if let Some(movements) = self.memo.get(&state) {
            self.memo_hits += 1;
            trace!("{} memo hit on {:?} via {}", agent, state, token);
            return Ok(Rc::clone(movements));
        }

        // every distribution is checked before the first token goes out
        let mut expanded = Vec::new();
        for action in self.problem.actions(&state) {
            let outcomes = self.problem.outcomes(&state, &action);
            check_distribution(outcomes.iter().map(|(_, _, p)| *p))?;
            expanded.push((action, outcomes));
        }
        let movements: Vec<_> = expanded.into_iter()
            .map(|(action, outcomes)| {
                let outcomes = outcomes.into_iter()
                    .map(|(next, cost, probability)| Outcome {
                        token: self.tokens.issue(next.clone()),
                        state: next,
                        cost,
                        probability,
                    })
                    .collect();
                Movement::new(action, outcomes)
            })
            .collect();
        self.expansions += 1;
        trace!("{} expanded {:?} into {} movements", agent, state, movements.len());

        let movements = Rc::new(movements);
        self.memo.insert(state, Rc::clone(&movements));
        Ok(movements)
    }

    /// Decide which outcome of a movement actually happens
    pub fn make_move<'m, R: Rng + ?Sized>(
        &self,
        movement: &'m Movement<P::State, P::Action>,
        rng: &mut R,
    ) -> Option<&'m Outcome<P::State>> {
        movement.sample(rng)
    }

    /// Forget everything from the current episode
    pub fn reset(&mut self) {
        debug!("resetting environment: {} live tokens, {} memoized states dropped", self.tokens.live(), self.memo.len());
        self.tokens.clear();
        self.memo.clear();
        self.agents.clear();
        self.expansions = 0;
        self.memo_hits = 0;
    }

    pub fn live_tokens(&self) -> usize {
        self.tokens.live()
    }

    pub fn memoized_states(&self) -> usize {
        self.memo.len()
    }

    pub fn stats(&self) -> EnvironmentStats {
        EnvironmentStats {
            expansions: self.expansions,
            memo_hits: self.memo_hits,
            tokens_issued: self.tokens.issued(),
        }
    }
}
