//! # Slippery Corridor
//!
//! Cells `0..length` on a line with the exit in the last cell. Stepping left or
//! right works with probability `1 - slip`; otherwise the agent slips and stays put.
//! Small stochastic domain for exercising chance outcomes.

use crate::error::{Error, Result};
use crate::utils::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Step { Left, Right }

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Corridor {
    length: usize,
    slip: Probability,
}

impl Corridor {
    /// A corridor needs at least one cell and a slip chance in `[0, 1)`
    pub fn new(length: usize, slip: Probability) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidLayout("corridor has no cells".to_string()));
        }
        if !(0.0..1.0).contains(&slip) {
            return Err(Error::InvalidLayout(format!("slip chance {} is outside [0, 1)", slip)));
        }
        Ok(Corridor { length, slip })
    }

    pub fn exit(&self) -> usize {
        self.length - 1
    }
}

impl Problem for Corridor {
    type State = usize;
    type Action = Step;

    fn actions(&self, &cell: &usize) -> Vec<Step> {
        let mut steps = vec![];
        if cell > 0 { steps.push(Step::Left); }
        if cell + 1 < self.length { steps.push(Step::Right); }
        steps
    }

    fn outcomes(&self, &cell: &usize, step: &Step) -> Vec<(usize, Cost, Probability)> {
        let target = match step {
            Step::Left => cell - 1,
            Step::Right => cell + 1,
        };
        if self.slip == 0.0 {
            return vec![(target, 1.0, 1.0)];
        }
        vec![(target, 1.0, 1.0 - self.slip), (cell, 1.0, self.slip)]
    }

    fn is_goal(&self, &cell: &usize) -> bool {
        cell == self.exit()
    }

    fn heuristic(&self, &cell: &usize) -> Cost {
        (self.exit() - cell.min(self.exit())) as Cost
    }
}
