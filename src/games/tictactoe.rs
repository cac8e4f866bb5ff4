//! # Tic-Tac-Toe
//!
//! Perfect information game tree for the evaluator. X maximizes, O minimizes,
//! a finished game scores +1 (X wins), -1 (O wins) or 0 (draw). Children are
//! only generated the first time the evaluator asks for them.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::expectimax::{best_successor, propagate_scores, Branch, GameNode};
use crate::utils::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mark { X, O }

impl Mark {
    #[inline] pub fn other(self) -> Mark {
        match self { Mark::X => Mark::O, Mark::O => Mark::X }
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],  // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8],  // columns
    [0, 4, 8], [2, 4, 6],             // diagonals
];

#[derive(Clone, Debug)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
    to_move: Mark,
    last_move: Option<usize>,
    score: Reward,
    children: Option<Vec<Branch<TicTacToe>>>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::from_cells([None; 9], None)
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_cells(cells: [Option<Mark>; 9], last_move: Option<usize>) -> Self {
        let xs = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let os = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        let to_move = if xs > os { Mark::O } else { Mark::X };
        let score = match winner(&cells) {
            Some(Mark::X) => 1.0,
            Some(Mark::O) => -1.0,
            None => 0.0,
        };
        TicTacToe { cells, to_move, last_move, score, children: None }
    }

    /// Parse nine cells in reading order, `X`, `O` and `.` for empty
    pub fn parse(layout: &str) -> Result<Self> {
        let marks: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if marks.len() != 9 {
            return Err(Error::InvalidLayout(format!("expected 9 cells, got {} in '{}'", marks.len(), layout)));
        }
        let mut cells = [None; 9];
        for (cell, ch) in cells.iter_mut().zip(marks) {
            *cell = match ch.to_ascii_uppercase() {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | '_' => None,
                other => return Err(Error::InvalidLayout(format!("unexpected '{}' in '{}'", other, layout))),
            };
        }
        let xs = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let os = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        if xs != os && xs != os + 1 {
            return Err(Error::InvalidLayout(format!("X={} O={} cannot happen with X moving first", xs, os)));
        }
        Ok(Self::from_cells(cells, None))
    }

    pub fn to_move(&self) -> Mark { self.to_move }
    pub fn last_move(&self) -> Option<usize> { self.last_move }
    pub fn winner(&self) -> Option<Mark> { winner(&self.cells) }

    pub fn available(&self) -> Vec<usize> {
        if self.winner().is_some() { return vec![]; }
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// The game after the side to move marks `cell`
    pub fn play(&self, cell: usize) -> Option<Self> {
        if cell >= 9 || self.cells[cell].is_some() || self.winner().is_some() {
            return None;
        }
        let mut cells = self.cells;
        cells[cell] = Some(self.to_move);
        Some(Self::from_cells(cells, Some(cell)))
    }

    /// Cell the side to move should take, assuming perfect play from both sides
    pub fn best_move(&mut self) -> Result<Option<usize>> {
        if self.is_terminal() {
            return Ok(None);
        }
        propagate_scores(self)?;
        let best = best_successor(self);
        Ok(best.and_then(|i| self.successors()[i].node.last_move))
    }
}

fn winner(cells: &[Option<Mark>; 9]) -> Option<Mark> {
    LINES.iter()
        .find(|[a, b, c]| cells[*a].is_some() && cells[*a] == cells[*b] && cells[*b] == cells[*c])
        .and_then(|[a, _, _]| cells[*a])
}

impl GameNode for TicTacToe {
    fn is_maximizer(&self) -> bool { self.to_move == Mark::X }
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(|c| c.is_some())
    }
    fn is_deterministic(&self) -> bool { true }
    fn score(&self) -> Reward { self.score }
    fn set_score(&mut self, score: Reward) { self.score = score; }

    fn successors(&mut self) -> &mut [Branch<Self>] {
        if self.children.is_none() {
            let kids = self.available().into_iter()
                .filter_map(|cell| self.play(cell))
                .map(Branch::certain)
                .collect();
            self.children = Some(kids);
        }
        self.children.as_deref_mut().unwrap_or_default()
    }
}

impl Display for TicTacToe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 { write!(f, "/")?; }
            match cell {
                Some(Mark::X) => write!(f, "X")?,
                Some(Mark::O) => write!(f, "O")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
