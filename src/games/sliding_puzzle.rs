//! # Sliding Tile Puzzle
//!
//! An `N x N` grid of numbered tiles with one blank (stored as `0`). A move slides
//! the blank one cell in a cardinal direction; every move is deterministic and costs 1.
//! The classic 8-puzzle is `N = 3`.

use std::fmt::{Debug, Display, Formatter};

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::utils::*;

/// Direction the blank travels
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Slide { Down, Up, Right, Left }

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Down, Slide::Up, Slide::Right, Slide::Left];

    #[inline] fn delta(self) -> (isize, isize) {
        match self {
            Slide::Down => (1, 0),
            Slide::Up => (-1, 0),
            Slide::Right => (0, 1),
            Slide::Left => (0, -1),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SlidingPuzzle<const N: usize> {
    board: [[u8; N]; N],
    blank: (usize, usize),
}

pub type EightPuzzle = SlidingPuzzle<3>;

impl<const N: usize> SlidingPuzzle<N> {
    /// Tiles are stored as `u8`, which caps boards at 16x16
    const FITS_U8: () = assert!(N > 0 && N * N <= 256, "sliding puzzle tiles must fit in a u8");

    /// Tiles in reading order with the blank bottom-right
    pub fn solved() -> Self {
        let () = Self::FITS_U8;
        let mut board = [[0u8; N]; N];
        for (i, cell) in board.iter_mut().flatten().enumerate() {
            *cell = ((i + 1) % (N * N)) as u8;
        }
        SlidingPuzzle { board, blank: (N - 1, N - 1) }
    }

    /// Build from rows, which must hold every number in `0..N*N` exactly once
    pub fn from_rows(board: [[u8; N]; N]) -> Result<Self> {
        let () = Self::FITS_U8;
        let mut seen = vec![false; N * N];
        let mut blank = None;
        for (r, row) in board.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                let t = tile as usize;
                if t >= N * N {
                    return Err(Error::InvalidLayout(format!("tile {} does not fit a {}x{} board", tile, N, N)));
                }
                if seen[t] {
                    return Err(Error::InvalidLayout(format!("tile {} appears twice", tile)));
                }
                seen[t] = true;
                if tile == 0 { blank = Some((r, c)); }
            }
        }
        let blank = blank.ok_or_else(|| Error::InvalidLayout("no blank tile".to_string()))?;
        Ok(SlidingPuzzle { board, blank })
    }

    pub fn rows(&self) -> &[[u8; N]; N] { &self.board }
    pub fn blank(&self) -> (usize, usize) { self.blank }

    /// Where a tile sits once the puzzle is solved
    #[inline] fn home(tile: u8) -> (usize, usize) {
        if tile == 0 { return (N - 1, N - 1); }
        let i = tile as usize - 1;
        (i / N, i % N)
    }

    /// Sum of squared Euclidean displacement of every tile (blank included) from home
    pub fn distance_from_solved(&self) -> Cost {
        let mut error = 0.0;
        for (r, row) in self.board.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                let (hr, hc) = Self::home(tile);
                let (dr, dc) = (hr as f64 - r as f64, hc as f64 - c as f64);
                error += dr * dr + dc * dc;
            }
        }
        error
    }

    /// The puzzle after moving the blank, if it stays on the board
    pub fn slide(&self, slide: Slide) -> Option<Self> {
        let (dr, dc) = slide.delta();
        let (r, c) = self.blank;
        let nr = r.checked_add_signed(dr).filter(|&x| x < N)?;
        let nc = c.checked_add_signed(dc).filter(|&x| x < N)?;
        let mut next = self.clone();
        next.board[r][c] = self.board[nr][nc];
        next.board[nr][nc] = 0;
        next.blank = (nr, nc);
        Some(next)
    }

    pub fn legal_slides(&self) -> Vec<Slide> {
        Slide::ALL.into_iter().filter(|s| self.slide(*s).is_some()).collect()
    }

    /// Inversion parity check: half of all tile arrangements can never reach the goal
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.board.iter().flatten().copied().filter(|&t| t != 0).collect();
        let inversions = (0..tiles.len())
            .flat_map(|i| (i + 1..tiles.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| tiles[i] > tiles[j])
            .count();
        if N % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row_from_bottom = N - self.blank.0;
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// Random walk of `moves` slides away from this position
    pub fn scramble<R: Rng + ?Sized>(&self, rng: &mut R, moves: usize) -> Self {
        let mut puzzle = self.clone();
        for _ in 0..moves {
            let slides = puzzle.legal_slides();
            if let Some(next) = slides.choose(rng).and_then(|s| puzzle.slide(*s)) {
                puzzle = next;
            }
        }
        puzzle
    }
}

impl<const N: usize> Display for SlidingPuzzle<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.board.iter().enumerate() {
            if r > 0 { write!(f, "|")?; }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 { write!(f, " ")?; }
                match tile {
                    0 => write!(f, "_")?,
                    t => write!(f, "{}", t)?,
                }
            }
        }
        Ok(())
    }
}

impl<const N: usize> Debug for SlidingPuzzle<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Puzzle[{}]", self)
    }
}

// ---------- Rules ----------
/// The sliding puzzle as a search problem: reach the solved layout
#[derive(Debug, Default, Copy, Clone)]
pub struct SlidingRules<const N: usize>;

pub type EightPuzzleRules = SlidingRules<3>;

impl<const N: usize> Problem for SlidingRules<N> {
    type State = SlidingPuzzle<N>;
    type Action = Slide;

    fn actions(&self, state: &Self::State) -> Vec<Slide> {
        state.legal_slides()
    }

    fn outcomes(&self, state: &Self::State, action: &Slide) -> Vec<(Self::State, Cost, Probability)> {
        state.slide(*action).into_iter().map(|next| (next, 1.0, 1.0)).collect()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        state.board == SlidingPuzzle::<N>::solved().board
    }

    fn heuristic(&self, state: &Self::State) -> Cost {
        state.distance_from_solved()
    }
}
