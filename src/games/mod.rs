//! # Problem Domains
//!
//! Concrete domains plugged into the search core:
//! - **Path finding**: sliding tile puzzle (deterministic), slippery corridor (stochastic)
//! - **Game trees**: tic-tac-toe for the expectimax evaluator
//!
//! Path finding domains implement the `Problem` trait, game trees implement `GameNode`.

pub mod sliding_puzzle;
pub mod corridor;

pub mod tictactoe;
