//! A kings-and-bishops chess variant played on N x N boards (3 <= N <= 26).
//!
//! The board is an immutable value; legality, check, checkmate and
//! stalemate are pure queries over it, and applying a move produces a new
//! board.

pub mod board;
pub mod game;
pub mod opponent;
