//! Move vocabulary and the rules engine trait.
//!
//! Rules implementations decide:
//! - Whether a proposed move is legal
//! - How a legal move changes the state
//! - When the game is over

pub mod engine;
pub mod moves;

pub use engine::{GameResult, RulesEngine};
pub use moves::{IllegalMove, Move, MoveKind, MoveOutcome};
