//! Jumpbo, a Skip-Bo style game.
//!
//! - Shared table: a draw pile and four building piles
//! - Each player: hand, stock and four discard piles
//! - Building piles count up 1-12 and wrap; wildcards stand in for any rank
//! - First player to empty their stock wins
//!
//! Supports 2-5 players.

mod engine;
mod rules;
mod strategy;

pub use engine::{GameEngine, GameStatus, TurnSummary};
pub use rules::JumpboRules;
pub use strategy::{Decision, EndTurnStrategy, Strategy, TurnView};
