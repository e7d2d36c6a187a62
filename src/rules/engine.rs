//! Rules engine trait.
//!
//! Rules implementations define:
//! - Which moves are legal for a player
//! - How a legal move changes the state
//! - When the game is over
//!
//! The turn loop calls into `RulesEngine` and never interprets cards
//! itself.

use crate::core::config::GameConfig;
use crate::core::error::ContainerError;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

use super::moves::{IllegalMove, Move, MoveOutcome};

/// Result of a finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player emptied their stock.
    Winner(PlayerId),
    /// The configured turn limit ran out first.
    TurnLimit { turns: u32 },
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::TurnLimit { .. } => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` only reads: a rejected move must leave no trace
/// - Both `validate` and `apply` return `ContainerError` as the outer error;
///   it is a bug, not a game condition
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    /// Check a move for `player` without touching the state. The inner
    /// `Result` is the verdict.
    fn validate(
        &self,
        state: &GameState,
        player: PlayerId,
        mv: &Move,
    ) -> Result<Result<(), IllegalMove>, ContainerError>;

    /// Apply a validated move.
    fn apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: &Move,
        rng: &mut GameRng,
    ) -> Result<MoveOutcome, ContainerError>;

    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Validate, then apply. The outer `Result` is fatal, the inner one is
    /// the rejection to hand back to the strategy.
    fn try_apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: &Move,
        rng: &mut GameRng,
    ) -> Result<Result<MoveOutcome, IllegalMove>, ContainerError> {
        match self.validate(state, player, mv)? {
            Ok(()) => self.apply(state, player, mv, rng).map(Ok),
            Err(reason) => Ok(Err(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        let limit = GameResult::TurnLimit { turns: 10 };
        assert!(!limit.is_winner(PlayerId::new(0)));
        assert_eq!(limit.winner(), None);
    }
}
