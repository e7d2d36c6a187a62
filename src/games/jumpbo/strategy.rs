//! Strategy seam.
//!
//! The engine never decides what to play. Each turn it repeatedly hands a
//! read-only [`TurnView`] to a [`Strategy`] and applies whatever legal move
//! comes back, until the strategy ends its turn.
//!
//! Closures work as strategies:
//!
//! ```
//! use jumpbo::games::jumpbo::{Decision, Strategy, TurnView};
//!
//! let mut pass = |_: &TurnView<'_>| Decision::EndTurn;
//! fn takes_strategy(_: &mut impl Strategy) {}
//! takes_strategy(&mut pass);
//! ```

use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::rules::{IllegalMove, Move, MoveOutcome};
use crate::zones::{CardContainer, Placement};

/// What a strategy wants to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(Move),
    EndTurn,
}

/// Read-only snapshot handed to a strategy for one decision.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Seat being asked.
    pub player: PlayerId,
    /// Zero-based turn number.
    pub turn: u32,
    /// Moves applied so far this turn.
    pub moves_made: u32,
    /// Why the previous decision was rejected, if it was.
    pub last_rejection: Option<&'a IllegalMove>,
    state: &'a GameState,
}

impl<'a> TurnView<'a> {
    pub(crate) fn new(
        state: &'a GameState,
        player: PlayerId,
        moves_made: u32,
        last_rejection: Option<&'a IllegalMove>,
    ) -> Self {
        Self {
            player,
            turn: state.turn,
            moves_made,
            last_rejection,
            state,
        }
    }

    /// The whole game, including opponents.
    #[must_use]
    pub fn state(&self) -> &'a GameState {
        self.state
    }

    /// The asking player's hand, stock and discard piles.
    #[must_use]
    pub fn own(&self) -> &'a CardContainer {
        &self.state.player(self.player).cards
    }

    /// Draw pile and building piles.
    #[must_use]
    pub fn table(&self) -> &'a CardContainer {
        &self.state.table
    }

    #[must_use]
    pub fn build_ranks(&self) -> [u8; 4] {
        self.state.build_ranks
    }

    /// Rank a building pile needs next, or `None` if `pile` is not one.
    #[must_use]
    pub fn needed_rank(&self, pile: Placement) -> Option<u8> {
        self.state.build_rank(pile).map(crate::core::next_rank)
    }
}

/// Move chooser for one or more seats.
pub trait Strategy {
    /// Pick the next move, or end the turn.
    fn decide(&mut self, view: &TurnView<'_>) -> Decision;

    /// Called after a move was rejected. The state is unchanged.
    fn on_rejected(&mut self, _mv: &Move, _reason: &IllegalMove) {}

    /// Called after a move was applied.
    fn on_applied(&mut self, _mv: &Move, _outcome: &MoveOutcome) {}
}

impl<F> Strategy for F
where
    F: FnMut(&TurnView<'_>) -> Decision,
{
    fn decide(&mut self, view: &TurnView<'_>) -> Decision {
        self(view)
    }
}

/// Ends every turn without moving.
#[derive(Clone, Copy, Debug, Default)]
pub struct EndTurnStrategy;

impl Strategy for EndTurnStrategy {
    fn decide(&mut self, _view: &TurnView<'_>) -> Decision {
        Decision::EndTurn
    }
}
