//! Game state: the shared table and every player's piles.
//!
//! ## Player
//!
//! A seat plus a `CardContainer` holding its hand, stock and four discard
//! piles. Players own their container rather than being one.
//!
//! ## GameState
//!
//! - Table container (`draw`, `build1..build4`)
//! - Players in seat order
//! - Turn counter (zero-based)
//! - Rank each building pile currently shows
//! - Winner, once the game is over
//!
//! Cloning is cheap: piles are persistent vectors.

use crate::zones::{CardContainer, Placement};

use super::card::Card;
use super::error::ContainerError;
use super::player::{PlayerId, PlayerMap};

/// Label of the shared table container.
pub const TABLE_LABEL: &str = "Game Cards";

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub cards: CardContainer,
}

impl Player {
    /// New player with empty hand, stock and discard piles.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            cards: CardContainer::new(id.to_string(), Placement::PLAYER),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.cards.label()
    }

    /// Cards left in the stock pile.
    ///
    /// `Player::new` registers every player placement, so these size and top
    /// readers only see an empty pile if `cards` was replaced by a container
    /// without one. Rules code reads through `cards` and propagates the
    /// `ContainerError` instead.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.cards.size(Placement::Stock).unwrap_or_default()
    }

    /// The playable stock card (the back of the pile).
    #[must_use]
    pub fn stock_top(&self) -> Option<Card> {
        self.cards.cards(Placement::Stock).ok().and_then(|s| s.back().copied())
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.cards.size(Placement::Hand).unwrap_or_default()
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Draw pile and building piles.
    pub table: CardContainer,

    /// Players in seat order.
    pub players: PlayerMap<Player>,

    /// Completed turns.
    pub turn: u32,

    /// Rank shown by each building pile, 0 while it is waiting for a 1.
    ///
    /// Tracked separately from the cards because a wildcard on top does not
    /// say which rank it stands for.
    pub build_ranks: [u8; 4],

    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Empty table and `player_count` empty players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            table: CardContainer::new(TABLE_LABEL, Placement::TABLE),
            players: PlayerMap::new(player_count, Player::new),
            turn: 0,
            build_ranks: [0; 4],
            winner: None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn, self.player_count())
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Rank shown by a building pile, or `None` if `pile` is not one.
    #[must_use]
    pub fn build_rank(&self, pile: Placement) -> Option<u8> {
        pile.build_index().map(|i| self.build_ranks[i])
    }

    /// Cards left to draw. Reads as 0 only if `table` lacks a draw pile,
    /// which `GameState::new` never builds.
    #[must_use]
    pub fn draw_size(&self) -> usize {
        self.table.size(Placement::Draw).unwrap_or_default()
    }

    /// Cards across the table and every player.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.table.total_cards() + self.players.values().map(|p| p.cards.total_cards()).sum::<usize>()
    }

    /// First seat, in order, with an empty stock. A player container
    /// without a stock pile never counts as empty.
    #[must_use]
    pub fn empty_stock_player(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.cards.size(Placement::Stock).is_ok_and(|n| n == 0))
            .map(|(id, _)| id)
    }

    /// Move one card from the back of `draw` to the back of a player's
    /// placement. Returns the card, or `None` if `draw` was empty.
    pub fn deal_from_draw(&mut self, to: PlayerId, placement: Placement) -> Result<Option<Card>, ContainerError> {
        let card = self.table.take_back(Placement::Draw)?;
        if let Some(card) = card {
            self.players[to].cards.deal_back(placement, card)?;
        }
        Ok(card)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.table)?;
        writeln!(f, "Player count: {}", self.player_count())?;
        for player in self.players.values() {
            writeln!(f, "{}", player.cards)?;
        }
        let winner = self.winner.map_or("<none>", |id| self.players[id].label());
        writeln!(f, "WINNER: {winner}")
    }
}
