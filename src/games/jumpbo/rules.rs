//! Jumpbo rules: move validation, move application and draw-pile recovery.
//!
//! Pile tops are backs: draws come off the back of `draw`, the playable
//! stock card is the back of `stock`, and building piles grow at the back.

use tracing::debug;

use crate::core::card::{next_rank, Card};
use crate::core::config::GameConfig;
use crate::core::error::ContainerError;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::{GameResult, IllegalMove, Move, MoveKind, MoveOutcome, RulesEngine};
use crate::zones::{Placement, Side};

/// Rules for one Jumpbo game.
#[derive(Clone, Debug)]
pub struct JumpboRules {
    config: GameConfig,
}

impl JumpboRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Refill the deck from the building piles.
    ///
    /// Every building pile keeps only its top card; everything underneath is
    /// gathered, shuffled and placed in `draw`. Rank tracking is unchanged
    /// since each pile still shows the same top. Returns the number of
    /// cards recovered.
    pub fn recover_draw_pile(state: &mut GameState, rng: &mut GameRng) -> Result<usize, ContainerError> {
        let mut recovered = 0;

        for pile in Placement::BUILD {
            let top = state.table.take_back(pile)?;
            for card in state.table.drain(pile)? {
                state.table.deal_back(Placement::Draw, card)?;
                recovered += 1;
            }
            if top.is_some() {
                state.table.deal_back(pile, top)?;
            }
        }

        state.table.shuffle(Placement::Draw, rng)?;
        debug!(recovered, draw = state.draw_size(), "recovered draw pile from building piles");
        Ok(recovered)
    }

    /// Draw one card into `player`'s hand, recovering the deck first if it
    /// is empty. `None` means there was nothing left to draw.
    pub fn draw_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Option<Card>, ContainerError> {
        if state.table.size(Placement::Draw)? == 0 {
            Self::recover_draw_pile(state, rng)?;
        }
        state.deal_from_draw(player, Placement::Hand)
    }

    /// Top the hand up to the configured hand size. Returns the number of
    /// cards drawn, which is short if the deck runs dry.
    pub fn refill_hand(
        &self,
        state: &mut GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<usize, ContainerError> {
        let mut drawn = 0;
        while state.player(player).cards.size(Placement::Hand)? < self.config.hand_size {
            if self.draw_card(state, player, rng)?.is_none() {
                break;
            }
            drawn += 1;
        }
        Ok(drawn)
    }

    fn in_hand(state: &GameState, player: PlayerId, card: Card) -> Result<Result<(), IllegalMove>, ContainerError> {
        if state.player(player).cards.contains(card, Placement::Hand)? {
            Ok(Ok(()))
        } else {
            Ok(Err(IllegalMove::CardNotInSource {
                card,
                pile: Placement::Hand,
            }))
        }
    }

    /// Shape checks for a play: source, destination and a named card.
    /// Returns the card and the rank the destination needs.
    fn play_shape(state: &GameState, mv: &Move) -> Result<(Card, u8), IllegalMove> {
        let kind = MoveKind::Play;
        if !matches!(mv.source, Placement::Hand | Placement::Stock) {
            return Err(IllegalMove::WrongSource { kind, pile: mv.source });
        }
        let needed = state
            .build_rank(mv.dest)
            .map(next_rank)
            .ok_or(IllegalMove::WrongDestination { kind, dest: mv.dest })?;
        let card = mv.card.ok_or(IllegalMove::MissingCard { kind })?;
        Ok((card, needed))
    }

    fn validate_play(state: &GameState, player: PlayerId, mv: &Move) -> Result<Result<(), IllegalMove>, ContainerError> {
        let (card, needed) = match Self::play_shape(state, mv) {
            Ok(shape) => shape,
            Err(reason) => return Ok(Err(reason)),
        };

        if mv.source == Placement::Stock {
            if state.player(player).cards.peek(Placement::Stock, Side::Back)? != Some(card) {
                return Ok(Err(IllegalMove::CardNotInSource {
                    card,
                    pile: Placement::Stock,
                }));
            }
        } else if let Err(reason) = Self::in_hand(state, player, card)? {
            return Ok(Err(reason));
        }

        if card.satisfies(needed) {
            Ok(Ok(()))
        } else {
            Ok(Err(IllegalMove::OutOfSequence { card, needed }))
        }
    }

    fn discard_shape(mv: &Move) -> Result<Card, IllegalMove> {
        let kind = MoveKind::Discard;
        if mv.source != Placement::Hand {
            return Err(IllegalMove::WrongSource { kind, pile: mv.source });
        }
        if !mv.dest.is_discard() {
            return Err(IllegalMove::WrongDestination { kind, dest: mv.dest });
        }
        mv.card.ok_or(IllegalMove::MissingCard { kind })
    }

    fn draw_shape(mv: &Move) -> Result<(), IllegalMove> {
        let kind = MoveKind::Draw;
        if mv.source != Placement::Draw {
            return Err(IllegalMove::WrongSource { kind, pile: mv.source });
        }
        if mv.dest != Placement::Hand {
            return Err(IllegalMove::WrongDestination { kind, dest: mv.dest });
        }
        if mv.card.is_some() {
            return Err(IllegalMove::UnexpectedCard);
        }
        Ok(())
    }

    fn nil_card(state: &GameState, player: PlayerId, placement: Placement) -> ContainerError {
        ContainerError::NilCard {
            label: state.player(player).label().to_string(),
            placement: placement.to_string(),
        }
    }
}

impl RulesEngine for JumpboRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(
        &self,
        state: &GameState,
        player: PlayerId,
        mv: &Move,
    ) -> Result<Result<(), IllegalMove>, ContainerError> {
        match mv.kind {
            MoveKind::Draw => Ok(Self::draw_shape(mv)),
            MoveKind::Play => Self::validate_play(state, player, mv),
            MoveKind::Discard => match Self::discard_shape(mv) {
                Ok(card) => Self::in_hand(state, player, card),
                Err(reason) => Ok(Err(reason)),
            },
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: &Move,
        rng: &mut GameRng,
    ) -> Result<MoveOutcome, ContainerError> {
        match mv.kind {
            MoveKind::Draw => Ok(MoveOutcome::Drew(self.draw_card(state, player, rng)?)),
            MoveKind::Play => {
                let cards = &mut state.player_mut(player).cards;
                let taken = match (mv.source, mv.card) {
                    (Placement::Stock, _) => cards.take_back(Placement::Stock)?,
                    (source, Some(card)) => cards.remove_value(card, source)?,
                    (_, None) => None,
                };
                let card = taken.ok_or_else(|| Self::nil_card(state, player, mv.source))?;
                state.table.deal_back(mv.dest, card)?;

                let idx = mv.dest.build_index().ok_or_else(|| ContainerError::InvalidPlacement {
                    label: state.table.label().to_string(),
                    placement: mv.dest.to_string(),
                })?;
                let rank = next_rank(state.build_ranks[idx]);
                state.build_ranks[idx] = rank;
                Ok(MoveOutcome::Played { card, rank })
            }
            MoveKind::Discard => {
                let card = match mv.card {
                    Some(card) => state.player_mut(player).cards.remove_value(card, Placement::Hand)?,
                    None => None,
                };
                let card = card.ok_or_else(|| Self::nil_card(state, player, Placement::Hand))?;
                state.player_mut(player).cards.deal_back(mv.dest, card)?;
                Ok(MoveOutcome::Discarded(card))
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.empty_stock_player().map(GameResult::Winner)
    }
}
