//! Move vocabulary.
//!
//! A move is a kind (draw, play, discard) plus the card and the two
//! placements it connects. Strategies build moves with the constructors
//! below; the rules decide whether they are legal.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::zones::Placement;

/// What a move does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Take the back card of `draw` into the hand.
    Draw,
    /// Lay a card from the hand or stock on a building pile.
    Play,
    /// Put a card from the hand on one of the player's discard piles.
    Discard,
}

/// A proposed move.
///
/// ```
/// use jumpbo::core::Card;
/// use jumpbo::rules::{Move, MoveKind};
/// use jumpbo::zones::Placement;
///
/// let mv = Move::play(Card::WILD, Placement::Stock, Placement::Build2);
/// assert_eq!(mv.kind, MoveKind::Play);
/// assert_eq!(mv.to_string(), "play 0 stock -> build2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    /// Card being moved. `None` for draws.
    pub card: Option<Card>,
    pub source: Placement,
    pub dest: Placement,
}

impl Move {
    /// Draw one card into the hand.
    #[must_use]
    pub const fn draw() -> Self {
        Self {
            kind: MoveKind::Draw,
            card: None,
            source: Placement::Draw,
            dest: Placement::Hand,
        }
    }

    #[must_use]
    pub const fn play(card: Card, source: Placement, dest: Placement) -> Self {
        Self {
            kind: MoveKind::Play,
            card: Some(card),
            source,
            dest,
        }
    }

    /// Discard a hand card onto `dest`.
    #[must_use]
    pub const fn discard(card: Card, dest: Placement) -> Self {
        Self {
            kind: MoveKind::Discard,
            card: Some(card),
            source: Placement::Hand,
            dest,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            MoveKind::Draw => "draw",
            MoveKind::Play => "play",
            MoveKind::Discard => "discard",
        };
        match self.card {
            Some(card) => write!(f, "{kind} {card} {} -> {}", self.source, self.dest),
            None => write!(f, "{kind} {} -> {}", self.source, self.dest),
        }
    }
}

/// Result of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A draw. `None` when the draw pile stayed empty after recovery.
    Drew(Option<Card>),
    /// A card landed on a building pile, which now shows `rank`.
    Played { card: Card, rank: u8 },
    Discarded(Card),
}

/// Why a move was rejected. Recoverable; state is untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cannot {kind:?} from `{pile}`")]
    WrongSource { kind: MoveKind, pile: Placement },

    #[error("cannot {kind:?} onto `{dest}`")]
    WrongDestination { kind: MoveKind, dest: Placement },

    #[error("{kind:?} needs a card")]
    MissingCard { kind: MoveKind },

    #[error("draws do not name a card")]
    UnexpectedCard,

    #[error("card {card} is not available in `{pile}`")]
    CardNotInSource { card: Card, pile: Placement },

    #[error("card {card} does not follow; pile needs {needed}")]
    OutOfSequence { card: Card, needed: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let draw = Move::draw();
        assert_eq!(draw.kind, MoveKind::Draw);
        assert_eq!(draw.card, None);
        assert_eq!((draw.source, draw.dest), (Placement::Draw, Placement::Hand));

        let discard = Move::discard(Card::WILD, Placement::Discard3);
        assert_eq!(discard.source, Placement::Hand);
        assert_eq!(discard.to_string(), "discard 0 hand -> discard3");
    }

    #[test]
    fn test_move_serde() {
        let mv = Move::play(Card::new(11).unwrap(), Placement::Hand, Placement::Build4);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"play","card":11,"source":"hand","dest":"build4"}"#
        );
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }

    #[test]
    fn test_illegal_move_messages() {
        let err = IllegalMove::OutOfSequence {
            card: Card::new(4).unwrap(),
            needed: 2,
        };
        assert_eq!(err.to_string(), "card 4 does not follow; pile needs 2");
    }
}
