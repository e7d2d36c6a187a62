//! Named card containers.
//!
//! A `CardContainer` is a label plus a fixed set of placements, each an
//! ordered pile of cards. It has no idea what the cards mean: dealing,
//! taking, peeking and searching work the same for a hand, a stock or a
//! building pile.
//!
//! Placements are `im::Vector`s, so cloning a container (for a strategy
//! snapshot, say) is O(1) and both ends are cheap to push and pop.
//!
//! ## Usage
//!
//! ```
//! use jumpbo::core::Card;
//! use jumpbo::zones::{CardContainer, Placement, Side};
//!
//! let mut player = CardContainer::new("Player 1", [Placement::Hand, Placement::Stock]);
//!
//! player.deal_back(Placement::Stock, Card::new(4)).unwrap();
//! player.deal_back(Placement::Stock, Card::WILD).unwrap();
//!
//! assert_eq!(player.peek(Placement::Stock, Side::Back).unwrap(), Some(Card::WILD));
//! assert_eq!(player.take_front(Placement::Stock).unwrap(), Card::new(4));
//! assert_eq!(player.size(Placement::Stock).unwrap(), 1);
//!
//! // An empty pile is not an error
//! assert_eq!(player.take_back(Placement::Hand).unwrap(), None);
//!
//! // An unregistered pile is
//! assert!(player.size(Placement::Draw).is_err());
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::error::ContainerError;
use crate::core::rng::GameRng;

use super::placement::{Placement, Side};

/// Cards shown per placement in the `Display` dump.
const PREVIEW_CARDS: usize = 10;

/// A labelled bundle of independently addressable card piles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContainer {
    label: String,

    /// Placement names in construction order.
    order: SmallVec<[Placement; 6]>,

    /// Cards per placement, index 0 is the front.
    piles: FxHashMap<Placement, Vector<Card>>,
}

impl CardContainer {
    /// Create a container with the given (empty) placements.
    ///
    /// Repeated names are registered once.
    pub fn new(label: impl Into<String>, placements: impl IntoIterator<Item = Placement>) -> Self {
        let mut order = SmallVec::new();
        let mut piles = FxHashMap::default();

        for placement in placements {
            if piles.insert(placement, Vector::new()).is_none() {
                order.push(placement);
            }
        }

        Self {
            label: label.into(),
            order,
            piles,
        }
    }

    /// Human-readable label for diagnostics.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Valid placement names, in construction order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.order
    }

    #[must_use]
    pub fn has_placement(&self, placement: Placement) -> bool {
        self.piles.contains_key(&placement)
    }

    fn invalid(&self, placement: Placement) -> ContainerError {
        ContainerError::InvalidPlacement {
            label: self.label.clone(),
            placement: placement.to_string(),
        }
    }

    fn pile(&self, placement: Placement) -> Result<&Vector<Card>, ContainerError> {
        self.piles.get(&placement).ok_or_else(|| self.invalid(placement))
    }

    fn pile_mut(&mut self, placement: Placement) -> Result<&mut Vector<Card>, ContainerError> {
        let label = &self.label;
        self.piles
            .get_mut(&placement)
            .ok_or_else(|| ContainerError::InvalidPlacement {
                label: label.clone(),
                placement: placement.to_string(),
            })
    }

    /// Placement is checked before the card.
    fn dealable(&self, placement: Placement, card: Option<Card>) -> Result<Card, ContainerError> {
        if !self.has_placement(placement) {
            return Err(self.invalid(placement));
        }
        card.ok_or_else(|| ContainerError::NilCard {
            label: self.label.clone(),
            placement: placement.to_string(),
        })
    }

    /// Insert a card at the front of a placement.
    ///
    /// Accepts the `Option` straight from a `take_*`; `None` is a `NilCard`
    /// error.
    pub fn deal_front(&mut self, placement: Placement, card: impl Into<Option<Card>>) -> Result<(), ContainerError> {
        let card = self.dealable(placement, card.into())?;
        self.pile_mut(placement)?.push_front(card);
        Ok(())
    }

    /// Insert a card at the back of a placement.
    pub fn deal_back(&mut self, placement: Placement, card: impl Into<Option<Card>>) -> Result<(), ContainerError> {
        let card = self.dealable(placement, card.into())?;
        self.pile_mut(placement)?.push_back(card);
        Ok(())
    }

    /// Remove and return the front card, or `None` if the placement is empty.
    pub fn take_front(&mut self, placement: Placement) -> Result<Option<Card>, ContainerError> {
        Ok(self.pile_mut(placement)?.pop_front())
    }

    /// Remove and return the back card, or `None` if the placement is empty.
    pub fn take_back(&mut self, placement: Placement) -> Result<Option<Card>, ContainerError> {
        Ok(self.pile_mut(placement)?.pop_back())
    }

    /// Look at one end of a placement without removing anything.
    pub fn peek(&self, placement: Placement, side: Side) -> Result<Option<Card>, ContainerError> {
        let pile = self.pile(placement)?;
        Ok(match side {
            Side::Front => pile.front().copied(),
            Side::Back => pile.back().copied(),
        })
    }

    /// Remove one card equal to `card`, scanning front to back.
    ///
    /// Only the first match goes, even if the placement holds duplicates.
    pub fn remove_value(&mut self, card: Card, placement: Placement) -> Result<Option<Card>, ContainerError> {
        let pile = self.pile_mut(placement)?;
        Ok(pile.index_of(&card).map(|idx| pile.remove(idx)))
    }

    /// Does the placement hold at least one card equal to `card`?
    pub fn contains(&self, card: Card, placement: Placement) -> Result<bool, ContainerError> {
        Ok(self.pile(placement)?.contains(&card))
    }

    /// Number of cards in a placement.
    pub fn size(&self, placement: Placement) -> Result<usize, ContainerError> {
        Ok(self.pile(placement)?.len())
    }

    /// Read-only view of a placement, front to back.
    pub fn cards(&self, placement: Placement) -> Result<&Vector<Card>, ContainerError> {
        self.pile(placement)
    }

    /// Remove every card from a placement, returning them front to back.
    pub fn drain(&mut self, placement: Placement) -> Result<Vector<Card>, ContainerError> {
        Ok(std::mem::take(self.pile_mut(placement)?))
    }

    /// Uniformly permute a placement in place.
    pub fn shuffle(&mut self, placement: Placement, rng: &mut GameRng) -> Result<(), ContainerError> {
        let pile = self.pile_mut(placement)?;
        let mut cards: Vec<Card> = pile.iter().copied().collect();
        rng.shuffle(&mut cards);
        *pile = cards.into_iter().collect();
        Ok(())
    }

    /// Cards across every placement.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.values().map(Vector::len).sum()
    }
}

/// Diagnostic dump: one line per placement with its count and the top
/// (back) cards first.
impl std::fmt::Display for CardContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.label)?;
        for &placement in &self.order {
            let pile = &self.piles[&placement];
            let preview: Vec<String> = pile
                .iter()
                .rev()
                .take(PREVIEW_CARDS)
                .map(Card::to_string)
                .collect();
            write!(f, "{:>12}: ({}) {}", placement, pile.len(), preview.join(", "))?;
            if pile.len() > PREVIEW_CARDS {
                write!(f, " ...")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
