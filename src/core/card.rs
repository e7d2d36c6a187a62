//! Card values and the fixed card set.
//!
//! A card is just a number: `0` is the wildcard ("Jumpbo"), `1..=12` are
//! ranked cards. Cards carry no identity, so two `5`s are interchangeable
//! once they sit in the same pile.

use serde::{Deserialize, Serialize};

/// Highest rank on a building pile before it wraps back to 1.
pub const MAX_RANK: u8 = 12;

/// A single card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// The wildcard. Playable in place of any rank on a building pile.
    pub const WILD: Card = Card(0);

    /// Create a card from its value.
    ///
    /// Returns `None` for anything outside `0..=12`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_RANK {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw card value (0 for the wildcard).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.0 == 0
    }

    /// Can this card be laid on a building pile that needs `needed`?
    #[must_use]
    pub const fn satisfies(self, needed: u8) -> bool {
        self.is_wild() || self.0 == needed
    }
}

/// Rank a building pile needs next, given the rank it currently shows.
///
/// An empty pile (rank 0) needs a 1, and a pile showing 12 wraps to 1.
#[must_use]
pub const fn next_rank(current: u8) -> u8 {
    current % MAX_RANK + 1
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::new(value).ok_or_else(|| format!("card value {value} out of range 0..={MAX_RANK}"))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composition of a full card set.
///
/// Only [`CardSet::STANDARD`] exists: 18 wildcards plus 12 copies of each
/// rank from 1 to 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    wild_count: usize,
    copies_per_rank: usize,
}

impl CardSet {
    pub const STANDARD: CardSet = CardSet {
        wild_count: 18,
        copies_per_rank: 12,
    };

    /// Number of cards in the set.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.wild_count + self.copies_per_rank * MAX_RANK as usize
    }

    /// All cards in the set, wildcards first, then ranks in ascending order.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        let wilds = std::iter::repeat(Card::WILD).take(self.wild_count);
        let copies = self.copies_per_rank;
        let ranked = (1..=MAX_RANK).flat_map(move |rank| std::iter::repeat(Card(rank)).take(copies));
        wilds.chain(ranked)
    }
}

impl Default for CardSet {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_range() {
        assert_eq!(Card::new(0), Some(Card::WILD));
        assert_eq!(Card::new(12).map(Card::value), Some(12));
        assert_eq!(Card::new(13), None);
    }

    #[test]
    fn test_satisfies() {
        let five = Card::new(5).unwrap();
        assert!(five.satisfies(5));
        assert!(!five.satisfies(6));
        assert!(Card::WILD.satisfies(1));
        assert!(Card::WILD.satisfies(12));
    }

    #[test]
    fn test_next_rank_wraps() {
        assert_eq!(next_rank(0), 1);
        assert_eq!(next_rank(1), 2);
        assert_eq!(next_rank(11), 12);
        assert_eq!(next_rank(12), 1);
    }

    #[test]
    fn test_standard_set_composition() {
        let set = CardSet::STANDARD;
        let cards: Vec<_> = set.cards().collect();

        assert_eq!(set.total(), 162);
        assert_eq!(cards.len(), 162);
        assert_eq!(cards.iter().filter(|c| c.is_wild()).count(), 18);
        for rank in 1..=MAX_RANK {
            assert_eq!(cards.iter().filter(|c| c.value() == rank).count(), 12);
        }
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(7).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "7");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        assert!(serde_json::from_str::<Card>("13").is_err());
    }
}
