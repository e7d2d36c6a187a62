//! Game configuration.
//!
//! A `GameConfig` is an immutable value handed to
//! [`GameEngine::new`](crate::games::jumpbo::GameEngine::new). It carries the
//! fixed card set, the stock-size table lookup and the loop guards; nothing
//! here is global.
//!
//! ```
//! use jumpbo::core::GameConfig;
//!
//! let config = GameConfig::new(4).unwrap().with_seed(7).with_max_turns(500);
//! assert_eq!(config.stock_size, 20);
//! assert_eq!(config.max_turns, Some(500));
//! ```

use serde::{Deserialize, Serialize};

use super::card::CardSet;
use super::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 5;

/// Cards a player may hold after the start-of-turn refill.
pub const DEFAULT_HAND_SIZE: usize = 5;
/// Decisions (accepted or rejected) a strategy may make in one turn.
pub const DEFAULT_MAX_MOVES_PER_TURN: u32 = 200;

/// Stock pile size for a given player count.
///
/// | players | stock |
/// |---------|-------|
/// | 2, 3    | 30    |
/// | 4, 5    | 20    |
pub fn stock_size_for(player_count: usize) -> Result<usize, ConfigError> {
    match player_count {
        2 | 3 => Ok(30),
        4 | 5 => Ok(20),
        n => Err(ConfigError::PlayerCount(n)),
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-5).
    pub player_count: usize,

    /// Cards dealt to each stock at setup.
    pub stock_size: usize,

    /// Target hand size for the start-of-turn refill.
    pub hand_size: usize,

    /// Refill the hand from the draw pile at the start of each turn.
    pub refill_hand: bool,

    /// Guard against strategies that never end their turn.
    pub max_moves_per_turn: u32,

    /// Stop `play_game` after this many turns. `None` plays until a winner.
    pub max_turns: Option<u32>,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Card set composition.
    pub card_set: CardSet,
}

impl GameConfig {
    /// Standard configuration for `player_count` players.
    pub fn new(player_count: usize) -> Result<Self, ConfigError> {
        let stock_size = stock_size_for(player_count)?;

        Ok(Self {
            player_count,
            stock_size,
            hand_size: DEFAULT_HAND_SIZE,
            refill_hand: true,
            max_moves_per_turn: DEFAULT_MAX_MOVES_PER_TURN,
            max_turns: None,
            seed: 0,
            card_set: CardSet::STANDARD,
        })
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_hand_refill(mut self, refill: bool) -> Self {
        self.refill_hand = refill;
        self
    }

    #[must_use]
    pub fn with_max_moves_per_turn(mut self, max: u32) -> Self {
        self.max_moves_per_turn = max;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = Some(max);
        self
    }

    /// Re-check every field. Deserialized configs skip `new`, so the
    /// engine calls this before setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        let expected = stock_size_for(self.player_count)?;
        if self.stock_size != expected {
            return Err(ConfigError::StockSize {
                players: self.player_count,
                expected,
                got: self.stock_size,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.max_moves_per_turn == 0 {
            return Err(ConfigError::ZeroMoveLimit);
        }
        if self.card_set != CardSet::STANDARD {
            return Err(ConfigError::NonStandardCardSet);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_size_table() {
        assert_eq!(stock_size_for(2), Ok(30));
        assert_eq!(stock_size_for(3), Ok(30));
        assert_eq!(stock_size_for(4), Ok(20));
        assert_eq!(stock_size_for(5), Ok(20));
        assert_eq!(stock_size_for(1), Err(ConfigError::PlayerCount(1)));
        assert_eq!(stock_size_for(6), Err(ConfigError::PlayerCount(6)));
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(3).unwrap();

        assert_eq!(config.stock_size, 30);
        assert_eq!(config.hand_size, 5);
        assert!(config.refill_hand);
        assert_eq!(config.max_moves_per_turn, 200);
        assert_eq!(config.max_turns, None);
        assert_eq!(config.card_set, CardSet::STANDARD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let base = GameConfig::new(2).unwrap();

        assert_eq!(base.clone().with_hand_size(0).validate(), Err(ConfigError::ZeroHandSize));
        assert_eq!(
            base.clone().with_max_moves_per_turn(0).validate(),
            Err(ConfigError::ZeroMoveLimit)
        );

        let mut too_many = base.clone();
        too_many.player_count = 9;
        assert_eq!(too_many.validate(), Err(ConfigError::PlayerCount(9)));

        let mut huge_stock = base;
        huge_stock.stock_size = 100;
        assert_eq!(
            huge_stock.validate(),
            Err(ConfigError::StockSize { players: 2, expected: 30, got: 100 })
        );
    }

    #[test]
    fn test_validate_rejects_off_table_stock_size() {
        let json = r#"{"player_count":2,"stock_size":0,"hand_size":5,"refill_hand":true,
            "max_moves_per_turn":200,"max_turns":null,"seed":0,
            "card_set":{"wild_count":18,"copies_per_rank":12}}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::StockSize { players: 2, expected: 30, got: 0 })
        );

        // A 4-player table with a 2-player stock size
        let mut swapped = GameConfig::new(4).unwrap();
        swapped.stock_size = 30;
        assert!(matches!(swapped.validate(), Err(ConfigError::StockSize { expected: 20, .. })));
    }

    #[test]
    fn test_validate_rejects_custom_card_set() {
        let json = r#"{"player_count":2,"stock_size":30,"hand_size":5,"refill_hand":true,
            "max_moves_per_turn":200,"max_turns":null,"seed":0,
            "card_set":{"wild_count":0,"copies_per_rank":12}}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::NonStandardCardSet));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(5).unwrap().with_seed(99).with_max_turns(10);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
