//! # jumpbo
//!
//! A Skip-Bo style card game engine.
//!
//! ## Design Principles
//!
//! 1. **Containers know nothing about rules**: a `CardContainer` is a label
//!    and a fixed set of named piles. Dealing, taking and peeking behave the
//!    same whatever the pile means.
//!
//! 2. **Rules never guess**: every move is validated before any pile is
//!    touched, so a rejected move leaves no trace.
//!
//! 3. **Configuration over globals**: the card set, stock sizes and loop
//!    guards live in a `GameConfig` handed to the engine.
//!
//! ## Modules
//!
//! - `core`: cards, players, configuration, errors, RNG, game state
//! - `zones`: placements and card containers
//! - `rules`: move vocabulary and the `RulesEngine` trait
//! - `games`: the Jumpbo rules, strategy seam and turn loop
//!
//! ## Example
//!
//! ```
//! use jumpbo::core::GameConfig;
//! use jumpbo::games::jumpbo::{EndTurnStrategy, GameEngine, Strategy};
//! use jumpbo::rules::GameResult;
//!
//! let config = GameConfig::new(2).unwrap().with_seed(42).with_max_turns(10);
//! let mut engine = GameEngine::new(config).unwrap();
//!
//! let mut strategies: Vec<Box<dyn Strategy>> = vec![Box::new(EndTurnStrategy), Box::new(EndTurnStrategy)];
//! let result = engine.play_game(&mut strategies).unwrap();
//!
//! assert_eq!(result, GameResult::TurnLimit { turns: 10 });
//! ```

pub mod core;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Card, CardSet, ConfigError, ContainerError, EngineError, GameConfig, GameRng, GameRngState,
    GameState, Player, PlayerId, PlayerMap,
};

pub use crate::zones::{CardContainer, Placement, Side};

pub use crate::rules::{GameResult, IllegalMove, Move, MoveKind, MoveOutcome, RulesEngine};

pub use crate::games::jumpbo::{
    Decision, EndTurnStrategy, GameEngine, GameStatus, JumpboRules, Strategy, TurnSummary, TurnView,
};
