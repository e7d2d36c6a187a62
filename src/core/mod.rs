//! Core types: cards, players, configuration, errors, RNG and game state.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use card::{next_rank, Card, CardSet, MAX_RANK};
pub use config::{stock_size_for, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, ContainerError, EngineError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Player};
