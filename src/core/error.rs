//! Error taxonomy.
//!
//! `ContainerError` and `ConfigError` are caller contract violations and are
//! never retried. Rule violations are not errors at this level; see
//! [`crate::rules::IllegalMove`], which stays inside the turn loop.

use thiserror::Error;

/// Misuse of a [`crate::zones::CardContainer`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The placement was not registered when the container was built.
    #[error("invalid card placement `{placement}` for {label}")]
    InvalidPlacement { label: String, placement: String },

    /// An absent card was dealt.
    #[error("nil card dealt to `{placement}` of {label}")]
    NilCard { label: String, placement: String },

    /// A side other than front or back was requested.
    #[error("invalid side `{0}`, expected `front` or `back`")]
    InvalidSide(String),
}

/// Invalid game construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 5, got {0}")]
    PlayerCount(usize),

    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("at least one move per turn must be allowed")]
    ZeroMoveLimit,

    #[error("only the standard 162-card set is supported")]
    NonStandardCardSet,

    #[error("{players} players deal stocks of {expected} cards, got {got}")]
    StockSize {
        players: usize,
        expected: usize,
        got: usize,
    },
}

/// Failure escaping the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("game is already finished")]
    GameFinished,

    #[error("expected {expected} strategies, one per player, got {got}")]
    StrategyCount { expected: usize, got: usize },

    #[error("config is for {config} players but the saved state has {state}")]
    PlayerCountMismatch { config: usize, state: usize },
}
