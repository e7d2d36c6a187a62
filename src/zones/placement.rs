//! Placement names and peek sides.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::ContainerError;

/// Name of an ordered card pile inside a container.
///
/// The set of names is closed. Which of them a given container accepts is
/// fixed when the container is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Draw,
    Build1,
    Build2,
    Build3,
    Build4,
    Hand,
    Stock,
    Discard1,
    Discard2,
    Discard3,
    Discard4,
}

impl Placement {
    /// Shared table placements.
    pub const TABLE: [Placement; 5] = [
        Placement::Draw,
        Placement::Build1,
        Placement::Build2,
        Placement::Build3,
        Placement::Build4,
    ];

    /// Per-player placements.
    pub const PLAYER: [Placement; 6] = [
        Placement::Hand,
        Placement::Stock,
        Placement::Discard1,
        Placement::Discard2,
        Placement::Discard3,
        Placement::Discard4,
    ];

    pub const BUILD: [Placement; 4] = [
        Placement::Build1,
        Placement::Build2,
        Placement::Build3,
        Placement::Build4,
    ];

    pub const DISCARD: [Placement; 4] = [
        Placement::Discard1,
        Placement::Discard2,
        Placement::Discard3,
        Placement::Discard4,
    ];

    #[must_use]
    pub fn is_build(self) -> bool {
        self.build_index().is_some()
    }

    #[must_use]
    pub fn is_discard(self) -> bool {
        Self::DISCARD.contains(&self)
    }

    /// Position of a building pile in [`Placement::BUILD`].
    #[must_use]
    pub fn build_index(self) -> Option<usize> {
        Self::BUILD.iter().position(|&p| p == self)
    }

    /// Lowercase name, as used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Placement::Draw => "draw",
            Placement::Build1 => "build1",
            Placement::Build2 => "build2",
            Placement::Build3 => "build3",
            Placement::Build4 => "build4",
            Placement::Hand => "hand",
            Placement::Stock => "stock",
            Placement::Discard1 => "discard1",
            Placement::Discard2 => "discard2",
            Placement::Discard3 => "discard3",
            Placement::Discard4 => "discard4",
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// End of a placement to look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Index 0.
    Front,
    /// Last index.
    Back,
}

impl FromStr for Side {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Side::Front),
            "back" => Ok(Side::Back),
            other => Err(ContainerError::InvalidSide(other.to_string())),
        }
    }
}
