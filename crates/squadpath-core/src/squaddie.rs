//! Squaddie identity and faction rules.

use std::fmt;

/// Stable identifier of a unit on the battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieId(pub String);

impl SquaddieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SquaddieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SquaddieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Faction tag of a unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affiliation {
    Player,
    Ally,
    Enemy,
    None,
    #[default]
    Unknown,
}

impl Affiliation {
    pub const ALL: [Self; 5] = [
        Self::Player,
        Self::Ally,
        Self::Enemy,
        Self::None,
        Self::Unknown,
    ];

    /// Whether a unit of this affiliation lets a unit of `other` share its path.
    ///
    /// Player and Ally are mutual friends. Enemy and None are only friendly
    /// with themselves. Unknown is friendly with nobody, itself included.
    pub fn is_friendly_with(self, other: Self) -> bool {
        match (self, other) {
            (Self::Player | Self::Ally, Self::Player | Self::Ally) => true,
            (Self::Enemy, Self::Enemy) => true,
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

/// Snapshot of the facts the pathfinder needs about one unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieStatus {
    pub affiliation: Affiliation,
    pub alive: bool,
}
