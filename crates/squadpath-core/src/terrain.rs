//! Terrain movement-cost classes.

/// How expensive a tile is to enter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementCost {
    /// Ordinary ground, costs 1.
    #[default]
    Open,
    /// Rough ground with an explicit entry cost.
    Difficult(u32),
    /// Solid obstacle. Impassable unless the mover passes through walls.
    Wall,
    /// Chasm or water. Impassable unless the mover passes over pits.
    Pit,
}

impl MovementCost {
    /// Entry cost for a mover that respects terrain, or `None` for walls and pits.
    pub fn base_cost(self) -> Option<u32> {
        match self {
            Self::Open => Some(1),
            Self::Difficult(n) => Some(n),
            Self::Wall | Self::Pit => None,
        }
    }

    /// Whether this class is a wall or a pit.
    pub fn is_obstacle(self) -> bool {
        matches!(self, Self::Wall | Self::Pit)
    }
}
