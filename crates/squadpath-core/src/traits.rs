use crate::hex::HexCoordinate;
use crate::squaddie::{SquaddieId, SquaddieStatus};
use crate::terrain::MovementCost;

/// Read-only terrain queries.
pub trait TerrainProvider {
    /// Movement-cost class of `c`. Only meaningful for on-map coordinates.
    fn cost_class(&self, c: HexCoordinate) -> MovementCost;

    /// Whether `c` is part of the map at all.
    fn is_on_map(&self, c: HexCoordinate) -> bool;
}

/// Read-only unit placement queries.
pub trait OccupancyProvider {
    /// The unit standing on `c`, if any (alive or dead).
    fn squaddie_at(&self, c: HexCoordinate) -> Option<SquaddieId>;

    /// Affiliation and alive flag of `id`.
    fn status(&self, id: &SquaddieId) -> Option<SquaddieStatus>;

    /// Every placed unit with its coordinate, in a stable order.
    fn squaddies(&self) -> Vec<(SquaddieId, HexCoordinate)>;
}

impl<T: TerrainProvider + ?Sized> TerrainProvider for &T {
    fn cost_class(&self, c: HexCoordinate) -> MovementCost {
        (**self).cost_class(c)
    }

    fn is_on_map(&self, c: HexCoordinate) -> bool {
        (**self).is_on_map(c)
    }
}

impl<T: OccupancyProvider + ?Sized> OccupancyProvider for &T {
    fn squaddie_at(&self, c: HexCoordinate) -> Option<SquaddieId> {
        (**self).squaddie_at(c)
    }

    fn status(&self, id: &SquaddieId) -> Option<SquaddieStatus> {
        (**self).status(id)
    }

    fn squaddies(&self) -> Vec<(SquaddieId, HexCoordinate)> {
        (**self).squaddies()
    }
}
