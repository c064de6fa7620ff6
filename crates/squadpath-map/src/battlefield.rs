use squadpath_core::{
    HexCoordinate, MovementCost, OccupancyProvider, SquaddieId, SquaddieStatus, TerrainProvider,
};

/// A terrain provider and an occupancy provider viewed as one world.
#[derive(Debug, Clone, Copy)]
pub struct Battlefield<T, O> {
    pub terrain: T,
    pub occupancy: O,
}

impl<T, O> Battlefield<T, O> {
    pub fn new(terrain: T, occupancy: O) -> Self {
        Self { terrain, occupancy }
    }
}

impl<T: TerrainProvider, O> TerrainProvider for Battlefield<T, O> {
    fn cost_class(&self, c: HexCoordinate) -> MovementCost {
        self.terrain.cost_class(c)
    }

    fn is_on_map(&self, c: HexCoordinate) -> bool {
        self.terrain.is_on_map(c)
    }
}

impl<T, O: OccupancyProvider> OccupancyProvider for Battlefield<T, O> {
    fn squaddie_at(&self, c: HexCoordinate) -> Option<SquaddieId> {
        self.occupancy.squaddie_at(c)
    }

    fn status(&self, id: &SquaddieId) -> Option<SquaddieStatus> {
        self.occupancy.status(id)
    }

    fn squaddies(&self) -> Vec<(SquaddieId, HexCoordinate)> {
        self.occupancy.squaddies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HexMap, SquaddieRoster};
    use squadpath_core::Affiliation;

    #[test]
    fn delegates_to_both_providers() {
        let map = HexMap::open(2, 2);
        let mut roster = SquaddieRoster::new();
        roster
            .place("scout", Affiliation::Player, HexCoordinate::new(1, 1))
            .unwrap();
        let world = Battlefield::new(&map, &roster);

        assert!(world.is_on_map(HexCoordinate::new(1, 0)));
        assert!(!world.is_on_map(HexCoordinate::new(2, 0)));
        assert_eq!(world.cost_class(HexCoordinate::ZERO), MovementCost::Open);
        assert_eq!(
            world.squaddie_at(HexCoordinate::new(1, 1)),
            Some(SquaddieId::from("scout"))
        );
        assert_eq!(world.squaddies().len(), 1);
    }
}
