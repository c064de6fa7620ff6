//! Unit placement on a map.

use indexmap::IndexMap;
use squadpath_core::{
    Affiliation, HexCoordinate, OccupancyProvider, SquaddieId, SquaddieStatus,
};

use crate::error::MapError;

/// Where a unit stands and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub coordinate: HexCoordinate,
    pub affiliation: Affiliation,
    pub alive: bool,
}

/// All units on the battlefield, in placement order.
///
/// At most one unit may stand on a coordinate. Dead units keep their tile
/// until they are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieRoster {
    units: IndexMap<SquaddieId, Placement>,
}

impl SquaddieRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new living unit.
    pub fn place(
        &mut self,
        id: impl Into<SquaddieId>,
        affiliation: Affiliation,
        coordinate: HexCoordinate,
    ) -> Result<(), MapError> {
        let id = id.into();
        if self.units.contains_key(&id) {
            return Err(MapError::DuplicateSquaddie(id));
        }
        self.ensure_vacant(coordinate, None)?;
        self.units.insert(
            id,
            Placement {
                coordinate,
                affiliation,
                alive: true,
            },
        );
        Ok(())
    }

    /// Move a unit to a vacant coordinate.
    pub fn move_to(&mut self, id: &SquaddieId, coordinate: HexCoordinate) -> Result<(), MapError> {
        self.ensure_vacant(coordinate, Some(id))?;
        let placement = self
            .units
            .get_mut(id)
            .ok_or_else(|| MapError::UnknownSquaddie(id.clone()))?;
        placement.coordinate = coordinate;
        Ok(())
    }

    /// Mark a unit as dead. It stays on its tile but no longer blocks anyone.
    pub fn kill(&mut self, id: &SquaddieId) -> Result<(), MapError> {
        let placement = self
            .units
            .get_mut(id)
            .ok_or_else(|| MapError::UnknownSquaddie(id.clone()))?;
        placement.alive = false;
        Ok(())
    }

    /// Take a unit off the battlefield.
    pub fn remove(&mut self, id: &SquaddieId) -> Result<Placement, MapError> {
        self.units
            .shift_remove(id)
            .ok_or_else(|| MapError::UnknownSquaddie(id.clone()))
    }

    /// Placement of `id`.
    pub fn get(&self, id: &SquaddieId) -> Option<&Placement> {
        self.units.get(id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn ensure_vacant(
        &self,
        coordinate: HexCoordinate,
        mover: Option<&SquaddieId>,
    ) -> Result<(), MapError> {
        match self.occupant(coordinate) {
            Some(occupant) if Some(occupant) != mover => Err(MapError::Occupied {
                coordinate,
                occupant: occupant.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn occupant(&self, coordinate: HexCoordinate) -> Option<&SquaddieId> {
        self.units
            .iter()
            .find(|(_, p)| p.coordinate == coordinate)
            .map(|(id, _)| id)
    }
}

impl OccupancyProvider for SquaddieRoster {
    fn squaddie_at(&self, c: HexCoordinate) -> Option<SquaddieId> {
        self.occupant(c).cloned()
    }

    fn status(&self, id: &SquaddieId) -> Option<SquaddieStatus> {
        self.units.get(id).map(|p| SquaddieStatus {
            affiliation: p.affiliation,
            alive: p.alive,
        })
    }

    fn squaddies(&self) -> Vec<(SquaddieId, HexCoordinate)> {
        self.units
            .iter()
            .map(|(id, p)| (id.clone(), p.coordinate))
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn roster_round_trip_keeps_order_and_deaths() {
        let mut roster = SquaddieRoster::new();
        roster.place("zed", Affiliation::Enemy, HexCoordinate::new(2, 0)).unwrap();
        roster.place("amy", Affiliation::Player, HexCoordinate::new(0, 0)).unwrap();
        roster.kill(&SquaddieId::from("zed")).unwrap();

        let json = serde_json::to_string(&roster).unwrap();
        let back: SquaddieRoster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);
        let order: Vec<_> = back.squaddies().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![SquaddieId::from("zed"), SquaddieId::from("amy")]);
        assert!(!back.get(&SquaddieId::from("zed")).unwrap().alive);
    }
}
