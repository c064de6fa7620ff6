//! Proximity index of units met during a search.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use squadpath_core::{HexCoordinate, SquaddieId};

/// For each living unit a search came near, the searched coordinates close
/// to it, keyed by hex distance from the unit's tile.
///
/// Distance 0 means the search visited the unit's own tile; distance 1 means
/// a stoppable tile adjacent to it was confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachableSquaddiesResults {
    squaddies: IndexMap<SquaddieId, BTreeMap<u32, BTreeSet<HexCoordinate>>>,
}

impl ReachableSquaddiesResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that `coordinate` lies `distance` tiles from `id`.
    pub fn add(&mut self, id: &SquaddieId, distance: u32, coordinate: HexCoordinate) {
        self.squaddies
            .entry(id.clone())
            .or_default()
            .entry(distance)
            .or_default()
            .insert(coordinate);
    }

    pub fn is_empty(&self) -> bool {
        self.squaddies.is_empty()
    }

    /// Units found, in the order they were first recorded.
    pub fn squaddie_ids(&self) -> impl Iterator<Item = &SquaddieId> {
        self.squaddies.keys()
    }

    /// All recorded coordinates for `id`, grouped by distance.
    pub fn coordinates_for(&self, id: &SquaddieId) -> Option<&BTreeMap<u32, BTreeSet<HexCoordinate>>> {
        self.squaddies.get(id)
    }

    /// Recorded coordinates no further than `max_distance` from `id`.
    pub fn coordinates_within(&self, id: &SquaddieId, max_distance: u32) -> Vec<HexCoordinate> {
        let Some(by_distance) = self.squaddies.get(id) else {
            return Vec::new();
        };
        by_distance
            .range(..=max_distance)
            .flat_map(|(_, cs)| cs.iter().copied())
            .collect()
    }

    /// The smallest distance recorded for `id`.
    pub fn closest_distance(&self, id: &SquaddieId) -> Option<u32> {
        self.squaddies
            .get(id)
            .and_then(|by_distance| by_distance.keys().next().copied())
    }

    /// Unit ids grouped by their closest recorded distance.
    pub fn closest_squaddies(&self) -> BTreeMap<u32, Vec<SquaddieId>> {
        let mut out: BTreeMap<u32, Vec<SquaddieId>> = BTreeMap::new();
        for id in self.squaddies.keys() {
            if let Some(d) = self.closest_distance(id) {
                out.entry(d).or_default().push(id.clone());
            }
        }
        out
    }

    /// The unit nearest the search and its distance. Ties go to the unit
    /// recorded first.
    pub fn closest_squaddie(&self) -> Option<(SquaddieId, u32)> {
        self.closest_squaddies()
            .into_iter()
            .next()
            .and_then(|(d, ids)| ids.into_iter().next().map(|id| (id, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(q: i32, r: i32) -> HexCoordinate {
        HexCoordinate::new(q, r)
    }

    #[test]
    fn empty_index() {
        let idx = ReachableSquaddiesResults::new();
        assert!(idx.is_empty());
        assert_eq!(idx.closest_squaddie(), None);
        assert!(idx.coordinates_within(&SquaddieId::from("x"), 5).is_empty());
    }

    #[test]
    fn groups_by_distance() {
        let orc = SquaddieId::from("orc");
        let mut idx = ReachableSquaddiesResults::new();
        idx.add(&orc, 1, c(1, 0));
        idx.add(&orc, 1, c(0, 1));
        idx.add(&orc, 1, c(1, 0));
        idx.add(&orc, 0, c(1, 1));

        let by_distance = idx.coordinates_for(&orc).unwrap();
        assert_eq!(by_distance[&1].len(), 2);
        assert_eq!(idx.closest_distance(&orc), Some(0));
        assert_eq!(idx.coordinates_within(&orc, 0), vec![c(1, 1)]);
        assert_eq!(idx.coordinates_within(&orc, 1).len(), 3);
    }

    #[test]
    fn closest_squaddie_prefers_distance_then_order() {
        let mut idx = ReachableSquaddiesResults::new();
        idx.add(&SquaddieId::from("far"), 1, c(0, 0));
        idx.add(&SquaddieId::from("near"), 0, c(3, 0));
        idx.add(&SquaddieId::from("also-near"), 0, c(4, 0));

        assert_eq!(idx.closest_squaddie(), Some((SquaddieId::from("near"), 0)));
        let grouped = idx.closest_squaddies();
        assert_eq!(grouped[&0].len(), 2);
        assert_eq!(grouped[&1], vec![SquaddieId::from("far")]);
    }
}
