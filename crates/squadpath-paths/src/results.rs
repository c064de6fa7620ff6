//! Search output: [`SearchResults`].

use std::collections::BTreeMap;

use indexmap::IndexMap;
use squadpath_core::{HexCoordinate, SquaddieId, hex_distance};

use crate::error::SearchError;
use crate::path::SearchPath;
use crate::squaddies::ReachableSquaddiesResults;

/// Everything one search found.
///
/// Routes are keyed by coordinate and kept in confirmation order, which is
/// ascending route cost. The pathfinder fills the results and hands them
/// over; callers only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    routes: IndexMap<HexCoordinate, SearchPath>,
    stop_coordinate: Option<HexCoordinate>,
    reachable_squaddies: ReachableSquaddiesResults,
    rounds_searched: u32,
}

impl SearchResults {
    pub(crate) fn new(stop_coordinate: Option<HexCoordinate>) -> Self {
        Self {
            routes: IndexMap::new(),
            stop_coordinate,
            reachable_squaddies: ReachableSquaddiesResults::new(),
            rounds_searched: 0,
        }
    }

    /// Store the winning route to its destination.
    pub(crate) fn record_route(&mut self, path: SearchPath) -> Result<(), SearchError> {
        let coordinate = path.destination();
        if self.routes.contains_key(&coordinate) {
            return Err(SearchError::DuplicateRouteConfirmation { coordinate });
        }
        self.routes.insert(coordinate, path);
        Ok(())
    }

    pub(crate) fn reachable_squaddies_mut(&mut self) -> &mut ReachableSquaddiesResults {
        &mut self.reachable_squaddies
    }

    pub(crate) fn set_rounds_searched(&mut self, rounds: u32) {
        self.rounds_searched = rounds;
    }

    /// Every stoppable coordinate, in confirmation order.
    pub fn all_reachable_coordinates(&self) -> Vec<HexCoordinate> {
        self.routes.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn is_reachable(&self, c: HexCoordinate) -> bool {
        self.routes.contains_key(&c)
    }

    /// The cheapest route found to `c`.
    pub fn route_to(&self, c: HexCoordinate) -> Option<&SearchPath> {
        self.routes.get(&c)
    }

    /// All routes, in confirmation order.
    pub fn routes(&self) -> impl Iterator<Item = (&HexCoordinate, &SearchPath)> {
        self.routes.iter()
    }

    pub fn stop_coordinate(&self) -> Option<HexCoordinate> {
        self.stop_coordinate
    }

    /// The route to the stop coordinate: `Ok(None)` when it was not reached.
    pub fn route_to_stop_coordinate(&self) -> Result<Option<&SearchPath>, SearchError> {
        let stop = self.stop_coordinate.ok_or(SearchError::NoDestinationSet)?;
        Ok(self.routes.get(&stop))
    }

    /// Reachable coordinates ordered by hex distance to the stop coordinate,
    /// nearest first; ties in coordinate order.
    pub fn closest_coordinates_to_stop(&self) -> Result<Vec<HexCoordinate>, SearchError> {
        let stop = self.stop_coordinate.ok_or(SearchError::NoDestinationSet)?;
        let mut out = self.all_reachable_coordinates();
        out.sort_by_key(|&c| (hex_distance(c, stop), c));
        Ok(out)
    }

    /// Reachable coordinates grouped by the number of movement actions
    /// their route spends. The origin sits in group 0.
    pub fn tiles_grouped_by_actions_used(&self) -> BTreeMap<u32, Vec<HexCoordinate>> {
        let mut out: BTreeMap<u32, Vec<HexCoordinate>> = BTreeMap::new();
        for (&c, path) in &self.routes {
            out.entry(path.actions_used()).or_default().push(c);
        }
        out
    }

    /// Proximity index of living units. Empty unless the search was a
    /// [`reachable_squaddies`](crate::Pathfinder::reachable_squaddies) query.
    pub fn reachable_squaddies(&self) -> &ReachableSquaddiesResults {
        &self.reachable_squaddies
    }

    /// Fewest movement actions after which the searcher stands on or next to
    /// `id`, counting only tiles it can stop on.
    pub fn actions_to_reach_squaddie(&self, id: &SquaddieId) -> Option<u32> {
        self.reachable_squaddies
            .coordinates_within(id, 1)
            .into_iter()
            .filter_map(|c| self.routes.get(&c))
            .map(SearchPath::actions_used)
            .min()
    }

    /// Highest number of movement actions any explored route began.
    pub fn rounds_searched(&self) -> u32 {
        self.rounds_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(q: i32, r: i32) -> HexCoordinate {
        HexCoordinate::new(q, r)
    }

    fn walk(to: &[HexCoordinate]) -> SearchPath {
        let mut p = SearchPath::new(c(0, 0));
        for &t in to {
            p.add(t, 1);
        }
        p
    }

    #[test]
    fn duplicate_confirmation_is_an_error() {
        let mut results = SearchResults::new(None);
        results.record_route(walk(&[c(1, 0)])).unwrap();
        let err = results.record_route(walk(&[c(0, 1), c(1, 0)])).unwrap_err();
        assert_eq!(
            err,
            SearchError::DuplicateRouteConfirmation { coordinate: c(1, 0) }
        );
        assert_eq!(results.route_to(c(1, 0)).unwrap().tile_count(), 2);
    }

    #[test]
    fn destination_accessors_need_a_destination() {
        let results = SearchResults::new(None);
        assert_eq!(
            results.route_to_stop_coordinate(),
            Err(SearchError::NoDestinationSet)
        );
        assert_eq!(
            results.closest_coordinates_to_stop(),
            Err(SearchError::NoDestinationSet)
        );
    }

    #[test]
    fn unreached_destination_is_none_not_error() {
        let mut results = SearchResults::new(Some(c(5, 0)));
        results.record_route(walk(&[])).unwrap();
        results.record_route(walk(&[c(1, 0)])).unwrap();
        results.record_route(walk(&[c(0, 1)])).unwrap();

        assert_eq!(results.route_to_stop_coordinate(), Ok(None));
        assert_eq!(
            results.closest_coordinates_to_stop().unwrap(),
            vec![c(1, 0), c(0, 0), c(0, 1)]
        );
    }

    #[test]
    fn grouping_by_actions() {
        let mut results = SearchResults::new(None);
        results.record_route(walk(&[])).unwrap();
        results.record_route(walk(&[c(1, 0)])).unwrap();
        let mut two = walk(&[c(1, 0)]);
        two.start_new_leg();
        two.add(c(2, 0), 1);
        results.record_route(two).unwrap();

        let groups = results.tiles_grouped_by_actions_used();
        assert_eq!(groups[&0], vec![c(0, 0)]);
        assert_eq!(groups[&1], vec![c(1, 0)]);
        assert_eq!(groups[&2], vec![c(2, 0)]);
        assert_eq!(results.all_reachable_coordinates().len(), 3);
    }
}
