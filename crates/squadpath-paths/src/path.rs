//! Routes: [`SearchPath`], its tiles, and the queue ordering.

use std::cmp::Ordering;

use squadpath_core::HexCoordinate;

/// A tile reached along one particular route, with the total movement cost
/// spent to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileFoundDescription {
    pub coordinate: HexCoordinate,
    pub cumulative_movement_cost: u32,
}

/// An ordered route split into legs, one leg per movement action.
///
/// The first tile is always the origin at cost 0, so a path is never empty.
/// A leg starts at the tile where the previous one ended; that tile is
/// listed in both legs. All storage is owned, so `clone` is a deep copy and
/// a stored route can never be changed through a queued copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchPath {
    tiles: Vec<TileFoundDescription>,
    leg_starts: Vec<usize>,
    leg_cost: u32,
}

impl SearchPath {
    /// A zero-cost path standing on `origin`.
    pub fn new(origin: HexCoordinate) -> Self {
        Self {
            tiles: vec![TileFoundDescription {
                coordinate: origin,
                cumulative_movement_cost: 0,
            }],
            leg_starts: vec![0],
            leg_cost: 0,
        }
    }

    /// Step onto `c`, paying `cost`.
    pub fn add(&mut self, c: HexCoordinate, cost: u32) {
        let cumulative_movement_cost = self.total_movement_cost() + cost;
        self.tiles.push(TileFoundDescription {
            coordinate: c,
            cumulative_movement_cost,
        });
        self.leg_cost += cost;
    }

    /// Begin the next movement action from the current tile.
    pub fn start_new_leg(&mut self) {
        self.leg_starts.push(self.tiles.len() - 1);
        self.leg_cost = 0;
    }

    fn last(&self) -> &TileFoundDescription {
        // non-empty by construction
        &self.tiles[self.tiles.len() - 1]
    }

    pub fn total_movement_cost(&self) -> u32 {
        self.last().cumulative_movement_cost
    }

    /// Number of steps taken.
    pub fn total_distance(&self) -> u32 {
        (self.tiles.len() - 1) as u32
    }

    /// Number of tiles, origin included.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Movement spent since the current leg began.
    pub fn current_leg_cost(&self) -> u32 {
        self.leg_cost
    }

    pub fn number_of_legs(&self) -> usize {
        self.leg_starts.len()
    }

    /// Movement actions that actually moved the unit.
    pub fn actions_used(&self) -> u32 {
        self.tiles_by_leg()
            .iter()
            .filter(|leg| leg.len() > 1)
            .count() as u32
    }

    pub fn origin(&self) -> HexCoordinate {
        self.tiles[0].coordinate
    }

    pub fn destination(&self) -> HexCoordinate {
        self.last().coordinate
    }

    pub fn tiles(&self) -> &[TileFoundDescription] {
        &self.tiles
    }

    pub fn coordinates(&self) -> Vec<HexCoordinate> {
        self.tiles.iter().map(|t| t.coordinate).collect()
    }

    /// Tiles of each leg, in order. Consecutive legs share their boundary tile.
    pub fn tiles_by_leg(&self) -> Vec<&[TileFoundDescription]> {
        let last = self.tiles.len() - 1;
        self.leg_starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = self.leg_starts.get(i + 1).copied().unwrap_or(last);
                &self.tiles[start..=end]
            })
            .collect()
    }
}

/// Queue ordering for candidate paths: cheapest first, then fewest tiles,
/// then least spent in the current leg, then destination coordinate order.
pub fn compare_search_paths(a: &SearchPath, b: &SearchPath) -> Ordering {
    a.total_movement_cost()
        .cmp(&b.total_movement_cost())
        .then(a.tile_count().cmp(&b.tile_count()))
        .then(a.current_leg_cost().cmp(&b.current_leg_cost()))
        .then(a.destination().cmp(&b.destination()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(q: i32, r: i32) -> HexCoordinate {
        HexCoordinate::new(q, r)
    }

    #[test]
    fn new_path_is_origin_at_zero() {
        let p = SearchPath::new(c(2, 2));
        assert_eq!(p.tiles().len(), 1);
        assert_eq!(p.origin(), c(2, 2));
        assert_eq!(p.destination(), c(2, 2));
        assert_eq!(p.total_movement_cost(), 0);
        assert_eq!(p.total_distance(), 0);
        assert_eq!(p.actions_used(), 0);
    }

    #[test]
    fn add_accumulates_cost() {
        let mut p = SearchPath::new(c(0, 0));
        p.add(c(1, 0), 1);
        p.add(c(2, 0), 2);
        assert_eq!(p.total_movement_cost(), 3);
        assert_eq!(p.current_leg_cost(), 3);
        assert_eq!(p.total_distance(), 2);
        assert_eq!(p.tiles()[2].cumulative_movement_cost, 3);
        assert_eq!(p.coordinates(), vec![c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn legs_reset_leg_cost_but_not_total() {
        let mut p = SearchPath::new(c(0, 0));
        p.add(c(1, 0), 1);
        p.add(c(2, 0), 1);
        p.start_new_leg();
        assert_eq!(p.current_leg_cost(), 0);
        p.add(c(3, 0), 2);
        assert_eq!(p.current_leg_cost(), 2);
        assert_eq!(p.total_movement_cost(), 4);
        assert_eq!(p.number_of_legs(), 2);
        assert_eq!(p.actions_used(), 2);

        let legs = p.tiles_by_leg();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].len(), 3);
        assert_eq!(legs[1].len(), 2);
        assert_eq!(legs[1][0].coordinate, c(2, 0));
    }

    #[test]
    fn empty_leg_is_not_an_action() {
        let mut p = SearchPath::new(c(0, 0));
        p.start_new_leg();
        p.add(c(0, 1), 1);
        assert_eq!(p.number_of_legs(), 2);
        assert_eq!(p.actions_used(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = SearchPath::new(c(0, 0));
        original.add(c(1, 0), 1);
        let snapshot = original.clone();
        original.add(c(2, 0), 1);
        original.start_new_leg();
        assert_eq!(snapshot.tile_count(), 2);
        assert_eq!(snapshot.number_of_legs(), 1);
        assert_eq!(snapshot.destination(), c(1, 0));
    }

    #[test]
    fn comparator_orders_cost_then_tiles() {
        let mut cheap_long = SearchPath::new(c(0, 0));
        cheap_long.add(c(1, 0), 1);
        cheap_long.add(c(2, 0), 1);

        let mut dear_short = SearchPath::new(c(0, 0));
        dear_short.add(c(0, 1), 3);

        let mut cheap_short = SearchPath::new(c(0, 0));
        cheap_short.add(c(-1, 0), 2);

        assert_eq!(compare_search_paths(&cheap_long, &dear_short), Ordering::Less);
        assert_eq!(compare_search_paths(&cheap_short, &cheap_long), Ordering::Less);
        assert_eq!(compare_search_paths(&cheap_long, &cheap_long.clone()), Ordering::Equal);
    }

    #[test]
    fn comparator_prefers_fresh_leg_on_ties() {
        let mut fresh = SearchPath::new(c(0, 0));
        fresh.add(c(1, 0), 1);
        fresh.start_new_leg();

        let mut spent = SearchPath::new(c(0, 0));
        spent.add(c(1, 0), 1);

        assert_eq!(compare_search_paths(&fresh, &spent), Ordering::Less);
    }
}
