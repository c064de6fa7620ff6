use log::{debug, trace};
use squadpath_core::{HexCoordinate, OccupancyProvider, TerrainProvider};

use crate::error::SearchError;
use crate::params::{BlockingRule, SearchParameters};
use crate::path::SearchPath;
use crate::results::SearchResults;
use crate::shape::{HexAdjacent, SpreadShape};
use crate::state::{QueuedPath, SearchState};

/// Movement and range search over a hex battlefield.
///
/// A `Pathfinder` holds only its spread shape. Every query builds and owns
/// its own search state, so one pathfinder can serve any number of queries,
/// from any number of threads if the shape allows it.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder<S = HexAdjacent> {
    shape: S,
}

impl Pathfinder<HexAdjacent> {
    /// A pathfinder spreading to the six adjacent tiles.
    pub fn new() -> Self {
        Self { shape: HexAdjacent }
    }
}

impl<S: SpreadShape> Pathfinder<S> {
    /// A pathfinder spreading with a custom shape.
    pub fn with_shape(shape: S) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Run the search described by `params`.
    ///
    /// Paths are popped cheapest first. A path may keep moving while its
    /// current action has movement left, and on any tile it could stop on it
    /// may begin its next action if the budget allows. The first stoppable
    /// path popped for a tile is the tile's route. The search ends when the
    /// queue drains or the stop coordinate is confirmed.
    pub(crate) fn search<W>(
        &self,
        world: &W,
        params: &SearchParameters,
        index_squaddies: bool,
    ) -> Result<SearchResults, SearchError>
    where
        W: TerrainProvider + OccupancyProvider + ?Sized,
    {
        params.validate()?;
        let mut state = SearchState::new(params.stop_coordinate());

        for &origin in params.start_coordinates() {
            if !world.is_on_map(origin) {
                debug!("skipping off-map start coordinate {origin}");
                continue;
            }
            state.offer(SearchPath::new(origin), params);
        }

        while let Some(QueuedPath(path)) = state.queue.pop() {
            let c = path.destination();
            state.ever_visited.insert(c);
            let legs = path.number_of_legs() as u32;
            if legs > state.actions_explored {
                trace!("exploring action {legs}");
                state.actions_explored = legs;
            }

            let stoppable = can_stop_at(world, params, &path);
            if stoppable && !state.confirmed.contains(&c) {
                state.confirm(path.clone())?;
                if params.stop_coordinate() == Some(c) {
                    break;
                }
            }

            if path.current_leg_cost() < params.movement_per_action() {
                self.expand(world, params, &mut state, &path);
            }
            if stoppable
                && path.current_leg_cost() > 0
                && params.action_budget().allows(legs + 1)
            {
                let mut next = path;
                next.start_new_leg();
                state.offer(next, params);
            }
        }

        if index_squaddies {
            index_nearby_squaddies(world, params, &mut state);
        }

        debug!(
            "search from {:?}: {} reachable tiles over {} actions",
            params.start_coordinates(),
            state.confirmed.len(),
            state.actions_explored
        );
        Ok(state.into_results())
    }

    /// Queue every admissible neighbor of the tile `path` ends on.
    fn expand<W>(
        &self,
        world: &W,
        params: &SearchParameters,
        state: &mut SearchState,
        path: &SearchPath,
    ) where
        W: TerrainProvider + OccupancyProvider + ?Sized,
    {
        let terrain = params.terrain();
        let mut nbuf = std::mem::take(&mut state.nbuf);
        nbuf.clear();
        self.shape.neighbors(path.destination(), &mut nbuf);

        for &n in nbuf.iter() {
            if !world.is_on_map(n) {
                continue;
            }
            if is_blocked(world, params, n) {
                continue;
            }
            let Some(cost) = terrain.entry_cost(world.cost_class(n)) else {
                continue;
            };
            if path.current_leg_cost() + cost > params.movement_per_action() {
                continue;
            }
            if let Some(max) = params.maximum_distance_moved() {
                if path.total_distance() + 1 > max {
                    continue;
                }
            }
            let mut next = path.clone();
            next.add(n, cost);
            state.offer(next, params);
        }

        state.nbuf = nbuf;
    }
}

/// Whether the occupant of `c` stops the searcher from passing through.
fn is_blocked<W>(world: &W, params: &SearchParameters, c: HexCoordinate) -> bool
where
    W: OccupancyProvider + ?Sized,
{
    let rules = params.occupancy();
    if rules.blocking == BlockingRule::Nobody {
        return false;
    }
    let Some(id) = world.squaddie_at(c) else {
        return false;
    };
    if rules.searcher.as_ref() == Some(&id) {
        return false;
    }
    match world.status(&id) {
        Some(status) => status.alive && !rules.affiliation.is_friendly_with(status.affiliation),
        None => true,
    }
}

/// Whether a route may end where `path` ends.
fn can_stop_at<W>(world: &W, params: &SearchParameters, path: &SearchPath) -> bool
where
    W: TerrainProvider + OccupancyProvider + ?Sized,
{
    let c = path.destination();
    if path.total_distance() < params.minimum_distance_moved() {
        return false;
    }
    if !params.terrain().can_enter(world.cost_class(c)) {
        return false;
    }
    let rules = params.occupancy();
    if rules.can_stop_on_squaddies {
        return true;
    }
    match world.squaddie_at(c) {
        None => true,
        Some(id) if rules.searcher.as_ref() == Some(&id) => true,
        Some(id) => world.status(&id).is_some_and(|s| !s.alive),
    }
}

/// Record, for every living unit other than the searcher, whether the search
/// visited its tile (distance 0) and which confirmed tiles touch it (distance 1).
fn index_nearby_squaddies<W>(world: &W, params: &SearchParameters, state: &mut SearchState)
where
    W: OccupancyProvider + ?Sized,
{
    let searcher = params.occupancy().searcher.as_ref();
    for (id, at) in world.squaddies() {
        if searcher == Some(&id) {
            continue;
        }
        if !world.status(&id).is_some_and(|s| s.alive) {
            continue;
        }
        let index = state.results.reachable_squaddies_mut();
        if state.ever_visited.contains(&at) {
            index.add(&id, 0, at);
        }
        for n in at.neighbors() {
            if state.confirmed.contains(&n) {
                index.add(&id, 1, n);
            }
        }
    }
}
