use log::debug;
use squadpath_core::{OccupancyProvider, TerrainProvider};

use crate::Pathfinder;
use crate::error::SearchError;
use crate::params::SearchParameters;
use crate::results::SearchResults;
use crate::shape::SpreadShape;

impl<S: SpreadShape> Pathfinder<S> {
    /// Every tile the searcher can stop on within its action budget.
    ///
    /// Any stop coordinate in `params` is ignored; use
    /// [`route_to`](Self::route_to) to aim at one tile.
    ///
    /// # Termination
    ///
    /// With [`ActionBudget::Unbounded`](crate::ActionBudget::Unbounded) the
    /// search runs until nothing new is reachable. On a world without edges
    /// that never happens unless `params` sets a maximum distance.
    pub fn reachable_tiles<W>(
        &self,
        world: &W,
        params: &SearchParameters,
    ) -> Result<SearchResults, SearchError>
    where
        W: TerrainProvider + OccupancyProvider + ?Sized,
    {
        self.search(world, &params.without_stop_coordinate(), false)
    }

    /// Like [`reachable_tiles`](Self::reachable_tiles), with the proximity
    /// index of living units filled in.
    pub fn reachable_squaddies<W>(
        &self,
        world: &W,
        params: &SearchParameters,
    ) -> Result<SearchResults, SearchError>
    where
        W: TerrainProvider + OccupancyProvider + ?Sized,
    {
        let results = self.search(world, &params.without_stop_coordinate(), true)?;
        debug!(
            "found {} squaddies near the search",
            results.reachable_squaddies().squaddie_ids().count()
        );
        Ok(results)
    }
}
