use log::warn;
use squadpath_core::{OccupancyProvider, TerrainProvider};

use crate::Pathfinder;
use crate::error::SearchError;
use crate::params::SearchParameters;
use crate::results::SearchResults;
use crate::shape::SpreadShape;

impl<S: SpreadShape> Pathfinder<S> {
    /// Search toward the stop coordinate in `params`.
    ///
    /// The results hold every tile confirmed before the destination was
    /// reached. If the destination cannot be reached,
    /// [`SearchResults::route_to_stop_coordinate`] is `Ok(None)` and
    /// [`SearchResults::closest_coordinates_to_stop`] lists the fallback
    /// tiles. Fails with [`SearchError::MissingDestination`] before searching
    /// when no stop coordinate is set.
    ///
    /// Termination follows [`reachable_tiles`](Self::reachable_tiles): an
    /// unreachable destination under an unbounded action budget needs a
    /// finite world or a maximum distance.
    pub fn route_to<W>(
        &self,
        world: &W,
        params: &SearchParameters,
    ) -> Result<SearchResults, SearchError>
    where
        W: TerrainProvider + OccupancyProvider + ?Sized,
    {
        let stop = params
            .stop_coordinate()
            .ok_or(SearchError::MissingDestination)?;
        let results = self.search(world, params, false)?;
        if !results.is_reachable(stop) {
            warn!(
                "no route from {:?} to {stop}",
                params.start_coordinates()
            );
        }
        Ok(results)
    }
}
