use std::collections::BTreeSet;

use squadpath_core::{HexCoordinate, OccupancyProvider, TerrainProvider};

use crate::Pathfinder;
use crate::error::SearchError;
use crate::params::{BlockingRule, SearchParameters};
use crate::shape::SpreadShape;

impl<S: SpreadShape> Pathfinder<S> {
    /// Tiles within `max_distance` steps of any tile in `origins`.
    ///
    /// Each origin gets its own one-action search with `max_distance`
    /// movement and the union of the results is returned. Units neither
    /// block nor exclude tiles. Terrain rules, including whether terrain cost
    /// is ignored and whether walls and pits may be crossed, and the minimum
    /// distance come from `params`; its start and stop coordinates, action
    /// budget and movement are replaced.
    pub fn tiles_in_range<W>(
        &self,
        world: &W,
        params: &SearchParameters,
        max_distance: u32,
        origins: &[HexCoordinate],
    ) -> Result<BTreeSet<HexCoordinate>, SearchError>
    where
        W: TerrainProvider + OccupancyProvider + ?Sized,
    {
        let mut out = BTreeSet::new();
        if params.minimum_distance_moved() > max_distance {
            return Ok(out);
        }
        for &origin in origins {
            if max_distance == 0 {
                if world.is_on_map(origin) && params.terrain().can_enter(world.cost_class(origin)) {
                    out.insert(origin);
                }
                continue;
            }
            let terrain = params.terrain();
            let synthetic = SearchParameters::builder()
                .start(origin)
                .movement_per_action(max_distance)
                .actions(1)
                .minimum_distance(params.minimum_distance_moved())
                .maximum_distance(max_distance)
                .affiliation(params.occupancy().affiliation)
                .blocking(BlockingRule::Nobody)
                .can_stop_on_squaddies(true)
                .ignore_terrain_cost(terrain.ignore_terrain_cost)
                .pass_through_walls(terrain.can_pass_through_walls)
                .pass_over_pits(terrain.can_pass_over_pits)
                .build()?;
            let results = self.search(world, &synthetic, false)?;
            out.extend(results.all_reachable_coordinates());
        }
        Ok(out)
    }
}
