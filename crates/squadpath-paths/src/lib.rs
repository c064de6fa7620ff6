//! Movement and range search for hex-grid tactics games.
//!
//! Given a unit's movement per action, a multi-action turn budget, and the
//! terrain and occupancy of the battlefield, a [`Pathfinder`] answers four
//! queries:
//!
//! - **Reachable tiles** ([`Pathfinder::reachable_tiles`]): every tile the
//!   unit can stop on this turn, with the cheapest route to each.
//! - **Route** ([`Pathfinder::route_to`]): the cheapest route to one tile,
//!   or the closest reachable tiles when it cannot be reached.
//! - **Range** ([`Pathfinder::tiles_in_range`]): ability footprints cast
//!   from one or more tiles.
//! - **Reachable squaddies** ([`Pathfinder::reachable_squaddies`]): which
//!   living units the unit can reach or stand next to.
//!
//! The search is cheapest-first over partial routes. A route's movement
//! budget resets each time it begins a new action, which it may do on any
//! tile it could stop on. Routes are returned only when they are the
//! cheapest within the whole action budget.
//!
//! # Extension points
//!
//! | Trait | Role |
//! |---|---|
//! | [`SpreadShape`] | which tiles a search may step to next |
//! | [`TerrainProvider`](squadpath_core::TerrainProvider) | movement cost and map bounds |
//! | [`OccupancyProvider`](squadpath_core::OccupancyProvider) | units and their factions |

mod error;
mod params;
mod path;
mod pathfinder;
mod range;
mod reachable;
mod results;
mod route;
mod shape;
mod squaddies;
mod state;

pub use error::{ParameterError, SearchError};
pub use params::{
    ActionBudget, BlockingRule, OccupancyRules, SearchParameters, SearchParametersBuilder,
    TerrainRules,
};
pub use path::{SearchPath, TileFoundDescription, compare_search_paths};
pub use pathfinder::Pathfinder;
pub use results::SearchResults;
pub use shape::{HexAdjacent, SpreadShape};
pub use squaddies::ReachableSquaddiesResults;
