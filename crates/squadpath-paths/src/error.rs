//! Error types for searches and parameter validation.

use squadpath_core::HexCoordinate;
use thiserror::Error;

/// Failures of a pathfinder query or a destination-relative accessor.
///
/// Unreachable destinations, empty ranges and the absence of nearby units are
/// ordinary outcomes and are reported through empty results, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A route was requested from parameters with no stop coordinate.
    #[error("route requested without a stop coordinate")]
    MissingDestination,
    /// A destination-relative accessor was used on results searched without
    /// a stop coordinate.
    #[error("search results have no stop coordinate")]
    NoDestinationSet,
    /// The same coordinate was confirmed twice in one search. Priority order
    /// makes the first confirmation optimal, so this is an engine bug.
    #[error("route to {coordinate} confirmed twice in one search")]
    DuplicateRouteConfirmation { coordinate: HexCoordinate },
    /// The parameters failed validation.
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),
}

/// Reasons [`SearchParameters`](crate::SearchParameters) can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("at least one start coordinate is required")]
    NoStartCoordinates,
    #[error("movement per action must be positive")]
    ZeroMovementPerAction,
    #[error("action budget must allow at least one action")]
    ZeroActionBudget,
    #[error("minimum distance {minimum} exceeds maximum distance {maximum}")]
    DistanceBoundsInverted { minimum: u32, maximum: u32 },
}
