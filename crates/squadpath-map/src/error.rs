//! Error types for map construction and roster edits.

use squadpath_core::{HexCoordinate, SquaddieId};
use thiserror::Error;

/// Errors arising from parsing a map or editing a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The map description contained no tiles.
    #[error("map description has no tiles")]
    Empty,
    /// A token in the map description is not a known terrain symbol.
    #[error("invalid terrain token \u{201c}{token}\u{201d} at {coordinate}")]
    InvalidToken {
        token: String,
        coordinate: HexCoordinate,
    },
    /// Another unit already stands on the coordinate.
    #[error("{coordinate} is already occupied by {occupant}")]
    Occupied {
        coordinate: HexCoordinate,
        occupant: SquaddieId,
    },
    /// The roster has no unit with this id.
    #[error("unknown squaddie {0}")]
    UnknownSquaddie(SquaddieId),
    /// The roster already holds a unit with this id.
    #[error("squaddie {0} is already placed")]
    DuplicateSquaddie(SquaddieId),
}
