//! In-memory battlefield providers for squadpath: a text-parsed [`HexMap`],
//! a [`SquaddieRoster`], and the [`Battlefield`] that joins them.

pub mod battlefield;
pub mod error;
pub mod map;
pub mod roster;

pub use battlefield::Battlefield;
pub use error::MapError;
pub use map::HexMap;
pub use roster::{Placement, SquaddieRoster};
