use squadpath_core::{HexCoordinate, HexDirection};

/// Strategy deciding which tiles a search may step to from a given tile.
///
/// Implementations must be pure and deterministic: the same coordinate
/// always yields the same neighbors in the same order.
pub trait SpreadShape {
    /// Append the neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: HexCoordinate, buf: &mut Vec<HexCoordinate>);
}

/// The default shape: the six hex-adjacent tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexAdjacent;

impl SpreadShape for HexAdjacent {
    fn neighbors(&self, c: HexCoordinate, buf: &mut Vec<HexCoordinate>) {
        for dir in HexDirection::ALL {
            buf.push(c.neighbor(dir));
        }
    }
}

impl<F> SpreadShape for F
where
    F: Fn(HexCoordinate, &mut Vec<HexCoordinate>),
{
    fn neighbors(&self, c: HexCoordinate, buf: &mut Vec<HexCoordinate>) {
        self(c, buf)
    }
}
