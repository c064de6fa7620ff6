//! Axial hex coordinates: [`HexCoordinate`] and [`HexDirection`].
//!
//! Coordinates use the axial `(q, r)` system with the implicit cube axis
//! `s = -q - r`. Rows grow with `r`, columns with `q`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// HexCoordinate
// ---------------------------------------------------------------------------

/// A tile address on an axial hex grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoordinate {
    pub q: i32,
    pub r: i32,
}

impl HexCoordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { q: 0, r: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube axis.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Canonical key, `"q,r"`. Two coordinates share a key iff they are equal.
    pub fn key(self) -> String {
        format!("{},{}", self.q, self.r)
    }

    /// The adjacent coordinate in direction `dir`.
    #[inline]
    pub fn neighbor(self, dir: HexDirection) -> Self {
        self + dir.offset()
    }

    /// All six adjacent coordinates, in [`HexDirection::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|d| self.neighbor(d))
    }

    /// Hex (cube) distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> u32 {
        hex_distance(self, other)
    }

    /// Coordinates at exactly `radius` steps, walking the ring clockwise
    /// from the south-west corner. Radius 0 yields only `self`.
    pub fn ring(self, radius: u32) -> Vec<Self> {
        if radius == 0 {
            return vec![self];
        }
        let radius = radius as i32;
        let mut out = Vec::with_capacity(6 * radius as usize);
        let sw = HexDirection::SouthWest.offset();
        let mut cur = Self::new(self.q + sw.q * radius, self.r + sw.r * radius);
        for dir in HexDirection::ALL {
            for _ in 0..radius {
                out.push(cur);
                cur = cur.neighbor(dir);
            }
        }
        out
    }

    /// Every coordinate within `radius` steps, innermost ring first.
    pub fn spiral(self, radius: u32) -> Vec<Self> {
        (0..=radius).flat_map(|k| self.ring(k)).collect()
    }
}

/// Hex distance between two axial coordinates: `max(|dq|, |dr|, |dq + dr|)`.
#[inline]
pub fn hex_distance(a: HexCoordinate, b: HexCoordinate) -> u32 {
    let dq = a.q - b.q;
    let dr = a.r - b.r;
    dq.unsigned_abs()
        .max(dr.unsigned_abs())
        .max((dq + dr).unsigned_abs())
}

impl PartialOrd for HexCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HexCoordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.r.cmp(&other.r).then(self.q.cmp(&other.q))
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Add for HexCoordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoordinate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl From<(i32, i32)> for HexCoordinate {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

// ---------------------------------------------------------------------------
// HexDirection
// ---------------------------------------------------------------------------

/// One of the six hex-adjacent directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// All directions, counter-clockwise starting east.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Axial offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> HexCoordinate {
        match self {
            Self::East => HexCoordinate::new(1, 0),
            Self::NorthEast => HexCoordinate::new(1, -1),
            Self::NorthWest => HexCoordinate::new(0, -1),
            Self::West => HexCoordinate::new(-1, 0),
            Self::SouthWest => HexCoordinate::new(-1, 1),
            Self::SouthEast => HexCoordinate::new(0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::West => Self::East,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coordinate_arithmetic() {
        let a = HexCoordinate::new(1, 2);
        let b = HexCoordinate::new(3, -4);
        assert_eq!(a + b, HexCoordinate::new(4, -2));
        assert_eq!(b - a, HexCoordinate::new(2, -6));
        assert_eq!(a.s(), -3);
    }

    #[test]
    fn neighbors_are_at_distance_one() {
        let c = HexCoordinate::new(2, -1);
        let ns = c.neighbors();
        let unique: HashSet<_> = ns.iter().copied().collect();
        assert_eq!(unique.len(), 6);
        for n in ns {
            assert_eq!(hex_distance(c, n), 1);
        }
    }

    #[test]
    fn opposite_directions_cancel() {
        for dir in HexDirection::ALL {
            let c = HexCoordinate::new(5, 5);
            assert_eq!(c.neighbor(dir).neighbor(dir.opposite()), c);
        }
    }

    #[test]
    fn distance_is_symmetric_and_cube_based() {
        let a = HexCoordinate::new(0, 0);
        let b = HexCoordinate::new(3, -1);
        assert_eq!(hex_distance(a, b), 3);
        assert_eq!(hex_distance(b, a), 3);
        assert_eq!(hex_distance(a, HexCoordinate::new(-2, 4)), 4);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn ring_sizes() {
        let c = HexCoordinate::new(1, 1);
        assert_eq!(c.ring(0), vec![c]);
        for k in 1..5u32 {
            let ring = c.ring(k);
            assert_eq!(ring.len(), 6 * k as usize);
            assert!(ring.iter().all(|&p| hex_distance(c, p) == k));
            let unique: HashSet<_> = ring.iter().copied().collect();
            assert_eq!(unique.len(), ring.len());
        }
    }

    #[test]
    fn spiral_radius_two_has_nineteen_tiles() {
        let disk = HexCoordinate::ZERO.spiral(2);
        assert_eq!(disk.len(), 19);
        assert_eq!(disk[0], HexCoordinate::ZERO);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            HexCoordinate::new(2, 1),
            HexCoordinate::new(0, 1),
            HexCoordinate::new(5, 0),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                HexCoordinate::new(5, 0),
                HexCoordinate::new(0, 1),
                HexCoordinate::new(2, 1)
            ]
        );
    }

    #[test]
    fn key_is_value_derived() {
        assert_eq!(HexCoordinate::new(-3, 7).key(), "-3,7");
        assert_eq!(HexCoordinate::new(-3, 7).key(), HexCoordinate::from((-3, 7)).key());
    }
}
