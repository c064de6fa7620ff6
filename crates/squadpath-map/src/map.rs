//! Terrain maps built from text.
//!
//! A [`HexMap`] is a set of rows. Row index is the axial `r`, token index
//! within the row is the axial `q`, so the map is a (possibly ragged)
//! rhombus anchored at `(0, 0)`.
//!
//! | Token | Terrain |
//! |---|---|
//! | `1` | open |
//! | `2`..`9` | difficult, entry cost = digit |
//! | `x` | wall |
//! | `-` | pit |
//! | `_` | hole (off map) |

use squadpath_core::{HexCoordinate, MovementCost, TerrainProvider};

use crate::error::MapError;

/// A rhombus-shaped terrain map with optional holes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexMap {
    rows: Vec<Vec<Option<MovementCost>>>,
}

impl HexMap {
    /// A uniform open map `width` tiles wide and `height` rows tall.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            rows: vec![vec![Some(MovementCost::Open); width as usize]; height as usize],
        }
    }

    /// Parse a map from one string per row.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MapError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (r, line) in rows.iter().enumerate() {
            let mut row = Vec::new();
            for (q, token) in line.split_whitespace().enumerate() {
                let coordinate = HexCoordinate::new(q as i32, r as i32);
                row.push(parse_token(token, coordinate)?);
            }
            parsed.push(row);
        }
        if parsed.iter().all(|row| row.iter().all(Option::is_none)) {
            return Err(MapError::Empty);
        }
        Ok(Self { rows: parsed })
    }

    /// Parse a multi-line map description. Blank leading and trailing lines
    /// are ignored.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s.trim_matches('\n').lines().collect();
        Self::from_rows(&lines)
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Length of the longest row.
    pub fn width(&self) -> u32 {
        self.rows.iter().map(Vec::len).max().unwrap_or(0) as u32
    }

    /// Terrain at `c`, or `None` when `c` is off the map.
    pub fn get(&self, c: HexCoordinate) -> Option<MovementCost> {
        if c.q < 0 || c.r < 0 {
            return None;
        }
        self.rows
            .get(c.r as usize)
            .and_then(|row| row.get(c.q as usize))
            .copied()
            .flatten()
    }

    /// Replace the terrain at an on-map coordinate. Returns `false` and does
    /// nothing when `c` lies outside the rows.
    pub fn set(&mut self, c: HexCoordinate, cost: MovementCost) -> bool {
        if c.q < 0 || c.r < 0 {
            return false;
        }
        match self
            .rows
            .get_mut(c.r as usize)
            .and_then(|row| row.get_mut(c.q as usize))
        {
            Some(slot) => {
                *slot = Some(cost);
                true
            }
            None => false,
        }
    }

    /// All on-map coordinates in row-major order.
    pub fn coordinates(&self) -> Vec<HexCoordinate> {
        let mut out = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (q, tile) in row.iter().enumerate() {
                if tile.is_some() {
                    out.push(HexCoordinate::new(q as i32, r as i32));
                }
            }
        }
        out
    }
}

impl TerrainProvider for HexMap {
    fn cost_class(&self, c: HexCoordinate) -> MovementCost {
        self.get(c).unwrap_or(MovementCost::Wall)
    }

    fn is_on_map(&self, c: HexCoordinate) -> bool {
        self.get(c).is_some()
    }
}

fn parse_token(token: &str, coordinate: HexCoordinate) -> Result<Option<MovementCost>, MapError> {
    let cost = match token {
        "1" => MovementCost::Open,
        "x" => MovementCost::Wall,
        "-" => MovementCost::Pit,
        "_" => return Ok(None),
        _ => match token.parse::<u32>() {
            Ok(n @ 2..=9) => MovementCost::Difficult(n),
            _ => {
                return Err(MapError::InvalidToken {
                    token: token.to_string(),
                    coordinate,
                });
            }
        },
    };
    Ok(Some(cost))
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_round_trip_keeps_holes() {
        let map = HexMap::parse("1 3 x\n_ - 1").unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: HexMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
        assert_eq!(back.get(HexCoordinate::new(0, 1)), None);
        assert_eq!(back.get(HexCoordinate::new(1, 0)), Some(MovementCost::Difficult(3)));
    }
}
