//! **squadpath-core**: shared types for the hex-grid tactics movement engine.
//!
//! This crate provides axial hex coordinates, terrain cost classes, squaddie
//! identity and affiliation, and the provider traits through which the
//! pathfinder reads the battlefield.

pub mod hex;
pub mod squaddie;
pub mod terrain;
pub mod traits;

pub use hex::{HexCoordinate, HexDirection, hex_distance};
pub use squaddie::{Affiliation, SquaddieId, SquaddieStatus};
pub use terrain::MovementCost;
pub use traits::{OccupancyProvider, TerrainProvider};
