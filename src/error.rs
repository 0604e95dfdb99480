//! Error types for geohash encoding, decoding and neighbor computation.

use crate::neighbors::Direction;
use thiserror::Error;

/// Coordinate axis named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    #[error("Invalid {axis}: {value}")]
    InvalidCoordinate { axis: Axis, value: f64 },

    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Zero is not an error: it selects the configured default.
    #[error("Invalid precision {precision}: must not exceed {max}")]
    InvalidPrecision { precision: usize, max: usize },

    #[error("Neighbor {direction} falls outside the coordinate space at ({latitude}, {longitude})")]
    NeighborOutOfBounds {
        direction: Direction,
        latitude: f64,
        longitude: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeohashError>;
