//! The eight cells adjacent to a geohash box.
//!
//! Neighbors are found by shifting the box center by one box height and/or
//! width and re-encoding at the same precision. This lands in the adjacent
//! cell for every box strictly inside the coordinate space. There is no
//! wraparound across the poles or the antimeridian:
//!
//! ```rust
//! use geobox::{Direction, GeohashError};
//!
//! // "b" touches the north pole.
//! let arctic = geobox::decode("b", Some(1))?;
//! match arctic.neighbors() {
//!     Err(GeohashError::NeighborOutOfBounds { direction, .. }) => {
//!         assert_eq!(direction, Direction::Up)
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), GeohashError>(())
//! ```

use crate::geobox::GeoBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction from a box to one of its neighbors. Up is increasing latitude,
/// right is increasing longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Direction {
    /// All directions in the order [`Neighbors`] stores them.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// Shift in box heights (latitude) and box widths (longitude).
    pub const fn offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (1.0, 0.0),
            Direction::Down => (-1.0, 0.0),
            Direction::Left => (0.0, -1.0),
            Direction::Right => (0.0, 1.0),
            Direction::UpLeft => (1.0, -1.0),
            Direction::DownLeft => (-1.0, -1.0),
            Direction::UpRight => (1.0, 1.0),
            Direction::DownRight => (-1.0, 1.0),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up-left",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
            Direction::DownRight => "down-right",
        };
        f.write_str(name)
    }
}

/// The eight boxes adjacent to a box, owned independently of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbors {
    boxes: [GeoBox; 8],
}

impl Neighbors {
    pub(crate) fn new(boxes: [GeoBox; 8]) -> Self {
        Self { boxes }
    }

    pub fn get(&self, direction: Direction) -> &GeoBox {
        &self.boxes[direction.index()]
    }

    pub fn up(&self) -> &GeoBox {
        self.get(Direction::Up)
    }

    pub fn down(&self) -> &GeoBox {
        self.get(Direction::Down)
    }

    pub fn left(&self) -> &GeoBox {
        self.get(Direction::Left)
    }

    pub fn right(&self) -> &GeoBox {
        self.get(Direction::Right)
    }

    pub fn up_left(&self) -> &GeoBox {
        self.get(Direction::UpLeft)
    }

    pub fn down_left(&self) -> &GeoBox {
        self.get(Direction::DownLeft)
    }

    pub fn up_right(&self) -> &GeoBox {
        self.get(Direction::UpRight)
    }

    pub fn down_right(&self) -> &GeoBox {
        self.get(Direction::DownRight)
    }

    /// Pairs of direction and box, in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &GeoBox)> {
        Direction::ALL.into_iter().zip(self.boxes.iter())
    }

    pub fn hashes(&self) -> [&str; 8] {
        self.boxes.each_ref().map(GeoBox::hash)
    }

    pub fn as_slice(&self) -> &[GeoBox] {
        &self.boxes
    }

    pub fn into_array(self) -> [GeoBox; 8] {
        self.boxes
    }
}

impl IntoIterator for Neighbors {
    type Item = GeoBox;
    type IntoIter = std::array::IntoIter<GeoBox, 8>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a GeoBox;
    type IntoIter = std::slice::Iter<'a, GeoBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
