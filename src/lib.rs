//! Geohash encoding, decoding and neighbor computation.
//!
//! Coordinates are encoded into the public-domain base32 geohash by
//! interval bisection, and every result is an immutable [`GeoBox`]: the
//! rectangle the hash resolves to, tagged with its hash text and precision.
//!
//! ```rust
//! use geobox::GeoBox;
//!
//! let cell = geobox::encode(46.75546, -101.43264, Some(12))?;
//! assert_eq!(cell.hash(), "c8rcgze421mw");
//!
//! let decoded = geobox::decode("de30ds", Some(6))?;
//! let neighbors = decoded.neighbors()?;
//! assert_eq!(neighbors.up().hash(), "de30dt");
//!
//! let parsed: GeoBox = "de30ds".parse()?;
//! assert_eq!(parsed, decoded);
//! # Ok::<(), geobox::GeohashError>(())
//! ```

pub mod alphabet;
pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod geobox;
pub mod neighbors;

pub use builder::GeohasherBuilder;
pub use codec::{Geohasher, decode, encode};
pub use config::{Config, MAX_PRECISION};
pub use error::{Axis, GeohashError, Result};
pub use geobox::GeoBox;
pub use neighbors::{Direction, Neighbors};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, GeoBox, GeohashError, Geohasher, GeohasherBuilder, Result};

    pub use crate::{Direction, Neighbors, decode, encode};

    pub use geo::{Point, Rect};
}
