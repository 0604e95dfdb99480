//! Interval-bisection encoding and decoding.
//!
//! Both directions narrow a latitude and a longitude interval in lock-step,
//! alternating axis every bit and starting with longitude. Each output
//! character carries five bits, most significant first.

use crate::alphabet::{self, BITS};
use crate::config::Config;
use crate::error::{Axis, GeohashError, Result};
use crate::geobox::{GeoBox, Interval, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::neighbors::{Direction, Neighbors};
use geo::Point;

/// Encoder/decoder bound to a [`Config`].
///
/// The free functions [`encode`] and [`decode`] use `Geohasher::default()`.
/// Build a custom one with [`GeohasherBuilder`](crate::GeohasherBuilder).
///
/// # Examples
///
/// ```rust
/// use geobox::GeohasherBuilder;
///
/// let hasher = GeohasherBuilder::new().default_precision(6).build()?;
/// let cell = hasher.encode(57.64911, 10.40744, None)?;
/// assert_eq!(cell.hash(), "u4pruy");
/// # Ok::<(), geobox::GeohashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Geohasher {
    config: Config,
}

impl Geohasher {
    pub(crate) fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode a coordinate into a box whose hash has exactly `precision`
    /// characters. `None` or `Some(0)` uses the configured default; values
    /// above [`MAX_PRECISION`](crate::config::MAX_PRECISION) fail with
    /// [`GeohashError::InvalidPrecision`].
    pub fn encode(&self, latitude: f64, longitude: f64, precision: Option<usize>) -> Result<GeoBox> {
        self.check_coordinates(latitude, longitude)?;
        let precision = self.config.resolve_precision(precision)?;
        Ok(bisect_point(latitude, longitude, precision))
    }

    /// Encode a `geo::Point` (x = longitude, y = latitude).
    pub fn encode_point(&self, point: &Point, precision: Option<usize>) -> Result<GeoBox> {
        self.encode(point.y(), point.x(), precision)
    }

    /// Reconstruct the box a hash describes.
    ///
    /// `precision` is stored on the result as given (or defaulted) and is not
    /// checked against the number of characters in `hash`.
    pub fn decode(&self, hash: &str, precision: Option<usize>) -> Result<GeoBox> {
        let precision = self.config.resolve_precision(precision)?;
        let mut lat = Interval::LATITUDE;
        let mut lon = Interval::LONGITUDE;
        let mut even = true;

        for (position, character) in hash.chars().enumerate() {
            let value = alphabet::value_of(character).ok_or_else(|| {
                log::debug!("Rejecting geohash {:?}: bad symbol at {}", hash, position);
                GeohashError::InvalidCharacter {
                    character,
                    position,
                }
            })?;

            for mask in BITS {
                let interval = if even { &mut lon } else { &mut lat };
                interval.narrow(value & mask != 0);
                even = !even;
            }
        }

        Ok(GeoBox::new(hash.to_string(), precision, lat, lon))
    }

    /// The eight boxes adjacent to `cell` at its precision, in
    /// [`Direction::ALL`] order.
    ///
    /// Fails as a whole if any direction leaves the coordinate space while
    /// strict coordinates are enabled.
    pub fn neighbors(&self, cell: &GeoBox) -> Result<Neighbors> {
        let [up, down, left, right, up_left, down_left, up_right, down_right] =
            Direction::ALL.map(|direction| self.neighbor(cell, direction));

        Ok(Neighbors::new([
            up?, down?, left?, right?, up_left?, down_left?, up_right?, down_right?,
        ]))
    }

    /// The box adjacent to `cell` in one direction, found by shifting the
    /// center by one box height and/or width and re-encoding.
    pub fn neighbor(&self, cell: &GeoBox, direction: Direction) -> Result<GeoBox> {
        let (dlat, dlon) = direction.offset();
        let latitude = cell.lat() + dlat * cell.height();
        let longitude = cell.lon() + dlon * cell.width();

        self.encode(latitude, longitude, Some(cell.precision()))
            .map_err(|err| match err {
                GeohashError::InvalidCoordinate { .. } => GeohashError::NeighborOutOfBounds {
                    direction,
                    latitude,
                    longitude,
                },
                other => other,
            })
    }

    fn check_coordinates(&self, latitude: f64, longitude: f64) -> Result<()> {
        for (axis, value, min, max) in [
            (Axis::Latitude, latitude, MIN_LAT, MAX_LAT),
            (Axis::Longitude, longitude, MIN_LON, MAX_LON),
        ] {
            if !value.is_finite() {
                log::warn!("Rejecting non-finite {}: {}", axis, value);
                return Err(GeohashError::InvalidCoordinate { axis, value });
            }

            if self.config.strict_coordinates && !(min..=max).contains(&value) {
                log::debug!("Rejecting {} out of range [{}, {}]: {}", axis, min, max, value);
                return Err(GeohashError::InvalidCoordinate { axis, value });
            }
        }

        Ok(())
    }
}

/// Bisect both intervals around the point, emitting a symbol every five bits.
fn bisect_point(latitude: f64, longitude: f64, precision: usize) -> GeoBox {
    let mut hash = String::with_capacity(precision);
    let mut lat = Interval::LATITUDE;
    let mut lon = Interval::LONGITUDE;
    let mut even = true;
    let mut bit = 0;
    let mut ch = 0u8;

    while hash.len() < precision {
        let (interval, value) = if even {
            (&mut lon, longitude)
        } else {
            (&mut lat, latitude)
        };

        // Ties go to the lower half.
        let upper = value > interval.mid();
        if upper {
            ch |= BITS[bit];
        }
        interval.narrow(upper);
        even = !even;

        if bit < BITS.len() - 1 {
            bit += 1;
        } else {
            hash.push(alphabet::symbol(ch));
            bit = 0;
            ch = 0;
        }
    }

    GeoBox::new(hash, precision, lat, lon)
}

/// Encode a coordinate with the default configuration.
///
/// # Examples
///
/// ```rust
/// let cell = geobox::encode(18.5, -67.5, Some(12))?;
/// assert_eq!(cell.hash(), "d7rcpzzfrczy");
///
/// // `None` and `Some(0)` fall back to twelve characters.
/// assert_eq!(geobox::encode(18.5, -67.5, None)?, cell);
/// # Ok::<(), geobox::GeohashError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: Option<usize>) -> Result<GeoBox> {
    Geohasher::default().encode(latitude, longitude, precision)
}

/// Decode a hash with the default configuration.
///
/// # Examples
///
/// ```rust
/// use geobox::GeohashError;
///
/// let cell = geobox::decode("c8rcgze42", Some(9))?;
/// assert!((cell.lat() - 46.7555).abs() < 1e-4);
///
/// let err = geobox::decode("c8rcaze", None).unwrap_err();
/// assert_eq!(err, GeohashError::InvalidCharacter { character: 'a', position: 4 });
/// # Ok::<(), GeohashError>(())
/// ```
pub fn decode(hash: &str, precision: Option<usize>) -> Result<GeoBox> {
    Geohasher::default().decode(hash, precision)
}
