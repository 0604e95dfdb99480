//! The bounding box a geohash resolves to.

use crate::codec;
use crate::error::{GeohashError, Result};
use crate::neighbors::Neighbors;
use geo::{Point, Rect};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub(crate) const MIN_LAT: f64 = -90.0;
pub(crate) const MAX_LAT: f64 = 90.0;
pub(crate) const MIN_LON: f64 = -180.0;
pub(crate) const MAX_LON: f64 = 180.0;

/// A closed range on one axis that bisection narrows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct Interval {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Interval {
    pub(crate) const LATITUDE: Interval = Interval {
        min: MIN_LAT,
        max: MAX_LAT,
    };

    pub(crate) const LONGITUDE: Interval = Interval {
        min: MIN_LON,
        max: MAX_LON,
    };

    #[inline]
    pub(crate) fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub(crate) fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Keep the upper half when `upper` is set, the lower half otherwise.
    #[inline]
    pub(crate) fn narrow(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }

    /// Membership under the encoder's tie rule: a value on a midpoint belongs
    /// to the lower half, so only the global minimum closes the lower bound.
    fn contains(&self, value: f64, global_min: f64) -> bool {
        let above_min = value > self.min || (self.min == global_min && value == global_min);
        above_min && value <= self.max
    }
}

/// An immutable latitude/longitude rectangle tagged with the geohash text and
/// precision it was built from.
///
/// Boxes are produced by [`encode`](crate::encode) and
/// [`decode`](crate::decode) and never change afterwards. Equality compares
/// the hash text and precision as well as the rectangle, so two boxes covering
/// the same area but built at different precisions are not equal.
///
/// # Examples
///
/// ```rust
/// let cell = geobox::decode("c8rcgze421mw", Some(12))?;
/// assert!((cell.lat() - 46.75546).abs() < 1e-6);
/// assert!((cell.lon() + 101.43264).abs() < 1e-6);
/// assert_eq!(cell.to_string(), "c8rcgze421mw");
/// # Ok::<(), geobox::GeohashError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoBox {
    hash: String,
    precision: usize,
    lat: Interval,
    lon: Interval,
}

impl GeoBox {
    pub(crate) fn new(hash: String, precision: usize, lat: Interval, lon: Interval) -> Self {
        Self {
            hash,
            precision,
            lat,
            lon,
        }
    }

    /// Reconstructed latitude: the midpoint of the latitude interval.
    pub fn lat(&self) -> f64 {
        self.lat.mid()
    }

    /// Reconstructed longitude: the midpoint of the longitude interval.
    pub fn lon(&self) -> f64 {
        self.lon.mid()
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.lat.span()
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.lon.span()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The geohash text, unchanged from construction.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn min_lat(&self) -> f64 {
        self.lat.min
    }

    pub fn max_lat(&self) -> f64 {
        self.lat.max
    }

    pub fn min_lon(&self) -> f64 {
        self.lon.min
    }

    pub fn max_lon(&self) -> f64 {
        self.lon.max
    }

    /// Center as a `geo::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point {
        Point::new(self.lon(), self.lat())
    }

    /// The box as a `geo::Rect` (x = longitude, y = latitude).
    pub fn rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.lon.min, y: self.lat.min },
            geo::coord! { x: self.lon.max, y: self.lat.max },
        )
    }

    /// Whether encoding `point` at this box's precision would land in this box.
    ///
    /// Lower bounds are exclusive except on the southern and western edges of
    /// the coordinate space; upper bounds are inclusive.
    pub fn contains(&self, point: &Point) -> bool {
        self.lon.contains(point.x(), MIN_LON) && self.lat.contains(point.y(), MIN_LAT)
    }

    /// The eight adjacent boxes at the same precision, using the default
    /// configuration.
    ///
    /// There is no wraparound: a box touching a pole or the antimeridian fails
    /// with [`GeohashError::NeighborOutOfBounds`]. Use
    /// [`Geohasher::neighbor`](crate::Geohasher::neighbor) to compute the
    /// directions that remain in range.
    pub fn neighbors(&self) -> Result<Neighbors> {
        codec::Geohasher::default().neighbors(self)
    }

    /// The box as a GeoJSON feature with `geohash` and `precision` properties.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> geojson::Feature {
        let ring = vec![
            vec![self.lon.min, self.lat.min],
            vec![self.lon.max, self.lat.min],
            vec![self.lon.max, self.lat.max],
            vec![self.lon.min, self.lat.max],
            vec![self.lon.min, self.lat.min],
        ];
        let geometry = geojson::Geometry::new(geojson::Value::Polygon(vec![ring]));

        let mut properties = geojson::JsonObject::new();
        properties.insert("geohash".to_string(), self.hash.clone().into());
        properties.insert("precision".to_string(), self.precision.into());

        geojson::Feature {
            bbox: Some(vec![self.lon.min, self.lat.min, self.lon.max, self.lat.max]),
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl fmt::Display for GeoBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

impl FromStr for GeoBox {
    type Err = GeohashError;

    /// Decode with precision equal to the number of characters.
    fn from_str(s: &str) -> Result<Self> {
        codec::decode(s, Some(s.chars().count()))
    }
}
