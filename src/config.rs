//! Encoder configuration.
//!
//! ```rust
//! use geobox::Config;
//!
//! let json = r#"{
//!     "default_precision": 9,
//!     "strict_coordinates": true
//! }"#;
//! let config = Config::from_json(json).unwrap();
//! assert_eq!(config.default_precision, 9);
//! ```
use crate::error::{GeohashError, Result as GeohashResult};
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Largest accepted precision. Past this, interval midpoints run out of f64
/// resolution and additional characters stop shrinking the box.
pub const MAX_PRECISION: usize = 22;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Precision substituted when a call passes `None` or `Some(0)`.
    #[serde(default = "Config::default_precision")]
    pub default_precision: usize,

    /// Reject coordinates outside [-90, 90] x [-180, 180]. Disabling this
    /// encodes out-of-range points unchecked, including neighbor shifts past
    /// the poles or the antimeridian.
    #[serde(default = "Config::default_strict_coordinates")]
    pub strict_coordinates: bool,
}

impl Config {
    const fn default_precision() -> usize {
        12
    }

    const fn default_strict_coordinates() -> bool {
        true
    }

    pub fn with_default_precision(mut self, precision: usize) -> Self {
        assert!(precision > 0, "Default precision must be greater than zero");
        assert!(
            precision <= MAX_PRECISION,
            "Default precision must not exceed {}",
            MAX_PRECISION
        );

        if precision > 12 {
            log::warn!(
                "Default precision of {} is beyond the 12 characters most geohash \
                implementations accept",
                precision
            );
        }

        self.default_precision = precision;
        self
    }

    pub fn with_strict_coordinates(mut self, strict: bool) -> Self {
        self.strict_coordinates = strict;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.default_precision == 0 {
            return Err("Default precision must be greater than zero".to_string());
        }

        if self.default_precision > MAX_PRECISION {
            return Err(format!(
                "Default precision must not exceed {}, got {}",
                MAX_PRECISION, self.default_precision
            ));
        }

        Ok(())
    }

    /// Resolve a per-call precision, substituting the default for `None` and
    /// zero. Values above [`MAX_PRECISION`] are rejected.
    pub fn resolve_precision(&self, precision: Option<usize>) -> GeohashResult<usize> {
        match precision {
            Some(p) if p > MAX_PRECISION => {
                log::debug!("Rejecting precision {} above {}", p, MAX_PRECISION);
                Err(GeohashError::InvalidPrecision {
                    precision: p,
                    max: MAX_PRECISION,
                })
            }
            Some(p) if p > 0 => Ok(p),
            _ => Ok(self.default_precision),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
            strict_coordinates: Self::default_strict_coordinates(),
        }
    }
}
