//! Builder for a configured [`Geohasher`].

use crate::codec::Geohasher;
use crate::config::Config;
use crate::error::{GeohashError, Result};

/// Builder for a [`Geohasher`] with a non-default precision or coordinate policy.
#[derive(Debug, Default)]
pub struct GeohasherBuilder {
    config: Config,
}

impl GeohasherBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration, e.g. one loaded with [`Config::from_json`].
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Precision substituted when a call passes `None` or `Some(0)`.
    pub fn default_precision(mut self, precision: usize) -> Self {
        self.config.default_precision = precision;
        self
    }

    /// Whether out-of-range coordinates are rejected (the default) or encoded unchecked.
    pub fn strict_coordinates(mut self, strict: bool) -> Self {
        self.config.strict_coordinates = strict;
        self
    }

    /// Validate the configuration and build the geohasher.
    pub fn build(self) -> Result<Geohasher> {
        self.config.validate().map_err(GeohashError::InvalidConfig)?;
        Ok(Geohasher::from_config(self.config))
    }
}
