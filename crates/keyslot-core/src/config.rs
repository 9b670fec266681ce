//! Registry configuration types.
//!
//! The only recognized option is the capacity: the exclusive upper bound on
//! slot ids and therefore the maximum number of live entries.

use crate::error::RegistryError;
use serde::Deserialize;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 128;

/// Largest accepted capacity. Ids are small handles, and an upsert may grow
/// the slot table up to the capacity.
pub const MAX_CAPACITY: usize = 1 << 16;

/// Environment variable read by [`RegistryConfig::from_env`].
pub const CAPACITY_ENV: &str = "KEYSLOT_CAPACITY";

/// Configuration for creating a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Exclusive upper bound on ids (default: 128, must be in `1..=MAX_CAPACITY`).
    pub capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Create a new config builder.
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `KEYSLOT_CAPACITY` | `128` |
    ///
    /// Values that fail to parse fall back to the default. The result is not
    /// validated; call [`validate`](Self::validate) before use.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            capacity: std::env::var(CAPACITY_ENV)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default.capacity),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(RegistryError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

/// Builder for RegistryConfig.
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Set the capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Build the configuration, validating all fields.
    pub fn build(self) -> Result<RegistryConfig, RegistryError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
