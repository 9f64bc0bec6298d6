//! Configuration for courier
//!
//! Read from a TOML file given with `--config` or `COURIER_CONFIG`; every
//! field has a default, so an absent file means default behaviour.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{CourierError, Result};
use crate::graph::{RelaxationMode, UnreachablePolicy};

pub use types::{CourierConfig, GraphConfig, ReduceConfig, RelaxationConfig};

impl CourierConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CourierConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CourierError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from an explicit path, or fall back to defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file settings
    pub fn with_overrides(
        mut self,
        mode: Option<RelaxationMode>,
        unreachable: Option<UnreachablePolicy>,
    ) -> Self {
        if let Some(mode) = mode {
            self.relaxation.mode = mode;
        }
        if let Some(unreachable) = unreachable {
            self.reduce.unreachable = unreachable;
        }
        self
    }
}
