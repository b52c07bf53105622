//! Optional `.vendormap.toml` configuration.
//!
//! Configuration only shapes reporting: which vendors get flagged and
//! the default output format. Scores themselves are fixed functions of
//! their inputs and are never configurable. The loaded value is owned by
//! the caller and passed down explicitly; there is no process-wide
//! config state.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the configuration file, looked up in the working
/// directory.
pub const DEFAULT_CONFIG_FILE: &str = ".vendormap.toml";

/// Reporting thresholds, both on the 0-100 score scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Vendors at or above this lock-in score are flagged
    #[serde(default = "default_high_lock_in")]
    pub high_lock_in: f64,

    /// Vendors at or below this exit-readiness score are flagged
    #[serde(default = "default_low_readiness")]
    pub low_readiness: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_lock_in: default_high_lock_in(),
            low_readiness: default_low_readiness(),
        }
    }
}

fn default_high_lock_in() -> f64 {
    70.0
}

fn default_low_readiness() -> f64 {
    40.0
}

/// Output defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// One of "terminal", "json", "markdown"
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendormapConfig {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub output: OutputConfig,
}

impl VendormapConfig {
    /// Load configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.vendormap.toml` from the given directory if present, the
    /// defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check that both thresholds sit on the score scale.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("thresholds.high_lock_in", self.thresholds.high_lock_in),
            ("thresholds.low_readiness", self.thresholds.low_readiness),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::Config(format!("{name} must be within 0-100")));
            }
        }
        Ok(())
    }
}
