//! Scan configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// Thresholds and context bounds for a scan.
///
/// Every field has a default, so a RON file only needs the values it changes:
///
/// ```
/// use instrument_traps::ScanConfig;
///
/// let config = ScanConfig::from_ron_str("(threshold_high: 12)").unwrap();
/// assert_eq!(config.threshold_high, 12);
/// assert_eq!(config.threshold_moderate, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Total hits at or above which a document is high-risk adhesion.
    pub threshold_high: usize,
    /// Total hits at or above which a document is moderate semantic warfare.
    pub threshold_moderate: usize,
    /// Characters of context kept on each side of a hit.
    pub context_radius: usize,
    /// Upper bound on the length of any hit context, in characters.
    pub max_context_chars: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold_high: 8,
            threshold_moderate: 3,
            context_radius: 60,
            max_context_chars: 200,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thresholds below 1 are raised to 1.
    pub fn with_thresholds(mut self, high: usize, moderate: usize) -> Self {
        self.threshold_high = high.max(1);
        self.threshold_moderate = moderate.max(1);
        self
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    pub fn with_max_context_chars(mut self, max: usize) -> Self {
        self.max_context_chars = max;
        self
    }

    pub fn from_ron_str(s: &str) -> ConfigResult<Self> {
        let config: Self = ron::from_str(s)?;
        if config.threshold_high == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "threshold_high",
            });
        }
        if config.threshold_moderate == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "threshold_moderate",
            });
        }
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }
}
