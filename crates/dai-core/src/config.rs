//! Convergence monitor configuration
//!
//! Loaded from JSON, e.g. `{"capacity": 10, "default_value": 1.0}`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diffs::ConvergenceMonitor;
use crate::error::{DaiError, DaiResult};
use crate::real::Real;

/// Parameters of a [`ConvergenceMonitor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Number of trailing differences in the window. Must be >= 1.
    pub capacity: i64,
    /// Reported until the window has filled. Default: 1.0 (not converged).
    pub default_value: Real,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            capacity: 1,
            default_value: 1.0,
        }
    }
}

impl MonitorConfig {
    fn checked_capacity(&self) -> DaiResult<usize> {
        if self.capacity < 1 {
            return Err(DaiError::InvalidArgument(format!(
                "capacity must be >= 1, got {}",
                self.capacity
            )));
        }
        // Only narrows on targets with a 32-bit usize.
        usize::try_from(self.capacity).map_err(|_| {
            DaiError::InvalidArgument(format!(
                "capacity {} exceeds the target's usize",
                self.capacity
            ))
        })
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> DaiResult<()> {
        self.checked_capacity().map(|_| ())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> DaiResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> DaiResult<Self> {
        let path = path.as_ref();
        log::debug!("loading monitor config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Construct an empty monitor with these parameters
    ///
    /// Fails with `InvalidArgument` if the window cannot be allocated.
    pub fn build(&self) -> DaiResult<ConvergenceMonitor> {
        ConvergenceMonitor::new(self.checked_capacity()?, self.default_value)
    }
}
