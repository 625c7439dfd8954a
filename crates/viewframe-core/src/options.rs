//! Configuration options for framing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FramingError, Result};

/// Tunables for the frame solver and the pose reader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingOptions {
    /// Distance along the forward axis at which a decomposed pose places its
    /// look-at point.
    pub look_distance: f64,

    /// Sine-of-angle threshold below which two directions count as parallel
    /// and a vertical component counts as zero.
    pub parallel_tolerance: f64,

    /// Value reported by the zoom conversions, which are not yet a function of
    /// camera distance.
    pub placeholder_zoom: f64,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            look_distance: 1.0,
            parallel_tolerance: 1e-9,
            placeholder_zoom: 100.0,
        }
    }
}

impl FramingOptions {
    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json(&text)?;
        log::debug!("loaded framing options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Serializes options as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.look_distance.is_finite() && self.look_distance > 0.0) {
            return Err(FramingError::InvalidOption {
                name: "look_distance",
                reason: "must be finite and positive",
            });
        }
        if !(self.parallel_tolerance.is_finite() && self.parallel_tolerance >= 0.0) {
            return Err(FramingError::InvalidOption {
                name: "parallel_tolerance",
                reason: "must be finite and non-negative",
            });
        }
        if !self.placeholder_zoom.is_finite() {
            return Err(FramingError::InvalidOption {
                name: "placeholder_zoom",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}
