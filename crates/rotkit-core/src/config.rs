//! Extraction configuration
//!
//! Tuning for the matrix → quaternion conversion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TRACE_EPSILON;

/// Smallest accepted trace threshold. Lower values let rounding noise in
/// `1 + trace` reach the trace formula for half turns.
pub const MIN_TRACE_THRESHOLD: f64 = TRACE_EPSILON;

/// Largest accepted trace threshold. Above it the pivot formula can run on
/// matrices with no dominant axis (the identity has `1 + trace = 4`).
pub const MAX_TRACE_THRESHOLD: f64 = 1.0;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Trace threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),
    #[error("Trace threshold must be within [{min}, {max}], got {threshold}")]
    ThresholdOutOfRange { threshold: f64, min: f64, max: f64 },
}

/// Matrix → quaternion extraction configuration
///
/// Only constructible with a threshold in
/// [`MIN_TRACE_THRESHOLD`, `MAX_TRACE_THRESHOLD`], including through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtractionConfig")]
pub struct ExtractionConfig {
    trace_threshold: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawExtractionConfig {
    trace_threshold: f64,
}

impl Default for RawExtractionConfig {
    fn default() -> Self {
        Self {
            trace_threshold: TRACE_EPSILON,
        }
    }
}

impl TryFrom<RawExtractionConfig> for ExtractionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawExtractionConfig) -> Result<Self, ConfigError> {
        Self::with_trace_threshold(raw.trace_threshold)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            trace_threshold: TRACE_EPSILON,
        }
    }
}

impl ExtractionConfig {
    /// Config with a custom trace threshold
    ///
    /// At or below the threshold, extraction pivots on the largest diagonal
    /// element instead of dividing by `sqrt(1 + trace)`.
    pub fn with_trace_threshold(trace_threshold: f64) -> Result<Self, ConfigError> {
        if !trace_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(trace_threshold));
        }
        if !(MIN_TRACE_THRESHOLD..=MAX_TRACE_THRESHOLD).contains(&trace_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold: trace_threshold,
                min: MIN_TRACE_THRESHOLD,
                max: MAX_TRACE_THRESHOLD,
            });
        }
        Ok(Self { trace_threshold })
    }

    /// Smallest `1 + trace` for which the direct (trace) formula is used
    pub fn trace_threshold(&self) -> f64 {
        self.trace_threshold
    }
}
