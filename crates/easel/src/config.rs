//! Engine tunables.
//!
//! [`EngineConfig`] holds every knob the solver and sampler read. The
//! defaults reproduce the editor's behavior exactly, so most hosts never
//! build one by hand; those that do can load it from JSON or TOML.
//!
//! ```rust
//! use easel::EngineConfig;
//!
//! let config = EngineConfig::from_toml("[solver]\nprecision = 0.05\n").unwrap();
//! assert_eq!(config.solver.settle_frames, 10);
//! assert!((config.solver.precision - 0.05).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigValidationError};

/// Default settle threshold: within 0.5% of the target.
pub const DEFAULT_PRECISION: f64 = 0.005;

/// Looser settle threshold for small previews such as preset icons.
pub const PREVIEW_PRECISION: f64 = 0.05;

/// Consecutive settled frames required before the trace stops.
pub const DEFAULT_SETTLE_FRAMES: u32 = 10;

/// Sampling rate of the spring trace.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Simulation ceiling in seconds.
pub const DEFAULT_MAX_DURATION: f64 = 10.0;

/// Soft budget for the number of values in a `linear()` expression.
pub const DEFAULT_TARGET_COUNT: usize = 50;

/// Spring solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// A frame is settled when `|1 - x| < precision`.
    pub precision: f64,
    /// Settled frames in a row needed to stop.
    pub settle_frames: u32,
    /// Samples per second.
    pub frame_rate: u32,
    /// Hard stop, in seconds.
    pub max_duration: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            settle_frames: DEFAULT_SETTLE_FRAMES,
            frame_rate: DEFAULT_FRAME_RATE,
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

impl SolverOptions {
    /// Default options with a different settle threshold.
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Options for low-fidelity previews.
    pub fn preview() -> Self {
        Self::with_precision(PREVIEW_PRECISION)
    }

    /// Largest number of frames the solver will sample.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_frames(&self) -> usize {
        (f64::from(self.frame_rate) * self.max_duration).round().max(1.0) as usize
    }

    /// Check every field is in range.
    ///
    /// # Errors
    /// Returns the first out-of-range field.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(self.precision > 0.0) {
            return Err(ConfigValidationError::Precision(self.precision));
        }
        if self.settle_frames == 0 {
            return Err(ConfigValidationError::SettleFrames);
        }
        if self.frame_rate == 0 {
            return Err(ConfigValidationError::FrameRate);
        }
        if !(self.max_duration > 0.0) {
            return Err(ConfigValidationError::MaxDuration(self.max_duration));
        }
        Ok(())
    }
}

/// Curve sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerOptions {
    /// Traces at or below this length pass through untouched; longer ones
    /// are strided to roughly this many values (extrema always kept).
    pub target_count: usize,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl SamplerOptions {
    /// Check every field is in range.
    ///
    /// # Errors
    /// Returns an error when `target_count < 2`.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.target_count < 2 {
            return Err(ConfigValidationError::TargetCount(self.target_count));
        }
        Ok(())
    }
}

/// All engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Spring solver settings.
    pub solver: SolverOptions,
    /// Curve sampler settings.
    pub sampler: SamplerOptions,
}

impl EngineConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every section.
    ///
    /// # Errors
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.solver.validate()?;
        self.sampler.validate()?;
        Ok(())
    }

    /// Load a config from JSON text. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.checked()
    }

    /// Load a config from TOML text. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.checked()
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if let Err(err) = self.validate() {
            warn!(config.error = %err, "Rejected engine config");
            return Err(err.into());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert!((config.solver.precision - 0.005).abs() < f64::EPSILON);
        assert_eq!(config.solver.settle_frames, 10);
        assert_eq!(config.solver.frame_rate, 60);
        assert_eq!(config.solver.max_frames(), 600);
        assert_eq!(config.sampler.target_count, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn preview_only_changes_precision() {
        let preview = SolverOptions::preview();
        assert!((preview.precision - PREVIEW_PRECISION).abs() < f64::EPSILON);
        assert_eq!(preview.settle_frames, DEFAULT_SETTLE_FRAMES);
        assert_eq!(preview.max_frames(), 600);
    }

    #[test]
    fn json_partial_config() {
        let config = EngineConfig::from_json(r#"{"sampler":{"target_count":20}}"#).unwrap();
        assert_eq!(config.sampler.target_count, 20);
        assert_eq!(config.solver, SolverOptions::default());
    }

    #[test]
    fn toml_full_config() {
        let text = "[solver]\nprecision = 0.01\nsettle_frames = 3\nframe_rate = 120\nmax_duration = 5.0\n\n[sampler]\ntarget_count = 80\n";
        let config = EngineConfig::from_toml(text).unwrap();
        assert_eq!(config.solver.frame_rate, 120);
        assert_eq!(config.solver.max_frames(), 600);
        assert_eq!(config.sampler.target_count, 80);
    }

    #[test]
    fn invalid_values_rejected() {
        let err = EngineConfig::from_json(r#"{"solver":{"precision":0.0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ConfigValidationError::Precision(_))
        ));

        let err = EngineConfig::from_toml("[sampler]\ntarget_count = 1\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ConfigValidationError::TargetCount(1))
        ));

        let bad = SolverOptions {
            frame_rate: 0,
            ..SolverOptions::default()
        };
        assert_eq!(bad.validate(), Err(ConfigValidationError::FrameRate));
    }

    #[test]
    fn parse_errors_surface() {
        assert!(matches!(
            EngineConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml("solver = ["),
            Err(ConfigError::Toml(_))
        ));
    }
}
