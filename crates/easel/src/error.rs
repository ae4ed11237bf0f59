//! Error types for the engine's few fallible edges.
//!
//! The math itself never fails: degenerate springs fall back to a straight
//! line and unknown export targets render as an empty string. Errors only
//! surface when parsing text handed in by the host.

use thiserror::Error;

/// An export target name that is not one of `css`, `tailwind`, `motion`, `gsap`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown export target '{0}'")]
pub struct UnknownTargetError(pub String);

/// Error (de)serializing an [`EditorState`](crate::EditorState).
#[derive(Error, Debug)]
pub enum StateError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration value outside its legal range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("Settle precision must be positive, got {0}")]
    Precision(f64),
    #[error("Settle frame count must be at least 1")]
    SettleFrames,
    #[error("Frame rate must be at least 1")]
    FrameRate,
    #[error("Maximum duration must be positive, got {0}")]
    MaxDuration(f64),
    #[error("Sampler target count must be at least 2, got {0}")]
    TargetCount(usize),
}

/// Error loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] ConfigValidationError),
}
