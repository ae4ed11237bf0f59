#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! # Easel
//!
//! The math behind an easing-curve editor.
//!
//! Easel provides:
//! - **Spring solver**: closed-form damped oscillator traces with settle times
//! - **Curve sampler**: compaction of traces into CSS `linear()` functions
//! - **Transform**: unit-square ↔ pixel mapping for curve handles
//! - **Export**: exact CSS, Tailwind, Motion and GSAP snippets
//!
//! Every function is pure. The host owns the editor state and passes an
//! [`EditorState`] snapshot in on each call.
//!
//! ## Spring Example
//!
//! ```rust
//! use easel::{points_to_linear, SpringConfig};
//!
//! let result = SpringConfig::new(1.0, 100.0, 10.0).solve();
//! let linear = points_to_linear(&result.points);
//!
//! assert!(linear.starts_with("linear(0, "));
//! assert!(linear.ends_with(", 1)"));
//! ```
//!
//! ## Export Example
//!
//! ```rust
//! use easel::{generate, EditorState, ExportTarget, SpringConfig};
//!
//! let state = EditorState::spring(SpringConfig::new(1.0, 170.0, 26.0));
//! let code = generate(ExportTarget::Motion, &state);
//! assert!(code.contains("stiffness: 170"));
//! ```
//!
//! ## Damping Ratios
//!
//! - **Over-damped (ζ > 1)**: No oscillation, slow approach to the target
//! - **Critically-damped (ζ = 1)**: Fastest approach without oscillation
//! - **Under-damped (ζ < 1)**: Overshoots and bounces with decay

mod config;
mod error;
mod export;
mod path;
mod sampler;
mod spring;
mod transform;
mod types;

pub use config::{
    EngineConfig, SamplerOptions, SolverOptions, DEFAULT_FRAME_RATE, DEFAULT_MAX_DURATION,
    DEFAULT_PRECISION, DEFAULT_SETTLE_FRAMES, DEFAULT_TARGET_COUNT, PREVIEW_PRECISION,
};
pub use error::{ConfigError, ConfigValidationError, StateError, UnknownTargetError};
pub use export::{generate, generate_all, generate_for_name, generate_with, ExportTarget};
pub use path::{bezier_path, trace_path, ViewBox, TRACE_VIEW_BUFFER};
pub use sampler::{compact, format_number, points_to_linear, points_to_linear_with};
pub use spring::{fps, solve_spring, Regime, SpringCurve, SpringResult};
pub use transform::{handle_from_pixels, to_pixels, to_unit, CanvasDimensions};
pub use types::{BezierConfig, EaseMode, EditorState, Handle, Point, SpringConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::export::{generate, ExportTarget};
    pub use crate::sampler::points_to_linear;
    pub use crate::spring::{solve_spring, SpringResult};
    pub use crate::transform::{to_pixels, to_unit, CanvasDimensions};
    pub use crate::types::{BezierConfig, EaseMode, EditorState, Point, SpringConfig};
}
