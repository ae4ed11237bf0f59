//! Plain value types shared by every stage of the engine.
//!
//! Everything here is created by the host on each edit and handed to the
//! engine by value or reference. Nothing is mutated in place.
//!
//! # Example
//!
//! ```rust
//! use easel::{BezierConfig, EaseMode, EditorState, Point};
//!
//! let state = EditorState {
//!     mode: EaseMode::Bezier,
//!     bezier: BezierConfig::new(Point::new(0.25, 0.1), Point::new(0.25, 1.0)),
//!     ..EditorState::default()
//! };
//! assert_eq!(state.bezier.end(), Point::new(1.0, 1.0));
//! ```

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// A coordinate in unit-square space or pixel space.
///
/// Unit-square values are nominally in `[0, 1]`, but Bezier handles may
/// leave that range on the Y axis (overshoot and anticipation curves).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin `(0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Identifies one of the two draggable Bezier handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    /// The start handle.
    P1,
    /// The end handle.
    P2,
}

/// Control handles of a cubic Bezier easing curve.
///
/// The curve's endpoints are fixed at `(0, 0)` and `(1, 1)` and are never
/// stored; see [`BezierConfig::start`] and [`BezierConfig::end`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierConfig {
    /// First control handle.
    pub p1: Point,
    /// Second control handle.
    pub p2: Point,
}

impl BezierConfig {
    /// Creates a curve from its two handles.
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// The implicit start point `(0, 0)`.
    #[inline]
    pub const fn start(&self) -> Point {
        Point::new(0.0, 0.0)
    }

    /// The implicit end point `(1, 1)`.
    #[inline]
    pub const fn end(&self) -> Point {
        Point::new(1.0, 1.0)
    }

    /// Returns the handle identified by `handle`.
    #[inline]
    pub const fn handle(&self, handle: Handle) -> Point {
        match handle {
            Handle::P1 => self.p1,
            Handle::P2 => self.p2,
        }
    }

    /// Returns a copy with one handle replaced.
    #[must_use]
    pub const fn with_handle(mut self, handle: Handle, value: Point) -> Self {
        match handle {
            Handle::P1 => self.p1 = value,
            Handle::P2 => self.p2 = value,
        }
        self
    }
}

impl Default for BezierConfig {
    fn default() -> Self {
        Self {
            p1: Point::new(0.4, 0.0),
            p2: Point::new(0.2, 1.0),
        }
    }
}

/// Physical constants of a damped oscillator released from `0` toward `1`.
///
/// `mass` and `stiffness` must be positive for a meaningful solution; the
/// solver falls back to a straight line otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Mass of the moving body.
    pub mass: f64,
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Initial velocity, in displacement units per second.
    #[serde(default)]
    pub velocity: f64,
}

impl SpringConfig {
    /// Creates a spring at rest (zero initial velocity).
    #[inline]
    pub const fn new(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            velocity: 0.0,
        }
    }

    /// Sets the initial velocity.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(1.0, 100.0, 10.0)
    }
}

/// Which curve model is active in the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EaseMode {
    /// Cubic Bezier handles with a user-chosen duration.
    #[default]
    Bezier,
    /// Damped spring whose duration comes from the solver.
    Spring,
}

/// Snapshot of the editor handed to the code generator.
///
/// `duration` (seconds) is only read in [`EaseMode::Bezier`]. In spring
/// mode the solver's settle time is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Active curve model.
    #[serde(default)]
    pub mode: EaseMode,
    /// Bezier handles.
    #[serde(default)]
    pub bezier: BezierConfig,
    /// Spring constants.
    #[serde(default)]
    pub spring: SpringConfig,
    /// Bezier-mode duration in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
}

const fn default_duration() -> f64 {
    1.0
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            mode: EaseMode::Bezier,
            bezier: BezierConfig::default(),
            spring: SpringConfig::default(),
            duration: default_duration(),
        }
    }
}

impl EditorState {
    /// A bezier-mode snapshot.
    pub fn bezier(bezier: BezierConfig, duration: f64) -> Self {
        Self {
            mode: EaseMode::Bezier,
            bezier,
            duration,
            ..Self::default()
        }
    }

    /// A spring-mode snapshot.
    pub fn spring(spring: SpringConfig) -> Self {
        Self {
            mode: EaseMode::Spring,
            spring,
            ..Self::default()
        }
    }

    /// Parse a snapshot from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `StateError` if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to compact JSON.
    ///
    /// # Errors
    /// Returns `StateError` if serialization fails.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(0.5, 0.5);
        assert_eq!(a + b, Point::new(1.5, 2.5));
        assert_eq!(a - b, Point::new(0.5, 1.5));
        assert_eq!(Point::origin(), Point::default());
    }

    #[test]
    fn bezier_endpoints_are_derived() {
        let curve = BezierConfig::new(Point::new(0.1, -0.5), Point::new(0.9, 1.5));
        assert_eq!(curve.start(), Point::new(0.0, 0.0));
        assert_eq!(curve.end(), Point::new(1.0, 1.0));
    }

    #[test]
    fn with_handle_replaces_only_one() {
        let curve = BezierConfig::default();
        let moved = curve.with_handle(Handle::P2, Point::new(0.7, 1.2));
        assert_eq!(moved.p1, curve.p1);
        assert_eq!(moved.handle(Handle::P2), Point::new(0.7, 1.2));
        // original untouched
        assert_eq!(curve.p2, Point::new(0.2, 1.0));
    }

    #[test]
    fn defaults_match_editor_start_state() {
        let state = EditorState::default();
        assert_eq!(state.mode, EaseMode::Bezier);
        assert_eq!(state.bezier.p1, Point::new(0.4, 0.0));
        assert_eq!(state.spring, SpringConfig::new(1.0, 100.0, 10.0));
        assert!((state.duration - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn json_round_trip_and_defaults() {
        let state = EditorState::spring(SpringConfig::new(2.0, 80.0, 20.0).with_velocity(1.5));
        let json = state.to_json().unwrap();
        assert!(json.contains("\"mode\":\"spring\""));
        assert_eq!(EditorState::from_json(&json).unwrap(), state);

        let sparse = EditorState::from_json(r#"{"mode":"spring","spring":{"mass":1,"stiffness":170,"damping":26}}"#)
            .unwrap();
        assert_eq!(sparse.mode, EaseMode::Spring);
        assert!(sparse.spring.velocity.abs() < f64::EPSILON);
        assert_eq!(sparse.bezier, BezierConfig::default());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(EditorState::from_json("{\"mode\": \"elastic\"}").is_err());
        assert!(EditorState::from_json("not json").is_err());
    }
}
