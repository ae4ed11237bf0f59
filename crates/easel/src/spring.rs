//! Closed-form damped spring solver.
//!
//! A spring released from displacement `0` toward a target of `1` follows
//! one of three analytic solutions depending on its damping ratio. The
//! solver evaluates that solution on a fixed 60 Hz grid until the motion
//! has stayed within `precision` of the target for several frames in a row,
//! and reports the trace together with its settle time.
//!
//! # Example
//!
//! ```rust
//! use easel::{solve_spring, SpringConfig};
//!
//! let result = solve_spring(1.0, 100.0, 10.0, 0.0, 0.005);
//! assert_eq!(result.points[0], 0.0);
//! assert_eq!(*result.points.last().unwrap(), 1.0);
//! assert!(result.duration <= 10.0);
//!
//! // Same thing through the config type.
//! assert_eq!(SpringConfig::new(1.0, 100.0, 10.0).solve(), result);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SolverOptions;
use crate::types::SpringConfig;

/// Machine epsilon for floating point comparisons.
const EPSILON: f64 = f64::EPSILON;

/// Returns the time delta for a given number of frames per second.
///
/// ```rust
/// use easel::fps;
///
/// assert!((fps(60) - 1.0 / 60.0).abs() < 1e-15);
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / f64::from(n)
}

/// The three physically distinct solutions of a damped oscillator.
///
/// - **Under-damped (ζ < 1)**: oscillates around the target with decay
/// - **Critically-damped (ζ = 1)**: fastest approach without oscillation
/// - **Over-damped (ζ > 1)**: no oscillation, slow approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// ζ < 1.
    UnderDamped,
    /// ζ = 1, within one machine epsilon.
    CriticallyDamped,
    /// ζ > 1.
    OverDamped,
}

impl Regime {
    /// Classifies a damping ratio.
    ///
    /// Ratios within [`f64::EPSILON`] of `1` count as critical, so a
    /// ratio that works out to exactly `1.0` (e.g. mass 1, stiffness 100,
    /// damping 20) always takes the critical branch.
    pub fn classify(damping_ratio: f64) -> Self {
        if damping_ratio > 1.0 + EPSILON {
            Self::OverDamped
        } else if damping_ratio < 1.0 - EPSILON {
            Self::UnderDamped
        } else {
            Self::CriticallyDamped
        }
    }
}

/// Precomputed closed-form coefficients for one spring.
///
/// Each variant stores the constants of `x(t) = 1 + u(t)`, where `u` is the
/// displacement from the target with `u(0) = -1` and `u'(0) = velocity`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    /// `u = e^(-decay t) (-cos(wd t) + sin_coef sin(wd t))`
    Under { decay: f64, wd: f64, sin_coef: f64 },
    /// `u = e^(-w0 t) (-1 + linear_coef t)`
    Critical { w0: f64, linear_coef: f64 },
    /// `u = c1 e^(z1 t) + c2 e^(z2 t)`
    Over { z1: f64, z2: f64, c1: f64, c2: f64 },
}

/// Analytic displacement curve of a non-degenerate spring.
///
/// Obtain one with [`SpringConfig::curve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    motion: Motion,
}

impl SpringCurve {
    fn new(w0: f64, zeta: f64, velocity: f64) -> Self {
        let motion = match Regime::classify(zeta) {
            Regime::UnderDamped => Self::under_damped(w0, zeta, velocity),
            Regime::CriticallyDamped => Self::critically_damped(w0, velocity),
            Regime::OverDamped => Self::over_damped(w0, zeta, velocity),
        };
        Self { motion }
    }

    fn under_damped(w0: f64, zeta: f64, velocity: f64) -> Motion {
        let decay = zeta * w0;
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        Motion::Under {
            decay,
            wd,
            sin_coef: (velocity - decay) / wd,
        }
    }

    fn critically_damped(w0: f64, velocity: f64) -> Motion {
        Motion::Critical {
            w0,
            linear_coef: velocity - w0,
        }
    }

    fn over_damped(w0: f64, zeta: f64, velocity: f64) -> Motion {
        let spread = w0 * (zeta * zeta - 1.0).sqrt();
        let z1 = -zeta * w0 + spread;
        let z2 = -zeta * w0 - spread;
        // z1 - z2 = 2 * spread
        let c1 = (velocity + z2) / (2.0 * spread);
        Motion::Over {
            z1,
            z2,
            c1,
            c2: -1.0 - c1,
        }
    }

    /// Which closed form this curve uses.
    pub fn regime(&self) -> Regime {
        match self.motion {
            Motion::Under { .. } => Regime::UnderDamped,
            Motion::Critical { .. } => Regime::CriticallyDamped,
            Motion::Over { .. } => Regime::OverDamped,
        }
    }

    /// Displacement at time `t` seconds.
    #[inline]
    pub fn position(&self, t: f64) -> f64 {
        let offset = match self.motion {
            Motion::Under {
                decay,
                wd,
                sin_coef,
            } => (-decay * t).exp() * (-(wd * t).cos() + sin_coef * (wd * t).sin()),
            Motion::Critical { w0, linear_coef } => (-w0 * t).exp() * (-1.0 + linear_coef * t),
            Motion::Over { z1, z2, c1, c2 } => c1 * (z1 * t).exp() + c2 * (z2 * t).exp(),
        };
        1.0 + offset
    }
}

/// A sampled spring trace.
///
/// `points[i]` is the displacement at `i / 60` seconds. The trace is never
/// empty and always ends at exactly `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringResult {
    /// Displacement samples.
    pub points: Vec<f64>,
    /// Settle time in seconds, rounded to two decimals.
    pub duration: f64,
}

impl SpringResult {
    /// The straight-line result returned for degenerate springs.
    pub fn fallback() -> Self {
        Self {
            points: vec![0.0, 1.0],
            duration: 1.0,
        }
    }
}

impl SpringConfig {
    /// Natural frequency `ω₀ = sqrt(stiffness / mass)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ = damping / (2 sqrt(stiffness * mass))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// True when mass or stiffness is not positive.
    pub fn is_degenerate(&self) -> bool {
        self.mass <= 0.0 || self.stiffness <= 0.0
    }

    /// The regime this spring falls in, or `None` when degenerate.
    pub fn regime(&self) -> Option<Regime> {
        self.curve().map(|curve| curve.regime())
    }

    /// The analytic displacement curve, or `None` when degenerate.
    pub fn curve(&self) -> Option<SpringCurve> {
        if self.is_degenerate() {
            return None;
        }
        Some(SpringCurve::new(
            self.natural_frequency(),
            self.damping_ratio(),
            self.velocity,
        ))
    }

    /// Solve with the default options.
    pub fn solve(&self) -> SpringResult {
        self.solve_with(&SolverOptions::default())
    }

    /// Solve with explicit options.
    ///
    /// Degenerate springs return [`SpringResult::fallback`] rather than an
    /// error, so callers never branch on failure.
    pub fn solve_with(&self, options: &SolverOptions) -> SpringResult {
        let Some(curve) = self.curve() else {
            debug!(
                spring.mass = self.mass,
                spring.stiffness = self.stiffness,
                "Degenerate spring, using straight-line fallback"
            );
            return SpringResult::fallback();
        };

        let step = fps(options.frame_rate);
        let max_frames = options.max_frames();
        let mut points = Vec::with_capacity(max_frames.min(256) + 1);
        let mut settled = 0u32;
        let mut frames = 0usize;

        while frames < max_frames {
            #[allow(clippy::cast_precision_loss)]
            let position = curve.position(frames as f64 * step);
            points.push(position);
            frames += 1;

            if (1.0 - position).abs() < options.precision {
                settled += 1;
                if settled >= options.settle_frames {
                    break;
                }
            } else {
                settled = 0;
            }
        }

        if settled < options.settle_frames {
            debug!(
                spring.frames = frames,
                spring.max_duration = options.max_duration,
                "Spring did not settle before the ceiling"
            );
        }

        // Pin the end so the timing function never snaps on its last frame.
        #[allow(clippy::float_cmp)]
        let ends_at_target = points.last().is_some_and(|&last| last == 1.0);
        if !ends_at_target {
            points.push(1.0);
        }

        #[allow(clippy::cast_precision_loss)]
        let duration = round_to_hundredths(frames as f64 * step);

        trace!(
            spring.regime = ?curve.regime(),
            spring.frames = frames,
            spring.samples = points.len(),
            spring.duration = duration,
            "Spring solved"
        );

        SpringResult { points, duration }
    }
}

/// Solve a spring from raw constants.
///
/// Returns `{points: [0, 1], duration: 1}` when `mass <= 0` or
/// `stiffness <= 0`. Use [`crate::PREVIEW_PRECISION`] as `precision` for
/// cheap, low-fidelity traces.
pub fn solve_spring(
    mass: f64,
    stiffness: f64,
    damping: f64,
    velocity: f64,
    precision: f64,
) -> SpringResult {
    SpringConfig::new(mass, stiffness, damping)
        .with_velocity(velocity)
        .solve_with(&SolverOptions::with_precision(precision))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
