//! Animation code generation for CSS, Tailwind, Motion and GSAP.
//!
//! [`generate`] turns an [`EditorState`] into a snippet a developer can
//! paste straight into their project. Output is deterministic: the same
//! state always yields byte-identical text.
//!
//! In spring mode CSS, Tailwind and GSAP have no native spring, so the
//! solver runs and its trace is flattened into a static curve. Motion does
//! have one, so it receives the raw physical constants instead.
//!
//! ```rust
//! use easel::{generate, BezierConfig, EditorState, ExportTarget, Point};
//!
//! let state = EditorState::bezier(
//!     BezierConfig::new(Point::new(0.25, 0.1), Point::new(0.25, 1.0)),
//!     1.0,
//! );
//! assert_eq!(
//!     generate(ExportTarget::Css, &state),
//!     "transition: all 1s cubic-bezier(0.25, 0.1, 0.25, 1);"
//! );
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::config::EngineConfig;
use crate::error::UnknownTargetError;
use crate::sampler::{format_number, points_to_linear_with};
use crate::spring::SpringResult;
use crate::types::{BezierConfig, EaseMode, EditorState, SpringConfig};

/// Ecosystems the generator can emit code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    /// Plain CSS `transition` declarations.
    Css,
    /// Tailwind arbitrary-value utility classes.
    Tailwind,
    /// A Motion (Framer Motion) `transition` object.
    Motion,
    /// A `gsap.to` call.
    Gsap,
}

impl ExportTarget {
    /// Every target, in tab order.
    pub const ALL: [Self; 4] = [Self::Css, Self::Tailwind, Self::Motion, Self::Gsap];

    /// Machine name (`css`, `tailwind`, `motion`, `gsap`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Motion => "motion",
            Self::Gsap => "gsap",
        }
    }

    /// Human-readable tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Tailwind => "Tailwind",
            Self::Motion => "Motion",
            Self::Gsap => "GSAP",
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTarget {
    type Err = UnknownTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "tailwind" => Ok(Self::Tailwind),
            "motion" => Ok(Self::Motion),
            "gsap" => Ok(Self::Gsap),
            _ => Err(UnknownTargetError(s.to_string())),
        }
    }
}

/// Spring trace resolved once per generation.
struct SolvedSpring {
    result: SpringResult,
    linear: String,
}

impl SolvedSpring {
    fn new(spring: &SpringConfig, config: &EngineConfig) -> Self {
        let result = spring.solve_with(&config.solver);
        let linear = points_to_linear_with(&result.points, &config.sampler);
        Self { result, linear }
    }
}

/// Generate code for `target` with the default engine settings.
pub fn generate(target: ExportTarget, state: &EditorState) -> String {
    generate_with(&EngineConfig::default(), target, state)
}

/// Generate code for `target` with explicit engine settings.
pub fn generate_with(config: &EngineConfig, target: ExportTarget, state: &EditorState) -> String {
    let code = match (state.mode, target) {
        (EaseMode::Bezier, ExportTarget::Css) => css_bezier(&state.bezier, state.duration),
        (EaseMode::Bezier, ExportTarget::Tailwind) => {
            tailwind_bezier(&state.bezier, state.duration)
        }
        (EaseMode::Bezier, ExportTarget::Motion) => motion_bezier(&state.bezier, state.duration),
        (EaseMode::Bezier, ExportTarget::Gsap) => gsap_bezier(&state.bezier, state.duration),
        (EaseMode::Spring, ExportTarget::Motion) => motion_spring(&state.spring),
        (EaseMode::Spring, ExportTarget::Css) => {
            css_spring(&SolvedSpring::new(&state.spring, config))
        }
        (EaseMode::Spring, ExportTarget::Tailwind) => {
            tailwind_spring(&SolvedSpring::new(&state.spring, config))
        }
        (EaseMode::Spring, ExportTarget::Gsap) => {
            gsap_spring(&SolvedSpring::new(&state.spring, config))
        }
    };
    trace!(export.target = %target, export.mode = ?state.mode, export.len = code.len(), "Generated code");
    code
}

/// Generate code for a target given by name.
///
/// Unknown names yield an empty string; the set of targets is closed, so
/// one showing up here means the caller has a bug.
pub fn generate_for_name(target: &str, state: &EditorState) -> String {
    match target.parse::<ExportTarget>() {
        Ok(target) => generate(target, state),
        Err(err) => {
            warn!(export.target = target, error = %err, "Unknown export target");
            String::new()
        }
    }
}

/// Generate code for every target, in tab order.
pub fn generate_all(state: &EditorState) -> Vec<(ExportTarget, String)> {
    let config = EngineConfig::default();
    ExportTarget::ALL
        .into_iter()
        .map(|target| (target, generate_with(&config, target, state)))
        .collect()
}

fn handles(curve: &BezierConfig, separator: &str) -> String {
    [curve.p1.x, curve.p1.y, curve.p2.x, curve.p2.y]
        .map(format_number)
        .join(separator)
}

#[allow(clippy::cast_possible_truncation)]
fn milliseconds(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

fn css_bezier(curve: &BezierConfig, duration: f64) -> String {
    format!(
        "transition: all {}s cubic-bezier({});",
        format_number(duration),
        handles(curve, ", ")
    )
}

fn css_spring(spring: &SolvedSpring) -> String {
    format!(
        "/* Duration calculated by physics */\ntransition-duration: {}s;\ntransition-timing-function: {};",
        format_number(spring.result.duration),
        spring.linear
    )
}

// Arbitrary-value classes cannot contain spaces.
fn tailwind_bezier(curve: &BezierConfig, duration: f64) -> String {
    format!(
        "ease-[cubic-bezier({})] duration-[{}ms]",
        handles(curve, ","),
        milliseconds(duration)
    )
}

fn tailwind_spring(spring: &SolvedSpring) -> String {
    format!(
        "ease-[{}] duration-[{}ms]",
        spring.linear.replace(", ", ","),
        milliseconds(spring.result.duration)
    )
}

fn motion_bezier(curve: &BezierConfig, duration: f64) -> String {
    format!(
        "transition: {{\n  duration: {},\n  ease: [{}]\n}}",
        format_number(duration),
        handles(curve, ", ")
    )
}

// Raw constants: Motion runs its own spring physics.
fn motion_spring(spring: &SpringConfig) -> String {
    format!(
        "transition: {{\n  type: \"spring\",\n  stiffness: {},\n  damping: {},\n  mass: {}\n}}",
        spring.stiffness, spring.damping, spring.mass
    )
}

fn gsap_call(duration: f64, ease: &str) -> String {
    format!(
        "gsap.to(target, {{\n  duration: {},\n  ease: {ease}\n}});",
        format_number(duration)
    )
}

fn gsap_bezier(curve: &BezierConfig, duration: f64) -> String {
    gsap_call(duration, &format!("\"cubic-bezier({})\"", handles(curve, ",")))
}

fn gsap_spring(spring: &SolvedSpring) -> String {
    let path = custom_ease_path(&spring.result.points);
    gsap_call(
        spring.result.duration,
        &format!("CustomEase.create(\"custom\", \"{path}\")"),
    )
}

/// `CustomEase` path through the full-resolution trace.
///
/// The first sample is a move-to, the rest one implicit line-to run:
/// `M0,0 L0.5,0.8 1,1`. Sample `i` sits at `x = i / (n - 1)`.
fn custom_ease_path(points: &[f64]) -> String {
    let last = points.len().saturating_sub(1).max(1);
    let mut path = String::with_capacity(points.len() * 12);
    for (index, &value) in points.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = index as f64 / last as f64;
        match index {
            0 => path.push('M'),
            1 => path.push_str(" L"),
            _ => path.push(' '),
        }
        path.push_str(&format_number(x));
        path.push(',');
        path.push_str(&format_number(value));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn ease_state() -> EditorState {
        EditorState::bezier(
            BezierConfig::new(Point::new(0.25, 0.1), Point::new(0.25, 1.0)),
            1.0,
        )
    }

    #[test]
    fn target_names_round_trip() {
        for target in ExportTarget::ALL {
            assert_eq!(target.as_str().parse::<ExportTarget>(), Ok(target));
            assert_eq!(target.to_string(), target.as_str());
        }
        assert_eq!(" GSAP ".parse::<ExportTarget>(), Ok(ExportTarget::Gsap));
        assert_eq!(
            "svelte".parse::<ExportTarget>(),
            Err(UnknownTargetError("svelte".into()))
        );
        assert_eq!(ExportTarget::Gsap.label(), "GSAP");
    }

    #[test]
    fn css_bezier_exact() {
        assert_eq!(
            generate(ExportTarget::Css, &ease_state()),
            "transition: all 1s cubic-bezier(0.25, 0.1, 0.25, 1);"
        );
    }

    #[test]
    fn tailwind_bezier_exact() {
        let state = EditorState::bezier(
            BezierConfig::new(Point::new(0.42, 0.0), Point::new(0.58, 1.0)),
            0.3,
        );
        assert_eq!(
            generate(ExportTarget::Tailwind, &state),
            "ease-[cubic-bezier(0.42,0,0.58,1)] duration-[300ms]"
        );
    }

    #[test]
    fn motion_bezier_exact() {
        assert_eq!(
            generate(ExportTarget::Motion, &ease_state()),
            "transition: {\n  duration: 1,\n  ease: [0.25, 0.1, 0.25, 1]\n}"
        );
    }

    #[test]
    fn gsap_bezier_exact() {
        let state = EditorState::bezier(
            BezierConfig::new(Point::new(0.68, -0.55), Point::new(0.265, 1.55)),
            0.75,
        );
        assert_eq!(
            generate(ExportTarget::Gsap, &state),
            "gsap.to(target, {\n  duration: 0.75,\n  ease: \"cubic-bezier(0.68,-0.55,0.265,1.55)\"\n});"
        );
    }

    #[test]
    fn motion_spring_passes_constants_through() {
        let state = EditorState::spring(SpringConfig::new(1.5, 170.0, 26.0));
        assert_eq!(
            generate(ExportTarget::Motion, &state),
            "transition: {\n  type: \"spring\",\n  stiffness: 170,\n  damping: 26,\n  mass: 1.5\n}"
        );
    }

    #[test]
    fn spring_mode_ignores_stored_duration() {
        let mut state = EditorState::spring(SpringConfig::default());
        state.duration = 42.0;
        let solved = SpringConfig::default().solve();
        let css = generate(ExportTarget::Css, &state);
        assert!(css.starts_with("/* Duration calculated by physics */\n"));
        assert!(css.contains(&format!("transition-duration: {}s;", format_number(solved.duration))));
        assert!(!css.contains("42s"));
        assert!(css.ends_with(");"));
    }

    #[test]
    fn tailwind_spring_has_no_spaces_in_ease() {
        let state = EditorState::spring(SpringConfig::new(1.0, 200.0, 10.0));
        let code = generate(ExportTarget::Tailwind, &state);
        let (ease, duration) = code.split_once(' ').unwrap();
        assert!(ease.starts_with("ease-[linear(0,"));
        assert!(ease.ends_with(",1)]"));
        assert!(!ease.contains(", "));
        assert!(duration.starts_with("duration-["));
        assert!(duration.ends_with("ms]"));
    }

    #[test]
    fn gsap_spring_uses_full_trace() {
        let spring = SpringConfig::new(1.0, 100.0, 10.0);
        let solved = spring.solve();
        let code = generate(ExportTarget::Gsap, &EditorState::spring(spring));
        assert!(code.contains("CustomEase.create(\"custom\", \"M0,0 L"));
        assert!(code.contains(" 1,1\")"));
        let path_start = code.find("\"M").unwrap() + 1;
        let path_end = code[path_start..].find('"').unwrap() + path_start;
        let coordinates = code[path_start..path_end].split(' ').count();
        // "M0,0" and "L.." each carry one point; the rest are bare pairs.
        assert_eq!(coordinates, solved.points.len());
    }

    #[test]
    fn custom_ease_path_shape() {
        assert_eq!(custom_ease_path(&[0.0, 0.5, 1.0]), "M0,0 L0.5,0.5 1,1");
        assert_eq!(custom_ease_path(&[0.0, 1.0]), "M0,0 L1,1");
    }

    #[test]
    fn degenerate_spring_falls_back() {
        let state = EditorState::spring(SpringConfig::new(0.0, 100.0, 10.0));
        assert_eq!(
            generate(ExportTarget::Css, &state),
            "/* Duration calculated by physics */\ntransition-duration: 1s;\ntransition-timing-function: linear(0, 1);"
        );
        assert_eq!(
            generate(ExportTarget::Tailwind, &state),
            "ease-[linear(0,1)] duration-[1000ms]"
        );
        assert_eq!(
            generate(ExportTarget::Gsap, &state),
            "gsap.to(target, {\n  duration: 1,\n  ease: CustomEase.create(\"custom\", \"M0,0 L1,1\")\n});"
        );
    }

    #[test]
    fn unknown_name_is_empty() {
        assert_eq!(generate_for_name("webflow", &ease_state()), "");
        assert_eq!(
            generate_for_name("css", &ease_state()),
            generate(ExportTarget::Css, &ease_state())
        );
    }

    #[test]
    fn generate_all_in_tab_order() {
        let all = generate_all(&ease_state());
        let order: Vec<_> = all.iter().map(|(target, _)| *target).collect();
        assert_eq!(order, ExportTarget::ALL);
        assert!(all.iter().all(|(_, code)| !code.is_empty()));
    }
}
