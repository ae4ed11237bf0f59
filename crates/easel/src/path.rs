//! SVG path data for curve previews.
//!
//! These helpers only produce `d` attribute strings and view boxes; the
//! host decides how (and whether) to paint them.

use core::fmt;

use crate::sampler::format_number;
use crate::transform::{to_pixels, CanvasDimensions};
use crate::types::{BezierConfig, Point};

/// Vertical breathing room added around an overshooting trace.
pub const TRACE_VIEW_BUFFER: f64 = 40.0;

fn coords(point: Point) -> String {
    format!("{} {}", format_number(point.x), format_number(point.y))
}

/// Cubic path from `(0,0)` to `(1,1)` through the curve's handles, in
/// pixel space.
///
/// ```rust
/// use easel::{bezier_path, BezierConfig, CanvasDimensions, Point};
///
/// let curve = BezierConfig::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
/// assert_eq!(
///     bezier_path(&curve, &CanvasDimensions::ICON),
///     "M 10 90 C 10 90, 90 10, 90 10"
/// );
/// ```
pub fn bezier_path(curve: &BezierConfig, dims: &CanvasDimensions) -> String {
    format!(
        "M {} C {}, {}, {}",
        coords(to_pixels(curve.start(), dims)),
        coords(to_pixels(curve.p1, dims)),
        coords(to_pixels(curve.p2, dims)),
        coords(to_pixels(curve.end(), dims)),
    )
}

/// Polyline through a displacement trace, spread evenly across the width.
///
/// Sample `i` sits at unit `x = i / (n - 1)`. Empty input gives an empty
/// string; a single sample gives a lone move-to at `x = 0`.
pub fn trace_path(points: &[f64], dims: &CanvasDimensions) -> String {
    let last = points.len().saturating_sub(1).max(1);
    let mut segments = Vec::with_capacity(points.len());
    for (index, &value) in points.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = index as f64 / last as f64;
        let command = if index == 0 { 'M' } else { 'L' };
        segments.push(format!("{command} {}", coords(to_pixels(Point::new(x, value), dims))));
    }
    segments.join(" ")
}

/// An SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ViewBox {
    /// The whole canvas.
    pub fn canvas(dims: &CanvasDimensions) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: dims.width,
            height: dims.height,
        }
    }

    /// Grow the canvas vertically so a trace that overshoots above `1` or
    /// below `0` stays visible with `buffer` pixels to spare.
    ///
    /// Never shrinks below the canvas itself.
    pub fn fit_trace(points: &[f64], dims: &CanvasDimensions, buffer: f64) -> Self {
        let (top, bottom) = points
            .iter()
            .map(|&value| to_pixels(Point::new(0.0, value), dims).y)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        if !top.is_finite() {
            return Self::canvas(dims);
        }

        let min_y = (top - buffer).min(0.0);
        let max_y = (bottom + buffer).max(dims.height);
        Self {
            min_x: 0.0,
            min_y,
            width: dims.width,
            height: max_y - min_y,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_number(self.min_x),
            format_number(self.min_y),
            format_number(self.width),
            format_number(self.height)
        )
    }
}
