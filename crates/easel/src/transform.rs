//! Mapping between the unit square and a padded pixel canvas.
//!
//! Pixel space has its origin at the top-left, so the Y axis is flipped:
//! unit `y = 1` lands on the top edge of the usable area.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// A pixel canvas with a symmetric inset on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    /// Total width in pixels.
    pub width: f64,
    /// Total height in pixels.
    pub height: f64,
    /// Inset applied to every edge.
    pub padding: f64,
}

impl CanvasDimensions {
    /// The main curve editor canvas.
    pub const EDITOR: Self = Self::new(500.0, 500.0, 60.0);

    /// The small canvas used for preset icons.
    pub const ICON: Self = Self::new(100.0, 100.0, 10.0);

    /// Creates new canvas dimensions.
    #[inline]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width of the area inside the padding.
    #[inline]
    pub fn usable_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    /// Height of the area inside the padding.
    #[inline]
    pub fn usable_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

/// Map a unit-square point to pixel space.
///
/// ```rust
/// use easel::{to_pixels, CanvasDimensions, Point};
///
/// let dims = CanvasDimensions::new(200.0, 100.0, 10.0);
/// assert_eq!(to_pixels(Point::new(0.0, 0.0), &dims), Point::new(10.0, 90.0));
/// assert_eq!(to_pixels(Point::new(1.0, 1.0), &dims), Point::new(190.0, 10.0));
/// ```
#[inline]
pub fn to_pixels(point: Point, dims: &CanvasDimensions) -> Point {
    Point {
        x: point.x * dims.usable_width() + dims.padding,
        y: (1.0 - point.y) * dims.usable_height() + dims.padding,
    }
}

/// Map a pixel-space point back to the unit square. Inverse of [`to_pixels`].
///
/// No clamping is applied; see [`handle_from_pixels`] for the drag variant.
#[inline]
pub fn to_unit(point: Point, dims: &CanvasDimensions) -> Point {
    Point {
        x: (point.x - dims.padding) / dims.usable_width(),
        y: 1.0 - (point.y - dims.padding) / dims.usable_height(),
    }
}

/// Unit-space position of a Bezier handle dragged to `point`.
///
/// X is clamped to `[0, 1]` so the curve stays a function of time. Y is
/// left free because overshoot handles are valid.
pub fn handle_from_pixels(point: Point, dims: &CanvasDimensions) -> Point {
    let unit = to_unit(point, dims);
    Point {
        x: unit.x.clamp(0.0, 1.0),
        y: unit.y,
    }
}
