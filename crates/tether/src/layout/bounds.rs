//! Confinement of positions to the drawable area.

use tether_core::geometry::{Bounds, Point};

use crate::config::CanvasConfig;

/// Keeps every position inside the canvas minus its margin.
///
/// Applied after each integration step, so positions are bounded at every
/// iteration and not only at the end of the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsClamper {
    bounds: Bounds,
}

impl BoundsClamper {
    /// Creates a clamper for the drawable area of `canvas`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether::{config::CanvasConfig, layout::BoundsClamper};
    /// # use tether_core::geometry::Point;
    /// let clamper = BoundsClamper::new(&CanvasConfig::default());
    /// assert_eq!(clamper.clamp(Point::new(10.0, 5000.0)), Point::new(80.0, 1920.0));
    /// ```
    pub fn new(canvas: &CanvasConfig) -> Self {
        Self {
            bounds: canvas.layout_bounds(),
        }
    }

    /// Returns the rectangle positions are confined to.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Clamps `x` and `y` independently into the bounds.
    pub fn clamp(&self, point: Point) -> Point {
        self.bounds.clamp_point(point)
    }
}
