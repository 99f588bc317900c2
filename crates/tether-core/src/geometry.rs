//! Geometric primitives for graph layout.
//!
//! This module provides the small set of geometric types the layout engine
//! works with.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate (or displacement) in canvas space
//! - [`Size`] - Width and height of the layout canvas
//! - [`Bounds`] - An axis-aligned rectangle that positions are confined to
//!
//! # Coordinate System
//!
//! Tether uses the screen coordinate system that renderers expect:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All coordinates are `f64`. Layouts must be reproducible bit for bit, and
//! double precision keeps the arithmetic identical to other IEEE 754 double
//! implementations of the same formulas.

use serde::Serialize;

/// A 2D point representing a position or displacement on the canvas.
///
/// # Examples
///
/// ```
/// # use tether_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let delta = p1.sub_point(p2);
/// assert_eq!(delta.x(), 5.0);
/// assert_eq!(delta.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::geometry::Point;
    /// let velocity = Point::new(10.0, -20.0);
    ///
    /// let damped = velocity.scale(0.5);
    /// assert_eq!(damped.x(), 5.0);
    /// assert_eq!(damped.y(), -10.0);
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean length of the point treated as a vector from the origin.
    ///
    /// Computed as `sqrt(x*x + y*y)` rather than [`f64::hypot`]; the two can
    /// differ in the last bit and layouts depend on the exact value.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Point) -> f64 {
        self.sub_point(other).length()
    }
}

/// Represents the dimensions of a canvas with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns true if either dimension is zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Bounds covering this size with the top-left corner at the origin
    pub fn to_bounds(self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self)
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// # Examples
///
/// ```
/// # use tether_core::geometry::{Bounds, Point, Size};
/// let canvas = Size::new(2000.0, 2000.0).to_bounds();
/// let inner = canvas.shrink(80.0);
///
/// assert_eq!(inner.min_x(), 80.0);
/// assert_eq!(inner.max_y(), 1920.0);
///
/// let clamped = inner.clamp_point(Point::new(-5.0, 3000.0));
/// assert_eq!(clamped, Point::new(80.0, 1920.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x(),
            min_y: top_left.y(),
            max_x: top_left.x() + size.width(),
            max_y: top_left.y() + size.height(),
        }
    }

    /// Returns the minimum x-coordinate (left edge)
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate (top edge)
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate (right edge)
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate (bottom edge)
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Moves every edge inward by `margin`.
    pub fn shrink(self, margin: f64) -> Self {
        Self {
            min_x: self.min_x + margin,
            min_y: self.min_y + margin,
            max_x: self.max_x - margin,
            max_y: self.max_y - margin,
        }
    }

    /// Returns true if the point lies inside or on the edge of the bounds
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Restricts a point to the bounds, independently per axis.
    ///
    /// Each axis is computed as `max(min, min(max, v))`. Unlike
    /// [`f64::clamp`] this never panics; for inverted bounds the minimum
    /// edge wins. A NaN coordinate is mapped onto the bounds as well.
    pub fn clamp_point(self, point: Point) -> Point {
        Point::new(
            point.x().min(self.max_x).max(self.min_x),
            point.y().min(self.max_y).max(self.min_y),
        )
    }
}
