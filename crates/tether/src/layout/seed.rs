//! Deterministic initial placement.
//!
//! Seeds depend only on a node's id and its index, never on a random source,
//! so the same graph always starts the simulation from the same state.

use tether_core::geometry::{Point, Size};

use super::physics::id_hash;

/// Horizontal stagger applied per node index.
const INDEX_STEP_X: f64 = 100.0;
/// Vertical stagger applied per node index.
const INDEX_STEP_Y: f64 = 150.0;

/// Computes the seed position of the `index`-th node on a canvas.
///
/// With `h = id_hash(id)`:
///
/// ```text
/// x = (|h|       mod width)  + (index * 100 mod width)
/// y = (|h >> 16| mod height) + (index * 150 mod height)
/// ```
///
/// The shift is arithmetic and `|i32::MIN|` is `2^31`. The seed is not
/// clamped; the first simulation step does that.
///
/// # Examples
///
/// ```
/// # use tether::layout::seed_position;
/// # use tether_core::geometry::{Point, Size};
/// let canvas = Size::new(2000.0, 2000.0);
/// assert_eq!(seed_position("A", 0, canvas), Point::new(65.0, 0.0));
/// assert_eq!(seed_position("A", 3, canvas), Point::new(365.0, 450.0));
/// ```
pub fn seed_position(id: &str, index: usize, canvas: Size) -> Point {
    let hash = id_hash(id);
    let index = index as f64;
    let width = canvas.width();
    let height = canvas.height();

    let x = f64::from(hash).abs() % width + (index * INDEX_STEP_X) % width;
    let y = f64::from(hash >> 16).abs() % height + (index * INDEX_STEP_Y) % height;
    Point::new(x, y)
}
