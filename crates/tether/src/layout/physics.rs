//! Pure numeric kernels of the layout.
//!
//! Every formula the simulation depends on lives here as a free function so
//! it can be tested in isolation from the loop driver. Operation order
//! matters for reproducibility: each function performs its floating point
//! operations in a fixed sequence, and callers must not reorder them.

use tether_core::geometry::Point;

/// Lower bound applied to distances before dividing by them.
pub const MIN_DISTANCE: f64 = 1.0;

/// 32-bit identifier hash used for seeding.
///
/// Iterates the UTF-16 code units of `id` with `h = h * 31 + code`, starting
/// from zero, under two's-complement wraparound. This is the classic
/// `(h << 5) - h + code` string hash and yields identical values to any other
/// implementation of that recurrence over UTF-16.
///
/// # Examples
///
/// ```
/// # use tether::layout::id_hash;
/// assert_eq!(id_hash(""), 0);
/// assert_eq!(id_hash("A"), 65);
/// assert_eq!(id_hash("hello"), 99_162_322);
/// ```
pub fn id_hash(id: &str) -> i32 {
    id.encode_utf16().fold(0i32, |hash, code| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(code))
    })
}

/// Length of `delta`, floored at [`MIN_DISTANCE`].
///
/// A NaN length also maps to the floor.
pub fn distance(delta: Point) -> f64 {
    delta.length().max(MIN_DISTANCE)
}

/// Scales the direction of `delta` (whose floored length is `distance`) to
/// `magnitude`.
fn along(delta: Point, distance: f64, magnitude: f64) -> Point {
    Point::new(
        delta.x() / distance * magnitude,
        delta.y() / distance * magnitude,
    )
}

/// Unified pairwise force between two nodes.
///
/// `delta` is `first - second`. Returns the velocity change for the first
/// node; the second node receives its negation. The magnitude is
/// `(optimal_distance - d) * strength`, which pushes the nodes apart when they
/// are closer than `optimal_distance` and pulls them together beyond it.
pub fn pair_force(delta: Point, optimal_distance: f64, strength: f64) -> Point {
    let distance = distance(delta);
    let force = (optimal_distance - distance) * strength;
    along(delta, distance, force)
}

/// Spring force along an edge.
///
/// `delta` is `target - source`. Returns the velocity change for the source
/// node; the target receives its negation. The magnitude is
/// `(d - rest_length) * strength`, pulling stretched edges together and
/// pushing compressed ones apart.
pub fn spring_force(delta: Point, rest_length: f64, strength: f64) -> Point {
    let distance = distance(delta);
    let force = (distance - rest_length) * strength;
    along(delta, distance, force)
}

/// One explicit integration step.
///
/// Moves `position` by `velocity * time_step` and only then damps the
/// velocity. Returns the new `(position, velocity)`.
pub fn integrate(position: Point, velocity: Point, time_step: f64, damping: f64) -> (Point, Point) {
    let position = position.add_point(velocity.scale(time_step));
    (position, velocity.scale(damping))
}
