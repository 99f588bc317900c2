//! Force-directed layout.
//!
//! The layout runs as a forward pipeline:
//!
//! ```text
//! nodes ─► edges ─► arena ─► seeds ─► simulation (+ clamp per step) ─► LayoutResult
//! ```
//!
//! - [`physics`] holds the pure formulas: identifier hash, floored distance,
//!   pairwise and spring forces, integration.
//! - [`seed_position`] places each node deterministically from its id.
//! - [`BoundsClamper`] confines positions after every integration step.
//! - The simulation itself is internal; drive it through
//!   [`LayoutEngine`](crate::LayoutEngine).

mod bounds;
mod cancel;
pub mod physics;
mod result;
mod seed;
mod simulation;

pub use bounds::BoundsClamper;
pub use cancel::CancelToken;
pub use physics::id_hash;
pub use result::LayoutResult;
pub use seed::seed_position;

pub(crate) use simulation::Simulation;
