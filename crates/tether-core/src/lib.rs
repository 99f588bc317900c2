//! Tether Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Tether layout
//! engine and its front ends. It includes:
//!
//! - **Geometry**: Points, sizes and bounding rectangles ([`geometry`] module)
//! - **Graph**: The node and edge input model ([`graph`] module)

pub mod geometry;
pub mod graph;
