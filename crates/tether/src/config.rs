//! Configuration types for the layout engine.
//!
//! This module provides the configuration structures that parameterize the
//! force simulation. All types implement [`serde::Deserialize`] with every
//! field defaulted, so a partial document only overrides what it names.
//!
//! # Overview
//!
//! - [`LayoutConfig`] - Top-level configuration combining the sections below.
//! - [`CanvasConfig`] - Canvas size and the margin positions are kept out of.
//! - [`ForceConfig`] - Pairwise and spring force constants.
//! - [`SimulationConfig`] - Iteration count, integration and cancellation polling.
//!
//! # Example
//!
//! ```
//! # use tether::config::LayoutConfig;
//! let config = LayoutConfig::default();
//! assert_eq!(config.canvas().width(), 2000.0);
//! assert_eq!(config.simulation().iterations(), 200);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use tether_core::geometry::{Bounds, Size};

use crate::LayoutError;

/// Top-level layout configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Force constants section.
    #[serde(default)]
    forces: ForceConfig,

    /// Simulation loop section.
    #[serde(default)]
    simulation: SimulationConfig,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, forces: ForceConfig, simulation: SimulationConfig) -> Self {
        Self {
            canvas,
            forces,
            simulation,
        }
    }

    /// Returns a copy with the canvas resized, keeping the margin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether::config::LayoutConfig;
    /// let config = LayoutConfig::default().with_canvas_size(800.0, 600.0);
    /// assert_eq!(config.canvas().width(), 800.0);
    /// assert_eq!(config.canvas().height(), 600.0);
    /// assert_eq!(config.canvas().margin(), 80.0);
    /// ```
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas.width = width;
        self.canvas.height = height;
        self
    }

    /// Returns a copy running the given number of iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.simulation.iterations = iterations;
        self
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the force configuration.
    pub fn forces(&self) -> &ForceConfig {
        &self.forces
    }

    /// Returns the simulation configuration.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Checks that the configuration describes a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] when:
    /// - the canvas width or height is not a positive finite number
    /// - the margin is negative, non-finite, or leaves no room on either axis
    /// - a force constant is not finite
    /// - the time step is not finite or damping lies outside `[0, 1]`
    /// - the cancellation check interval is zero
    pub fn validate(&self) -> Result<(), LayoutError> {
        let canvas = &self.canvas;
        for (name, value) in [("width", canvas.width), ("height", canvas.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::invalid_config(format!(
                    "canvas {name} must be a positive number, got {value}"
                )));
            }
        }
        if !canvas.margin.is_finite() || canvas.margin < 0.0 {
            return Err(LayoutError::invalid_config(format!(
                "canvas margin must be a non-negative number, got {}",
                canvas.margin
            )));
        }
        if canvas.margin * 2.0 > canvas.width.min(canvas.height) {
            return Err(LayoutError::invalid_config(format!(
                "canvas margin {} leaves no room on a {}x{} canvas",
                canvas.margin, canvas.width, canvas.height
            )));
        }

        let forces = &self.forces;
        for (name, value) in [
            ("optimal_distance", forces.optimal_distance),
            ("pair_strength", forces.pair_strength),
            ("spring_length", forces.spring_length),
            ("spring_strength", forces.spring_strength),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::invalid_config(format!(
                    "force {name} must be finite, got {value}"
                )));
            }
        }

        let simulation = &self.simulation;
        if !simulation.time_step.is_finite() {
            return Err(LayoutError::invalid_config(format!(
                "time_step must be finite, got {}",
                simulation.time_step
            )));
        }
        if !(0.0..=1.0).contains(&simulation.damping) {
            return Err(LayoutError::invalid_config(format!(
                "damping must lie in [0, 1], got {}",
                simulation.damping
            )));
        }
        if simulation.cancel_check_interval == 0 {
            return Err(LayoutError::invalid_config(
                "cancel_check_interval must be at least 1",
            ));
        }

        Ok(())
    }
}

/// Canvas dimensions and the margin kept free along every edge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f64,
    height: f64,
    margin: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 2000.0,
            margin: 80.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Returns the canvas as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The rectangle every position is clamped into.
    pub fn layout_bounds(&self) -> Bounds {
        self.size().to_bounds().shrink(self.margin)
    }
}

/// Force constants of the simulation.
///
/// The pairwise force between two nodes is
/// `(optimal_distance - d) * pair_strength`: repulsive below the optimal
/// distance and attractive beyond it. Each edge adds a spring force of
/// `(d - spring_length) * spring_strength`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    optimal_distance: f64,
    pair_strength: f64,
    spring_length: f64,
    spring_strength: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            optimal_distance: 200.0,
            pair_strength: 0.5,
            spring_length: 120.0,
            spring_strength: 0.3,
        }
    }
}

impl ForceConfig {
    pub fn new(
        optimal_distance: f64,
        pair_strength: f64,
        spring_length: f64,
        spring_strength: f64,
    ) -> Self {
        Self {
            optimal_distance,
            pair_strength,
            spring_length,
            spring_strength,
        }
    }

    /// Separation at which the pairwise force vanishes.
    pub fn optimal_distance(&self) -> f64 {
        self.optimal_distance
    }

    pub fn pair_strength(&self) -> f64 {
        self.pair_strength
    }

    /// Rest length of edge springs.
    pub fn spring_length(&self) -> f64 {
        self.spring_length
    }

    pub fn spring_strength(&self) -> f64 {
        self.spring_strength
    }
}

/// Parameters of the simulation loop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    iterations: usize,
    time_step: f64,
    damping: f64,
    cancel_check_interval: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            time_step: 0.1,
            damping: 0.9,
            cancel_check_interval: 10,
        }
    }
}

impl SimulationConfig {
    pub fn new(
        iterations: usize,
        time_step: f64,
        damping: f64,
        cancel_check_interval: usize,
    ) -> Self {
        Self {
            iterations,
            time_step,
            damping,
            cancel_check_interval,
        }
    }

    /// Fixed number of iterations; there is no convergence check.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Fraction of the velocity applied to the position each iteration.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Multiplier applied to the velocity after each displacement.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// How many iterations pass between cancellation checks.
    pub fn cancel_check_interval(&self) -> usize {
        self.cancel_check_interval
    }
}
