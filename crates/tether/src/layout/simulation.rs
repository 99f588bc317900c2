//! Force simulation over an arena of positions.
//!
//! Each iteration runs four phases in a fixed order:
//! 1. Pairwise force for every unordered pair `i < j`
//! 2. Spring force for every edge, in edge order
//! 3. Integration of velocity into position, then damping
//! 4. Clamping of every position into the layout bounds
//!
//! Positions do not move during phases 1 and 2; only velocities accumulate.
//! The arena is owned by a single [`Simulation`] for the duration of one
//! layout call.

use log::{Level, debug, log_enabled, trace};

use tether_core::geometry::Point;

use crate::{
    LayoutError,
    config::{ForceConfig, LayoutConfig, SimulationConfig},
};

use super::{bounds::BoundsClamper, cancel::CancelToken, physics};

/// Simulation state of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Position {
    point: Point,
    velocity: Point,
}

impl Position {
    /// A node at rest at `point`.
    pub(crate) fn at_rest(point: Point) -> Self {
        Self {
            point,
            velocity: Point::default(),
        }
    }

    pub(crate) fn point(&self) -> Point {
        self.point
    }

    pub(crate) fn velocity(&self) -> Point {
        self.velocity
    }
}

/// Iterative force-directed relaxation.
#[derive(Debug)]
pub(crate) struct Simulation {
    positions: Vec<Position>,
    springs: Vec<(usize, usize)>,
    forces: ForceConfig,
    settings: SimulationConfig,
    clamper: BoundsClamper,
    iteration: usize,
}

impl Simulation {
    /// Creates a simulation from seed points and spring endpoints.
    ///
    /// Every spring endpoint must index into `seeds`.
    pub(crate) fn new(seeds: Vec<Point>, springs: Vec<(usize, usize)>, config: &LayoutConfig) -> Self {
        debug_assert!(
            springs
                .iter()
                .all(|&(source, target)| source < seeds.len() && target < seeds.len()),
            "spring endpoint out of range"
        );

        Self {
            positions: seeds.into_iter().map(Position::at_rest).collect(),
            springs,
            forces: config.forces().clone(),
            settings: config.simulation().clone(),
            clamper: BoundsClamper::new(config.canvas()),
            iteration: 0,
        }
    }

    /// Number of completed iterations.
    pub(crate) fn iteration(&self) -> usize {
        self.iteration
    }

    pub(crate) fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// True once all iterations have run, or immediately for an empty graph.
    pub(crate) fn is_finished(&self) -> bool {
        self.positions.is_empty() || self.iteration >= self.settings.iterations()
    }

    /// Runs the remaining iterations.
    pub(crate) fn run(&mut self) {
        while !self.is_finished() {
            self.step();
        }
    }

    /// Runs the remaining iterations, polling `token` between them.
    ///
    /// The token is checked before the first iteration and then every
    /// `cancel_check_interval` iterations.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Cancelled`] with the number of completed
    /// iterations when the token is set at a check.
    pub(crate) fn run_cancellable(&mut self, token: &CancelToken) -> Result<(), LayoutError> {
        let interval = self.settings.cancel_check_interval().max(1);
        while !self.is_finished() {
            if self.iteration % interval == 0 && token.is_cancelled() {
                debug!(iteration = self.iteration; "Simulation cancelled");
                return Err(LayoutError::Cancelled {
                    iteration: self.iteration,
                });
            }
            self.step();
        }
        Ok(())
    }

    /// Advances the simulation by one iteration.
    pub(crate) fn step(&mut self) {
        self.apply_pair_forces();
        self.apply_spring_forces();
        self.integrate();
        self.iteration += 1;

        if log_enabled!(Level::Trace) {
            let kinetic: f64 = self
                .positions
                .iter()
                .map(|position| {
                    let velocity = position.velocity();
                    velocity.x() * velocity.x() + velocity.y() * velocity.y()
                })
                .sum();
            trace!(iteration = self.iteration, kinetic; "Simulation step");
        }
    }

    fn apply_pair_forces(&mut self) {
        let optimal_distance = self.forces.optimal_distance();
        let strength = self.forces.pair_strength();
        let count = self.positions.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let delta = self.positions[i].point.sub_point(self.positions[j].point);
                let force = physics::pair_force(delta, optimal_distance, strength);

                self.positions[i].velocity = self.positions[i].velocity.add_point(force);
                self.positions[j].velocity = self.positions[j].velocity.sub_point(force);
            }
        }
    }

    fn apply_spring_forces(&mut self) {
        let rest_length = self.forces.spring_length();
        let strength = self.forces.spring_strength();

        for &(source, target) in &self.springs {
            let delta = self.positions[target]
                .point
                .sub_point(self.positions[source].point);
            let force = physics::spring_force(delta, rest_length, strength);

            self.positions[source].velocity = self.positions[source].velocity.add_point(force);
            self.positions[target].velocity = self.positions[target].velocity.sub_point(force);
        }
    }

    fn integrate(&mut self) {
        let time_step = self.settings.time_step();
        let damping = self.settings.damping();

        for position in &mut self.positions {
            let (point, velocity) =
                physics::integrate(position.point, position.velocity, time_step, damping);
            position.point = self.clamper.clamp(point);
            position.velocity = velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(seeds: &[Point], springs: &[(usize, usize)]) -> Simulation {
        Simulation::new(seeds.to_vec(), springs.to_vec(), &LayoutConfig::default())
    }

    #[test]
    fn test_empty_simulation_does_no_work() {
        let mut sim = simulation(&[], &[]);
        assert!(sim.is_finished());
        sim.run();
        assert_eq!(sim.iteration(), 0);
        assert!(sim.positions().is_empty());
    }

    #[test]
    fn test_runs_configured_iterations() {
        let config = LayoutConfig::default().with_iterations(7);
        let mut sim = Simulation::new(vec![Point::new(500.0, 500.0)], vec![], &config);
        sim.run();
        assert_eq!(sim.iteration(), 7);
    }

    #[test]
    fn test_single_node_only_moves_by_clamp() {
        let mut sim = simulation(&[Point::new(65.0, 0.0)], &[]);
        sim.run();

        let position = sim.positions()[0];
        assert_eq!(position.point(), Point::new(80.0, 80.0));
        assert!(position.velocity().is_zero());
    }

    #[test]
    fn test_pair_force_is_symmetric() {
        let mut sim = simulation(&[Point::new(900.0, 1000.0), Point::new(1000.0, 1000.0)], &[]);
        sim.step();

        let [left, right] = [sim.positions()[0], sim.positions()[1]];
        // Too close: pushed apart by equal and opposite velocities
        assert!(left.velocity().x() < 0.0);
        assert_eq!(left.velocity().x(), -right.velocity().x());
        assert!(left.point().x() < 900.0);
        assert!(right.point().x() > 1000.0);
    }

    #[test]
    fn test_first_step_matches_hand_computation() {
        // 100 apart along x: pair force (200 - 100) * 0.5 = 50 pushes apart,
        // spring (100 - 120) * 0.3 = -6 pushes apart as well.
        let mut sim = simulation(
            &[Point::new(900.0, 1000.0), Point::new(1000.0, 1000.0)],
            &[(0, 1)],
        );
        sim.step();

        let left = sim.positions()[0];
        let right = sim.positions()[1];
        // velocity before damping: -50 + (-6) = -56
        assert_eq!(left.point(), Point::new(900.0 - 5.6, 1000.0));
        assert_eq!(left.velocity().x(), -56.0 * 0.9);
        assert_eq!(right.point(), Point::new(1000.0 + 5.6, 1000.0));
        assert_eq!(right.velocity().x(), 56.0 * 0.9);
    }

    #[test]
    fn test_spring_shortens_long_edge() {
        let seeds = [Point::new(200.0, 1000.0), Point::new(1800.0, 1000.0)];
        let mut with_spring = simulation(&seeds, &[(0, 1)]);
        let mut without_spring = simulation(&seeds, &[]);
        with_spring.step();
        without_spring.step();

        let gap = |sim: &Simulation| sim.positions()[1].point().x() - sim.positions()[0].point().x();
        assert!(gap(&with_spring) < gap(&without_spring));
    }

    #[test]
    fn test_cancel_before_start() {
        let token = CancelToken::new();
        token.cancel();

        let mut sim = simulation(&[Point::new(100.0, 100.0), Point::new(300.0, 300.0)], &[]);
        let result = sim.run_cancellable(&token);

        assert_eq!(result, Err(LayoutError::Cancelled { iteration: 0 }));
        assert_eq!(sim.iteration(), 0);
    }

    #[test]
    fn test_cancel_is_checked_on_interval() {
        let token = CancelToken::new();
        let mut sim = simulation(&[Point::new(100.0, 100.0), Point::new(300.0, 300.0)], &[]);

        // Three manual steps put the next check at iteration 10
        for _ in 0..3 {
            sim.step();
        }
        token.cancel();

        let result = sim.run_cancellable(&token);
        assert_eq!(result, Err(LayoutError::Cancelled { iteration: 10 }));
    }

    #[test]
    fn test_uncancelled_run_matches_plain_run() {
        let seeds = [
            Point::new(100.0, 100.0),
            Point::new(300.0, 350.0),
            Point::new(700.0, 90.0),
        ];
        let mut plain = simulation(&seeds, &[(0, 1), (1, 2)]);
        let mut cancellable = simulation(&seeds, &[(0, 1), (1, 2)]);

        plain.run();
        cancellable
            .run_cancellable(&CancelToken::new())
            .expect("token was never cancelled");

        assert_eq!(plain.positions(), cancellable.positions());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn seeds_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(
            (0.0f64..4000.0, 0.0f64..4000.0).prop_map(|(x, y)| Point::new(x, y)),
            0..12,
        )
    }

    fn graph_strategy() -> impl Strategy<Value = (Vec<Point>, Vec<(usize, usize)>)> {
        seeds_strategy().prop_flat_map(|seeds| {
            let count = seeds.len();
            let springs = if count == 0 {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec((0..count, 0..count), 0..20).boxed()
            };
            (Just(seeds), springs)
        })
    }

    /// After every iteration every node lies inside the layout bounds.
    fn check_bounded_every_iteration(
        seeds: Vec<Point>,
        springs: Vec<(usize, usize)>,
    ) -> Result<(), TestCaseError> {
        let config = LayoutConfig::default().with_iterations(60);
        let bounds = config.canvas().layout_bounds();
        let mut sim = Simulation::new(seeds, springs, &config);

        while !sim.is_finished() {
            sim.step();
            for position in sim.positions() {
                prop_assert!(
                    bounds.contains(position.point()),
                    "{:?} escaped {:?} at iteration {}",
                    position.point(),
                    bounds,
                    sim.iteration()
                );
            }
        }
        Ok(())
    }

    /// Two runs over the same input are bit-identical.
    fn check_deterministic(
        seeds: Vec<Point>,
        springs: Vec<(usize, usize)>,
    ) -> Result<(), TestCaseError> {
        let config = LayoutConfig::default().with_iterations(40);
        let mut first = Simulation::new(seeds.clone(), springs.clone(), &config);
        let mut second = Simulation::new(seeds, springs, &config);
        first.run();
        second.run();

        for (a, b) in first.positions().iter().zip(second.positions()) {
            prop_assert_eq!(a.point().x().to_bits(), b.point().x().to_bits());
            prop_assert_eq!(a.point().y().to_bits(), b.point().y().to_bits());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn bounded_every_iteration((seeds, springs) in graph_strategy()) {
            check_bounded_every_iteration(seeds, springs)?;
        }

        #[test]
        fn deterministic((seeds, springs) in graph_strategy()) {
            check_deterministic(seeds, springs)?;
        }
    }
}
