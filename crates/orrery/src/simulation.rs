//! One discrete update of the whole system
//!
//! [`Simulation::advance`] sequences force evaluation, integration and
//! collision resolution exactly once per call and reports the resulting
//! statistics. It performs no I/O and owns no timers; the caller's loop
//! decides how often to tick.

use crate::collisions::{MergeEvent, MergePolicy, resolve_collisions};
use crate::config::SimulationConfig;
use crate::error::{OrreryError, Result};
use crate::forces::{DirectGravity, ForceModel, GRAVITATIONAL_CONSTANT, compute_forces};
use crate::integrator::{Integrator, SymplecticEuler};
use crate::monitor::{SystemMonitor, SystemStats};
use crate::state::SystemState;
use log::trace;

/// Outcome of a single [`Simulation::advance`] call
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Simulated time covered by the step (`delta * speed_multiplier`)
    pub dt: f64,
    pub stats: SystemStats,
    pub merges: Vec<MergeEvent>,
}

/// The physics pipeline: forces, integration, collisions, statistics
pub struct Simulation {
    force: Box<dyn ForceModel>,
    integrator: Box<dyn Integrator>,
    merge_policy: MergePolicy,
    monitor: SystemMonitor,
}

impl Simulation {
    /// Creates a pipeline with direct gravity of strength `g` and defaults
    /// for everything else
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::Body;
    /// use orrery::simulation::Simulation;
    /// use orrery::state::SystemState;
    ///
    /// let mut state = SystemState::from_bodies(vec![
    ///     Body::star(1000.0, 10.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
    ///     Body::planet(1.0, 2.0, [100.0, 0.0], [0.0, 5.0]).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let simulation = Simulation::new(1.0);
    /// let report = simulation.advance(&mut state, 1.0, 1.0).unwrap();
    ///
    /// assert_eq!(report.stats.live_bodies, 2);
    /// assert!(state.bodies[1].velocity.x < 0.0);
    /// assert_eq!(state.time, 1.0);
    /// ```
    pub fn new(g: f64) -> Self {
        Self {
            force: Box::new(DirectGravity::new(g)),
            integrator: Box::new(SymplecticEuler),
            merge_policy: MergePolicy::default(),
            monitor: SystemMonitor::default(),
        }
    }

    /// Builds the pipeline described by `config`
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            force: Box::new(DirectGravity::with_softening(
                config.gravitational_constant,
                config.softening,
            )),
            integrator: config.integrator.build(),
            merge_policy: config.merge_policy,
            monitor: SystemMonitor::new(config.aggregate, config.interest),
        })
    }

    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.force = Box::new(force);
        self
    }

    pub fn with_integrator<I: Integrator + 'static>(mut self, integrator: I) -> Self {
        self.integrator = Box::new(integrator);
        self
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    pub fn with_monitor(mut self, monitor: SystemMonitor) -> Self {
        self.monitor = monitor;
        self
    }

    pub fn monitor(&self) -> &SystemMonitor {
        &self.monitor
    }

    pub fn force_model(&self) -> &dyn ForceModel {
        self.force.as_ref()
    }

    /// Total mechanical energy of the live bodies under this force model
    pub fn total_energy(&self, state: &SystemState) -> f64 {
        state.kinetic_energy() + self.force.potential_energy(&state.bodies)
    }

    /// Advance `state` by one tick of `delta` real time scaled by
    /// `speed_multiplier`
    ///
    /// A zero product is a pause: nothing in `state` is touched and the
    /// current statistics are returned. Fails with
    /// [`OrreryError::InvalidParameter`] for negative or non-finite time
    /// inputs and with [`OrreryError::InvalidBodyState`] when a live body
    /// has non-positive mass or radius.
    pub fn advance(
        &self,
        state: &mut SystemState,
        delta: f64,
        speed_multiplier: f64,
    ) -> Result<StepReport> {
        check_time_input("delta", delta)?;
        check_time_input("speed multiplier", speed_multiplier)?;
        state.validate()?;

        let dt = delta * speed_multiplier;
        if dt == 0.0 {
            return Ok(StepReport {
                dt,
                stats: self.monitor.evaluate(&state.bodies),
                merges: Vec::new(),
            });
        }

        compute_forces(self.force.as_ref(), &mut state.bodies);
        self.integrator.step(&mut state.bodies, dt);
        let merges = resolve_collisions(&mut state.bodies, self.merge_policy);
        state.time += dt;

        let stats = self.monitor.evaluate(&state.bodies);
        trace!(
            "t={:.4} dt={:.4} ({}) live={} merges={} speed={:.6e} distance={:.6e}",
            state.time,
            dt,
            self.integrator.name(),
            stats.live_bodies,
            merges.len(),
            stats.aggregate_speed,
            stats.aggregate_distance
        );

        Ok(StepReport { dt, stats, merges })
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(GRAVITATIONAL_CONSTANT)
    }
}

fn check_time_input(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OrreryError::InvalidParameter(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
