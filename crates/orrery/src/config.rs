//! Scenario configuration loaded from YAML
//!
//! A scenario is a [`SimulationConfig`] (physics constants and policies) and
//! an ordered list of [`BodyConfig`] records. Every body is validated while
//! the scenario is turned into a [`SystemState`], so an invalid record
//! rejects the whole scenario before any step runs.
//!
//! ```yaml
//! simulation:
//!   gravitational_constant: 1.0
//!   integrator: symplectic_euler      # or explicit_euler
//!   merge_policy: survivor_keeps_position   # or center_of_mass
//!   aggregate: root_sum_squares       # or sum_of_magnitudes
//!   interest: any_live                # or interacting
//!
//! bodies:
//!   - kind: star
//!     mass: 1000.0
//!     radius: 10.0
//!     color: red
//!     position: [0.0, 0.0]
//!   - kind: planet
//!     mass: 1.0
//!     radius: 2.0
//!     position: [100.0, 0.0]
//!     velocity: [0.0, 5.0]
//! ```
//!
//! Omitted `simulation` keys take their defaults; an omitted body `radius`
//! or `color` takes the kind's default and an omitted `velocity` is zero.

use std::fs;
use std::path::Path;

use log::info;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyKind, DEFAULT_RADIUS};
use crate::collisions::MergePolicy;
use crate::error::{OrreryError, Result};
use crate::forces::GRAVITATIONAL_CONSTANT;
use crate::integrator::IntegratorKind;
use crate::monitor::{Aggregate, InterestRule};
use crate::simulation::Simulation;
use crate::state::SystemState;
use crate::text;

/// Physics constants and policy choices for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub softening: f64,
    pub integrator: IntegratorKind,
    pub merge_policy: MergePolicy,
    pub aggregate: Aggregate,
    pub interest: InterestRule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            softening: 0.0,
            integrator: IntegratorKind::default(),
            merge_policy: MergePolicy::default(),
            aggregate: Aggregate::default(),
            interest: InterestRule::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        let g = self.gravitational_constant;
        if !(g.is_finite() && g > 0.0) {
            return Err(OrreryError::InvalidParameter(format!(
                "gravitational constant must be positive and finite, got {g}"
            )));
        }
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(OrreryError::InvalidParameter(format!(
                "softening must be non-negative and finite, got {}",
                self.softening
            )));
        }
        Ok(())
    }
}

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub kind: BodyKind,
    pub mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
}

impl BodyConfig {
    /// Builds the body, reporting failures against its position in the list
    pub fn to_body(&self, index: usize) -> Result<Body> {
        let body = Body::new(
            self.kind,
            self.mass,
            self.radius.unwrap_or(DEFAULT_RADIUS),
            Point2::new(self.position[0], self.position[1]),
            Vector2::new(self.velocity[0], self.velocity[1]),
        )
        .map_err(|e| match e {
            OrreryError::InvalidBody(reason) => OrreryError::InvalidBodyState { index, reason },
            other => other,
        })?;

        Ok(match &self.color {
            Some(color) => body.with_color(color.clone()),
            None => body,
        })
    }

    /// Captures a body's current fields
    pub fn from_body(body: &Body) -> Self {
        Self {
            kind: body.kind,
            mass: body.mass,
            radius: Some(body.radius),
            color: Some(body.color.clone()),
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
        }
    }
}

/// Top-level scenario: simulation settings plus initial bodies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a scenario file; `.txt` files use the line-oriented body
    /// format from [`crate::text`], anything else is read as YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_text = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

        let scenario = if is_text {
            Self {
                simulation: SimulationConfig::default(),
                bodies: text::parse_bodies(&contents)?,
            }
        } else {
            Self::from_yaml_str(&contents)?
        };

        info!(
            "loaded {} bodies from {}",
            scenario.bodies.len(),
            path.display()
        );
        Ok(scenario)
    }

    /// Captures the live bodies of `state` under `simulation`
    pub fn snapshot(simulation: SimulationConfig, state: &SystemState) -> Self {
        Self {
            simulation,
            bodies: state.live_bodies().map(BodyConfig::from_body).collect(),
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validates every body and builds the initial state
    pub fn build_state(&self) -> Result<SystemState> {
        let bodies = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| b.to_body(i))
            .collect::<Result<Vec<_>>>()?;
        SystemState::from_bodies(bodies)
    }

    /// Builds the physics pipeline and the initial state together
    pub fn into_parts(self) -> Result<(Simulation, SystemState)> {
        let simulation = Simulation::from_config(&self.simulation)?;
        let state = self.build_state()?;
        Ok((simulation, state))
    }
}
