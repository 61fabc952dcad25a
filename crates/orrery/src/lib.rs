//! Gravitational N-body core for small systems of stars and planets.
//!
//! Each call to [`Simulation::advance`] computes pairwise gravity, applies a
//! symplectic Euler step, merges overlapping bodies and reports aggregate
//! statistics. Rendering, timing and user controls live with the caller.

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod history;
pub mod integrator;
pub mod monitor;
pub mod simulation;
pub mod state;
pub mod text;

#[cfg(test)]
mod config_test;

pub use body::{Body, BodyKind};
pub use config::{BodyConfig, ScenarioConfig, SimulationConfig};
pub use error::{OrreryError, Result};
pub use simulation::{Simulation, StepReport};
pub use state::SystemState;
