//! Time integration for N-body systems
//!
//! Integrators consume the force already accumulated on each live body and
//! advance velocity and position by one step. Force evaluation is the
//! caller's job (see [`crate::forces::compute_forces`]), so every scheme here
//! uses exactly one force evaluation per step.

use crate::body::Body;
use serde::{Deserialize, Serialize};

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance every live body by `dt` using its current `force`
    ///
    /// A `dt` of zero must leave every body untouched.
    fn step(&self, bodies: &mut [Body], dt: f64);

    fn name(&self) -> &'static str;
}

/// Symplectic (semi-implicit) Euler integrator
///
/// Velocity is updated first and the new velocity drives the position
/// update:
///
/// 1. a = F / m
/// 2. v(t + dt) = v(t) + a * dt
/// 3. x(t + dt) = x(t) + v(t + dt) * dt
///
/// Energy error stays bounded over long runs instead of drifting as with
/// [`Euler`].
///
/// # Examples
///
/// ```
/// use orrery::body::Body;
/// use orrery::integrator::{Integrator, SymplecticEuler};
/// use nalgebra::Vector2;
///
/// let mut bodies = vec![Body::planet(2.0, 1.0, [0.0, 0.0], [1.0, 0.0]).unwrap()];
/// bodies[0].force = Vector2::new(2.0, 0.0);
///
/// SymplecticEuler.step(&mut bodies, 1.0);
///
/// assert_eq!(bodies[0].velocity, Vector2::new(2.0, 0.0));
/// assert_eq!(bodies[0].position.x, 2.0); // uses the new velocity
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(&self, bodies: &mut [Body], dt: f64) {
        if dt == 0.0 {
            return;
        }
        bodies.iter_mut().filter(|b| b.alive).for_each(|body| {
            let accel = body.acceleration();
            body.velocity += accel * dt;
            body.position += body.velocity * dt;
        });
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }
}

/// Simple explicit Euler integrator (1st order, for comparison only)
///
/// Position advances with the old velocity before the velocity update.
/// Energy drifts secularly; prefer [`SymplecticEuler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, bodies: &mut [Body], dt: f64) {
        if dt == 0.0 {
            return;
        }
        bodies.iter_mut().filter(|b| b.alive).for_each(|body| {
            let accel = body.acceleration();
            body.position += body.velocity * dt;
            body.velocity += accel * dt;
        });
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }
}

/// Integration scheme selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    #[default]
    SymplecticEuler,
    ExplicitEuler,
}

impl IntegratorKind {
    pub fn build(self) -> Box<dyn Integrator> {
        match self {
            IntegratorKind::SymplecticEuler => Box::new(SymplecticEuler),
            IntegratorKind::ExplicitEuler => Box::new(Euler),
        }
    }
}
