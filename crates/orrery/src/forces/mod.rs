//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct pairwise
//! gravity implementation that fills each live body's `force` accumulator.

use crate::body::Body;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::DirectGravity;

/// Newton's gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// A source of force on bodies in an N-body system
///
/// Implementations add their contribution to `Body::force` of live bodies
/// and must leave dead bodies, positions and velocities untouched.
/// Use [`compute_forces`] to get a freshly zeroed evaluation.
pub trait ForceModel: Send + Sync {
    /// Add this model's force to every live body's accumulator
    fn accumulate(&self, bodies: &mut [Body]);

    /// Compute potential energy of the live bodies (optional)
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}

/// Reset every live body's force and evaluate `model` from scratch
///
/// # Examples
///
/// ```
/// use orrery::body::Body;
/// use orrery::forces::{compute_forces, DirectGravity};
///
/// let mut bodies = vec![
///     Body::star(1000.0, 10.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
///     Body::planet(1.0, 2.0, [100.0, 0.0], [0.0, 5.0]).unwrap(),
/// ];
///
/// compute_forces(&DirectGravity::new(1.0), &mut bodies);
///
/// // The planet is pulled toward the star
/// assert!(bodies[1].force.x < 0.0);
/// assert_eq!(bodies[0].force, -bodies[1].force);
/// ```
pub fn compute_forces(model: &dyn ForceModel, bodies: &mut [Body]) {
    bodies
        .iter_mut()
        .filter(|b| b.alive)
        .for_each(|b| b.force = Vector2::zeros());
    model.accumulate(bodies);
}
