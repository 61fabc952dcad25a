//! Direct N-body gravity (O(N²) implementation)

use crate::body::{Body, pair_mut};
use crate::forces::{ForceModel, GRAVITATIONAL_CONSTANT};
use log::debug;

/// Direct O(N²) gravitational force computation
///
/// Every unordered pair of live bodies is evaluated once and the resulting
/// force is applied to both bodies with opposite sign, so the net forces are
/// identical to a naive double loop at half the pair count.
///
/// A pair whose softened separation is below the floating-point resolution
/// of its contact distance counts as coincident and contributes no force,
/// as does a pair whose force would not be finite. Such pairs are always in
/// contact, so the collision pass merges them.
///
/// # Examples
///
/// ```
/// use orrery::body::Body;
/// use orrery::forces::{compute_forces, DirectGravity};
///
/// let mut bodies = vec![
///     Body::planet(1.0, 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
///     Body::planet(1.0, 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
/// ];
/// compute_forces(&DirectGravity::new(1.0), &mut bodies);
///
/// // Coincident bodies exert no force on each other
/// assert_eq!(bodies[0].force.magnitude(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DirectGravity {
    /// Gravitational constant in the scenario's units
    pub g: f64,
    /// Optional softening length to prevent close-encounter singularities
    pub softening: f64,
}

impl DirectGravity {
    /// Creates a new direct gravity force with no softening
    pub fn new(g: f64) -> Self {
        Self { g, softening: 0.0 }
    }

    /// Creates a new direct gravity force with specified softening length
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::forces::DirectGravity;
    ///
    /// let gravity = DirectGravity::with_softening(1.0, 0.01);
    /// assert_eq!(gravity.softening, 0.01);
    /// ```
    pub fn with_softening(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    /// Squared separation of two bodies, `None` when numerically coincident
    fn softened_distance_squared(&self, a: &Body, b: &Body) -> Option<f64> {
        let r2 = (b.position - a.position).magnitude_squared() + self.softening * self.softening;
        let resolution = f64::EPSILON * (a.radius + b.radius);
        (r2 > resolution * resolution).then_some(r2)
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new(GRAVITATIONAL_CONSTANT)
    }
}

impl ForceModel for DirectGravity {
    fn accumulate(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        for i in 0..n {
            if !bodies[i].alive {
                continue;
            }
            for j in (i + 1)..n {
                if !bodies[j].alive {
                    continue;
                }
                let (a, b) = pair_mut(bodies, i, j);
                let Some(r2) = self.softened_distance_squared(a, b) else {
                    debug!("bodies {i} and {j} are coincident; skipping their mutual force");
                    continue;
                };
                let direction = (b.position - a.position) / r2.sqrt();
                // Force on `a` toward `b`; `b` receives the opposite
                let f = direction * (self.g * a.mass * b.mass / r2);
                if !(f.x.is_finite() && f.y.is_finite()) {
                    debug!("force between bodies {i} and {j} overflows; skipping it");
                    continue;
                }
                a.force += f;
                b.force -= f;
            }
        }
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        bodies
            .iter()
            .enumerate()
            .filter(|(_, a)| a.alive)
            .flat_map(|(i, a)| {
                bodies[i + 1..]
                    .iter()
                    .filter(|b| b.alive)
                    .filter_map(move |b| {
                        self.softened_distance_squared(a, b)
                            .map(|r2| -self.g * a.mass * b.mass / r2.sqrt())
                    })
            })
            .sum()
    }
}
