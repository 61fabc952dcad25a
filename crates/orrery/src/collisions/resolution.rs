//! Collision resolution through momentum-conserving mergers
//!
//! When bodies collide, the earlier body in storage order absorbs the later
//! one. The survivor conserves:
//! - Total mass
//! - Total momentum
//!
//! Radius, kind and color of the survivor are left as they were.

use crate::body::{Body, pair_mut};
use crate::collisions::detection::is_colliding;
use log::debug;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Where the merged body ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// The absorbing body keeps its own position
    #[default]
    SurvivorKeepsPosition,
    /// The merged body moves to the pair's center of mass
    CenterOfMass,
}

/// Record of one absorption performed by [`resolve_collisions`]
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    pub survivor: usize,
    pub absorbed: usize,
    /// Survivor mass after the merge
    pub mass: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
}

/// Merge `absorbed` into `survivor` as a perfectly inelastic collision
///
/// - Mass: m = m_a + m_b
/// - Velocity: v = (m_a v_a + m_b v_b) / m
/// - Position: per `policy`
///
/// `absorbed` is marked dead; its remaining fields are stale afterwards.
///
/// # Examples
///
/// ```
/// use orrery::body::Body;
/// use orrery::collisions::{merge_into, MergePolicy};
///
/// let mut a = Body::planet(1.0, 1.0, [0.0, 0.0], [0.0, 5.0]).unwrap();
/// let mut b = Body::planet(3.0, 1.0, [1.0, 0.0], [0.0, 1.0]).unwrap();
///
/// let p_initial = a.momentum() + b.momentum();
/// merge_into(&mut a, &mut b, MergePolicy::SurvivorKeepsPosition);
///
/// assert_eq!(a.mass, 4.0);
/// assert!((a.momentum() - p_initial).magnitude() < 1e-12);
/// assert_eq!(a.position.x, 0.0);
/// assert!(!b.is_alive());
/// ```
pub fn merge_into(survivor: &mut Body, absorbed: &mut Body, policy: MergePolicy) {
    let total_mass = survivor.mass + absorbed.mass;

    // Momentum-conserving velocity
    let velocity = (survivor.momentum() + absorbed.momentum()) / total_mass;

    if policy == MergePolicy::CenterOfMass {
        let coords = (survivor.position.coords * survivor.mass
            + absorbed.position.coords * absorbed.mass)
            / total_mass;
        survivor.position = Point2::from(coords);
    }

    survivor.mass = total_mass;
    survivor.velocity = velocity;
    absorbed.alive = false;
}

/// Merge every overlapping pair of live bodies in a single pass
///
/// Pairs are scanned in storage order `(i, j)` with `i < j`; on overlap the
/// body at `i` absorbs the one at `j`. A survivor keeps being tested against
/// later bodies with its merged state, while an absorbed body is skipped for
/// the rest of the pass. Overlaps the scan has already moved past (for
/// example a survivor that now reaches an earlier body) are left for the
/// next call.
///
/// # Examples
///
/// ```
/// use orrery::body::Body;
/// use orrery::collisions::{resolve_collisions, MergePolicy};
///
/// let mut bodies = vec![
///     Body::star(10.0, 5.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
///     Body::planet(1.0, 1.0, [4.0, 0.0], [0.0, 1.0]).unwrap(),
/// ];
///
/// let merges = resolve_collisions(&mut bodies, MergePolicy::default());
///
/// assert_eq!(merges.len(), 1);
/// assert_eq!(bodies[0].mass, 11.0);
/// assert!(!bodies[1].is_alive());
/// ```
pub fn resolve_collisions(bodies: &mut [Body], policy: MergePolicy) -> Vec<MergeEvent> {
    let n = bodies.len();
    let mut merges = Vec::new();

    for i in 0..n {
        if !bodies[i].alive {
            continue;
        }
        for j in (i + 1)..n {
            if !bodies[j].alive {
                continue;
            }
            let (survivor, absorbed) = pair_mut(bodies, i, j);
            if !is_colliding(survivor, absorbed) {
                continue;
            }

            merge_into(survivor, absorbed, policy);
            debug!(
                "body {j} merged into body {i}: mass {:.6e}, position ({:.3}, {:.3})",
                survivor.mass, survivor.position.x, survivor.position.y
            );
            merges.push(MergeEvent {
                survivor: i,
                absorbed: j,
                mass: survivor.mass,
                position: survivor.position,
                velocity: survivor.velocity,
            });
        }
    }

    merges
}
