//! Collision detection by radius contact

use crate::body::Body;

/// A detected overlap between two live bodies
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Storage index of the earlier body
    pub first: usize,
    /// Storage index of the later body
    pub second: usize,
    /// Current separation distance
    pub separation: f64,
    /// Sum of the two radii
    pub contact_distance: f64,
}

/// Distance at which two bodies touch
pub fn contact_distance(a: &Body, b: &Body) -> f64 {
    a.radius + b.radius
}

/// Whether two bodies overlap or touch
///
/// The boundary is inclusive: bodies exactly `r₁ + r₂` apart collide.
///
/// # Examples
///
/// ```
/// use orrery::body::Body;
/// use orrery::collisions::is_colliding;
///
/// let a = Body::planet(1.0, 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap();
/// let touching = Body::planet(1.0, 2.0, [3.0, 0.0], [0.0, 0.0]).unwrap();
/// let apart = Body::planet(1.0, 2.0, [3.001, 0.0], [0.0, 0.0]).unwrap();
///
/// assert!(is_colliding(&a, &touching));
/// assert!(!is_colliding(&a, &apart));
/// ```
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    a.distance_to(b) <= contact_distance(a, b)
}

/// Check if a pair of bodies should collide
fn check_pair(i: usize, j: usize, a: &Body, b: &Body) -> Option<CollisionEvent> {
    let separation = a.distance_to(b);
    let contact_distance = contact_distance(a, b);

    (separation <= contact_distance).then_some(CollisionEvent {
        first: i,
        second: j,
        separation,
        contact_distance,
    })
}

/// List every overlapping pair of live bodies, in storage order
///
/// Checks every pair directly; dead bodies never participate.
pub fn detect_collisions(bodies: &[Body]) -> Vec<CollisionEvent> {
    let n = bodies.len();
    (0..n)
        .filter(|&i| bodies[i].alive)
        .flat_map(|i| {
            ((i + 1)..n)
                .filter(|&j| bodies[j].alive)
                .filter_map(move |j| check_pair(i, j, &bodies[i], &bodies[j]))
        })
        .collect()
}
