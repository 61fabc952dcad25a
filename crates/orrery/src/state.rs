use crate::body::Body;
use crate::error::Result;
use nalgebra::{Point2, Vector2};

/// Complete state of an N-body system at a given time
///
/// Merged-away bodies stay in `bodies` with `alive == false` so indices
/// handed out by [`SystemState::add_body`] remain stable; use
/// [`SystemState::live_bodies`] to iterate the participating set.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Simulated time accumulated from every advanced step
    pub time: f64,
    /// All bodies in storage order, live and dead
    pub bodies: Vec<Body>,
}

impl SystemState {
    /// Creates an empty system at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system from pre-built bodies, rejecting any invalid one
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::Body;
    /// use orrery::state::SystemState;
    ///
    /// let system = SystemState::from_bodies(vec![
    ///     Body::star(1000.0, 10.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
    ///     Body::planet(1.0, 2.0, [100.0, 0.0], [0.0, 5.0]).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(system.body_count(), 2);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn from_bodies(bodies: Vec<Body>) -> Result<Self> {
        let state = Self { time: 0.0, bodies };
        state.validate()?;
        Ok(state)
    }

    /// Adds a body and returns its storage index
    pub fn add_body(&mut self, body: Body) -> Result<usize> {
        let index = self.bodies.len();
        body.validate(index)?;
        self.bodies.push(body);
        Ok(index)
    }

    /// Verifies every live body's physical preconditions
    pub fn validate(&self) -> Result<()> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.alive)
            .try_for_each(|(i, b)| b.validate(i))
    }

    /// Returns the number of bodies in storage, including dead ones
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn live_count(&self) -> usize {
        self.live_bodies().count()
    }

    pub fn live_bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.alive)
    }

    /// Drops dead bodies from storage. Indices of surviving bodies shift.
    pub fn prune_dead(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.alive);
        before - self.bodies.len()
    }

    /// Returns the total mass of all live bodies
    pub fn total_mass(&self) -> f64 {
        self.live_bodies().map(|b| b.mass).sum()
    }

    /// Returns the total momentum of all live bodies
    ///
    /// Conserved by gravity and by merges; useful for checking drift.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.live_bodies()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.live_bodies().map(|b| b.kinetic_energy()).sum()
    }

    /// Mass-weighted mean position of live bodies, `None` if none are left
    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted = self
            .live_bodies()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Some(Point2::from(weighted / total))
    }
}
