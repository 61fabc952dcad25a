use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, Result};

/// Radius given to bodies whose configuration omits one
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Kind of a body. Physics treats both kinds identically; the tag only
/// selects display defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    pub fn default_color(self) -> &'static str {
        match self {
            BodyKind::Star => "yellow",
            BodyKind::Planet => "white",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub mass: f64,
    pub radius: f64, // collision and display radius, independent of mass
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    /// Net gravitational force from the last force evaluation
    pub force: Vector2<f64>,
    pub color: String,
    pub alive: bool,
}

impl Body {
    /// Creates a live body with zero force and the kind's default color
    ///
    /// Fails with [`OrreryError::InvalidBody`] when mass or radius is not a
    /// positive finite number, or when position/velocity are not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::{Body, BodyKind};
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let sun = Body::new(BodyKind::Star, 1000.0, 10.0, Point2::origin(), Vector2::zeros()).unwrap();
    /// assert!(sun.is_alive());
    /// assert_eq!(sun.color, "yellow");
    ///
    /// assert!(Body::new(BodyKind::Planet, 0.0, 1.0, Point2::origin(), Vector2::zeros()).is_err());
    /// ```
    pub fn new(
        kind: BodyKind,
        mass: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<Self> {
        let body = Body {
            kind,
            mass,
            radius,
            position,
            velocity,
            force: Vector2::zeros(),
            color: kind.default_color().to_string(),
            alive: true,
        };
        match body.defect() {
            Some(reason) => Err(OrreryError::InvalidBody(reason)),
            None => Ok(body),
        }
    }

    /// Shorthand for a star at `position` with `velocity` given as arrays
    pub fn star(mass: f64, radius: f64, position: [f64; 2], velocity: [f64; 2]) -> Result<Self> {
        Self::new(
            BodyKind::Star,
            mass,
            radius,
            Point2::new(position[0], position[1]),
            Vector2::new(velocity[0], velocity[1]),
        )
    }

    /// Shorthand for a planet at `position` with `velocity` given as arrays
    pub fn planet(mass: f64, radius: f64, position: [f64; 2], velocity: [f64; 2]) -> Result<Self> {
        Self::new(
            BodyKind::Planet,
            mass,
            radius,
            Point2::new(position[0], position[1]),
            Vector2::new(velocity[0], velocity[1]),
        )
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Describes the first physical precondition this body violates, if any
    pub fn defect(&self) -> Option<String> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Some(format!("mass must be positive and finite, got {}", self.mass));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Some(format!(
                "radius must be positive and finite, got {}",
                self.radius
            ));
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Some(format!("position is not finite: {}", self.position));
        }
        if !(self.velocity.x.is_finite() && self.velocity.y.is_finite()) {
            return Some(format!("velocity is not finite: {}", self.velocity));
        }
        None
    }

    /// Checks the body as the `index`-th member of a body set
    pub fn validate(&self, index: usize) -> Result<()> {
        match self.defect() {
            Some(reason) => Err(OrreryError::InvalidBodyState { index, reason }),
            None => Ok(()),
        }
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Distance from the coordinate origin
    pub fn orbital_radius(&self) -> f64 {
        self.position.coords.magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Acceleration implied by the currently accumulated force
    pub fn acceleration(&self) -> Vector2<f64> {
        self.force / self.mass
    }
}

/// Borrows two distinct bodies mutably, `i < j`
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
