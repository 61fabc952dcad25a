//! Aggregate statistics over the live body set

use crate::body::Body;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// How per-body vectors are folded into one scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    /// √(Σx² + Σy²) over every body's vector components
    #[default]
    RootSumSquares,
    /// Σ|v| over every body's vector
    SumOfMagnitudes,
}

impl Aggregate {
    pub fn fold<I>(self, vectors: I) -> f64
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        match self {
            Aggregate::RootSumSquares => vectors
                .into_iter()
                .map(|v| v.magnitude_squared())
                .sum::<f64>()
                .sqrt(),
            Aggregate::SumOfMagnitudes => vectors.into_iter().map(|v| v.magnitude()).sum(),
        }
    }
}

/// When the system is still worth recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestRule {
    /// At least one live body remains
    #[default]
    AnyLive,
    /// At least two live bodies remain, so they can still interact
    Interacting,
}

impl InterestRule {
    pub fn min_live(self) -> usize {
        match self {
            InterestRule::AnyLive => 1,
            InterestRule::Interacting => 2,
        }
    }
}

/// Snapshot of aggregate quantities after a step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemStats {
    pub aggregate_speed: f64,
    pub aggregate_distance: f64,
    pub live_bodies: usize,
    pub has_interest: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMonitor {
    pub aggregate: Aggregate,
    pub interest: InterestRule,
}

impl SystemMonitor {
    pub fn new(aggregate: Aggregate, interest: InterestRule) -> Self {
        Self {
            aggregate,
            interest,
        }
    }

    pub fn aggregate_speed(&self, bodies: &[Body]) -> f64 {
        self.aggregate
            .fold(bodies.iter().filter(|b| b.alive).map(|b| b.velocity))
    }

    /// Aggregate of live positions measured from the origin
    pub fn aggregate_distance(&self, bodies: &[Body]) -> f64 {
        self.aggregate
            .fold(bodies.iter().filter(|b| b.alive).map(|b| b.position.coords))
    }

    pub fn system_has_interest(&self, bodies: &[Body]) -> bool {
        bodies.iter().filter(|b| b.alive).count() >= self.interest.min_live()
    }

    /// Evaluate every statistic at once
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::Body;
    /// use orrery::monitor::SystemMonitor;
    ///
    /// let bodies = vec![
    ///     Body::planet(1.0, 1.0, [3.0, 0.0], [0.0, 3.0]).unwrap(),
    ///     Body::planet(1.0, 1.0, [0.0, 4.0], [4.0, 0.0]).unwrap(),
    /// ];
    /// let stats = SystemMonitor::default().evaluate(&bodies);
    ///
    /// assert_eq!(stats.aggregate_speed, 5.0);
    /// assert_eq!(stats.aggregate_distance, 5.0);
    /// assert!(stats.has_interest);
    /// ```
    pub fn evaluate(&self, bodies: &[Body]) -> SystemStats {
        SystemStats {
            aggregate_speed: self.aggregate_speed(bodies),
            aggregate_distance: self.aggregate_distance(bodies),
            live_bodies: bodies.iter().filter(|b| b.alive).count(),
            has_interest: self.system_has_interest(bodies),
        }
    }
}
