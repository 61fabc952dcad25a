//! Time series of aggregate statistics

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::monitor::SystemStats;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSample {
    pub time: f64,
    pub aggregate_speed: f64,
    pub aggregate_distance: f64,
}

/// Samples recorded while the system still has interest
#[derive(Debug, Clone, Default)]
pub struct StatsHistory {
    samples: Vec<StatsSample>,
}

impl StatsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample at `time`; returns `false` and records nothing once
    /// `stats` reports no interest
    pub fn record(&mut self, time: f64, stats: &SystemStats) -> bool {
        if !stats.has_interest {
            return false;
        }
        self.samples.push(StatsSample {
            time,
            aggregate_speed: stats.aggregate_speed,
            aggregate_distance: stats.aggregate_distance,
        });
        true
    }

    pub fn samples(&self) -> &[StatsSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&StatsSample> {
        self.samples.last()
    }

    /// Writes `time,aggregate_speed,aggregate_distance` rows with a header
    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "time,aggregate_speed,aggregate_distance")?;
        for s in &self.samples {
            writeln!(
                out,
                "{},{},{}",
                s.time, s.aggregate_speed, s.aggregate_distance
            )?;
        }
        Ok(())
    }
}
