use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use orrery::history::StatsHistory;
use orrery::{ScenarioConfig, text};

const MIN_SPEED: f64 = 1.0;
const MAX_SPEED: f64 = 5000.0;

/// Tick a scenario headlessly and record aggregate statistics
#[derive(Parser, Debug)]
#[command(name = "orrery", version)]
struct Args {
    /// Scenario file, YAML or the legacy `.txt` body list
    #[arg(short, long)]
    scenario: PathBuf,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: usize,

    /// Wall-clock seconds per tick
    #[arg(short, long, default_value_t = 0.01)]
    delta: f64,

    /// Speed multiplier, clamped to 1..=5000
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Write the final live bodies here (`.txt` for the legacy format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the recorded statistics here as CSV
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn clamp_speed(speed: f64) -> f64 {
    let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
    if clamped != speed {
        warn!("speed {speed} clamped to {clamped}");
    }
    clamped
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = ScenarioConfig::from_path(&args.scenario)
        .with_context(|| format!("failed to load {}", args.scenario.display()))?;
    let sim_config = scenario.simulation.clone();
    let (simulation, mut state) = scenario.into_parts()?;
    let speed = clamp_speed(args.speed);

    info!(
        "running {} ticks of {} bodies with {} (dt {})",
        args.ticks,
        state.live_count(),
        sim_config.integrator.build().name(),
        args.delta * speed
    );

    let energy_before = simulation.total_energy(&state);
    let mut history = StatsHistory::new();
    let mut merges = 0;
    for tick in 0..args.ticks {
        let report = simulation
            .advance(&mut state, args.delta, speed)
            .with_context(|| format!("tick {tick} failed"))?;
        merges += report.merges.len();
        if !history.record(state.time, &report.stats) {
            info!("system lost interest at t={:.3}, stopping", state.time);
            break;
        }
    }

    let energy_after = simulation.total_energy(&state);
    info!(
        "t={:.3} live={} merges={} energy {:.6e} -> {:.6e}",
        state.time,
        state.live_count(),
        merges,
        energy_before,
        energy_after
    );

    if let Some(path) = &args.output {
        let is_text = path.extension().is_some_and(|ext| ext == "txt");
        let contents = if is_text {
            text::write_bodies(&state.bodies)
        } else {
            ScenarioConfig::snapshot(sim_config, &state).to_yaml_string()?
        };
        fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("final state written to {}", path.display());
    }

    if let Some(path) = &args.stats {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        history.write_csv(BufWriter::new(file))?;
        info!("{} samples written to {}", history.len(), path.display());
    }

    Ok(())
}
