//! Integration tests for the full step pipeline.
//!
//! These tests drive scenarios the way an external loop would: load, tick,
//! record statistics, and check the physical invariants end to end.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use orrery::history::StatsHistory;
use orrery::{Body, ScenarioConfig, Simulation, SystemState};

const CRASH_COURSE: &str = r#"
simulation:
  gravitational_constant: 1.0
bodies:
  - kind: star
    mass: 1000.0
    radius: 10.0
    position: [0.0, 0.0]
  - kind: planet
    mass: 1.0
    radius: 2.0
    position: [60.0, 0.0]
    velocity: [-3.0, 0.0]
  - kind: planet
    mass: 2.0
    radius: 2.0
    position: [0.0, 200.0]
    velocity: [2.2, 0.0]
"#;

#[test]
fn crash_course_merges_and_conserves() {
    let (simulation, mut state) = ScenarioConfig::from_yaml_str(CRASH_COURSE)
        .unwrap()
        .into_parts()
        .unwrap();
    let mass_before = state.total_mass();
    let momentum_before = state.total_momentum();
    let mut history = StatsHistory::new();
    let mut merges = Vec::new();

    for _ in 0..400 {
        let report = simulation.advance(&mut state, 0.05, 1.0).unwrap();
        history.record(state.time, &report.stats);
        merges.extend(report.merges);
    }

    // The infalling planet hits the star; the distant one keeps orbiting
    assert_eq!(merges.len(), 1);
    assert_eq!((merges[0].survivor, merges[0].absorbed), (0, 1));
    assert_eq!(state.live_count(), 2);
    assert_relative_eq!(state.bodies[0].mass, 1001.0);

    assert_relative_eq!(state.total_mass(), mass_before);
    let drift = (state.total_momentum() - momentum_before).magnitude();
    assert!(drift < 1e-9, "momentum drift {drift:.2e}");

    assert_eq!(history.len(), 400);
    assert_relative_eq!(history.last().unwrap().time, 20.0, epsilon = 1e-9);
}

#[test]
fn random_cluster_collapses_without_losing_mass() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let bodies: Vec<Body> = (0..16)
        .map(|_| {
            Body::planet(
                rng.gen_range(1.0..10.0),
                rng.gen_range(1.0..2.0),
                [rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0)],
                [rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)],
            )
            .unwrap()
        })
        .collect();
    let mut state = SystemState::from_bodies(bodies).unwrap();
    let simulation = Simulation::new(1.0);
    let mass_before = state.total_mass();
    let momentum_before = state.total_momentum();
    let mut live_counts = vec![state.live_count()];

    for _ in 0..2000 {
        let report = simulation.advance(&mut state, 0.01, 1.0).unwrap();
        live_counts.push(report.stats.live_bodies);
    }

    // Bodies only ever disappear, never come back
    assert!(live_counts.windows(2).all(|w| w[1] <= w[0]));
    assert!(state.live_count() >= 1);

    assert_relative_eq!(state.total_mass(), mass_before, max_relative = 1e-12);
    let drift = (state.total_momentum() - momentum_before).magnitude();
    assert!(
        drift <= 1e-9 * momentum_before.magnitude().max(1.0),
        "momentum drift {drift:.2e}"
    );
}

#[test]
fn paused_ticks_do_not_record_new_motion() {
    let (simulation, mut state) = ScenarioConfig::from_yaml_str(CRASH_COURSE)
        .unwrap()
        .into_parts()
        .unwrap();
    simulation.advance(&mut state, 0.05, 1.0).unwrap();
    let snapshot = state.clone();

    let first = simulation.advance(&mut state, 0.05, 0.0).unwrap();
    let second = simulation.advance(&mut state, 0.05, 0.0).unwrap();

    assert_eq!(first.stats, second.stats);
    assert_eq!(state.bodies, snapshot.bodies);
}
