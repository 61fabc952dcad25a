use nalgebra::Point2;

use crate::body::{BodyKind, DEFAULT_RADIUS};
use crate::collisions::MergePolicy;
use crate::config::{BodyConfig, ScenarioConfig, SimulationConfig};
use crate::error::OrreryError;
use crate::forces::GRAVITATIONAL_CONSTANT;
use crate::integrator::IntegratorKind;
use crate::monitor::{Aggregate, InterestRule};

const TWO_BODY: &str = r#"
simulation:
  gravitational_constant: 1.0
  merge_policy: center_of_mass
  interest: interacting

bodies:
  - kind: star
    mass: 1000.0
    radius: 10.0
    color: red
    position: [0.0, 0.0]
  - kind: planet
    mass: 1.0
    position: [100.0, 0.0]
    velocity: [0.0, 5.0]
"#;

#[test]
fn test_parse_two_body_scenario() {
    let scenario = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();

    assert_eq!(scenario.simulation.gravitational_constant, 1.0);
    assert_eq!(scenario.simulation.merge_policy, MergePolicy::CenterOfMass);
    assert_eq!(scenario.simulation.interest, InterestRule::Interacting);
    assert_eq!(scenario.simulation.integrator, IntegratorKind::SymplecticEuler);
    assert_eq!(scenario.simulation.aggregate, Aggregate::RootSumSquares);
    assert_eq!(scenario.bodies.len(), 2);
    assert_eq!(scenario.bodies[0].kind, BodyKind::Star);
    assert_eq!(scenario.bodies[1].velocity, [0.0, 5.0]);
}

#[test]
fn test_defaults_fill_missing_fields() {
    let scenario = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();
    let state = scenario.build_state().unwrap();

    let star = &state.bodies[0];
    let planet = &state.bodies[1];
    assert_eq!(star.color, "red");
    assert_eq!(star.velocity.magnitude(), 0.0);
    assert_eq!(planet.radius, DEFAULT_RADIUS);
    assert_eq!(planet.color, "white");
    assert_eq!(planet.position, Point2::new(100.0, 0.0));
}

#[test]
fn test_missing_simulation_section_uses_defaults() {
    let yaml = "bodies:\n  - kind: planet\n    mass: 2.0\n    position: [1.0, 1.0]\n";
    let scenario = ScenarioConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(scenario.simulation, SimulationConfig::default());
    assert_eq!(
        scenario.simulation.gravitational_constant,
        GRAVITATIONAL_CONSTANT
    );
}

#[test]
fn test_invalid_body_rejects_scenario() {
    let yaml = r#"
bodies:
  - kind: star
    mass: 10.0
    position: [0.0, 0.0]
  - kind: planet
    mass: -1.0
    position: [5.0, 0.0]
"#;
    let scenario = ScenarioConfig::from_yaml_str(yaml).unwrap();

    match scenario.build_state() {
        Err(OrreryError::InvalidBodyState { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("mass"));
        }
        other => panic!("expected InvalidBodyState, got {other:?}"),
    }
}

#[test]
fn test_zero_radius_rejects_scenario() {
    let yaml = "bodies:\n  - kind: planet\n    mass: 1.0\n    radius: 0.0\n    position: [0.0, 0.0]\n";
    let scenario = ScenarioConfig::from_yaml_str(yaml).unwrap();

    assert!(matches!(
        scenario.into_parts(),
        Err(OrreryError::InvalidBodyState { index: 0, .. })
    ));
}

#[test]
fn test_unknown_kind_is_yaml_error() {
    let yaml = "bodies:\n  - kind: comet\n    mass: 1.0\n    position: [0.0, 0.0]\n";

    assert!(matches!(
        ScenarioConfig::from_yaml_str(yaml),
        Err(OrreryError::Yaml(_))
    ));
}

#[test]
fn test_bad_gravitational_constant_rejected() {
    let yaml = "simulation:\n  gravitational_constant: -1.0\nbodies: []\n";
    let scenario = ScenarioConfig::from_yaml_str(yaml).unwrap();

    assert!(matches!(
        scenario.into_parts(),
        Err(OrreryError::InvalidParameter(_))
    ));
}

#[test]
fn test_snapshot_keeps_live_bodies_only() {
    let scenario = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();
    let mut state = scenario.build_state().unwrap();
    state.bodies[1].alive = false;

    let snapshot = ScenarioConfig::snapshot(scenario.simulation.clone(), &state);

    assert_eq!(snapshot.bodies.len(), 1);
    assert_eq!(snapshot.bodies[0], BodyConfig::from_body(&state.bodies[0]));
}

#[test]
fn test_snapshot_reloads_to_same_state() {
    let scenario = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();
    let state = scenario.build_state().unwrap();

    let yaml = ScenarioConfig::snapshot(scenario.simulation.clone(), &state)
        .to_yaml_string()
        .unwrap();
    let reloaded = ScenarioConfig::from_yaml_str(&yaml)
        .unwrap()
        .build_state()
        .unwrap();

    assert_eq!(reloaded.bodies, state.bodies);
}

#[test]
fn test_from_path_reads_yaml_and_text() {
    let dir = std::env::temp_dir().join(format!("orrery-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml_path = dir.join("two_body.yaml");
    std::fs::write(&yaml_path, TWO_BODY).unwrap();
    let text_path = dir.join("two_body.txt");
    std::fs::write(&text_path, "Star 10 red 1000 0 0 0 0\nPlanet 2 blue 1 100 0 0 5\n").unwrap();

    let from_yaml = ScenarioConfig::from_path(&yaml_path).unwrap();
    let from_text = ScenarioConfig::from_path(&text_path).unwrap();

    assert_eq!(from_yaml.bodies.len(), 2);
    assert_eq!(from_text.bodies.len(), 2);
    assert_eq!(from_text.simulation, SimulationConfig::default());
    assert_eq!(from_text.bodies[1].color.as_deref(), Some("blue"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let result = ScenarioConfig::from_path("/definitely/not/here.yaml");

    assert!(matches!(result, Err(OrreryError::Io(_))));
}
