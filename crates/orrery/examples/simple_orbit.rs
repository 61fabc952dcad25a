//! Single planet orbit
//!
//! Runs one period of a circular orbit and compares symplectic and explicit
//! Euler energy drift.
//!
//! Run with: cargo run --package orrery --example simple_orbit

use orrery::integrator::Euler;
use orrery::{Body, Simulation, SystemState};

fn circular_system() -> SystemState {
    SystemState::from_bodies(vec![
        Body::star(1000.0, 10.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
        Body::planet(1e-3, 1.0, [100.0, 0.0], [0.0, 1000.0_f64.sqrt() / 10.0]).unwrap(),
    ])
    .unwrap()
}

fn main() {
    let period = 2.0 * std::f64::consts::PI * 100.0 / (1000.0_f64.sqrt() / 10.0);
    let delta = 0.05;
    let steps = (period / delta) as usize;

    for (label, simulation) in [
        ("symplectic Euler", Simulation::new(1.0)),
        ("explicit Euler", Simulation::new(1.0).with_integrator(Euler)),
    ] {
        let mut state = circular_system();
        let e0 = simulation.total_energy(&state);
        for _ in 0..steps {
            simulation.advance(&mut state, delta, 1.0).unwrap();
        }
        let e1 = simulation.total_energy(&state);
        let planet = &state.bodies[1];

        println!("{label}:");
        println!(
            "  after t={:.1}: pos=({:.3}, {:.3}), r={:.3}",
            state.time,
            planet.position.x,
            planet.position.y,
            planet.orbital_radius()
        );
        println!("  relative energy drift: {:.3e}\n", ((e1 - e0) / e0).abs());
    }
}
