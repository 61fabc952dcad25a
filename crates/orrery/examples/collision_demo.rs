//! Merging example
//!
//! A ring of small bodies on crossing orbits around a heavy star. Bodies that
//! touch merge into the lower-indexed one, conserving mass and momentum.
//!
//! Run with: cargo run --package orrery --example collision_demo

use orrery::{Body, Simulation, SystemState};

fn main() {
    println!("Orrery Collision Demo: crossing embryos\n");
    println!("{}", "=".repeat(60));

    let mut bodies = vec![Body::star(1000.0, 5.0, [0.0, 0.0], [0.0, 0.0]).unwrap()];

    println!("\nInitial system:");
    for i in 0..8 {
        let a = 90.0 + (i as f64) * 2.5;
        let boost = 1.02 + (i as f64) * 0.01;
        let angle = (i as f64) * 0.15;

        let v = (1000.0 / a).sqrt() * boost;
        let position = [a * angle.cos(), a * angle.sin()];
        let velocity = [-v * angle.sin(), v * angle.cos()];
        bodies.push(Body::planet(0.5, 1.5, position, velocity).unwrap());

        println!(
            "  Embryo {}: r={:.1}, boost={:.2}, pos=({:.2}, {:.2})",
            i + 1,
            a,
            boost,
            position[0],
            position[1]
        );
    }

    let mut state = SystemState::from_bodies(bodies).unwrap();
    let simulation = Simulation::new(1.0);
    let mass_before = state.total_mass();
    let momentum_before = state.total_momentum();

    let delta = 0.01;
    let steps = 20_000;
    println!("\nTimestep: {delta}, steps: {steps}");
    println!("\n{}", "=".repeat(60));

    let mut merge_count = 0;
    for _ in 0..steps {
        let report = simulation.advance(&mut state, delta, 1.0).unwrap();
        for merge in &report.merges {
            println!(
                "t={:8.2}: body {} absorbed body {}, mass now {:.2}",
                state.time, merge.survivor, merge.absorbed, merge.mass
            );
        }
        merge_count += report.merges.len();
    }

    println!("{}", "=".repeat(60));
    println!("Final statistics:");
    println!("  Live bodies: {}", state.live_count());
    println!("  Merges: {merge_count}");
    println!(
        "  Mass: {:.6} -> {:.6}",
        mass_before,
        state.total_mass()
    );
    println!(
        "  Momentum drift: {:.3e}",
        (state.total_momentum() - momentum_before).magnitude()
    );

    for (i, body) in state.bodies.iter().enumerate().filter(|(_, b)| b.is_alive()) {
        println!(
            "  {} {}: mass={:.2}, r={:.2}, v={:.3}",
            body.kind.label(),
            i,
            body.mass,
            body.orbital_radius(),
            body.speed()
        );
    }
}
