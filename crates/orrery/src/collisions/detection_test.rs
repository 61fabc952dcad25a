use crate::body::Body;
use crate::collisions::detection::*;

fn disk(radius: f64, x: f64, y: f64) -> Body {
    Body::planet(1.0, radius, [x, y], [0.0, 0.0]).unwrap()
}

#[test]
fn test_contact_distance_is_radius_sum() {
    assert_eq!(contact_distance(&disk(1.5, 0.0, 0.0), &disk(2.5, 9.0, 9.0)), 4.0);
}

#[test]
fn test_boundary_is_inclusive() {
    let a = disk(1.0, 0.0, 0.0);
    let b = disk(2.0, 3.0, 0.0);

    assert!(is_colliding(&a, &b));
    assert!(is_colliding(&b, &a));
}

#[test]
fn test_just_beyond_contact_is_not_colliding() {
    let a = disk(1.0, 0.0, 0.0);
    let b = disk(2.0, 3.0 + 1e-9, 0.0);

    assert!(!is_colliding(&a, &b));
}

#[test]
fn test_no_collisions_when_separated() {
    let bodies = vec![
        disk(10.0, 0.0, 0.0),
        disk(2.0, 100.0, 0.0),
        disk(2.0, 0.0, 50.0),
    ];

    assert!(detect_collisions(&bodies).is_empty());
}

#[test]
fn test_detects_overlapping_pair_in_order() {
    let bodies = vec![
        disk(1.0, 0.0, 0.0),
        disk(1.0, 50.0, 0.0),
        disk(1.0, 1.5, 0.0),
    ];

    let events = detect_collisions(&bodies);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].first, 0);
    assert_eq!(events[0].second, 2);
    assert_eq!(events[0].separation, 1.5);
    assert_eq!(events[0].contact_distance, 2.0);
}

#[test]
fn test_dead_bodies_are_ignored() {
    let mut bodies = vec![disk(1.0, 0.0, 0.0), disk(1.0, 0.5, 0.0)];
    bodies[1].alive = false;

    assert!(detect_collisions(&bodies).is_empty());
}

#[test]
fn test_cluster_reports_every_pair() {
    let bodies = vec![
        disk(1.0, 0.0, 0.0),
        disk(1.0, 0.5, 0.0),
        disk(1.0, 0.0, 0.5),
    ];

    let events = detect_collisions(&bodies);
    let pairs: Vec<(usize, usize)> = events.iter().map(|e| (e.first, e.second)).collect();

    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}
