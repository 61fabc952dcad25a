//! Collision detection and resolution for N-body systems
//!
//! Overlapping bodies are detected by radius contact and resolved through
//! perfectly inelastic, momentum-conserving mergers.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use detection::{CollisionEvent, contact_distance, detect_collisions, is_colliding};
pub use resolution::{MergeEvent, MergePolicy, merge_into, resolve_collisions};
