//! Line-oriented body list format
//!
//! One body per line:
//!
//! ```text
//! Star <radius> <color> <mass> <x> <y> <vx> <vy>
//! Planet <radius> <color> <mass> <x> <y> <vx> <vy>
//! ```
//!
//! The kind is case-insensitive. Blank lines and lines starting with `#`
//! are skipped.

use crate::body::{Body, BodyKind};
use crate::config::BodyConfig;
use crate::error::{OrreryError, Result};

const FIELD_COUNT: usize = 8;

fn parse_kind(token: &str) -> Option<BodyKind> {
    match token.to_ascii_lowercase().as_str() {
        "star" => Some(BodyKind::Star),
        "planet" => Some(BodyKind::Planet),
        _ => None,
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<BodyConfig> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let parse_err = |reason: String| OrreryError::Parse {
        line: line_no,
        reason,
    };

    if fields.len() != FIELD_COUNT {
        return Err(parse_err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let kind =
        parse_kind(fields[0]).ok_or_else(|| parse_err(format!("unknown kind '{}'", fields[0])))?;
    let number = |idx: usize, name: &str| -> Result<f64> {
        fields[idx]
            .parse::<f64>()
            .map_err(|e| parse_err(format!("{name} '{}': {e}", fields[idx])))
    };

    Ok(BodyConfig {
        kind,
        radius: Some(number(1, "radius")?),
        color: Some(fields[2].to_string()),
        mass: number(3, "mass")?,
        position: [number(4, "x")?, number(5, "y")?],
        velocity: [number(6, "vx")?, number(7, "vy")?],
    })
}

/// Parse every body line in `input`; line numbers in errors are 1-based
///
/// # Examples
///
/// ```
/// use orrery::body::BodyKind;
/// use orrery::text::parse_bodies;
///
/// let bodies = parse_bodies("# sun and earth\nStar 10 red 1000 0 0 0 0\nplanet 2 blue 1 100 0 0 5\n").unwrap();
///
/// assert_eq!(bodies.len(), 2);
/// assert_eq!(bodies[1].kind, BodyKind::Planet);
/// assert_eq!(bodies[1].velocity, [0.0, 5.0]);
/// ```
pub fn parse_bodies(input: &str) -> Result<Vec<BodyConfig>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

/// Format live bodies in the same line format
pub fn write_bodies<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> String {
    bodies
        .into_iter()
        .filter(|b| b.alive)
        .map(|b| {
            format!(
                "{} {} {} {} {} {} {} {}\n",
                b.kind.label(),
                b.radius,
                b.color,
                b.mass,
                b.position.x,
                b.position.y,
                b.velocity.x,
                b.velocity.y
            )
        })
        .collect()
}
