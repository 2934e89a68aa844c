//! Two-level sphere-set exporter.
//!
//! Reduces an arbitrary flat sphere collection to one enclosing sphere plus
//! its valid members, written as a two-level file:
//!
//! ```text
//! 2 <valid_count>
//! cx cy cz r          (enclosing sphere, scaled)
//! cx cy cz r          (one line per valid input sphere, scaled)
//! ```
//!
//! Not tree-structured; the only structure is the implied root/children
//! split of the header.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Vec3;

use crate::error::ExportError;
use crate::sphere::Sphere;

/// How the enclosing sphere's radius is computed.
///
/// The historical exporter compared `distance + child radius` against the
/// running maximum but then stored the child radius itself, so neither rule
/// reproduces its output verbatim; `CenterSpread` is the behavior the file
/// format has been documented with, `Conservative` is the corrected bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusRule {
  /// Max distance from the mean center to each valid sphere's center. The
  /// child's own radius is not added, so the result may not enclose the
  /// children.
  #[default]
  CenterSpread,
  /// Max of distance plus the child's radius: a true enclosing bound.
  Conservative,
}

/// Write `spheres` to `path` as a two-level sphere set.
///
/// Spheres with `radius <= 0` are excluded from the mean center, the radius
/// computation and the output. Lengths are multiplied by `scale`. Fails with
/// [`ExportError::NoValidSpheres`] when no sphere is valid, rather than
/// dividing by zero.
pub fn save_spheres(
  spheres: &[Sphere],
  path: &Path,
  scale: f32,
  rule: RadiusRule,
) -> Result<(), ExportError> {
  let valid: Vec<&Sphere> = spheres.iter().filter(|s| s.is_valid()).collect();
  if valid.is_empty() {
    return Err(ExportError::NoValidSpheres);
  }

  let center = valid.iter().fold(Vec3::ZERO, |acc, s| acc + s.center) / valid.len() as f32;
  let radius = valid
    .iter()
    .map(|s| match rule {
      RadiusRule::CenterSpread => center.distance(s.center),
      RadiusRule::Conservative => center.distance(s.center) + s.radius,
    })
    .fold(0.0f32, f32::max);

  tracing::debug!(
    path = %path.display(),
    count = valid.len(),
    "saving two-level sphere set"
  );

  let mut w = BufWriter::new(File::create(path)?);
  writeln!(w, "2 {}", valid.len())?;
  writeln!(
    w,
    "{} {} {} {}",
    center.x * scale,
    center.y * scale,
    center.z * scale,
    radius * scale
  )?;
  for s in &valid {
    writeln!(
      w,
      "{} {} {} {}",
      s.center.x * scale,
      s.center.y * scale,
      s.center.z * scale,
      s.radius * scale
    )?;
  }
  w.flush()?;
  Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
