//! Sphere - bounding-sphere value type stored at each tree node.
//!
//! Pure data, no behavior beyond validity checks. The construction algorithms
//! that populate a tree write these fields directly.

use glam::Vec3;

/// Occupancy value meaning "unset". The metric itself is defined by the
/// construction algorithm that fills the tree; the container only stores it.
pub const UNSET_OCCUPANCY: f32 = -1.0;

/// Secondary, typically tighter, inner bounding sphere stored alongside a
/// node's primary sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuxSphere {
  /// Center of the inner sphere.
  pub center: Vec3,
  /// Radius of the inner sphere.
  pub radius: f32,
  /// Error reduction gained by using the inner sphere instead of the
  /// primary one. Dimensionless, never scaled by file codecs.
  pub err_dec: f32,
}

/// A bounding sphere node.
///
/// A radius of zero or less marks an unused slot; such spheres are skipped by
/// level extraction and by the exporter. The auxiliary sphere is optional -
/// `aux` being `Some` replaces the historical `hasAux` flag, so the auxiliary
/// fields cannot be read without checking for presence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
  /// Sphere center.
  pub center: Vec3,
  /// Sphere radius; `<= 0.0` means unused/invalid slot.
  pub radius: f32,
  /// Coverage metric, `-1.0` = unset. See [`UNSET_OCCUPANCY`].
  pub occupancy: f32,
  /// Optional auxiliary inner sphere.
  pub aux: Option<AuxSphere>,
}

impl Sphere {
  /// The sentinel empty sphere written by tree initialization and growth:
  /// zero center, negative radius, occupancy 1, no auxiliary sphere.
  pub const EMPTY: Sphere = Sphere {
    center: Vec3::ZERO,
    radius: -1.0,
    occupancy: 1.0,
    aux: None,
  };

  /// Create a sphere with the given center and radius, occupancy unset.
  pub fn new(center: Vec3, radius: f32) -> Self {
    Self {
      center,
      radius,
      occupancy: UNSET_OCCUPANCY,
      aux: None,
    }
  }

  /// Whether this slot holds a real sphere (`radius > 0.0`).
  #[inline]
  pub fn is_valid(&self) -> bool {
    self.radius > 0.0
  }
}

impl Default for Sphere {
  fn default() -> Self {
    Sphere::EMPTY
  }
}

#[cfg(test)]
#[path = "sphere_test.rs"]
mod sphere_test;
