//! # Dome Primitive
//!
//! A braille dot: a partial sphere swept only up to `flat_ratio` of a right
//! angle and capped with a flat disk.
//!
//! Truncating the latitude sweep would leave the dot lower than requested,
//! so ring heights are stretched by `1 / sin(max_angle)`. The topmost ring
//! is then pinned to exactly `base_z + height`, absorbing rounding drift.
//!
//! ```text
//!        ____cap____
//!      /             \      ring k: r = R·cos(θk)
//!     /               \             z = base + h·sin(θk) / sin(θmax)
//!    /_________________\    θk = θmax · k / rings
//! ```

use config::constants::{DOT_FLAT_RATIO, DOT_RINGS, DOT_SEGMENTS};
use glam::{DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;

use super::outline::circle_points;
use crate::error::{MeshError, MeshResult};
use crate::mesh::TriangleMesh;

/// A flattened dome configuration.
///
/// # Examples
/// ```
/// use plate_mesh::primitives::Dome;
///
/// let dome = Dome::new(0.8, 0.5).expect("valid dome");
/// let profile = dome.ring_profile();
/// assert_eq!(profile.len(), 7);
/// assert_eq!(profile[6].1, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dome {
    radius: f64,
    height: f64,
    segments: u32,
    rings: u32,
    flat_ratio: f64,
}

impl Dome {
    /// Creates a dome with the standard subdivision.
    pub fn new(radius: f64, height: f64) -> MeshResult<Self> {
        Self::with_subdivision(radius, height, DOT_SEGMENTS, DOT_RINGS, DOT_FLAT_RATIO)
    }

    /// Creates a dome with explicit subdivision and flattening.
    pub fn with_subdivision(
        radius: f64,
        height: f64,
        segments: u32,
        rings: u32,
        flat_ratio: f64,
    ) -> MeshResult<Self> {
        if !(radius > 0.0 && height > 0.0) {
            return Err(MeshError::invalid_subdivision(format!(
                "dome radius and height must be positive: r={radius}, h={height}"
            )));
        }
        if segments < 3 || rings < 1 {
            return Err(MeshError::invalid_subdivision(format!(
                "dome needs >= 3 segments and >= 1 ring: segments={segments}, rings={rings}"
            )));
        }
        if !(flat_ratio > 0.0 && flat_ratio <= 1.0) {
            return Err(MeshError::invalid_subdivision(format!(
                "dome flat ratio must be in (0, 1]: {flat_ratio}"
            )));
        }
        Ok(Self {
            radius,
            height,
            segments,
            rings,
            flat_ratio,
        })
    }

    /// Polar angle at which the sweep stops.
    pub fn max_angle(&self) -> f64 {
        FRAC_PI_2 * self.flat_ratio
    }

    /// `(radius, z offset)` of each ring from the base (index 0) to the cap
    /// ring (index `rings`).
    pub fn ring_profile(&self) -> Vec<(f64, f64)> {
        let max_angle = self.max_angle();
        let z_scale = 1.0 / max_angle.sin();
        (0..=self.rings)
            .map(|k| {
                let theta = max_angle * f64::from(k) / f64::from(self.rings);
                let z = if k == self.rings {
                    self.height
                } else {
                    self.height * theta.sin() * z_scale
                };
                (self.radius * theta.cos(), z)
            })
            .collect()
    }

    /// Number of triangles [`Dome::append_to`] emits.
    pub fn triangle_count(&self) -> usize {
        let segments = self.segments as usize;
        2 * segments * self.rings as usize + segments
    }

    /// Appends the dome standing on `base` (center of the base ring).
    pub fn append_to(&self, mesh: &mut TriangleMesh, base: DVec3) {
        let center = base.truncate();
        let ring = |(r, dz): (f64, f64)| -> Vec<DVec3> {
            circle_points(center, r, self.segments)
                .into_iter()
                .map(|p: DVec2| p.extend(base.z + dz))
                .collect()
        };

        let profile = self.ring_profile();
        let mut lower = ring(profile[0]);
        for &level in &profile[1..] {
            let upper = ring(level);
            let n = upper.len();
            for i in 0..n {
                let next = (i + 1) % n;
                mesh.add_triangle(lower[i], lower[next], upper[i]);
                mesh.add_triangle(upper[i], lower[next], upper[next]);
            }
            lower = upper;
        }

        // flat cap over the last ring
        let apex = center.extend(base.z + self.height);
        let n = lower.len();
        for i in 0..n {
            mesh.add_triangle(lower[i], lower[(i + 1) % n], apex);
        }
    }

    /// Builds the dome as a standalone mesh.
    pub fn to_mesh(&self, base: DVec3) -> TriangleMesh {
        let mut mesh = TriangleMesh::with_capacity(self.triangle_count());
        self.append_to(&mut mesh, base);
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(Dome::new(0.0, 0.5).is_err());
        assert!(Dome::new(0.8, -0.5).is_err());
        assert!(Dome::with_subdivision(0.8, 0.5, 2, 6, 0.75).is_err());
        assert!(Dome::with_subdivision(0.8, 0.5, 24, 0, 0.75).is_err());
        assert!(Dome::with_subdivision(0.8, 0.5, 24, 6, 0.0).is_err());
        assert!(Dome::with_subdivision(0.8, 0.5, 24, 6, f64::NAN).is_err());
    }

    #[test]
    fn test_profile_monotonic() {
        let profile = Dome::new(0.8, 0.5).unwrap().ring_profile();
        for pair in profile.windows(2) {
            assert!(pair[1].0 < pair[0].0, "radius must shrink upward");
            assert!(pair[1].1 > pair[0].1, "height must grow upward");
        }
    }

    #[test]
    fn test_profile_endpoints() {
        let dome = Dome::new(0.8, 0.5).unwrap();
        let profile = dome.ring_profile();
        assert_eq!(profile[0], (0.8, 0.0));
        assert_eq!(profile[6].1, 0.5);
        assert_relative_eq!(profile[6].0, 0.8 * dome.max_angle().cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_full_hemisphere_reaches_pole() {
        let dome = Dome::with_subdivision(1.0, 1.0, 12, 4, 1.0).unwrap();
        let profile = dome.ring_profile();
        assert!(profile[4].0.abs() < 1e-12);
        assert_relative_eq!(profile[2].1, (std::f64::consts::FRAC_PI_4).sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_count() {
        let dome = Dome::new(0.8, 0.5).unwrap();
        assert_eq!(dome.triangle_count(), 24 * 6 * 2 + 24);
        assert_eq!(dome.to_mesh(DVec3::ZERO).triangle_count(), 312);
    }

    #[test]
    fn test_cap_normals_point_up() {
        let dome = Dome::new(0.8, 0.5).unwrap();
        let mesh = dome.to_mesh(DVec3::new(5.0, 5.0, 1.0));
        let cap = &mesh.triangles()[mesh.triangle_count() - 24..];
        for tri in cap {
            assert_relative_eq!(tri.normal.z, 1.0, epsilon = 1e-9);
        }
        for tri in mesh.triangles() {
            assert!(tri.normal.z > 0.0);
        }
    }
}
