//! # Slab Primitive
//!
//! Rounded-rectangle prism with a circular hole, stitched as matched strips
//! between the outer contour and the hole contour.

use glam::DVec2;
use std::f64::consts::TAU;

use super::outline::{project_to_circle, rounded_rect_outline};
use crate::mesh::TriangleMesh;

/// Parameters of a holed slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoledSlab {
    /// Outer width along X.
    pub width: f64,
    /// Outer height along Y.
    pub height: f64,
    /// Thickness along Z.
    pub thickness: f64,
    /// Radius of the four rounded corners.
    pub corner_radius: f64,
    /// Angular steps per corner.
    pub corner_segments: u32,
    /// Hole center in plate coordinates.
    pub hole_center: DVec2,
    /// Hole radius.
    pub hole_radius: f64,
    /// Minimum number of steps around the hole.
    pub hole_segments: u32,
}

impl HoledSlab {
    /// Outer and hole contours, point for point.
    ///
    /// Seen from the hole center, a long straight edge of the outline spans
    /// a wide angle, and projecting only its two endpoints would flatten the
    /// hole into a chord. Such edges are split until no step exceeds
    /// `TAU / hole_segments`, so the hole stays round.
    pub fn contours(&self) -> (Vec<DVec2>, Vec<DVec2>) {
        let outline = rounded_rect_outline(
            self.width,
            self.height,
            self.corner_radius,
            self.corner_segments,
        );
        let max_step = TAU / f64::from(self.hole_segments.max(3));
        let outer = densify_around(&outline, self.hole_center, max_step);
        let hole = project_to_circle(&outer, self.hole_center, self.hole_radius);
        (outer, hole)
    }

    /// Number of triangles [`HoledSlab::append_to`] emits.
    pub fn triangle_count(&self) -> usize {
        // top, bottom, outer wall and hole wall: two triangles each per point
        8 * self.contours().0.len()
    }

    /// Appends the slab to `mesh`.
    ///
    /// For every contour step the top and bottom faces get one quad of the
    /// ring between outer contour and hole contour, and each side wall gets
    /// one quad.
    pub fn append_to(&self, mesh: &mut TriangleMesh) {
        let (outer, hole) = self.contours();
        let top = self.thickness;
        let n = outer.len();

        for i in 0..n {
            let next = (i + 1) % n;
            let (o1, o2) = (outer[i], outer[next]);
            let (i1, i2) = (hole[i], hole[next]);

            // top face (+Z)
            mesh.add_triangle(o1.extend(top), o2.extend(top), i1.extend(top));
            mesh.add_triangle(i1.extend(top), o2.extend(top), i2.extend(top));

            // bottom face (-Z)
            mesh.add_triangle(o1.extend(0.0), i1.extend(0.0), o2.extend(0.0));
            mesh.add_triangle(i1.extend(0.0), i2.extend(0.0), o2.extend(0.0));

            // outer wall, facing away from the plate
            mesh.add_triangle(o1.extend(0.0), o2.extend(0.0), o2.extend(top));
            mesh.add_triangle(o1.extend(0.0), o2.extend(top), o1.extend(top));

            // hole wall, facing the hole axis
            mesh.add_triangle(i1.extend(0.0), i1.extend(top), i2.extend(0.0));
            mesh.add_triangle(i2.extend(0.0), i1.extend(top), i2.extend(top));
        }
    }
}

/// Splits closed-polygon edges whose angle seen from `center` exceeds
/// `max_step`, inserting evenly spaced points along the edge.
fn densify_around(points: &[DVec2], center: DVec2, max_step: f64) -> Vec<DVec2> {
    let n = points.len();
    let mut dense = Vec::with_capacity(n);
    for i in 0..n {
        let (a, b) = (points[i], points[(i + 1) % n]);
        dense.push(a);
        let span = (a - center).angle_between(b - center).abs();
        let pieces = (span / max_step).ceil() as usize;
        for k in 1..pieces {
            dense.push(a.lerp(b, k as f64 / pieces as f64));
        }
    }
    dense
}
