//! # Tube Primitive
//!
//! Annular ring standing on the slab around the mounting hole.

use glam::DVec2;

use super::outline::circle_points;
use crate::mesh::TriangleMesh;

/// Parameters of an annular tube standing on a surface.
///
/// The tube has a top annulus plus inner and outer walls. Its underside is
/// left open because it rests on the slab's top face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    /// Axis position in plate coordinates.
    pub center: DVec2,
    /// Z of the surface the tube stands on.
    pub base_z: f64,
    /// Inner radius.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Height above `base_z`.
    pub height: f64,
    /// Angular steps.
    pub segments: u32,
}

impl Tube {
    /// Number of triangles [`Tube::append_to`] emits.
    pub fn triangle_count(&self) -> usize {
        6 * self.segments as usize
    }

    /// Appends the tube to `mesh` as radial strips.
    pub fn append_to(&self, mesh: &mut TriangleMesh) {
        let inner = circle_points(self.center, self.inner_radius, self.segments);
        let outer = circle_points(self.center, self.outer_radius, self.segments);
        let (bottom, top) = (self.base_z, self.base_z + self.height);
        let n = inner.len();

        for i in 0..n {
            let next = (i + 1) % n;
            let (i1, i2) = (inner[i], inner[next]);
            let (o1, o2) = (outer[i], outer[next]);

            // top annulus
            mesh.add_triangle(o1.extend(top), o2.extend(top), i1.extend(top));
            mesh.add_triangle(i1.extend(top), o2.extend(top), i2.extend(top));

            // outer wall
            mesh.add_triangle(o1.extend(bottom), o2.extend(bottom), o2.extend(top));
            mesh.add_triangle(o1.extend(bottom), o2.extend(top), o1.extend(top));

            // inner wall
            mesh.add_triangle(i1.extend(bottom), i1.extend(top), i2.extend(bottom));
            mesh.add_triangle(i2.extend(bottom), i1.extend(top), i2.extend(top));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn tube() -> Tube {
        Tube {
            center: DVec2::new(8.0, 10.0),
            base_z: 1.0,
            inner_radius: 2.5,
            outer_radius: 4.0,
            height: 0.5,
            segments: 32,
        }
    }

    fn mesh_of(tube: &Tube) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        tube.append_to(&mut mesh);
        mesh
    }

    #[test]
    fn test_triangle_count() {
        assert_eq!(mesh_of(&tube()).triangle_count(), 192);
    }

    #[test]
    fn test_height_range() {
        let (min, max) = mesh_of(&tube()).bounding_box();
        assert_abs_diff_eq!(min.z, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(max.z, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(max.x, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_walls_face_outward_from_material() {
        let t = tube();
        let mesh = mesh_of(&t);
        for tri in mesh.triangles() {
            if tri.normal.z.abs() > 0.5 {
                assert!(tri.normal.z > 0.0);
                continue;
            }
            let centroid = (tri.vertices[0] + tri.vertices[1] + tri.vertices[2]) / 3.0;
            let radial = (centroid.truncate() - t.center).normalize();
            let dist = (centroid.truncate() - t.center).length();
            let facing = tri.normal.truncate().dot(radial);
            if dist > 3.25 {
                assert!(facing > 0.0, "outer wall faces inward");
            } else {
                assert!(facing < 0.0, "inner wall faces away from the axis");
            }
        }
    }
}
