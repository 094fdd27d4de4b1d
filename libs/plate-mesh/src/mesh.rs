//! # Mesh Data Structure
//!
//! Triangle soup in plate-local millimeter coordinates: origin at the
//! plate's bottom-left corner, Z = 0 on the underside.

use glam::DVec3;

/// One facet: a normal plus three vertices in emission order.
///
/// The normal is a hint only; STL consumers recompute it from the
/// vertices, so a degenerate facet may carry a zero normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Unit facet normal, or zero for degenerate facets.
    pub normal: DVec3,
    /// Vertices, counter-clockwise when seen from outside the solid.
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Creates a triangle and derives its normal from the winding.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self {
            normal: (b - a).cross(c - a).normalize_or_zero(),
            vertices: [a, b, c],
        }
    }

    /// Creates a triangle with an explicit normal.
    pub fn with_normal(normal: DVec3, vertices: [DVec3; 3]) -> Self {
        Self { normal, vertices }
    }
}

/// An unordered list of triangles.
///
/// # Example
///
/// ```rust
/// use plate_mesh::TriangleMesh;
/// use glam::DVec3;
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.triangles()[0].normal, DVec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a triangle, deriving its normal from the winding.
    pub fn add_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        self.triangles.push(Triangle::new(a, b, c));
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zeros for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }
}

impl FromIterator<Triangle> for TriangleMesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_normal_follows_winding() {
        let up = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert_eq!(up.normal, DVec3::Z);
        let down = Triangle::new(DVec3::ZERO, DVec3::Y, DVec3::X);
        assert_eq!(down.normal, -DVec3::Z);
    }

    #[test]
    fn test_degenerate_normal_is_zero() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(tri.normal, DVec3::ZERO);
    }

    #[test]
    fn test_bounding_box() {
        let mut mesh = TriangleMesh::new();
        mesh.add_triangle(DVec3::new(-1.0, -2.0, -3.0), DVec3::X, DVec3::new(4.0, 5.0, 6.0));
        mesh.add_triangle(DVec3::Z * 9.0, DVec3::X, DVec3::Y);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 9.0));
    }

    #[test]
    fn test_collect_from_triangles() {
        let mesh: TriangleMesh = (0..3)
            .map(|i| Triangle::new(DVec3::Z * f64::from(i), DVec3::X, DVec3::Y))
            .collect();
        assert_eq!(mesh.triangle_count(), 3);
    }
}
