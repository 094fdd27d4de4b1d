//! # Binary STL
//!
//! Little-endian binary STL layout:
//!
//! ```text
//! UINT8[80]    header (free text, zero padded)
//! UINT32       triangle count
//! per triangle:
//!   REAL32[3]  normal
//!   REAL32[3]  vertex 1
//!   REAL32[3]  vertex 2
//!   REAL32[3]  vertex 3
//!   UINT16     attribute byte count (always 0)
//! ```

use config::constants::STL_HEADER_TEXT;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Triangle, TriangleMesh};

/// Size of the free-form header.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record.
pub const TRIANGLE_RECORD_SIZE: usize = 50;

/// Exact byte length of an encoded mesh with `triangle_count` triangles.
pub fn encoded_len(triangle_count: usize) -> usize {
    HEADER_SIZE + 4 + triangle_count * TRIANGLE_RECORD_SIZE
}

/// Encodes `mesh` into binary STL bytes.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use plate_mesh::{stl, TriangleMesh};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// let bytes = stl::encode(&mesh);
/// assert_eq!(bytes.len(), 80 + 4 + 50);
/// ```
pub fn encode(mesh: &TriangleMesh) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(mesh.triangle_count()));
    buf.extend_from_slice(&header());
    buf.extend_from_slice(&(mesh.triangle_count() as u32).to_le_bytes());
    for tri in mesh.triangles() {
        push_vec3(&mut buf, tri.normal);
        for v in tri.vertices {
            push_vec3(&mut buf, v);
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

/// Decodes binary STL bytes.
///
/// Coordinates come back widened from `f32`, and stored normals are kept
/// as-is rather than recomputed.
pub fn decode(bytes: &[u8]) -> MeshResult<TriangleMesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(MeshError::invalid_stl(format!(
            "expected at least {} bytes, got {}",
            HEADER_SIZE + 4,
            bytes.len()
        )));
    }

    let count = u32::from_le_bytes(read_array(&bytes[HEADER_SIZE..])) as usize;
    let expected = encoded_len(count);
    if bytes.len() != expected {
        return Err(MeshError::invalid_stl(format!(
            "{count} triangles need {expected} bytes, got {}",
            bytes.len()
        )));
    }

    let records = bytes[HEADER_SIZE + 4..].chunks_exact(TRIANGLE_RECORD_SIZE);
    Ok(records
        .map(|record| {
            let normal = read_vec3(&record[0..12]);
            let vertices = [
                read_vec3(&record[12..24]),
                read_vec3(&record[24..36]),
                read_vec3(&record[36..48]),
            ];
            Triangle::with_normal(normal, vertices)
        })
        .collect())
}

fn header() -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    let text = STL_HEADER_TEXT.as_bytes();
    let len = text.len().min(HEADER_SIZE);
    header[..len].copy_from_slice(&text[..len]);
    header
}

fn push_vec3(buf: &mut Vec<u8>, v: DVec3) {
    buf.extend_from_slice(&(v.x as f32).to_le_bytes());
    buf.extend_from_slice(&(v.y as f32).to_le_bytes());
    buf.extend_from_slice(&(v.z as f32).to_le_bytes());
}

fn read_array(buf: &[u8]) -> [u8; 4] {
    [buf[0], buf[1], buf[2], buf[3]]
}

fn read_vec3(buf: &[u8]) -> DVec3 {
    DVec3::new(
        f64::from(f32::from_le_bytes(read_array(&buf[0..4]))),
        f64::from(f32::from_le_bytes(read_array(&buf[4..8]))),
        f64::from(f32::from_le_bytes(read_array(&buf[8..12]))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        mesh.add_triangle(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        );
        mesh
    }

    #[test]
    fn test_header_layout() {
        let bytes = encode(&single());
        assert!(bytes.starts_with(STL_HEADER_TEXT.as_bytes()));
        assert!(bytes[STL_HEADER_TEXT.len()..HEADER_SIZE].iter().all(|&b| b == 0));
        assert_eq!(&bytes[80..84], &1u32.to_le_bytes());
    }

    #[test]
    fn test_record_layout() {
        let bytes = encode(&single());
        let record = &bytes[84..];
        assert_eq!(record.len(), 50);
        // normal (0, 0, 1)
        assert_eq!(&record[8..12], &1.0f32.to_le_bytes());
        // second vertex x
        assert_eq!(&record[24..28], &1.0f32.to_le_bytes());
        assert_eq!(&record[48..50], &[0, 0]);
    }

    #[test]
    fn test_empty_mesh() {
        let bytes = encode(&TriangleMesh::new());
        assert_eq!(bytes.len(), 84);
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let bytes = encode(&single());
        assert!(matches!(
            decode(&bytes[..bytes.len() - 1]),
            Err(MeshError::InvalidStl { .. })
        ));
        assert!(decode(&bytes[..10]).is_err());
    }
}
