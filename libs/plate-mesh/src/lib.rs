//! # Plate Mesh
//!
//! Procedural triangle meshes for printable braille plates, plus the binary
//! STL codec used to ship them.
//!
//! ## Architecture
//!
//! ```text
//! lines + page number + thickness → build_plate_mesh → TriangleMesh → stl::encode → bytes
//! ```
//!
//! ## Primitives
//!
//! - **HoledSlab**: rounded-rectangle base with the mounting hole
//! - **Tube**: reinforcing ring around the hole
//! - **Dome**: flattened dome for each raised dot
//!
//! Primitives are independent shells appended to one soup; they are not
//! boolean-unioned.
//!
//! ## Usage
//!
//! ```rust
//! use braille_cell::{page_number_cells, BrailleCell};
//! use plate_mesh::{build_plate_mesh, stl};
//!
//! let lines = vec![vec![BrailleCell::new([true; 6], "め")]];
//! let mesh = build_plate_mesh(&lines, &page_number_cells(1), 1.0).unwrap();
//! let bytes = stl::encode(&mesh);
//! assert_eq!(stl::decode(&bytes).unwrap().triangle_count(), mesh.triangle_count());
//! ```

pub mod error;
pub mod glyph;
pub mod mesh;
pub mod plate;
pub mod primitives;
pub mod stl;

pub use error::{MeshError, MeshResult};
pub use mesh::{Triangle, TriangleMesh};
pub use plate::{build_plate_mesh, PlateDimensions};
