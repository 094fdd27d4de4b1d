//! # Glyph Placement
//!
//! Maps braille cells onto dot domes. A cell origin is the bottom-left
//! corner of its dot lattice; dot 3 sits on the origin and dot 1 two rows
//! above it.
//!
//! ```text
//!   1 ● ● 4    row 2·pitch_y
//!   2 ● ● 5    row   pitch_y
//!   3 ● ● 6    row   0
//! ```

use braille_cell::{BrailleCell, DOTS_PER_CELL};
use config::constants::{dot_base_radius, DOT_PITCH_X, DOT_PITCH_Y};
use glam::{DVec2, DVec3};

use crate::mesh::TriangleMesh;
use crate::primitives::Dome;

/// Offset of each dot's lattice corner from the cell origin, by dot index.
pub fn dot_offset(index: usize) -> DVec2 {
    let column = (index / 3) as f64;
    let row = (2 - index % 3) as f64;
    DVec2::new(column * DOT_PITCH_X, row * DOT_PITCH_Y)
}

/// Base centers of the raised dots of `cell` placed at `origin`.
///
/// Each dome is inset by its radius so its footprint starts at the lattice
/// point.
pub fn dot_centers(cell: &BrailleCell, origin: DVec2) -> Vec<DVec2> {
    let radius = dot_base_radius();
    (0..DOTS_PER_CELL)
        .filter(|&i| cell.dots[i])
        .map(|i| origin + dot_offset(i) + DVec2::splat(radius))
        .collect()
}

/// Appends one dome per raised dot of `cell`.
pub fn append_cell(mesh: &mut TriangleMesh, dome: &Dome, cell: &BrailleCell, origin: DVec2, base_z: f64) {
    for center in dot_centers(cell, origin) {
        dome.append_to(mesh, DVec3::new(center.x, center.y, base_z));
    }
}
