//! # Plate Builder
//!
//! Assembles one plate: holed slab, reinforcing tube, page number and body
//! glyphs, all in the plate frame (origin bottom-left, Z=0 underside).
//!
//! ```text
//!  ┌────────┬──────────────────────────┐
//!  │  (○)   │ ⠿⠿⠿⠿⠿⠿  line 1           │
//!  │        │ ⠿⠿⠿⠿     line 2           │
//!  │  ⠼⠁    │ ⠿⠿⠿⠿⠿    line n           │
//!  └────────┴──────────────────────────┘
//!   left column          body
//! ```

use braille_cell::BrailleCell;
use config::constants::{
    dot_base_radius, hole_radius, CHAR_PITCH, CORNER_RADIUS, CORNER_SEGMENTS, DOT_HEIGHT,
    DOT_PITCH_Y, HOLE_CLEARANCE, HOLE_DIAMETER, HOLE_RING_WIDTH, LEFT_COLUMN_MIN_WIDTH,
    LEFT_COLUMN_PADDING, LINE_HEIGHT, LINE_PITCH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT,
    MARGIN_TOP, TUBE_SEGMENTS,
};
use glam::DVec2;
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::glyph::append_cell;
use crate::mesh::TriangleMesh;
use crate::primitives::{Dome, HoledSlab, Tube};

/// Physical size of a plate and the anchors derived from it.
///
/// # Examples
/// ```
/// use plate_mesh::PlateDimensions;
///
/// let dims = PlateDimensions::compute(2, 10, 2);
/// assert_eq!(dims.left_column_width, 15.0);
/// assert_eq!(dims.width, 4.0 + 15.0 + 60.0 + 4.0);
/// assert_eq!(dims.height, 4.0 + 10.0 + 12.0 + 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateDimensions {
    /// Overall width along X.
    pub width: f64,
    /// Overall height along Y.
    pub height: f64,
    /// Width of the column holding the hole and page number.
    pub left_column_width: f64,
    /// Number of body lines.
    pub line_count: usize,
    /// Mounting hole center.
    pub hole_center: DVec2,
}

impl PlateDimensions {
    /// Computes the size of a plate with `line_count` lines, the widest
    /// holding `max_cells` cells, and a page number of `page_number_len`
    /// cells.
    pub fn compute(line_count: usize, max_cells: usize, page_number_len: usize) -> Self {
        let hole_column = HOLE_DIAMETER + 2.0 * HOLE_RING_WIDTH + LEFT_COLUMN_PADDING;
        let left_column_width = hole_column
            .max(page_number_len as f64 * CHAR_PITCH)
            .max(LEFT_COLUMN_MIN_WIDTH);

        let width = MARGIN_LEFT + left_column_width + max_cells as f64 * CHAR_PITCH + MARGIN_RIGHT;

        let extra_lines = line_count.saturating_sub(1) as f64;
        let min_height = 2.0 * (hole_radius() + HOLE_RING_WIDTH) + HOLE_CLEARANCE;
        let height =
            (MARGIN_TOP + LINE_HEIGHT + extra_lines * LINE_PITCH + MARGIN_BOTTOM).max(min_height);

        let ring_radius = hole_radius() + HOLE_RING_WIDTH;
        let hole_center = DVec2::new(MARGIN_LEFT + ring_radius, height - (MARGIN_TOP + ring_radius));

        Self {
            width,
            height,
            left_column_width,
            line_count,
            hole_center,
        }
    }

    /// Dimensions for a set of lines and a page number.
    pub fn for_lines<C: AsRef<BrailleCell>>(lines: &[Vec<C>], page_number_len: usize) -> Self {
        let max_cells = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self::compute(lines.len(), max_cells, page_number_len)
    }

    /// Origin of the first page-number cell.
    ///
    /// The number is centered in the left column and sits in the bottom
    /// line's row.
    pub fn page_number_origin(&self, page_number_len: usize) -> DVec2 {
        let content = page_number_len as f64 * CHAR_PITCH;
        let mut x = MARGIN_LEFT;
        if content < self.left_column_width {
            x += (self.left_column_width - content) / 2.0;
        }
        let row_center = MARGIN_BOTTOM + LINE_HEIGHT / 2.0;
        DVec2::new(x, row_center - DOT_PITCH_Y)
    }

    /// Origin of cell `column` on body line `line` (0-based, top first).
    pub fn body_cell_origin(&self, line: usize, column: usize) -> DVec2 {
        let first_center = self.height - MARGIN_TOP - LINE_HEIGHT / 2.0;
        let center = first_center - line as f64 * LINE_PITCH;
        DVec2::new(
            MARGIN_LEFT + self.left_column_width + column as f64 * CHAR_PITCH,
            center - DOT_PITCH_Y,
        )
    }
}

/// Builds the triangle mesh of one plate.
///
/// Emission order is fixed: slab, tube, page-number dots, then body dots
/// line by line, so identical inputs give identical triangle lists.
///
/// # Errors
///
/// Returns [`MeshError::InvalidThickness`] when `thickness` is not a
/// positive finite number.
///
/// # Examples
/// ```
/// use braille_cell::{page_number_cells, BrailleCell};
/// use plate_mesh::build_plate_mesh;
///
/// let lines = vec![vec![BrailleCell::new([true, false, false, false, false, false], "あ")]];
/// let mesh = build_plate_mesh(&lines, &page_number_cells(1), 1.0).unwrap();
/// assert!(!mesh.is_empty());
/// ```
pub fn build_plate_mesh<C: AsRef<BrailleCell>>(
    lines: &[Vec<C>],
    page_number_cells: &[BrailleCell],
    thickness: f64,
) -> MeshResult<TriangleMesh> {
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(MeshError::InvalidThickness(thickness));
    }

    let dims = PlateDimensions::for_lines(lines, page_number_cells.len());
    let dome = Dome::new(dot_base_radius(), DOT_HEIGHT)?;

    let slab = HoledSlab {
        width: dims.width,
        height: dims.height,
        thickness,
        corner_radius: CORNER_RADIUS,
        corner_segments: CORNER_SEGMENTS,
        hole_center: dims.hole_center,
        hole_radius: hole_radius(),
        hole_segments: TUBE_SEGMENTS,
    };
    let tube = Tube {
        center: dims.hole_center,
        base_z: thickness,
        inner_radius: hole_radius(),
        outer_radius: hole_radius() + HOLE_RING_WIDTH,
        height: DOT_HEIGHT,
        segments: TUBE_SEGMENTS,
    };

    let raised: usize = page_number_cells
        .iter()
        .map(BrailleCell::raised_count)
        .chain(lines.iter().flatten().map(|c| c.as_ref().raised_count()))
        .sum();
    let mut mesh = TriangleMesh::with_capacity(
        slab.triangle_count() + tube.triangle_count() + raised * dome.triangle_count(),
    );

    slab.append_to(&mut mesh);
    tube.append_to(&mut mesh);

    let mut origin = dims.page_number_origin(page_number_cells.len());
    for cell in page_number_cells {
        append_cell(&mut mesh, &dome, cell, origin, thickness);
        origin.x += CHAR_PITCH;
    }

    for (row, line) in lines.iter().enumerate() {
        for (column, cell) in line.iter().enumerate() {
            let origin = dims.body_cell_origin(row, column);
            append_cell(&mut mesh, &dome, cell.as_ref(), origin, thickness);
        }
    }

    debug!(
        width = dims.width,
        height = dims.height,
        lines = lines.len(),
        dots = raised,
        triangles = mesh.triangle_count(),
        "Built plate mesh"
    );
    Ok(mesh)
}
