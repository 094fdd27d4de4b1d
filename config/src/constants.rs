//! # Configuration Constants
//!
//! Physical dimensions of a braille plate, tessellation parameters and the
//! fixed names used by the export package.
//!
//! ## Categories
//!
//! - **Precision**: Guard distances for degenerate geometry
//! - **Dot Geometry**: Size and spacing of a single braille dot
//! - **Plate Layout**: Margins, pitches and the mounting hole
//! - **Tessellation**: Subdivision counts for curved outlines
//! - **Settings**: Defaults for the user-tunable layout values
//! - **Package**: STL header and archive entry names

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum distance used when projecting an outline point toward the
/// mounting hole center. Guards the normalization against a zero vector.
pub const MIN_PROJECTION_DISTANCE: f64 = 0.001;

// =============================================================================
// DOT GEOMETRY CONSTANTS
// =============================================================================

/// Diameter of a braille dot where it meets the plate surface.
///
/// # Example
///
/// ```rust
/// use config::constants::{DOT_BASE_DIAMETER, DOT_PITCH_X};
///
/// // Neighbouring dots in a cell never touch.
/// assert!(DOT_BASE_DIAMETER < DOT_PITCH_X);
/// ```
pub const DOT_BASE_DIAMETER: f64 = 1.6;

/// Height of a braille dot above the plate surface.
pub const DOT_HEIGHT: f64 = 0.5;

/// Horizontal distance between the left and right dot columns of a cell.
pub const DOT_PITCH_X: f64 = 2.2;

/// Vertical distance between consecutive dot rows of a cell.
pub const DOT_PITCH_Y: f64 = 2.4;

/// Horizontal distance between the origins of neighbouring cells.
///
/// # Example
///
/// ```rust
/// use config::constants::CHAR_PITCH;
///
/// let cells_per_line = 10;
/// let body_width = cells_per_line as f64 * CHAR_PITCH;
/// assert_eq!(body_width, 60.0);
/// ```
pub const CHAR_PITCH: f64 = 6.0;

// =============================================================================
// PLATE LAYOUT CONSTANTS
// =============================================================================

/// Height reserved for one line of braille.
pub const LINE_HEIGHT: f64 = 10.0;

/// Vertical distance between the centers of consecutive lines.
pub const LINE_PITCH: f64 = 12.0;

/// Top margin between the plate edge and the first line.
pub const MARGIN_TOP: f64 = 4.0;

/// Bottom margin between the last line and the plate edge.
pub const MARGIN_BOTTOM: f64 = 4.0;

/// Left margin between the plate edge and the side column.
pub const MARGIN_LEFT: f64 = 4.0;

/// Right margin after the widest line.
pub const MARGIN_RIGHT: f64 = 4.0;

/// Diameter of the mounting hole punched near the top-left corner.
pub const HOLE_DIAMETER: f64 = 5.0;

/// Width of the reinforcing ring raised around the mounting hole.
pub const HOLE_RING_WIDTH: f64 = 1.5;

/// Padding added to the hole and ring when sizing the left-side column.
pub const LEFT_COLUMN_PADDING: f64 = 4.0;

/// Minimum width of the left-side column holding the hole and page number.
///
/// # Example
///
/// ```rust
/// use config::constants::{HOLE_DIAMETER, HOLE_RING_WIDTH, LEFT_COLUMN_MIN_WIDTH, LEFT_COLUMN_PADDING};
///
/// let hole_column = HOLE_DIAMETER + 2.0 * HOLE_RING_WIDTH + LEFT_COLUMN_PADDING;
/// assert!(hole_column <= LEFT_COLUMN_MIN_WIDTH);
/// ```
pub const LEFT_COLUMN_MIN_WIDTH: f64 = 15.0;

/// Clearance kept around the ringed hole when flooring the plate height.
pub const HOLE_CLEARANCE: f64 = 4.0;

/// Radius of the rounded plate corners.
pub const CORNER_RADIUS: f64 = 3.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Angular subdivisions of each quarter-circle plate corner.
pub const CORNER_SEGMENTS: u32 = 32;

/// Angular subdivisions of the reinforcing tube.
pub const TUBE_SEGMENTS: u32 = 32;

/// Longitude segments of a dot dome.
pub const DOT_SEGMENTS: u32 = 24;

/// Latitude rings of a dot dome (the base ring is not counted).
pub const DOT_RINGS: u32 = 6;

/// Fraction of a right angle swept by the dome before it is capped flat.
///
/// # Example
///
/// ```rust
/// use config::constants::DOT_FLAT_RATIO;
///
/// let max_angle = std::f64::consts::FRAC_PI_2 * DOT_FLAT_RATIO;
/// assert!(max_angle < std::f64::consts::FRAC_PI_2);
/// ```
pub const DOT_FLAT_RATIO: f64 = 0.75;

// =============================================================================
// SETTINGS CONSTANTS
// =============================================================================

/// Default number of cells per braille line.
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 10;

/// Default number of lines per plate.
pub const DEFAULT_MAX_LINES_PER_PLATE: usize = 3;

/// Default plate slab thickness.
pub const DEFAULT_PLATE_THICKNESS: f64 = 1.0;

/// Thinnest slab offered to users. Advisory; the pipeline accepts any
/// positive thickness.
pub const MIN_PLATE_THICKNESS: f64 = 0.5;

/// Thickest slab offered to users. Advisory, like [`MIN_PLATE_THICKNESS`].
pub const MAX_PLATE_THICKNESS: f64 = 2.0;

// =============================================================================
// PACKAGE CONSTANTS
// =============================================================================

/// Free-form text written at the start of the 80-byte STL header.
pub const STL_HEADER_TEXT: &str = "Tenji Plate Generated STL";

/// Archive entry holding the verbatim input text.
pub const ORIGINAL_TEXT_ENTRY: &str = "original_text.txt";

/// Archive entry holding the plate/line/cell cross-reference sheet.
pub const GUIDE_SHEET_ENTRY: &str = "guide_sheet.html";

/// Builds the archive entry name of a plate's mesh.
///
/// Plate numbers are 1-based and zero-padded to two digits.
///
/// # Example
///
/// ```rust
/// use config::constants::plate_entry_name;
///
/// assert_eq!(plate_entry_name(1), "plate_01.stl");
/// assert_eq!(plate_entry_name(12), "plate_12.stl");
/// assert_eq!(plate_entry_name(123), "plate_123.stl");
/// ```
pub fn plate_entry_name(plate_number: usize) -> String {
    format!("plate_{plate_number:02}.stl")
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Radius of the mounting hole.
#[inline]
pub fn hole_radius() -> f64 {
    HOLE_DIAMETER / 2.0
}

/// Radius of a dot at its base.
#[inline]
pub fn dot_base_radius() -> f64 {
    DOT_BASE_DIAMETER / 2.0
}
