//! # Braille Layout
//!
//! Pagination engine: turns a flat cell stream into plates of lines without
//! splitting an indicator from the cell it modifies.
//!
//! ## Algorithm
//!
//! ```text
//! cells → units (1 or 2 cells) → greedy lines (≤ max chars) → plates (≤ max lines)
//! ```
//!
//! The engine is pure. It is generic over any cell wrapper implementing
//! `AsRef<BrailleCell>`, so a live preview can carry word provenance through
//! layout while export works on bare cells.

pub mod line;
pub mod plate;
pub mod unit;

pub use line::{pack_lines, Line};
pub use plate::{chunk_plates, paginate, paginate_with_settings, Plate};
pub use unit::{unit_lengths, units};
