//! # Plate Package
//!
//! Export stage of the pipeline and the session object UI callers hold.
//!
//! ## Architecture
//!
//! ```text
//! WordMapping[] → flatten → paginate → build_plate_mesh (per plate) → stl::encode
//!                                    ↘ render_guide                  ↘
//!                                                          assemble → zip bytes → write_atomic
//! ```
//!
//! ## Archive Layout
//!
//! ```text
//! original_text.txt   input text, verbatim UTF-8
//! guide_sheet.html    one table per plate
//! plate_01.stl        binary STL, one per plate in order
//! ```

pub mod archive;
pub mod error;
pub mod guide;
pub mod session;

pub use archive::{assemble, build_plate_stls, write_atomic, Package, PackageSummary, PlateStl};
pub use error::{PackageError, PackageResult};
pub use guide::{escape_html, render_guide};
pub use session::{build_package, Session};
