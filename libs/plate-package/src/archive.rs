//! # Archive Assembly
//!
//! Bundles the original text, the guide sheet and one STL per plate into a
//! zip archive. Entry order is fixed: text, guide, then plates by number,
//! whatever order the meshes were built in.

use std::io::{Cursor, Write};
use std::path::Path;

use braille_cell::BrailleCell;
use braille_layout::Plate;
use config::constants::{plate_entry_name, GUIDE_SHEET_ENTRY, ORIGINAL_TEXT_ENTRY};
use plate_mesh::{build_plate_mesh, stl, MeshResult};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::PackageResult;
use crate::guide::render_guide;

/// Encoded mesh of one plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateStl {
    /// 1-based plate index.
    pub number: usize,
    /// Triangles in the mesh.
    pub triangle_count: usize,
    /// Binary STL bytes.
    pub bytes: Vec<u8>,
}

/// What went into an archive, for UI feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Number of plates.
    pub plate_count: usize,
    /// Triangle count of each plate, in plate order.
    pub triangle_counts: Vec<usize>,
    /// Size of the archive in bytes.
    pub byte_len: usize,
}

/// An assembled archive.
#[derive(Debug, Clone)]
pub struct Package {
    /// Zip bytes.
    pub bytes: Vec<u8>,
    /// Summary of the contents.
    pub summary: PackageSummary,
}

/// Builds and encodes the mesh of every plate.
///
/// With the `parallel` feature the plates are built on the rayon pool. The
/// result is in plate order either way.
pub fn build_plate_stls<C>(plates: &[Plate<C>], thickness: f64) -> PackageResult<Vec<PlateStl>>
where
    C: AsRef<BrailleCell> + Sync,
{
    #[cfg(feature = "parallel")]
    let built: MeshResult<Vec<PlateStl>> = {
        use rayon::prelude::*;
        plates.par_iter().map(|plate| plate_stl(plate, thickness)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let built: MeshResult<Vec<PlateStl>> =
        plates.iter().map(|plate| plate_stl(plate, thickness)).collect();

    Ok(built?)
}

fn plate_stl<C: AsRef<BrailleCell>>(plate: &Plate<C>, thickness: f64) -> MeshResult<PlateStl> {
    let mesh = build_plate_mesh(&plate.lines, &plate.page_number_cells(), thickness)?;
    debug!(
        plate = plate.number,
        triangles = mesh.triangle_count(),
        "Encoded plate"
    );
    Ok(PlateStl {
        number: plate.number,
        triangle_count: mesh.triangle_count(),
        bytes: stl::encode(&mesh),
    })
}

/// Assembles the package archive in memory.
///
/// # Errors
///
/// Fails if a plate mesh cannot be built (bad thickness) or the zip writer
/// reports an error.
pub fn assemble<C>(plates: &[Plate<C>], original_text: &str, thickness: f64) -> PackageResult<Package>
where
    C: AsRef<BrailleCell> + Sync,
{
    let stls = build_plate_stls(plates, thickness)?;
    let guide = render_guide(plates);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(ORIGINAL_TEXT_ENTRY, options)?;
    zip.write_all(original_text.as_bytes())?;

    zip.start_file(GUIDE_SHEET_ENTRY, options)?;
    zip.write_all(guide.as_bytes())?;

    for plate in &stls {
        zip.start_file(plate_entry_name(plate.number), options)?;
        zip.write_all(&plate.bytes)?;
    }

    let bytes = zip.finish()?.into_inner();
    let summary = PackageSummary {
        plate_count: stls.len(),
        triangle_counts: stls.iter().map(|p| p.triangle_count).collect(),
        byte_len: bytes.len(),
    };
    info!(
        plates = summary.plate_count,
        bytes = summary.byte_len,
        "Assembled plate package"
    );
    Ok(Package { bytes, summary })
}

/// Writes `bytes` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory, which is
/// then renamed over `path`. On failure the temporary file is removed and
/// any existing file at `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> PackageResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    info!(path = %path.display(), bytes = bytes.len(), "Wrote plate package");
    Ok(())
}
