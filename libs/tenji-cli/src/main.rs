//! Tenji plate command-line tool.
//!
//! Reads word mappings produced by the transliteration component (JSON,
//! `[{ "originalWord", "reading", "cells": [{ "dots", "char" }] }]`) and
//! previews or exports braille plates.
//!
//! # Commands
//!
//! - `tenji preview <MAPPINGS>` - Print the paginated plates
//! - `tenji export <MAPPINGS> --text <TXT> -o <ZIP>` - Write the plate package
//! - `tenji inspect <STL>` - Summarize a binary STL file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use braille_cell::{flatten_cells, to_unicode, PrefixSet, WordMapping};
use braille_layout::paginate_with_settings;
use clap::{Args, Parser, Subcommand};
use config::constants::{
    DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_LINES_PER_PLATE, DEFAULT_PLATE_THICKNESS,
};
use config::PlateSettings;
use plate_mesh::{stl, PlateDimensions};
use plate_package::build_package;
use plate_package::write_atomic;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Braille plate preview and export
#[derive(Parser)]
#[command(name = "tenji")]
#[command(about = "Turn transliterated text into printable braille plates", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print plates as Unicode braille with their physical size
    Preview {
        /// Word mappings JSON file
        #[arg(name = "MAPPINGS")]
        mappings: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Build the zip package with guide sheet and one STL per plate
    Export {
        /// Word mappings JSON file
        #[arg(name = "MAPPINGS")]
        mappings: PathBuf,

        /// Source text file, stored verbatim in the package
        #[arg(long)]
        text: PathBuf,

        /// Output archive path
        #[arg(short, long, default_value = "tenji_plates.zip")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print triangle count and bounds of a binary STL file
    Inspect {
        /// STL file
        #[arg(name = "STL")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Maximum cells per line (values below 1 become 1)
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS_PER_LINE as i64, allow_negative_numbers = true)]
    chars: i64,

    /// Maximum lines per plate (values below 1 become 1)
    #[arg(long, default_value_t = DEFAULT_MAX_LINES_PER_PLATE as i64, allow_negative_numbers = true)]
    lines: i64,

    /// Base plate thickness in millimeters (clamped to 0.5..=2.0)
    #[arg(long, default_value_t = DEFAULT_PLATE_THICKNESS)]
    thickness: f64,
}

impl LayoutArgs {
    fn settings(&self) -> PlateSettings {
        if PlateSettings::was_clamped(self.chars, self.lines, self.thickness) {
            warn!(
                chars = self.chars,
                lines = self.lines,
                thickness = self.thickness,
                "Layout settings out of range were clamped"
            );
        }
        PlateSettings::normalized(self.chars, self.lines, self.thickness)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Preview { mappings, layout } => preview(&mappings, &layout),
        Commands::Export {
            mappings,
            text,
            output,
            layout,
        } => export(&mappings, &text, &output, &layout),
        Commands::Inspect { path } => inspect(&path),
    }
}

fn load_mappings(path: &Path) -> Result<Vec<WordMapping>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mappings from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid word mappings in {}", path.display()))
}

fn preview(path: &Path, layout: &LayoutArgs) -> Result<()> {
    let mappings = load_mappings(path)?;
    let settings = layout.settings();
    let cells = flatten_cells(&mappings);
    let plates = paginate_with_settings(&cells, &settings, &PrefixSet::japanese());

    for plate in &plates {
        let page = plate.page_number_cells();
        let dims = PlateDimensions::for_lines(&plate.lines, page.len());
        println!(
            "Plate {:02} {}  ({:.1} x {:.1} mm)",
            plate.number,
            to_unicode(&page),
            dims.width,
            dims.height
        );
        for (i, line) in plate.lines.iter().enumerate() {
            let text: String = line.iter().map(|c| c.display.as_str()).collect();
            println!("  L{} {}  {}", i + 1, to_unicode(line), text);
        }
    }
    info!(cells = cells.len(), plates = plates.len(), "Preview complete");
    Ok(())
}

fn export(path: &Path, text: &Path, output: &Path, layout: &LayoutArgs) -> Result<()> {
    let mappings = load_mappings(path)?;
    let original_text = fs::read_to_string(text)
        .with_context(|| format!("Failed to read text from {}", text.display()))?;

    let settings = layout.settings();
    let package = build_package(&mappings, &settings, &PrefixSet::japanese(), &original_text)
        .context("Failed to build plate package")?;
    write_atomic(output, &package.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} plate(s), {} bytes to {}",
        package.summary.plate_count,
        package.summary.byte_len,
        output.display()
    );
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mesh = stl::decode(&bytes).with_context(|| format!("Invalid STL in {}", path.display()))?;
    let (min, max) = mesh.bounding_box();
    println!("{}: {} triangles", path.display(), mesh.triangle_count());
    println!(
        "  bounds: ({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2}) mm",
        min.x, min.y, min.z, max.x, max.y, max.z
    );
    Ok(())
}
