//! # pathtwick
//!
//! Reads a folder of SVG drawings, rewrites the `d` attribute of every
//! `<path>` into a canonical relative form and reports each path's origin,
//! bounding box and label point for spreadsheet analysis.
//!
//! ## Architecture
//!
//! ```text
//! *.svg files
//!       ↓
//!   [scan]     Find drawings, run each one through the pipeline
//!       ↓
//!   [svg]      Pull <path> elements and their attributes
//!       ↓
//!   [path]     Normalize path data, track pen and bounding box
//!       ↓
//!   [report]   Semicolon CSV or JSON rows
//! ```
//!
//! The [`path`] module is usable on its own:
//!
//! ```
//! use pathtwick::path::{normalize, Point};
//!
//! let parsed = normalize("M 10,10 L 20,10 L 20,20 z", Point::ZERO).unwrap();
//! assert_eq!(parsed.normalized, "m 0,0 l 10,0 l 0,10 z");
//! assert_eq!(parsed.bounds.max, Point::new(10, 10));
//! ```

pub mod error;
pub mod path;
pub mod report;
pub mod scan;
pub mod svg;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use error::{PathError, TwickError};
pub use path::{normalize, ParsedPath, Point};
pub use scan::{PathRecord, ScanConfig};

/// Output format of a batch report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    /// Default report file name for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Csv => "export_svg.csv",
            ReportFormat::Json => "export_svg.json",
        }
    }
}

/// Scans a directory and writes the report to `output`.
///
/// This is the primary entry point. Returns the number of rows written.
pub fn export(config: &ScanConfig, output: &Path, format: ReportFormat) -> Result<usize, TwickError> {
    let records = scan::process_directory(config)?;
    let out = BufWriter::new(File::create(output)?);
    match format {
        ReportFormat::Csv => report::write_csv(out, &records)?,
        ReportFormat::Json => report::write_json(out, &records)?,
    }
    Ok(records.len())
}
