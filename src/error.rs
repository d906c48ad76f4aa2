//! Structured error types for pathtwick.
//!
//! [`PathError`] covers everything that can go wrong while normalizing one
//! `d` attribute. It always aborts that single path and nothing else.
//! [`TwickError`] covers the surrounding batch: reading drawings and writing
//! the report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single path's data could not be normalized.
///
/// `position` is the 0-based index of the whitespace-separated token where
/// the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A token expected to be numeric failed to parse, or an `x,y` pair did
    /// not have exactly two components.
    #[error("malformed coordinate `{token}` for command `{command}` at token {position}")]
    MalformedCoordinate {
        token: String,
        command: char,
        position: usize,
    },
    /// An arc large-arc or sweep flag was not literally `0` or `1`.
    #[error("arc flag must be `0` or `1`, found `{token}` for command `{command}` at token {position}")]
    MalformedArcFlag {
        token: String,
        command: char,
        position: usize,
    },
    /// A token outside an implicit repeat is not a supported command letter.
    #[error("unrecognized command `{token}` at token {position}")]
    UnrecognizedCommand { token: String, position: usize },
    /// The input ended (or the next command started) before the command
    /// received all of its arguments.
    #[error("command `{command}` is missing arguments at token {position}")]
    TruncatedInput { command: char, position: usize },
    /// The path data contains no tokens at all.
    #[error("path data is empty")]
    EmptyPath,
}

/// Failures of the batch around the normalizer.
#[derive(Debug, Error)]
pub enum TwickError {
    /// The drawing directory could not be listed.
    #[error("failed to scan directory {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A drawing could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A drawing is not well-formed XML.
    #[error("malformed SVG in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
    /// The JSON report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
