//! # Drawing Scanner
//!
//! Enumerates the SVG files of a directory and normalizes every path in
//! them. A path that fails to normalize is logged and left out; the rest of
//! the batch is unaffected.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::error::TwickError;
use crate::path::{normalize, ParsedPath};
use crate::svg::{extract_paths, parse_translate, PathElement};

/// Where to look for drawings.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub dir: PathBuf,
    /// File extension to pick up, compared case-insensitively.
    pub extension: String,
}

impl ScanConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ScanConfig {
            dir: dir.into(),
            extension: "svg".to_string(),
        }
    }
}

/// One normalized path and the labels it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    /// File stem of the drawing the path came from.
    pub layer: String,
    pub category: String,
    pub name: String,
    pub parsed: ParsedPath,
    pub class: String,
    pub style: String,
}

/// Lists matching files directly inside the configured directory, sorted.
pub fn find_drawings(config: &ScanConfig) -> Result<Vec<PathBuf>, TwickError> {
    let scan_err = |source| TwickError::Scan {
        path: config.dir.clone(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(&config.dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&config.extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Normalizes every path of one document.
///
/// Paths are independent, so they are normalized in parallel. The result
/// keeps document order.
pub fn process_document(layer: &str, content: &str) -> Result<Vec<PathRecord>, quick_xml::Error> {
    let elements = extract_paths(content)?;
    debug!("{layer}: {} path element(s)", elements.len());

    Ok(elements
        .par_iter()
        .filter_map(|element| record_for(layer, element))
        .collect())
}

fn record_for(layer: &str, element: &PathElement) -> Option<PathRecord> {
    let (category, name) = element.category_and_name();

    let Some(d) = element.path_data() else {
        debug!("{layer}: no usable path data on `{}`", element.id.as_deref().unwrap_or("?"));
        return None;
    };
    if let Some(transform) = element.transform.as_deref().filter(|t| parse_translate(t).is_none()) {
        debug!("{layer}: ignoring transform `{transform}`");
    }

    match normalize(d, element.offset()) {
        Ok(parsed) => {
            trace!("{layer}: {} -> {}", parsed.original, parsed.normalized);
            Some(PathRecord {
                layer: layer.to_string(),
                category: category.to_string(),
                name: name.to_string(),
                parsed,
                class: element.class.clone().unwrap_or_default(),
                style: element.style.clone().unwrap_or_default(),
            })
        }
        Err(e) => {
            warn!(
                "{layer}: skipping path `{}`: {e} (in `{d}`)",
                element.id.as_deref().unwrap_or("?")
            );
            None
        }
    }
}

/// Reads and normalizes every drawing the config points at.
///
/// Unreadable or malformed files are logged and skipped. Only failing to
/// list the directory is fatal.
pub fn process_directory(config: &ScanConfig) -> Result<Vec<PathRecord>, TwickError> {
    let files = find_drawings(config)?;
    info!(
        "fetching {} *.{} file(s) from {}",
        files.len(),
        config.extension,
        config.dir.display()
    );

    let mut records = Vec::new();
    for file in &files {
        match process_file(file) {
            Ok(mut found) => records.append(&mut found),
            Err(e) => warn!("{e}"),
        }
    }
    Ok(records)
}

fn process_file(file: &Path) -> Result<Vec<PathRecord>, TwickError> {
    let content = fs::read_to_string(file).map_err(|source| TwickError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let layer = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    process_document(&layer, &content).map_err(|source| TwickError::Xml {
        path: file.to_path_buf(),
        source,
    })
}
