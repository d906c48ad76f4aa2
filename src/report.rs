//! # Report Writers
//!
//! Flattens [`PathRecord`]s into rows and writes them either as a
//! semicolon-separated table meant for spreadsheets or as JSON.

use std::io::Write;

use serde::Serialize;

use crate::error::TwickError;
use crate::scan::PathRecord;

/// Column titles of the CSV report, in order.
pub const CSV_HEADER: [&str; 16] = [
    "Layer",
    "Category",
    "Name",
    "Row",
    "OriginalPath",
    "Delta X",
    "Delta Y",
    "Label X",
    "Label Y",
    "Box X",
    "Box Y",
    "Width",
    "Height",
    "ImprovedPath",
    "CSS class",
    "CSS style",
];

/// One report line.
///
/// Delta is the path origin, Label the bounding-box midpoint and Box its
/// minimum corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow<'a> {
    pub layer: &'a str,
    pub category: &'a str,
    pub name: &'a str,
    pub row: usize,
    pub original_path: &'a str,
    pub delta_x: i32,
    pub delta_y: i32,
    pub label_x: i32,
    pub label_y: i32,
    pub box_x: i32,
    pub box_y: i32,
    pub width: i32,
    pub height: i32,
    pub improved_path: &'a str,
    pub css_class: &'a str,
    pub css_style: &'a str,
}

impl<'a> ReportRow<'a> {
    pub fn new(row: usize, record: &'a PathRecord) -> Self {
        let parsed = &record.parsed;
        let bounds = parsed.bounds;
        ReportRow {
            layer: &record.layer,
            category: &record.category,
            name: &record.name,
            row,
            original_path: &parsed.original,
            delta_x: parsed.origin.x,
            delta_y: parsed.origin.y,
            label_x: parsed.midpoint.x,
            label_y: parsed.midpoint.y,
            box_x: bounds.min.x,
            box_y: bounds.min.y,
            width: parsed.width,
            height: parsed.height,
            improved_path: &parsed.normalized,
            css_class: &record.class,
            css_style: &record.style,
        }
    }
}

/// Numbers records from 1, in batch order.
pub fn rows(records: &[PathRecord]) -> impl Iterator<Item = ReportRow<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| ReportRow::new(idx + 1, record))
}

pub fn write_csv<W: Write>(mut out: W, records: &[PathRecord]) -> Result<(), TwickError> {
    let mut line = String::new();
    for title in CSV_HEADER {
        line.push_str(title);
        line.push(';');
    }
    writeln!(out, "{line}")?;

    for row in rows(records) {
        line.clear();
        push_text(&mut line, row.layer);
        push_text(&mut line, row.category);
        push_text(&mut line, row.name);
        push_number(&mut line, row.row);
        push_text(&mut line, row.original_path);
        for value in [
            row.delta_x,
            row.delta_y,
            row.label_x,
            row.label_y,
            row.box_x,
            row.box_y,
            row.width,
            row.height,
        ] {
            push_number(&mut line, value);
        }
        push_text(&mut line, row.improved_path);
        push_text(&mut line, row.css_class);
        push_text(&mut line, row.css_style);
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, records: &[PathRecord]) -> Result<(), TwickError> {
    let table: Vec<ReportRow<'_>> = rows(records).collect();
    serde_json::to_writer_pretty(&mut out, &table)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Quoted field; embedded quotes are doubled.
fn push_text(line: &mut String, value: &str) {
    line.push('"');
    line.push_str(&value.replace('"', "\"\""));
    line.push('"');
    line.push(';');
}

fn push_number(line: &mut String, value: impl std::fmt::Display) {
    use std::fmt::Write as _;
    let _ = write!(line, "{value};");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{normalize, Point};
    use pretty_assertions::assert_eq;

    fn record(name: &str, d: &str) -> PathRecord {
        PathRecord {
            layer: "floor".to_string(),
            category: "room".to_string(),
            name: name.to_string(),
            parsed: normalize(d, Point::ZERO).unwrap(),
            class: "zone".to_string(),
            style: "fill:\"red\"".to_string(),
        }
    }

    #[test]
    fn test_csv_layout() {
        let records = vec![record("hall", "M 10,10 L 20,10 L 20,20 z")];
        let mut out = Vec::new();
        write_csv(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Layer;Category;Name;Row;OriginalPath;Delta X;Delta Y;Label X;Label Y;Box X;Box Y;Width;Height;ImprovedPath;CSS class;CSS style;"
        );
        assert_eq!(
            lines[1],
            "\"floor\";\"room\";\"hall\";1;\"M 10,10 L 20,10 L 20,20 z\";10;10;5;5;0;0;10;10;\"m 0,0 l 10,0 l 0,10 z\";\"zone\";\"fill:\"\"red\"\"\";"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let records = vec![record("a", "m 0,0"), record("b", "m 0,0"), record("c", "m 0,0")];
        let numbers: Vec<usize> = rows(&records).map(|r| r.row).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_json_report() {
        let records = vec![record("hall", "m 0,0 h 8 v 4")];
        let mut out = Vec::new();
        write_json(&mut out, &records).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "hall");
        assert_eq!(value[0]["improvedPath"], "m 0,0 h 8 v 4");
        assert_eq!(value[0]["width"], 8);
        assert_eq!(value[0]["labelY"], 2);
    }
}
