//! # Path Data Normalizer
//!
//! Rewrites an SVG `d` attribute into a canonical form and measures it.
//!
//! ```text
//! "M 10,10 L 20,10 L 20,20 z"
//!       ↓  [command]  tokens → invocations (explicit or implicit repeats)
//!       ↓  [state]    pen, origin, bounding box, output
//! "m 0,0 l 10,0 l 0,10 z"   box (0,0)..(10,10)
//! ```
//!
//! The output always opens with `m 0,0` and every later command is lowercase
//! (relative). Coordinates are truncated to integers on input.

pub mod command;
pub mod point;
pub mod state;
mod tokens;

use serde::Serialize;

pub use command::{Command, CommandKind, Invocation, Mode, Parser, Segment};
pub use point::{to_coordinate, Point};
pub use state::{PathState, ANCHOR};

use crate::error::PathError;

/// Axis-aligned bounds of every pen position, relative to the path origin.
///
/// Starts as the single point `(0,0)`: the origin is always inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn include(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Centre of the box, rounded toward zero on each axis.
    pub fn midpoint(&self) -> Point {
        Point::new(
            self.min.x.saturating_add(self.width() / 2),
            self.min.y.saturating_add(self.height() / 2),
        )
    }
}

/// The result of normalizing one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    /// The `d` value as it was read.
    pub original: String,
    /// The first move: its raw value when absolute, otherwise added to the
    /// translate.
    pub origin: Point,
    pub bounds: BoundingBox,
    /// Snapshot of `bounds.width()` and `bounds.height()`.
    pub width: i32,
    pub height: i32,
    /// Label point, the snapshot of `bounds.midpoint()`.
    pub midpoint: Point,
    /// Canonical relative path data.
    pub normalized: String,
}

/// Normalizes path data.
///
/// `offset` is the element's initial translate. It seeds the origin, so it
/// reaches the output only through absolute commands that follow a relative
/// first move. Any error discards the whole path.
pub fn normalize(d: &str, offset: Point) -> Result<ParsedPath, PathError> {
    let mut parser = Parser::new(d);
    if parser.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let state = parser.try_fold(PathState::new(offset), |state, invocation| {
        invocation.map(|invocation| state.apply(invocation))
    })?;
    Ok(state.finish(d))
}
