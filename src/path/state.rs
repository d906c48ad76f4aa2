//! # Path State
//!
//! Pen tracking, bounding box and normalized output for one path. Each
//! [`Invocation`] is folded into the state by [`PathState::apply`], which
//! consumes the old state and returns the next one.
//!
//! All positions here are relative to the path origin, which is fixed by the
//! first move. Absolute input is converted to a displacement from the pen
//! before anything is recorded, so output is always lowercase.
//!
//! The element's translate only seeds the origin. An absolute first move
//! replaces it outright, and absolute coordinates are measured from the
//! origin as written, without adding the translate back.

use super::command::{CommandKind, Invocation, Segment};
use super::point::Point;
use super::{BoundingBox, ParsedPath};

/// Opening token of every normalized path: the first move, measured from itself.
pub const ANCHOR: &str = "m 0,0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    /// Seeded with the translate, then fixed by the first move.
    origin: Point,
    pen: Point,
    subpath_start: Point,
    subpaths: usize,
    bounds: BoundingBox,
    /// Letter owed to the output by the current run. Cleared once written.
    pending_letter: Option<char>,
    output: String,
}

impl PathState {
    pub fn new(offset: Point) -> Self {
        PathState {
            origin: offset,
            pen: Point::ZERO,
            subpath_start: Point::ZERO,
            subpaths: 0,
            bounds: BoundingBox::default(),
            pending_letter: None,
            output: String::new(),
        }
    }

    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn subpaths(&self) -> usize {
        self.subpaths
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Applies one command and returns the resulting state.
    pub fn apply(mut self, invocation: Invocation) -> Self {
        let Invocation {
            segment,
            absolute,
            explicit,
        } = invocation;

        if self.subpaths == 0 {
            self.open(segment, absolute);
            if matches!(segment, Segment::MoveTo(_)) {
                return self;
            }
        }

        if explicit {
            self.pending_letter = Some(segment_kind(segment).letter());
        }

        match segment {
            Segment::MoveTo(to) => {
                let d = self.displacement(to, absolute);
                self.move_pen(d);
                self.subpaths += 1;
                self.subpath_start = self.pen;
                self.write(&[d.to_string()]);
            }
            Segment::LineTo(to) => {
                let d = self.displacement(to, absolute);
                self.move_pen(d);
                self.write(&[d.to_string()]);
            }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                let c1 = self.displacement(ctrl1, absolute);
                let c2 = self.displacement(ctrl2, absolute);
                let d = self.displacement(to, absolute);
                self.move_pen(d);
                self.write(&[c1.to_string(), c2.to_string(), d.to_string()]);
            }
            Segment::HorizontalTo(x) => {
                let dx = if absolute {
                    x.saturating_sub(self.origin.x).saturating_sub(self.pen.x)
                } else {
                    x
                };
                self.move_pen(Point::new(dx, 0));
                if dx != 0 {
                    self.write(&[dx.to_string()]);
                }
            }
            Segment::VerticalTo(y) => {
                let dy = if absolute {
                    y.saturating_sub(self.origin.y).saturating_sub(self.pen.y)
                } else {
                    y
                };
                self.move_pen(Point::new(0, dy));
                if dy != 0 {
                    self.write(&[dy.to_string()]);
                }
            }
            Segment::ArcTo {
                radii,
                rotation,
                large_arc,
                sweep,
                to,
            } => {
                let d = self.displacement(to, absolute);
                self.move_pen(d);
                self.write(&[
                    radii.to_string(),
                    rotation.to_string(),
                    flag(large_arc).to_string(),
                    flag(sweep).to_string(),
                    d.to_string(),
                ]);
            }
            Segment::Close => {
                self.pen = self.subpath_start;
                self.write(&[]);
            }
        }
        self
    }

    /// Fixes the origin and writes the anchor.
    ///
    /// An absolute move takes its raw value as the origin, a relative one is
    /// added to the translate. A path that does not begin with a move is
    /// anchored at the translate and the segment is then applied as usual.
    fn open(&mut self, segment: Segment, absolute: bool) {
        if let Segment::MoveTo(to) = segment {
            self.origin = if absolute { to } else { self.origin + to };
        }
        self.subpaths = 1;
        self.output.push_str(ANCHOR);
    }

    /// Displacement from the pen to `to`: absolute input is measured from
    /// the origin and the pen.
    fn displacement(&self, to: Point, absolute: bool) -> Point {
        if absolute {
            to - self.origin - self.pen
        } else {
            to
        }
    }

    /// Moves the pen and grows the bounding box to include it.
    fn move_pen(&mut self, d: Point) {
        self.pen += d;
        self.bounds.include(self.pen);
    }

    fn write(&mut self, args: &[String]) {
        if let Some(letter) = self.pending_letter.take() {
            self.output.push(' ');
            self.output.push(letter);
        }
        for arg in args {
            self.output.push(' ');
            self.output.push_str(arg);
        }
    }

    pub fn finish(self, original: &str) -> ParsedPath {
        ParsedPath {
            original: original.to_string(),
            origin: self.origin,
            bounds: self.bounds,
            width: self.bounds.width(),
            height: self.bounds.height(),
            midpoint: self.bounds.midpoint(),
            normalized: self.output,
        }
    }
}

fn segment_kind(segment: Segment) -> CommandKind {
    match segment {
        Segment::MoveTo(_) => CommandKind::Move,
        Segment::LineTo(_) => CommandKind::Line,
        Segment::CubicTo { .. } => CommandKind::Cubic,
        Segment::HorizontalTo(_) => CommandKind::Horizontal,
        Segment::VerticalTo(_) => CommandKind::Vertical,
        Segment::ArcTo { .. } => CommandKind::Arc,
        Segment::Close => CommandKind::Close,
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}
