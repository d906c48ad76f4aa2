//! # Command Dispatch
//!
//! Walks the token stream and produces one [`Invocation`] per argument group.
//! A group starts either with a command letter or, while a [`Mode`] is
//! active, with a bare token that repeats the previous command.
//!
//! Supported letters: `m l c h v a z`, in both cases. Smooth and quadratic
//! curves (`s t q`) are not part of the accepted grammar.

use super::point::Point;
use super::tokens::Tokens;
use crate::error::PathError;

/// The drawing operation a command letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Move,
    Line,
    Cubic,
    Horizontal,
    Vertical,
    Arc,
    Close,
}

impl CommandKind {
    /// Lowercase letter, as written to normalized output.
    pub fn letter(self) -> char {
        match self {
            CommandKind::Move => 'm',
            CommandKind::Line => 'l',
            CommandKind::Cubic => 'c',
            CommandKind::Horizontal => 'h',
            CommandKind::Vertical => 'v',
            CommandKind::Arc => 'a',
            CommandKind::Close => 'z',
        }
    }

    /// The mode left active once this command has been read.
    pub fn mode(self) -> Mode {
        match self {
            CommandKind::Move | CommandKind::Line => Mode::Line,
            CommandKind::Cubic => Mode::Cubic,
            CommandKind::Horizontal => Mode::Horizontal,
            CommandKind::Vertical => Mode::Vertical,
            CommandKind::Arc => Mode::Arc,
            CommandKind::Close => Mode::None,
        }
    }
}

/// A command letter as it appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Uppercase letters take absolute coordinates.
    pub absolute: bool,
}

impl Command {
    /// Recognizes a token consisting of exactly one supported letter.
    pub fn from_token(token: &str) -> Option<Command> {
        let mut chars = token.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let kind = match ch.to_ascii_lowercase() {
            'm' => CommandKind::Move,
            'l' => CommandKind::Line,
            'c' => CommandKind::Cubic,
            'h' => CommandKind::Horizontal,
            'v' => CommandKind::Vertical,
            'a' => CommandKind::Arc,
            'z' => CommandKind::Close,
            _ => return None,
        };
        Some(Command {
            kind,
            absolute: ch.is_ascii_uppercase(),
        })
    }

    /// The letter exactly as written, case included.
    pub fn letter(self) -> char {
        let letter = self.kind.letter();
        if self.absolute {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

/// How a bare token following a command is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// No implicit repeat is possible (start of path, after `z`).
    #[default]
    None,
    Line,
    Cubic,
    Horizontal,
    Vertical,
    Arc,
}

impl Mode {
    /// The command a bare token repeats in this mode.
    pub fn repeats(self) -> Option<CommandKind> {
        match self {
            Mode::None => None,
            Mode::Line => Some(CommandKind::Line),
            Mode::Cubic => Some(CommandKind::Cubic),
            Mode::Horizontal => Some(CommandKind::Horizontal),
            Mode::Vertical => Some(CommandKind::Vertical),
            Mode::Arc => Some(CommandKind::Arc),
        }
    }
}

/// One command's arguments, still in the coordinate space they were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    HorizontalTo(i32),
    VerticalTo(i32),
    ArcTo {
        radii: Point,
        rotation: i32,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// A segment plus how it was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub segment: Segment,
    pub absolute: bool,
    /// `true` when the group carries its own letter in normalized output.
    pub explicit: bool,
}

type ArgumentReader = fn(&mut Tokens<'_>, char) -> Result<Segment, PathError>;

/// Argument readers, one per command kind.
fn argument_reader(kind: CommandKind) -> ArgumentReader {
    match kind {
        CommandKind::Move => |t, c| Ok(Segment::MoveTo(t.read_point(c)?)),
        CommandKind::Line => |t, c| Ok(Segment::LineTo(t.read_point(c)?)),
        CommandKind::Cubic => |t, c| {
            Ok(Segment::CubicTo {
                ctrl1: t.read_point(c)?,
                ctrl2: t.read_point(c)?,
                to: t.read_point(c)?,
            })
        },
        CommandKind::Horizontal => |t, c| Ok(Segment::HorizontalTo(t.read_scalar(c)?)),
        CommandKind::Vertical => |t, c| Ok(Segment::VerticalTo(t.read_scalar(c)?)),
        CommandKind::Arc => |t, c| {
            Ok(Segment::ArcTo {
                radii: t.read_point(c)?,
                rotation: t.read_scalar(c)?,
                large_arc: t.read_flag(c)?,
                sweep: t.read_flag(c)?,
                to: t.read_point(c)?,
            })
        },
        CommandKind::Close => |_, _| Ok(Segment::Close),
    }
}

/// Turns path data into a stream of invocations.
///
/// The stream ends after the first error.
pub struct Parser<'a> {
    tokens: Tokens<'a>,
    mode: Mode,
    /// The most recent command letter, which also decides whether repeats
    /// are absolute.
    last: Option<Command>,
    failed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(d: &'a str) -> Self {
        Parser {
            tokens: Tokens::new(d),
            mode: Mode::None,
            last: None,
            failed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn next_invocation(&mut self, token: &str) -> Result<Invocation, PathError> {
        let position = self.tokens.position();

        if let Some(command) = Command::from_token(token) {
            self.tokens.bump();
            self.mode = command.kind.mode();
            self.last = Some(command);
            let segment = argument_reader(command.kind)(&mut self.tokens, command.letter())?;
            return Ok(Invocation {
                segment,
                absolute: command.absolute,
                explicit: true,
            });
        }

        let unrecognized = || PathError::UnrecognizedCommand {
            token: token.to_string(),
            position,
        };
        if token.starts_with(|c: char| c.is_alphabetic()) {
            return Err(unrecognized());
        }
        let (Some(kind), Some(last)) = (self.mode.repeats(), self.last) else {
            return Err(unrecognized());
        };

        let segment = argument_reader(kind)(&mut self.tokens, last.letter())?;
        Ok(Invocation {
            segment,
            absolute: last.absolute,
            // Pairs after a move are line-tos and are written as such.
            explicit: last.kind == CommandKind::Move,
        })
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Invocation, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.tokens.peek()?;
        let result = self.next_invocation(token);
        self.failed = result.is_err();
        Some(result)
    }
}
