//! Whitespace token cursor and the argument readers built on it.

use super::command::Command;
use super::point::{to_coordinate, Point};
use crate::error::PathError;

/// The `d` string split on whitespace, consumed left to right.
pub(crate) struct Tokens<'a> {
    items: Vec<&'a str>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(d: &'a str) -> Self {
        Tokens {
            items: d.split_whitespace().collect(),
            pos: 0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.items.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Index of the next token to be read.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Takes the next token as an argument of `command`.
    ///
    /// Running out of input and running into the next command letter are
    /// the same failure: the command did not get all of its arguments.
    fn argument(&mut self, command: char) -> Result<&'a str, PathError> {
        match self.peek() {
            Some(token) if Command::from_token(token).is_none() => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(PathError::TruncatedInput {
                command,
                position: self.pos,
            }),
        }
    }

    pub(crate) fn read_scalar(&mut self, command: char) -> Result<i32, PathError> {
        let position = self.pos;
        let token = self.argument(command)?;
        parse_number(token).ok_or_else(|| malformed(token, command, position))
    }

    /// Reads a point written either as one `x,y` token or as two bare
    /// numeric tokens.
    pub(crate) fn read_point(&mut self, command: char) -> Result<Point, PathError> {
        let position = self.pos;
        let token = self.argument(command)?;

        if token.contains(',') {
            let mut parts = token.split(',');
            return match (parts.next(), parts.next(), parts.next()) {
                (Some(x), Some(y), None) => match (parse_number(x), parse_number(y)) {
                    (Some(x), Some(y)) => Ok(Point::new(x, y)),
                    _ => Err(malformed(token, command, position)),
                },
                _ => Err(malformed(token, command, position)),
            };
        }

        let x = parse_number(token).ok_or_else(|| malformed(token, command, position))?;
        let y = self.read_scalar(command)?;
        Ok(Point::new(x, y))
    }

    /// Reads an arc flag. Only the literal tokens `0` and `1` are accepted.
    pub(crate) fn read_flag(&mut self, command: char) -> Result<bool, PathError> {
        let position = self.pos;
        match self.argument(command)? {
            "1" => Ok(true),
            "0" => Ok(false),
            token => Err(PathError::MalformedArcFlag {
                token: token.to_string(),
                command,
                position,
            }),
        }
    }
}

fn parse_number(text: &str) -> Option<i32> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(to_coordinate)
}

fn malformed(token: &str, command: char, position: usize) -> PathError {
    PathError::MalformedCoordinate {
        token: token.to_string(),
        command,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_point_comma_pair() {
        let mut tokens = Tokens::new("12.9,-3.5");
        assert_eq!(tokens.read_point('L').unwrap(), Point::new(12, -3));
        assert_eq!(tokens.position(), 1);
    }

    #[test]
    fn test_read_point_bare_pair() {
        let mut tokens = Tokens::new("  7   -8.2 ");
        assert_eq!(tokens.read_point('l').unwrap(), Point::new(7, -8));
        assert!(tokens.peek().is_none());
    }

    #[test]
    fn test_read_point_rejects_extra_component() {
        let mut tokens = Tokens::new("1,2,3");
        assert_eq!(
            tokens.read_point('M'),
            Err(PathError::MalformedCoordinate {
                token: "1,2,3".to_string(),
                command: 'M',
                position: 0,
            })
        );
    }

    #[test]
    fn test_read_point_rejects_missing_component() {
        let mut tokens = Tokens::new("10,");
        assert!(matches!(
            tokens.read_point('m'),
            Err(PathError::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn test_read_point_stops_at_command_letter() {
        let mut tokens = Tokens::new("10 z");
        assert_eq!(
            tokens.read_point('l'),
            Err(PathError::TruncatedInput {
                command: 'l',
                position: 1,
            })
        );
    }

    #[test]
    fn test_read_scalar_rejects_non_finite() {
        let mut tokens = Tokens::new("inf");
        assert!(matches!(
            tokens.read_scalar('h'),
            Err(PathError::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn test_read_flag_literals_only() {
        let mut tokens = Tokens::new("1 0 1.0");
        assert_eq!(tokens.read_flag('a'), Ok(true));
        assert_eq!(tokens.read_flag('a'), Ok(false));
        assert_eq!(
            tokens.read_flag('a'),
            Err(PathError::MalformedArcFlag {
                token: "1.0".to_string(),
                command: 'a',
                position: 2,
            })
        );
    }

    #[test]
    fn test_end_of_input_is_truncation() {
        let mut tokens = Tokens::new("");
        assert!(tokens.is_empty());
        assert_eq!(
            tokens.read_scalar('V'),
            Err(PathError::TruncatedInput {
                command: 'V',
                position: 0,
            })
        );
    }
}
