use crate::path::{
    math::{point, Point},
    CanvasPath, ContextError,
};

extern crate thiserror;

use self::thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo {
        command: char,
        line: i32,
        column: i32,
    },
    #[error(transparent)]
    Context(#[from] ContextError),
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Optionally stop parsing when encountering a provided special character.
    pub stop_at: Option<char>,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions { stop_at: None };

    pub fn with_stop_at(mut self, stop_at: char) -> Self {
        self.stop_at = Some(stop_at);
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// Replays SVG path data as drawing-surface calls.
///
/// # Syntax
///
/// The supported syntax is the SVG path syntax without the elliptic arc commands:
/// `M`, `L`, `H`, `V`, `Q`, `T`, `C`, `S` and `Z` in their absolute (upper case) and
/// relative (lower case) forms. Commands can be repeated implicitly and numbers can be
/// separated by whitespace or commas.
///
/// Relative coordinates are resolved by the parser so the output only receives absolute
/// positions. Horizontal and vertical lines become `line_to` calls, smooth curves
/// receive their reflected control point.
///
/// Every path must start with a move-to command, and a move-to command is also required
/// after each close-path command.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    stop_at: Option<char>,
    current_position: Point,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter, Output>(
        &mut self,
        options: &ParserOptions,
        src: &mut Source<Iter>,
        output: &mut Output,
    ) -> Result<(), ParseError>
    where
        Iter: Iterator<Item = char>,
        Output: CanvasPath,
    {
        self.stop_at = options.stop_at;

        self.parse_path(src, output)
    }

    /// Parses a string with the default options.
    pub fn parse_str(
        &mut self,
        src: &str,
        output: &mut impl CanvasPath,
    ) -> Result<(), ParseError> {
        self.parse(&ParserOptions::DEFAULT, &mut Source::new(src.chars()), output)
    }

    fn parse_path(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
        output: &mut impl CanvasPath,
    ) -> Result<(), ParseError> {
        // A relative move-to at the start of the path is relative to the origin.
        self.current_position = point(0.0, 0.0);
        let mut first_position = point(0.0, 0.0);

        let mut need_start = true;
        let mut prev_cubic_ctrl = None;
        let mut prev_quadratic_ctrl = None;
        let mut implicit_cmd = 'M';

        src.skip_whitespace();

        while !src.finished {
            let mut cmd = src.current;
            let cmd_line = src.line;
            let cmd_col = src.col;

            if self.stop_at == Some(cmd) {
                break;
            }

            if cmd.is_ascii_alphabetic() {
                src.advance_one();
            } else {
                cmd = implicit_cmd;
            }

            // Unknown commands are reported as such below.
            if need_start && "LlHhVvQqTtCcSsZz".contains(cmd) {
                return Err(ParseError::MissingMoveTo {
                    command: cmd,
                    line: cmd_line,
                    column: cmd_col,
                });
            }

            let is_relative = cmd.is_lowercase();

            match cmd {
                'l' | 'L' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    output.line_to(to.x, to.y)?;
                }
                'h' | 'H' => {
                    let mut x = self.parse_number(src)?;
                    if is_relative {
                        x += self.current_position.x;
                    }
                    let to = point(x, self.current_position.y);
                    self.current_position = to;
                    output.line_to(to.x, to.y)?;
                }
                'v' | 'V' => {
                    let mut y = self.parse_number(src)?;
                    if is_relative {
                        y += self.current_position.y;
                    }
                    let to = point(self.current_position.x, y);
                    self.current_position = to;
                    output.line_to(to.x, to.y)?;
                }
                'q' | 'Q' => {
                    let ctrl = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y)?;
                }
                't' | 'T' => {
                    let ctrl = self.get_smooth_ctrl(prev_quadratic_ctrl);
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y)?;
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, src)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.bezier_curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)?;
                }
                's' | 'S' => {
                    let ctrl1 = self.get_smooth_ctrl(prev_cubic_ctrl);
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.bezier_curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)?;
                }
                'm' | 'M' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    first_position = to;
                    output.move_to(to.x, to.y)?;
                    need_start = false;
                }
                'z' | 'Z' => {
                    output.close_path()?;
                    self.current_position = first_position;
                    need_start = true;
                }
                _ => {
                    return Err(ParseError::Command {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
            }

            match cmd {
                'c' | 'C' | 's' | 'S' => {
                    prev_quadratic_ctrl = None;
                }
                'q' | 'Q' | 't' | 'T' => {
                    prev_cubic_ctrl = None;
                }
                _ => {
                    prev_cubic_ctrl = None;
                    prev_quadratic_ctrl = None;
                }
            }

            implicit_cmd = match cmd {
                'm' => 'l',
                'M' => 'L',
                'z' => 'm',
                'Z' => 'M',
                c => c,
            };

            src.skip_whitespace();
        }

        Ok(())
    }

    fn get_smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        if let Some(prev_ctrl) = prev_ctrl {
            self.current_position + (self.current_position - prev_ctrl)
        } else {
            self.current_position
        }
    }

    fn parse_endpoint(
        &mut self,
        is_relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let position = self.parse_point(is_relative, src)?;
        self.current_position = position;

        Ok(position)
    }

    fn parse_point(
        &mut self,
        is_relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let mut x = self.parse_number(src)?;
        let mut y = self.parse_number(src)?;

        if is_relative {
            x += self.current_position.x;
            y += self.current_position.y;
        }

        Ok(point(x, y))
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f64, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        if src.current == '-' {
            self.float_buffer.push('-');
            src.advance_one();
        }

        while src.current.is_ascii_digit() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' {
                self.float_buffer.push('-');
                src.advance_one();
            }

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        match self.float_buffer.parse::<f64>() {
            Ok(val) => Ok(val),
            Err(_) => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

#[cfg(test)]
use crate::path::{Geometry, GeoJsonContext};

#[cfg(test)]
fn parse(src: &str) -> Result<GeoJsonContext, ParseError> {
    let mut context = GeoJsonContext::new();
    PathParser::new().parse_str(src, &mut context)?;

    Ok(context)
}

#[test]
fn empty() {
    assert_eq!(parse("").unwrap().result(), None);
    assert_eq!(parse(" ").unwrap().result(), None);
}

#[test]
fn simple_square() {
    let context = parse("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]],
        })
    );
}

#[test]
fn relative_commands() {
    let context = parse("m 1 1 l 2 0 v 2 h -2 z").unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::Polygon {
            coordinates: vec![vec![[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 3.0], [1.0, 1.0]]],
        })
    );
}

#[test]
fn implicit_polyline() {
    let context = parse("0 0 1 1,2 2 3 3").unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]],
        })
    );
}

#[test]
fn curves() {
    let context = parse("M 0 0 Q 1 1 2 0").unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [0.5, 0.375], [1.5, 0.375], [2.0, 0.0]],
        })
    );

    // The smooth quadratic reflects the previous control point: (3, -1).
    let smooth = parse("M 0 0 Q 1 1 2 0 T 4 0").unwrap();
    let explicit = parse("M 0 0 Q 1 1 2 0 Q 3 -1 4 0").unwrap();
    assert_eq!(smooth.result(), explicit.result());

    let smooth = parse("M 0 0 C 0 1 1 1 1 0 S 2 -1 2 0").unwrap();
    let explicit = parse("M 0 0 C 0 1 1 1 1 0 C 1 -1 2 -1 2 0").unwrap();
    assert_eq!(smooth.result(), explicit.result());

    // Without a previous curve the control point is the current position.
    let smooth = parse("M 0 0 L 1 0 T 2 1").unwrap();
    let explicit = parse("M 0 0 L 1 0 Q 1 0 2 1").unwrap();
    assert_eq!(smooth.result(), explicit.result());
}

#[test]
fn multiple_subpaths() {
    let context = parse("M 0 0 1 0 1 1 Z M 5 5 6 5 6 6 Z").unwrap();

    match context.result() {
        Some(Geometry::MultiPolygon { coordinates }) => assert_eq!(coordinates.len(), 2),
        other => panic!("{:?}", other),
    }

    // A relative move-to after a close is relative to the start of the closed sub-path.
    let context = parse("m 1 1 h 1 z m 1 1 h 1").unwrap();
    let starts: Vec<_> = context.subpaths().map(|p| p[0]).collect();
    assert_eq!(starts, vec![point(1.0, 1.0), point(2.0, 2.0)]);
}

#[test]
fn invalid_cmd() {
    let mut parser = PathParser::new();
    let mut context = GeoJsonContext::new();

    let result = parser.parse_str("x 0 0 0", &mut context).err().unwrap();
    assert_eq!(
        result,
        ParseError::Command {
            command: 'x',
            line: 0,
            column: 0
        }
    );

    let result = parser
        .parse_str("\n M 0 \n0 x 1 1 1", &mut context)
        .err()
        .unwrap();
    assert_eq!(
        result,
        ParseError::Command {
            command: 'x',
            line: 2,
            column: 2
        }
    );
}

#[test]
fn arcs_are_rejected() {
    let result = parse("M 0 0 A 1 1 0 0 1 2 0").err().unwrap();
    assert_eq!(
        result,
        ParseError::Command {
            command: 'A',
            line: 0,
            column: 6
        }
    );
}

#[test]
fn number_01() {
    // Equivalent to "M 0.6 0.5".
    let context = parse("M 0.6.5").unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::LineString {
            coordinates: vec![[0.6, 0.5]],
        })
    );
}

#[test]
fn number_scientific_notation() {
    let context = parse("M 1e-2 -1E3").unwrap();

    assert_eq!(context.current_position(), Some(point(0.01, -1000.0)));
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match parse(src) {
        Err(ParseError::Number { .. }) => true,
        r => {
            println!("{:?}", r.map(|c| c.result()));
            false
        }
    };

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0 +1"));
}

#[test]
fn stop() {
    let options = ParserOptions::DEFAULT.with_stop_at('|');
    let mut parser = PathParser::new();

    let mut parse = |src: &str| {
        let mut context = GeoJsonContext::new();
        parser
            .parse(&options, &mut Source::new(src.chars()), &mut context)
            .map(|_| context.subpath_count())
    };

    assert_eq!(parse("M 0 0 | xxxxxx"), Ok(1));
    assert_eq!(parse("M 0 0| xxxxxx"), Ok(1));
    assert_eq!(parse("| xxxxxx"), Ok(0));
    assert_eq!(parse("    | xxxxxx"), Ok(0));
}

#[test]
fn need_start() {
    match parse("M 0 0 Z L 1 1 2 2 L 3 3 Z M 4 4") {
        Err(ParseError::MissingMoveTo {
            command: 'L',
            line: 0,
            column: 8,
        }) => {}
        res => {
            panic!("{:?}", res.map(|c| c.result()));
        }
    }

    match parse("L 1 1") {
        Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
        res => {
            panic!("{:?}", res.map(|c| c.result()));
        }
    }
}

#[test]
fn context_errors_are_forwarded() {
    // Overflows to infinity.
    let result = parse("M 0 0 L 1e400 0").err().unwrap();

    assert!(matches!(
        result,
        ParseError::Context(ContextError::NonFiniteCoordinate {
            operation: "line_to",
            ..
        })
    ));
}

#[test]
fn exponents() {
    let parse_ok = |src: &str| parse(src).unwrap();

    parse_ok("M 1e-9 0");
    parse_ok("M -1e-9 0");
    parse_ok("M -1e11 0");
    parse_ok("M 1.e-9 1.4e-4z");
    parse_ok("M 1.6e-9 1.4e-4 z");
    parse_ok("M0 1.6e-9L0 1.4e-4");
}
