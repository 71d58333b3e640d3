//! Boards drawn as text.
//!
//! A [`Layout`] is parsed from lines of equal width where `#` is a barrier,
//! `.` an empty cell, `S` the start and `E` the end:
//!
//! ```text
//! ..........
//! .S..#.....
//! ....#..E..
//! ..........
//! ```
//!
//! Each character is one cell, so a layout becomes a board with tile size 1.

use std::fmt;

use pathviz_core::Point;
use pathviz_paths::{Board, BoardConfig, BoardError};

const BARRIER: char = '#';
const EMPTY: char = '.';
const START: char = 'S';
const END: char = 'E';

/// A parsed text board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: Point,
    barriers: Vec<Point>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Blank lines around the drawing are ignored, as is a trailing `'\r'`
    /// on each line. Lines themselves are not trimmed.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut layout = Self {
            size: Point::ZERO,
            barriers: Vec::new(),
            start: None,
            end: None,
        };
        let mut width: Option<i32> = None;
        let mut y: i32 = 0;

        for line in s.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                match ch {
                    EMPTY => {}
                    BARRIER => layout.barriers.push(pos),
                    START => layout.place_marker(ch, pos)?,
                    END => layout.place_marker(ch, pos)?,
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            y += 1;
        }

        layout.size = Point::new(width.unwrap_or(0), y);
        Ok(layout)
    }

    fn place_marker(&mut self, ch: char, pos: Point) -> Result<(), LayoutError> {
        let slot = if ch == START {
            &mut self.start
        } else {
            &mut self.end
        };
        if slot.is_some() {
            return Err(LayoutError::DuplicateMarker { ch, pos });
        }
        *slot = Some(pos);
        Ok(())
    }

    /// Return the (cols, rows) size of the layout.
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn barriers(&self) -> &[Point] {
        &self.barriers
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Build a board of the layout's size and draw the layout on it.
    ///
    /// With `border`, barriers drawn on the outer ring are redundant and
    /// skipped with a warning; a marker on the ring is an error.
    pub fn to_board(&self, border: bool) -> Result<Board, BoardError> {
        let mut board = Board::new(BoardConfig {
            start: self.start,
            end: self.end,
            border,
            ..BoardConfig::with_cells(self.size.x, self.size.y)
        })?;
        for &p in &self.barriers {
            if board.obstacles().is_border(p) {
                log::warn!("layout barrier at {p} lies on the border, skipped");
                continue;
            }
            board.add_barrier(p)?;
        }
        Ok(board)
    }
}

/// Errors that can occur when parsing a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Nothing to parse.
    Empty,
    /// A line is not as wide as the first one.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A character other than `#`, `.`, `S` or `E`.
    InvalidRune { ch: char, pos: Point },
    /// A second `S` or `E`.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout: invalid character {ch:?} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: second {ch:?} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
