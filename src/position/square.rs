use std::fmt;

use arrayvec::ArrayVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Direction::{self, *};

/// A location on the board, as a zero-based (row, column) pair. Can be used to index a `Position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the square in a row-major array with `cols` columns
    pub const fn index(self, cols: usize) -> usize {
        self.row as usize * cols + self.col as usize
    }

    pub const fn from_index(index: usize, cols: usize) -> Self {
        Square {
            row: (index / cols) as u8,
            col: (index % cols) as u8,
        }
    }

    pub const fn is_on_board(self, rows: usize, cols: usize) -> bool {
        (self.row as usize) < rows && (self.col as usize) < cols
    }

    pub fn go_direction(self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        self.jump_direction(direction, 1, rows, cols)
    }

    /// The square `len` steps away in `direction`, or `None` if that would leave the board
    pub fn jump_direction(
        self,
        direction: Direction,
        len: u8,
        rows: usize,
        cols: usize,
    ) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row as i32 + d_row * len as i32;
        let col = self.col as i32 + d_col * len as i32;
        if row < 0 || col < 0 || row >= rows as i32 || col >= cols as i32 {
            None
        } else {
            Some(Square::new(row as u8, col as u8))
        }
    }

    /// All on-board squares adjacent to this one, including diagonally
    pub fn neighbours(self, rows: usize, cols: usize) -> ArrayVec<Square, 8> {
        Direction::ALL
            .iter()
            .filter_map(|direction| self.go_direction(*direction, rows, cols))
            .collect()
    }

    pub fn parse_square(input: &str) -> Result<Square, pgn_traits::Error> {
        let mut words = input.split(|ch: char| ch == ',' || ch.is_whitespace());
        let mut next_coordinate = || -> Result<u8, pgn_traits::Error> {
            words
                .by_ref()
                .find(|word| !word.is_empty())
                .and_then(|word| word.parse().ok())
                .ok_or_else(|| {
                    pgn_traits::Error::new_parse_error(format!(
                        "Couldn't parse square \"{}\"",
                        input
                    ))
                })
        };
        let row = next_coordinate()?;
        let col = next_coordinate()?;
        Ok(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
    ];

    /// (row, column) step of one move in this direction. North is towards row 0.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            North => (-1, 0),
            NorthEast => (-1, 1),
            East => (0, 1),
            SouthEast => (1, 1),
            South => (1, 0),
            SouthWest => (1, -1),
            West => (0, -1),
            NorthWest => (-1, -1),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            North => South,
            NorthEast => SouthWest,
            East => West,
            SouthEast => NorthWest,
            South => North,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
        }
    }
}

/// Iterates over all squares of a `rows` x `cols` board, in row-major order.
pub fn squares_iterator(rows: usize, cols: usize) -> impl Iterator<Item = Square> {
    (0..rows * cols).map(move |i| Square::from_index(i, cols))
}

/// The coordinate pair handed back to a game harness. `Point::NONE` means no legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const NONE: Point = Point { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn to_square(self) -> Option<Square> {
        if self.x < 0 || self.y < 0 || self.x > u8::MAX as i32 || self.y > u8::MAX as i32 {
            None
        } else {
            Some(Square::new(self.x as u8, self.y as u8))
        }
    }
}

impl From<Option<Square>> for Point {
    fn from(square: Option<Square>) -> Self {
        match square {
            Some(square) => Point::new(square.row() as i32, square.col() as i32),
            None => Point::NONE,
        }
    }
}

impl From<Square> for Point {
    fn from(square: Square) -> Self {
        Some(square).into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
