use std::fmt;
use std::ops::Index;

use super::{parse_rows, Square, BLACK_MARKER, WHITE_MARKER};

/// The point value of every square, frozen when the game starts.
///
/// A flipped square keeps scoring its original value, but its marker on the board no longer
/// shows it, so the values are taken from the starting layout once and shared read-only by
/// every position of the game. Squares that were already occupied in the starting layout
/// have value 0.
#[derive(Clone, PartialEq, Eq)]
pub struct ValueMap {
    rows: usize,
    cols: usize,
    values: Box<[u8]>,
}

impl ValueMap {
    /// Read the values from a starting layout, with rows separated by `/` or newlines.
    /// Digits `1`-`9` are unclaimed squares, `O` and `o` are the starting pieces.
    pub fn from_layout(layout: &str) -> Result<Self, pgn_traits::Error> {
        let rows = parse_rows(layout)?;
        let cols = rows[0].chars().count();
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows.iter() {
            for ch in row.chars() {
                values.push(match ch {
                    '1'..='9' => ch as u8 - b'0',
                    WHITE_MARKER | BLACK_MARKER => 0,
                    _ => {
                        return Err(pgn_traits::Error::new_parse_error(format!(
                            "Invalid square '{}' in starting layout",
                            ch
                        )))
                    }
                });
            }
        }
        Ok(ValueMap {
            rows: rows.len(),
            cols,
            values: values.into_boxed_slice(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn value(&self, square: Square) -> u8 {
        self[square]
    }

    /// Sum of all values on the board
    pub fn total(&self) -> i32 {
        self.values.iter().map(|value| *value as i32).sum()
    }
}

impl Index<Square> for ValueMap {
    type Output = u8;

    fn index(&self, square: Square) -> &Self::Output {
        assert!(
            square.is_on_board(self.rows, self.cols),
            "Square {} is outside the {}x{} board",
            square,
            self.rows,
            self.cols
        );
        &self.values[square.index(self.cols)]
    }
}

impl fmt::Debug for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.values.chunks(self.cols) {
            for value in row {
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
