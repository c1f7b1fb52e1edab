//! The board and the rules of the game.
//!
//! Each square of a `Position` is either empty or owned by one of the two sides. The engine
//! always plays `Color::White`, written `O` in board layouts, and its opponent plays
//! `Color::Black`, written `o`. Empty squares are written as their point value, `1` to `9`.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use board_game_traits::Color;
use rand::Rng;

pub use move_gen::{capture, is_legal};
pub use square::{squares_iterator, Point, Square};
pub use value_map::ValueMap;

mod move_gen;
mod square;
mod value_map;

pub const WHITE_MARKER: char = 'O';
pub const BLACK_MARKER: char = 'o';

/// One of the 8 compass directions a capture can run in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// A board together with both sides' running scores.
///
/// Positions are cheap to clone: the point values are shared between all clones,
/// only the square owners and the two scores are copied.
#[derive(Clone, PartialEq)]
pub struct Position {
    rows: usize,
    cols: usize,
    cells: Box<[Option<Color>]>,
    values: Arc<ValueMap>,
    white_score: i32,
    black_score: i32,
}

impl Position {
    /// An empty board with the given point values
    pub fn empty(values: Arc<ValueMap>) -> Self {
        Position {
            rows: values.rows(),
            cols: values.cols(),
            cells: vec![None; values.rows() * values.cols()].into_boxed_slice(),
            values,
            white_score: 0,
            black_score: 0,
        }
    }

    /// Read a game's starting layout, deriving the point values from it. Both scores start at 0.
    pub fn from_starting_layout(layout: &str) -> Result<Self, pgn_traits::Error> {
        let values = Arc::new(ValueMap::from_layout(layout)?);
        Self::from_layout(values, layout)
    }

    /// Read a layout of a game in progress. Unclaimed squares must show the same value
    /// as in `values`. Both scores are set to 0, use `with_scores` to set them.
    pub fn from_layout(values: Arc<ValueMap>, layout: &str) -> Result<Self, pgn_traits::Error> {
        let rows = parse_rows(layout)?;
        let cols = rows[0].chars().count();
        if rows.len() != values.rows() || cols != values.cols() {
            return Err(pgn_traits::Error::new_parse_error(format!(
                "Layout is {}x{}, but the game is played on {}x{}",
                rows.len(),
                cols,
                values.rows(),
                values.cols()
            )));
        }
        let mut position = Position::empty(values);
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, ch) in row.chars().enumerate() {
                let square = Square::new(row_index as u8, col_index as u8);
                let cell = match ch {
                    WHITE_MARKER => Some(Color::White),
                    BLACK_MARKER => Some(Color::Black),
                    '1'..='9' if ch as u8 - b'0' == position.values[square] => None,
                    '1'..='9' => {
                        return Err(pgn_traits::Error::new_parse_error(format!(
                            "Square {} shows value {}, but its starting value was {}",
                            square, ch, position.values[square]
                        )))
                    }
                    _ => {
                        return Err(pgn_traits::Error::new_parse_error(format!(
                            "Invalid square '{}' at {}",
                            ch, square
                        )))
                    }
                };
                position[square] = cell;
            }
        }
        Ok(position)
    }

    pub fn with_scores(mut self, white_score: i32, black_score: i32) -> Self {
        self.white_score = white_score;
        self.black_score = black_score;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn values(&self) -> &Arc<ValueMap> {
        &self.values
    }

    /// The frozen point value of a square, regardless of who owns it
    pub fn value(&self, square: Square) -> i32 {
        self.values[square] as i32
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> {
        squares_iterator(self.rows, self.cols)
    }

    pub fn score(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    fn score_mut(&mut self, color: Color) -> &mut i32 {
        match color {
            Color::White => &mut self.white_score,
            Color::Black => &mut self.black_score,
        }
    }

    /// White's score minus black's score
    pub fn score_difference(&self) -> i32 {
        self.white_score - self.black_score
    }

    /// The scores each side would have if every owned square were counted at its point value.
    /// Matches the running scores of any position reached from a starting layout through `do_move`.
    pub fn scores_from_scratch(&self) -> (i32, i32) {
        self.squares()
            .fold((0, 0), |(white, black), square| match self[square] {
                Some(Color::White) => (white + self.value(square), black),
                Some(Color::Black) => (white, black + self.value(square)),
                None => (white, black),
            })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Place a piece for `color` on `square`, flipping every bracketed run of opponent pieces.
    ///
    /// The mover gains the placed square's value plus the value of every flipped square,
    /// and the opponent loses the flipped value. Returns the total gained.
    /// The move is assumed to be legal: an empty square is asserted, bracketing is not checked.
    pub fn do_move(&mut self, square: Square, color: Color) -> i32 {
        assert!(
            self[square].is_none(),
            "Tried to place {} on occupied square {}\n{:?}",
            color,
            square,
            self
        );
        self[square] = Some(color);

        let captured: i32 = Direction::ALL
            .iter()
            .map(|direction| capture(self, square, color, *direction))
            .sum();
        let placed = self.value(square);

        *self.score_mut(color) += captured + placed;
        *self.score_mut(!color) -= captured;
        captured + placed
    }

    /// All legal moves for `color`, in row-major order
    pub fn generate_moves(&self, color: Color, moves: &mut Vec<Square>) {
        move_gen::generate_moves(self, color, moves)
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.squares().any(|square| is_legal(self, square, color))
    }

    /// The same board seen from the other side: every owner and the two scores are swapped
    pub fn flip_colors(&self) -> Position {
        let mut new_position = self.clone();
        for cell in new_position.cells.iter_mut() {
            *cell = cell.map(|color| !color);
        }
        mem::swap(&mut new_position.white_score, &mut new_position.black_score);
        new_position
    }

    /// Number of squares owned by each side, as (white, black)
    pub fn count_pieces(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(white, black), cell| match cell {
            Some(Color::White) => (white + 1, black),
            Some(Color::Black) => (white, black + 1),
            None => (white, black),
        })
    }
}

impl Index<Square> for Position {
    type Output = Option<Color>;

    fn index(&self, square: Square) -> &Self::Output {
        assert!(
            square.is_on_board(self.rows, self.cols),
            "Square {} is outside the {}x{} board",
            square,
            self.rows,
            self.cols
        );
        &self.cells[square.index(self.cols)]
    }
}

impl IndexMut<Square> for Position {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        assert!(
            square.is_on_board(self.rows, self.cols),
            "Square {} is outside the {}x{} board",
            square,
            self.rows,
            self.cols
        );
        &mut self.cells[square.index(self.cols)]
    }
}

/// Writes the board in the same format `from_layout` reads, one row per line
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                let square = Square::new(row as u8, col as u8);
                match self[square] {
                    Some(Color::White) => write!(f, "{}", WHITE_MARKER)?,
                    Some(Color::Black) => write!(f, "{}", BLACK_MARKER)?,
                    None => write!(f, "{}", self.values[square])?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self)?;
        writeln!(
            f,
            "Scores: {} (white), {} (black).",
            self.white_score, self.black_score
        )
    }
}

/// Split a layout into its rows, checking that it is rectangular and fits in `Square`'s coordinates
pub(crate) fn parse_rows(layout: &str) -> Result<Vec<&str>, pgn_traits::Error> {
    let rows: Vec<&str> = layout
        .split(|ch| ch == '/' || ch == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(pgn_traits::Error::new_parse_error(
            "Board layout is empty".to_string(),
        ));
    }
    let cols = rows[0].chars().count();
    if let Some(row) = rows.iter().find(|row| row.chars().count() != cols) {
        return Err(pgn_traits::Error::new_parse_error(format!(
            "Row \"{}\" has {} squares, expected {}",
            row,
            row.chars().count(),
            cols
        )));
    }
    if rows.len() > u8::MAX as usize || cols > u8::MAX as usize {
        return Err(pgn_traits::Error::new_parse_error(format!(
            "Board of {}x{} is too large",
            rows.len(),
            cols
        )));
    }
    Ok(rows)
}

/// A starting layout with random point values and the four centre squares occupied,
/// white on the main diagonal. Both dimensions must be even and at least 2.
pub fn start_layout<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> String {
    assert!(
        rows >= 2 && cols >= 2 && rows % 2 == 0 && cols % 2 == 0,
        "Cannot make a starting layout for {}x{}",
        rows,
        cols
    );
    let (mid_row, mid_col) = (rows / 2, cols / 2);
    let mut layout = String::with_capacity(rows * (cols + 1));
    for row in 0..rows {
        if row > 0 {
            layout.push('/');
        }
        for col in 0..cols {
            let ch = match (row as isize - mid_row as isize, col as isize - mid_col as isize) {
                (-1, -1) | (0, 0) => WHITE_MARKER,
                (-1, 0) | (0, -1) => BLACK_MARKER,
                _ => (b'0' + rng.gen_range(1..=9)) as char,
            };
            layout.push(ch);
        }
    }
    layout
}
