//! Static evaluation of a position, from white's perspective.
//!
//! Every owned square gets a signed weight, positive for white and negative for black, and
//! three signals are computed from those weights: corner safety, edge stability from owned
//! corners, and a frontier penalty for pieces touching other pieces.

use board_game_traits::Color;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::{Position, Square};

/// How much an owned square weighs in the static evaluation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationMode {
    /// Each square weighs its point value
    #[default]
    ValueWeighted,
    /// Each square weighs 1, regardless of its point value
    UnitWeighted,
}

/// Multipliers for the evaluation terms, calibrated per board size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeScaling {
    pub corner: i32,
    pub stability: i32,
    pub frontier: i32,
}

impl SizeScaling {
    /// Square boards of side 8, 10 and 12 have their own corner multipliers.
    /// Every other shape uses the 12x12 values.
    pub fn for_board(rows: usize, cols: usize) -> Self {
        let corner = match (rows, cols) {
            (8, 8) => 6,
            (10, 10) => 10,
            _ => 8,
        };
        SizeScaling {
            corner,
            stability: 12,
            frontier: 1,
        }
    }
}

const EMPTY_CORNER_WEIGHTS: [((i32, i32), i32); 7] = [
    ((0, 1), -3),
    ((1, 0), -3),
    ((1, 1), -6),
    ((0, 2), 4),
    ((2, 0), 4),
    ((1, 2), 2),
    ((2, 1), 2),
];

const OWNED_CORNER_BONUS: i32 = 15;

/// Signed weights of every square of a position
struct Weights {
    rows: usize,
    cols: usize,
    weights: Vec<i32>,
}

impl Weights {
    fn new(position: &Position, mode: EvaluationMode) -> Self {
        let weights = position
            .squares()
            .map(|square| {
                let weight = match mode {
                    EvaluationMode::ValueWeighted => position.value(square),
                    EvaluationMode::UnitWeighted => 1,
                };
                match position[square] {
                    Some(Color::White) => weight,
                    Some(Color::Black) => -weight,
                    None => 0,
                }
            })
            .collect();
        Weights {
            rows: position.rows(),
            cols: position.cols(),
            weights,
        }
    }

    /// Weight at (row, col), or 0 outside the board
    fn get(&self, row: i32, col: i32) -> i32 {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            0
        } else {
            self.weights[row as usize * self.cols + col as usize]
        }
    }
}

/// Corner and stability terms, returned separately so they can be scaled separately.
///
/// An empty corner rewards or punishes the pieces around it: owning the squares next to an
/// empty corner tends to give it away. An owned corner gives a large bonus, plus a bonus for
/// every piece in the unbroken runs of the corner owner's pieces along both edges.
fn corner_terms(weights: &Weights) -> (i32, i32) {
    let last_row = weights.rows as i32 - 1;
    let last_col = weights.cols as i32 - 1;
    let corners = [
        (0, 0, 1, 1),
        (0, last_col, 1, -1),
        (last_row, 0, -1, 1),
        (last_row, last_col, -1, -1),
    ];

    let mut corner = 0;
    let mut stability = 0;
    for (corner_row, corner_col, d_row, d_col) in corners {
        let corner_weight = weights.get(corner_row, corner_col);
        if corner_weight == 0 {
            for ((row_offset, col_offset), factor) in EMPTY_CORNER_WEIGHTS {
                corner += factor
                    * weights.get(
                        corner_row + row_offset * d_row,
                        corner_col + col_offset * d_col,
                    );
            }
        } else {
            corner += OWNED_CORNER_BONUS * corner_weight;

            let same_owner = |weight: i32| weight.signum() == corner_weight.signum();
            let mut row = corner_row;
            while (0..=last_row).contains(&row) && same_owner(weights.get(row, corner_col)) {
                stability += corner_weight;
                row += d_row;
            }
            let mut col = corner_col;
            while (0..=last_col).contains(&col) && same_owner(weights.get(corner_row, col)) {
                stability += corner_weight;
                col += d_col;
            }
        }
    }
    (corner, stability)
}

/// Minus the sum of the weights of every interior piece with at least one occupied neighbour
fn frontier_term(weights: &Weights) -> i32 {
    let mut frontier = 0;
    for row in 1..weights.rows.saturating_sub(1) {
        for col in 1..weights.cols.saturating_sub(1) {
            let weight = weights.weights[row * weights.cols + col];
            if weight != 0 && is_frontier(weights, Square::new(row as u8, col as u8)) {
                frontier -= weight;
            }
        }
    }
    frontier
}

fn is_frontier(weights: &Weights, square: Square) -> bool {
    square
        .neighbours(weights.rows, weights.cols)
        .iter()
        .any(|neighbour| weights.get(neighbour.row() as i32, neighbour.col() as i32) != 0)
}

/// Static evaluation of a position. Positive values favour white.
///
/// Squares whose point value is 0, such as the starting pieces, weigh nothing in
/// `ValueWeighted` mode and are treated like empty squares by every term.
pub fn evaluate(position: &Position, mode: EvaluationMode) -> i32 {
    let weights = Weights::new(position, mode);
    let scaling = SizeScaling::for_board(position.rows(), position.cols());
    let (corner, stability) = corner_terms(&weights);
    let frontier = frontier_term(&weights);

    scaling.corner * corner + scaling.stability * stability + scaling.frontier * 4 * frontier
}
