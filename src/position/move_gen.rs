use board_game_traits::Color;

use super::{Direction, Position, Square};

/// Whether `color` may place a piece on `square`.
///
/// The square must be on the board and empty, and in at least one direction the adjacent
/// square must belong to the opponent, followed by any number of opponent squares and then
/// a square of `color`. A run ending in an empty square or at the edge does not count.
pub fn is_legal(position: &Position, square: Square, color: Color) -> bool {
    if !square.is_on_board(position.rows(), position.cols()) || position[square].is_some() {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|direction| bracketed_run(position, square, color, *direction).is_some())
}

/// Flip the run of opponent pieces bracketed between `square` and another piece of `color`
/// in `direction`, and return the sum of their values.
///
/// If there is no such run, nothing is changed and 0 is returned.
pub fn capture(position: &mut Position, square: Square, color: Color, direction: Direction) -> i32 {
    let Some(run_length) = bracketed_run(position, square, color, direction) else {
        return 0;
    };
    let (rows, cols) = (position.rows(), position.cols());
    (1..=run_length)
        .filter_map(|distance| square.jump_direction(direction, distance, rows, cols))
        .map(|flipped| {
            debug_assert_eq!(position[flipped], Some(!color));
            position[flipped] = Some(color);
            position.value(flipped)
        })
        .sum()
}

/// Length of the run of opponent pieces starting next to `square` in `direction`,
/// if it is terminated by a piece of `color`. Runs of length 0 are never returned.
fn bracketed_run(
    position: &Position,
    square: Square,
    color: Color,
    direction: Direction,
) -> Option<u8> {
    let (rows, cols) = (position.rows(), position.cols());
    let mut length = 0;
    let mut current = square.go_direction(direction, rows, cols)?;
    loop {
        match position[current] {
            Some(owner) if owner == color => return if length > 0 { Some(length) } else { None },
            Some(_) => length += 1,
            None => return None,
        }
        current = current.go_direction(direction, rows, cols)?;
    }
}

pub(super) fn generate_moves(position: &Position, color: Color, moves: &mut Vec<Square>) {
    moves.extend(
        position
            .squares()
            .filter(|square| is_legal(position, *square, color)),
    );
}
