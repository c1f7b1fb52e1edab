#[cfg(test)]
mod evaluation_tests;
#[cfg(test)]
mod move_gen_tests;
#[cfg(test)]
mod play_match_tests;

#[cfg(test)]
use crate::position::{self, Position};
#[cfg(test)]
use board_game_traits::Color;
#[cfg(test)]
use rand::rngs::SmallRng;
#[cfg(test)]
use rand::seq::SliceRandom;
#[cfg(test)]
use rand::SeedableRng;

/// An 8x8 board without pieces, where square (row, col) is worth (row + col) % 9 + 1
#[cfg(test)]
const VALUES_8X8: &str =
    "12345678/23456789/34567891/45678912/56789123/67891234/78912345/89123456";

/// The usual 8x8 start with every square worth 1
#[cfg(test)]
const UNIFORM_START_8X8: &str =
    "11111111/11111111/11111111/111Oo111/111oO111/11111111/11111111/11111111";

/// Read a layout of a game in progress, with the point values of `values_layout`
#[cfg(test)]
fn position_on(values_layout: &str, layout: &str) -> Position {
    let values = Position::from_starting_layout(values_layout)
        .unwrap()
        .values()
        .clone();
    Position::from_layout(values, layout).unwrap()
}

/// Every position of a game with random moves from a random starting layout,
/// including the start and the final position
#[cfg(test)]
fn random_game_positions(rows: usize, cols: usize, seed: u64) -> Vec<Position> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let layout = position::start_layout(rows, cols, &mut rng);
    let mut position = Position::from_starting_layout(&layout).unwrap();
    let mut positions = vec![position.clone()];
    let mut side_to_move = Color::White;
    let mut moves = vec![];
    let mut passes_in_a_row = 0;

    while passes_in_a_row < 2 {
        moves.clear();
        position.generate_moves(side_to_move, &mut moves);
        match moves.choose(&mut rng) {
            Some(mv) => {
                position.do_move(*mv, side_to_move);
                positions.push(position.clone());
                passes_in_a_row = 0;
            }
            None => passes_in_a_row += 1,
        }
        side_to_move = !side_to_move;
    }
    positions
}
