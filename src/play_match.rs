//! Self-play between two search settings.
//!
//! Unlike the search itself, games here follow the full passing rule: a side without legal
//! moves passes, and the game ends once both sides have passed in a row. The side with the
//! higher score wins.

use board_game_traits::{Color, GameResult};
use log::{debug, info};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::position::{Position, Square};
use crate::search::{self, SearchSettings};

#[derive(Clone, Debug)]
pub struct GameRecord {
    pub start_position: Position,
    /// Every turn of the game in order, `None` being a pass
    pub moves: Vec<(Color, Option<Square>)>,
    pub final_position: Position,
    pub game_result: GameResult,
}

/// Result of a match, from the first player's perspective
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchScore {
    fn add_game(mut self, game_result: GameResult, first_player: Color) -> Self {
        match (game_result, first_player) {
            (GameResult::Draw, _) => self.draws += 1,
            (GameResult::WhiteWin, Color::White) | (GameResult::BlackWin, Color::Black) => {
                self.wins += 1
            }
            _ => self.losses += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        MatchScore {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            draws: self.draws + other.draws,
        }
    }
}

/// The move `settings` would play for `color`. The search always plays white,
/// so black's moves are searched on the position with colours flipped.
pub fn move_for_side(
    position: &Position,
    color: Color,
    settings: &SearchSettings,
) -> Option<Square> {
    let best_move = match color {
        Color::White => search::best_move(position, settings),
        Color::Black => search::best_move(&position.flip_colors(), settings),
    };
    best_move.map(|(mv, _)| mv)
}

pub fn game_result(position: &Position) -> GameResult {
    match position.score(Color::White).cmp(&position.score(Color::Black)) {
        std::cmp::Ordering::Greater => GameResult::WhiteWin,
        std::cmp::Ordering::Less => GameResult::BlackWin,
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Play one game from `start_position`, white moving first
pub fn play_game(
    start_position: &Position,
    white: &SearchSettings,
    black: &SearchSettings,
) -> GameRecord {
    let mut position = start_position.clone();
    let mut moves = vec![];
    let mut side_to_move = Color::White;
    let mut passes_in_a_row = 0;

    while passes_in_a_row < 2 {
        let settings = match side_to_move {
            Color::White => white,
            Color::Black => black,
        };
        let mv = move_for_side(&position, side_to_move, settings);
        match mv {
            Some(square) => {
                let gained = position.do_move(square, side_to_move);
                debug!("{} plays {}, gaining {}", side_to_move, square, gained);
                passes_in_a_row = 0;
            }
            None => {
                debug!("{} passes", side_to_move);
                passes_in_a_row += 1;
            }
        }
        moves.push((side_to_move, mv));
        side_to_move = !side_to_move;
    }

    let game_result = game_result(&position);
    info!(
        "Game over after {} turns, {} to {}: {:?}",
        moves.len(),
        position.score(Color::White),
        position.score(Color::Black),
        game_result
    );
    GameRecord {
        start_position: start_position.clone(),
        moves,
        final_position: position,
        game_result,
    }
}

/// Play two games from every start position, one with each side moving first,
/// and count the results from `first`'s perspective.
pub fn play_match(
    start_positions: &[Position],
    first: &SearchSettings,
    second: &SearchSettings,
) -> MatchScore {
    #[cfg(feature = "rayon")]
    let start_positions_iter = start_positions.par_iter();
    #[cfg(not(feature = "rayon"))]
    let start_positions_iter = start_positions.iter();

    let scores: Vec<MatchScore> = start_positions_iter
        .map(|start_position| {
            let as_white = play_game(start_position, first, second);
            let as_black = play_game(start_position, second, first);
            MatchScore::default()
                .add_game(as_white.game_result, Color::White)
                .add_game(as_black.game_result, Color::Black)
        })
        .collect();

    scores.into_iter().fold(MatchScore::default(), MatchScore::merge)
}
