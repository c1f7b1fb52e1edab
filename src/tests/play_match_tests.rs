use board_game_traits::{Color, GameResult};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::play_match::{self, MatchScore};
use crate::position::{self, Position};
use crate::search::SearchSettings;

fn start_positions(rows: usize, cols: usize, count: usize, seed: u64) -> Vec<Position> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Position::from_starting_layout(&position::start_layout(rows, cols, &mut rng)).unwrap()
        })
        .collect()
}

#[test]
fn game_plays_to_the_end_test() {
    let settings = SearchSettings::default().depth(1);
    for start_position in start_positions(6, 6, 4, 1) {
        let game = play_match::play_game(&start_position, &settings, &settings);
        let position = &game.final_position;

        assert!(!position.has_legal_move(Color::White));
        assert!(!position.has_legal_move(Color::Black));
        assert_eq!(
            (position.score(Color::White), position.score(Color::Black)),
            position.scores_from_scratch()
        );
        assert_eq!(game.start_position, start_position);

        // The game ends on two passes in a row, and never before
        let passes: Vec<bool> = game.moves.iter().map(|(_, mv)| mv.is_none()).collect();
        assert!(passes.ends_with(&[true, true]));
        assert!(!passes[..passes.len() - 2].windows(2).any(|pair| pair == [true, true]));
    }
}

#[test]
fn sides_alternate_test() {
    let settings = SearchSettings::default().depth(1);
    let start_position = &start_positions(6, 6, 1, 2)[0];
    let game = play_match::play_game(start_position, &settings, &settings);
    assert_eq!(game.moves[0].0, Color::White);
    for pair in game.moves.windows(2) {
        assert_eq!(pair[1].0, !pair[0].0);
    }
}

#[test]
fn replaying_moves_gives_final_position_test() {
    let settings = SearchSettings::default().depth(2);
    let start_position = &start_positions(6, 6, 1, 3)[0];
    let game = play_match::play_game(start_position, &settings, &settings);

    let mut position = game.start_position.clone();
    for (color, mv) in game.moves.iter() {
        if let Some(square) = mv {
            assert!(position::is_legal(&position, *square, *color));
            position.do_move(*square, *color);
        }
    }
    assert_eq!(position, game.final_position);
}

#[test]
fn game_result_follows_scores_test() {
    let settings = SearchSettings::default().depth(1);
    for start_position in start_positions(6, 6, 4, 4) {
        let game = play_match::play_game(&start_position, &settings, &settings);
        let position = &game.final_position;
        let expected = match position.score(Color::White) - position.score(Color::Black) {
            difference if difference > 0 => GameResult::WhiteWin,
            difference if difference < 0 => GameResult::BlackWin,
            _ => GameResult::Draw,
        };
        assert_eq!(game.game_result, expected);
        assert_eq!(play_match::game_result(position), expected);
    }
}

#[test]
fn black_moves_are_legal_test() {
    let settings = SearchSettings::default().depth(2);
    for start_position in start_positions(8, 8, 2, 5) {
        let mut position = start_position.clone();
        let white_move = play_match::move_for_side(&position, Color::White, &settings).unwrap();
        position.do_move(white_move, Color::White);
        let black_move = play_match::move_for_side(&position, Color::Black, &settings).unwrap();
        assert!(position::is_legal(&position, black_move, Color::Black));
    }
}

#[test]
fn match_counts_every_game_test() {
    let first = SearchSettings::default().depth(1);
    let second = SearchSettings::default().depth(0);
    let positions = start_positions(6, 6, 3, 6);
    let MatchScore {
        wins,
        losses,
        draws,
    } = play_match::play_match(&positions, &first, &second);
    assert_eq!(wins + losses + draws, 6);
}

#[test]
fn mirror_match_is_even_test() {
    let settings = SearchSettings::default().depth(1);
    let positions = start_positions(6, 6, 2, 7);
    let score = play_match::play_match(&positions, &settings, &settings);
    // With the same settings on both sides, each pair of games from one start
    // position is the same game twice
    assert_eq!(score.wins, score.losses);
}
