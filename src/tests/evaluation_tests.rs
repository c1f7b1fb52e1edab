use std::sync::Arc;

use crate::evaluation::{evaluate, EvaluationMode, SizeScaling};
use crate::position::{Position, ValueMap};
use crate::tests::{position_on, random_game_positions, VALUES_8X8};

const MODES: [EvaluationMode; 2] = [EvaluationMode::ValueWeighted, EvaluationMode::UnitWeighted];

#[test]
fn empty_board_is_even_test() {
    let position = Position::from_starting_layout(VALUES_8X8).unwrap();
    for mode in MODES {
        assert_eq!(evaluate(&position, mode), 0);
    }
}

#[test]
fn owned_corners_and_edges_test() {
    // White owns the top left corner and both edges next to it,
    // black owns the bottom right corner
    let position = position_on(
        VALUES_8X8,
        "OOO45678/O3456789/34567891/456oo912/5678O123/67891234/78912345/8912345o",
    );
    assert_eq!(evaluate(&position, EvaluationMode::ValueWeighted), -510);
    assert_eq!(evaluate(&position, EvaluationMode::UnitWeighted), 40);
}

#[test]
fn piece_next_to_empty_corner_test() {
    let position = position_on(
        VALUES_8X8,
        "12345678/2O456789/34567891/45678912/56789123/67891234/78912345/89123456",
    );
    assert_eq!(evaluate(&position, EvaluationMode::ValueWeighted), -108);
    assert_eq!(evaluate(&position, EvaluationMode::UnitWeighted), -36);
}

#[test]
fn evaluation_is_antisymmetric_test() {
    for seed in 0..10 {
        for position in random_game_positions(8, 8, seed) {
            let flipped = position.flip_colors();
            for mode in MODES {
                assert_eq!(
                    evaluate(&flipped, mode),
                    -evaluate(&position, mode),
                    "{:?}",
                    position
                );
            }
        }
    }
}

#[test]
fn evaluation_does_not_change_position_test() {
    for position in random_game_positions(10, 10, 3) {
        let before = position.clone();
        for mode in MODES {
            let first = evaluate(&position, mode);
            assert_eq!(evaluate(&position, mode), first);
        }
        assert_eq!(position, before);
    }
}

#[test]
fn unit_weights_match_value_weights_on_uniform_board_test() {
    let ones = Arc::new(ValueMap::from_layout("111111/111111/111111/111111/111111/111111").unwrap());
    for seed in 0..10 {
        for position in random_game_positions(6, 6, seed) {
            let mut uniform = Position::empty(ones.clone());
            for square in position.squares() {
                uniform[square] = position[square];
            }
            assert_eq!(
                evaluate(&uniform, EvaluationMode::ValueWeighted),
                evaluate(&uniform, EvaluationMode::UnitWeighted)
            );
        }
    }
}

#[test]
fn size_scaling_test() {
    assert_eq!(SizeScaling::for_board(8, 8).corner, 6);
    assert_eq!(SizeScaling::for_board(10, 10).corner, 10);
    assert_eq!(SizeScaling::for_board(12, 12).corner, 8);
    assert_eq!(SizeScaling::for_board(6, 8).corner, 8);
    for (rows, cols) in [(8, 8), (10, 10), (12, 12)] {
        let scaling = SizeScaling::for_board(rows, cols);
        assert_eq!(scaling.stability, 12);
        assert_eq!(scaling.frontier, 1);
    }
}
