//! A very simple implementation of the minmax search algorithm, without any pruning.
//! The engine does not use it, it is here as a reference for testing the alpha-beta search.

use crate::evaluation::evaluate;
use crate::position::{Position, Square};
use crate::search::{NoMovePolicy, Role, SearchSettings};

/// Minimax value of `position` searched to `depth` plies, with `role` to move.
/// Follows the same rules as the alpha-beta search for depth and positions without moves.
pub fn minmax(position: &Position, depth: u16, role: Role, settings: &SearchSettings) -> i32 {
    if depth == 0 {
        return evaluate(position, settings.mode());
    }
    let mut moves = vec![];
    position.generate_moves(role.color(), &mut moves);
    if moves.is_empty() {
        return match settings.policy() {
            NoMovePolicy::Pass if position.has_legal_move(role.opposite().color()) => {
                minmax(position, depth - 1, role.opposite(), settings)
            }
            _ => evaluate(position, settings.mode()),
        };
    }

    let child_evaluations = moves.into_iter().map(|mv| {
        let mut child = position.clone();
        child.do_move(mv, role.color());
        minmax(&child, depth - 1, role.opposite(), settings)
    });
    match role {
        Role::Maximizing => child_evaluations.max(),
        Role::Minimizing => child_evaluations.min(),
    }
    .unwrap_or_else(|| evaluate(position, settings.mode()))
}

/// White's best move by plain minimax, with the same root rules as `search::best_move`:
/// every root move is searched `settings` depth deep, and the first of the best moves wins.
pub fn minmax_best_move(position: &Position, settings: &SearchSettings) -> Option<(Square, i32)> {
    let mut moves = vec![];
    position.generate_moves(Role::Maximizing.color(), &mut moves);
    let mut best: Option<(Square, i32)> = None;
    for mv in moves {
        let mut child = position.clone();
        child.do_move(mv, Role::Maximizing.color());
        let value = minmax(&child, settings.search_depth(), Role::Minimizing, settings);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }
    best
}
