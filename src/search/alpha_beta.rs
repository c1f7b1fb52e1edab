use board_game_traits::Color;

use super::{NoMovePolicy, Role, SearchSettings, SearchStats};
use crate::evaluation::evaluate;
use crate::position::Position;

/// Alpha-beta search of `position` to `depth` plies, with `role` to move.
///
/// Returns the minimax value of the position if it lies inside the `alpha`..`beta` window,
/// otherwise the window bound it was cut off at.
pub fn alpha_beta(
    position: &Position,
    depth: u16,
    alpha: i32,
    beta: i32,
    role: Role,
    settings: &SearchSettings,
) -> i32 {
    AlphaBeta::new(settings).search(position, depth, alpha, beta, role)
}

pub(super) struct AlphaBeta<'a> {
    settings: &'a SearchSettings,
    pub stats: SearchStats,
}

impl<'a> AlphaBeta<'a> {
    pub fn new(settings: &'a SearchSettings) -> Self {
        AlphaBeta {
            settings,
            stats: SearchStats::default(),
        }
    }

    fn evaluate(&mut self, position: &Position) -> i32 {
        self.stats.leaves += 1;
        evaluate(position, self.settings.mode())
    }

    pub fn search(
        &mut self,
        position: &Position,
        depth: u16,
        mut alpha: i32,
        mut beta: i32,
        role: Role,
    ) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 {
            return self.evaluate(position);
        }

        let mut moves = vec![];
        position.generate_moves(role.color(), &mut moves);

        if moves.is_empty() {
            return match self.settings.policy() {
                NoMovePolicy::Evaluate => self.evaluate(position),
                NoMovePolicy::Pass if !position.has_legal_move(role.opposite().color()) => {
                    self.evaluate(position)
                }
                NoMovePolicy::Pass => {
                    self.search(position, depth - 1, alpha, beta, role.opposite())
                }
            };
        }

        // Every child is searched on its own copy of the position
        match role {
            Role::Maximizing => {
                for mv in moves {
                    let mut child = position.clone();
                    child.do_move(mv, Color::White);
                    let value = self.search(&child, depth - 1, alpha, beta, Role::Minimizing);
                    alpha = alpha.max(value);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        return beta;
                    }
                }
                alpha
            }
            Role::Minimizing => {
                for mv in moves {
                    let mut child = position.clone();
                    child.do_move(mv, Color::Black);
                    let value = self.search(&child, depth - 1, alpha, beta, Role::Maximizing);
                    beta = beta.min(value);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        return alpha;
                    }
                }
                beta
            }
        }
    }
}
