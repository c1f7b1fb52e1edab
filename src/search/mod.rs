//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The engine always plays white, and white is always the maximizing side. Every legal root
//! move is played out and the opponent's best replies are searched to a fixed depth. The
//! root move with the strictly highest value wins, so among equal moves the first one in
//! row-major order is picked.

use std::sync::Arc;

use board_game_traits::Color;
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::evaluation::EvaluationMode;
use crate::position::{Point, Position, Square, ValueMap};

pub use alpha_beta::alpha_beta;
use alpha_beta::AlphaBeta;

mod alpha_beta;

pub const DEFAULT_DEPTH: u16 = 6;

/// The side whose moves are being searched at a node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// The colour playing this role. The engine's own side, white, is always maximizing.
    pub fn color(self) -> Color {
        match self {
            Role::Maximizing => Color::White,
            Role::Minimizing => Color::Black,
        }
    }
}

/// What the search does at a node where the side to move has no legal moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoMovePolicy {
    /// Stop and return the static evaluation of the position
    #[default]
    Evaluate,
    /// Hand the move to the other side, using up one ply of depth.
    /// If neither side can move, the static evaluation is returned.
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSettings {
    depth: u16,
    evaluation_mode: EvaluationMode,
    no_move_policy: NoMovePolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            depth: DEFAULT_DEPTH,
            evaluation_mode: EvaluationMode::default(),
            no_move_policy: NoMovePolicy::default(),
        }
    }
}

impl SearchSettings {
    /// Number of plies searched below each root move. At 0, root moves are compared
    /// by the static evaluation of the position right after them.
    pub fn depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    pub fn evaluation_mode(mut self, evaluation_mode: EvaluationMode) -> Self {
        self.evaluation_mode = evaluation_mode;
        self
    }

    pub fn no_move_policy(mut self, no_move_policy: NoMovePolicy) -> Self {
        self.no_move_policy = no_move_policy;
        self
    }

    pub fn search_depth(&self) -> u16 {
        self.depth
    }

    pub fn mode(&self) -> EvaluationMode {
        self.evaluation_mode
    }

    pub fn policy(&self) -> NoMovePolicy {
        self.no_move_policy
    }
}

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root moves
    pub nodes: u64,
    /// Nodes scored with the static evaluation
    pub leaves: u64,
    /// Nodes where the remaining moves were pruned
    pub cutoffs: u64,
}

/// Pick white's best move, and its value. Returns `None` if white has no legal moves.
pub fn best_move(position: &Position, settings: &SearchSettings) -> Option<(Square, i32)> {
    best_move_with_stats(position, settings).0
}

pub fn best_move_with_stats(
    position: &Position,
    settings: &SearchSettings,
) -> (Option<(Square, i32)>, SearchStats) {
    let mut moves = vec![];
    position.generate_moves(Color::White, &mut moves);

    let mut searcher = AlphaBeta::new(settings);
    let mut best: Option<(Square, i32)> = None;

    for mv in moves {
        let mut child = position.clone();
        child.do_move(mv, Color::White);
        let value = searcher.search(&child, settings.depth, i32::MIN, i32::MAX, Role::Minimizing);
        trace!("Root move {}: {}", mv, value);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }

    match best {
        Some((mv, value)) => debug!(
            "Searched {} nodes ({} leaves, {} cutoffs) to depth {}, best move {} with value {}",
            searcher.stats.nodes,
            searcher.stats.leaves,
            searcher.stats.cutoffs,
            settings.depth,
            mv,
            value
        ),
        None => debug!("No legal moves"),
    }
    (best, searcher.stats)
}

/// The entry point for a game harness.
///
/// Created once per game from the starting layout, which fixes the point value of every square.
/// Afterwards, `place` is called with the current position whenever it is the engine's turn.
#[derive(Clone, Debug)]
pub struct Engine {
    start_position: Position,
    settings: SearchSettings,
}

impl Engine {
    pub fn initialize(starting_layout: &str) -> Result<Self, pgn_traits::Error> {
        Ok(Engine {
            start_position: Position::from_starting_layout(starting_layout)?,
            settings: SearchSettings::default(),
        })
    }

    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn values(&self) -> &Arc<ValueMap> {
        self.start_position.values()
    }

    pub fn start_position(&self) -> &Position {
        &self.start_position
    }

    /// Read the current board, with the engine's pieces as `O`, and both running scores
    pub fn read_position(
        &self,
        layout: &str,
        our_score: i32,
        their_score: i32,
    ) -> Result<Position, pgn_traits::Error> {
        Ok(Position::from_layout(self.values().clone(), layout)?
            .with_scores(our_score, their_score))
    }

    /// Choose a move for the engine, or `Point::NONE` if it has no legal moves.
    ///
    /// # Panics
    /// If `position` was not created with this game's point values.
    pub fn place(&self, position: &Position) -> Point {
        assert!(
            Arc::ptr_eq(position.values(), self.values()) || position.values() == self.values(),
            "Position was not created from this game's starting layout:\n{:?}",
            position
        );
        best_move(position, &self.settings).map(|(mv, _)| mv).into()
    }

    pub fn place_layout(
        &self,
        layout: &str,
        our_score: i32,
        their_score: i32,
    ) -> Result<Point, pgn_traits::Error> {
        Ok(self.place(&self.read_position(layout, our_score, their_score)?))
    }
}
