//! A move-picking engine for a score-weighted flipping game.
//!
//! The game is played like Reversi on a rectangular board, except that every square carries
//! a point value from 1 to 9. Placing a piece scores the square's value, and every
//! bracketed opponent piece that is flipped moves its value from the opponent's score to
//! the mover's.
//!
//! ```
//! use pointflip::search::Engine;
//!
//! let engine = Engine::initialize("1234/5Oo6/7oO8/9123").unwrap();
//! let point = engine.place(engine.start_position());
//! assert!(!point.is_none());
//! ```

pub mod evaluation;
pub mod minmax;
pub mod play_match;
pub mod position;
pub mod search;
mod tests;
