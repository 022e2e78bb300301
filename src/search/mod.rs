mod cache;
pub use cache::*;
mod minimax;
pub use minimax::*;

use crate::game::Outcome;

/// Game value from the maximizer's point of view.
pub type Score = i8;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

impl Outcome {
    /// Score of a terminal outcome, `None` while the game is running.
    pub fn score(&self) -> Option<Score> {
        match self {
            Outcome::InProgress => None,
            Outcome::MaximizerWins => Some(WIN),
            Outcome::MinimizerWins => Some(LOSS),
            Outcome::Draw => Some(DRAW),
        }
    }
}
