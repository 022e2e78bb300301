use rand::Rng;

mod perfect;
pub use perfect::*;
mod random;
pub use random::*;

use crate::game::{Board, Turn};
use crate::search::Engine;

/// Move policies that can be pitted against each other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    #[default]
    Perfect,
    Random,
}

impl Agent {
    /// Chooses a cell for `mover`. The board must still be in progress.
    pub fn step<R: Rng>(&self, engine: &mut Engine, board: Board, mover: Turn, rng: &mut R) -> usize {
        match self {
            Agent::Perfect => PerfectAgent.step(engine, board, mover),
            Agent::Random => RandomAgent.step(board, rng),
        }
    }
}
