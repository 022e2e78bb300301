use rand::seq::IteratorRandom;
use rand::Rng;

use crate::game::Board;

#[derive(Debug, Clone, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn step<R: Rng>(&self, board: Board, rng: &mut R) -> usize {
        assert!(!board.outcome().is_terminal(), "game is over: {}", board);
        match board.empty_cells().choose(rng) {
            Some(i) => i,
            None => unreachable!("running game without empty cells: {}", board),
        }
    }
}
