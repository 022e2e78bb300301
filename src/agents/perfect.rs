use crate::game::{Board, Turn};
use crate::search::Engine;

/// Always plays the optimal move, lowest index first.
#[derive(Debug, Clone, Default)]
pub struct PerfectAgent;

impl PerfectAgent {
    pub fn step(&self, engine: &mut Engine, board: Board, mover: Turn) -> usize {
        engine.best_move(board, mover)
    }
}
