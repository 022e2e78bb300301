//! Full games between two agents.

use log::debug;
use rand::Rng;

use crate::agents::Agent;
use crate::game::{Board, Outcome, Turn};
use crate::search::Engine;

/// Moves and final position of a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub board: Board,
    pub outcome: Outcome,
}

/// Plays a game from the empty board. `agents[0]` is the maximizer and moves
/// first.
pub fn play_game<R: Rng>(engine: &mut Engine, agents: [Agent; 2], rng: &mut R) -> GameRecord {
    let mut board = Board::empty();
    let mut turn = Turn::Maximizer;
    let mut moves = Vec::with_capacity(9);

    loop {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            return GameRecord {
                moves,
                board,
                outcome,
            };
        }

        let agent = agents[turn as usize];
        let i = agent.step(engine, board, turn, rng);
        debug!("{:?} ({:?}) plays {}", turn, agent, i);
        board = board.with(i, turn.mark());
        moves.push(i);
        turn = turn.other();
    }
}

/// Win and draw counts over several games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub maximizer: usize,
    pub minimizer: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::MaximizerWins => self.maximizer += 1,
            Outcome::MinimizerWins => self.minimizer += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> usize {
        self.maximizer + self.minimizer + self.draws
    }
}
