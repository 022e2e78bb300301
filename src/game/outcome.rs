use serde::Serialize;

use super::{Board, Cell};

/// Index triples of the 3 rows, 3 columns and 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classification of a board.
/// Only `InProgress` boards have legal moves.
#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    MaximizerWins,
    MinimizerWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// Returns the first line fully held by one side.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        board[a] != Cell::Empty && board[a] == board[b] && board[b] == board[c]
    })
}

/// Classifies the board. In a board reached by legal play at most one side
/// holds a complete line, so the line order does not matter.
pub fn classify(board: &Board) -> Outcome {
    if let Some([a, _, _]) = winning_line(board) {
        return match board[a] {
            Cell::Maximizer => Outcome::MaximizerWins,
            _ => Outcome::MinimizerWins,
        };
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

impl Board {
    pub fn outcome(&self) -> Outcome {
        classify(self)
    }
}
