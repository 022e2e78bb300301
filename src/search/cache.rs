use crate::game::{Board, Turn, ENCODINGS};

use super::Score;

/// Memo table from (board, side to move) to the minimax score.
///
/// Keys are the canonical board encoding combined with the turn, so the table
/// is a flat vector and lookups never hash. Entries are never invalidated.
#[derive(Clone)]
pub struct ScoreCache {
    scores: Vec<Option<Score>>,
    len: usize,
    hits: usize,
}

impl ScoreCache {
    pub fn new() -> ScoreCache {
        ScoreCache {
            scores: vec![None; ENCODINGS * 2],
            len: 0,
            hits: 0,
        }
    }

    fn key(board: &Board, turn: Turn) -> usize {
        board.encode() as usize * 2 + turn as usize
    }

    pub fn get(&mut self, board: &Board, turn: Turn) -> Option<Score> {
        let score = self.scores[Self::key(board, turn)];
        if score.is_some() {
            self.hits += 1;
        }
        score
    }

    pub fn insert(&mut self, board: &Board, turn: Turn, score: Score) {
        let entry = &mut self.scores[Self::key(board, turn)];
        if entry.is_none() {
            self.len += 1;
        }
        *entry = Some(score);
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lookups answered from the table.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScoreCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCache")
            .field("len", &self.len)
            .field("hits", &self.hits)
            .finish()
    }
}
