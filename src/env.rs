//! Request and response types of the move service.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::game::{Board, BoardError, Turn, CELLS};
use crate::search::{pick, Engine, Score};

pub const API_VERSION: &str = "1";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MoveRequest {
    pub board: Board,
    /// Side to move. Inferred from the mark counts if missing.
    #[serde(default)]
    pub mover: Option<Turn>,
}

impl MoveRequest {
    pub fn new(board: Board, mover: Option<Turn>) -> MoveRequest {
        MoveRequest { board, mover }
    }

    pub fn mover(&self) -> Turn {
        self.mover.unwrap_or_else(|| self.board.to_move())
    }
}

/// Reasons a move request cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RequestError {
    #[display("invalid board: {_0}")]
    Board(BoardError),
    #[display("game is already over")]
    #[from(ignore)]
    Finished,
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub apiversion: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl IndexResponse {
    pub fn new(
        apiversion: &'static str,
        author: &'static str,
        version: &'static str,
    ) -> IndexResponse {
        IndexResponse {
            apiversion,
            author,
            version,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResponse {
    pub index: usize,
    pub score: Score,
    /// Score of each cell, `null` for occupied cells.
    pub scores: [Option<Score>; CELLS],
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RequestError> for ErrorResponse {
    fn from(err: RequestError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}

/// Computes the optimal move for a request.
pub fn respond(engine: &mut Engine, request: &MoveRequest) -> Result<MoveResponse, RequestError> {
    request.board.validate()?;
    if request.board.outcome().is_terminal() {
        return Err(RequestError::Finished);
    }

    let mover = request.mover();
    let scores = engine.move_scores(request.board, mover);
    let (index, score) = pick(&scores, mover).ok_or(RequestError::Finished)?;
    Ok(MoveResponse {
        index,
        score,
        scores,
    })
}
