use log::debug;

use super::{Score, ScoreCache, LOSS, WIN};
use crate::game::{Board, Turn, CELLS};

/// Perfect-play engine backed by an exhaustive, memoized minimax search.
///
/// Every engine owns its own cache; results are reused across calls for the
/// lifetime of the engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    cache: ScoreCache,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::default()
    }

    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    /// Value of `board` with `turn` to move, assuming optimal play by both
    /// sides. The score is always from the maximizer's point of view.
    pub fn evaluate(&mut self, board: Board, turn: Turn) -> Score {
        if let Some(score) = self.cache.get(&board, turn) {
            return score;
        }

        let score = match board.outcome().score() {
            Some(score) => score,
            None => {
                let mark = turn.mark();
                let mut best = match turn {
                    Turn::Maximizer => LOSS,
                    Turn::Minimizer => WIN,
                };
                for i in board.empty_cells() {
                    let val = self.evaluate(board.with(i, mark), turn.other());
                    best = match turn {
                        Turn::Maximizer => best.max(val),
                        Turn::Minimizer => best.min(val),
                    };
                }
                best
            }
        };

        self.cache.insert(&board, turn, score);
        score
    }

    /// Scores of every legal move of `mover`, `None` for occupied cells.
    ///
    /// # Panics
    /// If the game is already over.
    pub fn move_scores(&mut self, board: Board, mover: Turn) -> [Option<Score>; CELLS] {
        assert!(
            !board.outcome().is_terminal(),
            "no legal moves on finished board {}",
            board
        );

        let mut scores = [None; CELLS];
        for i in board.empty_cells() {
            scores[i] = Some(self.evaluate(board.with(i, mover.mark()), mover.other()));
        }
        scores
    }

    /// Optimal move of `mover`. Among equally good moves the lowest index wins.
    ///
    /// # Panics
    /// If the game is already over.
    pub fn best_move(&mut self, board: Board, mover: Turn) -> usize {
        let scores = self.move_scores(board, mover);
        let Some((index, score)) = pick(&scores, mover) else {
            unreachable!("running game without empty cells: {}", board);
        };
        debug!(
            "{:?} plays {} (score {}, {} positions cached)",
            mover,
            index,
            score,
            self.cache.len()
        );
        index
    }
}

/// Selects the first move with the best score for `mover`.
pub fn pick(scores: &[Option<Score>; CELLS], mover: Turn) -> Option<(usize, Score)> {
    let mut best: Option<(usize, Score)> = None;
    for (i, score) in scores.iter().enumerate() {
        let Some(score) = *score else { continue };
        let better = match best {
            None => true,
            Some((_, b)) => match mover {
                Turn::Maximizer => score > b,
                Turn::Minimizer => score < b,
            },
        };
        if better {
            best = Some((i, score));
        }
    }
    best
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use log::info;

    use super::*;
    use crate::game::{Cell, Outcome};
    use crate::logging;
    use crate::search::DRAW;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Visits every position reachable from the empty board by legal play.
    fn reachable(board: Board, turn: Turn, visited: &mut HashSet<(Board, Turn)>) {
        if !visited.insert((board, turn)) || board.outcome().is_terminal() {
            return;
        }
        for i in board.empty_cells() {
            reachable(board.with(i, turn.mark()), turn.other(), visited);
        }
    }

    #[test]
    fn empty_board_is_draw() {
        logging();
        let mut engine = Engine::new();
        assert_eq!(engine.evaluate(Board::empty(), Turn::Maximizer), DRAW);
        info!("{:?}", engine.cache());
    }

    #[test]
    fn all_reachable_positions() {
        let mut visited = HashSet::new();
        reachable(Board::empty(), Turn::Maximizer, &mut visited);
        assert_eq!(visited.len(), 5478);

        let mut engine = Engine::new();
        engine.evaluate(Board::empty(), Turn::Maximizer);
        assert_eq!(engine.cache().len(), visited.len());

        for &(board, turn) in &visited {
            let score = engine.evaluate(board, turn);
            assert!((LOSS..=WIN).contains(&score), "{:?} {}", board, score);
            if let Some(terminal) = board.outcome().score() {
                assert_eq!(score, terminal);
            }
        }
        // Nothing new was computed.
        assert_eq!(engine.cache().len(), visited.len());
    }

    #[test]
    fn self_play_draws() {
        logging();
        let mut engine = Engine::new();
        let mut board = Board::empty();
        let mut turn = Turn::Maximizer;
        let mut moves = Vec::new();

        while !board.outcome().is_terminal() {
            let i = engine.best_move(board, turn);
            assert!(board[i].is_empty());
            board = board.with(i, turn.mark());
            moves.push(i);
            turn = turn.other();
        }
        info!("{:?} {:?}", moves, board);
        assert_eq!(board.outcome(), Outcome::Draw);
        assert_eq!(moves.len(), 9);
    }

    #[test]
    fn forced_win() {
        let mut engine = Engine::new();
        let b = board(
            r#"
            X X .
            O O .
            . . ."#,
        );
        assert_eq!(engine.best_move(b, Turn::Maximizer), 2);
        assert_eq!(engine.evaluate(b, Turn::Maximizer), WIN);

        let b = board(
            r#"
            X X .
            O O .
            X . ."#,
        );
        assert_eq!(engine.best_move(b, Turn::Minimizer), 5);
        assert_eq!(engine.evaluate(b, Turn::Minimizer), LOSS);
    }

    #[test]
    fn forced_block() {
        let mut engine = Engine::new();
        let b = board(
            r#"
            O O .
            . X .
            . . X"#,
        );
        let scores = engine.move_scores(b, Turn::Maximizer);
        assert_eq!(engine.best_move(b, Turn::Maximizer), 2);
        for i in [3, 5, 6, 7] {
            assert_eq!(scores[i], Some(LOSS), "{}", i);
        }
    }

    #[test]
    fn lowest_index_tie_break() {
        let mut engine = Engine::new();

        let scores = engine.move_scores(Board::empty(), Turn::Maximizer);
        assert!(scores.iter().all(|&s| s == Some(DRAW)));
        assert_eq!(engine.best_move(Board::empty(), Turn::Maximizer), 0);

        // Corner replies to a center opening draw, edge replies lose.
        let center = Board::empty().with(4, Cell::Maximizer);
        let scores = engine.move_scores(center, Turn::Minimizer);
        for i in [0, 2, 6, 8] {
            assert_eq!(scores[i], Some(DRAW));
        }
        for i in [1, 3, 5, 7] {
            assert_eq!(scores[i], Some(WIN));
        }
        assert_eq!(scores[4], None);
        assert_eq!(engine.best_move(center, Turn::Minimizer), 0);
    }

    #[test]
    fn deterministic() {
        let b = board("X...O..X.");
        let mut first = Engine::new();
        let mut second = Engine::new();

        let expected = first.best_move(b, Turn::Minimizer);
        for _ in 0..3 {
            assert_eq!(first.best_move(b, Turn::Minimizer), expected);
            assert_eq!(second.best_move(b, Turn::Minimizer), expected);
        }
        assert_eq!(
            first.evaluate(b, Turn::Minimizer),
            second.evaluate(b, Turn::Minimizer)
        );
    }

    #[test]
    fn cached_matches_fresh() {
        let mut warm = Engine::new();
        warm.evaluate(Board::empty(), Turn::Maximizer);
        let cached = warm.cache().len();

        let parsed = board("X.O.X....");
        let built = Board::empty()
            .with(0, Cell::Maximizer)
            .with(2, Cell::Minimizer)
            .with(4, Cell::Maximizer);
        assert_eq!(parsed, built);

        let hits = warm.cache().hits();
        let score = warm.evaluate(parsed, Turn::Minimizer);
        assert_eq!(warm.cache().hits(), hits + 1);
        assert_eq!(warm.cache().len(), cached);

        let mut fresh = Engine::new();
        assert_eq!(fresh.evaluate(built, Turn::Minimizer), score);
    }

    #[test]
    fn engines_are_isolated() {
        let mut a = Engine::new();
        let b = Engine::new();
        a.evaluate(board("XO......."), Turn::Maximizer);
        assert!(!a.cache().is_empty());
        assert!(b.cache().is_empty());
    }

    #[test]
    fn pick_prefers_first_best() {
        let scores = [None, Some(0), Some(1), None, Some(1), Some(-1), None, None, Some(-1)];
        assert_eq!(pick(&scores, Turn::Maximizer), Some((2, 1)));
        assert_eq!(pick(&scores, Turn::Minimizer), Some((5, -1)));
        assert_eq!(pick(&[None; CELLS], Turn::Maximizer), None);
    }

    #[test]
    #[should_panic]
    fn best_move_on_finished_board() {
        Engine::new().best_move(board("XXXOO...."), Turn::Minimizer);
    }
}
