use std::fmt::{self, Debug};
use std::ops::Index;
use std::str::FromStr;

use derive_more::{Display, Error};
use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

use super::{winning_line, Cell, Turn};

/// Number of cells on the board.
pub const CELLS: usize = 9;
/// Number of distinct canonical encodings (3^9).
pub const ENCODINGS: usize = 19683;

/// Errors produced when reading a board from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("expected 9 cells, found {found}")]
    Length { found: usize },
    #[display("invalid cell symbol '{symbol}'")]
    Symbol { symbol: char },
    #[display("unreachable mark counts: {maximizer} X and {minimizer} O")]
    Imbalanced { maximizer: usize, minimizer: usize },
}

/// Immutable 3x3 board snapshot, row-major.
///
/// Placing a mark creates a new snapshot, so siblings in the search tree never
/// observe each other's moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new(cells: [Cell; CELLS]) -> Board {
        Board { cells }
    }

    pub fn empty() -> Board {
        Board::default()
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Returns a copy of this board with `index` set to `cell`.
    pub fn with(&self, index: usize, cell: Cell) -> Board {
        let mut cells = self.cells;
        cells[index] = cell;
        Board { cells }
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Side to move assuming the maximizer opened the game.
    pub fn to_move(&self) -> Turn {
        if self.count(Cell::Maximizer) > self.count(Cell::Minimizer) {
            Turn::Minimizer
        } else {
            Turn::Maximizer
        }
    }

    /// Checks that the board can be reached by alternating play with the
    /// maximizer moving first.
    pub fn validate(&self) -> Result<(), BoardError> {
        let maximizer = self.count(Cell::Maximizer);
        let minimizer = self.count(Cell::Minimizer);
        if maximizer == minimizer || maximizer == minimizer + 1 {
            Ok(())
        } else {
            Err(BoardError::Imbalanced {
                maximizer,
                minimizer,
            })
        }
    }

    /// Canonical base-3 encoding, cell `i` being digit `i`.
    /// Always smaller than [`ENCODINGS`].
    pub fn encode(&self) -> u16 {
        self.cells
            .iter()
            .rev()
            .fold(0, |acc, &c| acc * 3 + c as u16)
    }

    pub fn decode(mut code: u16) -> Option<Board> {
        if code as usize >= ENCODINGS {
            return None;
        }
        let mut cells = [Cell::Empty; CELLS];
        for cell in &mut cells {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Maximizer,
                _ => Cell::Minimizer,
            };
            code /= 3;
        }
        Some(Board { cells })
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

/// Parses the 9 cell symbols in row-major order. Whitespace is ignored so
/// boards can be written as a grid.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut found = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_symbol(c).ok_or(BoardError::Symbol { symbol: c })?;
            if found < CELLS {
                cells[found] = cell;
            }
            found += 1;
        }
        if found != CELLS {
            return Err(BoardError::Length { found });
        }
        Ok(Board { cells })
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mark_style(cell: Cell) -> Style {
            match cell {
                Cell::Maximizer => Style::new().green(),
                Cell::Minimizer => Style::new().yellow(),
                Cell::Empty => Style::new().bright_black(),
            }
        }

        let line = winning_line(self);

        writeln!(f, "Board {{")?;
        for (y, row) in self.cells.chunks(3).enumerate() {
            write!(f, "  ")?;
            for (x, &cell) in row.iter().enumerate() {
                let i = y * 3 + x;
                let mut style = mark_style(cell);
                if line.is_some_and(|l| l.contains(&i)) {
                    style = style.bold().underline();
                }
                write!(f, "{} ", cell.symbol().style(style))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_grid() {
        let board: Board = r#"
            X . O
            . X .
            . . O"#
            .parse()
            .unwrap();

        assert_eq!(board[0], Cell::Maximizer);
        assert_eq!(board[2], Cell::Minimizer);
        assert_eq!(board[4], Cell::Maximizer);
        assert_eq!(board[8], Cell::Minimizer);
        assert_eq!(board.to_string(), "X.O.X...O");
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 3, 5, 6, 7]);
        assert_eq!(board.to_move(), Turn::Maximizer);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardError::Length { found: 2 })
        );
        assert_eq!(
            "XOX.O.X..O".parse::<Board>(),
            Err(BoardError::Length { found: 10 })
        );
        assert_eq!(
            "X.O.Z....".parse::<Board>(),
            Err(BoardError::Symbol { symbol: 'Z' })
        );

        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(
            board.validate(),
            Err(BoardError::Imbalanced {
                maximizer: 3,
                minimizer: 0
            })
        );
        let board: Board = "O........".parse().unwrap();
        assert!(board.validate().is_err());
    }

    #[test]
    fn with_does_not_alias() {
        let board = Board::empty();
        let child = board.with(4, Cell::Maximizer);
        assert_eq!(board, Board::empty());
        assert_eq!(child[4], Cell::Maximizer);
        assert_eq!(child.count(Cell::Maximizer), 1);
        assert_eq!(child.to_move(), Turn::Minimizer);
    }

    #[test]
    fn encoding() {
        assert_eq!(Board::empty().encode(), 0);
        assert_eq!(Board::empty().with(0, Cell::Maximizer).encode(), 1);
        assert_eq!(Board::empty().with(1, Cell::Minimizer).encode(), 6);

        let full = Board::new([Cell::Minimizer; CELLS]);
        assert_eq!(full.encode() as usize, ENCODINGS - 1);

        let board: Board = "XO.OX.X.O".parse().unwrap();
        assert_eq!(Board::decode(board.encode()), Some(board));
        assert_eq!(Board::decode(ENCODINGS as u16), None);
    }

    #[test]
    fn serde_string() {
        let board: Board = "X...O....".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#""X...O....""#);
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        assert!(serde_json::from_str::<Board>(r#""X""#).is_err());
    }

    #[test]
    fn debug_grid() {
        let board: Board = "XXXOO....".parse().unwrap();
        let text = format!("{:?}", board);
        assert!(text.starts_with("Board {"));
        assert_eq!(text.lines().count(), 5);
        println!("{:?}", board);
    }
}
