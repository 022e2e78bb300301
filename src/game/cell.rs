use serde::{Deserialize, Serialize};

/// Represents a single tile of the board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Maximizer = 1,
    Minimizer = 2,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// The side owning this mark.
    pub fn owner(&self) -> Option<Turn> {
        match self {
            Cell::Empty => None,
            Cell::Maximizer => Some(Turn::Maximizer),
            Cell::Minimizer => Some(Turn::Minimizer),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Maximizer => 'X',
            Cell::Minimizer => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Maximizer),
            'O' | 'o' => Some(Cell::Minimizer),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The side that places the next mark.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Turn {
    Maximizer,
    Minimizer,
}

impl Turn {
    pub fn other(self) -> Turn {
        match self {
            Turn::Maximizer => Turn::Minimizer,
            Turn::Minimizer => Turn::Maximizer,
        }
    }

    /// Mark placed by this side.
    pub fn mark(self) -> Cell {
        match self {
            Turn::Maximizer => Cell::Maximizer,
            Turn::Minimizer => Cell::Minimizer,
        }
    }
}
