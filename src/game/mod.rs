mod board;
pub use board::*;
mod cell;
pub use cell::*;
mod outcome;
pub use outcome::*;
