//! Knight route search over the board.

pub mod path;
