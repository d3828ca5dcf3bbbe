//! Move legality and knight route planning on a small fixed board, driving a
//! guided "bring the knight to its goal square" exercise.

pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod render;
pub mod search;
