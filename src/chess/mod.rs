//! Piece definitions and per-kind move legality.

pub mod piece;
pub mod rules;
