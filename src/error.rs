use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;

/// Why a move, selection or route request was refused.
///
/// None of these is fatal: the caller keeps its previous state and decides what to try next.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece at {at}")]
    NoPieceAtSource { at: Coord },

    #[error("no move rule registered for {kind}")]
    NoRuleForPieceKind { kind: PieceKind },

    #[error("illegal {kind} move from {from} to {to}")]
    IllegalMove {
        kind: PieceKind,
        from: Coord,
        to: Coord,
    },

    #[error("no knight route from {start} to {goal}")]
    UnreachableTarget { start: Coord, goal: Coord },
}
