//! Per-kind move legality.
//!
//! Every rule shares the [`MoveRule`] signature and reads the board as it
//! stands *before* the move. The mover is whatever occupies `from`.

use rustc_hash::FxHashMap;

use crate::chess::piece::{Color, PieceKind};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::occupancy::Occupancy;

/// Legality predicate for one piece kind: `(board, from, to, occupancy)`.
pub type MoveRule = fn(&Board, Coord, Coord, &Occupancy) -> bool;

pub fn knight_rule(board: &Board, from: Coord, to: Coord, _occ: &Occupancy) -> bool {
    if !on_board(board, from, to) {
        return false;
    }
    let d = to - from;
    let ax = d.x.abs();
    let ay = d.y.abs();
    (ax == 1 && ay == 2) || (ax == 2 && ay == 1)
}

pub fn rook_rule(board: &Board, from: Coord, to: Coord, occ: &Occupancy) -> bool {
    if !on_board(board, from, to) {
        return false;
    }
    let d = to - from;
    // exactly one axis may change
    if (d.x == 0) == (d.y == 0) {
        return false;
    }
    line_clear(from, to, occ) && lands_on_enemy_or_empty(from, to, occ)
}

pub fn bishop_rule(board: &Board, from: Coord, to: Coord, occ: &Occupancy) -> bool {
    if !on_board(board, from, to) {
        return false;
    }
    let d = to - from;
    if d.x.abs() != d.y.abs() || d.x == 0 {
        return false;
    }
    line_clear(from, to, occ) && lands_on_enemy_or_empty(from, to, occ)
}

pub fn queen_rule(board: &Board, from: Coord, to: Coord, occ: &Occupancy) -> bool {
    rook_rule(board, from, to, occ) || bishop_rule(board, from, to, occ)
}

pub fn king_rule(board: &Board, from: Coord, to: Coord, occ: &Occupancy) -> bool {
    on_board(board, from, to)
        && (to - from).chebyshev_norm() == 1
        && lands_on_enemy_or_empty(from, to, occ)
}

pub fn pawn_rule(board: &Board, from: Coord, to: Coord, occ: &Occupancy) -> bool {
    if !on_board(board, from, to) {
        return false;
    }
    let Some(color) = occ.color_at(from) else {
        return false;
    };
    let ahead = Coord::new(0, color.forward());
    let d = to - from;

    if d.x == 0 && !occ.is_occupied(to) {
        if d == ahead {
            return true;
        }
        if from.y == pawn_start_rank(board, color) && d == ahead * 2 {
            return !occ.is_occupied(from + ahead);
        }
    }

    if d.x.abs() == 1 && d.y == ahead.y {
        return occ.color_at(to) == Some(color.other());
    }

    false
}

/// Both ends on the board. Checked before any offset arithmetic.
#[inline]
fn on_board(board: &Board, from: Coord, to: Coord) -> bool {
    board.in_bounds(from) && board.in_bounds(to)
}

/// Rank a pawn of `color` starts on: 1 for White, the second-to-last rank for Black.
#[inline]
pub fn pawn_start_rank(board: &Board, color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => board.height() - 2,
    }
}

/// True iff no square strictly between `from` and `to` is occupied.
///
/// `to - from` must be a straight or diagonal line.
fn line_clear(from: Coord, to: Coord, occ: &Occupancy) -> bool {
    let step = (to - from).signum();
    if step == Coord::ORIGIN {
        return false;
    }

    let mut cur = from + step;
    while cur != to {
        if occ.is_occupied(cur) {
            return false;
        }
        cur = cur + step;
    }
    true
}

/// An occupied destination must hold a piece of the other colour.
///
/// Without a mover on `from` an occupied destination cannot be judged, so it is refused.
fn lands_on_enemy_or_empty(from: Coord, to: Coord, occ: &Occupancy) -> bool {
    match occ.color_at(to) {
        None => true,
        Some(target) => occ.color_at(from).is_some_and(|mover| mover != target),
    }
}

impl PieceKind {
    /// The standard rule for this kind.
    pub fn rule(self) -> MoveRule {
        use PieceKind::*;
        match self {
            Knight => knight_rule,
            Rook => rook_rule,
            Bishop => bishop_rule,
            Queen => queen_rule,
            King => king_rule,
            Pawn => pawn_rule,
        }
    }
}

/// Lookup table from piece kind to its [`MoveRule`].
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: FxHashMap<PieceKind, MoveRule>,
}

impl RuleBook {
    /// No rules registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All six kinds with their standard rules.
    pub fn standard() -> Self {
        PieceKind::ALL
            .into_iter()
            .fold(Self::empty(), |book, kind| book.with_rule(kind, kind.rule()))
    }

    pub fn with_rule(mut self, kind: PieceKind, rule: MoveRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    #[inline]
    pub fn rule_for(&self, kind: PieceKind) -> Option<MoveRule> {
        self.rules.get(&kind).copied()
    }
}

/// Search cost class of a knight landing square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Nobody on the square.
    Empty,
    /// A piece of the knight's own colour.
    Single,
    /// An opposing piece.
    Double,
}

impl Weight {
    #[inline]
    pub fn cost(self) -> u32 {
        match self {
            Weight::Empty | Weight::Single => 1,
            Weight::Double => 2,
        }
    }
}

/// Weight of landing on `to` for a knight of colour `mover`.
///
/// Only the route search uses this; it has no bearing on legality.
pub fn knight_weight(mover: Color, to: Coord, occ: &Occupancy) -> Weight {
    match occ.color_at(to) {
        None => Weight::Empty,
        Some(c) if c == mover => Weight::Single,
        Some(_) => Weight::Double,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::Piece;

    #[test]
    fn weight_penalises_only_opposing_squares() {
        let occ = Occupancy::new()
            .with_piece(Coord::new(2, 1), Piece::white(PieceKind::Pawn))
            .with_piece(Coord::new(1, 2), Piece::black(PieceKind::Rook));

        assert_eq!(knight_weight(Color::White, Coord::new(3, 3), &occ), Weight::Empty);
        assert_eq!(knight_weight(Color::White, Coord::new(2, 1), &occ), Weight::Single);
        assert_eq!(knight_weight(Color::White, Coord::new(1, 2), &occ), Weight::Double);
        assert_eq!(knight_weight(Color::Black, Coord::new(2, 1), &occ), Weight::Double);
        assert_eq!(Weight::Double.cost(), 2);
        assert_eq!(Weight::Single.cost(), 1);
    }

    #[test]
    fn empty_book_has_no_rules() {
        assert!(RuleBook::empty().rule_for(PieceKind::Queen).is_none());
        let book = RuleBook::standard();
        for kind in PieceKind::ALL {
            assert!(book.rule_for(kind).is_some(), "{kind}");
        }
    }
}
