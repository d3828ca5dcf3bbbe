use rustc_hash::FxHashMap;

use crate::chess::piece::{Color, Piece};
use crate::core::coord::Coord;

/// Sparse square → piece placement.
///
/// Snapshots never change after construction: moving a piece goes through
/// [`Occupancy::relocated`], which copies the whole map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    pieces: FxHashMap<Coord, Piece>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a piece, replacing any occupant. Intended for building layouts.
    pub fn with_piece(mut self, at: Coord, piece: Piece) -> Self {
        self.pieces.insert(at, piece);
        self
    }

    #[inline]
    pub fn occupant_at(&self, at: Coord) -> Option<Piece> {
        self.pieces.get(&at).copied()
    }

    #[inline]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.pieces.contains_key(&at)
    }

    #[inline]
    pub fn color_at(&self, at: Coord) -> Option<Color> {
        self.occupant_at(at).map(|p| p.color)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Occupied squares sorted by `(x, y)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Piece)> {
        let mut out: Vec<(Coord, Piece)> = self.pieces.iter().map(|(&c, &p)| (c, p)).collect();
        out.sort_unstable_by_key(|(c, _)| *c);
        out.into_iter()
    }

    /// A fresh copy with the occupant of `from` placed on `to`.
    ///
    /// Whatever stood on `to` is dropped. Returns `None` if `from` is empty.
    pub fn relocated(&self, from: Coord, to: Coord) -> Option<Occupancy> {
        let piece = self.occupant_at(from)?;
        let mut pieces = self.pieces.clone();
        pieces.remove(&from);
        pieces.insert(to, piece);
        Some(Self { pieces })
    }
}

impl FromIterator<(Coord, Piece)> for Occupancy {
    fn from_iter<T: IntoIterator<Item = (Coord, Piece)>>(iter: T) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::PieceKind;

    #[test]
    fn relocation_copies_and_overwrites() {
        let rook = Piece::white(PieceKind::Rook);
        let pawn = Piece::black(PieceKind::Pawn);
        let before = Occupancy::new()
            .with_piece(Coord::new(0, 0), rook)
            .with_piece(Coord::new(0, 5), pawn);

        let after = before
            .relocated(Coord::new(0, 0), Coord::new(0, 5))
            .expect("source occupied");

        assert_eq!(after.len(), 1);
        assert_eq!(after.occupant_at(Coord::new(0, 5)), Some(rook));
        assert!(!after.is_occupied(Coord::new(0, 0)));
        // the source map is untouched
        assert_eq!(before.len(), 2);
        assert_eq!(before.occupant_at(Coord::new(0, 5)), Some(pawn));
    }

    #[test]
    fn iteration_is_sorted_by_square() {
        let occ: Occupancy = [
            (Coord::new(3, 1), Piece::white(PieceKind::Queen)),
            (Coord::new(0, 7), Piece::black(PieceKind::Rook)),
            (Coord::new(0, 0), Piece::white(PieceKind::Rook)),
        ]
        .into_iter()
        .collect();

        let squares: Vec<Coord> = occ.iter().map(|(c, _)| c).collect();
        assert_eq!(squares, vec![Coord::new(0, 0), Coord::new(0, 7), Coord::new(3, 1)]);
        assert!(!occ.is_empty());
    }

    #[test]
    fn relocating_an_empty_square_is_none() {
        let occ = Occupancy::new();
        assert!(occ.relocated(Coord::new(1, 1), Coord::new(2, 2)).is_none());
    }
}
