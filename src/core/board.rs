use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// Fixed board dimensions. Squares run `0..width` by `0..height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    pub const STANDARD_SIZE: i32 = 8;

    /// Returns `None` unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// The 8×8 board.
    pub const fn standard() -> Self {
        Self {
            width: Self::STANDARD_SIZE,
            height: Self::STANDARD_SIZE,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    pub fn square_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Every square, rank by rank.
    pub fn squares(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let board = Board::standard();
        assert!(board.in_bounds(Coord::new(0, 0)));
        assert!(board.in_bounds(Coord::new(7, 7)));
        assert!(!board.in_bounds(Coord::new(8, 0)));
        assert!(!board.in_bounds(Coord::new(0, -1)));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Board::new(0, 8).is_none());
        assert!(Board::new(3, -1).is_none());
        assert_eq!(Board::new(3, 2).map(|b| b.squares().count()), Some(6));
        assert_eq!(Board::standard().square_count(), 64);
    }
}
