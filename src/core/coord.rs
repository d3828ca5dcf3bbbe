use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A board square as file (`x`) and rank (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Component-wise sign: the unit step that points along `self`.
    #[inline]
    pub fn signum(self) -> Coord {
        Coord::new(self.x.signum(), self.y.signum())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// The 8 knight jumps, in the order the route search expands them.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: 1 },
    Coord { x: -1, y: 2 },
    Coord { x: -2, y: 1 },
    Coord { x: 1, y: -2 },
    Coord { x: 2, y: -1 },
    Coord { x: -1, y: -2 },
    Coord { x: -2, y: -1 },
];
