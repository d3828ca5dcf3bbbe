use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;

/// Drive one tracked piece onto a goal square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    /// Kind of the piece whose progress is tracked (the knight, in the exercise).
    pub tracked_kind: PieceKind,
    /// Where the tracked piece currently stands.
    pub tracked: Coord,
    pub goal: Coord,
}

impl Task {
    #[inline]
    pub fn new(tracked_kind: PieceKind, tracked: Coord, goal: Coord) -> Self {
        Self {
            tracked_kind,
            tracked,
            goal,
        }
    }

    #[inline]
    pub fn with_tracked(self, tracked: Coord) -> Self {
        Self { tracked, ..self }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.tracked == self.goal
    }
}
