use crate::chess::piece::Piece;
use crate::core::coord::Coord;
use crate::core::occupancy::Occupancy;
use crate::game::task::Task;

/// One immutable snapshot of the exercise.
///
/// Fields are replaced with the consuming `with_*` methods, which always
/// yield a new value; a snapshot that has been handed out never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    active: Piece,
    active_at: Coord,
    occupancy: Occupancy,
    task: Task,
}

impl GameState {
    pub fn new(active: Piece, active_at: Coord, occupancy: Occupancy, task: Task) -> Self {
        Self {
            active,
            active_at,
            occupancy,
            task,
        }
    }

    /// The piece the player is currently steering.
    #[inline]
    pub fn active(&self) -> Piece {
        self.active
    }

    /// Square the active piece held when it was last selected or moved.
    ///
    /// Not re-validated against the occupancy.
    #[inline]
    pub fn active_at(&self) -> Coord {
        self.active_at
    }

    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    #[inline]
    pub fn task(&self) -> Task {
        self.task
    }

    #[inline]
    pub fn is_task_complete(&self) -> bool {
        self.task.is_complete()
    }

    pub fn with_active(self, active: Piece) -> Self {
        Self { active, ..self }
    }

    pub fn with_active_at(self, active_at: Coord) -> Self {
        Self { active_at, ..self }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::PieceKind;

    #[test]
    fn overrides_leave_the_source_snapshot_alone() {
        let knight = Piece::white(PieceKind::Knight);
        let task = Task::new(PieceKind::Knight, Coord::new(1, 0), Coord::new(5, 2));
        let occ = Occupancy::new().with_piece(Coord::new(1, 0), knight);
        let before = GameState::new(knight, Coord::new(1, 0), occ, task);

        let rook = Piece::black(PieceKind::Rook);
        let after = before
            .clone()
            .with_active(rook)
            .with_active_at(Coord::new(2, 2));

        assert_eq!(before.active(), knight);
        assert_eq!(before.active_at(), Coord::new(1, 0));
        assert_eq!(after.active(), rook);
        assert_eq!(after.active_at(), Coord::new(2, 2));
        assert_eq!(after.occupancy(), before.occupancy());
        assert_eq!(after.task(), before.task());
        assert!(!after.is_task_complete());
    }
}
