//! The guided "bring the knight to its goal" exercise, minus the console.
//!
//! A [`Drill`] owns the current snapshot and the knight's planned route. The
//! route is planned when the drill starts, and planned again whenever the
//! tracked piece is selected or moved off-route.

use crate::chess::piece::Piece;
use crate::core::coord::Coord;
use crate::error::MoveError;
use crate::game::mover::{select_at, Mover};
use crate::game::state::GameState;
use crate::search::path::PathFinder;

#[derive(Debug, Clone)]
pub struct Drill<M> {
    mover: M,
    finder: PathFinder,
    state: GameState,
    route: Vec<Coord>,
    /// Index into `route` of the next square to jump to.
    cursor: usize,
}

impl<M: Mover> Drill<M> {
    pub fn new(mover: M, finder: PathFinder, state: GameState) -> Self {
        let mut drill = Self {
            mover,
            finder,
            state,
            route: Vec::new(),
            cursor: 1,
        };
        drill.reroute();
        drill
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn finder(&self) -> &PathFinder {
        &self.finder
    }

    /// The full planned route, starting with the square it was planned from.
    #[inline]
    pub fn route(&self) -> &[Coord] {
        &self.route
    }

    /// Squares still to be visited.
    pub fn remaining(&self) -> &[Coord] {
        self.route.get(self.cursor..).unwrap_or(&[])
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.is_task_complete()
    }

    /// Plan a fresh route from the tracked piece's square to the goal.
    pub fn reroute(&mut self) -> &[Coord] {
        let task = self.state.task();
        self.route = self.finder.find(task.tracked, task.goal, self.state.occupancy());
        self.cursor = 1;
        if self.route.is_empty() {
            tracing::info!(start = %task.tracked, goal = %task.goal, "goal unreachable");
        } else {
            tracing::info!(
                start = %task.tracked,
                goal = %task.goal,
                steps = self.route.len() - 1,
                "route planned"
            );
        }
        &self.route
    }

    /// Jump the tracked piece to the next square of the route.
    ///
    /// The tracked piece becomes the active one first, whatever was selected
    /// before. On error neither the snapshot nor the route position changes.
    pub fn step_knight(&mut self) -> Result<Coord, MoveError> {
        let task = self.state.task();
        let next = *self
            .route
            .get(self.cursor)
            .ok_or(MoveError::UnreachableTarget {
                start: task.tracked,
                goal: task.goal,
            })?;

        let selected = select_at(task.tracked, &self.state)?;
        self.state = self.mover.apply_move(task.tracked, next, &selected)?;
        self.cursor += 1;
        if self.is_complete() {
            tracing::info!(goal = %task.goal, "goal reached");
        }
        Ok(next)
    }

    /// Move the active piece from its square to `to`.
    ///
    /// Moving the tracked piece by hand abandons the old route and plans a new one.
    pub fn move_active(&mut self, to: Coord) -> Result<(), MoveError> {
        let from = self.state.active_at();
        let moved = self.state.occupancy().occupant_at(from);
        self.state = self.mover.apply_move(from, to, &self.state)?;
        if moved.is_some_and(|p| p.kind == self.state.task().tracked_kind) {
            self.reroute();
        }
        Ok(())
    }

    /// Make the piece on `at` the active one.
    ///
    /// Selecting a piece of the tracked kind re-plans the route.
    pub fn select(&mut self, at: Coord) -> Result<Piece, MoveError> {
        self.state = select_at(at, &self.state)?;
        let piece = self.state.active();
        if piece.kind == self.state.task().tracked_kind {
            self.reroute();
        }
        Ok(piece)
    }

    /// Swap the active piece without touching its square.
    pub fn switch_active_piece(&mut self, piece: Piece) {
        self.state = self.mover.switch_active_piece(piece, &self.state);
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
