//! Applying moves to a [`GameState`].
//!
//! [`BoardMover`] relocates pieces without asking any questions.
//! [`RuleCheckedMover`] wraps another [`Mover`] and only delegates once the
//! piece's [`MoveRule`](crate::chess::rules::MoveRule) accepts the move.

use crate::chess::piece::Piece;
use crate::chess::rules::RuleBook;
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::occupancy::Occupancy;
use crate::error::MoveError;
use crate::game::state::GameState;

/// Something that turns a move request into a new snapshot.
///
/// On `Err` no new state exists; the caller's snapshot is the current one.
pub trait Mover {
    fn apply_move(&self, from: Coord, to: Coord, state: &GameState)
        -> Result<GameState, MoveError>;

    /// Replace the active piece. Not validated.
    fn switch_active_piece(&self, piece: Piece, state: &GameState) -> GameState {
        state.clone().with_active(piece)
    }
}

impl<M: Mover + ?Sized> Mover for &M {
    fn apply_move(
        &self,
        from: Coord,
        to: Coord,
        state: &GameState,
    ) -> Result<GameState, MoveError> {
        (**self).apply_move(from, to, state)
    }

    fn switch_active_piece(&self, piece: Piece, state: &GameState) -> GameState {
        (**self).switch_active_piece(piece, state)
    }
}

/// Moves whatever stands on `from` to `to`, capturing anything there.
///
/// The moved piece becomes the active one on `to`. If it is of the task's
/// tracked kind, the task follows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardMover;

impl Mover for BoardMover {
    fn apply_move(
        &self,
        from: Coord,
        to: Coord,
        state: &GameState,
    ) -> Result<GameState, MoveError> {
        let piece = state
            .occupancy()
            .occupant_at(from)
            .ok_or(MoveError::NoPieceAtSource { at: from })?;
        let occupancy = state
            .occupancy()
            .relocated(from, to)
            .ok_or(MoveError::NoPieceAtSource { at: from })?;

        let task = if piece.kind == state.task().tracked_kind {
            state.task().with_tracked(to)
        } else {
            state.task()
        };

        tracing::debug!(%piece, %from, %to, "piece moved");
        Ok(GameState::new(piece, to, occupancy, task))
    }
}

/// Gatekeeper in front of another [`Mover`].
#[derive(Debug, Clone)]
pub struct RuleCheckedMover<M> {
    inner: M,
    board: Board,
    rules: RuleBook,
}

impl<M: Mover> RuleCheckedMover<M> {
    /// Standard rules for every piece kind.
    pub fn new(inner: M, board: Board) -> Self {
        Self::with_rules(inner, board, RuleBook::standard())
    }

    pub fn with_rules(inner: M, board: Board, rules: RuleBook) -> Self {
        Self {
            inner,
            board,
            rules,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    #[inline]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Validate `from → to` against `occ`, returning the mover on success.
    pub fn check(&self, from: Coord, to: Coord, occ: &Occupancy) -> Result<Piece, MoveError> {
        let piece = occ
            .occupant_at(from)
            .ok_or(MoveError::NoPieceAtSource { at: from })?;
        let rule = self
            .rules
            .rule_for(piece.kind)
            .ok_or(MoveError::NoRuleForPieceKind { kind: piece.kind })?;
        if !rule(&self.board, from, to, occ) {
            return Err(MoveError::IllegalMove {
                kind: piece.kind,
                from,
                to,
            });
        }
        Ok(piece)
    }
}

impl<M: Mover> Mover for RuleCheckedMover<M> {
    fn apply_move(
        &self,
        from: Coord,
        to: Coord,
        state: &GameState,
    ) -> Result<GameState, MoveError> {
        self.check(from, to, state.occupancy())?;
        self.inner.apply_move(from, to, state)
    }

    fn switch_active_piece(&self, piece: Piece, state: &GameState) -> GameState {
        self.inner.switch_active_piece(piece, state)
    }
}

/// Apply a move, falling back to an unchanged copy of `state` when it is refused.
///
/// Refusals are reported through `tracing` at `warn`.
pub fn move_or_keep<M: Mover>(mover: &M, from: Coord, to: Coord, state: &GameState) -> GameState {
    match mover.apply_move(from, to, state) {
        Ok(next) => next,
        Err(e) => {
            tracing::warn!(%from, %to, error = %e, "move refused");
            state.clone()
        }
    }
}

/// Make the piece on `at` the active one.
pub fn select_at(at: Coord, state: &GameState) -> Result<GameState, MoveError> {
    let piece = state
        .occupancy()
        .occupant_at(at)
        .ok_or(MoveError::NoPieceAtSource { at })?;
    Ok(state.clone().with_active(piece).with_active_at(at))
}
