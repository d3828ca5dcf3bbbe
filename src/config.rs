//! Exercise setup: board size, starting layout and the knight's task.
//!
//! A layout file is JSON:
//!
//! ```json
//! {
//!   "width": 8,
//!   "height": 8,
//!   "pieces": [
//!     { "at": { "x": 1, "y": 0 }, "piece": { "kind": "knight", "color": "white" } }
//!   ],
//!   "task": { "start": { "x": 1, "y": 0 }, "goal": { "x": 5, "y": 2 } }
//! }
//! ```

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chess::piece::{Piece, PieceKind};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::occupancy::Occupancy;
use crate::game::state::GameState;
use crate::game::task::Task;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse layout {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("board must have positive dimensions, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },

    #[error("square {at} is off the board")]
    OutOfBounds { at: Coord },

    #[error("square {at} is listed twice")]
    DuplicateSquare { at: Coord },

    #[error("task starts on {at}, which holds no {kind}")]
    MissingTrackedPiece { at: Coord, kind: PieceKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub at: Coord,
    pub piece: Piece,
}

impl Placement {
    pub const fn new(x: i32, y: i32, piece: Piece) -> Self {
        Self {
            at: Coord::new(x, y),
            piece,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    #[serde(default = "default_tracked_kind")]
    pub tracked_kind: PieceKind,
    pub start: Coord,
    pub goal: Coord,
}

fn default_tracked_kind() -> PieceKind {
    PieceKind::Knight
}

fn default_size() -> i32 {
    Board::STANDARD_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default = "default_size")]
    pub width: i32,
    #[serde(default = "default_size")]
    pub height: i32,
    pub pieces: Vec<Placement>,
    pub task: TaskConfig,
}

impl Default for DrillConfig {
    /// White's queen side plus a few black pieces; the knight on (1,0) heads for (5,2).
    fn default() -> Self {
        use PieceKind::*;
        let w = Piece::white;
        let b = Piece::black;
        Self {
            width: Board::STANDARD_SIZE,
            height: Board::STANDARD_SIZE,
            pieces: vec![
                Placement::new(0, 0, w(Rook)),
                Placement::new(1, 0, w(Knight)),
                Placement::new(2, 2, w(Bishop)),
                Placement::new(3, 1, w(Queen)),
                Placement::new(7, 0, w(Rook)),
                Placement::new(0, 1, w(Pawn)),
                Placement::new(1, 1, w(Pawn)),
                Placement::new(7, 1, w(Pawn)),
                Placement::new(0, 7, b(Rook)),
                Placement::new(7, 7, b(Rook)),
                Placement::new(4, 7, b(King)),
            ],
            task: TaskConfig {
                tracked_kind: Knight,
                start: Coord::new(1, 0),
                goal: Coord::new(5, 2),
            },
        }
    }
}

impl DrillConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_goal(mut self, goal: Coord) -> Self {
        self.task.goal = goal;
        self
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.width, self.height).ok_or(ConfigError::EmptyBoard {
            width: self.width,
            height: self.height,
        })
    }

    /// The starting occupancy, checked against `board`.
    pub fn occupancy(&self, board: &Board) -> Result<Occupancy, ConfigError> {
        let mut occ = Occupancy::new();
        for p in &self.pieces {
            if !board.in_bounds(p.at) {
                return Err(ConfigError::OutOfBounds { at: p.at });
            }
            if occ.is_occupied(p.at) {
                return Err(ConfigError::DuplicateSquare { at: p.at });
            }
            occ = occ.with_piece(p.at, p.piece);
        }
        Ok(occ)
    }

    /// Board plus the opening snapshot, with the tracked piece active.
    pub fn build(&self) -> Result<(Board, GameState), ConfigError> {
        let board = self.board()?;
        let occ = self.occupancy(&board)?;

        let TaskConfig {
            tracked_kind,
            start,
            goal,
        } = self.task;
        if !board.in_bounds(goal) {
            return Err(ConfigError::OutOfBounds { at: goal });
        }
        let tracked = occ
            .occupant_at(start)
            .filter(|p| p.kind == tracked_kind)
            .ok_or(ConfigError::MissingTrackedPiece {
                at: start,
                kind: tracked_kind,
            })?;

        let task = Task::new(tracked_kind, start, goal);
        Ok((board, GameState::new(tracked, start, occ, task)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_builds() {
        let (board, state) = DrillConfig::default().build().unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(state.occupancy().len(), 11);
        assert_eq!(state.active(), Piece::white(PieceKind::Knight));
        assert_eq!(state.active_at(), Coord::new(1, 0));
        assert_eq!(state.task().goal, Coord::new(5, 2));
    }

    #[test]
    fn tracked_kind_defaults_to_knight() {
        let json = r#"{
            "pieces": [ { "at": { "x": 0, "y": 0 }, "piece": { "kind": "knight", "color": "black" } } ],
            "task": { "start": { "x": 0, "y": 0 }, "goal": { "x": 7, "y": 7 } }
        }"#;
        let cfg: DrillConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.task.tracked_kind, PieceKind::Knight);
        assert_eq!((cfg.width, cfg.height), (8, 8));
        let (_, state) = cfg.build().unwrap();
        assert_eq!(state.active(), Piece::black(PieceKind::Knight));
    }
}
