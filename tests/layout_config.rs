use std::fs;
use std::path::Path;

use knight_drill::chess::piece::{Piece, PieceKind};
use knight_drill::config::{ConfigError, DrillConfig, Placement, TaskConfig};
use knight_drill::core::coord::Coord;

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn write_layout(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("layout.json");
    fs::write(&path, body).unwrap();
    path
}

fn small_config() -> DrillConfig {
    DrillConfig {
        width: 5,
        height: 4,
        pieces: vec![
            Placement::new(0, 0, Piece::black(PieceKind::Knight)),
            Placement::new(2, 1, Piece::white(PieceKind::Pawn)),
        ],
        task: TaskConfig {
            tracked_kind: PieceKind::Knight,
            start: c(0, 0),
            goal: c(4, 3),
        },
    }
}

#[test]
fn load_layout_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(
        dir.path(),
        r#"{
            "width": 6,
            "height": 6,
            "pieces": [
                { "at": { "x": 1, "y": 0 }, "piece": { "kind": "knight", "color": "white" } },
                { "at": { "x": 3, "y": 3 }, "piece": { "kind": "rook", "color": "black" } }
            ],
            "task": { "start": { "x": 1, "y": 0 }, "goal": { "x": 5, "y": 5 } }
        }"#,
    );

    let cfg = DrillConfig::load(&path).unwrap();
    let (board, state) = cfg.build().unwrap();
    assert_eq!((board.width(), board.height()), (6, 6));
    assert_eq!(state.occupancy().len(), 2);
    assert_eq!(
        state.occupancy().occupant_at(c(3, 3)),
        Some(Piece::black(PieceKind::Rook))
    );
    assert_eq!(state.task().goal, c(5, 5));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = small_config();
    let path = write_layout(dir.path(), &serde_json::to_string_pretty(&cfg).unwrap());
    assert_eq!(DrillConfig::load(&path).unwrap(), cfg);

    let default = DrillConfig::default();
    let path = write_layout(dir.path(), &serde_json::to_string(&default).unwrap());
    assert_eq!(DrillConfig::load(&path).unwrap(), default);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DrillConfig::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), r#"{ "pieces": [], "task": "#);
    let err = DrillConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");

    let path = write_layout(
        dir.path(),
        r#"{ "pieces": [ { "at": { "x": 0, "y": 0 }, "piece": { "kind": "dragon", "color": "white" } } ],
             "task": { "start": { "x": 0, "y": 0 }, "goal": { "x": 1, "y": 2 } } }"#,
    );
    assert!(matches!(
        DrillConfig::load(&path).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn layout_validation() {
    let mut cfg = small_config();
    cfg.width = 0;
    assert!(matches!(
        cfg.build().unwrap_err(),
        ConfigError::EmptyBoard { width: 0, height: 4 }
    ));

    let mut cfg = small_config();
    cfg.pieces.push(Placement::new(5, 0, Piece::white(PieceKind::King)));
    assert!(matches!(
        cfg.build().unwrap_err(),
        ConfigError::OutOfBounds { at } if at == c(5, 0)
    ));

    let mut cfg = small_config();
    cfg.pieces.push(Placement::new(2, 1, Piece::black(PieceKind::King)));
    assert!(matches!(
        cfg.build().unwrap_err(),
        ConfigError::DuplicateSquare { at } if at == c(2, 1)
    ));

    let cfg = small_config().with_goal(c(4, 4));
    assert!(matches!(
        cfg.build().unwrap_err(),
        ConfigError::OutOfBounds { at } if at == c(4, 4)
    ));
}

#[test]
fn task_must_start_on_the_tracked_kind() {
    let mut cfg = small_config();
    cfg.task.start = c(2, 1);
    assert!(matches!(
        cfg.build().unwrap_err(),
        ConfigError::MissingTrackedPiece { at, kind: PieceKind::Knight } if at == c(2, 1)
    ));

    let mut cfg = small_config();
    cfg.task.start = c(3, 3);
    assert!(matches!(
        cfg.build().unwrap_err(),
        ConfigError::MissingTrackedPiece { .. }
    ));

    // any kind can be tracked
    let mut cfg = small_config();
    cfg.task = TaskConfig {
        tracked_kind: PieceKind::Pawn,
        start: c(2, 1),
        goal: c(2, 3),
    };
    let (_, state) = cfg.build().unwrap();
    assert_eq!(state.active(), Piece::white(PieceKind::Pawn));
}

#[test]
fn goal_override() {
    let cfg = DrillConfig::default().with_goal(c(7, 7));
    let (_, state) = cfg.build().unwrap();
    assert_eq!(state.task().goal, c(7, 7));
    assert_eq!(state.task().tracked, c(1, 0));
}
