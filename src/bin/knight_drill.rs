use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use knight_drill::chess::rules::knight_rule;
use knight_drill::config::DrillConfig;
use knight_drill::core::coord::Coord;
use knight_drill::game::drill::Drill;
use knight_drill::game::mover::{BoardMover, RuleCheckedMover};
use knight_drill::render::render_board;
use knight_drill::search::path::{path_cost, PathFinder, SearchOrder};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    /// Queue order (may overpay around captures)
    Fifo,
    /// Cheapest route first
    Weighted,
}

impl From<Order> for SearchOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Fifo => SearchOrder::Fifo,
            Order::Weighted => SearchOrder::Weighted,
        }
    }
}

#[derive(Parser)]
#[command(name = "knight_drill", about = "Replay the knight exercise along its planned route")]
struct Cli {
    /// JSON layout file (default: built-in layout)
    #[arg(long, env = "KNIGHT_DRILL_LAYOUT")]
    layout: Option<PathBuf>,

    /// Override the goal square, as X,Y
    #[arg(long, value_parser = parse_coord)]
    goal: Option<Coord>,

    /// Route search order
    #[arg(long, value_enum, default_value_t = Order::Fifo)]
    search: Order,

    /// Give up after this many knight jumps
    #[arg(long, default_value = "64")]
    max_steps: usize,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: i32 = x.trim().parse().map_err(|e| format!("bad X in '{s}': {e}"))?;
    let y: i32 = y.trim().parse().map_err(|e| format!("bad Y in '{s}': {e}"))?;
    Ok(Coord::new(x, y))
}

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    let mut cfg = match cli.layout {
        Some(ref path) => DrillConfig::load(path)?,
        None => DrillConfig::default(),
    };
    if let Some(goal) = cli.goal {
        cfg = cfg.with_goal(goal);
    }
    let (board, state) = cfg.build()?;

    let finder = PathFinder::new(board)
        .with_rule(Some(knight_rule))
        .with_order(cli.search.into());
    let mover = RuleCheckedMover::new(BoardMover, board);
    let mut drill = Drill::new(mover, finder, state);

    let task = drill.state().task();
    println!("{}", render_board(&board, drill.state().occupancy()));
    println!();
    println!(
        "Task: bring the {} from {} to {}",
        task.tracked_kind, task.tracked, task.goal
    );
    println!(
        "Route: {} (cost {})",
        drill
            .route()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" -> "),
        path_cost(drill.route(), drill.state().occupancy())
    );

    let mut steps = 0usize;
    while !drill.is_complete() {
        if steps == cli.max_steps {
            return Err(format!("gave up after {steps} jumps").into());
        }
        let to = drill.step_knight()?;
        steps += 1;
        println!();
        println!("Step {steps}: {} -> {to}", drill.state().active());
        println!("{}", render_board(&board, drill.state().occupancy()));
    }

    println!();
    println!("The {} reached {}.", task.tracked_kind, task.goal);
    Ok(())
}
