//! Knight route search.
//!
//! Edges are knight jumps; landing on an opposing piece costs 2, any other
//! square 1 (see [`knight_weight`]).
//!
//! The default [`SearchOrder::Fifo`] expands squares in plain queue order and
//! relaxes distances as it goes. A square that was already expanded is only
//! expanded again if a cheaper distance re-enqueues it, and the search stops
//! the moment the goal is dequeued, so with captures on the board the route
//! can cost more than the cheapest one. [`SearchOrder::Weighted`] expands by
//! distance instead and always returns a cheapest route.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::FxHashMap;

use crate::chess::piece::Color;
use crate::chess::rules::{knight_weight, MoveRule};
use crate::core::board::Board;
use crate::core::coord::{Coord, KNIGHT_STEPS};
use crate::core::occupancy::Occupancy;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Queue order with distance relaxation.
    #[default]
    Fifo,
    /// Cheapest-first.
    Weighted,
}

/// Configured route search.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder {
    pub board: Board,
    /// Extra legality filter applied to every jump.
    pub rule: Option<MoveRule>,
    pub order: SearchOrder,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self {
            board: Board::standard(),
            rule: None,
            order: SearchOrder::Fifo,
        }
    }
}

impl PathFinder {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn with_rule(mut self, rule: Option<MoveRule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    /// Squares from `start` to `goal` inclusive, or empty if `goal` is not reached.
    ///
    /// The knight's colour is taken from the piece on `start` (White if empty).
    pub fn find(&self, start: Coord, goal: Coord, occ: &Occupancy) -> Vec<Coord> {
        let mover = occ.color_at(start).unwrap_or(Color::White);
        // only on-board squares are ever expanded, so jumps cannot overflow
        let pred = if !self.board.in_bounds(start) {
            FxHashMap::default()
        } else {
            match self.order {
                SearchOrder::Fifo => self.expand_fifo(start, goal, mover, occ),
                SearchOrder::Weighted => self.expand_weighted(start, goal, mover, occ),
            }
        };
        let path = reconstruct(&pred, start, goal);
        tracing::debug!(
            %start,
            %goal,
            order = ?self.order,
            visited = pred.len(),
            steps = path.len().saturating_sub(1),
            "knight route search"
        );
        path
    }

    /// Like [`PathFinder::find`], but an empty result is an error.
    pub fn route(&self, start: Coord, goal: Coord, occ: &Occupancy) -> Result<Vec<Coord>, MoveError> {
        let path = self.find(start, goal, occ);
        if path.is_empty() {
            return Err(MoveError::UnreachableTarget { start, goal });
        }
        Ok(path)
    }

    /// Jumps from `from` that stay on the board and pass the optional rule.
    fn jumps<'a>(&'a self, from: Coord, occ: &'a Occupancy) -> impl Iterator<Item = Coord> + 'a {
        KNIGHT_STEPS
            .into_iter()
            .map(move |d| from + d)
            .filter(move |&to| self.board.in_bounds(to))
            .filter(move |&to| self.rule.map_or(true, |rule| rule(&self.board, from, to, occ)))
    }

    fn expand_fifo(
        &self,
        start: Coord,
        goal: Coord,
        mover: Color,
        occ: &Occupancy,
    ) -> FxHashMap<Coord, Coord> {
        let n = self.board.square_count();
        let mut dist: FxHashMap<Coord, u32> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut pred: FxHashMap<Coord, Coord> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut q: VecDeque<Coord> = VecDeque::new();

        dist.insert(start, 0);
        q.push_back(start);

        while let Some(cur) = q.pop_front() {
            if cur == goal {
                break;
            }
            let d = dist[&cur];
            for next in self.jumps(cur, occ) {
                let nd = d + knight_weight(mover, next, occ).cost();
                if dist.get(&next).map_or(true, |&old| nd < old) {
                    dist.insert(next, nd);
                    pred.insert(next, cur);
                    q.push_back(next);
                }
            }
        }

        pred
    }

    fn expand_weighted(
        &self,
        start: Coord,
        goal: Coord,
        mover: Color,
        occ: &Occupancy,
    ) -> FxHashMap<Coord, Coord> {
        let n = self.board.square_count();
        let mut dist: FxHashMap<Coord, u32> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut pred: FxHashMap<Coord, Coord> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut heap: BinaryHeap<Reverse<(u32, Coord)>> = BinaryHeap::new();

        dist.insert(start, 0);
        heap.push(Reverse((0, start)));

        while let Some(Reverse((d, cur))) = heap.pop() {
            if cur == goal {
                break;
            }
            // stale heap entry
            if dist.get(&cur).is_some_and(|&best| d > best) {
                continue;
            }
            for next in self.jumps(cur, occ) {
                let nd = d + knight_weight(mover, next, occ).cost();
                if dist.get(&next).map_or(true, |&old| nd < old) {
                    dist.insert(next, nd);
                    pred.insert(next, cur);
                    heap.push(Reverse((nd, next)));
                }
            }
        }

        pred
    }
}

fn reconstruct(pred: &FxHashMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
    if start == goal {
        return vec![start];
    }
    if !pred.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        match pred.get(&cur) {
            Some(&p) => {
                path.push(p);
                cur = p;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Knight route on the standard 8×8 board with the default (queue-order) search.
pub fn find_path(start: Coord, goal: Coord, occ: &Occupancy, rule: Option<MoveRule>) -> Vec<Coord> {
    find_path_on(&Board::standard(), start, goal, occ, rule)
}

pub fn find_path_on(
    board: &Board,
    start: Coord,
    goal: Coord,
    occ: &Occupancy,
    rule: Option<MoveRule>,
) -> Vec<Coord> {
    PathFinder::new(*board).with_rule(rule).find(start, goal, occ)
}

/// Total landing cost of a route for the knight standing on `path[0]`.
pub fn path_cost(path: &[Coord], occ: &Occupancy) -> u32 {
    let Some(&first) = path.first() else {
        return 0;
    };
    let mover = occ.color_at(first).unwrap_or(Color::White);
    path.iter()
        .skip(1)
        .map(|&sq| knight_weight(mover, sq, occ).cost())
        .sum()
}
