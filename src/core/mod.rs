//! Board primitives shared by the rules, the game state and the route search:
//!
//! - [`coord`]: integer squares and the knight step set.
//! - [`board`]: fixed board dimensions and bounds checks.
//! - [`occupancy`]: the sparse, copy-on-write square → piece map.

pub mod board;
pub mod coord;
pub mod occupancy;
