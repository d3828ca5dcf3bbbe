//! Game snapshots and the operations that replace them.
//!
//! - [`task`]: the tracked piece and its goal square.
//! - [`state`]: the immutable [`GameState`](state::GameState) snapshot.
//! - [`mover`]: move application, plain and rule-checked.
//! - [`drill`]: the guided knight exercise built on top of a mover and the route search.

pub mod drill;
pub mod mover;
pub mod state;
pub mod task;
