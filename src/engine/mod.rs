// Decision engine for the lighthouses bot: board model, shortest-path
// navigation, target scoring, connection geometry, and the per-turn
// decision state machine.

pub mod board;
pub mod config;
pub mod decision;
pub mod geometry;
pub mod navigator;
pub mod scorer;
