//! METEORFALL headless runner.
//!
//! Wires the simulation engine to the headless host, a turret standing in for
//! the player, and a game loop thread.

pub mod game_loop;
pub mod logging;
pub mod state;
pub mod turret;

pub use meteorfall_core as core;
