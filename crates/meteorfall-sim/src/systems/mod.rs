//! Systems that operate on the simulation context each tick.
//!
//! Systems are plain functions over `&mut SimContext` and the host.
//! They do not own state; all state lives in the context.

pub mod cleanup;
pub mod health;
pub mod snapshot;
pub mod steering;
pub mod wave_spawner;
