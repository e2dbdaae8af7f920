//! Simulation engine for METEORFALL.
//!
//! Owns the meteor registry (a hecs world), runs systems at a fixed tick
//! rate against a [`Host`] that supplies the target and integrates motion,
//! and produces `SimSnapshot`s.

pub mod context;
pub mod deferred;
pub mod engine;
pub mod headless;
pub mod host;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use context::SimContext;
pub use engine::{SimConfig, SimulationEngine};
pub use headless::HeadlessHost;
pub use host::Host;
pub use meteorfall_core as core;
pub use registry::EntityRegistry;
