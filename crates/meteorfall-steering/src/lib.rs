//! Meteor steering for METEORFALL.
//!
//! Pure functions that turn a meteor's situation (its position, the tracked
//! target, and a snapshot of its neighbours) into a desired velocity.
//! No ECS dependency; operates on plain data.

pub mod params;
pub mod steering;

pub use meteorfall_core as core;
pub use params::SteeringParams;
pub use steering::{desired_velocity, Neighbor, SteeringContext};

#[cfg(test)]
mod tests;
