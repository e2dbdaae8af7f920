//! Core types and definitions for the METEORFALL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, constants and runtime tunables.
//! It has no dependency on an ECS or any host engine.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use config::{ConfigError, Tunables};
