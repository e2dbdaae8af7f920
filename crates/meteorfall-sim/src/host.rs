//! The seam between the simulation and the engine hosting it.
//!
//! The host owns rendering, physics integration, the player and projectiles.
//! The simulation only decides what should exist and how fast it should move.

use glam::Vec2;

use meteorfall_core::enums::MeteorKind;
use meteorfall_core::types::{EntityHandle, TargetRef};

/// Services the simulation consumes from its host.
pub trait Host {
    /// Locate the current target, if it still exists.
    fn resolve_target(&self) -> Option<TargetRef>;

    /// Instantiate a meteor at `position` and return its handle.
    fn create_entity(&mut self, kind: MeteorKind, position: Vec2) -> EntityHandle;

    /// Hand a desired velocity to the integrator.
    fn apply_velocity(&mut self, handle: EntityHandle, velocity: Vec2);

    /// Remove an entity (meteor, projectile or target). Unknown handles are ignored.
    fn destroy_entity(&mut self, handle: EntityHandle);

    /// Request camera / visual feedback.
    fn trigger_effect(&mut self, intensity: f32, duration: f32);

    /// The target was destroyed.
    fn report_game_over(&mut self);

    /// Current integrated position of an entity, `None` if the host dropped it.
    fn entity_position(&self, handle: EntityHandle) -> Option<Vec2>;
}
