//! Events emitted by the simulation for presentation and scoring feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityHandle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A timed wave was spawned around the target.
    WaveSpawned { count: u32, center: Vec2 },
    /// The kill threshold was reached and an elite meteor spawned.
    EliteSpawned { handle: EntityHandle, position: Vec2 },
    /// A projectile hit a meteor.
    MeteorHit {
        handle: EntityHandle,
        remaining_hit_points: u32,
    },
    /// A meteor was removed from the simulation.
    MeteorDestroyed {
        handle: EntityHandle,
        kind: MeteorKind,
        cause: DestroyCause,
    },
    /// A visual effect (camera shake) was requested from the host.
    EffectRequested { intensity: f32, duration: f32 },
    /// The target was destroyed.
    GameOver,
}
