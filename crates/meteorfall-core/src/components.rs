//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::MeteorKind;
use crate::types::EntityHandle;

/// Per-meteor state. Position, velocity and the host handle are separate components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub kind: MeteorKind,
    /// Hit points remaining. Zero means destruction is pending.
    pub hit_points: u32,
    /// Radius of the ring this meteor orbits on, jittered once at creation.
    pub orbit_radius: f32,
    /// Straight-line speed used when the target cannot be resolved.
    pub base_speed: f32,
    /// The target this meteor was spawned against.
    pub target: Option<EntityHandle>,
    /// Hit points exhausted and a deferred destroy is queued.
    #[serde(default)]
    pub dying: bool,
}
