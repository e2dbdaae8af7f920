//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Meteor classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeteorKind {
    /// One-hit meteor spawned in waves. Counts toward escalation when shot down.
    #[default]
    Normal,
    /// Multi-hit "big" meteor spawned when the kill counter reaches its threshold.
    Elite,
}

/// What a meteor made contact with, as reported by the host's collision layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    /// The tracked target (player ship).
    Target,
    /// A player projectile.
    Projectile,
}

/// Why a meteor left the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestroyCause {
    /// Hit points exhausted by projectiles (after the grace delay).
    ShotDown,
    /// Rammed the target.
    TargetCollision,
    /// Fell below the lower boundary.
    OutOfBounds,
    /// The host no longer knows the entity.
    HostRemoved,
    /// Cleared by a restart.
    Restart,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, waiting for `Start`.
    #[default]
    Idle,
    Active,
    Paused,
    /// Target destroyed. Meteors keep moving; waves stop.
    GameOver,
}
