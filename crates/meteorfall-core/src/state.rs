//! Simulation snapshot: the visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EntityHandle, Position, SimTime, Velocity};

/// Complete simulation state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub meteors: Vec<MeteorView>,
    pub wave: WaveView,
    /// Destructions queued on the deferred queue but not yet run.
    pub pending_destructions: u32,
    pub events: Vec<SimEvent>,
}

/// A live meteor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteorView {
    pub handle: EntityHandle,
    pub kind: MeteorKind,
    pub position: Position,
    pub velocity: Velocity,
    pub hit_points: u32,
    pub orbit_radius: f32,
    pub dying: bool,
}

/// Spawner bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Non-elite kills since the last elite spawn.
    pub kill_count: u32,
    pub kills_total: u32,
    pub waves_spawned: u32,
    pub elites_spawned: u32,
    /// Tick of the next timed wave, if the timer is armed.
    pub next_wave_tick: Option<u64>,
}
