//! Wave spawning system: timed waves plus kill-count escalation.

use meteorfall_core::enums::MeteorKind;
use meteorfall_core::events::SimEvent;
use meteorfall_core::types::{EntityHandle, TargetRef};
use meteorfall_core::Tunables;

use crate::context::SimContext;
use crate::host::Host;
use crate::world_setup;

/// Non-elite kills since the last elite spawn.
///
/// The only way to consume the count is [`KillCounter::take_if_reached`],
/// which checks and resets in one `&mut self` call.
#[derive(Debug, Clone, Default)]
pub struct KillCounter {
    since_elite: u32,
    total: u32,
}

impl KillCounter {
    pub fn record_kill(&mut self) {
        self.since_elite += 1;
        self.total += 1;
    }

    /// Kills since the last elite spawn.
    pub fn count(&self) -> u32 {
        self.since_elite
    }

    /// Kills since the last restart.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// If the count has reached `threshold`, reset it to zero and return `true`.
    pub fn take_if_reached(&mut self, threshold: u32) -> bool {
        if self.since_elite >= threshold {
            self.since_elite = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Wave timer and spawn bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Tick of the next timed wave. `None` while the timer is stopped.
    pub next_wave_tick: Option<u64>,
    pub waves_spawned: u32,
    pub elites_spawned: u32,
}

impl WaveState {
    /// Start the timer: first wave after the spawn delay, counted from `now`.
    pub fn arm(&mut self, now: u64, tunables: &Tunables) {
        self.next_wave_tick = Some(now + tunables.ticks_for(tunables.spawn_delay));
    }

    pub fn stop(&mut self) {
        self.next_wave_tick = None;
    }
}

/// Run escalation, then the wave timer if `waves_enabled`.
pub fn run(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    target: Option<TargetRef>,
    waves_enabled: bool,
) {
    escalate(ctx, host, target);

    if !waves_enabled {
        return;
    }
    let Some(due) = ctx.wave.next_wave_tick else {
        return;
    };
    if ctx.time.tick >= due {
        spawn_wave(ctx, host, target);
        ctx.wave.next_wave_tick = Some(due + ctx.tunables.wave_interval_ticks());
    }
}

/// Spawn one elite if the kill threshold is reached. The counter resets on
/// the trigger even when the target is gone and nothing spawns.
pub fn escalate(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    target: Option<TargetRef>,
) -> Option<EntityHandle> {
    if !ctx.kills.take_if_reached(ctx.tunables.meteors_until_big) {
        return None;
    }

    let Some(target) = target else {
        log::debug!("elite trigger with no target; skipping spawn");
        return None;
    };

    let t = &ctx.tunables;
    let (min, max, bonus) = (t.min_spawn_radius, t.max_spawn_radius, t.elite_radius_bonus);
    let position = world_setup::elite_position(&mut ctx.rng, target.position, min, max, bonus);
    let handle = world_setup::spawn_meteor(
        ctx,
        host,
        MeteorKind::Elite,
        position,
        Some(target.handle),
    );

    ctx.wave.elites_spawned += 1;
    ctx.events.push(SimEvent::EliteSpawned { handle, position });
    log::info!(
        "elite meteor {handle:?} spawned at ({:.2}, {:.2})",
        position.x,
        position.y
    );
    Some(handle)
}

/// Spawn one wave of normal meteors evenly around the target.
/// No-op without a target.
pub fn spawn_wave(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    target: Option<TargetRef>,
) -> Vec<EntityHandle> {
    let Some(target) = target else {
        log::debug!("wave due with no target; skipping");
        return Vec::new();
    };

    let t = &ctx.tunables;
    let (count, min, max) = (t.wave_count, t.min_spawn_radius, t.max_spawn_radius);
    let positions = world_setup::wave_positions(&mut ctx.rng, target.position, count, min, max);

    let mut handles = Vec::with_capacity(positions.len());
    for position in positions {
        handles.push(world_setup::spawn_meteor(
            ctx,
            host,
            MeteorKind::Normal,
            position,
            Some(target.handle),
        ));
    }

    ctx.wave.waves_spawned += 1;
    ctx.events.push(SimEvent::WaveSpawned {
        count: handles.len() as u32,
        center: target.position,
    });
    log::info!(
        "wave {} spawned: {} meteors",
        ctx.wave.waves_spawned,
        handles.len()
    );
    handles
}
