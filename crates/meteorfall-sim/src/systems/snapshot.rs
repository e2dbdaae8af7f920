//! Snapshot system: builds a `SimSnapshot` from the context.
//!
//! Read-only apart from draining the pending event list.

use meteorfall_core::enums::GamePhase;
use meteorfall_core::state::{MeteorView, SimSnapshot, WaveView};

use crate::context::SimContext;

/// Build the snapshot for the current tick, taking the events raised since
/// the previous one.
pub fn build_snapshot(ctx: &mut SimContext, phase: GamePhase) -> SimSnapshot {
    let mut meteors = Vec::with_capacity(ctx.registry.len());
    ctx.registry.for_each(|handle, pos, vel, meteor| {
        meteors.push(MeteorView {
            handle,
            kind: meteor.kind,
            position: *pos,
            velocity: *vel,
            hit_points: meteor.hit_points,
            orbit_radius: meteor.orbit_radius,
            dying: meteor.dying,
        });
    });

    SimSnapshot {
        time: ctx.time,
        phase,
        meteors,
        wave: WaveView {
            kill_count: ctx.kills.count(),
            kills_total: ctx.kills.total(),
            waves_spawned: ctx.wave.waves_spawned,
            elites_spawned: ctx.wave.elites_spawned,
            next_wave_tick: ctx.wave.next_wave_tick,
        },
        pending_destructions: ctx.deferred.len() as u32,
        events: std::mem::take(&mut ctx.events),
    }
}
