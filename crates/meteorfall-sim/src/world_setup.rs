//! Meteor spawn factories and spawn-ring geometry.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use meteorfall_core::components::Meteor;
use meteorfall_core::enums::MeteorKind;
use meteorfall_core::types::EntityHandle;

use crate::context::SimContext;
use crate::host::Host;

/// Create a meteor through the host and register it.
///
/// The orbit radius is jittered here, once, and stored on the meteor.
pub fn spawn_meteor(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    kind: MeteorKind,
    position: Vec2,
    target: Option<EntityHandle>,
) -> EntityHandle {
    let handle = host.create_entity(kind, position);

    let t = &ctx.tunables;
    let orbit_radius = t.orbit_distance + jitter(&mut ctx.rng, t.orbit_jitter);
    let meteor = Meteor {
        kind,
        hit_points: t.hit_points_for(kind),
        orbit_radius,
        base_speed: t.fallback_speed,
        target,
        dying: false,
    };

    if !ctx.registry.insert(handle, position, meteor) {
        log::warn!("host reissued live handle {handle:?}; keeping the existing meteor");
    }
    handle
}

/// Uniform sample in `[0, width)`, or 0 for an empty band.
fn jitter(rng: &mut ChaCha8Rng, width: f32) -> f32 {
    if width > 0.0 {
        rng.gen_range(0.0..width)
    } else {
        0.0
    }
}

/// Uniform sample in `[min, max]`.
pub fn sample_radius(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    rng.gen_range(min..=max)
}

/// Point at `angle` (radians, counter-clockwise from +x) and `radius` around `center`.
pub fn ring_point(center: Vec2, angle: f32, radius: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// Evenly spaced wave positions: angle `i * TAU / count`, radius sampled per meteor.
pub fn wave_positions(
    rng: &mut ChaCha8Rng,
    center: Vec2,
    count: u32,
    min_radius: f32,
    max_radius: f32,
) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let radius = sample_radius(rng, min_radius, max_radius);
            let angle = i as f32 * std::f32::consts::TAU / count as f32;
            ring_point(center, angle, radius)
        })
        .collect()
}

/// Elite spawn point: random angle, radius from the band plus `bonus`.
pub fn elite_position(
    rng: &mut ChaCha8Rng,
    center: Vec2,
    min_radius: f32,
    max_radius: f32,
    bonus: f32,
) -> Vec2 {
    let radius = sample_radius(rng, min_radius, max_radius) + bonus;
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    ring_point(center, angle, radius)
}
