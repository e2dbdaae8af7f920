//! Orbit, avoidance and fallback terms.
//!
//! A meteor with a target orbits it on a loose ring: a tangential term whose
//! speed depends on distance, plus an unscaled pull back toward the ring.
//! Nearby meteors push each other apart with an inverse-square falloff.
//! The terms are summed at full strength, never blended.

use glam::Vec2;

use meteorfall_core::types::EntityHandle;

use crate::params::SteeringParams;

/// Another live meteor as seen in this tick's position snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub handle: EntityHandle,
    pub position: Vec2,
}

/// Input to the steering model for a single meteor.
pub struct SteeringContext<'a> {
    pub handle: EntityHandle,
    pub position: Vec2,
    pub orbit_radius: f32,
    pub base_speed: f32,
    /// Target position, if the tracked target resolved this tick.
    pub target: Option<Vec2>,
    /// Snapshot of all live meteors. May include `handle` itself.
    pub neighbors: &'a [Neighbor],
}

/// Desired velocity for one meteor this physics step.
pub fn desired_velocity(ctx: &SteeringContext<'_>, params: &SteeringParams) -> Vec2 {
    match ctx.target {
        Some(target) => {
            orbit_velocity(ctx.position, target, ctx.orbit_radius, params)
                + avoidance(ctx.handle, ctx.position, ctx.neighbors, params)
        }
        None => fallback_velocity(ctx.base_speed),
    }
}

/// Tangential speed for a given distance from the target.
pub fn tangential_speed(dist: f32, params: &SteeringParams) -> f32 {
    if dist < params.near_band {
        params.max_speed
    } else if dist < params.far_band {
        params.orbit_speed + params.boost_numerator / (dist + params.boost_offset)
    } else {
        params.min_speed
    }
}

/// Orbit term: counter-clockwise tangent at the distance-banded speed, plus
/// the unscaled correction toward the ring of `orbit_radius`.
pub fn orbit_velocity(
    position: Vec2,
    target: Vec2,
    orbit_radius: f32,
    params: &SteeringParams,
) -> Vec2 {
    let d = position - target;
    let speed = tangential_speed(d.length(), params);

    let tangent = Vec2::new(-d.y, d.x).normalize_or_zero();
    let ring_point = target + d.normalize_or_zero() * orbit_radius;
    let correction = ring_point - position;

    tangent * speed + correction
}

/// Avoidance term summed over every neighbour inside the avoidance radius.
/// Entries whose handle equals `handle` are skipped.
pub fn avoidance(
    handle: EntityHandle,
    position: Vec2,
    neighbors: &[Neighbor],
    params: &SteeringParams,
) -> Vec2 {
    let radius_sq = params.avoidance_radius * params.avoidance_radius;
    let mut push = Vec2::ZERO;

    for other in neighbors {
        if other.handle == handle {
            continue;
        }
        let offset = position - other.position;
        let sqr_dist = offset.length_squared();
        if sqr_dist < radius_sq {
            push += offset.normalize_or_zero() * params.avoidance_strength
                / sqr_dist.max(params.avoidance_epsilon);
        }
    }

    push
}

/// Straight down at the meteor's base speed.
pub fn fallback_velocity(base_speed: f32) -> Vec2 {
    Vec2::new(0.0, -base_speed)
}

/// Component of `velocity` along the orbit tangent at `position`.
pub fn tangential_component(velocity: Vec2, position: Vec2, target: Vec2) -> f32 {
    let d = position - target;
    velocity.dot(Vec2::new(-d.y, d.x).normalize_or_zero())
}
