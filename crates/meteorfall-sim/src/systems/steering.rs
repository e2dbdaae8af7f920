//! Steering system: computes and applies every meteor's velocity.
//!
//! Positions are snapshotted once before the pass and every velocity is
//! computed from that snapshot, so processing order never matters.

use glam::Vec2;

use meteorfall_core::types::{EntityHandle, TargetRef};
use meteorfall_steering::{desired_velocity, SteeringContext, SteeringParams};

use crate::context::SimContext;
use crate::host::Host;

pub fn run(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    target: Option<TargetRef>,
    params: &SteeringParams,
) {
    let snapshot = ctx.registry.neighbors();

    // Compute everything first, then write.
    let mut updates: Vec<(EntityHandle, Vec2)> = Vec::with_capacity(snapshot.len());
    ctx.registry.for_each(|handle, pos, _vel, meteor| {
        // A meteor only orbits the target it was spawned against.
        let target_pos = match (meteor.target, target) {
            (Some(tracked), Some(resolved)) if tracked == resolved.handle => {
                Some(resolved.position)
            }
            (None, Some(resolved)) => Some(resolved.position),
            _ => None,
        };

        let steering = SteeringContext {
            handle,
            position: pos.0,
            orbit_radius: meteor.orbit_radius,
            base_speed: meteor.base_speed,
            target: target_pos,
            neighbors: &snapshot,
        };
        updates.push((handle, desired_velocity(&steering, params)));
    });

    for (handle, velocity) in updates {
        ctx.registry.set_velocity(handle, velocity);
        host.apply_velocity(handle, velocity);
    }
}
