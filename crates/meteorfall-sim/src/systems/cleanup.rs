//! Cleanup system: syncs positions from the host and removes meteors that
//! fell out of bounds or vanished host-side.

use meteorfall_core::enums::DestroyCause;
use meteorfall_core::events::SimEvent;
use meteorfall_core::types::EntityHandle;

use crate::context::SimContext;
use crate::host::Host;
use crate::systems::health;

/// Pull authoritative positions from the host. Handles the host no longer
/// knows about are deregistered without a destroy call.
pub fn sync_positions(ctx: &mut SimContext, host: &dyn Host) {
    let mut missing: Vec<EntityHandle> = Vec::new();
    for handle in ctx.registry.handles() {
        match host.entity_position(handle) {
            Some(position) => {
                ctx.registry.set_position(handle, position);
            }
            None => missing.push(handle),
        }
    }

    for handle in missing {
        if let Some(meteor) = ctx.registry.remove(handle) {
            log::debug!("meteor {handle:?} removed host-side; deregistered");
            ctx.events.push(SimEvent::MeteorDestroyed {
                handle,
                kind: meteor.kind,
                cause: DestroyCause::HostRemoved,
            });
        }
    }
}

/// Destroy every meteor below the lower boundary.
pub fn run(ctx: &mut SimContext, host: &mut dyn Host) {
    let destroy_y = ctx.tunables.destroy_y;
    let below = ctx.registry.handles_where(|pos| pos.y < destroy_y);

    for handle in below {
        if health::destroy_now(ctx, host, handle, DestroyCause::OutOfBounds) {
            log::debug!("meteor {handle:?} fell below y = {destroy_y}");
        }
    }
}
