//! Health and destruction: contacts, damage and grace-delayed removal.

use meteorfall_core::enums::{ContactKind, DestroyCause, MeteorKind};
use meteorfall_core::events::SimEvent;
use meteorfall_core::types::EntityHandle;

use crate::context::SimContext;
use crate::deferred::DeferredAction;
use crate::host::Host;

/// Result of processing one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The meteor handle was not live; nothing happened.
    Ignored,
    /// A projectile was consumed. `killed` if this hit exhausted the meteor.
    Hit { killed: bool },
    /// A projectile struck a meteor that was already dying.
    HitWhileDying,
    /// The target was destroyed.
    GameOver,
    /// A meteor touched a target that is already gone. Nothing is reported.
    TargetAlreadyDown,
}

/// Process a contact between a live meteor and `other`.
pub fn handle_contact(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    meteor: EntityHandle,
    other: EntityHandle,
    kind: ContactKind,
) -> ContactOutcome {
    if !ctx.registry.contains(meteor) {
        log::debug!("contact for unknown meteor {meteor:?} ignored");
        return ContactOutcome::Ignored;
    }
    match kind {
        ContactKind::Projectile => projectile_hit(ctx, host, meteor, other),
        ContactKind::Target => target_hit(ctx, host, meteor, other),
    }
}

/// One point of damage. The projectile is always consumed.
fn projectile_hit(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    meteor: EntityHandle,
    projectile: EntityHandle,
) -> ContactOutcome {
    host.destroy_entity(projectile);

    let hit = ctx.registry.with_meteor_mut(meteor, |m| {
        if m.dying {
            return None;
        }
        m.hit_points = m.hit_points.saturating_sub(1);
        if m.hit_points == 0 {
            m.dying = true;
        }
        Some((m.kind, m.hit_points))
    });

    let Some(Some((kind, remaining))) = hit else {
        log::debug!("meteor {meteor:?} already dying; projectile absorbed");
        return ContactOutcome::HitWhileDying;
    };

    ctx.events.push(SimEvent::MeteorHit {
        handle: meteor,
        remaining_hit_points: remaining,
    });
    log::debug!("meteor {meteor:?} hit, {remaining} hp left");

    if remaining > 0 {
        return ContactOutcome::Hit { killed: false };
    }

    if kind == MeteorKind::Normal {
        ctx.kills.record_kill();
    }
    request_effect(ctx, host);

    let grace = ctx.tunables.grace_ticks();
    if grace == 0 {
        destroy_now(ctx, host, meteor, DestroyCause::ShotDown);
    } else {
        let due = ctx.time.tick + grace;
        ctx.deferred.schedule(due, DeferredAction::Destroy(meteor));
    }
    ContactOutcome::Hit { killed: true }
}

/// A meteor rammed the target. Normal meteors go down with it.
///
/// Game over is reported once, for the contact that finds the target alive.
fn target_hit(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    meteor: EntityHandle,
    target: EntityHandle,
) -> ContactOutcome {
    let target_live = host.resolve_target().is_some_and(|t| t.handle == target);
    let outcome = if target_live {
        host.destroy_entity(target);
        host.report_game_over();
        ctx.events.push(SimEvent::GameOver);
        log::info!("target {target:?} destroyed by meteor {meteor:?}; game over");
        ContactOutcome::GameOver
    } else {
        log::debug!("meteor {meteor:?} reached target {target:?} after it was destroyed");
        ContactOutcome::TargetAlreadyDown
    };

    let is_normal = ctx
        .registry
        .meteor(meteor)
        .is_some_and(|m| m.kind == MeteorKind::Normal);
    if is_normal {
        destroy_now(ctx, host, meteor, DestroyCause::TargetCollision);
    }
    outcome
}

fn request_effect(ctx: &mut SimContext, host: &mut dyn Host) {
    let (intensity, duration) = (ctx.tunables.shake_intensity, ctx.tunables.shake_duration);
    host.trigger_effect(intensity, duration);
    ctx.events.push(SimEvent::EffectRequested {
        intensity,
        duration,
    });
}

/// Deregister and destroy a meteor immediately. No-op if it is already gone.
pub fn destroy_now(
    ctx: &mut SimContext,
    host: &mut dyn Host,
    handle: EntityHandle,
    cause: DestroyCause,
) -> bool {
    let Some(meteor) = ctx.registry.remove(handle) else {
        return false;
    };
    host.destroy_entity(handle);
    ctx.events.push(SimEvent::MeteorDestroyed {
        handle,
        kind: meteor.kind,
        cause,
    });
    true
}

/// Run deferred actions due this tick.
pub fn run_deferred(ctx: &mut SimContext, host: &mut dyn Host) {
    for action in ctx.deferred.drain_due(ctx.time.tick) {
        match action {
            DeferredAction::Destroy(handle) => {
                if destroy_now(ctx, host, handle, DestroyCause::ShotDown) {
                    log::debug!("meteor {handle:?} removed after grace delay");
                }
            }
        }
    }
}
