//! Reference [`Host`] with no renderer: explicit Euler integration, a
//! stationary target, straight-flying projectiles and proximity contacts.
//!
//! Used by the test suite and the `meteorfall` runner.

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;

use meteorfall_core::constants::PROJECTILE_DESTROY_Y;
use meteorfall_core::enums::{ContactKind, MeteorKind};
use meteorfall_core::types::{EntityHandle, TargetRef};

use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Meteor(MeteorKind),
    Projectile,
}

/// A body integrated by the host.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A contact found by [`HeadlessHost::contacts`]: `(meteor, other, kind)`.
pub type Contact = (EntityHandle, EntityHandle, ContactKind);

#[derive(Debug, Clone)]
pub struct HeadlessHost {
    bodies: BTreeMap<EntityHandle, Body>,
    target: Option<TargetRef>,
    next_handle: u64,
    effects: Vec<(f32, f32)>,
    game_over_reports: u32,
    destroyed: Vec<EntityHandle>,
}

impl HeadlessHost {
    /// Host with a stationary target at `target_position`.
    pub fn new(target_position: Vec2) -> Self {
        let mut host = Self::without_target();
        host.respawn_target(target_position);
        host
    }

    pub fn without_target() -> Self {
        Self {
            bodies: BTreeMap::new(),
            target: None,
            next_handle: 1,
            effects: Vec::new(),
            game_over_reports: 0,
            destroyed: Vec::new(),
        }
    }

    fn allocate(&mut self) -> EntityHandle {
        let handle = EntityHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    pub fn target(&self) -> Option<TargetRef> {
        self.target
    }

    /// Move the target. No-op if there is none.
    pub fn set_target_position(&mut self, position: Vec2) {
        if let Some(target) = self.target.as_mut() {
            target.position = position;
        }
    }

    pub fn remove_target(&mut self) {
        self.target = None;
    }

    /// Place a fresh target (new handle) at `position`, replacing any existing one.
    pub fn respawn_target(&mut self, position: Vec2) -> EntityHandle {
        let handle = self.allocate();
        self.target = Some(TargetRef { handle, position });
        handle
    }

    pub fn spawn_projectile(&mut self, position: Vec2, velocity: Vec2) -> EntityHandle {
        let handle = self.allocate();
        self.bodies.insert(
            handle,
            Body {
                kind: BodyKind::Projectile,
                position,
                velocity,
            },
        );
        handle
    }

    pub fn body(&self, handle: EntityHandle) -> Option<&Body> {
        self.bodies.get(&handle)
    }

    /// Teleport a body. Returns `false` for unknown handles.
    pub fn set_position(&mut self, handle: EntityHandle, position: Vec2) -> bool {
        match self.bodies.get_mut(&handle) {
            Some(body) => {
                body.position = position;
                true
            }
            None => false,
        }
    }

    /// Drop a body without going through the simulation, as a host-side
    /// despawn would.
    pub fn forget(&mut self, handle: EntityHandle) -> bool {
        self.bodies.remove(&handle).is_some()
    }

    pub fn meteor_count(&self) -> usize {
        self.bodies
            .values()
            .filter(|b| matches!(b.kind, BodyKind::Meteor(_)))
            .count()
    }

    pub fn projectile_count(&self) -> usize {
        self.bodies
            .values()
            .filter(|b| b.kind == BodyKind::Projectile)
            .count()
    }

    /// Effect requests received, in order.
    pub fn effects(&self) -> &[(f32, f32)] {
        &self.effects
    }

    pub fn game_over_reports(&self) -> u32 {
        self.game_over_reports
    }

    /// Every handle the simulation asked to destroy that was live at the time.
    pub fn destroyed(&self) -> &[EntityHandle] {
        &self.destroyed
    }

    /// Explicit Euler step. Projectiles above the top edge are dropped.
    pub fn integrate(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            body.position += body.velocity * dt;
        }
        self.bodies.retain(|_, body| {
            !(body.kind == BodyKind::Projectile && body.position.y > PROJECTILE_DESTROY_Y)
        });
    }

    /// Meteor contacts within `radius`, in handle order.
    ///
    /// Each projectile is reported against at most one meteor (the first in
    /// handle order). Every meteor touching the target is reported.
    pub fn contacts(&self, radius: f32) -> Vec<Contact> {
        let radius_sq = radius * radius;
        let mut used: BTreeSet<EntityHandle> = BTreeSet::new();
        let mut contacts = Vec::new();

        for (&handle, body) in &self.bodies {
            if !matches!(body.kind, BodyKind::Meteor(_)) {
                continue;
            }

            let hit = self.bodies.iter().find(|(other, b)| {
                b.kind == BodyKind::Projectile
                    && !used.contains(*other)
                    && b.position.distance_squared(body.position) <= radius_sq
            });
            if let Some((&projectile, _)) = hit {
                used.insert(projectile);
                contacts.push((handle, projectile, ContactKind::Projectile));
            }

            if let Some(target) = self.target {
                if target.position.distance_squared(body.position) <= radius_sq {
                    contacts.push((handle, target.handle, ContactKind::Target));
                }
            }
        }
        contacts
    }
}

impl Host for HeadlessHost {
    fn resolve_target(&self) -> Option<TargetRef> {
        self.target
    }

    fn create_entity(&mut self, kind: MeteorKind, position: Vec2) -> EntityHandle {
        let handle = self.allocate();
        self.bodies.insert(
            handle,
            Body {
                kind: BodyKind::Meteor(kind),
                position,
                velocity: Vec2::ZERO,
            },
        );
        handle
    }

    fn apply_velocity(&mut self, handle: EntityHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.velocity = velocity;
        }
    }

    fn destroy_entity(&mut self, handle: EntityHandle) {
        if self.target.is_some_and(|t| t.handle == handle) {
            self.target = None;
            self.destroyed.push(handle);
        } else if self.bodies.remove(&handle).is_some() {
            self.destroyed.push(handle);
        }
    }

    fn trigger_effect(&mut self, intensity: f32, duration: f32) {
        self.effects.push((intensity, duration));
    }

    fn report_game_over(&mut self) {
        self.game_over_reports += 1;
    }

    fn entity_position(&self, handle: EntityHandle) -> Option<Vec2> {
        if let Some(target) = self.target.filter(|t| t.handle == handle) {
            return Some(target.position);
        }
        self.bodies.get(&handle).map(|b| b.position)
    }
}
