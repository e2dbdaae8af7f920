//! Live meteor registry.
//!
//! Meteors live in a hecs world with `EntityHandle`, `Position`, `Velocity`
//! and `Meteor` components. A handle index maps host identities to hecs
//! entities. Removing a meteor despawns it in the same call, so queries
//! never see a destroyed meteor.

use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};

use meteorfall_core::components::Meteor;
use meteorfall_core::enums::MeteorKind;
use meteorfall_core::types::{EntityHandle, Position, Velocity};
use meteorfall_steering::Neighbor;

#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    index: HashMap<EntityHandle, Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a meteor. Returns `false` if the handle was already registered.
    pub fn insert(&mut self, handle: EntityHandle, position: Vec2, meteor: Meteor) -> bool {
        if self.index.contains_key(&handle) {
            return false;
        }
        let entity = self.world.spawn((
            handle,
            Position(position),
            Velocity::default(),
            meteor,
        ));
        self.index.insert(handle, entity);
        true
    }

    /// Deregister and despawn a meteor. `None` if it was not registered.
    pub fn remove(&mut self, handle: EntityHandle) -> Option<Meteor> {
        let entity = self.index.remove(&handle)?;
        let meteor = self.world.get::<&Meteor>(entity).ok().map(|m| (*m).clone());
        let _ = self.world.despawn(entity);
        meteor
    }

    /// Deregister everything, returning the handles that were live (sorted).
    pub fn clear(&mut self) -> Vec<EntityHandle> {
        let mut handles: Vec<EntityHandle> = self.index.keys().copied().collect();
        handles.sort();
        self.index.clear();
        self.world.clear();
        handles
    }

    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.index.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of live meteors of one kind.
    pub fn count_kind(&self, kind: MeteorKind) -> usize {
        self.world
            .query::<&Meteor>()
            .iter()
            .filter(|(_, meteor)| meteor.kind == kind)
            .count()
    }

    /// Copy of a meteor's state.
    pub fn meteor(&self, handle: EntityHandle) -> Option<Meteor> {
        let entity = *self.index.get(&handle)?;
        self.world.get::<&Meteor>(entity).ok().map(|m| (*m).clone())
    }

    /// Mutate a meteor in place.
    pub fn with_meteor_mut<R>(
        &mut self,
        handle: EntityHandle,
        f: impl FnOnce(&mut Meteor) -> R,
    ) -> Option<R> {
        let entity = *self.index.get(&handle)?;
        let mut meteor = self.world.get::<&mut Meteor>(entity).ok()?;
        Some(f(&mut *meteor))
    }

    pub fn position(&self, handle: EntityHandle) -> Option<Vec2> {
        let entity = *self.index.get(&handle)?;
        self.world.get::<&Position>(entity).ok().map(|p| p.0)
    }

    pub fn velocity(&self, handle: EntityHandle) -> Option<Vec2> {
        let entity = *self.index.get(&handle)?;
        self.world.get::<&Velocity>(entity).ok().map(|v| v.0)
    }

    pub fn set_position(&mut self, handle: EntityHandle, position: Vec2) -> bool {
        let Some(&entity) = self.index.get(&handle) else {
            return false;
        };
        match self.world.get::<&mut Position>(entity) {
            Ok(mut pos) => {
                pos.0 = position;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_velocity(&mut self, handle: EntityHandle, velocity: Vec2) -> bool {
        let Some(&entity) = self.index.get(&handle) else {
            return false;
        };
        match self.world.get::<&mut Velocity>(entity) {
            Ok(mut vel) => {
                vel.0 = velocity;
                true
            }
            Err(_) => false,
        }
    }

    /// All live handles, sorted.
    pub fn handles(&self) -> Vec<EntityHandle> {
        let mut handles: Vec<EntityHandle> = self.index.keys().copied().collect();
        handles.sort();
        handles
    }

    /// Handles of live meteors whose position satisfies `pred`, sorted.
    pub fn handles_where(&self, pred: impl Fn(Vec2) -> bool) -> Vec<EntityHandle> {
        let mut handles: Vec<EntityHandle> = self
            .world
            .query::<(&EntityHandle, &Position)>()
            .iter()
            .filter(|(_, (_, pos))| pred(pos.0))
            .map(|(_, (handle, _))| *handle)
            .collect();
        handles.sort();
        handles
    }

    /// Position snapshot of every live meteor, sorted by handle.
    pub fn neighbors(&self) -> Vec<Neighbor> {
        let mut out: Vec<Neighbor> = self
            .world
            .query::<(&EntityHandle, &Position)>()
            .iter()
            .map(|(_, (handle, pos))| Neighbor {
                handle: *handle,
                position: pos.0,
            })
            .collect();
        out.sort_by_key(|n| n.handle);
        out
    }

    /// Visit every live meteor in handle order.
    pub fn for_each(&self, mut f: impl FnMut(EntityHandle, &Position, &Velocity, &Meteor)) {
        let mut query = self
            .world
            .query::<(&EntityHandle, &Position, &Velocity, &Meteor)>();
        let mut rows: Vec<_> = query.iter().map(|(_, row)| row).collect();
        rows.sort_by_key(|(handle, ..)| **handle);
        for (handle, pos, vel, meteor) in rows {
            f(*handle, pos, vel, meteor);
        }
    }
}
