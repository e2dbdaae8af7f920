//! Stand-in for the player's gun: fires straight up from the target on a
//! fixed cooldown.

use glam::Vec2;

use meteorfall_core::constants::{FIRE_COOLDOWN, MUZZLE_OFFSET, PROJECTILE_SPEED};
use meteorfall_core::types::EntityHandle;
use meteorfall_sim::{HeadlessHost, Host};

#[derive(Debug, Clone)]
pub struct Turret {
    cooldown_ticks: u64,
    next_fire_tick: u64,
}

impl Turret {
    pub fn new(fixed_dt: f64) -> Self {
        let cooldown_ticks = ((FIRE_COOLDOWN / fixed_dt).round() as u64).max(1);
        Self {
            cooldown_ticks,
            next_fire_tick: 0,
        }
    }

    pub fn cooldown_ticks(&self) -> u64 {
        self.cooldown_ticks
    }

    /// Fire if the cooldown has elapsed and there is a target to fire from.
    pub fn update(&mut self, tick: u64, host: &mut HeadlessHost) -> Option<EntityHandle> {
        if tick < self.next_fire_tick {
            return None;
        }
        let target = host.resolve_target()?;

        let muzzle = target.position + Vec2::new(0.0, MUZZLE_OFFSET);
        let projectile = host.spawn_projectile(muzzle, Vec2::new(0.0, PROJECTILE_SPEED));
        self.next_fire_tick = tick + self.cooldown_ticks;
        Some(projectile)
    }

    pub fn reset(&mut self) {
        self.next_fire_tick = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meteorfall_core::constants::FIXED_DT;

    #[test]
    fn test_cooldown_at_50hz() {
        assert_eq!(Turret::new(FIXED_DT).cooldown_ticks(), 50);
    }

    #[test]
    fn test_fires_once_per_cooldown() {
        let mut host = HeadlessHost::new(Vec2::ZERO);
        let mut turret = Turret::new(FIXED_DT);

        assert!(turret.update(0, &mut host).is_some());
        assert!(turret.update(1, &mut host).is_none());
        assert!(turret.update(49, &mut host).is_none());
        assert!(turret.update(50, &mut host).is_some());
        assert_eq!(host.projectile_count(), 2);
    }

    #[test]
    fn test_no_target_no_fire() {
        let mut host = HeadlessHost::without_target();
        let mut turret = Turret::new(FIXED_DT);
        assert!(turret.update(0, &mut host).is_none());
        assert_eq!(host.projectile_count(), 0);
    }

    #[test]
    fn test_projectile_leaves_muzzle_upward() {
        let mut host = HeadlessHost::new(Vec2::new(2.0, -3.0));
        let mut turret = Turret::new(FIXED_DT);
        let handle = turret.update(0, &mut host).unwrap();

        let body = host.body(handle).unwrap();
        assert_eq!(body.position, Vec2::new(2.0, -2.0));
        assert_eq!(body.velocity, Vec2::new(0.0, 8.0));
    }
}
