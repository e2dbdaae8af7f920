use glam::Vec2;

use meteorfall_core::types::EntityHandle;

use crate::params::SteeringParams;
use crate::steering::*;

fn params() -> SteeringParams {
    SteeringParams::default()
}

fn ctx<'a>(position: Vec2, target: Option<Vec2>, neighbors: &'a [Neighbor]) -> SteeringContext<'a> {
    SteeringContext {
        handle: EntityHandle(0),
        position,
        orbit_radius: 4.0,
        base_speed: 2.0,
        target,
        neighbors,
    }
}

// ---- Tangential speed bands ----

#[test]
fn test_near_band_uses_max_speed() {
    let p = params();
    assert_eq!(tangential_speed(0.0, &p), p.max_speed);
    assert_eq!(tangential_speed(1.5, &p), 6.0);
    assert_eq!(tangential_speed(1.999, &p), p.max_speed);
}

#[test]
fn test_middle_band_boost() {
    let p = params();
    let expected = 3.0 + 8.0 / (2.0 + 0.1);
    assert!((tangential_speed(2.0, &p) - expected).abs() < 1e-6);
    let expected = 3.0 + 8.0 / (4.9 + 0.1);
    assert!((tangential_speed(4.9, &p) - expected).abs() < 1e-5);
}

#[test]
fn test_far_band_uses_min_speed() {
    let p = params();
    assert_eq!(tangential_speed(5.0, &p), p.min_speed);
    assert_eq!(tangential_speed(50.0, &p), p.min_speed);
}

#[test]
fn test_scenario_distance_one_and_a_half() {
    // Entity 1.5 from the target with max speed 6 orbits at exactly 6.
    let p = SteeringParams {
        max_speed: 6.0,
        ..params()
    };
    let target = Vec2::new(10.0, -3.0);
    let position = target + Vec2::new(0.9, 1.2);
    assert_eq!(tangential_speed(position.distance(target), &p), 6.0);

    let v = orbit_velocity(position, target, 4.0, &p);
    let along = tangential_component(v, position, target);
    assert!((along - 6.0).abs() < 1e-4, "tangential component {along}");
}

// ---- Orbit term ----

#[test]
fn test_orbit_on_ring_has_no_correction() {
    let p = params();
    let target = Vec2::ZERO;
    // On the ring at radius 6: far band, correction vanishes.
    let position = Vec2::new(6.0, 0.0);
    let v = orbit_velocity(position, target, 6.0, &p);
    assert!(v.x.abs() < 1e-6, "no radial component on the ring, got {v:?}");
    assert!((v.y - p.min_speed).abs() < 1e-6, "counter-clockwise tangent");
}

#[test]
fn test_orbit_correction_is_unscaled() {
    let p = params();
    let target = Vec2::ZERO;
    // 10 out on +x, ring at 4: correction is exactly -6 on x.
    let position = Vec2::new(10.0, 0.0);
    let v = orbit_velocity(position, target, 4.0, &p);
    assert!((v.x + 6.0).abs() < 1e-6, "radial correction {}", v.x);
    assert!((v.y - p.min_speed).abs() < 1e-6);
}

#[test]
fn test_orbit_inside_ring_pushes_out() {
    let p = params();
    let v = orbit_velocity(Vec2::new(0.0, 1.0), Vec2::ZERO, 4.0, &p);
    assert!(v.y > 0.0, "inside the ring the correction points outward");
    assert!((v.x + p.max_speed).abs() < 1e-6, "tangent at +y points to -x");
}

#[test]
fn test_orbit_at_target_center_is_finite() {
    let v = orbit_velocity(Vec2::ZERO, Vec2::ZERO, 4.0, &params());
    assert!(v.is_finite());
    assert_eq!(v, Vec2::ZERO);
}

// ---- Avoidance term ----

#[test]
fn test_avoidance_skips_self() {
    let me = Neighbor {
        handle: EntityHandle(0),
        position: Vec2::ZERO,
    };
    let push = avoidance(EntityHandle(0), Vec2::ZERO, &[me], &params());
    assert_eq!(push, Vec2::ZERO);
}

#[test]
fn test_avoidance_beyond_radius_is_zero() {
    let p = params();
    let other = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(p.avoidance_radius + 0.01, 0.0),
    };
    assert_eq!(avoidance(EntityHandle(0), Vec2::ZERO, &[other], &p), Vec2::ZERO);

    // Exactly on the radius is outside (strict comparison).
    let edge = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(p.avoidance_radius, 0.0),
    };
    assert_eq!(avoidance(EntityHandle(0), Vec2::ZERO, &[edge], &p), Vec2::ZERO);
}

#[test]
fn test_avoidance_inverse_square() {
    let p = params();
    let other = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(1.0, 0.0),
    };
    // Offset (-1, 0), sqr_dist 1 → push (-1, 0) * strength.
    let push = avoidance(EntityHandle(0), Vec2::ZERO, &[other], &p);
    assert!((push.x + p.avoidance_strength).abs() < 1e-6);
    assert!(push.y.abs() < 1e-6);

    let closer = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(0.5, 0.0),
    };
    let push = avoidance(EntityHandle(0), Vec2::ZERO, &[closer], &p);
    assert!((push.x + 4.0 * p.avoidance_strength).abs() < 1e-5, "1 / 0.25 = 4");
}

#[test]
fn test_avoidance_epsilon_floor() {
    let p = params();
    let other = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(0.001, 0.0),
    };
    let push = avoidance(EntityHandle(0), Vec2::ZERO, &[other], &p);
    assert!(push.is_finite());
    let expected = p.avoidance_strength / p.avoidance_epsilon;
    assert!((push.length() - expected).abs() < 1e-3, "floored at 1/eps, got {push:?}");
}

#[test]
fn test_avoidance_coincident_is_zero() {
    let other = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(2.0, 2.0),
    };
    let push = avoidance(EntityHandle(0), Vec2::new(2.0, 2.0), &[other], &params());
    assert_eq!(push, Vec2::ZERO, "no direction to push along");
}

#[test]
fn test_avoidance_sums_neighbors() {
    let p = params();
    let left = Neighbor {
        handle: EntityHandle(1),
        position: Vec2::new(-1.0, 0.0),
    };
    let right = Neighbor {
        handle: EntityHandle(2),
        position: Vec2::new(1.0, 0.0),
    };
    let push = avoidance(EntityHandle(0), Vec2::ZERO, &[left, right], &p);
    assert!(push.length() < 1e-6, "symmetric neighbours cancel");
}

// ---- Combined ----

#[test]
fn test_desired_velocity_adds_avoidance_at_full_strength() {
    let p = params();
    let target = Vec2::ZERO;
    let position = Vec2::new(4.0, 0.0);
    let neighbors = [Neighbor {
        handle: EntityHandle(7),
        position: Vec2::new(4.0, 1.0),
    }];
    let c = ctx(position, Some(target), &neighbors);
    let v = desired_velocity(&c, &p);
    let expected = orbit_velocity(position, target, 4.0, &p)
        + avoidance(EntityHandle(0), position, &neighbors, &p);
    assert!((v - expected).length() < 1e-6);
}

#[test]
fn test_fallback_without_target() {
    let neighbors = [Neighbor {
        handle: EntityHandle(7),
        position: Vec2::new(0.5, 0.0),
    }];
    let c = ctx(Vec2::ZERO, None, &neighbors);
    let v = desired_velocity(&c, &params());
    assert_eq!(v, Vec2::new(0.0, -2.0), "straight down, no avoidance");
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_near_band_is_exactly_max_speed(dist in 0.0f32..1.9999) {
            let p = params();
            prop_assert_eq!(tangential_speed(dist, &p), p.max_speed);
        }

        #[test]
        fn test_far_band_is_exactly_min_speed(dist in 5.0f32..1000.0) {
            let p = params();
            prop_assert_eq!(tangential_speed(dist, &p), p.min_speed);
        }

        #[test]
        fn test_middle_band_between_extremes(dist in 2.0f32..4.999) {
            let p = params();
            let s = tangential_speed(dist, &p);
            prop_assert!(s > p.orbit_speed);
            prop_assert!(s <= p.orbit_speed + p.boost_numerator / (p.near_band + p.boost_offset) + 1e-5);
        }

        #[test]
        fn test_avoidance_zero_outside_radius(
            angle in 0.0f32..std::f32::consts::TAU,
            extra in 0.0f32..50.0,
        ) {
            let p = params();
            let r = p.avoidance_radius + extra + 1e-3;
            let other = Neighbor {
                handle: EntityHandle(1),
                position: Vec2::new(angle.cos(), angle.sin()) * r,
            };
            prop_assert_eq!(avoidance(EntityHandle(0), Vec2::ZERO, &[other], &p), Vec2::ZERO);
        }

        #[test]
        fn test_avoidance_is_antisymmetric(
            ax in -3.0f32..3.0, ay in -3.0f32..3.0,
            bx in -3.0f32..3.0, by in -3.0f32..3.0,
        ) {
            let p = params();
            let a = Neighbor { handle: EntityHandle(1), position: Vec2::new(ax, ay) };
            let b = Neighbor { handle: EntityHandle(2), position: Vec2::new(bx, by) };
            let on_a = avoidance(a.handle, a.position, &[a, b], &p);
            let on_b = avoidance(b.handle, b.position, &[a, b], &p);
            prop_assert!((on_a + on_b).length() <= 1e-3 * (1.0 + on_a.length()));
        }

        #[test]
        fn test_velocity_always_finite(
            px in -20.0f32..20.0, py in -20.0f32..20.0,
            radius in 4.0f32..6.0,
        ) {
            let p = params();
            let v = orbit_velocity(Vec2::new(px, py), Vec2::ZERO, radius, &p);
            prop_assert!(v.is_finite());
        }
    }
}
