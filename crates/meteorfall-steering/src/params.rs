//! Steering parameters.
//!
//! Consolidates the tunables the steering functions read.

use meteorfall_core::Tunables;

/// Parameters for the orbit and avoidance terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    /// Middle band speed baseline.
    pub orbit_speed: f32,
    /// Speed at or beyond `far_band`.
    pub min_speed: f32,
    /// Speed inside `near_band`.
    pub max_speed: f32,
    pub near_band: f32,
    pub far_band: f32,
    pub boost_numerator: f32,
    pub boost_offset: f32,
    pub avoidance_strength: f32,
    pub avoidance_radius: f32,
    /// Floor on squared separation.
    pub avoidance_epsilon: f32,
}

impl SteeringParams {
    pub fn from_tunables(t: &Tunables) -> Self {
        Self {
            orbit_speed: t.orbit_speed,
            min_speed: t.min_speed,
            max_speed: t.max_speed,
            near_band: t.near_band,
            far_band: t.far_band,
            boost_numerator: t.boost_numerator,
            boost_offset: t.boost_offset,
            avoidance_strength: t.avoidance_strength,
            avoidance_radius: t.avoidance_radius,
            avoidance_epsilon: t.avoidance_epsilon,
        }
    }
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self::from_tunables(&Tunables::default())
    }
}
