//! Runtime tunables, optionally loaded from a JSON file.
//!
//! [`Tunables`] mirrors every default in [`crate::constants`]. Missing keys in
//! a config file fall back to those defaults, so a file can override just the
//! values it cares about:
//!
//! ```json
//! { "wave_count": 8, "meteors_until_big": 3 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tunable `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Static numeric tunables read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    // ── Physics step ────────────────────────────────────────────────────
    /// Seconds per physics tick.
    pub fixed_dt: f64,

    // ── Orbit ───────────────────────────────────────────────────────────
    pub orbit_distance: f32,
    pub orbit_jitter: f32,
    pub orbit_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub near_band: f32,
    pub far_band: f32,
    pub boost_numerator: f32,
    pub boost_offset: f32,

    // ── Avoidance ───────────────────────────────────────────────────────
    pub avoidance_strength: f32,
    pub avoidance_radius: f32,
    pub avoidance_epsilon: f32,

    // ── Fallback / bounds ───────────────────────────────────────────────
    pub fallback_speed: f32,
    pub destroy_y: f32,

    // ── Spawning ────────────────────────────────────────────────────────
    pub meteors_until_big: u32,
    /// Seconds before the first wave.
    pub spawn_delay: f64,
    /// Seconds between waves.
    pub spawn_interval: f64,
    pub wave_count: u32,
    pub min_spawn_radius: f32,
    pub max_spawn_radius: f32,
    pub elite_radius_bonus: f32,

    // ── Health ──────────────────────────────────────────────────────────
    pub normal_hit_points: u32,
    pub elite_hit_points: u32,
    /// Seconds between hit point depletion and removal.
    pub grace_delay: f64,

    // ── Feedback ────────────────────────────────────────────────────────
    pub shake_intensity: f32,
    pub shake_duration: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            fixed_dt: FIXED_DT,
            orbit_distance: ORBIT_DISTANCE,
            orbit_jitter: ORBIT_JITTER,
            orbit_speed: ORBIT_SPEED,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            near_band: NEAR_BAND,
            far_band: FAR_BAND,
            boost_numerator: BOOST_NUMERATOR,
            boost_offset: BOOST_OFFSET,
            avoidance_strength: AVOIDANCE_STRENGTH,
            avoidance_radius: AVOIDANCE_RADIUS,
            avoidance_epsilon: AVOIDANCE_EPSILON,
            fallback_speed: FALLBACK_SPEED,
            destroy_y: DESTROY_Y,
            meteors_until_big: METEORS_UNTIL_BIG,
            spawn_delay: SPAWN_DELAY,
            spawn_interval: SPAWN_INTERVAL,
            wave_count: WAVE_COUNT,
            min_spawn_radius: MIN_SPAWN_RADIUS,
            max_spawn_radius: MAX_SPAWN_RADIUS,
            elite_radius_bonus: ELITE_RADIUS_BONUS,
            normal_hit_points: NORMAL_HIT_POINTS,
            elite_hit_points: ELITE_HIT_POINTS,
            grace_delay: GRACE_DELAY,
            shake_intensity: SHAKE_INTENSITY,
            shake_duration: SHAKE_DURATION,
        }
    }
}

impl Tunables {
    /// Load and validate tunables from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Parse and validate tunables from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(data)?;
        tunables.validate()?;
        Ok(tunables)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // serde_json maps out-of-range floats such as 1e39 to infinity.
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }
        if !(self.fixed_dt > 0.0) {
            return Err(invalid("fixed_dt", "must be positive"));
        }
        if self.wave_count == 0 {
            return Err(invalid("wave_count", "must be at least 1"));
        }
        if self.meteors_until_big == 0 {
            return Err(invalid("meteors_until_big", "must be at least 1"));
        }
        if self.normal_hit_points == 0 {
            return Err(invalid("normal_hit_points", "must be at least 1"));
        }
        if self.elite_hit_points == 0 {
            return Err(invalid("elite_hit_points", "must be at least 1"));
        }
        if self.min_spawn_radius < 0.0 {
            return Err(invalid("min_spawn_radius", "must not be negative"));
        }
        if self.min_spawn_radius > self.max_spawn_radius {
            return Err(ConfigError::Invalid {
                field: "min_spawn_radius",
                reason: format!(
                    "{} exceeds max_spawn_radius {}",
                    self.min_spawn_radius, self.max_spawn_radius
                ),
            });
        }
        if self.near_band > self.far_band {
            return Err(invalid("near_band", "must not exceed far_band"));
        }
        if !(self.avoidance_epsilon > 0.0) {
            return Err(invalid("avoidance_epsilon", "must be positive"));
        }

        let non_negative_f32 = [
            ("orbit_distance", self.orbit_distance),
            ("orbit_jitter", self.orbit_jitter),
            ("orbit_speed", self.orbit_speed),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("avoidance_strength", self.avoidance_strength),
            ("avoidance_radius", self.avoidance_radius),
            ("fallback_speed", self.fallback_speed),
            ("elite_radius_bonus", self.elite_radius_bonus),
            ("shake_intensity", self.shake_intensity),
            ("shake_duration", self.shake_duration),
        ];
        for (field, value) in non_negative_f32 {
            if !(value >= 0.0) {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }

        let non_negative_f64 = [
            ("spawn_delay", self.spawn_delay),
            ("spawn_interval", self.spawn_interval),
            ("grace_delay", self.grace_delay),
        ];
        for (field, value) in non_negative_f64 {
            if !(value >= 0.0) {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }

        Ok(())
    }

    /// Every floating-point tunable by name, widened to `f64`.
    fn float_fields(&self) -> [(&'static str, f64); 23] {
        [
            ("fixed_dt", self.fixed_dt),
            ("orbit_distance", self.orbit_distance as f64),
            ("orbit_jitter", self.orbit_jitter as f64),
            ("orbit_speed", self.orbit_speed as f64),
            ("min_speed", self.min_speed as f64),
            ("max_speed", self.max_speed as f64),
            ("near_band", self.near_band as f64),
            ("far_band", self.far_band as f64),
            ("boost_numerator", self.boost_numerator as f64),
            ("boost_offset", self.boost_offset as f64),
            ("avoidance_strength", self.avoidance_strength as f64),
            ("avoidance_radius", self.avoidance_radius as f64),
            ("avoidance_epsilon", self.avoidance_epsilon as f64),
            ("fallback_speed", self.fallback_speed as f64),
            ("destroy_y", self.destroy_y as f64),
            ("spawn_delay", self.spawn_delay),
            ("spawn_interval", self.spawn_interval),
            ("min_spawn_radius", self.min_spawn_radius as f64),
            ("max_spawn_radius", self.max_spawn_radius as f64),
            ("elite_radius_bonus", self.elite_radius_bonus as f64),
            ("grace_delay", self.grace_delay),
            ("shake_intensity", self.shake_intensity as f64),
            ("shake_duration", self.shake_duration as f64),
        ]
    }

    /// Whole physics ticks covering `secs`, rounded up.
    pub fn ticks_for(&self, secs: f64) -> u64 {
        // Absorb float noise so 0.1 / 0.02 is 5, not 6.
        let ticks = (secs / self.fixed_dt - 1e-9).ceil();
        if ticks > 0.0 {
            ticks as u64
        } else {
            0
        }
    }

    /// Ticks between waves. Never zero.
    pub fn wave_interval_ticks(&self) -> u64 {
        self.ticks_for(self.spawn_interval).max(1)
    }

    /// Ticks a dying meteor lingers before removal. Never zero when a grace delay is set.
    pub fn grace_ticks(&self) -> u64 {
        let ticks = self.ticks_for(self.grace_delay);
        if self.grace_delay > 0.0 {
            ticks.max(1)
        } else {
            ticks
        }
    }

    /// Starting hit points for a meteor kind.
    pub fn hit_points_for(&self, kind: crate::enums::MeteorKind) -> u32 {
        match kind {
            crate::enums::MeteorKind::Normal => self.normal_hit_points,
            crate::enums::MeteorKind::Elite => self.elite_hit_points,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
