//! Simulation constants and tuning defaults.
//!
//! These are the authoritative defaults behind `Tunables::default()`.

/// Physics tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per physics tick.
pub const FIXED_DT: f64 = 1.0 / TICK_RATE as f64;

// --- Orbit steering ---

/// Base orbit radius around the target, before per-meteor jitter.
pub const ORBIT_DISTANCE: f32 = 4.0;

/// Width of the uniform jitter added to the orbit radius at creation: `[0, ORBIT_JITTER)`.
pub const ORBIT_JITTER: f32 = 2.0;

/// Tangential speed baseline inside the middle distance band.
pub const ORBIT_SPEED: f32 = 3.0;

/// Tangential speed at or beyond `FAR_BAND`.
pub const MIN_SPEED: f32 = 1.0;

/// Tangential speed inside `NEAR_BAND`.
pub const MAX_SPEED: f32 = 6.0;

/// Distances below this orbit at `MAX_SPEED`.
pub const NEAR_BAND: f32 = 2.0;

/// Distances at or beyond this orbit at `MIN_SPEED`.
pub const FAR_BAND: f32 = 5.0;

/// Middle band speed is `ORBIT_SPEED + BOOST_NUMERATOR / (dist + BOOST_OFFSET)`.
pub const BOOST_NUMERATOR: f32 = 8.0;

pub const BOOST_OFFSET: f32 = 0.1;

// --- Avoidance ---

/// Strength of meteor-meteor repulsion.
pub const AVOIDANCE_STRENGTH: f32 = 1.0;

/// Meteors closer than this repel each other.
pub const AVOIDANCE_RADIUS: f32 = 2.0;

/// Floor on squared separation in the avoidance falloff.
pub const AVOIDANCE_EPSILON: f32 = 0.01;

// --- Fallback movement ---

/// Downward speed when no target can be resolved.
pub const FALLBACK_SPEED: f32 = 2.0;

/// Meteors below this y are removed.
pub const DESTROY_Y: f32 = -15.0;

// --- Wave spawning ---

/// Non-elite kills needed before an elite meteor spawns.
pub const METEORS_UNTIL_BIG: u32 = 5;

/// Delay before the first wave (seconds).
pub const SPAWN_DELAY: f64 = 1.0;

/// Interval between waves (seconds).
pub const SPAWN_INTERVAL: f64 = 0.5;

/// Meteors per wave.
pub const WAVE_COUNT: u32 = 5;

/// Spawn radius band around the target.
pub const MIN_SPAWN_RADIUS: f32 = 3.0;
pub const MAX_SPAWN_RADIUS: f32 = 7.0;

/// Extra radius added to an elite spawn.
pub const ELITE_RADIUS_BONUS: f32 = 1.0;

// --- Health ---

pub const NORMAL_HIT_POINTS: u32 = 1;
pub const ELITE_HIT_POINTS: u32 = 5;

/// Pause between hit point depletion and removal (seconds).
pub const GRACE_DELAY: f64 = 0.1;

// --- Presentation feedback ---

/// Camera shake requested on a kill.
pub const SHAKE_INTENSITY: f32 = 4.0;
pub const SHAKE_DURATION: f32 = 1.0;

// --- Headless host ---

/// Projectile speed (straight up).
pub const PROJECTILE_SPEED: f32 = 8.0;

/// Projectiles above this y are removed.
pub const PROJECTILE_DESTROY_Y: f32 = 11.0;

/// Seconds between turret shots.
pub const FIRE_COOLDOWN: f64 = 1.0;

/// Projectiles spawn this far above the target.
pub const MUZZLE_OFFSET: f32 = 1.0;

/// Separation below which the headless host reports a contact.
pub const CONTACT_RADIUS: f32 = 0.5;
