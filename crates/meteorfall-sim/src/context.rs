//! Shared simulation state handed to every system.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use meteorfall_core::events::SimEvent;
use meteorfall_core::types::SimTime;
use meteorfall_core::Tunables;

use crate::deferred::DeferredQueue;
use crate::registry::EntityRegistry;
use crate::systems::wave_spawner::{KillCounter, WaveState};

/// Everything the systems read and write. Owned by `SimulationEngine`.
pub struct SimContext {
    pub registry: EntityRegistry,
    pub wave: WaveState,
    pub kills: KillCounter,
    pub deferred: DeferredQueue,
    pub rng: ChaCha8Rng,
    pub time: SimTime,
    pub tunables: Tunables,
    /// Events raised since the last snapshot.
    pub events: Vec<SimEvent>,
}

impl SimContext {
    pub fn new(seed: u64, tunables: Tunables) -> Self {
        Self {
            registry: EntityRegistry::new(),
            wave: WaveState::default(),
            kills: KillCounter::default(),
            deferred: DeferredQueue::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            time: SimTime::default(),
            tunables,
            events: Vec::new(),
        }
    }
}
