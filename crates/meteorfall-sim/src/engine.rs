//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the simulation context, processes commands, runs
//! all systems against a [`Host`], and produces `SimSnapshot`s. The host does
//! the physics integration and rendering; the engine never blocks on it.

use std::collections::VecDeque;

use meteorfall_core::commands::SimCommand;
use meteorfall_core::enums::{ContactKind, DestroyCause, GamePhase};
use meteorfall_core::events::SimEvent;
use meteorfall_core::state::SimSnapshot;
use meteorfall_core::types::{EntityHandle, SimTime};
use meteorfall_core::{ConfigError, Tunables};
use meteorfall_steering::SteeringParams;

use crate::context::SimContext;
use crate::host::Host;
use crate::registry::EntityRegistry;
use crate::systems;
use crate::systems::health::ContactOutcome;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub tunables: Tunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            tunables: Tunables::default(),
        }
    }
}

/// The simulation engine. Owns the meteor registry and all sim state.
pub struct SimulationEngine {
    ctx: SimContext,
    phase: GamePhase,
    time_scale: f64,
    command_queue: VecDeque<SimCommand>,
    /// Unspent presentation time, in seconds.
    accumulator: f64,
    params: SteeringParams,
}

impl SimulationEngine {
    /// Create a new engine. Fails if the tunables do not validate.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.tunables.validate()?;
        Ok(Self::build(config))
    }

    /// Engine with default tunables and the given seed.
    pub fn with_defaults(seed: u64) -> Self {
        Self::build(SimConfig {
            seed,
            ..Default::default()
        })
    }

    /// Shared by both constructors; `config.tunables` is already valid.
    fn build(config: SimConfig) -> Self {
        let params = SteeringParams::from_tunables(&config.tunables);
        Self {
            ctx: SimContext::new(config.seed, config.tunables),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(0.0, 4.0),
            command_queue: VecDeque::new(),
            accumulator: 0.0,
            params,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed tick and return the resulting snapshot.
    pub fn step(&mut self, host: &mut dyn Host) -> SimSnapshot {
        self.process_commands(host);

        if matches!(self.phase, GamePhase::Active | GamePhase::GameOver) {
            self.run_systems(host);
            self.ctx.time.advance(self.ctx.tunables.fixed_dt);
        }

        systems::snapshot::build_snapshot(&mut self.ctx, self.phase)
    }

    /// Feed `dt` seconds of presentation time, scaled by the time scale, and
    /// run as many fixed ticks as fit. Returns the last snapshot if any ran.
    pub fn advance(&mut self, dt: f64, host: &mut dyn Host) -> Option<SimSnapshot> {
        self.process_commands(host);

        if !matches!(self.phase, GamePhase::Active | GamePhase::GameOver) {
            return None;
        }

        let fixed = self.ctx.tunables.fixed_dt;
        self.accumulator += dt.max(0.0) * self.time_scale;

        let mut last = None;
        while self.accumulator >= fixed {
            self.accumulator -= fixed;
            last = Some(self.step(host));
        }
        last
    }

    /// Contact report from the host's physics.
    ///
    /// Ignored while Idle or Paused. A target contact moves the engine to
    /// `GameOver` and stops the wave timer.
    pub fn on_collision(
        &mut self,
        meteor: EntityHandle,
        other: EntityHandle,
        kind: ContactKind,
        host: &mut dyn Host,
    ) -> ContactOutcome {
        if !matches!(self.phase, GamePhase::Active | GamePhase::GameOver) {
            return ContactOutcome::Ignored;
        }

        let outcome = systems::health::handle_contact(&mut self.ctx, host, meteor, other, kind);
        if outcome == ContactOutcome::GameOver && self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.ctx.wave.stop();
            log::info!(
                "game over at tick {} ({} kills)",
                self.ctx.time.tick,
                self.ctx.kills.total()
            );
        }
        outcome
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.ctx.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn tunables(&self) -> &Tunables {
        &self.ctx.tunables
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.ctx.registry
    }

    /// Read-only access to the full context (tests, diagnostics).
    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    fn process_commands(&mut self, host: &mut dyn Host) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, host);
        }
    }

    fn handle_command(&mut self, command: SimCommand, host: &mut dyn Host) {
        match command {
            SimCommand::Start => {
                if self.phase == GamePhase::Idle {
                    self.ctx.wave.arm(self.ctx.time.tick, &self.ctx.tunables);
                    self.phase = GamePhase::Active;
                    log::info!("simulation started at tick {}", self.ctx.time.tick);
                }
            }
            SimCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            SimCommand::Restart => {
                if self.phase != GamePhase::Idle {
                    self.restart(host);
                }
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
        }
    }

    /// Clear the field and start a fresh round from the current tick.
    fn restart(&mut self, host: &mut dyn Host) {
        let ctx = &mut self.ctx;
        for handle in ctx.registry.handles() {
            if let Some(meteor) = ctx.registry.remove(handle) {
                host.destroy_entity(handle);
                ctx.events.push(SimEvent::MeteorDestroyed {
                    handle,
                    kind: meteor.kind,
                    cause: DestroyCause::Restart,
                });
            }
        }
        ctx.deferred.clear();
        ctx.kills.reset();
        ctx.wave = Default::default();
        ctx.wave.arm(ctx.time.tick, &ctx.tunables);
        self.accumulator = 0.0;
        self.phase = GamePhase::Active;
        log::info!("simulation restarted at tick {}", ctx.time.tick);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, host: &mut dyn Host) {
        let ctx = &mut self.ctx;
        // 1. Pull integrated positions back from the host
        systems::cleanup::sync_positions(ctx, host);
        // 2. Grace-delayed destructions
        systems::health::run_deferred(ctx, host);
        // 3. Lower boundary
        systems::cleanup::run(ctx, host);
        // 4. Escalation, then the wave timer
        let target = host.resolve_target();
        let waves_enabled = self.phase == GamePhase::Active;
        systems::wave_spawner::run(ctx, host, target, waves_enabled);
        // 5. Steering
        systems::steering::run(ctx, host, target, &self.params);
    }
}
