//! Game loop thread: drives the engine against the headless host.
//!
//! Each tick fires the turret, steps the engine, integrates the host, and
//! feeds proximity contacts back into the engine. Commands arrive via an
//! `mpsc` channel and the latest snapshot is stored in shared state.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use glam::Vec2;

use meteorfall_core::commands::SimCommand;
use meteorfall_core::constants::{CONTACT_RADIUS, TICK_RATE};
use meteorfall_core::enums::GamePhase;
use meteorfall_core::events::SimEvent;
use meteorfall_core::state::SimSnapshot;
use meteorfall_sim::systems::health::ContactOutcome;
use meteorfall_sim::{HeadlessHost, Host, SimulationEngine};

use crate::state::{GameLoopCommand, RunSummary, SharedSnapshot};
use crate::turret::Turret;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Pace ticks to wall-clock time instead of running flat out.
    pub realtime: bool,
    /// Respawn the target and restart as soon as the game ends.
    pub auto_restart: bool,
    pub contact_radius: f32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_ticks: Some(3000),
            realtime: false,
            auto_restart: false,
            contact_radius: CONTACT_RADIUS,
        }
    }
}

/// Engine, host and turret for one run.
pub struct Session {
    engine: SimulationEngine,
    host: HeadlessHost,
    turret: Turret,
    home: Vec2,
    contact_radius: f32,
    auto_restart: bool,
    summary: RunSummary,
}

impl Session {
    pub fn new(engine: SimulationEngine, host: HeadlessHost, config: &LoopConfig) -> Self {
        let home = host.target().map(|t| t.position).unwrap_or(Vec2::ZERO);
        let turret = Turret::new(engine.tunables().fixed_dt);
        Self {
            engine,
            host,
            turret,
            home,
            contact_radius: config.contact_radius,
            auto_restart: config.auto_restart,
            summary: RunSummary::default(),
        }
    }

    pub fn queue_command(&mut self, command: SimCommand) {
        self.engine.queue_command(command);
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn host_mut(&mut self) -> &mut HeadlessHost {
        &mut self.host
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Run one fixed tick.
    pub fn tick(&mut self) -> SimSnapshot {
        // 1. Player fire
        if self.engine.phase() == GamePhase::Active
            && self
                .turret
                .update(self.engine.time().tick, &mut self.host)
                .is_some()
        {
            self.summary.projectiles_fired += 1;
        }

        // 2. Simulation step
        let snapshot = self.engine.step(&mut self.host);
        self.tally(&snapshot);

        // 3. Host physics
        self.host.integrate(self.engine.tunables().fixed_dt as f32);

        // 4. Contacts
        for (meteor, other, kind) in self.host.contacts(self.contact_radius) {
            match self.engine.on_collision(meteor, other, kind, &mut self.host) {
                ContactOutcome::Hit { killed: true } => self.summary.kills += 1,
                ContactOutcome::GameOver => self.summary.game_overs += 1,
                _ => {}
            }
        }

        // 5. Restart
        if self.auto_restart && self.engine.phase() == GamePhase::GameOver {
            if self.host.resolve_target().is_none() {
                self.host.respawn_target(self.home);
            }
            self.turret.reset();
            self.engine.queue_command(SimCommand::Restart);
            self.summary.restarts += 1;
            log::info!("restarting (run {})", self.summary.restarts + 1);
        }

        snapshot
    }

    fn tally(&mut self, snapshot: &SimSnapshot) {
        self.summary.ticks = snapshot.time.tick;
        for event in &snapshot.events {
            match event {
                SimEvent::WaveSpawned { .. } => self.summary.waves += 1,
                SimEvent::EliteSpawned { .. } => self.summary.elites += 1,
                _ => {}
            }
        }
    }

    pub fn into_summary(self) -> RunSummary {
        self.summary
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the run summary.
pub fn spawn_game_loop(
    session: Session,
    config: LoopConfig,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("meteorfall-game-loop".into())
        .spawn(move || run_game_loop(session, &config, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the tick limit, a Shutdown command, or channel disconnect.
pub fn run_game_loop(
    mut session: Session,
    config: &LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> RunSummary {
    let mut pacer = Pacer::new(Instant::now());
    let mut ticks_run: u64 = 0;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Sim(cmd)) => session.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return session.into_summary(),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return session.into_summary(),
            }
        }

        if config.max_ticks.is_some_and(|max| ticks_run >= max) {
            return session.into_summary();
        }

        // 2. Advance one tick
        let snapshot = session.tick();
        ticks_run += 1;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if !config.realtime {
            continue;
        }

        // 4. Hold to wall-clock time
        if let Some(wait) = pacer.wait(Instant::now(), session.engine().time_scale()) {
            std::thread::sleep(wait);
        }
    }
}

/// Wall-clock length of one tick at `time_scale`. A stalled clock paces at 1x.
fn tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

/// Deadline tracker for realtime runs.
#[derive(Debug, Clone, Copy)]
struct Pacer {
    next_tick: Instant,
}

impl Pacer {
    fn new(now: Instant) -> Self {
        Self { next_tick: now }
    }

    /// Move the deadline one tick on and return how long to sleep until it.
    /// More than two ticks behind, the deadline snaps to `now` and no catch-up
    /// burst follows.
    fn wait(&mut self, now: Instant, time_scale: f64) -> Option<Duration> {
        let tick = tick_duration(time_scale);
        self.next_tick += tick;
        if self.next_tick > now {
            return Some(self.next_tick - now);
        }
        if now - self.next_tick > tick * 2 {
            self.next_tick = now;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_snapshot;
    use meteorfall_sim::SimConfig;

    fn session(config: &LoopConfig) -> Session {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        engine.queue_command(SimCommand::Start);
        Session::new(engine, HeadlessHost::new(Vec2::ZERO), config)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Sim(SimCommand::Start)).unwrap();
        tx.send(GameLoopCommand::Sim(SimCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Sim(SimCommand::Start)));
        assert!(matches!(commands[1], GameLoopCommand::Sim(SimCommand::Pause)));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let config = LoopConfig {
            max_ticks: Some(120),
            ..Default::default()
        };
        let latest = shared_snapshot();
        let (_tx, rx) = mpsc::channel();

        let summary = run_game_loop(session(&config), &config, rx, &latest);
        assert_eq!(summary.ticks, 120);
        assert!(summary.waves >= 1, "First wave lands at 1 s");
        assert!(summary.projectiles_fired >= 2);

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 120);
    }

    #[test]
    fn test_loop_thread_shuts_down() {
        let config = LoopConfig {
            max_ticks: None,
            ..Default::default()
        };
        let latest = shared_snapshot();
        let (tx, handle) = spawn_game_loop(session(&config), config, latest.clone()).unwrap();

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = handle.join().unwrap();
        assert_eq!(summary.game_overs, 0);
    }

    #[test]
    fn test_auto_restart_after_game_over() {
        let config = LoopConfig {
            auto_restart: true,
            contact_radius: 1.0,
            ..Default::default()
        };
        let mut session = session(&config);
        let mut snapshot = session.tick();
        while snapshot.meteors.is_empty() {
            snapshot = session.tick();
        }

        // Park the target on a meteor.
        let meteor = snapshot.meteors[0].position.0;
        session.host_mut().set_target_position(meteor);
        session.tick();

        assert_eq!(session.summary().game_overs, 1);
        assert_eq!(session.summary().restarts, 1);

        let snapshot = session.tick();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.meteors.is_empty());
        assert!(session.host_mut().target().is_some());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 50Hz = 20ms per tick
        assert_eq!(TICK_DURATION, Duration::from_millis(20));
        assert_eq!(tick_duration(2.0), Duration::from_millis(10));
        assert_eq!(tick_duration(0.0), TICK_DURATION);
    }

    #[test]
    fn test_pacer_sleeps_until_deadline() {
        let start = Instant::now();
        let mut pacer = Pacer::new(start);

        assert_eq!(pacer.wait(start, 1.0), Some(Duration::from_millis(20)));
        let later = start + Duration::from_millis(5);
        assert_eq!(pacer.wait(later, 1.0), Some(Duration::from_millis(35)));
    }

    #[test]
    fn test_pacer_resyncs_when_far_behind() {
        let start = Instant::now();
        let mut pacer = Pacer::new(start);

        let late = start + Duration::from_secs(1);
        assert_eq!(pacer.wait(late, 1.0), None);
        // Deadline snapped to `late`; no burst of zero-length waits.
        assert_eq!(pacer.wait(late, 1.0), Some(Duration::from_millis(20)));
    }
}
