use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use glam::Vec2;

use meteorfall_app::game_loop::{spawn_game_loop, LoopConfig, Session};
use meteorfall_app::logging;
use meteorfall_app::state::shared_snapshot;
use meteorfall_core::commands::SimCommand;
use meteorfall_core::constants::CONTACT_RADIUS;
use meteorfall_core::Tunables;
use meteorfall_sim::{HeadlessHost, SimConfig, SimulationEngine};

/// Run the meteor swarm headless against a stationary turret.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON tunables file; missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Ticks to run (50 per simulated second); 0 runs until interrupted
    #[arg(short, long, default_value_t = 3000)]
    ticks: u64,

    /// Simulation speed multiplier, clamped to [0, 4]
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Pace ticks to wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Restart immediately after a game over
    #[arg(long)]
    auto_restart: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    dump_snapshot: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let tunables = match &args.config {
        Some(path) => Tunables::load(path)
            .with_context(|| format!("loading tunables from {}", path.display()))?,
        None => Tunables::default(),
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        time_scale: args.time_scale,
        tunables,
    })
    .context("invalid tunables")?;
    engine.queue_command(SimCommand::Start);

    let config = LoopConfig {
        max_ticks: (args.ticks > 0).then_some(args.ticks),
        realtime: args.realtime,
        auto_restart: args.auto_restart,
        contact_radius: CONTACT_RADIUS,
    };
    let session = Session::new(engine, HeadlessHost::new(Vec2::ZERO), &config);

    log::info!("seed {}, {:?} ticks", args.seed, config.max_ticks);
    let latest = shared_snapshot();
    let (_cmd_tx, handle) = spawn_game_loop(session, config, latest.clone())
        .context("spawning game loop thread")?;
    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    if args.dump_snapshot {
        let snapshot = latest
            .lock()
            .map_err(|_| anyhow!("snapshot lock poisoned"))?
            .clone();
        if let Some(snapshot) = snapshot {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}
