//! State shared between the runner and the game loop thread.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use meteorfall_core::commands::SimCommand;
use meteorfall_core::state::SimSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forward to the simulation engine.
    Sim(SimCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<SimSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Totals over a whole run, printed when the loop exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub projectiles_fired: u32,
    pub kills: u32,
    pub waves: u32,
    pub elites: u32,
    pub game_overs: u32,
    pub restarts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = RunSummary {
            ticks: 10,
            kills: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"kills\":3"));
    }
}
