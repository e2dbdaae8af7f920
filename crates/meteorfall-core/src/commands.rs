//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Begin spawning. Only valid from `Idle`.
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Clear the field and start over. Valid from any phase but `Idle`.
    Restart,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
}
