//! Tunable weights and thresholds for the frontier policy.
//!
//! The defaults reproduce the classic logic agent: visited tiles are
//! preferred for backtracking until they have been walked through three
//! times, after which an unobserved but partly cleared tile looks better.

use serde::{Deserialize, Serialize};

/// Configuration for the agent's fallback scoring and homeward behavior.
///
/// Deserialized from the `agent` section of `wumpus-config.yaml` by the core
/// crate. Keys missing from that section fall back to [`AgentConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Visit count at which a visited tile counts as well explored (default: 3).
    pub well_explored_threshold: u32,

    /// Weight of a visited tile below the threshold (default: 5).
    pub visited_weight: u32,

    /// Weight of a visited tile at or above the threshold (default: 1).
    pub exhausted_weight: u32,

    /// Weight of an unvisited tile that is pit-safe or monster-safe (default: 3).
    pub partially_safe_weight: u32,

    /// Weight of an unvisited tile with no safety evidence at all (default: 2).
    pub unknown_weight: u32,

    /// Weight of a confirmed-monster tile once the arrows are gone (default: 0).
    pub threat_weight: u32,

    /// Walk back to the start and exit after grabbing the gold (default: true).
    pub return_with_gold: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            well_explored_threshold: 3,
            visited_weight: 5,
            exhausted_weight: 1,
            partially_safe_weight: 3,
            unknown_weight: 2,
            threat_weight: 0,
            return_with_gold: true,
        }
    }
}
