//! The seam between an episode runner and a world implementation.

use std::fmt;

use serde::{Deserialize, Serialize};
use wumpus_types::{Action, Grid, PlayerState};

use crate::error::WorldError;

/// Whether the episode is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeStatus {
    /// The player is alive and inside the cave.
    Running,
    /// The player walked into a pit or a live wumpus.
    Dead,
    /// The player left the cave from the start tile.
    Exited,
}

impl EpisodeStatus {
    /// Whether no further actions will be accepted.
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Lowercase name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Dead => "dead",
            Self::Exited => "exited",
        }
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened when one action was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The action that was applied.
    pub action: Action,
    /// Score change caused by the action, including death or gold.
    pub reward: i64,
    /// Episode status after the action.
    pub status: EpisodeStatus,
    /// The player's view after the action.
    pub state: PlayerState,
}

/// A world the runner can step one action at a time.
pub trait WorldInterface {
    /// Dimensions of the cave.
    fn grid(&self) -> Grid;

    /// The player's current position, facing, and percepts.
    fn player_state(&self) -> PlayerState;

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EpisodeOver`] once the status is no longer
    /// [`EpisodeStatus::Running`].
    fn apply(&mut self, action: Action) -> Result<StepOutcome, WorldError>;

    /// Current episode status.
    fn status(&self) -> EpisodeStatus;

    /// Running score.
    fn score(&self) -> i64;

    /// Whether the player is carrying the gold.
    fn has_gold(&self) -> bool;
}
