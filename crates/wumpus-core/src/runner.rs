//! Episode runner.
//!
//! [`run_episode`] plays one episode: while the world is running and the
//! step limit has not been reached it fetches the player state, asks the
//! decision source for one action, and applies it. The loop is synchronous
//! and single-threaded; given a deterministic world and source, the result
//! is fully reproducible apart from its id and timestamps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wumpus_types::{Action, RunId};
use wumpus_world::{EpisodeStatus, StepOutcome, WorldError, WorldInterface};

use crate::decision::{DecisionError, DecisionSource};

/// Errors that can occur during an episode.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The world rejected an action.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The decision source failed.
    #[error("decision error: {source}")]
    Decision {
        /// The underlying decision error.
        #[from]
        source: DecisionError,
    },
}

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The player died.
    Died,
    /// The player left the cave.
    Exited,
    /// The step limit was reached first.
    StepLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Died => "died",
            Self::Exited => "exited",
            Self::StepLimit => "step_limit",
        })
    }
}

/// Summary of a finished episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Unique id for this run.
    pub run_id: RunId,
    /// Why the episode ended.
    pub end_reason: EndReason,
    /// Number of actions applied.
    pub steps: u32,
    /// Final score.
    pub score: i64,
    /// Whether the player held the gold at the end.
    pub has_gold: bool,
    /// Every action applied, in order.
    pub actions: Vec<Action>,
    /// When the episode started.
    pub started_at: DateTime<Utc>,
    /// When the episode finished.
    pub finished_at: DateTime<Utc>,
}

/// Callback invoked after each step.
pub trait StepCallback<W: ?Sized> {
    /// Called after an action has been applied.
    fn on_step(&mut self, step: u32, outcome: &StepOutcome, world: &W);
}

/// A callback that does nothing.
pub struct NoOpCallback;

impl<W: ?Sized> StepCallback<W> for NoOpCallback {
    fn on_step(&mut self, _step: u32, _outcome: &StepOutcome, _world: &W) {}
}

/// Play one episode to its end or to `max_steps` actions.
///
/// # Errors
///
/// Returns [`RunnerError`] if the decision source fails or the world
/// rejects an action.
pub fn run_episode<W: WorldInterface + ?Sized>(
    world: &mut W,
    source: &mut dyn DecisionSource,
    max_steps: u32,
) -> Result<EpisodeResult, RunnerError> {
    run_episode_with(world, source, max_steps, &mut NoOpCallback)
}

/// Like [`run_episode`], calling `callback` after every step.
///
/// # Errors
///
/// Returns [`RunnerError`] if the decision source fails or the world
/// rejects an action.
pub fn run_episode_with<W: WorldInterface + ?Sized>(
    world: &mut W,
    source: &mut dyn DecisionSource,
    max_steps: u32,
    callback: &mut dyn StepCallback<W>,
) -> Result<EpisodeResult, RunnerError> {
    let run_id = RunId::new();
    let started_at = Utc::now();
    let grid = world.grid();
    let mut actions = Vec::new();
    let mut steps: u32 = 0;

    info!(
        %run_id,
        source = source.name(),
        width = grid.width,
        height = grid.height,
        max_steps,
        "Episode starting"
    );

    while world.status() == EpisodeStatus::Running && steps < max_steps {
        let state = world.player_state();
        let action = source.decide(&state)?;
        let outcome = world.apply(action)?;
        steps = steps.saturating_add(1);
        actions.push(action);

        debug!(
            step = steps,
            %action,
            position = %outcome.state.position,
            facing = %outcome.state.facing,
            reward = outcome.reward,
            "Step applied"
        );
        callback.on_step(steps, &outcome, world);
    }

    let end_reason = match world.status() {
        EpisodeStatus::Dead => EndReason::Died,
        EpisodeStatus::Exited => EndReason::Exited,
        EpisodeStatus::Running => EndReason::StepLimit,
    };

    Ok(EpisodeResult {
        run_id,
        end_reason,
        steps,
        score: world.score(),
        has_gold: world.has_gold(),
        actions,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Log the episode end sequence.
pub fn log_episode_end(result: &EpisodeResult) {
    info!(
        run_id = %result.run_id,
        reason = %result.end_reason,
        steps = result.steps,
        score = result.score,
        has_gold = result.has_gold,
        elapsed_ms = result
            .finished_at
            .signed_duration_since(result.started_at)
            .num_milliseconds(),
        "Episode ended"
    );
    if result.steps == 0 {
        warn!("Episode ended with no steps executed");
    }
}
