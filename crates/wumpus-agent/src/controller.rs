//! The agent controller: one `decide` call per world step.
//!
//! The controller owns the knowledge store and a FIFO action queue. While the
//! queue holds a plan, each call pops one action without looking at the
//! world. Once it empties, the next call records the fresh percepts, runs
//! the selector and planner, and queues the new plan.
//!
//! After grabbing the gold (when [`AgentConfig::return_with_gold`] is set)
//! the controller stops exploring and retraces its breadcrumb trail back to
//! the first tile it stood on, then exits.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wumpus_types::{Action, Grid, Percept, PlayerState, Position};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::frontier::{FrontierChoice, FrontierSelector};
use crate::knowledge::KnowledgeStore;
use crate::planner::{self, ActionPlan, Terminal};

/// Whether the controller must think on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    /// No queued actions; the next call records percepts and plans.
    Idle,
    /// A plan is queued; the next call pops its head.
    Executing,
}

/// What the controller is trying to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Looking for the gold.
    Explore,
    /// Carrying the gold back to the start tile.
    ReturnHome,
}

/// Knowledge-based Wumpus agent.
#[derive(Debug, Clone)]
pub struct LogicAgent {
    store: KnowledgeStore,
    config: AgentConfig,
    queue: ActionPlan,
    goal: Goal,
    /// Loop-free path from the first tile to the current one.
    trail: Vec<Position>,
}

impl LogicAgent {
    /// Create an agent for a world of the given dimensions.
    pub fn new(grid: Grid, config: AgentConfig) -> Self {
        Self {
            store: KnowledgeStore::new(grid),
            config,
            queue: VecDeque::new(),
            goal: Goal::Explore,
            trail: Vec::new(),
        }
    }

    /// Decide the next action for the given player state.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::OutOfBounds`] if the world reports a position
    /// outside the grid. An isolated tile yields [`Action::NoOp`] instead of
    /// an error.
    pub fn decide(&mut self, state: &PlayerState) -> Result<Action, AgentError> {
        if let Some(next) = self.queue.pop_front() {
            return Ok(next);
        }

        self.store
            .record(state.position, &state.percepts, state.facing)?;
        self.extend_trail(state.position);

        if state.senses(Percept::Glitter) {
            if self.config.return_with_gold {
                self.goal = Goal::ReturnHome;
            }
            debug!(position = %state.position, "glitter, grabbing gold");
            return Ok(Action::Grab);
        }

        let plan = match self.goal {
            Goal::Explore => self.explore(state)?,
            Goal::ReturnHome => self.return_home(state)?,
        };
        self.queue = plan;
        Ok(self.queue.pop_front().unwrap_or(Action::NoOp))
    }

    /// Whether a plan is still being drained.
    pub fn state(&self) -> ControllerState {
        if self.queue.is_empty() {
            ControllerState::Idle
        } else {
            ControllerState::Executing
        }
    }

    /// The current goal.
    pub const fn goal(&self) -> Goal {
        self.goal
    }

    /// Read access to everything observed so far.
    pub const fn knowledge(&self) -> &KnowledgeStore {
        &self.store
    }

    /// The loop-free breadcrumb trail from the first tile.
    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    fn explore(&self, state: &PlayerState) -> Result<ActionPlan, AgentError> {
        let selector = FrontierSelector::new(&self.store, &self.config);
        let choice = match selector.select(state.position, state.has_arrows()) {
            Ok(choice) => choice,
            Err(AgentError::EmptyFrontier { position }) => {
                warn!(%position, "no frontier to explore, idling");
                return Ok(ActionPlan::from([Action::NoOp]));
            }
            Err(e) => return Err(e),
        };

        if let FrontierChoice::Shoot(target) = choice {
            debug!(position = %state.position, %target, "shooting at confirmed monster");
        }
        planner::plan(state.facing, state.position, choice.target(), choice.terminal())
    }

    fn return_home(&self, state: &PlayerState) -> Result<ActionPlan, AgentError> {
        let previous = self
            .trail
            .len()
            .checked_sub(2)
            .and_then(|i| self.trail.get(i).copied());

        match previous {
            Some(step) => planner::plan(state.facing, state.position, step, Terminal::Move),
            None => {
                debug!(position = %state.position, "back at start with the gold, exiting");
                Ok(ActionPlan::from([Action::Exit]))
            }
        }
    }

    /// Push `position`, or cut the trail back to it if it closes a loop.
    fn extend_trail(&mut self, position: Position) {
        match self.trail.iter().position(|&p| p == position) {
            Some(i) => self.trail.truncate(i.saturating_add(1)),
            None => self.trail.push(position),
        }
    }
}
