//! Decision source trait and stub implementation.
//!
//! Each step the runner hands the current [`PlayerState`] to a
//! [`DecisionSource`] and applies the single [`Action`] it returns. The
//! logic agent is one implementation; [`StubDecisionSource`] always idles,
//! which exercises the step loop without any policy.

use wumpus_agent::{AgentError, LogicAgent};
use wumpus_types::{Action, PlayerState};

/// Errors that can occur while choosing an action.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    /// The logic agent rejected the player state.
    #[error("agent error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },
}

/// A source of player actions.
pub trait DecisionSource {
    /// Choose the next action for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] if the source cannot produce an action.
    fn decide(&mut self, state: &PlayerState) -> Result<Action, DecisionError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl DecisionSource for LogicAgent {
    fn decide(&mut self, state: &PlayerState) -> Result<Action, DecisionError> {
        Ok(Self::decide(self, state)?)
    }

    fn name(&self) -> &'static str {
        "logic-agent"
    }
}

/// A stub decision source that always returns [`Action::NoOp`].
#[derive(Debug, Clone, Default)]
pub struct StubDecisionSource;

impl StubDecisionSource {
    /// Create a new stub decision source.
    pub const fn new() -> Self {
        Self
    }
}

impl DecisionSource for StubDecisionSource {
    fn decide(&mut self, _state: &PlayerState) -> Result<Action, DecisionError> {
        Ok(Action::NoOp)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
