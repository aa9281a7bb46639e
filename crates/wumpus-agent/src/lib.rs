//! Knowledge-based inference and action planning for the Wumpus agent.
//!
//! This crate is the decision core. It never touches the world directly: it
//! receives a [`PlayerState`] per step and answers with one [`Action`].
//!
//! # Modules
//!
//! - [`config`] -- Fallback weights and homeward behavior ([`AgentConfig`])
//! - [`controller`] -- The per-step state machine ([`LogicAgent`])
//! - [`error`] -- Error types for agent operations ([`AgentError`])
//! - [`frontier`] -- Deterministic neighbor selection ([`FrontierSelector`])
//! - [`inference`] -- Pit/monster safety and monster triangulation ([`HazardInference`])
//! - [`knowledge`] -- Per-tile observed facts ([`KnowledgeStore`])
//! - [`planner`] -- Rotations plus move/shoot towards a neighbor
//!
//! [`PlayerState`]: wumpus_types::PlayerState
//! [`Action`]: wumpus_types::Action

pub mod config;
pub mod controller;
pub mod error;
pub mod frontier;
pub mod inference;
pub mod knowledge;
pub mod planner;

// Re-export primary types at crate root for convenience.
pub use config::AgentConfig;
pub use controller::{ControllerState, Goal, LogicAgent};
pub use error::AgentError;
pub use frontier::{FrontierChoice, FrontierSelector};
pub use inference::{HazardInference, Verdict};
pub use knowledge::{KnowledgeStore, TileKnowledge};
pub use planner::{ActionPlan, Terminal, plan};
