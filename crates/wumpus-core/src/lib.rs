//! Configuration and episode orchestration for the Wumpus agent simulation.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `wumpus-config.yaml` into
//!   strongly-typed structs.
//! - [`decision`] -- [`DecisionSource`] trait, [`StubDecisionSource`], and
//!   the binding for the logic agent.
//! - [`runner`] -- The step loop that plays one episode to its end.
//!
//! [`DecisionSource`]: decision::DecisionSource
//! [`StubDecisionSource`]: decision::StubDecisionSource

pub mod config;
pub mod decision;
pub mod runner;
