//! Reference cave world for the Wumpus agent simulation.
//!
//! The agent crate never sees this crate: it consumes a [`PlayerState`] and
//! answers with an [`Action`]. This crate provides the other half so a full
//! episode can be run and scored.
//!
//! # Modules
//!
//! - [`error`] -- Error types for world operations.
//! - [`grid_world`] -- [`GridWorld`], the rules engine: movement, percepts,
//!   the arrow, death, and exit.
//! - [`interface`] -- The [`WorldInterface`] seam the runner drives.
//! - [`layout`] -- Explicit or seeded placement of the wumpus, gold, and pits.
//! - [`render`] -- Plain-text board rendering for logs.
//! - [`score`] -- The per-action scoring table.
//!
//! [`PlayerState`]: wumpus_types::PlayerState
//! [`Action`]: wumpus_types::Action

pub mod error;
pub mod grid_world;
pub mod interface;
pub mod layout;
pub mod render;
pub mod score;

pub use error::WorldError;
pub use grid_world::{CellContents, GridWorld};
pub use interface::{EpisodeStatus, StepOutcome, WorldInterface};
pub use layout::{START, WorldLayout};
pub use render::render_board;
pub use score::{DEATH_PENALTY, GOLD_REWARD, action_cost};
