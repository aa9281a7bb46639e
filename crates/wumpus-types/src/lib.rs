//! Shared type definitions for the Wumpus agent simulation.
//!
//! This crate is the single vocabulary shared by the agent core, the
//! reference world, and the episode runner. It holds only plain data and
//! pure helpers; no crate here performs I/O.
//!
//! # Modules
//!
//! - [`enums`] -- Closed enumerations: [`Direction`], [`Percept`], [`Action`]
//! - [`grid`] -- Grid coordinates and bounds: [`Position`], [`Grid`]
//! - [`ids`] -- Type-safe UUID wrappers for run identifiers
//! - [`perception`] -- The per-step [`PlayerState`] snapshot and [`PerceptSet`]

pub mod enums;
pub mod grid;
pub mod ids;
pub mod perception;

// Re-export all public types at crate root for convenience.
pub use enums::{Action, Direction, Percept};
pub use grid::{Grid, Position};
pub use ids::RunId;
pub use perception::{PerceptSet, PlayerState};
