//! Error types for the `wumpus-world` crate.

use wumpus_types::Position;

use crate::interface::EpisodeStatus;

/// Errors that can occur while building or stepping a world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// An action was applied after the episode ended.
    #[error("episode is over (status: {status})")]
    EpisodeOver {
        /// The terminal status the episode ended in.
        status: EpisodeStatus,
    },

    /// The hazard layout cannot be played.
    #[error("invalid layout: {reason}")]
    InvalidLayout {
        /// What is wrong with the layout.
        reason: String,
    },

    /// A position outside the cave was queried.
    #[error("position {position} is outside the {width}x{height} cave")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Cave width.
        width: u32,
        /// Cave height.
        height: u32,
    },
}
