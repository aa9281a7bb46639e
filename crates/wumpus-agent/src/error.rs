//! Error types for the wumpus-agent crate.
//!
//! Uncertainty about hazards is never an error: it is an input to the
//! frontier policy. The variants here cover integration faults (a world
//! reporting an impossible position) and the degenerate no-neighbor case.

use wumpus_types::Position;

/// Errors that can occur while recording knowledge or planning actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// A coordinate outside the grid was recorded or queried.
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending coordinate.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// The current tile has no in-bounds neighbor to move toward.
    #[error("no frontier tile around {position}")]
    EmptyFrontier {
        /// The isolated tile.
        position: Position,
    },

    /// A plan was requested towards a tile that is not orthogonally adjacent.
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent {
        /// Where the plan starts.
        from: Position,
        /// The requested destination.
        to: Position,
    },
}
