//! Enumeration types for the Wumpus simulation.
//!
//! Directions, percepts, and actions are closed sum types. Every consumer
//! matches them exhaustively, so adding a variant is a compile-time event
//! across the workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A cardinal facing direction on the grid.
///
/// `North` decreases `y` (row 0 is the top row), `East` increases `x`. The
/// declaration order is the
/// fixed tie-break order used everywhere a choice between directions is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards decreasing `y`.
    North,
    /// Towards increasing `x`.
    East,
    /// Towards increasing `y`.
    South,
    /// Towards decreasing `x`.
    West,
}

impl Direction {
    /// All four directions in the fixed tie-break order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction after one quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The direction after one quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Signed quarter turns needed to face `target`.
    ///
    /// Positive values are counter-clockwise (left) turns, negative values
    /// clockwise (right) turns. A half turn is reported as `-2` so callers
    /// resolve it as two right turns.
    pub fn quarter_turns_to(self, target: Self) -> i8 {
        if self == target {
            0
        } else if self.left() == target {
            1
        } else if self.right() == target {
            -1
        } else {
            -2
        }
    }

    /// Short lowercase label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Percept
// ---------------------------------------------------------------------------

/// A boolean sensory signal available at the player's current tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Percept {
    /// The monster is on an orthogonally adjacent tile (or this one).
    Stench,
    /// A pit is on an orthogonally adjacent tile.
    Breeze,
    /// The gold lies on this tile.
    Glitter,
    /// The last forward move hit the outer wall.
    Bump,
    /// The arrow just killed the monster.
    Scream,
    /// The player has no arrows left.
    OutOfArrows,
}

impl Percept {
    /// Short snake-case label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stench => "stench",
            Self::Breeze => "breeze",
            Self::Glitter => "glitter",
            Self::Bump => "bump",
            Self::Scream => "scream",
            Self::OutOfArrows => "out_of_arrows",
        }
    }
}

impl core::fmt::Display for Percept {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// An atomic action the player can take in one world step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step one tile in the facing direction.
    MoveForward,
    /// Rotate a quarter turn counter-clockwise.
    RotateLeft,
    /// Rotate a quarter turn clockwise.
    RotateRight,
    /// Pick up the gold on the current tile.
    Grab,
    /// Fire an arrow in the facing direction.
    Shoot,
    /// Do nothing this step.
    NoOp,
    /// Leave the cave (only effective on the start tile).
    Exit,
}

impl Action {
    /// Short snake-case label for logs and metrics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MoveForward => "move_forward",
            Self::RotateLeft => "rotate_left",
            Self::RotateRight => "rotate_right",
            Self::Grab => "grab",
            Self::Shoot => "shoot",
            Self::NoOp => "no_op",
            Self::Exit => "exit",
        }
    }

    /// Apply this action's rotation, if any, to a facing direction.
    pub const fn rotate(self, facing: Direction) -> Direction {
        match self {
            Self::RotateLeft => facing.left(),
            Self::RotateRight => facing.right(),
            Self::MoveForward | Self::Grab | Self::Shoot | Self::NoOp | Self::Exit => facing,
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
