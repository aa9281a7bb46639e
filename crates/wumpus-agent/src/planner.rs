//! Turn planner: rotations plus one terminal action towards a neighbor.
//!
//! The target is always orthogonally adjacent, so planning is a closed-form
//! computation: turn to face it, then move or shoot. A half turn is always
//! resolved as two right turns.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use wumpus_types::{Action, Direction, Position};

use crate::error::AgentError;

/// An ordered queue of atomic actions, drained one per decision.
pub type ActionPlan = VecDeque<Action>;

/// The action that ends a plan once the agent faces its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    /// Step onto the target tile.
    Move,
    /// Fire an arrow at the target tile.
    Shoot,
}

impl Terminal {
    /// The atomic action this terminal step emits.
    pub const fn action(self) -> Action {
        match self {
            Self::Move => Action::MoveForward,
            Self::Shoot => Action::Shoot,
        }
    }
}

/// The direction from `from` to the orthogonally adjacent `to`.
pub fn required_facing(from: Position, to: Position) -> Option<Direction> {
    if from.x == to.x {
        if from.y.checked_add(1) == Some(to.y) {
            return Some(Direction::South);
        }
        if to.y.checked_add(1) == Some(from.y) {
            return Some(Direction::North);
        }
    } else if from.y == to.y {
        if from.x.checked_add(1) == Some(to.x) {
            return Some(Direction::East);
        }
        if to.x.checked_add(1) == Some(from.x) {
            return Some(Direction::West);
        }
    }
    None
}

/// Plan the rotations and terminal action that take an agent facing
/// `facing` at `from` to act on `to`.
///
/// # Errors
///
/// Returns [`AgentError::NotAdjacent`] if `to` is not an orthogonal
/// neighbor of `from`.
pub fn plan(
    facing: Direction,
    from: Position,
    to: Position,
    terminal: Terminal,
) -> Result<ActionPlan, AgentError> {
    let required = required_facing(from, to).ok_or(AgentError::NotAdjacent { from, to })?;
    let turns = facing.quarter_turns_to(required);
    let turn = if turns > 0 {
        Action::RotateLeft
    } else {
        Action::RotateRight
    };

    let mut actions: ActionPlan =
        std::iter::repeat_n(turn, usize::from(turns.unsigned_abs())).collect();
    actions.push_back(terminal.action());
    Ok(actions)
}
