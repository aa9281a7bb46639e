//! The per-step snapshot the world hands to a decision maker.
//!
//! The [`PlayerState`] is the **only** information the agent receives about
//! the world. Percepts describe the current tile for the current step and
//! nothing else.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, Percept};
use crate::grid::Position;

/// An ordered set of active percepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptSet(BTreeSet<Percept>);

impl PerceptSet {
    /// An empty percept set.
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a percept. Returns `true` if it was not already present.
    pub fn insert(&mut self, percept: Percept) -> bool {
        self.0.insert(percept)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, percept: Percept) -> Self {
        self.0.insert(percept);
        self
    }

    /// Whether `percept` is active.
    pub fn contains(&self, percept: Percept) -> bool {
        self.0.contains(&percept)
    }

    /// Whether no percept is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over active percepts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Percept> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Percept> for PerceptSet {
    fn from_iter<I: IntoIterator<Item = Percept>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What the player knows about itself at the start of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current tile.
    pub position: Position,
    /// Current facing direction.
    pub facing: Direction,
    /// Percepts active on the current tile this step.
    pub percepts: PerceptSet,
}

impl PlayerState {
    /// Create a snapshot.
    pub const fn new(position: Position, facing: Direction, percepts: PerceptSet) -> Self {
        Self {
            position,
            facing,
            percepts,
        }
    }

    /// Whether `percept` is active this step.
    pub fn senses(&self, percept: Percept) -> bool {
        self.percepts.contains(percept)
    }

    /// Whether at least one arrow remains.
    pub fn has_arrows(&self) -> bool {
        !self.percepts.contains(Percept::OutOfArrows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_follow_out_of_arrows_percept() {
        let armed = PlayerState::new(Position::ORIGIN, Direction::East, PerceptSet::new());
        assert!(armed.has_arrows());

        let empty = PlayerState::new(
            Position::ORIGIN,
            Direction::East,
            PerceptSet::new().with(Percept::OutOfArrows),
        );
        assert!(!empty.has_arrows());
    }

    #[test]
    fn percept_set_is_ordered_and_deduplicated() {
        let set: PerceptSet = [Percept::Scream, Percept::Stench, Percept::Stench]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Percept::Stench, Percept::Scream]);
    }

    #[test]
    fn player_state_round_trips_through_json() {
        let state = PlayerState::new(
            Position::new(2, 1),
            Direction::North,
            PerceptSet::new().with(Percept::Breeze),
        );
        let json = serde_json::to_string(&state).unwrap_or_default();
        let back: Option<PlayerState> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(state));
    }
}
