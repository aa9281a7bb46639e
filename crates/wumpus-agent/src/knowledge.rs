//! Spatial knowledge store: what the agent has observed, tile by tile.
//!
//! Facts only accumulate. Breeze and stench record "this percept was ever
//! sensed here" and are never cleared, a bump remembers the facing of the
//! first bump on that tile, and the scream flag is held here rather than in
//! any global so the whole run's knowledge lives in one owned value.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wumpus_types::{Direction, Grid, Percept, PerceptSet, Position};

use crate::error::AgentError;

/// Observed facts about a single tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileKnowledge {
    /// The agent has stood on this tile.
    pub visited: bool,
    /// How many decisions were made while standing here.
    pub visit_count: u32,
    /// A breeze was sensed here at least once.
    pub breeze_observed: bool,
    /// A stench was sensed here at least once.
    pub stench_observed: bool,
    /// Facing direction at the first bump sensed here.
    pub bump_direction: Option<Direction>,
}

/// Per-run knowledge base over the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStore {
    grid: Grid,
    /// Row-major tile records, one per grid cell.
    tiles: Vec<TileKnowledge>,
    scream_heard: bool,
}

impl KnowledgeStore {
    /// Create an empty store for `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            tiles: vec![TileKnowledge::default(); grid.tile_count()],
            scream_heard: false,
        }
    }

    /// The grid this store covers.
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Whether the monster has been heard dying.
    pub const fn scream_heard(&self) -> bool {
        self.scream_heard
    }

    /// Merge the percepts sensed at `position` while facing `facing`.
    ///
    /// Marks the tile visited and bumps its visit count. Flags only ever flip
    /// from `false` to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::OutOfBounds`] if `position` is outside the grid.
    pub fn record(
        &mut self,
        position: Position,
        percepts: &PerceptSet,
        facing: Direction,
    ) -> Result<(), AgentError> {
        let grid = self.grid;
        let index = grid
            .index_of(position)
            .ok_or_else(|| out_of_bounds(grid, position))?;
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(grid, position))?;

        tile.visited = true;
        tile.visit_count = tile.visit_count.saturating_add(1);

        if percepts.contains(Percept::Breeze) && !tile.breeze_observed {
            tile.breeze_observed = true;
            debug!(%position, "breeze recorded");
        }
        if percepts.contains(Percept::Stench) && !tile.stench_observed {
            tile.stench_observed = true;
            debug!(%position, "stench recorded");
        }
        if percepts.contains(Percept::Bump) && tile.bump_direction.is_none() {
            tile.bump_direction = Some(facing);
            debug!(%position, %facing, "bump recorded");
        }
        if percepts.contains(Percept::Scream) && !self.scream_heard {
            self.scream_heard = true;
            debug!(%position, "scream heard, monster is dead");
        }

        Ok(())
    }

    /// The record for `position`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::OutOfBounds`] if `position` is outside the grid.
    pub fn query(&self, position: Position) -> Result<&TileKnowledge, AgentError> {
        self.tile(position)
            .ok_or_else(|| out_of_bounds(self.grid, position))
    }

    /// The record for `position`, or `None` outside the grid.
    pub fn tile(&self, position: Position) -> Option<&TileKnowledge> {
        self.grid
            .index_of(position)
            .and_then(|index| self.tiles.get(index))
    }

    /// Whether `position` is in bounds and has been visited.
    pub fn is_visited(&self, position: Position) -> bool {
        self.tile(position).is_some_and(|t| t.visited)
    }

    /// Number of distinct tiles visited so far.
    pub fn visited_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.visited).count()
    }
}

const fn out_of_bounds(grid: Grid, position: Position) -> AgentError {
    AgentError::OutOfBounds {
        position,
        width: grid.width,
        height: grid.height,
    }
}
