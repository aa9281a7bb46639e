//! Grid coordinates and bounds.
//!
//! A [`Grid`] is fixed for the whole run. Every neighbor lookup goes
//! through it, so no caller ever holds a coordinate outside
//! `[0, width) x [0, height)` unless it constructed one by hand.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// A tile coordinate, 0-indexed from the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, increasing eastwards.
    pub x: u32,
    /// Row, increasing southwards.
    pub y: u32,
}

impl Position {
    /// Create a position from its column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The start tile of every run.
    pub const ORIGIN: Self = Self::new(0, 0);
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The dimensions of the cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Grid {
    /// Create a grid with the given dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `position` lies inside the grid.
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        let width = usize::try_from(self.width).unwrap_or(usize::MAX);
        let height = usize::try_from(self.height).unwrap_or(usize::MAX);
        width.saturating_mul(height)
    }

    /// Row-major index of `position`, or `None` when it is outside the grid.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let row = usize::try_from(position.y).ok()?;
        let col = usize::try_from(position.x).ok()?;
        let width = usize::try_from(self.width).ok()?;
        row.checked_mul(width)?.checked_add(col)
    }

    /// The tile one step from `position` in `direction`, if it is in bounds.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let next = match direction {
            Direction::North => Position::new(position.x, position.y.checked_sub(1)?),
            Direction::East => Position::new(position.x.checked_add(1)?, position.y),
            Direction::South => Position::new(position.x, position.y.checked_add(1)?),
            Direction::West => Position::new(position.x.checked_sub(1)?, position.y),
        };
        self.contains(next).then_some(next)
    }

    /// In-bounds orthogonal neighbors of `position`, in [`Direction::ALL`] order.
    pub fn neighbors(
        &self,
        position: Position,
    ) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(position, dir).map(|p| (dir, p)))
    }

    /// Every position in the grid, north row first, west to east.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}
