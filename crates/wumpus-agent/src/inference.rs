//! Hazard inference over the knowledge store.
//!
//! Safety is proven from *absence* of evidence at a visited neighbor: a tile
//! next to a visited, breeze-free tile cannot hold a pit, and one next to a
//! visited, stench-free tile cannot hold the monster. Anything not proven
//! safe stays [`Verdict::Risky`].
//!
//! # Monster triangulation
//!
//! A tile is [`Verdict::ConfirmedMonster`] only when local stench evidence
//! leaves it as the sole candidate. One canonical rule set is written with
//! the "front" neighbor pointing north and is evaluated under all four
//! rotations of the neighborhood:
//!
//! ```text
//!         beyond          (2, 0)
//!   fl    front    fr     (1,-1) (1, 0) (1, 1)
//!   left  target  right   (0,-1) (0, 0) (0, 1)
//!         back            (-1,0)
//! ```
//!
//! 1. Opposite pair: front and back both stenchy.
//! 2. Corner pair: front and right both stenchy, front-right visited.
//! 3. Wall bump: front stenchy, beyond off-grid or visited, and either
//!    front-right visited with a westward bump recorded at front, or
//!    front-left visited with an eastward bump recorded at front.
//!
//! "Stenchy" means in bounds, visited, and stench observed. Bump directions
//! are rotated with the frame. Once a scream has been heard nothing is ever
//! confirmed.

use serde::{Deserialize, Serialize};
use wumpus_types::{Direction, Position};

use crate::knowledge::{KnowledgeStore, TileKnowledge};

/// The inference outcome for a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Provably free of both pits and a live monster.
    Safe,
    /// Not proven safe and not proven to hold the monster.
    Risky,
    /// Proven to hold the live monster.
    ConfirmedMonster,
}

/// Read-only inference engine borrowing a [`KnowledgeStore`].
#[derive(Debug, Clone, Copy)]
pub struct HazardInference<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> HazardInference<'a> {
    /// Wrap a knowledge store.
    pub const fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    /// Whether `position` provably holds no pit.
    pub fn is_pit_safe(&self, position: Position) -> bool {
        self.proven_by_neighbor(position, |t| !t.breeze_observed)
    }

    /// Whether `position` provably holds no live monster.
    pub fn is_monster_safe(&self, position: Position) -> bool {
        if self.store.scream_heard() && self.store.grid().contains(position) {
            return true;
        }
        self.proven_by_neighbor(position, |t| !t.stench_observed)
    }

    /// Whether `position` is both pit-safe and monster-safe.
    pub fn is_safe(&self, position: Position) -> bool {
        self.is_pit_safe(position) && self.is_monster_safe(position)
    }

    /// Whether `position` provably holds the live monster.
    pub fn is_confirmed_monster(&self, position: Position) -> bool {
        if self.store.scream_heard()
            || !self.store.grid().contains(position)
            || self.store.is_visited(position)
        {
            return false;
        }
        Direction::ALL.into_iter().any(|front| {
            LocalView {
                store: self.store,
                origin: position,
                front,
            }
            .matches()
        })
    }

    /// The combined verdict for `position`.
    pub fn verdict(&self, position: Position) -> Verdict {
        if self.is_safe(position) {
            Verdict::Safe
        } else if self.is_confirmed_monster(position) {
            Verdict::ConfirmedMonster
        } else {
            Verdict::Risky
        }
    }

    /// Visited tiles are safe; otherwise some visited neighbor must pass `clear`.
    fn proven_by_neighbor(
        &self,
        position: Position,
        clear: impl Fn(&TileKnowledge) -> bool,
    ) -> bool {
        let grid = self.store.grid();
        if !grid.contains(position) {
            return false;
        }
        if self.store.is_visited(position) {
            return true;
        }
        grid.neighbors(position).any(|(_, n)| {
            self.store
                .tile(n)
                .is_some_and(|t| t.visited && clear(t))
        })
    }
}

/// The neighborhood of one tile seen through one rotation.
///
/// Offsets are `(forward, rightward)` relative to the target tile, with
/// forward pointing along `front`.
struct LocalView<'a> {
    store: &'a KnowledgeStore,
    origin: Position,
    front: Direction,
}

impl LocalView<'_> {
    fn matches(&self) -> bool {
        if !self.stenchy(1, 0) {
            return false;
        }
        self.opposite_pair() || self.corner_pair() || self.wall_bump()
    }

    fn opposite_pair(&self) -> bool {
        self.stenchy(-1, 0)
    }

    fn corner_pair(&self) -> bool {
        self.stenchy(0, 1) && self.visited(1, 1)
    }

    fn wall_bump(&self) -> bool {
        if !self.visited_or_wall(2, 0) {
            return false;
        }
        let bump = self.bump(1, 0);
        (self.visited(1, 1) && bump == Some(self.front.left()))
            || (self.visited(1, -1) && bump == Some(self.front.right()))
    }

    fn at(&self, forward: i8, rightward: i8) -> Option<Position> {
        let grid = self.store.grid();
        let mut pos = self.origin;
        for (dir, steps) in [(self.front, forward), (self.front.right(), rightward)] {
            let dir = if steps < 0 { dir.opposite() } else { dir };
            for _ in 0..steps.unsigned_abs() {
                pos = grid.neighbor(pos, dir)?;
            }
        }
        Some(pos)
    }

    fn tile(&self, forward: i8, rightward: i8) -> Option<&TileKnowledge> {
        self.at(forward, rightward).and_then(|p| self.store.tile(p))
    }

    fn stenchy(&self, forward: i8, rightward: i8) -> bool {
        self.tile(forward, rightward)
            .is_some_and(|t| t.visited && t.stench_observed)
    }

    fn visited(&self, forward: i8, rightward: i8) -> bool {
        self.tile(forward, rightward).is_some_and(|t| t.visited)
    }

    fn visited_or_wall(&self, forward: i8, rightward: i8) -> bool {
        self.tile(forward, rightward).is_none_or(|t| t.visited)
    }

    fn bump(&self, forward: i8, rightward: i8) -> Option<Direction> {
        self.tile(forward, rightward).and_then(|t| t.bump_direction)
    }
}
