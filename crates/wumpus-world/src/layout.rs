//! Hazard and gold placement.
//!
//! A layout is either written out explicitly (tests, hand-made caves) or
//! generated from a seed. Generation uses [`SmallRng`], so the same grid,
//! seed, and pit probability always give the same cave.
//!
//! Placement rules, checked for both kinds of layout:
//! - nothing is placed on the start tile;
//! - the wumpus and the gold are on different tiles;
//! - pits never share a tile with the wumpus or the gold.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wumpus_types::{Grid, Position};

use crate::error::WorldError;

/// Where the player starts every episode.
pub const START: Position = Position::ORIGIN;

/// Positions of everything hidden in the cave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldLayout {
    grid: Grid,
    wumpus: Position,
    gold: Position,
    pits: BTreeSet<Position>,
}

impl WorldLayout {
    /// Build an explicit layout.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if any entry is off the grid,
    /// on the start tile, or overlaps another entry.
    pub fn new(
        grid: Grid,
        wumpus: Position,
        gold: Position,
        pits: impl IntoIterator<Item = Position>,
    ) -> Result<Self, WorldError> {
        let layout = Self {
            grid,
            wumpus,
            gold,
            pits: pits.into_iter().collect(),
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Generate a layout from `seed`.
    ///
    /// The wumpus and the gold go on distinct random non-start tiles. Every
    /// remaining non-start tile holds a pit with `pit_probability_pct`
    /// percent chance.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if the grid has fewer than three
    /// tiles or the probability exceeds 100.
    pub fn generate(grid: Grid, seed: u64, pit_probability_pct: u32) -> Result<Self, WorldError> {
        if pit_probability_pct > 100 {
            return Err(invalid(format!(
                "pit probability {pit_probability_pct}% exceeds 100%"
            )));
        }
        check_capacity(grid)?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut free: Vec<Position> = grid.positions().filter(|&p| p != START).collect();

        let wumpus = take_random(&mut free, &mut rng)?;
        let gold = take_random(&mut free, &mut rng)?;
        let pits: BTreeSet<Position> = free
            .into_iter()
            .filter(|_| rng.random_range(0..100) < pit_probability_pct)
            .collect();

        debug!(
            seed,
            %wumpus,
            %gold,
            pits = pits.len(),
            "layout generated"
        );

        let layout = Self {
            grid,
            wumpus,
            gold,
            pits,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Dimensions of the cave.
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Where the wumpus lives.
    pub const fn wumpus(&self) -> Position {
        self.wumpus
    }

    /// Where the gold lies.
    pub const fn gold(&self) -> Position {
        self.gold
    }

    /// Every pit, in position order.
    pub const fn pits(&self) -> &BTreeSet<Position> {
        &self.pits
    }

    /// Whether a pit is at `position`.
    pub fn has_pit(&self, position: Position) -> bool {
        self.pits.contains(&position)
    }

    fn validate(&self) -> Result<(), WorldError> {
        check_capacity(self.grid)?;
        let placed = [("wumpus", self.wumpus), ("gold", self.gold)]
            .into_iter()
            .chain(self.pits.iter().map(|&p| ("pit", p)));
        for (what, position) in placed {
            if !self.grid.contains(position) {
                return Err(invalid(format!(
                    "{what} at {position} is outside the {}x{} cave",
                    self.grid.width, self.grid.height
                )));
            }
            if position == START {
                return Err(invalid(format!("{what} placed on the start tile")));
            }
        }
        if self.wumpus == self.gold {
            return Err(invalid(format!("wumpus and gold share {}", self.gold)));
        }
        if let Some(shared) = [self.wumpus, self.gold]
            .into_iter()
            .find(|p| self.pits.contains(p))
        {
            return Err(invalid(format!("pit overlaps wumpus or gold at {shared}")));
        }
        Ok(())
    }
}

fn check_capacity(grid: Grid) -> Result<(), WorldError> {
    if grid.tile_count() < 3 {
        return Err(invalid(format!(
            "a {}x{} cave cannot hold the start, the wumpus, and the gold",
            grid.width, grid.height
        )));
    }
    Ok(())
}

fn take_random(free: &mut Vec<Position>, rng: &mut SmallRng) -> Result<Position, WorldError> {
    let chosen = *free
        .choose(rng)
        .ok_or_else(|| invalid("no free tile left".to_owned()))?;
    free.retain(|&p| p != chosen);
    Ok(chosen)
}

const fn invalid(reason: String) -> WorldError {
    WorldError::InvalidLayout { reason }
}
