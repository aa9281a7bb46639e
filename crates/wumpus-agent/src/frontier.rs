//! Frontier selection: which neighbor to act on next.
//!
//! Policy, first match wins:
//!
//! 1. The first unvisited neighbor that is provably safe, in
//!    [`Direction::ALL`] order. Move there.
//! 2. If arrows remain, the first confirmed-monster neighbor. Shoot it.
//! 3. Otherwise the neighbor with the highest revisit weight (see
//!    [`AgentConfig`]), ties broken by direction order. Move there.
//!
//! Grabbing gold is decided by the controller before the selector runs.
//!
//! [`Direction::ALL`]: wumpus_types::Direction::ALL

use serde::{Deserialize, Serialize};
use tracing::debug;
use wumpus_types::Position;

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::inference::HazardInference;
use crate::knowledge::KnowledgeStore;
use crate::planner::Terminal;

/// The selector's decision for the next plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrontierChoice {
    /// Walk onto this neighbor.
    Move(Position),
    /// Fire an arrow at this neighbor.
    Shoot(Position),
}

impl FrontierChoice {
    /// The neighbor this choice targets.
    pub const fn target(self) -> Position {
        match self {
            Self::Move(p) | Self::Shoot(p) => p,
        }
    }

    /// The terminal action the plan should end with.
    pub const fn terminal(self) -> Terminal {
        match self {
            Self::Move(_) => Terminal::Move,
            Self::Shoot(_) => Terminal::Shoot,
        }
    }
}

/// Deterministic neighbor selection over a knowledge store.
#[derive(Debug, Clone, Copy)]
pub struct FrontierSelector<'a> {
    store: &'a KnowledgeStore,
    config: &'a AgentConfig,
}

impl<'a> FrontierSelector<'a> {
    /// Create a selector.
    pub const fn new(store: &'a KnowledgeStore, config: &'a AgentConfig) -> Self {
        Self { store, config }
    }

    /// Pick the next target around `position`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::OutOfBounds`] for a position outside the grid
    /// and [`AgentError::EmptyFrontier`] when it has no in-bounds neighbor.
    pub fn select(
        &self,
        position: Position,
        has_arrows: bool,
    ) -> Result<FrontierChoice, AgentError> {
        let grid = self.store.grid();
        self.store.query(position)?;

        let inference = HazardInference::new(self.store);
        let neighbors: Vec<Position> = grid.neighbors(position).map(|(_, p)| p).collect();

        if let Some(&safe) = neighbors
            .iter()
            .find(|&&p| !self.store.is_visited(p) && inference.is_safe(p))
        {
            debug!(%position, target = %safe, "safe unvisited neighbor");
            return Ok(FrontierChoice::Move(safe));
        }

        if has_arrows
            && let Some(&threat) = neighbors
                .iter()
                .find(|&&p| inference.is_confirmed_monster(p))
        {
            debug!(%position, target = %threat, "confirmed monster in range");
            return Ok(FrontierChoice::Shoot(threat));
        }

        let mut best: Option<(Position, u32)> = None;
        for &candidate in &neighbors {
            let weight = self.revisit_weight(&inference, candidate);
            if best.is_none_or(|(_, top)| weight > top) {
                best = Some((candidate, weight));
            }
        }

        let (target, weight) = best.ok_or(AgentError::EmptyFrontier { position })?;
        debug!(%position, target = %target, weight, "fallback by revisit weight");
        Ok(FrontierChoice::Move(target))
    }

    /// The fallback weight of moving onto `candidate`.
    ///
    /// Only called after the shoot rule, so a confirmed monster here means
    /// the arrows are gone.
    ///
    /// Unvisited tiles are split by how much of their hazard is ruled out: a
    /// tile cleared of pits or of the monster outranks one with no evidence
    /// either way, since only one hazard can still be there. Both sit below a
    /// fresh backtrack and above a tile walked through
    /// `well_explored_threshold` times.
    pub fn revisit_weight(&self, inference: &HazardInference<'_>, candidate: Position) -> u32 {
        let cfg = self.config;
        match self.store.tile(candidate) {
            Some(tile) if tile.visited => {
                if tile.visit_count >= cfg.well_explored_threshold {
                    cfg.exhausted_weight
                } else {
                    cfg.visited_weight
                }
            }
            _ if inference.is_confirmed_monster(candidate) => cfg.threat_weight,
            _ if inference.is_pit_safe(candidate) || inference.is_monster_safe(candidate) => {
                cfg.partially_safe_weight
            }
            _ => cfg.unknown_weight,
        }
    }
}
