//! The reference rules engine.
//!
//! The player starts on [`START`] facing East. Each call to
//! [`WorldInterface::apply`] performs one action, updates the score, and
//! recomputes what the player senses on the resulting tile:
//!
//! - `Breeze` when a pit is orthogonally adjacent.
//! - `Stench` when the wumpus, alive or dead, is adjacent or on this tile.
//! - `Glitter` when the gold is on this tile and has not been picked up.
//! - `Bump` on the step after walking into a wall.
//! - `Scream` on the step after the arrow kills the wumpus.
//! - `OutOfArrows` once the quiver is empty.
//!
//! Walking into a pit or a live wumpus ends the episode with
//! [`EpisodeStatus::Dead`]. `Exit` only ends the episode on the start tile;
//! anywhere else it does nothing.

use tracing::{debug, info};
use wumpus_types::{Action, Direction, Grid, Percept, PerceptSet, PlayerState, Position};

use crate::error::WorldError;
use crate::interface::{EpisodeStatus, StepOutcome, WorldInterface};
use crate::layout::{START, WorldLayout};
use crate::score::{DEATH_PENALTY, GOLD_REWARD, action_cost};

/// What occupies one tile, for rendering and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellContents {
    /// The wumpus is here, alive or dead.
    pub wumpus: bool,
    /// The wumpus here is still alive.
    pub wumpus_alive: bool,
    /// A pit is here.
    pub pit: bool,
    /// The gold is here and has not been picked up.
    pub gold: bool,
}

/// A single-player cave with a fixed hazard layout.
#[derive(Debug, Clone)]
pub struct GridWorld {
    layout: WorldLayout,
    position: Position,
    facing: Direction,
    arrows: u32,
    has_gold: bool,
    wumpus_alive: bool,
    bumped: bool,
    scream: bool,
    status: EpisodeStatus,
    score: i64,
    steps: u32,
}

impl GridWorld {
    /// Start an episode on `layout` with `arrows` arrows.
    pub const fn new(layout: WorldLayout, arrows: u32) -> Self {
        Self {
            layout,
            position: START,
            facing: Direction::East,
            arrows,
            has_gold: false,
            wumpus_alive: true,
            bumped: false,
            scream: false,
            status: EpisodeStatus::Running,
            score: 0,
            steps: 0,
        }
    }

    /// Start an episode on a layout generated from `seed`.
    ///
    /// # Errors
    ///
    /// Propagates [`WorldError::InvalidLayout`] from
    /// [`WorldLayout::generate`].
    pub fn from_seed(
        grid: Grid,
        seed: u64,
        pit_probability_pct: u32,
        arrows: u32,
    ) -> Result<Self, WorldError> {
        let layout = WorldLayout::generate(grid, seed, pit_probability_pct)?;
        Ok(Self::new(layout, arrows))
    }

    /// The hidden layout.
    pub const fn layout(&self) -> &WorldLayout {
        &self.layout
    }

    /// The player's tile.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The player's facing direction.
    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Arrows left in the quiver.
    pub const fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Whether the wumpus is still alive.
    pub const fn wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// Number of actions applied so far.
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// What occupies `position`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OutOfBounds`] if `position` is off the grid.
    pub fn cell(&self, position: Position) -> Result<CellContents, WorldError> {
        let grid = self.layout.grid();
        if !grid.contains(position) {
            return Err(WorldError::OutOfBounds {
                position,
                width: grid.width,
                height: grid.height,
            });
        }
        let wumpus = self.layout.wumpus() == position;
        Ok(CellContents {
            wumpus,
            wumpus_alive: wumpus && self.wumpus_alive,
            pit: self.layout.has_pit(position),
            gold: !self.has_gold && self.layout.gold() == position,
        })
    }

    /// Percepts on the player's current tile.
    pub fn percepts(&self) -> PerceptSet {
        let grid = self.layout.grid();
        let here = self.position;
        let mut percepts = PerceptSet::new();

        if grid.neighbors(here).any(|(_, n)| self.layout.has_pit(n)) {
            percepts.insert(Percept::Breeze);
        }
        let wumpus = self.layout.wumpus();
        if here == wumpus || grid.neighbors(here).any(|(_, n)| n == wumpus) {
            percepts.insert(Percept::Stench);
        }
        if !self.has_gold && here == self.layout.gold() {
            percepts.insert(Percept::Glitter);
        }
        if self.bumped {
            percepts.insert(Percept::Bump);
        }
        if self.scream {
            percepts.insert(Percept::Scream);
        }
        if self.arrows == 0 {
            percepts.insert(Percept::OutOfArrows);
        }
        percepts
    }

    /// Returns the extra reward caused by the move (death penalty or zero).
    fn move_forward(&mut self) -> i64 {
        let Some(next) = self.layout.grid().neighbor(self.position, self.facing) else {
            self.bumped = true;
            debug!(position = %self.position, facing = %self.facing, "bumped into wall");
            return 0;
        };
        self.position = next;
        let hazard = if self.layout.has_pit(next) {
            Some("pit")
        } else if self.wumpus_alive && next == self.layout.wumpus() {
            Some("wumpus")
        } else {
            None
        };
        match hazard {
            Some(cause) => {
                self.status = EpisodeStatus::Dead;
                info!(position = %next, cause, "player died");
                DEATH_PENALTY
            }
            None => 0,
        }
    }

    fn grab(&mut self) -> i64 {
        if self.has_gold || self.position != self.layout.gold() {
            return 0;
        }
        self.has_gold = true;
        info!(position = %self.position, "gold grabbed");
        GOLD_REWARD
    }

    fn shoot(&mut self) {
        let Some(left) = self.arrows.checked_sub(1) else {
            debug!("shot with an empty quiver");
            return;
        };
        self.arrows = left;
        let grid = self.layout.grid();
        let facing = self.facing;
        let wumpus = self.layout.wumpus();
        let hit = std::iter::successors(grid.neighbor(self.position, facing), |&p| {
            grid.neighbor(p, facing)
        })
        .any(|p| p == wumpus);
        if hit && self.wumpus_alive {
            self.wumpus_alive = false;
            self.scream = true;
            info!(position = %wumpus, "wumpus killed");
        } else {
            debug!(position = %self.position, %facing, "arrow missed");
        }
    }

    fn exit(&mut self) {
        if self.position == START {
            self.status = EpisodeStatus::Exited;
            info!(has_gold = self.has_gold, "player left the cave");
        } else {
            debug!(position = %self.position, "exit ignored away from start");
        }
    }
}

impl WorldInterface for GridWorld {
    fn grid(&self) -> Grid {
        self.layout.grid()
    }

    fn player_state(&self) -> PlayerState {
        PlayerState::new(self.position, self.facing, self.percepts())
    }

    fn apply(&mut self, action: Action) -> Result<StepOutcome, WorldError> {
        if self.status.is_over() {
            return Err(WorldError::EpisodeOver {
                status: self.status,
            });
        }
        self.bumped = false;
        self.scream = false;

        let extra = match action {
            Action::MoveForward => self.move_forward(),
            Action::RotateLeft | Action::RotateRight => {
                self.facing = action.rotate(self.facing);
                0
            }
            Action::Grab => self.grab(),
            Action::Shoot => {
                self.shoot();
                0
            }
            Action::NoOp => 0,
            Action::Exit => {
                self.exit();
                0
            }
        };
        let reward = action_cost(action).saturating_add(extra);
        self.score = self.score.saturating_add(reward);
        self.steps = self.steps.saturating_add(1);

        Ok(StepOutcome {
            action,
            reward,
            status: self.status,
            state: self.player_state(),
        })
    }

    fn status(&self) -> EpisodeStatus {
        self.status
    }

    fn score(&self) -> i64 {
        self.score
    }

    fn has_gold(&self) -> bool {
        self.has_gold
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// 4x4 cave: wumpus at (0,2), gold at (1,2), pits at (2,0), (2,2), (3,3).
    fn classic() -> GridWorld {
        let layout = WorldLayout::new(
            Grid::new(4, 4),
            Position::new(0, 2),
            Position::new(1, 2),
            [Position::new(2, 0), Position::new(2, 2), Position::new(3, 3)],
        )
        .unwrap();
        GridWorld::new(layout, 1)
    }

    fn run(world: &mut GridWorld, actions: &[Action]) -> StepOutcome {
        let mut last = None;
        for &action in actions {
            last = Some(world.apply(action).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn starts_quiet_at_origin_facing_east() {
        let world = classic();
        let state = world.player_state();
        assert_eq!(state.position, START);
        assert_eq!(state.facing, Direction::East);
        assert!(state.percepts.is_empty());
        assert_eq!(world.status(), EpisodeStatus::Running);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn breeze_next_to_pit() {
        let mut world = classic();
        let out = run(&mut world, &[Action::MoveForward]);
        assert_eq!(out.state.position, Position::new(1, 0));
        assert!(out.state.senses(Percept::Breeze));
        assert!(!out.state.senses(Percept::Stench));
        assert_eq!(out.reward, -1);
    }

    #[test]
    fn bump_lasts_one_step() {
        let mut world = classic();
        let out = run(&mut world, &[Action::RotateLeft, Action::MoveForward]);
        assert_eq!(out.state.position, START);
        assert_eq!(out.state.facing, Direction::North);
        assert!(out.state.senses(Percept::Bump));
        let out = run(&mut world, &[Action::NoOp]);
        assert!(!out.state.senses(Percept::Bump));
    }

    #[test]
    fn walking_into_live_wumpus_is_fatal() {
        let mut world = classic();
        let out = run(
            &mut world,
            &[Action::RotateRight, Action::MoveForward, Action::MoveForward],
        );
        assert_eq!(out.status, EpisodeStatus::Dead);
        assert_eq!(world.score(), -1003);
        assert_eq!(
            world.apply(Action::NoOp).unwrap_err(),
            WorldError::EpisodeOver {
                status: EpisodeStatus::Dead
            }
        );
    }

    #[test]
    fn walking_into_pit_is_fatal() {
        let mut world = classic();
        let out = run(&mut world, &[Action::MoveForward, Action::MoveForward]);
        assert_eq!(out.state.position, Position::new(2, 0));
        assert_eq!(out.status, EpisodeStatus::Dead);
        assert_eq!(out.reward, -1001);
    }

    #[test]
    fn arrow_kills_in_line_and_scream_lasts_one_step() {
        let mut world = classic();
        let out = run(&mut world, &[Action::RotateRight, Action::MoveForward]);
        assert!(out.state.senses(Percept::Stench));

        let out = run(&mut world, &[Action::Shoot]);
        assert!(out.state.senses(Percept::Scream));
        assert!(out.state.senses(Percept::OutOfArrows));
        assert!(!world.wumpus_alive());
        assert_eq!(world.score(), -12);

        let out = run(&mut world, &[Action::NoOp]);
        assert!(!out.state.senses(Percept::Scream));
        assert!(out.state.senses(Percept::Stench));

        let out = run(&mut world, &[Action::MoveForward]);
        assert_eq!(out.state.position, Position::new(0, 2));
        assert_eq!(out.status, EpisodeStatus::Running);
    }

    #[test]
    fn arrow_misses_out_of_line() {
        let mut world = classic();
        let out = run(&mut world, &[Action::Shoot]);
        assert!(!out.state.senses(Percept::Scream));
        assert!(world.wumpus_alive());
        assert_eq!(world.arrows(), 0);

        let out = run(&mut world, &[Action::Shoot]);
        assert!(out.state.senses(Percept::OutOfArrows));
        assert_eq!(out.reward, -10);
    }

    #[test]
    fn grab_and_return_home() {
        let mut world = classic();
        let out = run(
            &mut world,
            &[
                Action::MoveForward,
                Action::RotateRight,
                Action::MoveForward,
                Action::MoveForward,
            ],
        );
        assert_eq!(out.state.position, Position::new(1, 2));
        assert!(out.state.senses(Percept::Glitter));
        assert!(out.state.senses(Percept::Stench));
        assert!(out.state.senses(Percept::Breeze));

        let out = run(&mut world, &[Action::Grab]);
        assert_eq!(out.reward, 999);
        assert!(world.has_gold());
        assert!(!out.state.senses(Percept::Glitter));
        assert!(!world.cell(Position::new(1, 2)).unwrap().gold);

        let out = run(&mut world, &[Action::Grab]);
        assert_eq!(out.reward, -1);

        let out = run(
            &mut world,
            &[
                Action::RotateRight,
                Action::RotateRight,
                Action::MoveForward,
                Action::MoveForward,
                Action::RotateLeft,
                Action::MoveForward,
                Action::Exit,
            ],
        );
        assert_eq!(out.status, EpisodeStatus::Exited);
        assert_eq!(world.position(), START);
        assert_eq!(world.score(), 1000 - 12);
    }

    #[test]
    fn exit_away_from_start_is_ignored() {
        let mut world = classic();
        let out = run(&mut world, &[Action::MoveForward, Action::Exit]);
        assert_eq!(out.status, EpisodeStatus::Running);
        assert_eq!(out.reward, 0);
    }

    #[test]
    fn running_score_matches_history() {
        let mut world = classic();
        let actions = [
            Action::RotateRight,
            Action::MoveForward,
            Action::Shoot,
            Action::NoOp,
            Action::RotateLeft,
            Action::MoveForward,
            Action::RotateRight,
            Action::MoveForward,
            Action::RotateLeft,
            Action::MoveForward,
        ];
        run(&mut world, &actions);
        let dead = world.status() == EpisodeStatus::Dead;
        assert!(dead);
        assert!(!world.has_gold());
        let costs: i64 = actions.iter().map(|&action| action_cost(action)).sum();
        assert_eq!(world.score(), costs.saturating_add(DEATH_PENALTY));
    }

    #[test]
    fn cell_reports_contents_and_bounds() {
        let world = classic();
        let w = world.cell(Position::new(0, 2)).unwrap();
        assert!(w.wumpus && w.wumpus_alive && !w.pit);
        assert!(world.cell(Position::new(2, 2)).unwrap().pit);
        assert!(matches!(
            world.cell(Position::new(4, 4)),
            Err(WorldError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn seeded_worlds_are_reproducible() {
        let a = GridWorld::from_seed(Grid::new(5, 5), 9, 20, 1).unwrap();
        let b = GridWorld::from_seed(Grid::new(5, 5), 9, 20, 1).unwrap();
        assert_eq!(a.layout(), b.layout());
        assert_eq!(a.player_state(), b.player_state());
    }
}
