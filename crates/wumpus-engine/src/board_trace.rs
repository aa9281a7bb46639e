//! Step callback that logs the player's view of the board.

use tracing::{Level, debug, enabled};
use wumpus_core::runner::StepCallback;
use wumpus_types::Percept;
use wumpus_world::{GridWorld, StepOutcome, render_board};

/// Emits the unrevealed board at debug level after every step.
pub struct BoardTrace;

impl StepCallback<GridWorld> for BoardTrace {
    fn on_step(&mut self, step: u32, outcome: &StepOutcome, world: &GridWorld) {
        if !enabled!(Level::DEBUG) {
            return;
        }
        let percepts: Vec<&str> = outcome.state.percepts.iter().map(Percept::as_str).collect();
        debug!(
            step,
            action = %outcome.action,
            percepts = ?percepts,
            "\n{}",
            render_board(world, false)
        );
    }
}
