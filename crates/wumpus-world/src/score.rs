//! Scoring table.
//!
//! | Event                         | Points |
//! |-------------------------------|--------|
//! | Death                         | -1000  |
//! | Holding the gold              | +1000  |
//! | Move, rotate, or grab         | -1     |
//! | Shoot                         | -10    |
//! | No-op or exit                 | 0      |

use wumpus_types::Action;

/// Points lost when the player dies.
pub const DEATH_PENALTY: i64 = -1000;

/// Points gained for holding the gold.
pub const GOLD_REWARD: i64 = 1000;

/// The fixed cost of performing `action`.
pub const fn action_cost(action: Action) -> i64 {
    match action {
        Action::MoveForward | Action::RotateLeft | Action::RotateRight | Action::Grab => -1,
        Action::Shoot => -10,
        Action::NoOp | Action::Exit => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_costs() {
        assert_eq!(action_cost(Action::MoveForward), -1);
        assert_eq!(action_cost(Action::RotateLeft), -1);
        assert_eq!(action_cost(Action::RotateRight), -1);
        assert_eq!(action_cost(Action::Grab), -1);
        assert_eq!(action_cost(Action::Shoot), -10);
        assert_eq!(action_cost(Action::NoOp), 0);
        assert_eq!(action_cost(Action::Exit), 0);
    }
}
