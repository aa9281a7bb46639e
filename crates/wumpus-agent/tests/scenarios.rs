//! End-to-end decision scenarios for the logic agent.
//!
//! Each test feeds a hand-written sequence of player states through a fresh
//! controller and checks the actions it answers with.

#![allow(clippy::unwrap_used)]

use wumpus_agent::{
    AgentConfig, ControllerState, FrontierChoice, FrontierSelector, HazardInference, KnowledgeStore,
    LogicAgent, Terminal, Verdict, plan,
};
use wumpus_types::{Action, Direction, Grid, Percept, PerceptSet, PlayerState, Position};

fn state(x: u32, y: u32, facing: Direction, percepts: &[Percept]) -> PlayerState {
    PlayerState::new(Position::new(x, y), facing, percepts.iter().copied().collect())
}

#[test]
fn quiet_start_moves_straight_east() {
    let mut store = KnowledgeStore::new(Grid::new(4, 4));
    store
        .record(Position::ORIGIN, &PerceptSet::new(), Direction::East)
        .unwrap();
    let cfg = AgentConfig::default();
    let choice = FrontierSelector::new(&store, &cfg)
        .select(Position::ORIGIN, true)
        .unwrap();
    assert_eq!(choice, FrontierChoice::Move(Position::new(1, 0)));

    let actions = plan(Direction::East, Position::ORIGIN, choice.target(), Terminal::Move).unwrap();
    assert_eq!(actions, [Action::MoveForward]);
}

#[test]
fn pit_safety_comes_only_from_direct_neighbors() {
    let mut store = KnowledgeStore::new(Grid::new(4, 4));
    let breeze = PerceptSet::new().with(Percept::Breeze);
    store.record(Position::ORIGIN, &breeze, Direction::East).unwrap();
    store
        .record(Position::new(0, 1), &PerceptSet::new(), Direction::South)
        .unwrap();

    let inf = HazardInference::new(&store);
    assert!(!inf.is_pit_safe(Position::new(1, 0)));
    assert_eq!(inf.verdict(Position::new(1, 0)), Verdict::Risky);
    assert!(inf.is_pit_safe(Position::new(1, 1)));
    assert!(inf.is_pit_safe(Position::new(0, 2)));
}

#[test]
fn breezy_start_backs_off_after_probing() {
    // Breeze at the start: nothing is safe, so the agent takes the
    // not-provably-dangerous east tile rather than staying put.
    let mut agent = LogicAgent::new(Grid::new(4, 4), AgentConfig::default());
    let first = agent.decide(&state(0, 0, Direction::East, &[Percept::Breeze])).unwrap();
    assert_eq!(first, Action::MoveForward);

    // At (1,0) it is quiet: (2,0) and (1,1) are now proven safe.
    let second = agent.decide(&state(1, 0, Direction::East, &[])).unwrap();
    assert_eq!(second, Action::MoveForward);
    let inf = HazardInference::new(agent.knowledge());
    assert_eq!(inf.verdict(Position::new(1, 1)), Verdict::Safe);
}

/// Call `decide` until the queued plan is drained, returning every action.
fn settle(agent: &mut LogicAgent, s: &PlayerState) -> Vec<Action> {
    let mut actions = vec![agent.decide(s).unwrap()];
    while agent.state() == ControllerState::Executing {
        actions.push(agent.decide(s).unwrap());
    }
    actions
}

#[test]
fn agent_shoots_confirmed_monster_and_trusts_scream() {
    let mut agent = LogicAgent::new(Grid::new(3, 3), AgentConfig::default());
    settle(&mut agent, &state(1, 2, Direction::North, &[Percept::Stench]));

    // Stench above and below (1,1): it must hold the monster.
    let actions = settle(&mut agent, &state(1, 0, Direction::South, &[Percept::Stench]));
    assert_eq!(actions, vec![Action::Shoot]);

    // The arrow hit. Everything around (1,0) is now safe; east comes first.
    let actions = settle(
        &mut agent,
        &state(1, 0, Direction::South, &[Percept::Stench, Percept::Scream]),
    );
    assert_eq!(actions, vec![Action::RotateLeft, Action::MoveForward]);
    let inf = HazardInference::new(agent.knowledge());
    assert_eq!(inf.verdict(Position::new(1, 1)), Verdict::Safe);
}

#[test]
fn out_of_arrows_never_shoots() {
    let mut agent = LogicAgent::new(Grid::new(3, 3), AgentConfig::default());
    settle(&mut agent, &state(1, 2, Direction::North, &[Percept::Stench]));
    let actions = settle(
        &mut agent,
        &state(1, 0, Direction::South, &[Percept::Stench, Percept::OutOfArrows]),
    );
    assert!(!actions.contains(&Action::Shoot));
    // Nothing is safe and the monster tile weighs least: the agent backs
    // off east, away from (1,1).
    assert_eq!(actions, vec![Action::RotateLeft, Action::MoveForward]);
}

#[test]
fn scream_voids_every_confirmation() {
    let mut store = KnowledgeStore::new(Grid::new(4, 4));
    let stench = PerceptSet::new().with(Percept::Stench);
    store.record(Position::new(1, 0), &stench, Direction::South).unwrap();
    store.record(Position::new(1, 2), &stench, Direction::North).unwrap();
    store.record(Position::new(0, 1), &stench, Direction::East).unwrap();
    store.record(Position::new(2, 1), &stench, Direction::West).unwrap();
    assert!(HazardInference::new(&store).is_confirmed_monster(Position::new(1, 1)));

    let scream = PerceptSet::new().with(Percept::Scream);
    store.record(Position::new(2, 1), &scream, Direction::West).unwrap();
    let inf = HazardInference::new(&store);
    for pos in store.grid().positions() {
        assert_ne!(inf.verdict(pos), Verdict::ConfirmedMonster, "{pos}");
    }
}

#[test]
fn exhausted_ring_never_stalls() {
    let mut agent = LogicAgent::new(Grid::new(3, 3), AgentConfig::default());
    let ring = [(1, 0), (2, 1), (1, 2), (0, 1)];
    // Each settled call is one fresh decision, so each ring tile ends up
    // with a visit count of three.
    for _ in 0..3 {
        for (x, y) in ring {
            let actions = settle(&mut agent, &state(x, y, Direction::North, &[]));
            assert!(!actions.contains(&Action::NoOp));
        }
    }
    let action = agent.decide(&state(1, 1, Direction::North, &[])).unwrap();
    // Centre tile: all four neighbors weigh 1, so north wins with no turn.
    assert_eq!(action, Action::MoveForward);
}

#[test]
fn identical_inputs_give_identical_actions() {
    let script = [
        state(0, 0, Direction::East, &[]),
        state(1, 0, Direction::East, &[Percept::Breeze]),
        state(1, 0, Direction::South, &[Percept::Breeze]),
        state(1, 0, Direction::West, &[Percept::Breeze]),
        state(0, 0, Direction::West, &[]),
        state(0, 0, Direction::North, &[]),
        state(0, 0, Direction::East, &[]),
        state(0, 1, Direction::South, &[Percept::Stench]),
        state(0, 1, Direction::South, &[Percept::Stench]),
    ];

    let run = || {
        let mut agent = LogicAgent::new(Grid::new(4, 4), AgentConfig::default());
        script
            .iter()
            .map(|s| agent.decide(s).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
