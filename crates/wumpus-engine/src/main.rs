//! Engine binary for the Wumpus agent simulation.
//!
//! Loads configuration, builds the cave and the logic agent, plays one
//! episode, and logs the outcome.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `wumpus-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the world from an explicit layout or the seed
//! 4. Build the logic agent from the `agent` settings
//! 5. Run the episode
//! 6. Log the revealed board and the JSON result

mod board_trace;
mod error;

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use wumpus_agent::LogicAgent;
use wumpus_core::config::SimulationConfig;
use wumpus_core::runner;
use wumpus_world::{WorldInterface, render_board};

use crate::board_trace::BoardTrace;
use crate::error::EngineError;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "wumpus-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, world construction, or the episode
/// itself fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.logging.level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("wumpus-engine starting");
    info!(
        from_file,
        width = config.world.width,
        height = config.world.height,
        seed = config.world.seed,
        explicit_layout = config.world.layout.is_some(),
        max_steps = config.simulation.max_steps,
        "Configuration loaded"
    );

    run(&config)?;

    info!("wumpus-engine stopped");
    Ok(())
}

fn run(config: &SimulationConfig) -> Result<(), EngineError> {
    // 3. Build the world.
    let mut world = config.world.build_world()?;
    let layout = world.layout();
    info!(
        wumpus = %layout.wumpus(),
        gold = %layout.gold(),
        pits = layout.pits().len(),
        arrows = world.arrows(),
        "World built"
    );

    // 4. Build the agent.
    let mut agent = LogicAgent::new(world.grid(), config.agent.clone());

    // 5. Run the episode.
    let result = runner::run_episode_with(
        &mut world,
        &mut agent,
        config.simulation.max_steps,
        &mut BoardTrace,
    )?;
    runner::log_episode_end(&result);

    // 6. Log the revealed board and the result.
    info!("Final board\n{}", render_board(&world, true));
    let json = serde_json::to_string(&result)?;
    info!(result = %json, "Episode result");
    Ok(())
}

/// Load configuration from `wumpus-config.yaml`, or defaults if absent.
///
/// Returns the config and whether it came from the file. Logging is not up
/// yet, so nothing is logged here.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        let mut config = SimulationConfig::default();
        config.world.apply_env_overrides();
        Ok((config, false))
    }
}
