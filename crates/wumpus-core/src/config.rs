//! Configuration loading and typed config structures for the Wumpus simulation.
//!
//! The canonical configuration lives in `wumpus-config.yaml` at the project
//! root. Every field has a default, so a missing file, an empty file, or a
//! file naming only a few keys all produce a playable configuration.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;
use wumpus_agent::AgentConfig;
use wumpus_types::{Grid, Position};
use wumpus_world::{GridWorld, WorldError, WorldLayout};

/// Environment variable that overrides `world.seed`.
pub const SEED_ENV_VAR: &str = "WUMPUS_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `wumpus-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Cave size, seed, hazards, and arrows.
    #[serde(default)]
    pub world: WorldConfig,

    /// Agent policy weights; missing keys take the agent crate's defaults.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Episode bounds.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `WUMPUS_SEED` overrides `world.seed` when set to a valid integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.world.apply_env_overrides();
        Ok(config)
    }
}

/// World configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Cave width in tiles.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Cave height in tiles.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Random seed for layout generation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Chance, in percent, that a free tile holds a pit.
    #[serde(default = "default_pit_probability_pct")]
    pub pit_probability_pct: u32,

    /// Arrows in the quiver at the start.
    #[serde(default = "default_arrows")]
    pub arrows: u32,

    /// Fixed layout; when absent the layout is generated from `seed`.
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

impl WorldConfig {
    /// Override the seed from `WUMPUS_SEED` when it is set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_seed_override(std::env::var(SEED_ENV_VAR).ok().as_deref());
    }

    /// Override the seed from a raw string; unparsable values are ignored.
    pub fn apply_seed_override(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };
        match raw.trim().parse::<u64>() {
            Ok(seed) => self.seed = seed,
            Err(_) => warn!(value = raw, "ignoring non-numeric {SEED_ENV_VAR}"),
        }
    }

    /// Build the world this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if the explicit layout or the
    /// generation parameters cannot produce a playable cave.
    pub fn build_world(&self) -> Result<GridWorld, WorldError> {
        let grid = Grid::new(self.width, self.height);
        match &self.layout {
            Some(layout) => {
                let layout = WorldLayout::new(
                    grid,
                    layout.wumpus,
                    layout.gold,
                    layout.pits.iter().copied(),
                )?;
                Ok(GridWorld::new(layout, self.arrows))
            }
            None => GridWorld::from_seed(grid, self.seed, self.pit_probability_pct, self.arrows),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            seed: default_seed(),
            pit_probability_pct: default_pit_probability_pct(),
            arrows: default_arrows(),
            layout: None,
        }
    }
}

/// A hand-placed cave.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    /// Wumpus tile.
    pub wumpus: Position,
    /// Gold tile.
    pub gold: Position,
    /// Pit tiles.
    #[serde(default)]
    pub pits: Vec<Position>,
}

/// Episode bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum actions before the episode is cut off.
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_size() -> u32 {
    4
}

const fn default_seed() -> u64 {
    42
}

const fn default_pit_probability_pct() -> u32 {
    20
}

const fn default_arrows() -> u32 {
    1
}

const fn default_max_steps() -> u32 {
    200
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.world.width, 4);
        assert_eq!(config.world.height, 4);
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.world.pit_probability_pct, 20);
        assert_eq!(config.world.arrows, 1);
        assert!(config.world.layout.is_none());
        assert_eq!(config.simulation.max_steps, 200);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_agent_section_keeps_other_defaults() {
        let yaml = "agent:\n  visited_weight: 9\n  return_with_gold: false\n";
        let config = SimulationConfig::parse(yaml).unwrap();

        let expected = AgentConfig {
            visited_weight: 9,
            return_with_gold: false,
            ..AgentConfig::default()
        };
        assert_eq!(config.agent, expected);
        assert_eq!(config.agent.threat_weight, 0);
        assert_eq!(config.agent.well_explored_threshold, 3);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
world:
  width: 5
  height: 3
  seed: 123
  pit_probability_pct: 10
  arrows: 2
  layout:
    wumpus: { x: 4, y: 0 }
    gold: { x: 2, y: 2 }
    pits:
      - { x: 1, y: 1 }

agent:
  well_explored_threshold: 4
  visited_weight: 6
  exhausted_weight: 2
  partially_safe_weight: 4
  unknown_weight: 3
  threat_weight: 1
  return_with_gold: false

simulation:
  max_steps: 50

logging:
  level: debug
";
        let mut config: SimulationConfig = serde_yml::from_str(yaml).unwrap();
        config.world.apply_seed_override(None);

        assert_eq!(config.world.width, 5);
        assert_eq!(config.world.height, 3);
        assert_eq!(config.world.seed, 123);
        assert_eq!(config.world.arrows, 2);
        let layout = config.world.layout.as_ref().unwrap();
        assert_eq!(layout.wumpus, Position::new(4, 0));
        assert_eq!(layout.pits, vec![Position::new(1, 1)]);

        let agent = &config.agent;
        assert_eq!(agent.well_explored_threshold, 4);
        assert_eq!(agent.unknown_weight, 3);
        assert!(!agent.return_with_gold);

        assert_eq!(config.simulation.max_steps, 50);
        assert_eq!(config.logging.level, "debug");

        let world = config.world.build_world().unwrap();
        assert_eq!(world.layout().gold(), Position::new(2, 2));
        assert_eq!(world.arrows(), 2);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "simulation:\n  max_steps: 7\n";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(SimulationConfig::default);

        assert_eq!(config.simulation.max_steps, 7);
        // Everything else uses defaults
        assert_eq!(config.world.width, 4);
        assert_eq!(config.agent, AgentConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let yaml = "";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let config = SimulationConfig::parse("world: [unterminated");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn seed_override() {
        let mut world = WorldConfig::default();
        world.apply_seed_override(Some(" 99 "));
        assert_eq!(world.seed, 99);
        world.apply_seed_override(Some("not-a-seed"));
        assert_eq!(world.seed, 99);
        world.apply_seed_override(None);
        assert_eq!(world.seed, 99);
    }

    #[test]
    fn explicit_layout_is_validated() {
        let world = WorldConfig {
            layout: Some(LayoutConfig {
                wumpus: Position::new(0, 0),
                gold: Position::new(1, 1),
                pits: Vec::new(),
            }),
            ..WorldConfig::default()
        };
        assert!(matches!(
            world.build_world(),
            Err(WorldError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("wumpus-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
