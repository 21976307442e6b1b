//! Simulator settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Headless simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Directory holding `ai.toml` and `scenarios/`.
    pub data_dir: PathBuf,
    pub scenario: String,
    /// AI tuning file overriding `{data_dir}/ai.toml`.
    pub ai_config: Option<PathBuf>,
    pub turns: u64,
    /// Seed overriding the scenario's own.
    pub seed: Option<u64>,
    /// Print the level after the last turn.
    pub render: bool,
    /// Where to save the final monster roster, if anywhere.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "crypt".to_string(),
            ai_config: None,
            turns: 50,
            seed: None,
            render: true,
            snapshot_dir: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_DATA_DIR` - content directory (default: `data`)
    /// - `DUNGEON_SCENARIO` - scenario name under `scenarios/` (default: `crypt`)
    /// - `DUNGEON_AI_CONFIG` - explicit AI tuning file
    /// - `DUNGEON_TURNS` - number of turns to run (default: 50)
    /// - `DUNGEON_SEED` - game seed override
    /// - `DUNGEON_RENDER` - print the final level (default: true)
    /// - `DUNGEON_SNAPSHOT_DIR` - save the final roster as JSON here
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DUNGEON_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Ok(name) = env::var("DUNGEON_SCENARIO") {
            config.scenario = name;
        }
        config.ai_config = read_env("DUNGEON_AI_CONFIG");
        if let Some(turns) = read_env::<u64>("DUNGEON_TURNS") {
            config.turns = turns;
        }
        config.seed = read_env("DUNGEON_SEED");
        if let Some(render) = read_env::<bool>("DUNGEON_RENDER") {
            config.render = render;
        }
        config.snapshot_dir = read_env("DUNGEON_SNAPSHOT_DIR");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
