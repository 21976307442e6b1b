//! Scenario loader.
//!
//! Scenarios are RON documents shaped like [`Scenario`]. The loader checks what
//! can be checked without building a level: species letters, patrol lengths and
//! a rectangular grid.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.rows.is_empty() || scenario.width() == 0 {
            anyhow::bail!("scenario '{}' has an empty map", scenario.name);
        }
        for (index, spawn) in scenario.spawns.iter().enumerate() {
            if spawn.species().is_none() {
                anyhow::bail!(
                    "spawn #{} uses unknown species letter {:?}",
                    index,
                    spawn.species
                );
            }
            if !spawn.patrol_fits() {
                anyhow::bail!(
                    "spawn #{} lists {} patrol waypoints, at most {} allowed",
                    index,
                    spawn.patrol.len(),
                    ai_core::AiConfig::MAX_WAYPOINTS
                );
            }
        }

        Ok(scenario)
    }
}
