//! Content factory for loading AI content from a data directory.

use std::path::{Path, PathBuf};

use ai_core::AiConfig;

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};
use crate::scenario::Scenario;

/// Content factory that loads all AI content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── ai.toml
/// └── scenarios/
///     └── crypt.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load AI tuning from `ai.toml`, falling back to defaults when the file
    /// does not exist.
    pub fn load_config(&self) -> LoadResult<AiConfig> {
        let path = self.data_dir.join("ai.toml");
        if !path.exists() {
            return Ok(AiConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), AiConfig::default());
    }

    #[test]
    fn resolves_scenarios_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("scenarios")).unwrap();
        std::fs::write(
            dir.path().join("scenarios").join("hall.ron"),
            r#"(name: "hall", rows: ["...."], player: (position: (0, 0), health: 9))"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let scenario = factory.load_scenario("hall").unwrap();
        assert_eq!(scenario.name, "hall");
        assert!(factory.load_scenario("missing").is_err());
    }
}
