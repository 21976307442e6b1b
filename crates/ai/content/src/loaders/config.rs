//! AI configuration loader.

use std::path::Path;

use ai_core::AiConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for AI tuning from TOML files.
///
/// Every field is optional; missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<AiConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AiConfig> {
        let config: AiConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse AI config TOML: {}", e))?;

        if config.alert_per_tile == 0 {
            anyhow::bail!("alert_per_tile must be at least 1");
        }
        if config.hit.min > config.hit.max {
            anyhow::bail!(
                "hit chance min {} is greater than max {}",
                config.hit.min,
                config.hit.max
            );
        }
        if config.wander_chance > 100 || config.theft_chance > 100 {
            anyhow::bail!("percent chances must be within 0..=100");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), AiConfig::default());
    }

    #[test]
    fn overrides_selected_fields() {
        let config = ConfigLoader::parse(
            r#"
            search_turns = 8
            wander_chance = 0

            [hit]
            base = 70
            "#,
        )
        .unwrap();
        assert_eq!(config.search_turns, 8);
        assert_eq!(config.wander_chance, 0);
        assert_eq!(config.hit.base, 70);
        assert_eq!(config.hit.per_point, AiConfig::default().hit.per_point);
        assert_eq!(config.flee_health_percent, AiConfig::DEFAULT_FLEE_HEALTH_PERCENT);
    }

    #[test]
    fn rejects_inconsistent_values() {
        assert!(ConfigLoader::parse("alert_per_tile = 0").is_err());
        assert!(ConfigLoader::parse("theft_chance = 101").is_err());
        assert!(ConfigLoader::parse("[hit]\nmin = 90\nmax = 20").is_err());
        assert!(ConfigLoader::parse("search_turns = \"five\"").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "patrol_radius = 6").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.patrol_radius, 6);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
