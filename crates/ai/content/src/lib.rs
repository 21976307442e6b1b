//! Data-driven AI content and loaders.
//!
//! This crate reads the files a game or the headless simulator feeds into the
//! AI core:
//! - AI tuning (`AiConfig`, TOML)
//! - Encounter scenarios: terrain rows, the player and monster spawns (RON)
//!
//! Content is consumed by the runtime when it builds a level and never appears
//! in saved monster state.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{PlayerSpec, Scenario, SpawnSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ScenarioLoader};
