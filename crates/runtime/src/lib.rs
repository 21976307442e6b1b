//! In-memory level and turn loop around the monster AI.
//!
//! The runtime owns what `ai-core` only queries: the terrain grid, the monster
//! roster with its occupancy index, and the player. [`TurnDriver`] runs every
//! active monster once per turn in roster order, applying each move to the
//! occupancy index before the next monster decides.
//!
//! Modules are organized by responsibility:
//! - [`level`] holds terrain, monsters and occupancy, and serves [`ai_core::MapQuery`]
//! - [`player`] is the player state monsters attack and rob
//! - [`driver`] runs turns and logs what happened
//! - [`scenario`] builds a level from loaded content
//! - [`snapshot`] saves and restores monster records
pub mod driver;
pub mod error;
pub mod level;
pub mod player;
pub mod scenario;
pub mod snapshot;

pub use driver::{TurnDriver, TurnSummary};
pub use error::{Result, ScenarioError};
pub use level::{Level, LevelView, TerrainGrid, TerrainKind};
pub use player::PlayerState;
pub use scenario::build_level;
pub use snapshot::{LevelSnapshot, SnapshotError, SnapshotStore};
