//! Persisted form of a monster.
//!
//! The save subsystem owns the file format; this module only defines which
//! fields survive a save and how they are validated on the way back in.

use std::str::FromStr;

use super::{AiState, Monster, MonsterId, PatrolRoute, Position};
use crate::species::Species;

/// Flat, serializable snapshot of a [`Monster`].
///
/// The AI state is stored by its symbolic name and the species by its letter,
/// so records stay readable and survive enum reordering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterRecord {
    pub id: u32,
    pub position: Position,
    pub species: char,
    pub health: u32,
    pub max_health: u32,
    pub state: String,
    pub last_known_player: Option<Position>,
    pub origin: Position,
    pub patrol: Vec<Position>,
    pub patrol_index: usize,
    pub patrol_reversing: bool,
    pub alert_level: u32,
    pub search_turns: u32,
    pub view_range: u32,
    pub detection_range: u32,
    pub turn_count: u64,
    pub is_active: bool,
}

/// Reasons a persisted record cannot be turned back into a monster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("unknown species letter {0:?}")]
    UnknownSpecies(char),

    #[error("unknown AI state '{0}'")]
    UnknownState(String),

    #[error("health {health} exceeds maximum {max_health}")]
    HealthOutOfRange { health: u32, max_health: u32 },

    #[error("view and detection ranges must be positive (got {view}, {detection})")]
    InvalidRange { view: u32, detection: u32 },

    #[error("patrol index {index} out of bounds for {len} waypoints")]
    PatrolIndexOutOfBounds { index: usize, len: usize },

    #[error("patrol route has {0} waypoints, more than allowed")]
    TooManyWaypoints(usize),
}

impl Monster {
    pub fn to_record(&self) -> MonsterRecord {
        MonsterRecord {
            id: self.id.0,
            position: self.position,
            species: self.species().symbol,
            health: self.health(),
            max_health: self.max_health(),
            state: self.state().to_string(),
            last_known_player: self.last_known_player,
            origin: self.origin,
            patrol: self.patrol.waypoints().to_vec(),
            patrol_index: self.patrol.cursor(),
            patrol_reversing: self.patrol.is_reversing(),
            alert_level: self.alert_level,
            search_turns: self.search_turns,
            view_range: self.view_range(),
            detection_range: self.detection_range(),
            turn_count: self.turn_count,
            is_active: self.is_active,
        }
    }

    /// Rebuilds a monster from a record, checking every invariant the live
    /// type enforces. Attack and defense come from the species table.
    pub fn from_record(record: &MonsterRecord) -> Result<Self, RecordError> {
        let species = Species::try_lookup(record.species)
            .ok_or(RecordError::UnknownSpecies(record.species))?;
        let state = AiState::from_str(&record.state)
            .map_err(|_| RecordError::UnknownState(record.state.clone()))?;

        if record.health > record.max_health {
            return Err(RecordError::HealthOutOfRange {
                health: record.health,
                max_health: record.max_health,
            });
        }
        if record.view_range == 0 || record.detection_range == 0 {
            return Err(RecordError::InvalidRange {
                view: record.view_range,
                detection: record.detection_range,
            });
        }
        if record.patrol.len() > crate::config::AiConfig::MAX_WAYPOINTS {
            return Err(RecordError::TooManyWaypoints(record.patrol.len()));
        }
        let patrol =
            PatrolRoute::from_parts(&record.patrol, record.patrol_index, record.patrol_reversing)
                .ok_or(RecordError::PatrolIndexOutOfBounds {
                    index: record.patrol_index,
                    len: record.patrol.len(),
                })?;

        let mut monster = Monster::spawn(MonsterId(record.id), species, record.position);
        monster.health = super::ResourceMeter::new(record.health, record.max_health);
        monster.restore_state(state);
        monster.alert_level = record.alert_level;
        monster.search_turns = record.search_turns;
        monster.last_known_player = record.last_known_player;
        monster.origin = record.origin;
        monster.patrol = patrol;
        monster.set_ranges(record.view_range, record.detection_range);
        monster.turn_count = record.turn_count;
        monster.is_active = record.is_active;
        Ok(monster)
    }
}
