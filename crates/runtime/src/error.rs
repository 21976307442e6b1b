//! Errors raised while building or restoring a level.

use ai_core::{MonsterId, Position, RecordError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("map has no tiles")]
    EmptyMap,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("unknown species letter {0:?}")]
    UnknownSpecies(char),

    #[error("{position} is outside the map")]
    OutOfBounds { position: Position },

    #[error("{position} is not walkable")]
    Blocked { position: Position },

    #[error("{position} is already taken by monster {occupant}")]
    Occupied {
        position: Position,
        occupant: MonsterId,
    },

    #[error("monster {0} already exists")]
    DuplicateId(MonsterId),

    #[error("invalid monster record: {0}")]
    Record(#[from] RecordError),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
