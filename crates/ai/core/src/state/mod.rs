//! Monster state owned by the AI and the value types it is built from.
mod ai_state;
mod common;
mod monster;
mod patrol;
mod record;

pub use ai_state::AiState;
pub use common::{MonsterId, Position, ResourceMeter};
pub use monster::Monster;
pub use patrol::PatrolRoute;
pub use record::{MonsterRecord, RecordError};
