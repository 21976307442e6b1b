/// Behavior mode governing a monster's per-turn action.
///
/// Newly spawned monsters start `Idle`. No state is terminal: a monster that
/// dies is removed from the level instead of transitioning.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiState {
    #[default]
    Idle,
    Patrol,
    Chase,
    Attack,
    Search,
    Flee,
}

impl AiState {
    pub const ALL: [AiState; 6] = [
        AiState::Idle,
        AiState::Patrol,
        AiState::Chase,
        AiState::Attack,
        AiState::Search,
        AiState::Flee,
    ];
}
