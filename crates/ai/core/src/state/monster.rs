use super::{AiState, MonsterId, PatrolRoute, Position, ResourceMeter};
use crate::config::AiConfig;
use crate::species::{Species, SpeciesTraits};

/// A living non-player actor and everything the AI remembers about it.
///
/// # Invariants
///
/// - health stays within `[0, max_health]` (enforced by [`ResourceMeter`])
/// - `view_range` and `detection_range` are at least 1
/// - the patrol cursor is within the route (enforced by [`PatrolRoute`])
#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub id: MonsterId,
    pub position: Position,
    species: &'static Species,
    pub(super) health: ResourceMeter,
    pub attack: i32,
    pub defense: i32,

    pub(crate) state: AiState,
    /// Escalating suspicion; widens the detection radius.
    pub alert_level: u32,
    /// Countdown while searching for a player that slipped out of sight.
    pub search_turns: u32,
    pub last_known_player: Option<Position>,
    /// Anchor for generated patrol routes.
    pub origin: Position,
    pub patrol: PatrolRoute,

    view_range: u32,
    detection_range: u32,

    pub turn_count: u64,
    pub is_active: bool,
}

impl Monster {
    /// Spawns a monster with the species' base stats, idle at `position`.
    pub fn spawn(id: MonsterId, species: &'static Species, position: Position) -> Self {
        Self {
            id,
            position,
            species,
            health: ResourceMeter::full(species.stats.health),
            attack: species.stats.attack,
            defense: species.stats.defense,
            state: AiState::Idle,
            alert_level: 0,
            search_turns: 0,
            last_known_player: None,
            origin: position,
            patrol: PatrolRoute::default(),
            view_range: species.view_range.max(1),
            detection_range: species.detection_range.max(1),
            turn_count: 0,
            is_active: true,
        }
    }

    /// Spawns a monster by species letter.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is not a species letter (see [`Species::lookup`]).
    pub fn spawn_letter(id: MonsterId, symbol: char, position: Position) -> Self {
        Self::spawn(id, Species::lookup(symbol), position)
    }

    /// Overrides the species' sensing ranges. Zero is raised to one.
    pub fn with_ranges(mut self, view_range: u32, detection_range: u32) -> Self {
        self.set_ranges(view_range, detection_range);
        self
    }

    pub fn with_patrol_route(mut self, waypoints: impl IntoIterator<Item = Position>) -> Self {
        self.patrol = PatrolRoute::new(waypoints);
        self
    }

    pub fn with_health(mut self, current: u32) -> Self {
        self.health.set(current);
        self
    }

    pub fn species(&self) -> &'static Species {
        self.species
    }

    #[inline]
    pub fn has_trait(&self, traits: SpeciesTraits) -> bool {
        self.species.has(traits)
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum()
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Health at or below `percent`% of maximum.
    pub fn is_badly_hurt(&self, percent: u32) -> bool {
        self.health.at_or_below_percent(percent)
    }

    /// Applies damage and returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.deplete(amount)
    }

    /// Heals up to the maximum and returns the new health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.restore(amount)
    }

    pub fn set_health(&mut self, current: u32) {
        self.health.set(current);
    }

    pub fn view_range(&self) -> u32 {
        self.view_range
    }

    pub fn detection_range(&self) -> u32 {
        self.detection_range
    }

    pub fn set_ranges(&mut self, view_range: u32, detection_range: u32) {
        self.view_range = view_range.max(1);
        self.detection_range = detection_range.max(1);
    }

    /// Raises alert while the player is sensed and lets it decay otherwise.
    pub(crate) fn update_alert(&mut self, player_sensed: bool, config: &AiConfig) {
        self.alert_level = if player_sensed {
            self.alert_level
                .saturating_add(config.alert_gain)
                .min(config.alert_max)
        } else {
            self.alert_level.saturating_sub(1)
        };
    }

    pub(crate) fn restore_state(&mut self, state: AiState) {
        self.state = state;
    }
}
