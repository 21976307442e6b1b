/// AI tuning constants and runtime-tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Turns a monster keeps searching after losing sight of the player.
    pub search_turns: u32,
    /// Health percentage at or below which a non-fearless monster flees.
    pub flee_health_percent: u32,
    /// Alert gained on each turn the player is sensed.
    pub alert_gain: u32,
    /// Upper bound for a monster's alert level.
    pub alert_max: u32,
    /// Alert points that extend the detection radius by one tile.
    pub alert_per_tile: u32,
    /// Percent chance per turn that an idle monster without a route starts patrolling.
    pub wander_chance: u32,
    /// Maximum distance of a generated back-and-forth patrol leg.
    pub patrol_radius: u32,
    /// Node expansions allowed per pathfinding call before giving up.
    pub path_search_limit: u32,
    /// Hit chance curve for species without perfect accuracy.
    pub hit: HitChanceParams,
    /// Flat damage added by species with an elemental attack.
    pub elemental_bonus: u32,
    /// Percent chance per successful hit that a thief steals and vanishes.
    pub theft_chance: u32,
    /// Largest amount of gold a single theft can take.
    pub theft_max: u32,
}

/// Linear hit chance curve, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitChanceParams {
    pub base: i32,
    pub per_point: i32,
    pub min: u32,
    pub max: u32,
}

impl AiConfig {
    // ===== compile-time constants =====
    /// Patrol routes hold at most this many waypoints.
    pub const MAX_WAYPOINTS: usize = 8;
    /// Euclidean distance at which the player counts as adjacent (covers diagonals).
    pub const ATTACK_RANGE: f32 = 1.5;
    /// Hit chance floor and ceiling, in percent.
    pub const HIT_CHANCE_FLOOR: u32 = 10;
    pub const HIT_CHANCE_CEILING: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEARCH_TURNS: u32 = 5;
    pub const DEFAULT_FLEE_HEALTH_PERCENT: u32 = 25;
    pub const DEFAULT_ALERT_GAIN: u32 = 2;
    pub const DEFAULT_ALERT_MAX: u32 = 10;
    pub const DEFAULT_ALERT_PER_TILE: u32 = 5;
    pub const DEFAULT_WANDER_CHANCE: u32 = 10;
    pub const DEFAULT_PATROL_RADIUS: u32 = 4;
    pub const DEFAULT_PATH_SEARCH_LIMIT: u32 = 2048;
    pub const DEFAULT_ELEMENTAL_BONUS: u32 = 3;
    pub const DEFAULT_THEFT_CHANCE: u32 = 10;
    pub const DEFAULT_THEFT_MAX: u32 = 50;

    pub fn new() -> Self {
        Self {
            search_turns: Self::DEFAULT_SEARCH_TURNS,
            flee_health_percent: Self::DEFAULT_FLEE_HEALTH_PERCENT,
            alert_gain: Self::DEFAULT_ALERT_GAIN,
            alert_max: Self::DEFAULT_ALERT_MAX,
            alert_per_tile: Self::DEFAULT_ALERT_PER_TILE,
            wander_chance: Self::DEFAULT_WANDER_CHANCE,
            patrol_radius: Self::DEFAULT_PATROL_RADIUS,
            path_search_limit: Self::DEFAULT_PATH_SEARCH_LIMIT,
            hit: HitChanceParams::default(),
            elemental_bonus: Self::DEFAULT_ELEMENTAL_BONUS,
            theft_chance: Self::DEFAULT_THEFT_CHANCE,
            theft_max: Self::DEFAULT_THEFT_MAX,
        }
    }

    /// Config with idle wandering disabled, so idle monsters stay put.
    pub fn without_wandering() -> Self {
        Self {
            wander_chance: 0,
            ..Self::new()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HitChanceParams {
    pub const DEFAULT_BASE: i32 = 60;
    pub const DEFAULT_PER_POINT: i32 = 5;
    pub const DEFAULT_MIN: u32 = 10;
    pub const DEFAULT_MAX: u32 = 95;
}

impl Default for HitChanceParams {
    fn default() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            per_point: Self::DEFAULT_PER_POINT,
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
