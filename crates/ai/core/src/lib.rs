//! Deterministic monster AI shared by the runtime and offline tools.
//!
//! `ai-core` decides, once per turn and per monster, what the monster perceives,
//! which [`AiState`] it occupies, and which action it attempts. Everything here is
//! pure with respect to the outside world: map geometry and the player are reached
//! through the [`MapQuery`] and [`PlayerTarget`] traits, and randomness comes from
//! an injected [`RngOracle`] so a fixed seed replays a fight exactly.
//!
//! The entry point for the game loop is [`behavior::update_state`].
pub mod behavior;
pub mod combat;
pub mod config;
pub mod env;
pub mod path;
pub mod perception;
pub mod species;
pub mod state;

pub use behavior::{AiContext, MonsterAction, TurnReport, generate_patrol_route, update_state};
pub use combat::{
    AttackOutcome, AttackReport, HitChance, SpecialEffect, apply_damage_modifiers,
    apply_special_effects, calculate_damage, calculate_hit_chance, resolve_attack,
};
pub use config::{AiConfig, HitChanceParams};
pub use env::{Dice, MapDimensions, MapQuery, PcgRng, PlayerTarget, RngOracle, compute_seed};
pub use path::{find_path, find_path_with_limit};
pub use perception::{
    Sighting, distance, effective_detection_range, has_line_of_sight, sense_player,
};
pub use species::{BaseStats, Species, SpeciesTraits};
pub use state::{
    AiState, Monster, MonsterId, MonsterRecord, PatrolRoute, Position, RecordError, ResourceMeter,
};
