//! Damage calculation and trait modifiers.

use crate::config::AiConfig;
use crate::species::SpeciesTraits;
use crate::state::Monster;

/// Base damage of an attack: `max(1, attack - defense)`.
///
/// Damage never drops below one, however high the defense.
pub fn calculate_damage(attack: i32, defense: i32) -> u32 {
    let raw = attack as i64 - defense as i64;
    raw.clamp(1, u32::MAX as i64) as u32
}

/// Applies the attacker's species modifiers to `base_damage`.
///
/// - `ELEMENTAL`: adds `config.elemental_bonus`
/// - `LIFE_DRAIN`: while below half health, the attacker heals by half the
///   damage dealt (at least 1), up to its maximum
///
/// Returns the damage to apply to the target.
pub fn apply_damage_modifiers(base_damage: u32, attacker: &mut Monster, config: &AiConfig) -> u32 {
    let mut damage = base_damage;

    if attacker.has_trait(SpeciesTraits::ELEMENTAL) {
        damage = damage.saturating_add(config.elemental_bonus);
    }

    if attacker.has_trait(SpeciesTraits::LIFE_DRAIN)
        && (attacker.health() as u64) * 2 < attacker.max_health() as u64
    {
        attacker.heal((damage / 2).max(1));
    }

    damage
}
