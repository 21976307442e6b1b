//! Hit chance calculation.

use crate::config::AiConfig;
use crate::species::SpeciesTraits;
use crate::state::Monster;

/// Probability of an attack landing, stored as a whole percentage in
/// `[10, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HitChance(u32);

impl HitChance {
    pub const MIN: HitChance = HitChance(AiConfig::HIT_CHANCE_FLOOR);
    pub const MAX: HitChance = HitChance(AiConfig::HIT_CHANCE_CEILING);

    /// Clamps `percent` into the valid range.
    pub fn from_percent(percent: i64) -> Self {
        Self(percent.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u32)
    }

    pub fn percent(self) -> u32 {
        self.0
    }

    pub fn probability(self) -> f32 {
        self.0 as f32 / 100.0
    }
}

/// Calculate the chance that `attacker` hits a defender with `defense`.
///
/// # Formula
///
/// ```text
/// perfect accuracy: 100
/// otherwise:        base + (attack - defense) * per_point
///                   clamped to [hit.min, hit.max] within [10, 100]
/// ```
pub fn calculate_hit_chance(attacker: &Monster, defense: i32, config: &AiConfig) -> HitChance {
    if attacker.has_trait(SpeciesTraits::PERFECT_ACCURACY) {
        return HitChance::MAX;
    }

    let params = config.hit;
    let low = params
        .min
        .clamp(AiConfig::HIT_CHANCE_FLOOR, AiConfig::HIT_CHANCE_CEILING);
    let high = params.max.clamp(low, AiConfig::HIT_CHANCE_CEILING);

    let swing = (attacker.attack as i64 - defense as i64) * params.per_point as i64;
    let raw = params.base as i64 + swing;
    HitChance::from_percent(raw.clamp(low as i64, high as i64))
}

/// An attack hits when the d100 roll does not exceed the hit chance.
pub fn check_hit(chance: HitChance, roll: u32) -> bool {
    roll <= chance.percent()
}
