//! Attack resolution and its report.

use crate::config::AiConfig;
use crate::env::{Dice, PlayerTarget};
use crate::state::Monster;

use super::damage::{apply_damage_modifiers, calculate_damage};
use super::effects::{SpecialEffect, apply_special_effects};
use super::hit::{HitChance, calculate_hit_chance, check_hit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    Miss,
    Hit,
}

/// What happened when a monster attacked the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    pub chance: HitChance,
    pub roll: u32,
    /// Damage dealt after modifiers (None on a miss).
    pub damage: Option<u32>,
    pub effect: SpecialEffect,
}

/// Resolve a complete attack of `attacker` on `target`.
///
/// 1. Roll d100 against the hit chance
/// 2. On a hit, compute base damage, apply species modifiers and deal it
/// 3. Roll special effects (theft)
pub fn resolve_attack<P>(
    attacker: &mut Monster,
    target: &mut P,
    dice: &mut Dice<'_>,
    config: &AiConfig,
) -> AttackReport
where
    P: PlayerTarget + ?Sized,
{
    let defense = target.defense();
    let chance = calculate_hit_chance(attacker, defense, config);
    let roll = dice.roll_d100();

    if !check_hit(chance, roll) {
        return AttackReport {
            outcome: AttackOutcome::Miss,
            chance,
            roll,
            damage: None,
            effect: SpecialEffect::None,
        };
    }

    let base = calculate_damage(attacker.attack, defense);
    let damage = apply_damage_modifiers(base, attacker, config);
    target.take_damage(damage);
    let effect = apply_special_effects(attacker, target, dice, config);

    AttackReport {
        outcome: AttackOutcome::Hit,
        chance,
        roll,
        damage: Some(damage),
        effect,
    }
}
