//! Non-damage effects triggered by a landed hit.

use crate::config::AiConfig;
use crate::env::{Dice, PlayerTarget};
use crate::species::SpeciesTraits;
use crate::state::Monster;

/// Effect applied on top of damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecialEffect {
    #[default]
    None,
    /// The attacker took `amount` gold and left the encounter.
    StoleGold { amount: u32 },
}

/// Rolls the attacker's special effects against `target`.
///
/// A thief that wins its `config.theft_chance` roll takes between 1 and
/// `min(gold, config.theft_max)` gold and deactivates itself. A target with an
/// empty purse is never robbed.
pub fn apply_special_effects<P>(
    attacker: &mut Monster,
    target: &mut P,
    dice: &mut Dice<'_>,
    config: &AiConfig,
) -> SpecialEffect
where
    P: PlayerTarget + ?Sized,
{
    if !attacker.has_trait(SpeciesTraits::THEFT) {
        return SpecialEffect::None;
    }

    let gold = target.gold();
    if gold == 0 || !dice.chance(config.theft_chance) {
        return SpecialEffect::None;
    }

    let cap = gold.min(config.theft_max.max(1));
    let amount = dice.range(1, cap);
    target.set_gold(gold - amount);
    attacker.is_active = false;

    SpecialEffect::StoleGold { amount }
}
