use super::AiContext;
use crate::config::AiConfig;
use crate::species::SpeciesTraits;
use crate::state::{AiState, Monster};

/// Picks the state `monster` should be in this turn.
///
/// Rules are checked in priority order: flee when badly hurt, attack when
/// adjacent, chase when the player is perceived, search after losing a
/// target, and otherwise fall back to patrolling or idling.
pub(super) fn next_state(
    monster: &Monster,
    player_visible: bool,
    distance: f32,
    ctx: &mut AiContext<'_>,
) -> AiState {
    let in_reach = distance <= AiConfig::ATTACK_RANGE;

    if player_visible {
        if !in_reach && wants_to_flee(monster, ctx.config) {
            return AiState::Flee;
        }
        return if in_reach {
            AiState::Attack
        } else {
            AiState::Chase
        };
    }

    match monster.state() {
        AiState::Chase | AiState::Attack => AiState::Search,
        AiState::Search if monster.search_turns > 0 => AiState::Search,
        AiState::Search => resting_state(monster),
        AiState::Patrol => AiState::Patrol,
        AiState::Idle | AiState::Flee => {
            if !monster.patrol.is_empty() || ctx.dice.chance(ctx.config.wander_chance) {
                AiState::Patrol
            } else {
                AiState::Idle
            }
        }
    }
}

fn wants_to_flee(monster: &Monster, config: &AiConfig) -> bool {
    !monster.has_trait(SpeciesTraits::FEARLESS) && monster.is_badly_hurt(config.flee_health_percent)
}

fn resting_state(monster: &Monster) -> AiState {
    if monster.patrol.is_empty() {
        AiState::Idle
    } else {
        AiState::Patrol
    }
}
