use super::movement::{approach, flee_step, generate_patrol_route};
use super::{AiContext, MonsterAction};
use crate::combat::resolve_attack;
use crate::env::PlayerTarget;
use crate::state::{AiState, Monster, Position};

/// Runs the routine for the state `monster` is now in.
pub(super) fn run<P>(monster: &mut Monster, player: &mut P, ctx: &mut AiContext<'_>) -> MonsterAction
where
    P: PlayerTarget + ?Sized,
{
    match monster.state() {
        AiState::Idle => MonsterAction::Wait,
        AiState::Patrol => patrol(monster, player.position(), ctx),
        AiState::Chase => {
            let target = player.position();
            let next = approach(monster, target, target, ctx);
            step(monster, next)
        }
        AiState::Attack => {
            MonsterAction::Attack(resolve_attack(monster, player, &mut ctx.dice, ctx.config))
        }
        AiState::Search => search(monster, player.position(), ctx),
        AiState::Flee => {
            let next = flee_step(monster.position, player.position(), ctx.map);
            step(monster, next)
        }
    }
}

fn step(monster: &mut Monster, next: Option<Position>) -> MonsterAction {
    match next {
        Some(to) => {
            let from = monster.position;
            monster.position = to;
            MonsterAction::Move { from, to }
        }
        None => MonsterAction::Wait,
    }
}

fn patrol(monster: &mut Monster, player: Position, ctx: &AiContext<'_>) -> MonsterAction {
    if monster.patrol.is_empty() {
        monster.patrol = generate_patrol_route(monster.origin, ctx.map, ctx.config.patrol_radius);
    }
    if monster.patrol.current() == Some(monster.position) {
        monster.patrol.advance();
    }
    let Some(waypoint) = monster.patrol.current() else {
        return MonsterAction::Wait;
    };

    let next = approach(monster, waypoint, player, ctx);
    let action = step(monster, next);
    if monster.position == waypoint {
        monster.patrol.advance();
    }
    action
}

fn search(monster: &mut Monster, player: Position, ctx: &AiContext<'_>) -> MonsterAction {
    let next = monster
        .last_known_player
        .and_then(|target| approach(monster, target, player, ctx));
    let action = step(monster, next);
    monster.search_turns = monster.search_turns.saturating_sub(1);
    action
}
