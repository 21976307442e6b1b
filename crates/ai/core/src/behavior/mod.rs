//! Per-turn monster decision making.
//!
//! [`update_state`] is the single entry point: it picks the next [`AiState`]
//! from what the monster perceives, applies the state's entry effects and then
//! runs the routine for that state. Perception itself happens before the call
//! (see [`crate::sense_player`]) so callers can supply their own visibility
//! rules.

mod movement;
mod routines;
mod transition;

#[cfg(test)]
mod fixtures;

pub use movement::generate_patrol_route;

use crate::combat::AttackReport;
use crate::config::AiConfig;
use crate::env::{Dice, MapQuery, PlayerTarget};
use crate::state::{AiState, Monster, MonsterId, Position};

/// Everything a monster consults while deciding, besides itself and the player.
pub struct AiContext<'a> {
    pub map: &'a dyn MapQuery,
    pub config: &'a AiConfig,
    pub dice: Dice<'a>,
}

impl<'a> AiContext<'a> {
    pub fn new(map: &'a dyn MapQuery, config: &'a AiConfig, dice: Dice<'a>) -> Self {
        Self { map, config, dice }
    }
}

/// What a monster did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterAction {
    /// Stayed in place, either by choice or because every step was blocked.
    Wait,
    Move { from: Position, to: Position },
    Attack(AttackReport),
    /// Not updated: dead or gone from the encounter.
    Inactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub monster: MonsterId,
    pub previous: AiState,
    pub state: AiState,
    pub action: MonsterAction,
}

impl TurnReport {
    pub fn changed_state(&self) -> bool {
        self.previous != self.state
    }
}

/// Runs one turn of `monster`'s AI.
///
/// `player_visible` and `distance` describe what the monster perceived this
/// turn. Moves are applied to `monster.position` only; keeping any occupancy
/// index in sync is up to the caller.
pub fn update_state<P>(
    monster: &mut Monster,
    player: &mut P,
    ctx: &mut AiContext<'_>,
    player_visible: bool,
    distance: f32,
) -> TurnReport
where
    P: PlayerTarget + ?Sized,
{
    let previous = monster.state();
    if !monster.is_active || !monster.is_alive() {
        return TurnReport {
            monster: monster.id,
            previous,
            state: previous,
            action: MonsterAction::Inactive,
        };
    }

    monster.turn_count += 1;
    monster.update_alert(player_visible, ctx.config);

    let next = transition::next_state(monster, player_visible, distance, ctx);
    enter_state(monster, previous, next, player_visible, player.position(), ctx.config);

    let action = routines::run(monster, player, ctx);

    TurnReport {
        monster: monster.id,
        previous,
        state: next,
        action,
    }
}

fn enter_state(
    monster: &mut Monster,
    previous: AiState,
    next: AiState,
    player_visible: bool,
    player: Position,
    config: &AiConfig,
) {
    if player_visible && matches!(next, AiState::Chase | AiState::Attack) {
        monster.last_known_player = Some(player);
    }
    if next == AiState::Search && previous != AiState::Search {
        monster.search_turns = config.search_turns;
    }
    monster.restore_state(next);
}

#[cfg(test)]
mod tests {
    use super::fixtures::{FixedRng, TestMap, TestPlayer};
    use super::*;
    use crate::combat::{AttackOutcome, SpecialEffect};
    use crate::env::{PcgRng, RngOracle};
    use crate::perception::sense_player;

    fn tick<P: PlayerTarget>(
        monster: &mut Monster,
        player: &mut P,
        map: &TestMap,
        config: &AiConfig,
        rng: &dyn RngOracle,
        visible: bool,
        distance: f32,
    ) -> TurnReport {
        let dice = Dice::new(rng, 7, monster.turn_count, monster.id);
        let mut ctx = AiContext::new(map, config, dice);
        update_state(monster, player, &mut ctx, visible, distance)
    }

    #[test]
    fn sighting_drives_idle_chase_attack_search() {
        let config = AiConfig::without_wandering();
        let map = TestMap::open(20, 20);
        let rng = PcgRng;
        let mut orc = Monster::spawn_letter(MonsterId(1), 'O', Position::new(2, 2));
        let mut player = TestPlayer::at(12, 2);

        let report = tick(&mut orc, &mut player, &map, &config, &rng, false, 10.0);
        assert_eq!(report.state, AiState::Idle);
        assert_eq!(report.action, MonsterAction::Wait);

        player.position = Position::new(5, 2);
        let report = tick(&mut orc, &mut player, &map, &config, &rng, true, 3.0);
        assert_eq!(report.state, AiState::Chase);
        assert_eq!(orc.last_known_player, Some(Position::new(5, 2)));
        assert_eq!(
            report.action,
            MonsterAction::Move {
                from: Position::new(2, 2),
                to: Position::new(3, 2),
            }
        );

        player.position = Position::new(4, 2);
        let report = tick(&mut orc, &mut player, &map, &config, &rng, true, 1.0);
        assert_eq!(report.state, AiState::Attack);
        assert!(matches!(report.action, MonsterAction::Attack(_)));
        assert_eq!(orc.position, Position::new(3, 2));

        let report = tick(&mut orc, &mut player, &map, &config, &rng, false, 12.0);
        assert_eq!(report.previous, AiState::Attack);
        assert_eq!(report.state, AiState::Search);
        assert_eq!(orc.search_turns, config.search_turns - 1);
    }

    #[test]
    fn intelligent_chasers_route_around_walls_others_get_stuck() {
        let config = AiConfig::without_wandering();
        let map = TestMap::parse(&[
            "..........", //
            "..######..", //
            ".......#..", //
            "..######..", //
            "..........",
        ]);
        let rng = PcgRng;
        let start = Position::new(1, 2);
        let in_pocket = |p: Position| p.y == 2 && (2..=6).contains(&p.x);

        let mut orc = Monster::spawn_letter(MonsterId(1), 'O', start);
        let mut player = TestPlayer::at(8, 2);
        let route = crate::path::find_path(start, player.position, &map).unwrap();
        let distance = orc.position.euclidean(player.position);
        let report = tick(&mut orc, &mut player, &map, &config, &rng, true, distance);
        assert_eq!(report.state, AiState::Chase);
        assert_eq!(report.action, MonsterAction::Move { from: start, to: route[1] });
        assert!(!in_pocket(orc.position));

        let mut reached = false;
        for _ in 0..20 {
            let distance = orc.position.euclidean(player.position);
            let report = tick(&mut orc, &mut player, &map, &config, &rng, true, distance);
            assert!(!in_pocket(orc.position), "orc wandered into {:?}", orc.position);
            if report.state == AiState::Attack {
                reached = true;
                break;
            }
        }
        assert!(reached, "orc never reached the player, stopped at {:?}", orc.position);

        let mut zombie = Monster::spawn_letter(MonsterId(2), 'Z', start);
        let mut player = TestPlayer::at(8, 2);
        let distance = zombie.position.euclidean(player.position);
        let report = tick(&mut zombie, &mut player, &map, &config, &rng, true, distance);
        assert_eq!(
            report.action,
            MonsterAction::Move { from: start, to: Position::new(2, 2) }
        );

        let mut last = report;
        for _ in 0..10 {
            let distance = zombie.position.euclidean(player.position);
            last = tick(&mut zombie, &mut player, &map, &config, &rng, true, distance);
        }
        assert_eq!(zombie.position, Position::new(6, 2));
        assert_eq!(last.state, AiState::Chase);
        assert_eq!(last.action, MonsterAction::Wait);
    }

    #[test]
    fn wounded_monsters_flee_unless_fearless() {
        let config = AiConfig::default();
        let map = TestMap::open(20, 20);
        let rng = PcgRng;
        let mut player = TestPlayer::at(8, 5);

        let mut orc = Monster::spawn_letter(MonsterId(1), 'O', Position::new(5, 5));
        orc.set_health(orc.max_health() / 4);
        let report = tick(&mut orc, &mut player, &map, &config, &rng, true, 3.0);
        assert_eq!(report.state, AiState::Flee);
        assert!(orc.position.euclidean(player.position) > 3.0);

        for letter in ['D', 'T'] {
            let mut brute = Monster::spawn_letter(MonsterId(2), letter, Position::new(5, 5));
            brute.set_health(brute.max_health() / 4);
            let report = tick(&mut brute, &mut player, &map, &config, &rng, true, 3.0);
            assert_eq!(report.state, AiState::Chase, "{letter} should not flee");
        }
    }

    #[test]
    fn cornered_wounded_monster_fights_back() {
        let config = AiConfig::default();
        let map = TestMap::open(10, 10);
        let mut orc = Monster::spawn_letter(MonsterId(1), 'O', Position::new(5, 5));
        orc.set_health(1);
        let mut player = TestPlayer::at(6, 5);

        let report = tick(&mut orc, &mut player, &map, &config, &PcgRng, true, 1.0);
        assert_eq!(report.state, AiState::Attack);
    }

    #[test]
    fn search_counts_down_then_settles() {
        let config = AiConfig::without_wandering();
        let map = TestMap::open(20, 20);
        let rng = PcgRng;
        let mut zombie = Monster::spawn_letter(MonsterId(3), 'Z', Position::new(2, 2));
        let mut player = TestPlayer::at(6, 2);

        tick(&mut zombie, &mut player, &map, &config, &rng, true, 4.0);
        assert_eq!(zombie.state(), AiState::Chase);
        player.position = Position::new(19, 19);

        let mut searching = 0;
        loop {
            let report = tick(&mut zombie, &mut player, &map, &config, &rng, false, 20.0);
            if report.state != AiState::Search {
                assert_eq!(report.state, AiState::Idle);
                break;
            }
            searching += 1;
            assert!(searching <= config.search_turns, "search never expired");
        }
        assert_eq!(searching, config.search_turns);
        // Walked to where the player was last seen.
        assert_eq!(zombie.position, Position::new(6, 2));
    }

    #[test]
    fn expired_search_resumes_patrol_when_route_exists() {
        let config = AiConfig::without_wandering();
        let map = TestMap::open(20, 20);
        let mut kestrel = Monster::spawn_letter(MonsterId(4), 'K', Position::new(2, 2))
            .with_patrol_route([Position::new(2, 2), Position::new(5, 2)]);
        kestrel.restore_state(AiState::Search);
        kestrel.search_turns = 0;
        let mut player = TestPlayer::at(19, 19);

        let report = tick(&mut kestrel, &mut player, &map, &config, &PcgRng, false, 20.0);
        assert_eq!(report.state, AiState::Patrol);
    }

    #[test]
    fn patrol_walks_back_and_forth() {
        let config = AiConfig::without_wandering();
        let map = TestMap::open(10, 5);
        let mut kestrel = Monster::spawn_letter(MonsterId(4), 'K', Position::new(2, 2))
            .with_patrol_route([Position::new(2, 2), Position::new(4, 2)]);
        let mut player = TestPlayer::at(9, 4);

        let mut xs = Vec::new();
        for _ in 0..5 {
            let report = tick(&mut kestrel, &mut player, &map, &config, &PcgRng, false, 9.0);
            assert_eq!(report.state, AiState::Patrol);
            xs.push(kestrel.position.x);
        }
        assert_eq!(xs, vec![3, 4, 3, 2, 3]);
    }

    #[test]
    fn wandering_idle_monster_builds_its_own_route() {
        let config = AiConfig {
            wander_chance: 100,
            ..AiConfig::default()
        };
        let map = TestMap::open(20, 20);
        let mut bat = Monster::spawn_letter(MonsterId(5), 'B', Position::new(5, 5));
        let mut player = TestPlayer::at(19, 19);

        let report = tick(&mut bat, &mut player, &map, &config, &PcgRng, false, 19.0);
        assert_eq!(report.state, AiState::Patrol);
        assert_eq!(
            bat.patrol.waypoints(),
            &[Position::new(5, 5), Position::new(9, 5)]
        );
        assert_eq!(bat.position, Position::new(6, 5));
    }

    #[test]
    fn idle_without_wandering_stays_put() {
        let config = AiConfig::without_wandering();
        let map = TestMap::open(20, 20);
        let mut bat = Monster::spawn_letter(MonsterId(5), 'B', Position::new(5, 5));
        let mut player = TestPlayer::at(19, 19);

        for _ in 0..10 {
            let report = tick(&mut bat, &mut player, &map, &config, &PcgRng, false, 19.0);
            assert_eq!(report.state, AiState::Idle);
        }
        assert_eq!(bat.position, Position::new(5, 5));
        assert_eq!(bat.turn_count, 10);
    }

    #[test]
    fn thief_vanishes_after_stealing() {
        let config = AiConfig {
            theft_chance: 100,
            ..AiConfig::default()
        };
        let map = TestMap::open(10, 10);
        let rng = FixedRng(0);
        let mut leprechaun = Monster::spawn_letter(MonsterId(6), 'L', Position::new(3, 3));
        let mut player = TestPlayer::at(4, 3);
        player.gold = 30;

        let report = tick(&mut leprechaun, &mut player, &map, &config, &rng, true, 1.0);
        let MonsterAction::Attack(attack) = report.action else {
            panic!("expected an attack, got {:?}", report.action);
        };
        assert_eq!(attack.outcome, AttackOutcome::Hit);
        assert!(matches!(attack.effect, SpecialEffect::StoleGold { .. }));
        assert!(!leprechaun.is_active);
        assert!(player.gold < 30);

        let turns = leprechaun.turn_count;
        let report = tick(&mut leprechaun, &mut player, &map, &config, &rng, true, 1.0);
        assert_eq!(report.action, MonsterAction::Inactive);
        assert_eq!(leprechaun.turn_count, turns);
    }

    #[test]
    fn dead_monsters_do_nothing() {
        let config = AiConfig::default();
        let map = TestMap::open(5, 5);
        let mut orc = Monster::spawn_letter(MonsterId(1), 'O', Position::new(1, 1));
        orc.set_health(0);
        let mut player = TestPlayer::at(2, 1);

        let report = tick(&mut orc, &mut player, &map, &config, &PcgRng, true, 1.0);
        assert_eq!(report.action, MonsterAction::Inactive);
        assert_eq!(player.health, TestPlayer::HEALTH);
    }

    #[test]
    fn alert_tracks_perception() {
        let config = AiConfig::without_wandering();
        let map = TestMap::open(30, 5);
        let mut snake = Monster::spawn_letter(MonsterId(7), 'S', Position::new(1, 2));
        let mut player = TestPlayer::at(29, 2);

        for _ in 0..3 {
            let sighting = sense_player(&snake, player.position, &map, &config);
            let (visible, distance) = (sighting.visible, sighting.distance);
            tick(&mut snake, &mut player, &map, &config, &PcgRng, visible, distance);
        }
        assert_eq!(snake.alert_level, 0);

        player.position = Position::new(3, 2);
        let sighting = sense_player(&snake, player.position, &map, &config);
        assert!(sighting.visible);
        tick(&mut snake, &mut player, &map, &config, &PcgRng, true, sighting.distance);
        assert_eq!(snake.alert_level, config.alert_gain);
    }
}
