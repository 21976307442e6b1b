//! Turn loop: every active monster acts once per turn in roster order.

use ai_core::{
    AiConfig, AttackOutcome, Dice, MonsterAction, MonsterId, PcgRng, RngOracle, SpecialEffect,
    TurnReport,
};

use crate::level::Level;
use crate::player::PlayerState;

/// What happened during one turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnSummary {
    pub turn: u64,
    /// Monsters removed at the start of the turn because they had died.
    pub removed: Vec<MonsterId>,
    /// One report per monster that acted, in roster order.
    pub reports: Vec<TurnReport>,
}

impl TurnSummary {
    /// Total damage dealt to the player this turn.
    pub fn damage_dealt(&self) -> u32 {
        self.reports
            .iter()
            .filter_map(|report| match report.action {
                MonsterAction::Attack(attack) => attack.damage,
                _ => None,
            })
            .sum()
    }

    pub fn gold_stolen(&self) -> u32 {
        self.reports
            .iter()
            .filter_map(|report| match report.action {
                MonsterAction::Attack(attack) => match attack.effect {
                    SpecialEffect::StoleGold { amount } => Some(amount),
                    SpecialEffect::None => None,
                },
                _ => None,
            })
            .sum()
    }
}

/// Drives the monsters of a level turn by turn.
///
/// Rolls are seeded from the game seed, the turn number and the monster id,
/// so two drivers with the same seed and inputs produce the same turns.
pub struct TurnDriver<R: RngOracle = PcgRng> {
    config: AiConfig,
    rng: R,
    game_seed: u64,
    turn: u64,
}

impl TurnDriver<PcgRng> {
    pub fn new(config: AiConfig, game_seed: u64) -> Self {
        Self::with_rng(config, PcgRng, game_seed)
    }
}

impl<R: RngOracle> TurnDriver<R> {
    pub fn with_rng(config: AiConfig, rng: R, game_seed: u64) -> Self {
        Self {
            config,
            rng,
            game_seed,
            turn: 0,
        }
    }

    /// Resumes numbering at `turn`, e.g. after loading a snapshot.
    pub fn starting_at(mut self, turn: u64) -> Self {
        self.turn = turn;
        self
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Number of the next turn to run.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Runs one turn: clears out dead monsters, then lets every active monster
    /// perceive and act. Stops early once the player dies.
    pub fn run_turn(&mut self, level: &mut Level, player: &mut PlayerState) -> TurnSummary {
        let span = tracing::debug_span!("turn", turn = self.turn);
        let _enter = span.enter();

        let removed: Vec<MonsterId> = level
            .remove_dead()
            .into_iter()
            .map(|monster| {
                tracing::info!(
                    monster = %monster.id,
                    species = monster.species().name,
                    position = %monster.position,
                    "monster died"
                );
                monster.id
            })
            .collect();

        let mut reports = Vec::new();
        for index in 0..level.monsters().len() {
            if !player.is_alive() {
                break;
            }
            let monster = &level.monsters()[index];
            if !monster.is_active {
                continue;
            }

            let dice = Dice::new(&self.rng, self.game_seed, self.turn, monster.id);
            let Some((sighting, report)) = level.act(index, player, &self.config, dice) else {
                continue;
            };
            log_report(&report, sighting.visible, sighting.distance);
            reports.push(report);

            if !player.is_alive() {
                tracing::info!(killer = %report.monster, "player died");
            }
        }

        let summary = TurnSummary {
            turn: self.turn,
            removed,
            reports,
        };
        self.turn += 1;
        summary
    }
}

fn log_report(report: &TurnReport, visible: bool, distance: f32) {
    if report.changed_state() {
        tracing::debug!(
            monster = %report.monster,
            from = %report.previous,
            to = %report.state,
            visible,
            distance,
            "state changed"
        );
    }

    match report.action {
        MonsterAction::Move { from, to } => {
            tracing::trace!(monster = %report.monster, %from, %to, "moved");
        }
        MonsterAction::Attack(attack) => {
            let hit = attack.outcome == AttackOutcome::Hit;
            tracing::debug!(
                monster = %report.monster,
                hit,
                chance = attack.chance.percent(),
                roll = attack.roll,
                damage = attack.damage.unwrap_or(0),
                "attacked player"
            );
            if let SpecialEffect::StoleGold { amount } = attack.effect {
                tracing::info!(monster = %report.monster, amount, "stole gold and vanished");
            }
        }
        MonsterAction::Wait | MonsterAction::Inactive => {}
    }
}

#[cfg(test)]
mod tests {
    use ai_core::{PlayerTarget, Position, Species};

    use super::*;
    use crate::level::TerrainGrid;

    #[test]
    fn turn_counter_advances() {
        let mut level = Level::new(TerrainGrid::from_rows(&["....."]).unwrap());
        let mut player = PlayerState::new(Position::new(4, 0), 10);
        let mut driver = TurnDriver::new(AiConfig::default(), 1);

        assert_eq!(driver.run_turn(&mut level, &mut player).turn, 0);
        assert_eq!(driver.run_turn(&mut level, &mut player).turn, 1);
        assert_eq!(driver.turn(), 2);
    }

    #[test]
    fn dead_player_stops_the_turn() {
        let mut level = Level::new(TerrainGrid::from_rows(&["....."]).unwrap());
        level.spawn(Species::lookup('O'), Position::new(0, 0)).unwrap();
        let mut player = PlayerState::new(Position::new(4, 0), 10);
        player.take_damage(10);

        let summary = TurnDriver::new(AiConfig::default(), 1).run_turn(&mut level, &mut player);
        assert!(summary.reports.is_empty());
    }
}
