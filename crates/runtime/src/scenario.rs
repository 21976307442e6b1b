//! Builds a level and its player from loaded scenario content.

use ai_content::Scenario;
use ai_core::Monster;

use crate::error::{Result, ScenarioError};
use crate::level::{Level, TerrainGrid};
use crate::player::PlayerState;

/// Lays out the terrain and spawns every monster in listed order, so ids
/// follow the scenario file.
pub fn build_level(scenario: &Scenario) -> Result<(Level, PlayerState)> {
    let terrain = TerrainGrid::from_rows(scenario.rows.as_slice())?;
    let mut level = Level::new(terrain);

    let start = scenario.player.position();
    if !level.terrain().dimensions().contains(start) {
        return Err(ScenarioError::OutOfBounds { position: start });
    }
    if !level.terrain().is_walkable(start) {
        return Err(ScenarioError::Blocked { position: start });
    }
    let player = PlayerState::new(start, scenario.player.health)
        .with_defense(scenario.player.defense)
        .with_gold(scenario.player.gold);

    for spawn in &scenario.spawns {
        let species = spawn
            .species()
            .ok_or(ScenarioError::UnknownSpecies(spawn.species))?;
        let position = spawn.position();
        if position == start {
            return Err(ScenarioError::Blocked { position });
        }

        for waypoint in spawn.waypoints() {
            if !level.terrain().is_walkable(waypoint) {
                tracing::warn!(
                    species = %spawn.species,
                    %waypoint,
                    "patrol waypoint is not walkable; the monster will stall short of it"
                );
            }
        }

        let id = level.next_id();
        let mut monster =
            Monster::spawn(id, species, position).with_patrol_route(spawn.waypoints());
        if let Some((view, detection)) = spawn.ranges {
            monster.set_ranges(view, detection);
        }
        if let Some(health) = spawn.health {
            monster.set_health(health);
        }
        level.insert(monster)?;

        tracing::debug!(monster = %id, species = species.name, %position, "spawned");
    }

    tracing::info!(
        scenario = %scenario.name,
        monsters = level.monsters().len(),
        "level ready"
    );
    Ok((level, player))
}

#[cfg(test)]
mod tests {
    use ai_content::{PlayerSpec, SpawnSpec};
    use ai_core::{MonsterId, PlayerTarget, Position};

    use super::*;

    fn scenario(spawns: Vec<SpawnSpec>) -> Scenario {
        Scenario {
            name: "test".into(),
            seed: 0,
            rows: vec!["######".into(), "#....#".into(), "######".into()],
            player: PlayerSpec {
                position: (1, 1),
                health: 20,
                defense: 3,
                gold: 9,
            },
            spawns,
        }
    }

    fn spawn(species: char, x: i32) -> SpawnSpec {
        SpawnSpec {
            species,
            position: (x, 1),
            patrol: Vec::new(),
            ranges: None,
            health: None,
        }
    }

    #[test]
    fn builds_level_and_player() {
        let mut guard = spawn('O', 4);
        guard.patrol = vec![(4, 1), (3, 1)];
        guard.ranges = Some((3, 1));
        guard.health = Some(5);

        let (level, player) = build_level(&scenario(vec![spawn('Z', 3), guard])).unwrap();
        assert_eq!(player.gold(), 9);
        assert_eq!(PlayerTarget::defense(&player), 3);

        let ids: Vec<_> = level.monsters().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MonsterId(1), MonsterId(2)]);

        let orc = &level.monsters()[1];
        assert_eq!(orc.patrol.waypoints().len(), 2);
        assert_eq!((orc.view_range(), orc.detection_range()), (3, 1));
        assert_eq!(orc.health(), 5);
        assert_eq!(level.occupant(Position::new(4, 1)), Some(MonsterId(2)));
    }

    #[test]
    fn rejects_spawns_on_walls_or_the_player() {
        let mut wall = spawn('O', 4);
        wall.position = (0, 0);
        assert!(matches!(
            build_level(&scenario(vec![wall])),
            Err(ScenarioError::Blocked { .. })
        ));
        assert!(matches!(
            build_level(&scenario(vec![spawn('O', 1)])),
            Err(ScenarioError::Blocked { .. })
        ));
    }

    #[test]
    fn rejects_shared_cells_and_bad_letters() {
        assert!(matches!(
            build_level(&scenario(vec![spawn('O', 3), spawn('Z', 3)])),
            Err(ScenarioError::Occupied { .. })
        ));
        assert_eq!(
            build_level(&scenario(vec![spawn('?', 3)])).err(),
            Some(ScenarioError::UnknownSpecies('?'))
        );
    }
}
