//! Terrain, monster roster and occupancy for one dungeon level.

use std::collections::HashMap;

use ai_core::{
    AiConfig, AiContext, Dice, MapDimensions, MapQuery, Monster, MonsterAction, MonsterId,
    MonsterRecord, PlayerTarget, Position, Sighting, Species, TurnReport, sense_player,
    update_state,
};

use crate::error::{Result, ScenarioError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
    Door,
    Water,
    Void,
}

impl TerrainKind {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            '+' => Some(Self::Door),
            '~' => Some(Self::Water),
            ' ' => Some(Self::Void),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Door => '+',
            Self::Water => '~',
            Self::Void => ' ',
        }
    }

    /// Floors and doors can be walked on and seen through.
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Door)
    }
}

/// Dense row-major terrain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
}

impl TerrainGrid {
    pub fn filled(width: u32, height: u32, kind: TerrainKind) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            dimensions,
            tiles: vec![kind; dimensions.area()],
        }
    }

    /// Parses one string per row, one glyph per tile.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 {
            return Err(ScenarioError::EmptyMap);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(ScenarioError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = TerrainKind::from_glyph(glyph).ok_or(ScenarioError::UnknownGlyph {
                    glyph,
                    position: Position::new(x as i32, y as i32),
                })?;
                tiles.push(kind);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            tiles,
        })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.dimensions
            .index_of(position)
            .map(|index| self.tiles[index])
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position).is_some_and(TerrainKind::is_walkable)
    }

    /// Renders the grid back into rows, the inverse of [`TerrainGrid::from_rows`].
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.dimensions.width as usize)
            .map(|row| row.iter().map(|kind| kind.glyph()).collect())
            .collect()
    }
}

/// A level the monsters live on.
///
/// Every active monster occupies exactly one cell of the occupancy index;
/// inactive monsters stay in the roster but no longer block movement.
#[derive(Clone, Debug)]
pub struct Level {
    terrain: TerrainGrid,
    monsters: Vec<Monster>,
    occupancy: HashMap<Position, MonsterId>,
    next_id: u32,
}

impl Level {
    pub fn new(terrain: TerrainGrid) -> Self {
        Self {
            terrain,
            monsters: Vec::new(),
            occupancy: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// Id the next spawned monster will receive.
    pub fn next_id(&self) -> MonsterId {
        MonsterId(self.next_id)
    }

    /// Spawns a fresh monster of `species` and returns its id.
    pub fn spawn(&mut self, species: &'static Species, position: Position) -> Result<MonsterId> {
        self.insert(Monster::spawn(self.next_id(), species, position))
    }

    /// Adds an existing monster, checking its cell and id. Inactive monsters
    /// never block a cell, so only their id is checked.
    pub fn insert(&mut self, monster: Monster) -> Result<MonsterId> {
        let position = monster.position;
        if monster.is_active {
            self.check_cell(position)?;
        }
        if self.monsters.iter().any(|other| other.id == monster.id) {
            return Err(ScenarioError::DuplicateId(monster.id));
        }

        let id = monster.id;
        if monster.is_active {
            self.occupancy.insert(position, id);
        }
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.monsters.push(monster);
        Ok(id)
    }

    fn check_cell(&self, position: Position) -> Result<()> {
        if !self.terrain.dimensions().contains(position) {
            return Err(ScenarioError::OutOfBounds { position });
        }
        if !self.terrain.is_walkable(position) {
            return Err(ScenarioError::Blocked { position });
        }
        if let Some(&occupant) = self.occupancy.get(&position) {
            return Err(ScenarioError::Occupied { position, occupant });
        }
        Ok(())
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    pub fn occupant(&self, position: Position) -> Option<MonsterId> {
        self.occupancy.get(&position).copied()
    }

    pub fn active_count(&self) -> usize {
        self.monsters.iter().filter(|monster| monster.is_active).count()
    }

    /// Deals damage to a monster (the player hitting back). Returns the
    /// remaining health, or `None` if no such monster exists.
    pub fn damage_monster(&mut self, id: MonsterId, amount: u32) -> Option<u32> {
        self.monsters
            .iter_mut()
            .find(|monster| monster.id == id)
            .map(|monster| monster.take_damage(amount))
    }

    /// Removes monsters whose health reached zero from the roster and the
    /// occupancy index, returning them in roster order.
    pub fn remove_dead(&mut self) -> Vec<Monster> {
        let (dead, alive): (Vec<_>, Vec<_>) = std::mem::take(&mut self.monsters)
            .into_iter()
            .partition(|monster| !monster.is_alive());
        self.monsters = alive;
        for monster in &dead {
            if self.occupancy.get(&monster.position) == Some(&monster.id) {
                self.occupancy.remove(&monster.position);
            }
        }
        dead
    }

    pub fn view(&self) -> LevelView<'_> {
        LevelView {
            terrain: &self.terrain,
            occupancy: &self.occupancy,
        }
    }

    /// Runs the AI for the monster at `index` and applies its move to the
    /// occupancy index. Returns what the monster perceived and did.
    pub(crate) fn act<P>(
        &mut self,
        index: usize,
        player: &mut P,
        config: &AiConfig,
        dice: Dice<'_>,
    ) -> Option<(Sighting, TurnReport)>
    where
        P: PlayerTarget,
    {
        let Self {
            terrain,
            monsters,
            occupancy,
            ..
        } = self;
        let monster = monsters.get_mut(index)?;

        let view = LevelView {
            terrain: &*terrain,
            occupancy: &*occupancy,
        };
        let sighting = sense_player(monster, player.position(), &view, config);
        let mut ctx = AiContext::new(&view, config, dice);
        let report = update_state(
            monster,
            player,
            &mut ctx,
            sighting.visible,
            sighting.distance,
        );

        if let MonsterAction::Move { from, to } = report.action {
            occupancy.remove(&from);
            occupancy.insert(to, monster.id);
        }
        if !monster.is_active {
            occupancy.remove(&monster.position);
        }
        Some((sighting, report))
    }

    pub fn to_records(&self) -> Vec<MonsterRecord> {
        self.monsters.iter().map(Monster::to_record).collect()
    }

    /// Replaces the roster with monsters rebuilt from saved records.
    ///
    /// On error the level is left unchanged.
    pub fn restore_records(&mut self, records: &[MonsterRecord]) -> Result<()> {
        let mut restored = Level::new(self.terrain.clone());
        for record in records {
            let monster = Monster::from_record(record)?;
            restored.insert(monster)?;
        }
        self.monsters = restored.monsters;
        self.occupancy = restored.occupancy;
        self.next_id = restored.next_id;
        Ok(())
    }
}

/// Read-only [`MapQuery`] over a level's terrain and occupancy.
#[derive(Clone, Copy)]
pub struct LevelView<'a> {
    terrain: &'a TerrainGrid,
    occupancy: &'a HashMap<Position, MonsterId>,
}

impl MapQuery for LevelView<'_> {
    fn dimensions(&self) -> MapDimensions {
        self.terrain.dimensions()
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.terrain.is_walkable(position)
    }

    fn monster_at(&self, position: Position) -> Option<MonsterId> {
        self.occupancy.get(&position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall() -> TerrainGrid {
        TerrainGrid::from_rows(&[
            "#######", //
            "#..+..#", //
            "#.~~..#", //
            "#######",
        ])
        .unwrap()
    }

    #[test]
    fn parses_glyphs_and_round_trips_rows() {
        let grid = hall();
        assert_eq!(grid.dimensions(), MapDimensions::new(7, 4));
        assert_eq!(grid.terrain(Position::new(3, 1)), Some(TerrainKind::Door));
        assert!(grid.is_walkable(Position::new(3, 1)));
        assert!(!grid.is_walkable(Position::new(2, 2)));
        assert!(!grid.is_walkable(Position::new(9, 9)));
        assert_eq!(grid.rows()[2], "#.~~..#");
    }

    #[test]
    fn rejects_bad_rows() {
        assert_eq!(
            TerrainGrid::from_rows(&["...", ".."]),
            Err(ScenarioError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            TerrainGrid::from_rows(&["..x"]),
            Err(ScenarioError::UnknownGlyph {
                glyph: 'x',
                position: Position::new(2, 0)
            })
        );
        assert_eq!(
            TerrainGrid::from_rows::<&str>(&[]),
            Err(ScenarioError::EmptyMap)
        );
    }

    #[test]
    fn spawn_checks_the_cell() {
        let mut level = Level::new(hall());
        let orc = level.spawn(Species::lookup('O'), Position::new(1, 1)).unwrap();
        assert_eq!(level.occupant(Position::new(1, 1)), Some(orc));

        assert_eq!(
            level.spawn(Species::lookup('Z'), Position::new(1, 1)),
            Err(ScenarioError::Occupied {
                position: Position::new(1, 1),
                occupant: orc
            })
        );
        assert!(matches!(
            level.spawn(Species::lookup('Z'), Position::new(0, 0)),
            Err(ScenarioError::Blocked { .. })
        ));
        assert!(matches!(
            level.spawn(Species::lookup('Z'), Position::new(20, 1)),
            Err(ScenarioError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn ids_are_unique() {
        let mut level = Level::new(hall());
        let a = level.spawn(Species::lookup('B'), Position::new(1, 1)).unwrap();
        let b = level.spawn(Species::lookup('B'), Position::new(2, 1)).unwrap();
        assert_ne!(a, b);

        let clone = Monster::spawn_letter(a, 'K', Position::new(4, 1));
        assert_eq!(level.insert(clone), Err(ScenarioError::DuplicateId(a)));
    }

    #[test]
    fn dead_monsters_leave_roster_and_occupancy() {
        let mut level = Level::new(hall());
        let bat = level.spawn(Species::lookup('B'), Position::new(1, 1)).unwrap();
        let orc = level.spawn(Species::lookup('O'), Position::new(4, 1)).unwrap();

        assert_eq!(level.damage_monster(bat, 100), Some(0));
        let dead = level.remove_dead();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].id, bat);
        assert_eq!(level.occupant(Position::new(1, 1)), None);
        assert_eq!(level.occupant(Position::new(4, 1)), Some(orc));
        assert_eq!(level.monsters().len(), 1);
    }

    #[test]
    fn failed_restore_leaves_level_untouched() {
        let mut level = Level::new(hall());
        level.spawn(Species::lookup('O'), Position::new(1, 1)).unwrap();
        let mut records = level.to_records();
        records.push(records[0].clone());

        assert!(level.restore_records(&records).is_err());
        assert_eq!(level.monsters().len(), 1);
        assert!(level.occupant(Position::new(1, 1)).is_some());
    }
}
