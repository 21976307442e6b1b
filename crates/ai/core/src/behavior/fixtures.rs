use crate::env::{MapDimensions, MapQuery, PlayerTarget, RngOracle};
use crate::state::{MonsterId, Position};

/// Map parsed from rows: `#` is a wall, anything else floor. Monsters are
/// tracked separately so tests can move them.
pub(crate) struct TestMap {
    dimensions: MapDimensions,
    walls: Vec<Position>,
    pub(crate) monsters: Vec<(Position, MonsterId)>,
}

impl TestMap {
    pub(crate) fn open(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            walls: Vec::new(),
            monsters: Vec::new(),
        }
    }

    pub(crate) fn parse(rows: &[&str]) -> Self {
        let mut map = Self::open(rows[0].len() as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                if glyph == '#' {
                    map.walls.push(Position::new(x as i32, y as i32));
                }
            }
        }
        map
    }

    pub(crate) fn with_monster(mut self, x: i32, y: i32) -> Self {
        let id = MonsterId(100 + self.monsters.len() as u32);
        self.monsters.push((Position::new(x, y), id));
        self
    }
}

impl MapQuery for TestMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.dimensions.contains(position) && !self.walls.contains(&position)
    }

    fn monster_at(&self, position: Position) -> Option<MonsterId> {
        self.monsters
            .iter()
            .find(|(at, _)| *at == position)
            .map(|(_, id)| *id)
    }
}

pub(crate) struct TestPlayer {
    pub(crate) position: Position,
    pub(crate) defense: i32,
    pub(crate) gold: u32,
    pub(crate) health: u32,
}

impl TestPlayer {
    pub(crate) const HEALTH: u32 = 50;

    pub(crate) fn at(x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
            defense: 2,
            gold: 0,
            health: Self::HEALTH,
        }
    }
}

impl PlayerTarget for TestPlayer {
    fn position(&self) -> Position {
        self.position
    }

    fn defense(&self) -> i32 {
        self.defense
    }

    fn gold(&self) -> u32 {
        self.gold
    }

    fn set_gold(&mut self, amount: u32) {
        self.gold = amount;
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// Returns the same raw value for every seed.
pub(crate) struct FixedRng(pub(crate) u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}
