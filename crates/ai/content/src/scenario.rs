//! Scenario description: the level layout and who starts where.

use ai_core::{AiConfig, Position, Species};

/// An encounter: a terrain grid, the player and the monsters to spawn.
///
/// Rows use one glyph per tile (`.` floor, `#` wall, `+` door, `~` water,
/// space for void). The runtime validates the glyphs and spawn cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
    pub rows: Vec<String>,
    pub player: PlayerSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spawns: Vec<SpawnSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub position: (i32, i32),
    pub health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: u32,
}

/// One monster placement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSpec {
    /// Species letter, `A` to `Z`.
    pub species: char,
    pub position: (i32, i32),
    /// Explicit patrol waypoints; empty lets the monster generate its own.
    #[cfg_attr(feature = "serde", serde(default))]
    pub patrol: Vec<(i32, i32)>,
    /// `(view, detection)` overriding the species defaults.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ranges: Option<(u32, u32)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: Option<u32>,
}

impl Scenario {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl PlayerSpec {
    pub fn position(&self) -> Position {
        Position::new(self.position.0, self.position.1)
    }
}

impl SpawnSpec {
    pub fn position(&self) -> Position {
        Position::new(self.position.0, self.position.1)
    }

    pub fn species(&self) -> Option<&'static Species> {
        Species::try_lookup(self.species)
    }

    pub fn waypoints(&self) -> impl Iterator<Item = Position> + '_ {
        self.patrol.iter().map(|&(x, y)| Position::new(x, y))
    }

    /// True if the explicit route fits in a monster's patrol buffer.
    pub fn patrol_fits(&self) -> bool {
        self.patrol.len() <= AiConfig::MAX_WAYPOINTS
    }
}
