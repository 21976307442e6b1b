use crate::state::{MonsterId, Position};

/// Read-only view of the current level used for movement and sight.
///
/// The AI never mutates the map. Occupancy reflects monsters' current
/// positions, including moves already applied earlier in the same turn.
pub trait MapQuery {
    fn dimensions(&self) -> MapDimensions;

    /// Returns true if the tile can be walked on and seen through.
    ///
    /// Implementations must return false for out-of-bounds positions.
    fn is_walkable(&self, position: Position) -> bool;

    fn monster_at(&self, position: Position) -> Option<MonsterId>;

    fn is_in_bounds(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Movement legality shared by every routine and the pathfinder:
    /// in bounds, walkable, and not already taken by another monster.
    fn can_enter(&self, position: Position) -> bool {
        self.is_in_bounds(position)
            && self.is_walkable(position)
            && self.monster_at(position).is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Packs an in-bounds position into a dense row-major index.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
