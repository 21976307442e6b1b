//! The player as the runtime tracks it.

use ai_core::{PlayerTarget, Position, ResourceMeter};

/// Player stats the monsters interact with.
///
/// Movement is driven by the caller; monsters only read the position and
/// apply damage or theft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub position: Position,
    health: ResourceMeter,
    /// Base defense before equipment.
    pub defense: i32,
    /// Defense granted by worn armor.
    pub armor: i32,
    gold: u32,
}

impl PlayerState {
    pub fn new(position: Position, health: u32) -> Self {
        Self {
            position,
            health: ResourceMeter::full(health),
            defense: 0,
            armor: 0,
            gold: 0,
        }
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum()
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }
}

impl PlayerTarget for PlayerState {
    fn position(&self) -> Position {
        self.position
    }

    fn defense(&self) -> i32 {
        self.defense + self.armor
    }

    fn gold(&self) -> u32 {
        self.gold
    }

    fn set_gold(&mut self, amount: u32) {
        self.gold = amount;
    }

    fn take_damage(&mut self, amount: u32) {
        self.health.deplete(amount);
    }
}
