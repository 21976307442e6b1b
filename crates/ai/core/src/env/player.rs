use crate::state::Position;

/// The player as seen by a monster: where it stands, how well it is armored,
/// and the purse thieves reach into.
///
/// The player's own movement is driven elsewhere; monsters only read its
/// position and apply damage or theft through this trait.
pub trait PlayerTarget {
    fn position(&self) -> Position;

    /// Total defense, base plus equipment.
    fn defense(&self) -> i32;

    fn gold(&self) -> u32;

    fn set_gold(&mut self, amount: u32);

    fn take_damage(&mut self, amount: u32);
}
