//! Injectable randomness for combat and wandering.
//!
//! Every roll is derived from a seed built out of the game seed, the turn
//! number, the rolling monster and a per-turn roll counter. Two runs with the
//! same inputs therefore make the same decisions, which keeps AI behavior
//! replayable and lets tests pin outcomes without touching global state.

use crate::state::MonsterId;

/// Source of deterministic random numbers.
///
/// Implementations map a seed to a value and must return the same value for
/// the same seed.
pub trait RngOracle {
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Value in `[min, max]` inclusive; `min` when the range is empty.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

/// Stateless PCG-XSH-RR generator: one LCG step followed by the permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the roll inputs into a single well-distributed seed.
///
/// * `game_seed` - fixed at game start
/// * `turn` - current turn number
/// * `actor` - raw id of the rolling monster
/// * `roll` - index of the roll within this monster's turn
pub fn compute_seed(game_seed: u64, turn: u64, actor: u32, roll: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (roll as u64).wrapping_mul(0x85ebca6b);

    // SplitMix-style finaliser
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Per-monster, per-turn roll handle.
///
/// Each call consumes the next roll index, so successive rolls within a turn are
/// independent while the whole sequence stays reproducible.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    turn: u64,
    actor: u32,
    rolls: u32,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, turn: u64, actor: MonsterId) -> Self {
        Self {
            rng,
            game_seed,
            turn,
            actor: actor.0,
            rolls: 0,
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.game_seed, self.turn, self.actor, self.rolls);
        self.rolls = self.rolls.wrapping_add(1);
        seed
    }

    pub fn roll_d100(&mut self) -> u32 {
        let seed = self.next_seed();
        self.rng.roll_d100(seed)
    }

    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.range(seed, min, max)
    }

    /// Succeeds with `percent`% probability. Zero never succeeds, 100 always does.
    pub fn chance(&mut self, percent: u32) -> bool {
        if percent == 0 {
            return false;
        }
        self.roll_d100() <= percent
    }

    /// Number of rolls consumed so far.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }
}
