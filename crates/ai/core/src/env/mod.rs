//! Traits describing the collaborators the AI consults but never owns.
//!
//! The map query answers bounds, walkability and occupancy questions; the
//! player target exposes the handful of stats combat needs; the RNG oracle
//! supplies every random roll so combat is reproducible under a fixed seed.
mod map;
mod player;
mod rng;

pub use map::{MapDimensions, MapQuery};
pub use player::PlayerTarget;
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
