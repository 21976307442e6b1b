//! Combat resolution for monster attacks on the player.
//!
//! Hit chance, base damage and trait modifiers are pure functions of their
//! inputs. The only randomness comes through [`Dice`](crate::env::Dice), so a
//! fixed seed reproduces a fight exactly.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete attack (hit roll, damage, modifiers, effects)
//! - `calculate_hit_chance`: attack vs defense, or near-certain for sure-hit species
//! - `calculate_damage`: `max(1, attack - defense)`
//! - `apply_damage_modifiers`: elemental bonus and life drain
//! - `apply_special_effects`: gold theft

pub mod damage;
pub mod effects;
pub mod hit;
pub mod result;

pub use damage::{apply_damage_modifiers, calculate_damage};
pub use effects::{SpecialEffect, apply_special_effects};
pub use hit::{HitChance, calculate_hit_chance, check_hit};
pub use result::{AttackOutcome, AttackReport, resolve_attack};
