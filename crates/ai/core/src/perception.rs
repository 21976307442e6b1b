//! What a monster can see and sense.
//!
//! Sight is a Bresenham trace across walkable tiles, limited by the monster's
//! view range. Detection works without line of sight inside a smaller radius
//! that grows with the monster's alert level.

use crate::config::AiConfig;
use crate::env::MapQuery;
use crate::state::{Monster, Position};

/// Result of a monster sensing the player this turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub visible: bool,
    pub distance: f32,
}

/// Euclidean distance between two tiles; adjacent tiles, diagonals included,
/// are within [`AiConfig::ATTACK_RANGE`].
#[inline]
pub fn distance(from: Position, to: Position) -> f32 {
    from.euclidean(to)
}

/// Returns true if no non-walkable tile lies strictly between `from` and `to`.
///
/// The endpoints themselves are never tested, so a monster standing in a
/// doorway can see out and a target inside a wall tile can still be seen.
/// The line is always traced from the lexicographically smaller endpoint, so
/// sight is symmetric.
pub fn has_line_of_sight<M>(from: Position, to: Position, map: &M) -> bool
where
    M: MapQuery + ?Sized,
{
    if from == to {
        return true;
    }
    let (from, to) = if (to.x, to.y) < (from.x, from.y) {
        (to, from)
    } else {
        (from, to)
    };

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = (to.x - from.x).signum();
    let sy = (to.y - from.y).signum();
    let mut err = dx + dy;
    let mut cursor = from;

    loop {
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            cursor.x += sx;
        }
        if doubled <= dx {
            err += dx;
            cursor.y += sy;
        }
        if cursor == to {
            return true;
        }
        if !map.is_walkable(cursor) {
            return false;
        }
    }
}

/// Detection radius after the alert bonus.
pub fn effective_detection_range(monster: &Monster, config: &AiConfig) -> u32 {
    monster.detection_range() + monster.alert_level / config.alert_per_tile.max(1)
}

/// Decides whether `monster` perceives a player standing at `player`.
///
/// The player is visible inside the view range with a clear line of sight, or
/// anywhere inside the detection radius.
pub fn sense_player<M>(monster: &Monster, player: Position, map: &M, config: &AiConfig) -> Sighting
where
    M: MapQuery + ?Sized,
{
    let distance = distance(monster.position, player);
    let seen = distance <= monster.view_range() as f32
        && has_line_of_sight(monster.position, player, map);
    let detected = distance <= effective_detection_range(monster, config) as f32;

    Sighting {
        visible: seen || detected,
        distance,
    }
}
