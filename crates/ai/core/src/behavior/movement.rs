//! Step selection shared by the routines.
//!
//! Every helper returns the next cell to move to, or `None` when the monster
//! should stay put. A returned cell is always in bounds, walkable, free of
//! other monsters and never the player's cell.

use super::AiContext;
use crate::env::MapQuery;
use crate::path::find_path_with_limit;
use crate::species::SpeciesTraits;
use crate::state::{Monster, PatrolRoute, Position};

const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// Axes tried, in order, when laying out a generated patrol leg.
const PATROL_AXES: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn can_step<M>(map: &M, to: Position, player: Position) -> bool
where
    M: MapQuery + ?Sized,
{
    to != player && map.can_enter(to)
}

fn neighbours(from: Position) -> impl Iterator<Item = Position> {
    DIRECTIONS.into_iter().map(move |(dx, dy)| from.offset(dx, dy))
}

/// One step that strictly reduces the Chebyshev distance to `target`,
/// preferring the cell closest to it. Ties are broken by Manhattan distance
/// and then by neighbour order.
pub(super) fn greedy_step<M>(
    from: Position,
    target: Position,
    player: Position,
    map: &M,
) -> Option<Position>
where
    M: MapQuery + ?Sized,
{
    let current = from.chebyshev(target);
    neighbours(from)
        .filter(|&next| next.chebyshev(target) < current && can_step(map, next, player))
        .min_by_key(|&next| (next.chebyshev(target), next.manhattan(target)))
}

/// First step of the A* route to `target`, if one exists within `limit`
/// expansions.
pub(super) fn path_step<M>(
    from: Position,
    target: Position,
    player: Position,
    map: &M,
    limit: u32,
) -> Option<Position>
where
    M: MapQuery + ?Sized,
{
    let path = find_path_with_limit(from, target, map, limit)?;
    path.get(1)
        .copied()
        .filter(|&next| can_step(map, next, player))
}

/// Moves `monster` one cell toward `target`. Intelligent species plan a route
/// and fall back to a greedy step when none is found.
pub(super) fn approach(
    monster: &Monster,
    target: Position,
    player: Position,
    ctx: &AiContext<'_>,
) -> Option<Position> {
    if monster.position == target {
        return None;
    }
    if monster.has_trait(SpeciesTraits::INTELLIGENT) {
        let limit = ctx.config.path_search_limit;
        if let Some(next) = path_step(monster.position, target, player, ctx.map, limit) {
            return Some(next);
        }
    }
    greedy_step(monster.position, target, player, ctx.map)
}

/// The neighbour farthest from `threat`, or `None` if no neighbour is
/// farther away than `from`.
pub(super) fn flee_step<M>(from: Position, threat: Position, map: &M) -> Option<Position>
where
    M: MapQuery + ?Sized,
{
    let squared = |p: Position| {
        let (dx, dy) = (p.x - threat.x, p.y - threat.y);
        dx * dx + dy * dy
    };
    let current = squared(from);
    neighbours(from)
        .filter(|&next| squared(next) > current && can_step(map, next, threat))
        .fold(None, |best: Option<Position>, next| match best {
            Some(kept) if squared(kept) >= squared(next) => Some(kept),
            _ => Some(next),
        })
}

/// Lays out a back-and-forth route anchored on `origin`.
///
/// The route is `origin` plus the farthest walkable cell within `radius` along
/// the first axis that is open next to the anchor. A fully enclosed anchor
/// yields a single-point route.
pub fn generate_patrol_route<M>(origin: Position, map: &M, radius: u32) -> PatrolRoute
where
    M: MapQuery + ?Sized,
{
    let radius = radius as i32;
    for (dx, dy) in PATROL_AXES {
        let far = (1..=radius)
            .map(|step| origin.offset(dx * step, dy * step))
            .take_while(|&cell| map.is_walkable(cell))
            .last();
        if let Some(far) = far {
            return PatrolRoute::new([origin, far]);
        }
    }
    PatrolRoute::new([origin])
}
