//! A* pathfinding over the eight-connected grid.
//!
//! Costs are fixed-point tenths of a tile: an axial step costs 10 and a
//! diagonal step 14. The heuristic is Manhattan distance in the same unit.
//! Every call builds its own node arena, addressed through a dense slot table
//! keyed by `y * width + x`, and drops it on return.

mod open_set;

use open_set::OpenSet;

use crate::config::AiConfig;
use crate::env::MapQuery;
use crate::state::Position;

const AXIAL_COST: u32 = 10;
const DIAGONAL_COST: u32 = 14;

const NEIGHBOURS: [(i32, i32, u32); 8] = [
    (0, -1, AXIAL_COST),
    (1, 0, AXIAL_COST),
    (0, 1, AXIAL_COST),
    (-1, 0, AXIAL_COST),
    (1, -1, DIAGONAL_COST),
    (1, 1, DIAGONAL_COST),
    (-1, 1, DIAGONAL_COST),
    (-1, -1, DIAGONAL_COST),
];

const NO_NODE: u32 = u32::MAX;

/// Search node; lives only for the duration of one call.
#[derive(Clone, Debug)]
pub(crate) struct PathNode {
    pub(crate) position: Position,
    /// Cost from the start.
    pub(crate) g: u32,
    /// Heuristic estimate to the goal.
    pub(crate) h: u32,
    pub(crate) parent: Option<usize>,
    pub(crate) heap_index: Option<usize>,
    pub(crate) closed: bool,
}

impl PathNode {
    #[inline]
    pub(crate) fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Finds a walkable route from `start` to `goal` with the default expansion
/// budget.
///
/// Returns `None` when the goal is out of bounds, not walkable, occupied by a
/// monster, or unreachable. When a route exists, index 0 is `start` and the
/// last element is `goal`; `[start]` is returned when the two coincide.
pub fn find_path<M>(start: Position, goal: Position, map: &M) -> Option<Vec<Position>>
where
    M: MapQuery + ?Sized,
{
    find_path_with_limit(start, goal, map, AiConfig::DEFAULT_PATH_SEARCH_LIMIT)
}

/// Like [`find_path`] but gives up after expanding `limit` nodes.
pub fn find_path_with_limit<M>(
    start: Position,
    goal: Position,
    map: &M,
    limit: u32,
) -> Option<Vec<Position>>
where
    M: MapQuery + ?Sized,
{
    if !map.is_in_bounds(goal) || !map.is_walkable(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }
    if !map.is_in_bounds(start) {
        return None;
    }

    Search::new(map, goal).run(start, limit)
}

struct Search<'m, M: ?Sized> {
    map: &'m M,
    goal: Position,
    nodes: Vec<PathNode>,
    slots: Vec<u32>,
    open: OpenSet,
}

impl<'m, M> Search<'m, M>
where
    M: MapQuery + ?Sized,
{
    fn new(map: &'m M, goal: Position) -> Self {
        let area = map.dimensions().area();
        Self {
            map,
            goal,
            nodes: Vec::new(),
            slots: vec![NO_NODE; area],
            open: OpenSet::default(),
        }
    }

    fn run(mut self, start: Position, limit: u32) -> Option<Vec<Position>> {
        let first = self.insert(start, 0, None)?;
        self.open.push(&mut self.nodes, first);

        let mut expanded = 0u32;
        while let Some(current) = self.open.pop(&mut self.nodes) {
            self.nodes[current].closed = true;
            let position = self.nodes[current].position;
            if position == self.goal {
                return Some(self.reconstruct(current));
            }

            expanded += 1;
            if expanded > limit {
                return None;
            }

            for (dx, dy, step) in NEIGHBOURS {
                let next = position.offset(dx, dy);
                if !self.map.can_enter(next) {
                    continue;
                }
                let g = self.nodes[current].g + step;
                match self.slot(next) {
                    None => {
                        if let Some(index) = self.insert(next, g, Some(current)) {
                            self.open.push(&mut self.nodes, index);
                        }
                    }
                    Some(index) if self.nodes[index].closed => {}
                    Some(index) if g < self.nodes[index].g => {
                        self.nodes[index].g = g;
                        self.nodes[index].parent = Some(current);
                        self.open.decrease(&mut self.nodes, index);
                    }
                    Some(_) => {}
                }
            }
        }

        None
    }

    fn key(&self, position: Position) -> Option<usize> {
        self.map.dimensions().index_of(position)
    }

    fn slot(&self, position: Position) -> Option<usize> {
        let key = self.key(position)?;
        match self.slots[key] {
            NO_NODE => None,
            index => Some(index as usize),
        }
    }

    fn insert(&mut self, position: Position, g: u32, parent: Option<usize>) -> Option<usize> {
        let key = self.key(position)?;
        let index = self.nodes.len();
        self.nodes.push(PathNode {
            position,
            g,
            h: position.manhattan(self.goal) * AXIAL_COST,
            parent,
            heap_index: None,
            closed: false,
        });
        self.slots[key] = index as u32;
        Some(index)
    }

    fn reconstruct(&self, mut index: usize) -> Vec<Position> {
        let mut path = vec![self.nodes[index].position];
        while let Some(parent) = self.nodes[index].parent {
            path.push(self.nodes[parent].position);
            index = parent;
        }
        path.reverse();
        path
    }
}
