use arrayvec::ArrayVec;

use super::Position;
use crate::config::AiConfig;

type Waypoints = ArrayVec<Position, { AiConfig::MAX_WAYPOINTS }>;

/// Ordered patrol waypoints walked back and forth.
///
/// # Invariants
///
/// - `cursor < waypoints.len()` whenever the route is not empty
/// - `cursor == 0` for an empty route
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatrolRoute {
    waypoints: Waypoints,
    cursor: usize,
    reversing: bool,
}

impl PatrolRoute {
    /// Builds a route from the given waypoints, keeping at most
    /// [`AiConfig::MAX_WAYPOINTS`] of them.
    pub fn new(waypoints: impl IntoIterator<Item = Position>) -> Self {
        Self {
            waypoints: waypoints
                .into_iter()
                .take(AiConfig::MAX_WAYPOINTS)
                .collect(),
            cursor: 0,
            reversing: false,
        }
    }

    /// Rebuilds a route from persisted parts. Returns `None` if the parts break
    /// the route invariants.
    pub fn from_parts(waypoints: &[Position], cursor: usize, reversing: bool) -> Option<Self> {
        if waypoints.len() > AiConfig::MAX_WAYPOINTS {
            return None;
        }
        if waypoints.is_empty() {
            return (cursor == 0).then(Self::default);
        }
        if cursor >= waypoints.len() {
            return None;
        }
        let mut route = Self::new(waypoints.iter().copied());
        route.cursor = cursor;
        route.reversing = reversing;
        Some(route)
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    /// The waypoint currently being walked to.
    pub fn current(&self) -> Option<Position> {
        self.waypoints.get(self.cursor).copied()
    }

    /// Moves the cursor to the next waypoint, turning around at either end.
    pub fn advance(&mut self) {
        let len = self.waypoints.len();
        if len <= 1 {
            return;
        }
        if self.reversing {
            if self.cursor == 0 {
                self.reversing = false;
                self.cursor = 1;
            } else {
                self.cursor -= 1;
            }
        } else if self.cursor + 1 == len {
            self.reversing = true;
            self.cursor -= 1;
        } else {
            self.cursor += 1;
        }
    }
}
