// Grid model: positions, lighthouses, per-turn cell energies, and the
// cross-turn accumulator of known lighthouse locations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::config::*;

/// A cell coordinate on the square game map. Value type, hashable,
/// serialized with the wire protocol's field names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "X", default)]
    pub x: i32,
    #[serde(rename = "Y", default)]
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Whether this position lies on the map.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < MAP_SIZE && self.y >= 0 && self.y < MAP_SIZE
    }

    /// The position shifted by (dx, dy). May be out of bounds.
    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// One of the four map corners.
    pub fn is_corner(self) -> bool {
        (self.x == 0 || self.x == MAP_SIZE - 1) && (self.y == 0 || self.y == MAP_SIZE - 1)
    }

    /// On a border row or column (corners included).
    pub fn is_edge(self) -> bool {
        self.x == 0 || self.x == MAP_SIZE - 1 || self.y == 0 || self.y == MAP_SIZE - 1
    }

    /// Inside the central block around the map center.
    pub fn is_central(self) -> bool {
        let mid = MAP_SIZE / 2;
        (self.x - mid).abs() <= CENTER_HALF_WIDTH && (self.y - mid).abs() <= CENTER_HALF_WIDTH
    }
}

/// One lighthouse as observed this turn. Rebuilt fresh from every turn
/// message; ownership and connections come only from the server.
#[derive(Clone, Debug)]
pub struct Lighthouse {
    pub position: Position,
    /// Owning player id, 0 = neutral.
    pub owner: i32,
    pub energy: i32,
    /// Whether the activation key is present at this lighthouse.
    pub have_key: bool,
    /// Lighthouses this one is already linked to.
    pub connections: Vec<Position>,
}

impl Lighthouse {
    pub fn is_connected_to(&self, pos: Position) -> bool {
        self.connections.contains(&pos)
    }
}

/// Board state for the current turn plus the accumulated set of known
/// lighthouse positions. Lighthouse locations are stable once
/// discovered even when they drop out of visibility, so the known list
/// only grows; it keeps first-seen order to give the scorer a stable,
/// deterministic iteration order.
#[derive(Default)]
pub struct Board {
    lighthouses: HashMap<Position, Lighthouse>,
    cells: HashMap<Position, i32>,
    known: Vec<Position>,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Replace the per-turn state with this turn's visible lighthouses
    /// and cells, and fold new lighthouse positions into the known list.
    pub fn update(&mut self, lighthouses: Vec<Lighthouse>, cells: HashMap<Position, i32>) {
        self.lighthouses.clear();
        for lh in lighthouses {
            self.remember(lh.position);
            self.lighthouses.insert(lh.position, lh);
        }
        self.cells = cells;
    }

    /// Record a lighthouse location without visibility data (used to
    /// warm-start from the initial board snapshot).
    pub fn remember(&mut self, pos: Position) {
        if !self.known.contains(&pos) {
            self.known.push(pos);
        }
    }

    pub fn lighthouse_at(&self, pos: Position) -> Option<&Lighthouse> {
        self.lighthouses.get(&pos)
    }

    /// Energy available at a cell; absent cells count as zero.
    pub fn cell_energy(&self, pos: Position) -> i32 {
        self.cells.get(&pos).copied().unwrap_or(0)
    }

    /// All positions ever seen to hold a lighthouse, in first-seen order.
    pub fn known_lighthouses(&self) -> impl Iterator<Item = Position> + '_ {
        self.known.iter().copied()
    }

    /// Lighthouses owned by the given player this turn, in first-seen order.
    pub fn owned_lighthouses(&self, player_id: i32) -> impl Iterator<Item = &Lighthouse> + '_ {
        self.known
            .iter()
            .filter_map(move |pos| self.lighthouses.get(pos))
            .filter(move |lh| lh.owner == player_id)
    }
}
