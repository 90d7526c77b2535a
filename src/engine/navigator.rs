// Shortest-path navigation: BFS over the open bounded grid.

use std::collections::VecDeque;

use super::board::Position;
use super::config::MAP_SIZE;

/// Neighbor expansion order: up, down, left, right. Ties between
/// equal-length paths resolve in this order, which keeps the returned
/// step deterministic.
const DIRS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// First step of a shortest 4-directional path from `start` to `goal`.
///
/// Every in-bounds cell is traversable (lighthouses and other bots do
/// not block movement). Returns (0, 0) when `start == goal`, when
/// either endpoint is off the map, or when no path exists.
pub fn next_step(start: Position, goal: Position) -> (i32, i32) {
    if start == goal || !start.in_bounds() || !goal.in_bounds() {
        return (0, 0);
    }

    let w = MAP_SIZE as usize;
    let idx = |p: Position| p.y as usize * w + p.x as usize;

    let mut visited = vec![false; w * w];
    let mut came_from = vec![usize::MAX; w * w];

    let start_idx = idx(start);
    visited[start_idx] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            // Walk the parent chain back to the cell right after start.
            let mut i = idx(goal);
            while came_from[i] != start_idx {
                i = came_from[i];
            }
            let x = (i % w) as i32;
            let y = (i / w) as i32;
            return (x - start.x, y - start.y);
        }

        for (dx, dy) in DIRS {
            let next = current.offset(dx, dy);
            if !next.in_bounds() {
                continue;
            }
            let ni = idx(next);
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            came_from[ni] = idx(current);
            queue.push_back(next);
        }
    }

    (0, 0)
}
