// Connection selection: which owned lighthouse to link to, chosen by
// the triangle area it would claim with a third owned lighthouse.

use rand::Rng;

use super::board::{Board, Position};
use super::config::*;

/// Euclidean area of the triangle (a, b, c) via the cross product.
fn triangle_area(a: Position, b: Position, c: Position) -> f64 {
    let cross = (b.x - a.x) as i64 * (c.y - a.y) as i64 - (b.y - a.y) as i64 * (c.x - a.x) as i64;
    cross.abs() as f64 / 2.0
}

/// Pick the connection destination from `current`, which must be an
/// owned lighthouse where the bot holds the key (the caller checks
/// both).
///
/// Candidates are owned lighthouses other than the current one that are
/// not already connected to it and that report their own key present.
/// Each (candidate, third owned lighthouse) pair scores the triangle
/// area of (current, candidate, third) plus corner bonuses; the
/// candidate with the best pair wins. When no third owned lighthouse
/// exists to form a triangle, a random candidate is chosen so the turn
/// still produces a connect.
pub fn select_connection<R: Rng>(
    board: &Board,
    current: Position,
    player_id: i32,
    rng: &mut R,
) -> Option<Position> {
    let current_lh = board.lighthouse_at(current)?;
    if current_lh.owner != player_id {
        return None;
    }

    let candidates: Vec<Position> = board
        .owned_lighthouses(player_id)
        .filter(|lh| {
            lh.position != current && lh.have_key && !current_lh.is_connected_to(lh.position)
        })
        .map(|lh| lh.position)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let mut best: Option<(Position, f64)> = None;
    for &candidate in &candidates {
        for third in board.owned_lighthouses(player_id) {
            let third = third.position;
            if third == current || third == candidate {
                continue;
            }
            let corners = candidate.is_corner() as u8 + third.is_corner() as u8;
            let bonus = match corners {
                2 => BOTH_CORNERS_BONUS,
                1 => ONE_CORNER_BONUS,
                _ => 0.0,
            };
            let score = triangle_area(current, candidate, third) + bonus;
            if best.map_or(true, |(_, bs)| score > bs) {
                best = Some((candidate, score));
            }
        }
    }

    match best {
        Some((candidate, _)) => Some(candidate),
        // No triangle computable: any unconnected owned lighthouse.
        None => Some(candidates[rng.gen_range(0..candidates.len())]),
    }
}
