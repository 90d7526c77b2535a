// Target scoring: rank known lighthouses as movement goals.

use super::board::{Board, Position};
use super::config::*;

/// Score one candidate lighthouse position as a movement goal.
///
/// Additive terms: distance (closer is better), positional class
/// (corner > edge > central region), ownership (neutral captures are
/// the best value, enemies next, own lighthouses barely, and own ones
/// are heavily penalized while the bot has no key to use there), and
/// the attack-feasibility surplus of bot energy over lighthouse energy
/// for non-own targets, floored at zero.
///
/// Known lighthouses currently outside visibility have no ownership or
/// energy data; they score as neutral with no surplus term.
fn score(
    board: &Board,
    current: Position,
    candidate: Position,
    bot_energy: i32,
    have_key: bool,
    player_id: i32,
) -> i32 {
    let mut score = -DISTANCE_WEIGHT * current.manhattan(candidate);

    if candidate.is_corner() {
        score += CORNER_BONUS;
    } else if candidate.is_edge() {
        score += EDGE_BONUS;
    } else if candidate.is_central() {
        score += CENTER_BONUS;
    }

    match board.lighthouse_at(candidate) {
        Some(lh) if lh.owner == player_id => {
            score += OWN_BONUS;
            if !have_key {
                score -= OWN_WITHOUT_KEY_PENALTY;
            }
        }
        Some(lh) => {
            score += if lh.owner == 0 { NEUTRAL_BONUS } else { ENEMY_BONUS };
            score += ((bot_energy - lh.energy) / ENERGY_SURPLUS_DIVISOR).max(0);
        }
        None => score += NEUTRAL_BONUS,
    }

    score
}

/// The best lighthouse to move toward, or None when no lighthouse is
/// known (other than the one under the bot). Deterministic: candidates
/// are scanned in first-seen order and ties keep the earlier one.
pub fn best_target(
    board: &Board,
    current: Position,
    bot_energy: i32,
    have_key: bool,
    player_id: i32,
) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for candidate in board.known_lighthouses() {
        if candidate == current {
            continue;
        }
        let s = score(board, current, candidate, bot_energy, have_key, player_id);
        if best.map_or(true, |(_, bs)| s > bs) {
            best = Some((candidate, s));
        }
    }
    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::board::Lighthouse;
    use super::*;

    fn lh(x: i32, y: i32, owner: i32, energy: i32) -> Lighthouse {
        Lighthouse {
            position: Position::new(x, y),
            owner,
            energy,
            have_key: false,
            connections: Vec::new(),
        }
    }

    fn board_with(lighthouses: Vec<Lighthouse>) -> Board {
        let mut board = Board::new();
        board.update(lighthouses, HashMap::new());
        board
    }

    #[test]
    fn test_no_known_lighthouses_yields_none() {
        let board = Board::new();
        assert_eq!(best_target(&board, Position::new(7, 7), 50, false, 1), None);
    }

    #[test]
    fn test_current_position_is_excluded() {
        let board = board_with(vec![lh(7, 7, 0, 10)]);
        assert_eq!(best_target(&board, Position::new(7, 7), 50, false, 1), None);
    }

    #[test]
    fn test_neutral_beats_enemy_at_equal_distance() {
        let board = board_with(vec![lh(5, 3, 2, 20), lh(9, 3, 0, 20)]);
        let target = best_target(&board, Position::new(7, 3), 50, false, 1);
        assert_eq!(target, Some(Position::new(9, 3)));
    }

    #[test]
    fn test_closer_wins_among_equals() {
        let board = board_with(vec![lh(1, 7, 0, 20), lh(13, 8, 0, 20)]);
        let target = best_target(&board, Position::new(3, 7), 50, false, 1);
        assert_eq!(target, Some(Position::new(1, 7)));
    }

    #[test]
    fn test_corner_bonus_outweighs_small_distance_edge() {
        // Corner at distance 4 vs plain interior cell at distance 2:
        // corner bonus (30) beats the 2*2 extra distance cost plus the
        // interior's lack of class bonus.
        let board = board_with(vec![lh(0, 0, 0, 20), lh(2, 4, 0, 20)]);
        let target = best_target(&board, Position::new(2, 2), 50, false, 1);
        assert_eq!(target, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_own_without_key_is_avoided() {
        let board = board_with(vec![lh(6, 6, 1, 20), lh(10, 6, 2, 20)]);
        let target = best_target(&board, Position::new(8, 6), 50, false, 1);
        assert_eq!(target, Some(Position::new(10, 6)));
    }

    #[test]
    fn test_energy_surplus_prefers_weak_lighthouse() {
        let board = board_with(vec![lh(5, 7, 2, 90), lh(9, 7, 2, 0)]);
        let target = best_target(&board, Position::new(7, 7), 100, false, 1);
        assert_eq!(target, Some(Position::new(9, 7)));
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // Two identical candidates equidistant from the bot: the one
        // discovered first wins.
        let board = board_with(vec![lh(6, 5, 0, 20), lh(8, 5, 0, 20)]);
        let target = best_target(&board, Position::new(7, 5), 50, false, 1);
        assert_eq!(target, Some(Position::new(6, 5)));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let board = board_with(vec![lh(3, 3, 0, 20), lh(11, 11, 2, 5), lh(0, 14, 1, 40)]);
        let a = best_target(&board, Position::new(7, 7), 60, true, 1);
        let b = best_target(&board, Position::new(7, 7), 60, true, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseen_known_lighthouse_scores_as_neutral() {
        let mut board = board_with(vec![lh(4, 4, 2, 20)]);
        // Known from an earlier turn but not visible now.
        board.remember(Position::new(10, 4));
        // Equal distance from (7,4); the unseen one gets the neutral
        // bonus (40) vs the enemy bonus (20) + small surplus.
        let target = best_target(&board, Position::new(7, 4), 30, false, 1);
        assert_eq!(target, Some(Position::new(10, 4)));
    }
}
