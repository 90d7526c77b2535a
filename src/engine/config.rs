// Map constants and heuristic weights for the lighthouses game.

/// Side length of the (square) game map in cells.
pub const MAP_SIZE: i32 = 15;

/// How many recently visited positions the engine remembers to avoid
/// walking in circles.
pub const RECENT_MEMORY_CAPACITY: usize = 5;

/// The 8 neighbor offsets a bot may move to in one turn.
pub const MOVES: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Target scoring weights (additive, per candidate lighthouse)
pub const DISTANCE_WEIGHT: i32 = 2;
pub const CORNER_BONUS: i32 = 30;
pub const EDGE_BONUS: i32 = 15;
pub const CENTER_BONUS: i32 = 8;
/// Half-width of the central region that earns CENTER_BONUS
/// (a 5x5 block around the map center).
pub const CENTER_HALF_WIDTH: i32 = 2;
pub const NEUTRAL_BONUS: i32 = 40;
pub const ENEMY_BONUS: i32 = 20;
pub const OWN_BONUS: i32 = 5;
/// Extra penalty on own lighthouses while the bot holds no key.
pub const OWN_WITHOUT_KEY_PENALTY: i32 = 50;
/// Divisor applied to the (bot energy - lighthouse energy) surplus.
pub const ENERGY_SURPLUS_DIVISOR: i32 = 10;

// Connection triangle bonuses
pub const BOTH_CORNERS_BONUS: f64 = 100.0;
pub const ONE_CORNER_BONUS: f64 = 25.0;

// Attack policy: commit ATTACK_NUM/ATTACK_DEN of the reserve, or just
// enough to beat the lighthouse (its energy + ATTACK_MARGIN) when that
// is more, never exceeding the reserve.
pub const ATTACK_NUM: i32 = 4;
pub const ATTACK_DEN: i32 = 5;
pub const ATTACK_MARGIN: i32 = 10;
