// Per-turn decision state machine: classify the situation, emit
// exactly one action.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::board::{Board, Position};
use super::config::*;
use super::{geometry, navigator, scorer};

/// The single action a turn resolves to. Move/Attack/Connect carry the
/// destination; Pass stays on the current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Position),
    Attack { position: Position, energy: i32 },
    Connect(Position),
    Pass(Position),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Attack { .. } => "attack",
            Action::Connect(_) => "connect",
            Action::Pass(_) => "pass",
        }
    }
}

/// What the bot sees about itself this turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext {
    pub position: Position,
    pub energy: i32,
    pub have_key: bool,
    pub player_id: i32,
}

/// Situation classification, recomputed fresh every turn from the
/// snapshot. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Situation {
    /// Standing on an own lighthouse holding the key.
    AtOwnWithKey,
    /// Standing on a neutral or enemy lighthouse.
    AtForeign,
    /// Everywhere else (including own lighthouses without the key).
    Navigating,
}

pub fn classify(board: &Board, ctx: &TurnContext) -> Situation {
    match board.lighthouse_at(ctx.position) {
        Some(lh) if lh.owner == ctx.player_id && ctx.have_key => Situation::AtOwnWithKey,
        Some(lh) if lh.owner != ctx.player_id => Situation::AtForeign,
        _ => Situation::Navigating,
    }
}

/// Bounded, order-preserving memory of the bot's last visited cells.
#[derive(Debug, Default)]
pub struct RecentPositions {
    buf: VecDeque<Position>,
}

impl RecentPositions {
    pub fn push(&mut self, pos: Position) {
        self.buf.push_back(pos);
        while self.buf.len() > RECENT_MEMORY_CAPACITY {
            self.buf.pop_front();
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.buf.contains(&pos)
    }
}

/// The decision engine. Carries only the recent-position memory and an
/// injectable random source; everything else is derived per turn from
/// the board.
pub struct DecisionEngine<R: Rng = StdRng> {
    rng: R,
    memory: RecentPositions,
}

impl DecisionEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for DecisionEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DecisionEngine<R> {
    /// Build an engine around an explicit random source. Tests pass a
    /// seeded rng to pin down the fallback paths.
    pub fn with_rng(rng: R) -> Self {
        DecisionEngine {
            rng,
            memory: RecentPositions::default(),
        }
    }

    /// Decide the action for one turn. Always returns exactly one
    /// action; Move and Attack destinations are always in bounds.
    pub fn decide(&mut self, board: &Board, ctx: &TurnContext) -> Action {
        self.memory.push(ctx.position);

        match classify(board, ctx) {
            Situation::AtOwnWithKey => {
                if let Some(target) =
                    geometry::select_connection(board, ctx.position, ctx.player_id, &mut self.rng)
                {
                    return Action::Connect(target);
                }
                // Nothing to connect: stay and accumulate.
                Action::Pass(ctx.position)
            }
            Situation::AtForeign if ctx.energy > 0 => Action::Attack {
                position: ctx.position,
                energy: attack_energy(ctx.energy, board, ctx.position),
            },
            _ => {
                // Own lighthouse without the key: wait for it rather
                // than wandering off.
                if board
                    .lighthouse_at(ctx.position)
                    .is_some_and(|lh| lh.owner == ctx.player_id)
                {
                    return Action::Pass(ctx.position);
                }
                self.navigate(board, ctx)
            }
        }
    }

    /// Move toward the scorer's target, falling back to any in-bounds
    /// neighbor not recently visited, and finally to Pass when boxed in.
    fn navigate(&mut self, board: &Board, ctx: &TurnContext) -> Action {
        let step = scorer::best_target(board, ctx.position, ctx.energy, ctx.have_key, ctx.player_id)
            .map(|target| navigator::next_step(ctx.position, target))
            .unwrap_or((0, 0));

        let dest = ctx.position.offset(step.0, step.1);
        if step != (0, 0) && dest.in_bounds() && !self.memory.contains(dest) {
            return Action::Move(dest);
        }

        let mut moves = MOVES;
        moves.shuffle(&mut self.rng);
        for (dx, dy) in moves {
            let neighbor = ctx.position.offset(dx, dy);
            if neighbor.in_bounds() && !self.memory.contains(neighbor) {
                return Action::Move(neighbor);
            }
        }

        Action::Pass(ctx.position)
    }
}

/// Energy to spend attacking the lighthouse under the bot: 80% of the
/// reserve, or exactly enough to beat the defense plus a margin when
/// that costs more, never exceeding the reserve.
fn attack_energy(bot_energy: i32, board: &Board, position: Position) -> i32 {
    let defense = board
        .lighthouse_at(position)
        .map(|lh| lh.energy)
        .unwrap_or(0);
    let fraction = bot_energy * ATTACK_NUM / ATTACK_DEN;
    let decisive = (defense + ATTACK_MARGIN).min(bot_energy);
    fraction.max(decisive).min(bot_energy)
}
