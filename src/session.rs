// Process-wide bot session: the assigned player id, the accumulated
// board, and the decision engine. One session per process; the HTTP
// layer serializes access through a mutex so concurrent turn calls
// cannot interleave engine state.

use rand::rngs::StdRng;
use rand::Rng;

use crate::engine::board::Board;
use crate::engine::decision::{DecisionEngine, TurnContext};
use crate::metrics;
use crate::protocol::{InitialState, NewAction, NewTurn, PlayerReady};

pub struct BotSession<R: Rng = StdRng> {
    pub player_id: i32,
    pub turn_count: u64,
    board: Board,
    engine: DecisionEngine<R>,
    initial_state: Option<InitialState>,
}

impl BotSession<StdRng> {
    pub fn new(player_id: i32) -> Self {
        Self::with_engine(player_id, DecisionEngine::new())
    }
}

impl<R: Rng> BotSession<R> {
    pub fn with_engine(player_id: i32, engine: DecisionEngine<R>) -> Self {
        BotSession {
            player_id,
            turn_count: 0,
            board: Board::new(),
            engine,
            initial_state: None,
        }
    }

    /// Store the initial board snapshot and warm-start the known
    /// lighthouse list from it.
    pub fn handle_initial_state(&mut self, state: InitialState) -> PlayerReady {
        for lh in &state.lighthouses {
            self.board.remember(lh.position);
        }
        tracing::info!(
            player_num = state.player_num,
            player_count = state.player_count,
            lighthouses = state.lighthouses.len(),
            "received initial state"
        );
        self.initial_state = Some(state);
        PlayerReady { ready: true }
    }

    /// Handle one turn: refresh the board from the snapshot, run the
    /// decision engine, and return the wire action.
    pub fn handle_turn(&mut self, turn: NewTurn) -> NewAction {
        self.turn_count += 1;

        let cells = turn.cell_energies();
        let lighthouses = turn.lighthouses.into_iter().map(Into::into).collect();
        self.board.update(lighthouses, cells);

        let ctx = TurnContext {
            position: turn.position,
            energy: turn.energy,
            have_key: turn.have_key,
            player_id: self.player_id,
        };
        let action = self.engine.decide(&self.board, &ctx);

        metrics::TURNS_TOTAL.with_label_values(&[action.kind()]).inc();
        tracing::info!(
            turn = self.turn_count,
            position = ?ctx.position,
            action = ?action,
            "turn decided"
        );

        NewAction::from(action)
    }

    pub fn initial_state(&self) -> Option<&InitialState> {
        self.initial_state.as_ref()
    }
}
