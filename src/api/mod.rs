// HTTP surface of the bot: the endpoints the game server calls each
// turn, plus health and metrics.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::metrics;
use crate::protocol::{InitialState, NewAction, NewTurn, PlayerReady};
use crate::session::BotSession;

/// Shared state handed to every handler. The mutex serializes turn
/// handling; the game server sends at most one in-flight turn per bot,
/// but the engine's memory must not be mutated concurrently even if it
/// misbehaves.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<BotSession>>,
    pub verbose: bool,
}

/// Build the bot's router.
pub fn router(session: Arc<Mutex<BotSession>>, verbose: bool) -> Router {
    let state = AppState { session, verbose };
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_text))
        .route("/api/join", post(join_ack))
        .route("/api/initial-state", post(initial_state))
        .route("/api/turn", post(turn))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "lighthouse-bot" }))
}

async fn metrics_text() -> String {
    metrics::gather_metrics()
}

/// The real join is the outbound call made at startup; a Join pushed
/// to the bot's own service is acknowledged and otherwise ignored.
async fn join_ack() -> Json<Value> {
    Json(json!({}))
}

async fn initial_state(
    State(state): State<AppState>,
    Json(initial): Json<InitialState>,
) -> Json<PlayerReady> {
    if state.verbose {
        tracing::debug!(message = ?serde_json::to_string(&initial).ok(), "initial state");
    }
    let ready = state
        .session
        .lock()
        .unwrap()
        .handle_initial_state(initial);
    Json(ready)
}

async fn turn(State(state): State<AppState>, Json(turn): Json<NewTurn>) -> Json<NewAction> {
    if state.verbose {
        tracing::debug!(message = ?serde_json::to_string(&turn).ok(), "turn snapshot");
    }

    let start = Instant::now();
    let action = state.session.lock().unwrap().handle_turn(turn);
    let elapsed = start.elapsed();

    metrics::DECISION_DURATION_SECONDS.observe(elapsed.as_secs_f64());
    tracing::debug!(elapsed_us = elapsed.as_micros() as u64, "turn handled");

    Json(action)
}
