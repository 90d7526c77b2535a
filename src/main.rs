use std::sync::{Arc, Mutex};

use tower_http::trace::TraceLayer;

use lighthouse_bot::api;
use lighthouse_bot::config::Config;
use lighthouse_bot::join;
use lighthouse_bot::metrics;
use lighthouse_bot::session::BotSession;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lighthouse_bot=info,tower_http=warn".into()),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    metrics::register_metrics();

    // Blocks until the game server accepts us; retried every second.
    let player_id = join::wait_to_join(
        &config.game_server,
        &config.bot_name,
        &config.listen_addr,
    )
    .await;

    let session = Arc::new(Mutex::new(BotSession::new(player_id)));
    let app = api::router(session, config.verbose).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!(addr = %config.listen_addr, player_id, "lighthouse bot listening");
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}
