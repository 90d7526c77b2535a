// Join loop: register with the game server, retrying forever.

use std::time::Duration;

use crate::metrics;
use crate::protocol::{NewPlayer, PlayerId};

/// Faults from a single join attempt. Never fatal: the loop absorbs
/// them and retries.
#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    #[error("join request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("game server rejected join with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// One join attempt against the game server.
async fn try_join(
    client: &reqwest::Client,
    game_server: &str,
    player: &NewPlayer,
) -> Result<PlayerId, JoinError> {
    let url = format!("http://{game_server}/join");
    let response = client.post(&url).json(player).send().await?;
    if !response.status().is_success() {
        return Err(JoinError::Rejected(response.status()));
    }
    Ok(response.json::<PlayerId>().await?)
}

/// Join the game, retrying every second until the server accepts.
/// Each attempt is bounded by a one-second deadline. Returns the
/// player id the bot plays as.
pub async fn wait_to_join(game_server: &str, bot_name: &str, callback_addr: &str) -> i32 {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .expect("failed to build HTTP client");

    let player = NewPlayer {
        name: bot_name.to_string(),
        server_address: callback_addr.to_string(),
    };

    loop {
        metrics::JOIN_ATTEMPTS_TOTAL.inc();
        match try_join(&client, game_server, &player).await {
            Ok(id) => {
                tracing::info!(player_id = id.player_id, "joined game");
                return id.player_id;
            }
            Err(e) => {
                tracing::warn!("could not join game: {e}");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}
