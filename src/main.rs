//! Rally Pong entry point
//!
//! Headless demo: starts a game with the human paddle idle and logs the
//! match as the bot rallies, acting as a minimal view layer over the
//! snapshot stream. Real front ends subscribe to the same stream and feed
//! key edges through the input handle.

use tokio::sync::broadcast;

use rally_pong::driver::{Subscription, TICK_INTERVAL};
use rally_pong::{Score, State};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    log::info!("Rally Pong starting...");

    let (subscription, _input, states) = Subscription::start(TICK_INTERVAL);
    let view = tokio::spawn(render(states));

    match subscription.finished().await {
        Some(state) => announce(&state),
        None => log::warn!("game stopped before completion"),
    }
    let _ = view.await;
}

/// Minimal view layer: report every score change
async fn render(mut states: broadcast::Receiver<State>) {
    let mut score = Score::default();
    loop {
        match states.recv().await {
            Ok(state) => {
                if state.score != score {
                    score = state.score;
                    log::info!("score: {} - {}", score.player1, score.player2);
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Announce the winner and dump the terminal state
fn announce(state: &State) {
    let winner = if state.score.player1 > state.score.player2 {
        "Player 1"
    } else {
        "Player 2"
    };
    log::info!("{winner} wins");

    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize final state: {e}"),
    }
}
