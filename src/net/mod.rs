//! Network relay messages exchanged between peers in a multiplayer room.

pub mod messages;

use thiserror::Error;

pub use messages::{ActionData, BattleStart, Envelope, GameStateData, RelayAction, RelayMessage};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed relay message: {0}")]
    Json(#[from] serde_json::Error),
}
