//! Core types shared by every subsystem: players, RNG, configuration,
//! actions and errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{PlayerAction, ActionRecord};
pub use error::{GameError, CatalogError};
