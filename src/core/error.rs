//! Error types for rejected actions and catalog registration.
//!
//! A rejected action leaves the game untouched; the `Display` text is meant
//! to be shown to the player as a notification.

use thiserror::Error;

use super::player::PlayerId;

/// Why a player action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not enough gold (have {have}, need {need})")]
    NotEnoughGold { have: i32, need: i32 },

    #[error("board is full ({limit} units)")]
    BoardFull { limit: usize },

    #[error("no shop offer in slot {0}")]
    InvalidShopSlot(usize),

    #[error("no unit in board slot {0}")]
    InvalidBoardSlot(usize),

    #[error("a unit cannot be fused with itself")]
    SameSlot,

    #[error("{first} and {second} cannot be fused")]
    FusionNotAllowed { first: String, second: String },

    #[error("unknown unit {0}")]
    UnknownUnit(String),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} has been eliminated")]
    PlayerEliminated(PlayerId),

    #[error("{0} already ended their turn")]
    TurnAlreadyEnded(PlayerId),

    #[error("a game needs between 2 and 255 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("the game is over")]
    GameOver,

    #[error("not every player has ended their turn")]
    WrongPhase,

    #[error("all {slots} alchemy slots are filled")]
    AlchemyFull { slots: usize },

    #[error("alchemy needs {need} drained units, has {have}")]
    AlchemyNotReady { have: usize, need: usize },
}

/// Why a unit definition was refused by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unit {0} is already registered")]
    Duplicate(String),

    #[error("unit definition has an empty name")]
    EmptyName,

    #[error("unit {name} has invalid tier {tier}")]
    InvalidTier { name: String, tier: u8 },

    #[error("unit {name} has invalid cost {cost}")]
    InvalidCost { name: String, cost: i32 },

    #[error("unit {name} has invalid stats {attack}/{health}")]
    InvalidStats { name: String, attack: i32, health: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::NotEnoughGold { have: 2, need: 3 };
        assert_eq!(err.to_string(), "not enough gold (have 2, need 3)");

        let err = GameError::FusionNotAllowed { first: "Fire".into(), second: "Gear".into() };
        assert_eq!(err.to_string(), "Fire and Gear cannot be fused");

        assert_eq!(GameError::PlayerEliminated(PlayerId::new(1)).to_string(), "Player 1 has been eliminated");

        let err = GameError::AlchemyNotReady { have: 2, need: 5 };
        assert_eq!(err.to_string(), "alchemy needs 5 drained units, has 2");
    }
}
