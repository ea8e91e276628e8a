//! Player actions and the action history.
//!
//! Every change a player makes during the shop phase is a [`PlayerAction`].
//! Humans, the AI policy and remote peers all go through the same
//! `Game::apply_action` entry point, and each applied action is appended to
//! the history as an [`ActionRecord`].

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A shop-phase action. Slots are 0-based indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Buy the offer in a shop slot.
    Buy { slot: usize },
    /// Sell the unit in a board slot.
    Sell { slot: usize },
    /// Fuse two distinct board slots into one unit.
    Fuse { first: usize, second: usize },
    /// Move a board unit to the back of the line.
    MoveToBack { slot: usize },
    /// Pay to replace all shop offers.
    Reroll,
    /// Drain a board unit into the next free alchemy slot.
    AddToAlchemy { slot: usize },
    /// Turn a full set of alchemy slots into one high-tier unit.
    ExtractAlchemy,
    /// Done shopping for this round.
    EndTurn,
}

impl PlayerAction {
    /// Whether the action ends the player's shop phase.
    #[must_use]
    pub fn is_end_turn(&self) -> bool {
        matches!(self, PlayerAction::EndTurn)
    }
}

/// An applied action, with enough context to replay it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: PlayerAction,
    /// Round in which the action was applied.
    pub round: u32,
    /// Position in the whole game's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: PlayerAction, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
