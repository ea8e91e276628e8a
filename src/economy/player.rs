//! A seat at the table: hero, board, shop and relic.

use serde::{Deserialize, Serialize};

use crate::units::UnitInstance;

use super::board::Board;
use super::hero::HeroState;
use super::relic::Relic;
use super::shop::Shop;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub is_ai: bool,
    pub hero: HeroState,
    pub board: Board,
    pub shop: Shop,
    pub relic: Option<Relic>,
    /// Done shopping for the current round.
    pub turn_ended: bool,
    /// Drained units waiting for an alchemy extraction. Lost at end of turn.
    #[serde(default)]
    pub alchemy: Vec<UnitInstance>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, is_ai: bool, hero: HeroState, base_board_limit: usize) -> Self {
        Self {
            name: name.into(),
            is_ai,
            hero,
            board: Board::new(base_board_limit),
            shop: Shop::new(),
            relic: None,
            turn_ended: false,
            alchemy: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hero.is_alive()
    }
}

/// How a seat is filled when a game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSetup {
    pub name: String,
    pub is_ai: bool,
    /// Relic picked up front. AI seats without one get a random relic.
    pub relic: Option<Relic>,
}

impl PlayerSetup {
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_ai: false,
            relic: None,
        }
    }

    #[must_use]
    pub fn ai(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_ai: true,
            relic: None,
        }
    }

    #[must_use]
    pub fn with_relic(mut self, relic: Relic) -> Self {
        self.relic = Some(relic);
        self
    }
}
