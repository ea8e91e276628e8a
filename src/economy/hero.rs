//! Hero state: the persistent health pool and the player's gold.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// A hero's gold and health.
///
/// Health stays within `0..=max_health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroState {
    pub gold: i32,
    pub health: i32,
    pub max_health: i32,
}

impl HeroState {
    /// A hero at full health.
    #[must_use]
    pub fn new(max_health: i32, gold: i32) -> Self {
        Self {
            gold,
            health: max_health,
            max_health,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Heal, never above `max_health`.
    pub fn heal(&mut self, amount: i32) {
        if amount > 0 {
            self.health = self.health.saturating_add(amount).min(self.max_health);
        }
    }

    /// Take damage, never below zero.
    pub fn take_damage(&mut self, amount: i32) {
        if amount > 0 {
            self.health = self.health.saturating_sub(amount).max(0);
        }
    }

    /// Pay `cost` gold, or fail without paying.
    pub fn spend(&mut self, cost: i32) -> Result<(), GameError> {
        if self.gold < cost {
            return Err(GameError::NotEnoughGold {
                have: self.gold,
                need: cost,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        self.gold >= cost
    }
}
