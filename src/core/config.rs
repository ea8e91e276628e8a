//! Game configuration.
//!
//! All tunable numbers of the economy live in [`GameConfig`]. The defaults
//! reproduce the standard ruleset; variants (bigger boards, tougher heroes)
//! are expressed with the `with_*` builders or loaded from JSON.
//!
//! ```
//! use elemental_battlegrounds::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_base_board_limit(7)
//!     .with_hero_health(40);
//!
//! assert_eq!(config.base_board_limit, 7);
//! assert_eq!(config.gold_for_round(1), 3);
//! assert_eq!(config.gold_for_round(20), 10);
//! ```

use serde::{Deserialize, Serialize};

/// Economy, board and tier tuning for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gold on round 1. Each later round grants one more.
    pub starting_gold: i32,

    /// Per-round gold never exceeds this.
    pub gold_cap: i32,

    /// Number of offers in a shop.
    pub shop_size: usize,

    /// Board slots before `BoardLimitBonus` units.
    pub base_board_limit: usize,

    /// Starting and maximum hero health.
    pub hero_health: i32,

    pub reroll_cost: i32,

    /// Gold refunded when a unit is sold.
    pub sell_value: i32,

    /// Highest unit tier; fusion results never exceed it.
    pub max_tier: u8,

    /// Upper bound on purchases an AI makes in one shop phase.
    pub max_ai_purchases: usize,

    /// Number of notifications kept in the message log.
    pub message_log_len: usize,

    /// Drained units needed before an alchemy extraction.
    pub alchemy_slots: usize,

    /// Tier alchemy draws its result from.
    pub alchemy_tier: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_gold: 3,
            gold_cap: 10,
            shop_size: 5,
            base_board_limit: 5,
            hero_health: 20,
            reroll_cost: 1,
            sell_value: 1,
            max_tier: 6,
            max_ai_purchases: 10,
            message_log_len: 10,
            alchemy_slots: 5,
            alchemy_tier: 5,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_starting_gold(mut self, gold: i32) -> Self {
        self.starting_gold = gold;
        self
    }

    #[must_use]
    pub fn with_gold_cap(mut self, cap: i32) -> Self {
        self.gold_cap = cap;
        self
    }

    #[must_use]
    pub fn with_shop_size(mut self, size: usize) -> Self {
        self.shop_size = size;
        self
    }

    #[must_use]
    pub fn with_base_board_limit(mut self, limit: usize) -> Self {
        self.base_board_limit = limit;
        self
    }

    #[must_use]
    pub fn with_hero_health(mut self, health: i32) -> Self {
        self.hero_health = health;
        self
    }

    #[must_use]
    pub fn with_reroll_cost(mut self, cost: i32) -> Self {
        self.reroll_cost = cost;
        self
    }

    #[must_use]
    pub fn with_sell_value(mut self, value: i32) -> Self {
        self.sell_value = value;
        self
    }

    #[must_use]
    pub fn with_max_tier(mut self, tier: u8) -> Self {
        self.max_tier = tier;
        self
    }

    #[must_use]
    pub fn with_alchemy_slots(mut self, slots: usize) -> Self {
        self.alchemy_slots = slots.max(1);
        self
    }

    /// Parse a config from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Gold granted at the start of `round` (1-based).
    #[must_use]
    pub fn gold_for_round(&self, round: u32) -> i32 {
        let bonus = i32::try_from(round.saturating_sub(1)).unwrap_or(i32::MAX);
        self.starting_gold.saturating_add(bonus).min(self.gold_cap)
    }

    /// Highest tier offered in the shop on `round` (1-based).
    ///
    /// Rises by one tier every two and a half rounds.
    #[must_use]
    pub fn shop_tier(&self, round: u32) -> u8 {
        let tier = round.saturating_sub(1) * 2 / 5 + 1;
        let tier = u8::try_from(tier).unwrap_or(u8::MAX);
        tier.min(self.max_tier)
    }
}
