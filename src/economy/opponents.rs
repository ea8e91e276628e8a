//! Generated opponent boards.
//!
//! Used for the player left over when an odd number of heroes is alive,
//! and for practice battles. The board grows with the round, and from the
//! mid game on some slots are filled with fused units drawn from the tiers
//! the shop currently offers, weighted toward the higher ones.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng};
use crate::units::{Catalog, UnitClass, UnitDefinition, UnitInstance};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentStrategy {
    /// Elemental units only.
    ElementalMaster,
    /// Tech units only.
    TechTactician,
    /// Nothing but fused units after the first rounds.
    FusedLover,
    /// Mostly base units with the odd fused one.
    Balanced,
}

impl OpponentStrategy {
    pub const ALL: [OpponentStrategy; 4] = [
        OpponentStrategy::ElementalMaster,
        OpponentStrategy::TechTactician,
        OpponentStrategy::FusedLover,
        OpponentStrategy::Balanced,
    ];

    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    fn class(self) -> Option<UnitClass> {
        match self {
            OpponentStrategy::ElementalMaster => Some(UnitClass::Elemental),
            OpponentStrategy::TechTactician => Some(UnitClass::Tech),
            OpponentStrategy::FusedLover | OpponentStrategy::Balanced => None,
        }
    }

    /// Chance that a slot holds a fused unit on `round`.
    fn fused_chance(self, round: u32) -> f64 {
        match self {
            OpponentStrategy::ElementalMaster if round > 3 => 0.4,
            OpponentStrategy::TechTactician if round > 3 => 0.5,
            OpponentStrategy::FusedLover if round > 2 => 1.0,
            OpponentStrategy::Balanced if round > 3 => 0.3,
            _ => 0.0,
        }
    }

    /// Build a board for `round`, at most `limit` units long.
    ///
    /// Returns an empty board only if the catalog has nothing to offer.
    pub fn generate(
        self,
        catalog: &Catalog,
        config: &GameConfig,
        round: u32,
        limit: usize,
        rng: &mut GameRng,
    ) -> Vec<UnitInstance> {
        let count = board_size(round, limit);
        let top_tier = config.shop_tier(round).max(2);
        let class = self.class();
        let fits = |def: &UnitDefinition| class.map_or(true, |c| def.class == c);

        let base: Vec<&UnitDefinition> = catalog.find(|def| def.tier == 1 && fits(def)).collect();
        let fused: Vec<&UnitDefinition> = catalog
            .find(|def| (2..=top_tier).contains(&def.tier) && fits(def))
            .collect();
        let weights: Vec<f32> = fused.iter().map(|def| f32::from(def.tier)).collect();

        let chance = self.fused_chance(round);
        let mut board = Vec::with_capacity(count);
        for _ in 0..count {
            let want_fused = chance > 0.0 && rng.gen_bool(chance);
            let pick = if want_fused {
                rng.choose_weighted(&weights).and_then(|i| fused.get(i).copied())
            } else {
                None
            };
            let pick = pick.or_else(|| rng.choose(&base).copied());
            if let Some(def) = pick {
                board.push(UnitInstance::from_definition(def));
            }
        }

        tracing::debug!(strategy = ?self, round, units = board.len(), "generated opponent");
        board
    }
}

/// Units on a generated board: one more every two rounds, capped by `limit`.
#[must_use]
pub fn board_size(round: u32, limit: usize) -> usize {
    let grown = usize::try_from(round / 2 + 1).unwrap_or(usize::MAX);
    grown.max(1).min(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size() {
        assert_eq!(board_size(1, 5), 1);
        assert_eq!(board_size(2, 5), 2);
        assert_eq!(board_size(5, 5), 3);
        assert_eq!(board_size(30, 5), 5);
        assert_eq!(board_size(30, 7), 7);
    }

    #[test]
    fn test_class_strategies_stay_in_class() {
        let catalog = Catalog::builtin();
        let config = GameConfig::default();
        let mut rng = GameRng::new(8);
        for round in 1..12 {
            let board = OpponentStrategy::TechTactician.generate(&catalog, &config, round, 5, &mut rng);
            assert!(board.iter().all(|u| u.class == UnitClass::Tech));
            let board = OpponentStrategy::ElementalMaster.generate(&catalog, &config, round, 5, &mut rng);
            assert!(board.iter().all(|u| u.class == UnitClass::Elemental));
        }
    }

    #[test]
    fn test_early_rounds_use_base_units() {
        let catalog = Catalog::builtin();
        let config = GameConfig::default();
        let mut rng = GameRng::new(3);
        for strategy in OpponentStrategy::ALL {
            let board = strategy.generate(&catalog, &config, 2, 5, &mut rng);
            assert_eq!(board.len(), 2);
            assert!(board.iter().all(|u| catalog.get(&u.name).unwrap().tier == 1));
        }
    }

    #[test]
    fn test_fused_lover_respects_shop_tier() {
        let catalog = Catalog::builtin();
        let config = GameConfig::default();
        let mut rng = GameRng::new(21);
        let round = 6;
        let top = config.shop_tier(round).max(2);
        let board = OpponentStrategy::FusedLover.generate(&catalog, &config, round, 5, &mut rng);
        assert_eq!(board.len(), 4);
        for unit in &board {
            let tier = catalog.get(&unit.name).unwrap().tier;
            assert!((2..=top).contains(&tier));
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let catalog = Catalog::builtin();
        let config = GameConfig::default();
        let a = OpponentStrategy::Balanced.generate(&catalog, &config, 9, 5, &mut GameRng::new(2));
        let b = OpponentStrategy::Balanced.generate(&catalog, &config, 9, 5, &mut GameRng::new(2));
        assert_eq!(a, b);
    }
}
