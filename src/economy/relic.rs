//! Relics: hero-wide effects chosen at the start of a game.

use serde::{Deserialize, Serialize};

use crate::battle::HeroHooks;
use crate::core::GameRng;
use crate::units::UnitInstance;

use super::hero::HeroState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relic {
    /// +1 attack to every unit at battle start.
    Strength,
    /// Heals the hero 1 at the start of each round.
    Vitality,
    /// +1 health to every unit at battle start.
    Fortitude,
    /// +1 gold at the start of each round.
    Prosperity,
}

impl Relic {
    pub const ALL: [Relic; 4] = [Relic::Strength, Relic::Vitality, Relic::Fortitude, Relic::Prosperity];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Relic::Strength => "Relic of Strength",
            Relic::Vitality => "Relic of Vitality",
            Relic::Fortitude => "Relic of Fortitude",
            Relic::Prosperity => "Relic of Prosperity",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Relic::Strength => "💪",
            Relic::Vitality => "❤️",
            Relic::Fortitude => "🛡️",
            Relic::Prosperity => "💰",
        }
    }

    /// A uniformly random relic, used for AI players.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }
}

impl HeroHooks for Relic {
    fn battle_start(&self, units: &mut [UnitInstance]) {
        match self {
            Relic::Strength => {
                for unit in units {
                    unit.attack = unit.attack.saturating_add(1);
                }
            }
            Relic::Fortitude => {
                for unit in units {
                    unit.health = unit.health.saturating_add(1);
                    unit.max_health = unit.max_health.max(unit.health);
                }
            }
            Relic::Vitality | Relic::Prosperity => {}
        }
    }

    fn round_start(&self, hero: &mut HeroState) {
        match self {
            Relic::Vitality => hero.heal(1),
            Relic::Prosperity => hero.gold = hero.gold.saturating_add(1),
            Relic::Strength | Relic::Fortitude => {}
        }
    }
}

impl std::fmt::Display for Relic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitClass;

    fn board() -> Vec<UnitInstance> {
        vec![
            UnitInstance::new("Fire", UnitClass::Elemental, 3, 2),
            UnitInstance::new("Gear", UnitClass::Tech, 3, 3),
        ]
    }

    #[test]
    fn test_strength_and_fortitude() {
        let mut units = board();
        Relic::Strength.battle_start(&mut units);
        assert_eq!(units[0].attack, 4);
        assert_eq!(units[1].attack, 4);

        let mut units = board();
        Relic::Fortitude.battle_start(&mut units);
        assert_eq!(units[0].health, 3);
        assert_eq!(units[0].max_health, 3);
    }

    #[test]
    fn test_stat_buffs_saturate() {
        let mut units = vec![UnitInstance::new("Titan", UnitClass::Elemental, i32::MAX, i32::MAX)];
        Relic::Strength.battle_start(&mut units);
        Relic::Fortitude.battle_start(&mut units);
        assert_eq!(units[0].attack, i32::MAX);
        assert_eq!(units[0].health, i32::MAX);

        let mut hero = HeroState::new(20, i32::MAX);
        Relic::Prosperity.round_start(&mut hero);
        assert_eq!(hero.gold, i32::MAX);
    }

    #[test]
    fn test_round_start_relics() {
        let mut hero = HeroState::new(20, 3);
        hero.take_damage(5);
        Relic::Vitality.round_start(&mut hero);
        assert_eq!(hero.health, 16);

        Relic::Prosperity.round_start(&mut hero);
        assert_eq!(hero.gold, 4);

        let mut full = HeroState::new(20, 3);
        Relic::Vitality.round_start(&mut full);
        assert_eq!(full.health, 20);
    }

    #[test]
    fn test_random_is_deterministic() {
        let picks: Vec<_> = (0..5).map(|_| Relic::random(&mut GameRng::new(4))).collect();
        assert!(picks.windows(2).all(|w| w[0] == w[1]));
    }
}
