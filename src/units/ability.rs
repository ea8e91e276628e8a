//! Unit abilities.
//!
//! Abilities are authored as a closed [`Ability`] enum and folded into a
//! flat [`Modifiers`] record when a definition is built. Combat and the
//! economy only ever read `Modifiers`, so no ability is looked up by name
//! at battle time.
//!
//! ```
//! use elemental_battlegrounds::units::{Ability, Modifiers};
//!
//! let mods = Modifiers::from_abilities(&[
//!     Ability::StartAttackBonus(1),
//!     Ability::Burn(2),
//!     Ability::StartAttackBonus(1),
//! ]);
//! assert_eq!(mods.start_attack_bonus, 2);
//! assert_eq!(mods.burn, 2);
//! ```

use serde::{Deserialize, Serialize};

/// A single passive ability with its magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Extra attack at the start of battle.
    StartAttackBonus(i32),
    /// Heals the owning hero after the battle.
    HealHero(i32),
    /// Damage to every enemy before combat.
    AoeDamage(i32),
    /// Reduces each hit this unit takes.
    ReduceIncomingAttack(i32),
    /// Reduces each hit taken by every ally, this unit included.
    ReduceIncomingAttackAll(i32),
    /// Extra damage to the opponent whenever this unit lands a hit.
    Burn(i32),
    /// Attack gained after defeating an enemy.
    GainAttackOnKill(i32),
    /// Health gained if the unit survives the battle.
    AfterBattleHealthBonus(i32),
    /// Extra hero damage if the unit survives the battle.
    SurvivorDamageBonus(i32),
    /// Extra board slots while the unit is on the board.
    BoardLimitBonus(i32),
}

impl Ability {
    /// Fold this ability into a modifier record.
    pub fn apply(self, mods: &mut Modifiers) {
        match self {
            Ability::StartAttackBonus(n) => mods.start_attack_bonus += n,
            Ability::HealHero(n) => mods.heal_hero += n,
            Ability::AoeDamage(n) => mods.aoe_damage += n,
            Ability::ReduceIncomingAttack(n) => mods.reduce_incoming_attack += n,
            Ability::ReduceIncomingAttackAll(n) => mods.reduce_incoming_attack_all += n,
            Ability::Burn(n) => mods.burn += n,
            Ability::GainAttackOnKill(n) => mods.gain_attack_on_kill += n,
            Ability::AfterBattleHealthBonus(n) => mods.after_battle_health_bonus += n,
            Ability::SurvivorDamageBonus(n) => mods.survivor_damage_bonus += n,
            Ability::BoardLimitBonus(n) => mods.board_limit_bonus += n,
        }
    }

    /// Short player-facing description.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Ability::StartAttackBonus(n) => format!("+{n} attack at battle start"),
            Ability::HealHero(n) => format!("heals your hero {n} after battle"),
            Ability::AoeDamage(n) => format!("deals {n} damage to all enemies at battle start"),
            Ability::ReduceIncomingAttack(n) => format!("takes {n} less damage per hit"),
            Ability::ReduceIncomingAttackAll(n) => format!("allies take {n} less damage per hit"),
            Ability::Burn(n) => format!("burns its target for {n}"),
            Ability::GainAttackOnKill(n) => format!("+{n} attack after a kill"),
            Ability::AfterBattleHealthBonus(n) => format!("+{n} health after surviving a battle"),
            Ability::SurvivorDamageBonus(n) => format!("+{n} hero damage when surviving"),
            Ability::BoardLimitBonus(n) => format!("+{n} board slots"),
        }
    }
}

/// Summed ability magnitudes, copied by value into every unit instance.
///
/// Field names serialize in camelCase, matching the keys used in custom
/// unit JSON (`startAttackBonus`, `burnEffect`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Modifiers {
    pub start_attack_bonus: i32,
    pub heal_hero: i32,
    pub aoe_damage: i32,
    pub reduce_incoming_attack: i32,
    pub reduce_incoming_attack_all: i32,
    #[serde(rename = "burnEffect")]
    pub burn: i32,
    pub gain_attack_on_kill: i32,
    pub after_battle_health_bonus: i32,
    pub survivor_damage_bonus: i32,
    pub board_limit_bonus: i32,
}

impl Modifiers {
    #[must_use]
    pub fn from_abilities(abilities: &[Ability]) -> Self {
        let mut mods = Self::default();
        for &ability in abilities {
            ability.apply(&mut mods);
        }
        mods
    }

    /// Expand back into one ability per non-zero field.
    #[must_use]
    pub fn to_abilities(&self) -> Vec<Ability> {
        let table: [(i32, fn(i32) -> Ability); 10] = [
            (self.start_attack_bonus, Ability::StartAttackBonus),
            (self.heal_hero, Ability::HealHero),
            (self.aoe_damage, Ability::AoeDamage),
            (self.reduce_incoming_attack, Ability::ReduceIncomingAttack),
            (self.reduce_incoming_attack_all, Ability::ReduceIncomingAttackAll),
            (self.burn, Ability::Burn),
            (self.gain_attack_on_kill, Ability::GainAttackOnKill),
            (self.after_battle_health_bonus, Ability::AfterBattleHealthBonus),
            (self.survivor_damage_bonus, Ability::SurvivorDamageBonus),
            (self.board_limit_bonus, Ability::BoardLimitBonus),
        ];
        table
            .into_iter()
            .filter(|(n, _)| *n != 0)
            .map(|(n, make)| make(n))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abilities_sum() {
        let mods = Modifiers::from_abilities(&[
            Ability::ReduceIncomingAttack(1),
            Ability::ReduceIncomingAttack(2),
            Ability::HealHero(1),
        ]);
        assert_eq!(mods.reduce_incoming_attack, 3);
        assert_eq!(mods.heal_hero, 1);
        assert_eq!(mods.burn, 0);
    }

    #[test]
    fn test_to_abilities_skips_zero() {
        let mods = Modifiers::from_abilities(&[Ability::Burn(1), Ability::BoardLimitBonus(1)]);
        assert_eq!(mods.to_abilities(), vec![Ability::Burn(1), Ability::BoardLimitBonus(1)]);
        assert!(Modifiers::default().to_abilities().is_empty());
        assert!(Modifiers::default().is_empty());
    }

    #[test]
    fn test_camel_case_keys() {
        let mods: Modifiers =
            serde_json::from_str(r#"{"startAttackBonus": 2, "burnEffect": 1}"#).unwrap();
        assert_eq!(mods.start_attack_bonus, 2);
        assert_eq!(mods.burn, 1);
        assert_eq!(mods.heal_hero, 0);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Ability::Burn(2).describe(), "burns its target for 2");
    }
}
