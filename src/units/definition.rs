//! Unit definitions: the static stats of a unit type.
//!
//! A `UnitDefinition` is immutable once registered in the catalog.
//! Per-game state (damage taken, combat buffs) lives in `UnitInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ability::{Ability, Modifiers};

/// Unit class. Only units of the same class can be fused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    Elemental,
    Tech,
}

impl UnitClass {
    /// Parse the class names used in custom unit data.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Elemental" | "elemental" => Some(UnitClass::Elemental),
            "Tech" | "tech" => Some(UnitClass::Tech),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitClass::Elemental => write!(f, "Elemental"),
            UnitClass::Tech => write!(f, "Tech"),
        }
    }
}

/// Constituent elements of a unit; most units have four or fewer.
pub type Elements = SmallVec<[String; 4]>;

/// Static unit definition.
///
/// ## Example
///
/// ```
/// use elemental_battlegrounds::units::{Ability, UnitClass, UnitDefinition};
///
/// let lava = UnitDefinition::new("Lava", UnitClass::Elemental, 6, 3)
///     .with_tier(2)
///     .with_elements(&["Fire", "Fire"])
///     .with_ability(Ability::Burn(1));
///
/// assert_eq!(lava.fusion_depth(), 1);
/// assert_eq!(lava.modifiers.burn, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub name: String,
    pub class: UnitClass,
    pub attack: i32,
    pub health: i32,
    /// Power bracket, 1 (lowest) up to the configured cap.
    pub tier: u8,
    /// Shop price in gold.
    pub cost: i32,
    pub emoji: String,
    /// Elements this unit was fused from, in order. A base unit lists itself.
    pub elements: Elements,
    pub abilities: SmallVec<[Ability; 2]>,
    /// `abilities` folded into one record.
    pub modifiers: Modifiers,
}

impl UnitDefinition {
    /// A tier 1, cost 3 unit made of a single element named after itself.
    #[must_use]
    pub fn new(name: impl Into<String>, class: UnitClass, attack: i32, health: i32) -> Self {
        let name = name.into();
        let mut elements = Elements::new();
        elements.push(name.clone());
        Self {
            name,
            class,
            attack,
            health,
            tier: 1,
            cost: 3,
            emoji: String::new(),
            elements,
            abilities: SmallVec::new(),
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Replace the element list.
    #[must_use]
    pub fn with_elements(mut self, elements: &[&str]) -> Self {
        self.elements = elements.iter().map(|e| (*e).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        ability.apply(&mut self.modifiers);
        self.abilities.push(ability);
        self
    }

    /// Replace all abilities with the ones described by `modifiers`.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.abilities = modifiers.to_abilities().into_iter().collect();
        self.modifiers = modifiers;
        self
    }

    /// How many fusions deep this unit is; also its base hero damage.
    #[must_use]
    pub fn fusion_depth(&self) -> usize {
        self.elements.len().saturating_sub(1)
    }

    /// Emoji if present, otherwise the name.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.emoji.is_empty() {
            &self.name
        } else {
            &self.emoji
        }
    }
}
