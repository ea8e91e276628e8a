//! Unit instances: the mutable copies that sit on boards and fight.

use serde::{Deserialize, Serialize};

use super::ability::Modifiers;
use super::definition::{Elements, UnitClass, UnitDefinition};

/// A unit on a board.
///
/// Created from a definition with [`UnitInstance::from_definition`]. Attack
/// and health change during combat; modifiers are a private copy, so a
/// battle-start shield on one board never leaks into another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInstance {
    pub name: String,
    pub class: UnitClass,
    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    #[serde(default)]
    pub elements: Elements,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl UnitInstance {
    #[must_use]
    pub fn from_definition(def: &UnitDefinition) -> Self {
        Self {
            name: def.name.clone(),
            class: def.class,
            attack: def.attack,
            health: def.health,
            max_health: def.health,
            elements: def.elements.clone(),
            modifiers: def.modifiers,
        }
    }

    /// A bare unit without a definition, mostly for battle setups.
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
            max_health: health,
            elements,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Hero damage this unit deals if it survives a battle.
    #[must_use]
    pub fn hero_damage(&self) -> i32 {
        let depth = i32::try_from(self.elements.len().saturating_sub(1)).unwrap_or(i32::MAX);
        depth.saturating_add(self.modifiers.survivor_damage_bonus)
    }
}

impl std::fmt::Display for UnitInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.health)
    }
}
