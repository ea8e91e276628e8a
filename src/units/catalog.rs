//! The unit catalog: every unit type a game knows about.
//!
//! The catalog is an explicit value owned by the game. Definitions enter it
//! only through [`Catalog::register`], either from the built-in roster, from
//! custom content, or when the fusion resolver synthesizes a new result.
//! Registration order is kept so that random picks over the catalog are
//! reproducible for a given seed.

use rustc_hash::FxHashMap;

use crate::core::CatalogError;

use super::definition::UnitDefinition;
use super::instance::UnitInstance;

/// Registry of unit definitions keyed by name.
///
/// ## Example
///
/// ```
/// use elemental_battlegrounds::units::{Catalog, UnitClass, UnitDefinition};
///
/// let mut catalog = Catalog::new();
/// catalog.register(UnitDefinition::new("Fire", UnitClass::Elemental, 3, 2)).unwrap();
///
/// let fire = catalog.instantiate("Fire").unwrap();
/// assert_eq!(fire.attack, 3);
/// assert!(catalog.register(UnitDefinition::new("Fire", UnitClass::Elemental, 1, 1)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    units: FxHashMap<String, UnitDefinition>,
    order: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition.
    ///
    /// Fails on duplicate names and on definitions that break the catalog
    /// invariants (tier and cost at least 1, health above 0, attack not
    /// negative).
    pub fn register(&mut self, def: UnitDefinition) -> Result<(), CatalogError> {
        if def.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if def.tier == 0 {
            return Err(CatalogError::InvalidTier { name: def.name, tier: def.tier });
        }
        if def.cost < 1 {
            return Err(CatalogError::InvalidCost { name: def.name, cost: def.cost });
        }
        if def.attack < 0 || def.health <= 0 {
            return Err(CatalogError::InvalidStats {
                name: def.name,
                attack: def.attack,
                health: def.health,
            });
        }
        if self.units.contains_key(&def.name) {
            return Err(CatalogError::Duplicate(def.name));
        }

        self.order.push(def.name.clone());
        self.units.insert(def.name.clone(), def);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UnitDefinition> {
        self.units.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Fresh instance of a unit, `None` for unknown names.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<UnitInstance> {
        self.get(name).map(UnitInstance::from_definition)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.order.iter().filter_map(|name| self.units.get(name))
    }

    /// Definitions matching a predicate, in registration order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &UnitDefinition>
    where
        F: Fn(&UnitDefinition) -> bool,
    {
        self.iter().filter(move |def| predicate(def))
    }

    /// Names of all units of exactly `tier`.
    #[must_use]
    pub fn names_at_tier(&self, tier: u8) -> Vec<&str> {
        self.find(|def| def.tier == tier).map(|def| def.name.as_str()).collect()
    }

    /// Names of all units of `tier` or lower, the shop pool for that tier.
    #[must_use]
    pub fn names_up_to_tier(&self, tier: u8) -> Vec<&str> {
        self.find(|def| def.tier <= tier).map(|def| def.name.as_str()).collect()
    }

    /// Highest tier of any registered unit, 0 for an empty catalog.
    #[must_use]
    pub fn max_tier(&self) -> u8 {
        self.units.values().map(|def| def.tier).max().unwrap_or(0)
    }
}
