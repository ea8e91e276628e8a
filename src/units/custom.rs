//! User-authored units and fusions.
//!
//! Custom content arrives as two JSON objects: units keyed by name, and
//! fusions keyed by `"A+B"`. Loading never fails as a whole; each entry
//! that cannot be used is skipped with a warning and listed in the
//! [`LoadReport`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fusion::RecipeBook;

use super::ability::Modifiers;
use super::catalog::Catalog;
use super::definition::{UnitClass, UnitDefinition};

/// A custom unit as stored by the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomUnit {
    pub class: String,
    pub attack: i32,
    pub health: i32,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub tier: Option<u8>,
    #[serde(default)]
    pub cost: Option<i32>,
    /// Ability keys (`startAttackBonus`, `burnEffect`, ...) sit next to the stats.
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

impl CustomUnit {
    /// Build a definition, `None` if the class is unknown.
    #[must_use]
    pub fn to_definition(&self, name: &str) -> Option<UnitDefinition> {
        let class = UnitClass::parse(&self.class)?;
        let mut def = UnitDefinition::new(name, class, self.attack, self.health)
            .with_tier(self.tier.unwrap_or(1))
            .with_cost(self.cost.unwrap_or(3))
            .with_emoji(self.emoji.clone())
            .with_modifiers(self.modifiers);
        if !self.elements.is_empty() {
            def.elements = self.elements.iter().cloned().collect();
        }
        Some(def)
    }
}

/// Custom units and fusions, in the shape they are persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomContent {
    pub units: BTreeMap<String, CustomUnit>,
    /// `"A+B"` to result name.
    pub fusions: BTreeMap<String, String>,
}

/// What `Catalog::load_custom` did with a batch of custom content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub units_added: usize,
    pub fusions_added: usize,
    /// One line per skipped entry.
    pub skipped: Vec<String>,
}

impl LoadReport {
    fn skip(&mut self, reason: String) {
        tracing::warn!(%reason, "skipping custom content entry");
        self.skipped.push(reason);
    }
}

/// Split a `"A+B"` fusion key. Whitespace around either name is ignored.
#[must_use]
pub fn parse_fusion_key(key: &str) -> Option<(&str, &str)> {
    let (a, b) = key.split_once('+')?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a, b))
}

impl Catalog {
    /// Register custom units, then add custom fusions to `recipes`.
    ///
    /// Existing definitions are never overwritten. A fusion is kept only if
    /// both ingredients exist and share a class; its result may be a name the
    /// catalog does not know yet, in which case the fusion resolver
    /// synthesizes it on first use.
    pub fn load_custom(&mut self, recipes: &mut RecipeBook, content: &CustomContent) -> LoadReport {
        let mut report = LoadReport::default();

        for (name, unit) in &content.units {
            let Some(def) = unit.to_definition(name) else {
                report.skip(format!("unit {name}: unknown class {}", unit.class));
                continue;
            };
            match self.register(def) {
                Ok(()) => report.units_added += 1,
                Err(err) => report.skip(format!("unit {name}: {err}")),
            }
        }

        for (key, result) in &content.fusions {
            let Some((a, b)) = parse_fusion_key(key) else {
                report.skip(format!("fusion {key}: malformed key"));
                continue;
            };
            let (Some(first), Some(second)) = (self.get(a), self.get(b)) else {
                report.skip(format!("fusion {key}: unknown ingredient"));
                continue;
            };
            if first.class != second.class {
                report.skip(format!("fusion {key}: {} and {} never fuse", first.class, second.class));
                continue;
            }
            if result.trim().is_empty() {
                report.skip(format!("fusion {key}: empty result"));
                continue;
            }
            recipes.insert(a, b, result.trim());
            report.fusions_added += 1;
        }

        tracing::debug!(
            units = report.units_added,
            fusions = report.fusions_added,
            skipped = report.skipped.len(),
            "loaded custom content"
        );
        report
    }
}
