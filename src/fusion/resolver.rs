//! Fusion resolution: what two units combine into.
//!
//! ## Resolution Order
//!
//! 1. Unknown names or different classes: no fusion.
//! 2. A unit fused with itself uses its self-upgrade recipe, or a random
//!    unit of the next tier.
//! 3. An authored pair recipe, looked up in either order.
//! 4. A procedural pick from the next tier, preferring units of the same
//!    thematic category as either input (or an ultimate unit). If the
//!    catalog has nothing at that tier, any unit of its highest tier.
//!
//! Results are remembered per unordered pair, so once `A+B` resolved to
//! something, both `A+B` and `B+A` keep resolving to it for the lifetime of
//! the resolver. If a result names a unit the catalog does not know (a
//! custom recipe pointing at a new unit), a definition is synthesized from
//! the two inputs and registered.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameRng, GameRngState};
use crate::units::{Catalog, UnitClass, UnitDefinition};

use super::category::Category;
use super::recipes::RecipeBook;

/// Resolves fusions against a catalog.
///
/// ## Example
///
/// ```
/// use elemental_battlegrounds::core::GameRng;
/// use elemental_battlegrounds::fusion::{FusionResolver, RecipeBook};
/// use elemental_battlegrounds::units::Catalog;
///
/// let mut catalog = Catalog::builtin();
/// let mut resolver = FusionResolver::new(RecipeBook::builtin(), GameRng::new(1), 6);
///
/// assert_eq!(resolver.resolve(&mut catalog, "Fire", "Water").as_deref(), Some("Steam"));
/// assert_eq!(resolver.resolve(&mut catalog, "Fire", "Gear"), None);
/// ```
#[derive(Clone, Debug)]
pub struct FusionResolver {
    recipes: RecipeBook,
    rng: GameRng,
    tier_cap: u8,
    memo: FxHashMap<(String, String), String>,
}

impl FusionResolver {
    #[must_use]
    pub fn new(recipes: RecipeBook, rng: GameRng, tier_cap: u8) -> Self {
        Self {
            recipes,
            rng,
            tier_cap: tier_cap.max(1),
            memo: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Mutable recipes, for loading custom fusions.
    ///
    /// Pairs that already resolved keep their remembered result.
    pub fn recipes_mut(&mut self) -> &mut RecipeBook {
        &mut self.recipes
    }

    #[must_use]
    pub fn tier_cap(&self) -> u8 {
        self.tier_cap
    }

    /// Position of the procedural-pick stream. Remembered pairs are not
    /// part of it.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Whether `a` and `b` may be fused at all.
    #[must_use]
    pub fn can_fuse(catalog: &Catalog, a: &str, b: &str) -> bool {
        match (catalog.get(a), catalog.get(b)) {
            (Some(a), Some(b)) => a.class == b.class,
            _ => false,
        }
    }

    /// Name of the unit `a` and `b` fuse into.
    ///
    /// `None` if either name is unknown or the classes differ. The result is
    /// always registered in `catalog` when this returns `Some`.
    pub fn resolve(&mut self, catalog: &mut Catalog, a: &str, b: &str) -> Option<String> {
        let (class_a, class_b) = match (catalog.get(a), catalog.get(b)) {
            (Some(da), Some(db)) => (da.class, db.class),
            _ => {
                tracing::warn!(first = a, second = b, "fusion with unknown unit");
                return None;
            }
        };
        if class_a != class_b {
            return None;
        }

        let key = memo_key(a, b);
        if let Some(result) = self.memo.get(&key) {
            return Some(result.clone());
        }

        let result = if a == b {
            match self.recipes.upgrade(a) {
                Some(result) => result.to_string(),
                None => self.generic_upgrade(catalog, a)?,
            }
        } else {
            match self.recipes.pair(a, b) {
                Some(result) => result.to_string(),
                None => self.procedural(catalog, a, b)?,
            }
        };

        if !catalog.contains(&result) {
            let synthesized = self.synthesize(catalog, &result, a, b)?;
            if let Err(err) = catalog.register(synthesized) {
                tracing::warn!(%err, "could not register synthesized fusion result");
                return None;
            }
        }

        tracing::debug!(first = a, second = b, result = %result, "fusion resolved");
        self.memo.insert(key, result.clone());
        Some(result)
    }

    /// A random unit one tier above `name`, ignoring categories.
    fn generic_upgrade(&mut self, catalog: &Catalog, name: &str) -> Option<String> {
        let tier = catalog.get(name)?.tier;
        let target = self.target_tier(tier, tier);
        let candidates = self.tier_or_top(catalog, target);
        match self.rng.choose(&candidates) {
            Some(pick) => Some((*pick).to_string()),
            None => Some(name.to_string()),
        }
    }

    /// Tier-based pick for a pair without a recipe.
    ///
    /// Categories only narrow the pick at the target tier itself. When that
    /// tier is empty the pick is uniform over the highest populated tier.
    fn procedural(&mut self, catalog: &Catalog, a: &str, b: &str) -> Option<String> {
        let tier_a = catalog.get(a)?.tier;
        let tier_b = catalog.get(b)?.tier;
        let target = self.target_tier(tier_a, tier_b);

        let at_tier = catalog.names_at_tier(target);
        if at_tier.is_empty() {
            let top = catalog.names_at_tier(catalog.max_tier().min(self.tier_cap));
            return self.rng.choose(&top).map(|pick| (*pick).to_string());
        }

        let (cat_a, cat_b) = (Category::of(a), Category::of(b));
        let themed: Vec<&str> = at_tier
            .iter()
            .copied()
            .filter(|name| Category::of(name).suits(cat_a, cat_b))
            .collect();

        let pool = if themed.is_empty() { &at_tier } else { &themed };
        self.rng.choose(pool).map(|pick| (*pick).to_string())
    }

    fn target_tier(&self, tier_a: u8, tier_b: u8) -> u8 {
        tier_a.max(tier_b).saturating_add(1).min(self.tier_cap)
    }

    /// Units at `tier`, or at the highest populated tier if there are none.
    fn tier_or_top<'c>(&self, catalog: &'c Catalog, tier: u8) -> Vec<&'c str> {
        let at_tier = catalog.names_at_tier(tier);
        if !at_tier.is_empty() {
            return at_tier;
        }
        catalog.names_at_tier(catalog.max_tier().min(self.tier_cap))
    }

    /// Definition for a result name the catalog has never seen.
    fn synthesize(&self, catalog: &Catalog, name: &str, a: &str, b: &str) -> Option<UnitDefinition> {
        let da = catalog.get(a)?;
        let db = catalog.get(b)?;

        let class = if da.class != db.class && da.class == UnitClass::Tech {
            db.class
        } else {
            da.class
        };
        let elements: SmallVec<[String; 4]> =
            da.elements.iter().chain(db.elements.iter()).cloned().collect();

        let mut def = UnitDefinition::new(
            name,
            class,
            da.attack.saturating_add(db.attack),
            da.health.saturating_add(db.health),
        )
            .with_tier(self.target_tier(da.tier, db.tier))
            .with_cost(da.cost.max(db.cost))
            .with_emoji(format!("{}{}", da.emoji, db.emoji));
        def.elements = elements;

        tracing::debug!(name, first = a, second = b, "synthesized fusion result");
        Some(def)
    }
}

fn memo_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
