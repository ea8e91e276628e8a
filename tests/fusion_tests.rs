//! Fusion resolver properties over the built-in catalog.
//!
//! Symmetry, the class gate and totality are checked for arbitrary pairs
//! and seeds; the remaining tests cover authored recipes and custom content.

use elemental_battlegrounds::core::GameRng;
use elemental_battlegrounds::fusion::{FusionResolver, RecipeBook};
use elemental_battlegrounds::units::{Catalog, CustomContent, CustomUnit, Modifiers};
use proptest::prelude::*;

const TIER_CAP: u8 = 6;

fn resolver(seed: u64) -> FusionResolver {
    FusionResolver::new(RecipeBook::builtin(), GameRng::new(seed), TIER_CAP)
}

fn pick(catalog: &Catalog, i: usize) -> String {
    let names: Vec<&str> = catalog.iter().map(|def| def.name.as_str()).collect();
    names[i % names.len()].to_string()
}

proptest! {
    /// A+B and B+A resolve to the same unit.
    #[test]
    fn test_fusion_symmetry(seed in any::<u64>(), i in 0usize..512, j in 0usize..512) {
        let mut catalog = Catalog::builtin();
        let (a, b) = (pick(&catalog, i), pick(&catalog, j));
        let mut resolver = resolver(seed);

        let ab = resolver.resolve(&mut catalog, &a, &b);
        let ba = resolver.resolve(&mut catalog, &b, &a);
        prop_assert_eq!(ab, ba);
    }

    /// Units of different classes never fuse.
    #[test]
    fn test_fusion_class_gate(seed in any::<u64>(), i in 0usize..512, j in 0usize..512) {
        let mut catalog = Catalog::builtin();
        let (a, b) = (pick(&catalog, i), pick(&catalog, j));
        let same_class = catalog.get(&a).unwrap().class == catalog.get(&b).unwrap().class;
        let result = resolver(seed).resolve(&mut catalog, &a, &b);
        prop_assert_eq!(result.is_some(), same_class);
    }

    /// Same-class fusions always produce a unit above both inputs, or a
    /// unit at the cap once the inputs are there.
    #[test]
    fn test_fusion_totality(seed in any::<u64>(), i in 0usize..512, j in 0usize..512) {
        let mut catalog = Catalog::builtin();
        let (a, b) = (pick(&catalog, i), pick(&catalog, j));
        let (da, db) = (catalog.get(&a).unwrap().clone(), catalog.get(&b).unwrap().clone());
        prop_assume!(da.class == db.class);

        let result = resolver(seed).resolve(&mut catalog, &a, &b);
        prop_assert!(result.is_some());
        let tier = catalog.get(&result.unwrap()).unwrap().tier;
        let top = da.tier.max(db.tier);
        if top >= TIER_CAP {
            prop_assert_eq!(tier, TIER_CAP);
        } else {
            prop_assert!(tier > top, "{} + {} gave tier {}", a, b, tier);
        }
    }

    /// The same seed resolves the same sequence of fusions the same way.
    #[test]
    fn test_fusion_deterministic(seed in any::<u64>(), pairs in prop::collection::vec((0usize..512, 0usize..512), 1..12)) {
        let mut cat_1 = Catalog::builtin();
        let mut cat_2 = Catalog::builtin();
        let mut res_1 = resolver(seed);
        let mut res_2 = resolver(seed);
        for (i, j) in pairs {
            let (a, b) = (pick(&cat_1, i), pick(&cat_1, j));
            prop_assert_eq!(res_1.resolve(&mut cat_1, &a, &b), res_2.resolve(&mut cat_2, &a, &b));
        }
    }
}

/// The authored recipe wins in both orders.
#[test]
fn test_basic_fusion_scenario() {
    let mut catalog = Catalog::builtin();
    let mut resolver = resolver(1);
    assert_eq!(resolver.resolve(&mut catalog, "Fire", "Water").as_deref(), Some("Steam"));
    assert_eq!(resolver.resolve(&mut catalog, "Water", "Fire").as_deref(), Some("Steam"));
    assert_eq!(resolver.resolve(&mut catalog, "Fire", "Fire").as_deref(), Some("Lava"));
}

/// Unknown names resolve to nothing.
#[test]
fn test_unknown_units() {
    let mut catalog = Catalog::builtin();
    assert_eq!(resolver(1).resolve(&mut catalog, "Fire", "Plasma"), None);
}

/// A custom recipe naming a new unit synthesizes it from its inputs.
#[test]
fn test_custom_recipe_synthesizes_result() {
    let mut catalog = Catalog::builtin();
    let mut recipes = RecipeBook::builtin();

    let mut content = CustomContent::default();
    content.units.insert(
        "Ember".into(),
        CustomUnit {
            class: "Elemental".into(),
            attack: 2,
            health: 1,
            emoji: "✨".into(),
            elements: Vec::new(),
            tier: None,
            cost: None,
            modifiers: Modifiers { burn: 1, ..Modifiers::default() },
        },
    );
    content.fusions.insert("Fire+Ember".into(), "Blaze".into());

    let report = catalog.load_custom(&mut recipes, &content);
    assert_eq!(report.units_added, 1);
    assert_eq!(report.fusions_added, 1);
    assert!(report.skipped.is_empty());

    let mut resolver = FusionResolver::new(recipes, GameRng::new(4), TIER_CAP);
    assert_eq!(resolver.resolve(&mut catalog, "Ember", "Fire").as_deref(), Some("Blaze"));

    let blaze = catalog.get("Blaze").unwrap();
    assert_eq!(blaze.tier, 2);
    assert_eq!(blaze.attack, 3 + 2);
    assert_eq!(blaze.health, 2 + 1);
    assert_eq!(blaze.elements.len(), 2);
    assert_eq!(blaze.fusion_depth(), 1);
}

/// A custom recipe replaces the authored one for the same pair.
#[test]
fn test_custom_recipe_overrides_builtin() {
    let mut catalog = Catalog::builtin();
    let mut recipes = RecipeBook::builtin();
    let mut content = CustomContent::default();
    content.fusions.insert("Water+Fire".into(), "Mist".into());
    catalog.load_custom(&mut recipes, &content);

    let mut resolver = FusionResolver::new(recipes, GameRng::new(4), TIER_CAP);
    assert_eq!(resolver.resolve(&mut catalog, "Fire", "Water").as_deref(), Some("Mist"));
}
