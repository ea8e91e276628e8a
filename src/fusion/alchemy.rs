//! Alchemy: a full set of drained units distilled into one high-tier unit.
//!
//! The inputs do not influence the result. The pick is drawn from a fixed
//! tier, preferring units outside every elemental family (neutral or
//! ultimate ones).

use crate::core::GameRng;
use crate::units::Catalog;

use super::category::Category;

/// Name of the unit an alchemy extraction yields.
///
/// Draws uniformly from the units at `tier` whose category is neutral or
/// ultimate, or from every unit at `tier` when there are none. A catalog
/// with nothing at `tier` yields a uniform pick from its highest tier.
/// `None` only for an empty catalog.
///
/// ```
/// use elemental_battlegrounds::core::GameRng;
/// use elemental_battlegrounds::fusion::alchemy_result;
/// use elemental_battlegrounds::units::Catalog;
///
/// let catalog = Catalog::builtin();
/// let result = alchemy_result(&catalog, 5, &mut GameRng::new(3));
/// assert_eq!(result.as_deref(), Some("Elemental Avatar"));
/// ```
pub fn alchemy_result(catalog: &Catalog, tier: u8, rng: &mut GameRng) -> Option<String> {
    let mut candidates = catalog.names_at_tier(tier);
    if candidates.is_empty() {
        candidates = catalog.names_at_tier(catalog.max_tier());
        return rng.choose(&candidates).map(|pick| (*pick).to_string());
    }

    let unaligned: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|name| matches!(Category::of(name), Category::Neutral | Category::Ultimate))
        .collect();
    let pool = if unaligned.is_empty() { &candidates } else { &unaligned };
    rng.choose(pool).map(|pick| (*pick).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{UnitClass, UnitDefinition};

    fn catalog(defs: &[(&str, u8)]) -> Catalog {
        let mut catalog = Catalog::new();
        for (name, tier) in defs {
            catalog
                .register(UnitDefinition::new(*name, UnitClass::Elemental, 5, 5).with_tier(*tier))
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_prefers_unaligned_units() {
        let catalog = catalog(&[("Phoenix", 5), ("Leviathan", 5), ("Starseed", 5), ("Genesis Core", 5)]);
        for seed in 0..20 {
            let result = alchemy_result(&catalog, 5, &mut GameRng::new(seed)).unwrap();
            assert!(result == "Starseed" || result == "Genesis Core", "{result}");
        }
    }

    #[test]
    fn test_any_unit_when_all_aligned() {
        let catalog = catalog(&[("Phoenix", 5), ("Leviathan", 5), ("Fire", 1)]);
        let result = alchemy_result(&catalog, 5, &mut GameRng::new(1)).unwrap();
        assert!(result == "Phoenix" || result == "Leviathan");
    }

    #[test]
    fn test_missing_tier_uses_top_tier() {
        let catalog = catalog(&[("Fire", 1), ("Inferno", 3)]);
        assert_eq!(alchemy_result(&catalog, 5, &mut GameRng::new(1)).as_deref(), Some("Inferno"));
        assert_eq!(alchemy_result(&Catalog::new(), 5, &mut GameRng::new(1)), None);
    }
}
