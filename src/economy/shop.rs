//! The shop: a row of random offers drawn from the current tier pool.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::units::Catalog;

/// A unit for sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopOffer {
    pub name: String,
    pub cost: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    offers: Vec<ShopOffer>,
}

impl Shop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A shop with fixed offers.
    #[must_use]
    pub fn from_offers(offers: Vec<ShopOffer>) -> Self {
        Self { offers }
    }

    #[must_use]
    pub fn offers(&self) -> &[ShopOffer] {
        &self.offers
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&ShopOffer> {
        self.offers.get(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Replace every offer with `size` fresh draws of tier `tier` or lower.
    ///
    /// An empty pool leaves the shop empty.
    pub fn roll(&mut self, catalog: &Catalog, tier: u8, size: usize, rng: &mut GameRng) {
        self.offers = (0..size).filter_map(|_| draw(catalog, tier, rng)).collect();
    }

    /// Replace one offer after it was bought.
    pub fn replace_slot(&mut self, slot: usize, catalog: &Catalog, tier: u8, rng: &mut GameRng) {
        if slot >= self.offers.len() {
            return;
        }
        match draw(catalog, tier, rng) {
            Some(offer) => self.offers[slot] = offer,
            None => {
                self.offers.remove(slot);
            }
        }
    }
}

fn draw(catalog: &Catalog, tier: u8, rng: &mut GameRng) -> Option<ShopOffer> {
    let pool = catalog.names_up_to_tier(tier);
    let name = rng.choose(&pool)?;
    let def = catalog.get(name)?;
    Some(ShopOffer {
        name: def.name.clone(),
        cost: def.cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_respects_tier() {
        let catalog = Catalog::builtin();
        let mut rng = GameRng::new(11);
        let mut shop = Shop::new();
        for _ in 0..20 {
            shop.roll(&catalog, 1, 5, &mut rng);
            assert_eq!(shop.len(), 5);
            for offer in shop.offers() {
                let def = catalog.get(&offer.name).unwrap();
                assert_eq!(def.tier, 1);
                assert_eq!(offer.cost, def.cost);
            }
        }
    }

    #[test]
    fn test_empty_catalog_gives_empty_shop() {
        let mut shop = Shop::new();
        shop.roll(&Catalog::new(), 3, 5, &mut GameRng::new(1));
        assert!(shop.is_empty());
    }

    #[test]
    fn test_replace_slot_keeps_length() {
        let catalog = Catalog::builtin();
        let mut rng = GameRng::new(5);
        let mut shop = Shop::new();
        shop.roll(&catalog, 2, 5, &mut rng);
        shop.replace_slot(3, &catalog, 2, &mut rng);
        assert_eq!(shop.len(), 5);
        shop.replace_slot(17, &catalog, 2, &mut rng);
        assert_eq!(shop.len(), 5);
    }
}
