//! Shop-phase policies for computer players.
//!
//! A policy looks at a player and returns the next action. The driver
//! applies it and asks again until the policy ends the turn, so a policy
//! never mutates anything itself.

use crate::core::{GameRng, PlayerAction};
use crate::units::{Catalog, UnitClass, UnitDefinition};

use super::player::Player;

/// What has happened so far in the current shop phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnContext {
    pub purchases: usize,
    pub fusions: usize,
    pub max_purchases: usize,
}

// =============================================================================
// Shop Policy
// =============================================================================

/// Decides a computer player's next shop action.
pub trait ShopPolicy: Send + Sync {
    fn next_action(
        &self,
        player: &Player,
        catalog: &Catalog,
        rng: &mut GameRng,
        ctx: TurnContext,
    ) -> PlayerAction;
}

/// Buys the strongest affordable unit of its focus class, then fuses
/// duplicates.
///
/// The focus class is whichever class has more units on the board (ties go
/// to Elemental, an empty board picks at random). If nothing of that class
/// is affordable, the cheapest affordable offer is bought instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl ShopPolicy for GreedyPolicy {
    fn next_action(
        &self,
        player: &Player,
        catalog: &Catalog,
        rng: &mut GameRng,
        ctx: TurnContext,
    ) -> PlayerAction {
        let may_buy = ctx.fusions == 0 && ctx.purchases < ctx.max_purchases && !player.board.is_full();
        if may_buy {
            if let Some(slot) = pick_offer(player, catalog, rng) {
                return PlayerAction::Buy { slot };
            }
        }

        match player.board.find_duplicate() {
            Some((first, second)) => PlayerAction::Fuse { first, second },
            None => PlayerAction::EndTurn,
        }
    }
}

fn focus_class(player: &Player, rng: &mut GameRng) -> UnitClass {
    let units = player.board.units();
    if units.is_empty() {
        return if rng.gen_bool(0.5) { UnitClass::Elemental } else { UnitClass::Tech };
    }
    let tech = units.iter().filter(|u| u.class == UnitClass::Tech).count();
    if tech > units.len() - tech {
        UnitClass::Tech
    } else {
        UnitClass::Elemental
    }
}

fn pick_offer(player: &Player, catalog: &Catalog, rng: &mut GameRng) -> Option<usize> {
    let focus = focus_class(player, rng);
    let affordable: Vec<(usize, &UnitDefinition)> = player
        .shop
        .offers()
        .iter()
        .enumerate()
        .filter(|(_, offer)| player.hero.can_afford(offer.cost))
        .filter_map(|(slot, offer)| catalog.get(&offer.name).map(|def| (slot, def)))
        .collect();

    // First maximum wins on ties, so equal offers resolve to the lower slot.
    let best_focus = affordable
        .iter()
        .filter(|(_, def)| def.class == focus)
        .fold(None::<(usize, i32)>, |best, (slot, def)| {
            let power = def.attack + def.health;
            match best {
                Some((_, best_power)) if best_power >= power => best,
                _ => Some((*slot, power)),
            }
        })
        .map(|(slot, _)| slot);

    best_focus.or_else(|| {
        affordable
            .iter()
            .min_by_key(|(slot, def)| (def.cost, *slot))
            .map(|(slot, _)| *slot)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{HeroState, Shop, ShopOffer};

    fn player_with(gold: i32, offers: &[(&str, i32)]) -> Player {
        let mut player = Player::new("AI", true, HeroState::new(20, gold), 5);
        player.shop = Shop::from_offers(
            offers
                .iter()
                .map(|(name, cost)| ShopOffer { name: (*name).to_string(), cost: *cost })
                .collect(),
        );
        player
    }

    fn ctx() -> TurnContext {
        TurnContext { purchases: 0, fusions: 0, max_purchases: 10 }
    }

    #[test]
    fn test_prefers_strongest_focus_unit() {
        let catalog = Catalog::builtin();
        let mut player = player_with(10, &[("Fire", 3), ("Lava", 5), ("Gear", 3)]);
        player.board.push(catalog.instantiate("Water").unwrap()).unwrap();

        let action = GreedyPolicy.next_action(&player, &catalog, &mut GameRng::new(1), ctx());
        assert_eq!(action, PlayerAction::Buy { slot: 1 });
    }

    #[test]
    fn test_falls_back_to_cheapest() {
        let catalog = Catalog::builtin();
        let mut player = player_with(3, &[("Lava", 5), ("Gear", 3)]);
        player.board.push(catalog.instantiate("Water").unwrap()).unwrap();

        let action = GreedyPolicy.next_action(&player, &catalog, &mut GameRng::new(1), ctx());
        assert_eq!(action, PlayerAction::Buy { slot: 1 });
    }

    #[test]
    fn test_fuses_duplicates_then_ends() {
        let catalog = Catalog::builtin();
        let mut player = player_with(0, &[("Fire", 3)]);
        player.board.push(catalog.instantiate("Fire").unwrap()).unwrap();
        player.board.push(catalog.instantiate("Water").unwrap()).unwrap();
        player.board.push(catalog.instantiate("Fire").unwrap()).unwrap();

        let action = GreedyPolicy.next_action(&player, &catalog, &mut GameRng::new(1), ctx());
        assert_eq!(action, PlayerAction::Fuse { first: 0, second: 2 });

        player.board.remove(2).unwrap();
        let action = GreedyPolicy.next_action(&player, &catalog, &mut GameRng::new(1), ctx());
        assert_eq!(action, PlayerAction::EndTurn);
    }

    #[test]
    fn test_no_buying_after_fusion_or_limit() {
        let catalog = Catalog::builtin();
        let player = player_with(10, &[("Fire", 3)]);
        let fused = TurnContext { fusions: 1, ..ctx() };
        let capped = TurnContext { purchases: 10, ..ctx() };
        for context in [fused, capped] {
            let action = GreedyPolicy.next_action(&player, &catalog, &mut GameRng::new(1), context);
            assert_eq!(action, PlayerAction::EndTurn);
        }
    }
}
