//! Battle simulation.
//!
//! Two boards fight front to back. The simulator works on private copies
//! of both boards and uses no randomness: the same inputs always produce
//! the same survivors, log and healing.
//!
//! ## Phases
//!
//! 1. Hero `battle_start` hooks, one per side.
//! 2. Pre-battle abilities for each side: start attack bonus, hero healing,
//!    shared shields, and AOE against the other side. Units killed by AOE
//!    are removed only once both sides have applied their abilities.
//! 3. Combat: the front units trade simultaneous blows until at least one
//!    falls, then the next pair steps up.
//! 4. Post-battle health bonuses for survivors.

use serde::{Deserialize, Serialize};

use crate::units::UnitInstance;

use super::hooks::HeroHooks;

/// Which side came out ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

/// Everything a battle produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub survivors_a: Vec<UnitInstance>,
    pub survivors_b: Vec<UnitInstance>,
    pub log: Vec<String>,
    /// Healing owed to the first hero.
    pub heal_a: i32,
    /// Healing owed to the second hero.
    pub heal_b: i32,
    /// Combat stopped because the front units could not hurt each other.
    pub stalemate: bool,
}

impl BattleResult {
    /// Damage the first hero takes from the second board's survivors.
    #[must_use]
    pub fn damage_to_a(&self) -> i32 {
        hero_damage(&self.survivors_b)
    }

    /// Damage the second hero takes from the first board's survivors.
    #[must_use]
    pub fn damage_to_b(&self) -> i32 {
        hero_damage(&self.survivors_a)
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match (self.survivors_a.is_empty(), self.survivors_b.is_empty()) {
            (false, true) => Outcome::FirstWins,
            (true, false) => Outcome::SecondWins,
            _ => Outcome::Draw,
        }
    }
}

/// Hero damage dealt by a side's survivors.
///
/// Each survivor deals one per fusion it went through (constituent elements
/// minus one) plus its `SurvivorDamageBonus`.
#[must_use]
pub fn hero_damage(survivors: &[UnitInstance]) -> i32 {
    survivors
        .iter()
        .map(UnitInstance::hero_damage)
        .fold(0, i32::saturating_add)
}

/// Resolve a battle between two boards.
///
/// Neither input is modified. `hooks_a` applies to `board_a` and `hooks_b`
/// to `board_b`.
///
/// ```
/// use elemental_battlegrounds::battle::simulate_battle;
/// use elemental_battlegrounds::units::{UnitClass, UnitInstance};
///
/// let a = vec![UnitInstance::new("Fire", UnitClass::Elemental, 3, 2)];
/// let b = vec![UnitInstance::new("Water", UnitClass::Elemental, 2, 3)];
///
/// let result = simulate_battle(&a, &b, None, None);
/// assert!(result.survivors_a.is_empty() && result.survivors_b.is_empty());
/// assert!(result.log.iter().any(|line| line == "Both Fire and Water are defeated!"));
/// ```
#[must_use]
pub fn simulate_battle(
    board_a: &[UnitInstance],
    board_b: &[UnitInstance],
    hooks_a: Option<&dyn HeroHooks>,
    hooks_b: Option<&dyn HeroHooks>,
) -> BattleResult {
    let mut a = board_a.to_vec();
    let mut b = board_b.to_vec();
    let mut log = Vec::new();

    if let Some(hooks) = hooks_a {
        hooks.battle_start(&mut a);
    }
    if let Some(hooks) = hooks_b {
        hooks.battle_start(&mut b);
    }

    let heal_a = pre_battle(&mut a, &mut b, &mut log);
    let heal_b = pre_battle(&mut b, &mut a, &mut log);
    purge_dead(&mut a, &mut log);
    purge_dead(&mut b, &mut log);

    let stalemate = fight(&mut a, &mut b, &mut log);

    post_battle(&mut a);
    post_battle(&mut b);

    tracing::debug!(
        survivors_a = a.len(),
        survivors_b = b.len(),
        heal_a,
        heal_b,
        stalemate,
        "battle resolved"
    );

    BattleResult {
        survivors_a: a,
        survivors_b: b,
        log,
        heal_a,
        heal_b,
        stalemate,
    }
}

/// Apply one side's pre-battle abilities. Returns that side's hero healing.
fn pre_battle(own: &mut [UnitInstance], enemy: &mut [UnitInstance], log: &mut Vec<String>) -> i32 {
    let mut heal = 0;
    let mut shield = 0;

    for unit in own.iter_mut() {
        unit.attack = unit.attack.saturating_add(unit.modifiers.start_attack_bonus);
        heal = unit.modifiers.heal_hero.saturating_add(heal);
        shield = unit.modifiers.reduce_incoming_attack_all.saturating_add(shield);
    }

    if shield > 0 {
        for unit in own.iter_mut() {
            unit.modifiers.reduce_incoming_attack = unit.modifiers.reduce_incoming_attack.saturating_add(shield);
        }
    }

    for unit in own.iter() {
        let aoe = unit.modifiers.aoe_damage;
        if aoe <= 0 {
            continue;
        }
        for target in enemy.iter_mut() {
            target.health = target.health.saturating_sub(aoe);
        }
        log.push(format!("{} deals {} damage to all enemies at the start!", unit.name, aoe));
    }

    heal
}

fn purge_dead(board: &mut Vec<UnitInstance>, log: &mut Vec<String>) {
    board.retain(|unit| {
        if unit.is_alive() {
            return true;
        }
        log.push(format!("{} is destroyed before combat.", unit.name));
        false
    });
}

/// Front-to-back combat. Returns `true` if it ended in a stalemate.
fn fight(a: &mut Vec<UnitInstance>, b: &mut Vec<UnitInstance>, log: &mut Vec<String>) -> bool {
    let mut round = 0;

    while !a.is_empty() && !b.is_empty() {
        round += 1;
        log.push(format!("Round {}: {} vs {}", round, a[0], b[0]));

        let p = &mut a[0];
        let o = &mut b[0];
        let (to_o, burn_o) = strike(p, o);
        let (to_p, burn_p) = strike(o, p);
        let hit_o = to_o.saturating_add(burn_o);
        let hit_p = to_p.saturating_add(burn_p);

        if hit_o == 0 && hit_p == 0 {
            log.push(format!(
                "{} and {} cannot hurt each other; the battle ends in a stalemate.",
                p.name, o.name
            ));
            return true;
        }

        // Blows are identical until someone falls, so skip straight there.
        let exchanges = exchanges_to_kill(o.health, hit_o).min(exchanges_to_kill(p.health, hit_p));
        o.health = o.health.saturating_sub(hit_o.saturating_mul(exchanges));
        p.health = p.health.saturating_sub(hit_p.saturating_mul(exchanges));
        if burn_o > 0 {
            log.push(format!("{} burns {} for {}.", p.name, o.name, burn_o.saturating_mul(exchanges)));
        }
        if burn_p > 0 {
            log.push(format!("{} burns {} for {}.", o.name, p.name, burn_p.saturating_mul(exchanges)));
        }

        if !p.is_alive() && !o.is_alive() {
            log.push(format!("Both {} and {} are defeated!", p.name, o.name));
            a.remove(0);
            b.remove(0);
        } else if !p.is_alive() {
            log.push(format!("{} dies; {} survives with {} HP.", p.name, o.name, o.health));
            reward_kill(o, log);
            a.remove(0);
        } else {
            log.push(format!("{} dies; {} survives with {} HP.", o.name, p.name, p.health));
            reward_kill(p, log);
            b.remove(0);
        }
    }

    false
}

/// Exchanges needed for `hit` damage per exchange to bring `health` to 0.
fn exchanges_to_kill(health: i32, hit: i32) -> i32 {
    if hit <= 0 {
        return i32::MAX;
    }
    if health <= 0 {
        return 1;
    }
    health / hit + i32::from(health % hit != 0)
}

/// Damage `attacker` deals to `defender` in one exchange, and the burn
/// that hit adds.
fn strike(attacker: &UnitInstance, defender: &UnitInstance) -> (i32, i32) {
    let damage = attacker
        .attack
        .saturating_sub(defender.modifiers.reduce_incoming_attack)
        .max(0);
    let burn = if damage > 0 { attacker.modifiers.burn.max(0) } else { 0 };
    (damage, burn)
}

fn reward_kill(victor: &mut UnitInstance, log: &mut Vec<String>) {
    let bonus = victor.modifiers.gain_attack_on_kill;
    if bonus != 0 {
        victor.attack = victor.attack.saturating_add(bonus);
        log.push(format!("{} gains {} attack.", victor.name, bonus));
    }
}

fn post_battle(board: &mut [UnitInstance]) {
    for unit in board.iter_mut() {
        let bonus = unit.modifiers.after_battle_health_bonus;
        if bonus > 0 {
            unit.health = unit.health.saturating_add(bonus);
            unit.max_health = unit.max_health.max(unit.health);
        }
    }
}
