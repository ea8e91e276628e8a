//! The built-in unit roster.

use super::ability::Ability;
use super::catalog::Catalog;
use super::definition::{UnitClass, UnitDefinition};

use Ability::*;
use UnitClass::{Elemental as E, Tech as T};

#[derive(Clone, Copy)]
struct Entry {
    name: &'static str,
    class: UnitClass,
    attack: i32,
    health: i32,
    tier: u8,
    cost: i32,
    emoji: &'static str,
    elements: &'static [&'static str],
    abilities: &'static [Ability],
}

#[allow(clippy::too_many_arguments)]
const fn unit(
    name: &'static str,
    class: UnitClass,
    attack: i32,
    health: i32,
    tier: u8,
    cost: i32,
    emoji: &'static str,
    elements: &'static [&'static str],
) -> Entry {
    Entry { name, class, attack, health, tier, cost, emoji, elements, abilities: &[] }
}

const fn with(entry: Entry, abilities: &'static [Ability]) -> Entry {
    Entry { abilities, ..entry }
}

#[rustfmt::skip]
const ROSTER: &[Entry] = &[
    // Tier 1
    unit("Fire", E, 3, 2, 1, 3, "🔥", &["Fire"]),
    unit("Water", E, 2, 3, 1, 3, "💧", &["Water"]),
    unit("Earth", E, 2, 4, 1, 3, "🌍", &["Earth"]),
    unit("Air", E, 4, 1, 1, 3, "💨", &["Air"]),
    unit("Gear", T, 3, 3, 1, 3, "⚙️", &["Gear"]),
    unit("Chip", T, 4, 2, 1, 3, "💾", &["Chip"]),
    with(unit("Lightning", E, 3, 1, 1, 3, "⚡", &["Lightning"]), &[StartAttackBonus(1)]),
    with(unit("Ash", E, 3, 1, 1, 3, "♨️", &["Ash"]), &[Burn(1)]),
    with(unit("Flora", E, 2, 3, 1, 3, "🌿", &["Flora"]), &[HealHero(1)]),
    with(unit("Quake", E, 2, 3, 1, 3, "⛰️", &["Quake"]), &[AoeDamage(1)]),
    with(unit("Zephyr", E, 2, 4, 1, 3, "🍃", &["Zephyr"]), &[StartAttackBonus(2)]),
    with(unit("Frost", E, 2, 4, 1, 3, "❄️", &["Frost"]), &[ReduceIncomingAttack(1)]),
    with(unit("Nanobot", T, 2, 3, 1, 3, "🧬", &["Nanobot"]), &[HealHero(1)]),
    unit("Turret", T, 5, 1, 1, 3, "🔫", &["Turret"]),
    with(unit("Processor", T, 0, 5, 1, 4, "💻", &["Processor"]), &[BoardLimitBonus(1)]),
    with(unit("Firewall", T, 2, 4, 1, 3, "🛡️", &["Firewall"]), &[ReduceIncomingAttackAll(1)]),

    // Tier 2
    unit("Lava", E, 6, 3, 2, 3, "🌋", &["Fire", "Fire"]),
    unit("Steam", E, 3, 4, 2, 3, "♨️", &["Fire", "Water"]),
    unit("Magma", E, 5, 4, 2, 3, "🗻", &["Fire", "Earth"]),
    unit("Smoke", E, 4, 3, 2, 3, "💨", &["Fire", "Air"]),
    unit("Tide", E, 4, 5, 2, 3, "🌊", &["Water", "Water"]),
    unit("Mud", E, 3, 5, 2, 3, "🟫", &["Water", "Earth"]),
    with(unit("Mist", E, 3, 4, 2, 3, "🌫️", &["Water", "Air"]), &[ReduceIncomingAttack(1)]),
    unit("Stone", E, 3, 7, 2, 3, "🪨", &["Earth", "Earth"]),
    unit("Sandstorm", E, 5, 4, 2, 3, "🏜️", &["Earth", "Air"]),
    unit("Gale", E, 6, 2, 2, 3, "🌪️", &["Air", "Air"]),
    unit("Android", T, 5, 5, 2, 3, "🤖", &["Gear", "Gear"]),
    unit("Automaton", T, 4, 6, 2, 3, "🦾", &["Gear", "Chip"]),
    unit("AI Core", T, 7, 3, 2, 3, "🧠", &["Chip", "Chip"]),
    with(unit("Cyborg", T, 5, 5, 2, 4, "🦿", &["Nanobot", "Gear"]), &[HealHero(1)]),
    with(unit("Quantum", T, 4, 4, 2, 4, "⚛️", &["Processor", "Chip"]), &[SurvivorDamageBonus(1)]),
    with(unit("DroneSwarm", T, 5, 2, 2, 4, "🪰", &["Turret", "Chip"]), &[GainAttackOnKill(2)]),

    // Tier 3
    unit("Foundry", E, 8, 6, 3, 6, "🏭", &["Fire", "Fire", "Fire"]),
    unit("Geyser", E, 6, 7, 3, 6, "⛲", &["Water", "Fire", "Water"]),
    unit("Volcano", E, 9, 5, 3, 7, "🌋", &["Fire", "Earth", "Fire", "Earth"]),
    unit("Geothermal Plant", E, 7, 8, 3, 7, "🔋", &["Fire", "Water", "Fire", "Earth"]),
    unit("Lava Field", E, 9, 6, 3, 7, "🌋", &["Fire", "Earth", "Earth"]),
    unit("Ash Cloud", E, 6, 7, 3, 6, "🌫️", &["Fire", "Air", "Air"]),
    unit("Cloud", E, 6, 6, 3, 6, "☁️", &["Fire", "Water", "Fire", "Water"]),
    unit("Distillery", E, 5, 8, 3, 6, "🥃", &["Fire", "Water", "Water"]),
    unit("Forge", E, 8, 7, 3, 7, "⚒️", &["Fire", "Fire", "Earth"]),
    unit("Thunderstorm", E, 8, 8, 3, 7, "⛈️", &["Lightning", "Water"]),
    unit("Ocean", E, 5, 12, 3, 7, "🌊", &["Water", "Water", "Water"]),
    unit("Clay", E, 4, 11, 3, 6, "🏺", &["Water", "Earth", "Earth"]),
    unit("Morning Fog", E, 5, 8, 3, 6, "🌁", &["Water", "Earth", "Water", "Air"]),
    unit("Vapor Cloud", E, 6, 7, 3, 6, "🌫️", &["Water", "Air", "Air"]),
    unit("Boulder", E, 5, 12, 3, 7, "🪨", &["Earth", "Earth", "Earth"]),
    with(unit("Sand", E, 6, 8, 3, 6, "🏖️", &["Earth", "Earth", "Air"]), &[AfterBattleHealthBonus(2)]),
    unit("Dust Storm", E, 9, 6, 3, 8, "🌪️", &["Earth", "Air", "Earth", "Air"]),
    unit("Tornado", E, 12, 4, 3, 8, "🌪️", &["Air", "Air", "Air"]),
    unit("Robot Arm", T, 8, 8, 3, 8, "🦾", &["Gear", "Gear", "Gear"]),
    with(unit("Drone", T, 9, 6, 3, 8, "🚁", &["Gear", "Chip", "Gear"]), &[GainAttackOnKill(1)]),
    with(unit("Gearbox", T, 7, 9, 3, 8, "⚙️", &["Gear", "Gear", "Chip"]), &[ReduceIncomingAttack(1)]),
    unit("Mechatronics", T, 10, 7, 3, 9, "🤖", &["Gear", "Chip", "Gear", "Chip"]),
    unit("Microprocessor", T, 11, 5, 3, 8, "💻", &["Chip", "Chip", "Chip"]),

    // Tier 4
    with(unit("Inferno", E, 15, 8, 4, 8, "🔥", &["Fire", "Fire", "Fire", "Fire"]), &[Burn(2)]),
    unit("Tsunami", E, 12, 12, 4, 8, "🌊", &["Water", "Water", "Water", "Air"]),
    with(unit("Earthquake", E, 10, 15, 4, 8, "💥", &["Earth", "Earth", "Earth", "Air"]), &[AoeDamage(2)]),
    unit("Hurricane", E, 14, 9, 4, 8, "🌀", &["Water", "Water", "Air", "Air"]),
    unit("Tidal Wave", E, 14, 10, 4, 8, "🌊", &["Water", "Water", "Water", "Water"]),
    unit("Molten Core", E, 16, 9, 4, 8, "🌋", &["Fire", "Fire", "Fire", "Earth"]),
    unit("Lightning Storm", E, 17, 7, 4, 8, "🌩️", &["Lightning", "Air", "Air", "Water"]),
    unit("Crystal Formation", E, 11, 14, 4, 8, "💎", &["Earth", "Earth", "Earth", "Earth"]),
    unit("Cybernetics", T, 13, 11, 4, 8, "🧠", &["Gear", "Gear", "Chip", "Chip"]),
    unit("Quantum Core", T, 16, 7, 4, 8, "⚛️", &["Chip", "Chip", "Chip", "Chip"]),
    with(unit("Mechanical Beast", T, 15, 10, 4, 8, "🦾", &["Gear", "Gear", "Gear", "Gear"]), &[ReduceIncomingAttackAll(1)]),

    // Tier 5
    with(unit("Phoenix", E, 20, 12, 5, 9, "🦅", &["Fire", "Fire", "Fire", "Fire", "Air"]), &[AfterBattleHealthBonus(3)]),
    unit("Leviathan", E, 18, 15, 5, 9, "🐉", &["Water", "Water", "Water", "Water", "Water"]),
    unit("Titan", E, 16, 18, 5, 9, "⛰️", &["Earth", "Earth", "Earth", "Earth", "Earth"]),
    unit("Tempest Lord", E, 22, 10, 5, 9, "🌪️", &["Air", "Air", "Air", "Air", "Water"]),
    unit("Elemental Avatar", E, 20, 15, 5, 9, "🌟", &["Fire", "Water", "Earth", "Air", "Fire"]),
    unit("Storm King", E, 23, 11, 5, 9, "👑", &["Lightning", "Air", "Air", "Water", "Air"]),
    unit("Cyber Dragon", T, 19, 14, 5, 9, "🐲", &["Gear", "Gear", "Chip", "Chip", "Gear"]),
    with(unit("Quantum Beast", T, 24, 8, 5, 9, "⚛️", &["Chip", "Chip", "Chip", "Chip", "Chip"]), &[SurvivorDamageBonus(1)]),

    // Tier 6
    unit("Primordial Force", E, 30, 20, 6, 10, "🌌", &["Fire", "Water", "Earth", "Air", "Fire", "Water"]),
    unit("World Ender", E, 35, 15, 6, 10, "💀", &["Earth", "Fire", "Water", "Earth", "Fire", "Water"]),
    unit("Genesis Core", E, 25, 25, 6, 10, "⭐", &["Earth", "Earth", "Earth", "Earth", "Earth", "Earth"]),
    unit("Cosmic Entity", E, 32, 18, 6, 10, "👁️", &["Fire", "Water", "Earth", "Air", "Air", "Fire"]),
    unit("Reality Shaper", E, 28, 22, 6, 10, "🔮", &["Water", "Earth", "Air", "Fire", "Water", "Earth"]),
    unit("Omega Protocol", T, 40, 10, 6, 10, "🤖", &["Gear", "Chip", "Gear", "Chip", "Gear", "Chip"]),
];

impl Entry {
    fn build(&self) -> UnitDefinition {
        self.abilities.iter().fold(
            UnitDefinition::new(self.name, self.class, self.attack, self.health)
                .with_tier(self.tier)
                .with_cost(self.cost)
                .with_emoji(self.emoji)
                .with_elements(self.elements),
            |def, &ability| def.with_ability(ability),
        )
    }
}

/// Definitions of the built-in roster, in roster order.
pub fn builtin_units() -> impl Iterator<Item = UnitDefinition> {
    ROSTER.iter().map(Entry::build)
}

impl Catalog {
    /// A catalog holding the built-in roster.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for def in builtin_units() {
            if let Err(err) = catalog.register(def) {
                tracing::warn!(%err, "skipping built-in unit");
            }
        }
        catalog
    }
}
