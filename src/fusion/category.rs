//! Thematic categories used to bias procedural fusion results.
//!
//! Membership is fixed by name. A unit appearing in more than one list
//! belongs to the first list that contains it, in declaration order.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fire,
    Water,
    Earth,
    Air,
    Tech,
    Energy,
    Ultimate,
    Neutral,
}

const FIRE: &[&str] = &[
    "Fire", "Lava", "Magma", "Smoke", "Foundry", "Forge", "Ember Ash", "Fire Whirl",
    "Inferno", "Molten Core", "Plasma Torch", "Phoenix", "Ash",
];
const WATER: &[&str] = &[
    "Water", "Steam", "Tide", "Mud", "Mist", "Geyser", "Steam Engine", "Distillery",
    "Hot Spring", "Cloud", "Steamship", "Ocean", "Estuary", "Sea Breeze", "Dew",
    "Vapor Cloud", "Sea Spray", "Leviathan", "Frost", "Tsunami", "Tidal Wave",
];
const EARTH: &[&str] = &[
    "Earth", "Stone", "Sandstorm", "Volcano", "Lava Field", "Brick Kiln", "Clay Pottery",
    "Clay", "Dust Mound", "Glass", "Marble", "Boulder", "Sandstone", "Silt", "Sand",
    "Earthquake", "Titan", "Quake", "Flora", "Crystal Formation",
];
const AIR: &[&str] = &[
    "Air", "Gale", "Pyroclastic Flow", "Ash Cloud", "Morning Fog", "Dust Devil", "Tornado",
    "Hurricane", "Tempest Lord", "Zephyr", "Dust Storm",
];
const TECH: &[&str] = &[
    "Gear", "Chip", "Android", "Automaton", "AI Core", "Robot Arm", "Drone", "Gearbox",
    "Smartwatch", "Mechatronics", "Microprocessor", "Cybernetics", "Quantum Core",
    "Mechanical Beast", "Cyber Dragon", "Quantum Beast", "Omega Protocol", "Nanobot",
    "Turret", "Processor", "Firewall", "Cyborg", "Quantum", "DroneSwarm",
];
const ENERGY: &[&str] = &[
    "Plasma Torch", "Thunderstorm", "Electromagnet", "Static Storm", "Lightning Storm",
    "Storm King", "Lightning", "Geothermal Plant", "Plasma Storm",
];
const ULTIMATE: &[&str] = &[
    "Primordial Force", "World Ender", "Genesis Core", "Cosmic Entity", "Reality Shaper",
    "Elemental Avatar",
];

const LISTS: &[(Category, &[&str])] = &[
    (Category::Fire, FIRE),
    (Category::Water, WATER),
    (Category::Earth, EARTH),
    (Category::Air, AIR),
    (Category::Tech, TECH),
    (Category::Energy, ENERGY),
    (Category::Ultimate, ULTIMATE),
];

impl Category {
    /// Category of a unit name; unlisted names are `Neutral`.
    #[must_use]
    pub fn of(name: &str) -> Self {
        LISTS
            .iter()
            .find(|(_, members)| members.contains(&name))
            .map_or(Category::Neutral, |(category, _)| *category)
    }

    /// Whether a candidate in this category suits inputs of `a` and `b`.
    #[must_use]
    pub fn suits(self, a: Category, b: Category) -> bool {
        self == a || self == b || self == Category::Ultimate
    }
}
