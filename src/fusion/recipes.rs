//! Authored fusion recipes.
//!
//! Two tables: pair recipes (`A+B`, symmetric) and self-upgrades (`A+A`).
//! Pair recipes are stored under both orders, so a lookup never depends on
//! which unit the player dragged onto which.

use rustc_hash::FxHashMap;

/// Pair and self-upgrade recipe tables.
///
/// ```
/// use elemental_battlegrounds::fusion::RecipeBook;
///
/// let mut book = RecipeBook::new();
/// book.insert("Fire", "Water", "Steam");
/// book.insert("Fire", "Fire", "Lava");
///
/// assert_eq!(book.pair("Water", "Fire"), Some("Steam"));
/// assert_eq!(book.upgrade("Fire"), Some("Lava"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecipeBook {
    pairs: FxHashMap<(String, String), String>,
    upgrades: FxHashMap<String, String>,
}

const PAIRS: &[(&str, &str, &str)] = &[
    ("Fire", "Water", "Steam"),
    ("Fire", "Earth", "Magma"),
    ("Fire", "Air", "Smoke"),
    ("Water", "Earth", "Mud"),
    ("Water", "Air", "Mist"),
    ("Earth", "Air", "Sandstorm"),
    ("Gear", "Chip", "Automaton"),
    ("Lava", "Steam", "Inferno"),
    ("Lava", "Magma", "Molten Core"),
    ("Steam", "Magma", "Geothermal Plant"),
    ("Steam", "Smoke", "Vapor Cloud"),
    ("Magma", "Smoke", "Ash Cloud"),
    ("Tide", "Gale", "Hurricane"),
    ("Mud", "Mist", "Morning Fog"),
    ("Stone", "Sandstorm", "Earthquake"),
    ("Android", "AI Core", "Cybernetics"),
    ("Automaton", "AI Core", "Quantum Core"),
    ("Lava", "Fire", "Foundry"),
    ("Steam", "Water", "Distillery"),
    ("Magma", "Earth", "Lava Field"),
    ("Smoke", "Air", "Ash Cloud"),
    ("Tide", "Water", "Ocean"),
    ("Mud", "Earth", "Clay"),
    ("Mist", "Air", "Vapor Cloud"),
    ("Stone", "Earth", "Boulder"),
    ("Gale", "Air", "Tornado"),
    ("Android", "Gear", "Robot Arm"),
    ("AI Core", "Chip", "Microprocessor"),
    ("Lightning", "Water", "Thunderstorm"),
    ("Nanobot", "Gear", "Cyborg"),
    ("Processor", "Chip", "Quantum"),
    ("Turret", "Chip", "DroneSwarm"),
];

const UPGRADES: &[(&str, &str)] = &[
    ("Fire", "Lava"),
    ("Water", "Tide"),
    ("Earth", "Stone"),
    ("Air", "Gale"),
    ("Gear", "Android"),
    ("Chip", "AI Core"),
    ("Lava", "Molten Core"),
    ("Steam", "Cloud"),
    ("Magma", "Volcano"),
    ("Smoke", "Ash Cloud"),
    ("Tide", "Ocean"),
    ("Mud", "Clay"),
    ("Mist", "Morning Fog"),
    ("Stone", "Boulder"),
    ("Sandstorm", "Dust Storm"),
    ("Gale", "Tornado"),
    ("Android", "Cybernetics"),
    ("Automaton", "Mechatronics"),
    ("AI Core", "Quantum Core"),
    ("Foundry", "Inferno"),
    ("Ocean", "Leviathan"),
    ("Tornado", "Tempest Lord"),
    ("Cybernetics", "Cyber Dragon"),
    ("Phoenix", "Primordial Force"),
    ("Leviathan", "World Ender"),
    ("Titan", "Genesis Core"),
    ("Cyber Dragon", "Omega Protocol"),
    ("Primordial Force", "Cosmic Entity"),
    ("World Ender", "Reality Shaper"),
];

impl RecipeBook {
    /// An empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The authored recipes that ship with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let mut book = Self::new();
        for &(a, b, result) in PAIRS {
            book.insert(a, b, result);
        }
        for &(unit, result) in UPGRADES {
            book.insert(unit, unit, result);
        }
        book
    }

    /// Add or replace a recipe. `a == b` goes to the self-upgrade table.
    pub fn insert(&mut self, a: &str, b: &str, result: &str) {
        if a == b {
            self.upgrades.insert(a.to_string(), result.to_string());
            return;
        }
        self.pairs.insert((a.to_string(), b.to_string()), result.to_string());
        self.pairs.insert((b.to_string(), a.to_string()), result.to_string());
    }

    /// Pair recipe for two different units, in either order.
    #[must_use]
    pub fn pair(&self, a: &str, b: &str) -> Option<&str> {
        self.pairs
            .get(&(a.to_string(), b.to_string()))
            .map(String::as_str)
    }

    /// Self-upgrade recipe for a unit fused with itself.
    #[must_use]
    pub fn upgrade(&self, unit: &str) -> Option<&str> {
        self.upgrades.get(unit).map(String::as_str)
    }

    /// Number of distinct recipes (each pair counted once).
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len() / 2 + self.upgrades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.upgrades.is_empty()
    }

    /// Every recipe as `(a, b, result)`, self-upgrades as `(a, a, result)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        let pairs = self
            .pairs
            .iter()
            .filter(|((a, b), _)| a < b)
            .map(|((a, b), r)| (a.as_str(), b.as_str(), r.as_str()));
        let upgrades = self
            .upgrades
            .iter()
            .map(|(a, r)| (a.as_str(), a.as_str(), r.as_str()));
        pairs.chain(upgrades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_symmetric() {
        let book = RecipeBook::builtin();
        for &(a, b, result) in PAIRS {
            assert_eq!(book.pair(a, b), Some(result));
            assert_eq!(book.pair(b, a), Some(result));
        }
    }

    #[test]
    fn test_self_upgrades_do_not_leak_into_pairs() {
        let book = RecipeBook::builtin();
        assert_eq!(book.upgrade("Fire"), Some("Lava"));
        assert_eq!(book.pair("Fire", "Fire"), None);
        assert_eq!(book.upgrade("Steam"), Some("Cloud"));
        assert_eq!(book.upgrade("Genesis Core"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut book = RecipeBook::builtin();
        let before = book.len();
        book.insert("Water", "Fire", "Geyser");
        assert_eq!(book.pair("Fire", "Water"), Some("Geyser"));
        assert_eq!(book.len(), before);
    }

    #[test]
    fn test_iter_counts_each_recipe_once() {
        let book = RecipeBook::builtin();
        assert_eq!(book.iter().count(), book.len());
        assert_eq!(book.len(), PAIRS.len() + UPGRADES.len());
    }
}
