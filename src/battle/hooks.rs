//! Hero-level hooks.
//!
//! A hero can carry an effect that touches the whole board at battle start
//! or the hero itself at the start of each round. Relics are the built-in
//! implementation; anything else implementing [`HeroHooks`] can be passed to
//! the simulator and driver the same way.

use crate::economy::HeroState;
use crate::units::UnitInstance;

/// Hooks invoked by the simulator and the turn driver.
///
/// Both methods default to doing nothing.
pub trait HeroHooks {
    /// Called with the hero's board copy before any unit ability applies.
    fn battle_start(&self, _units: &mut [UnitInstance]) {}

    /// Called once per round after gold has been granted.
    fn round_start(&self, _hero: &mut HeroState) {}
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl HeroHooks for NoHooks {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitClass;

    #[test]
    fn test_no_hooks_leave_everything_alone() {
        let mut units = vec![UnitInstance::new("Fire", UnitClass::Elemental, 3, 2)];
        let mut hero = HeroState::new(20, 3);
        NoHooks.battle_start(&mut units);
        NoHooks.round_start(&mut hero);
        assert_eq!(units[0].attack, 3);
        assert_eq!(hero, HeroState::new(20, 3));
    }
}
