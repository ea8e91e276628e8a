//! Battle resolution.
//!
//! `simulate_battle` is the single combat entry point. It is called the same
//! way for AI boards, generated opponents and boards received from a remote
//! peer.

pub mod hooks;
pub mod simulator;

pub use hooks::{HeroHooks, NoHooks};
pub use simulator::{hero_damage, simulate_battle, BattleResult, Outcome};
