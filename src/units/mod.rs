//! Units: definitions, instances, abilities and the catalog.
//!
//! ## Key Types
//!
//! - `UnitDefinition`: static stats of a unit type
//! - `UnitInstance`: a unit on a board, with current attack and health
//! - `Ability` / `Modifiers`: passive abilities, authored and resolved
//! - `Catalog`: name to definition registry, seeded with `Catalog::builtin()`
//! - `CustomContent`: user-authored units and fusions

pub mod ability;
pub mod definition;
pub mod instance;
pub mod catalog;
pub mod roster;
pub mod custom;

pub use ability::{Ability, Modifiers};
pub use definition::{Elements, UnitClass, UnitDefinition};
pub use instance::UnitInstance;
pub use catalog::Catalog;
pub use roster::builtin_units;
pub use custom::{parse_fusion_key, CustomContent, CustomUnit, LoadReport};
