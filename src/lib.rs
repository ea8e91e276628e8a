//! # elemental-battlegrounds
//!
//! Core of an auto-battler: buy elemental and tech units, fuse them into
//! stronger ones, and let the boards fight it out.
//!
//! ## Design Principles
//!
//! 1. **Explicit Catalog**: Unit definitions live in a [`Catalog`] that is
//!    built at startup and passed by reference. Nothing is global.
//!
//! 2. **Abilities Are Data**: A closed [`Ability`] enum is folded into flat
//!    [`Modifiers`] when a definition is built. Combat reads numbers, never
//!    unit names.
//!
//! 3. **One Resolver, One Simulator**: Fusion and combat have a single entry
//!    point each, used the same way for AI, generated and remote opponents.
//!
//! 4. **Deterministic**: All randomness flows from a seeded [`GameRng`], so
//!    a seed and a list of actions reproduce a whole game.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, actions, errors
//! - `units`: Abilities, definitions, instances, the catalog and custom content
//! - `fusion`: Recipe book, categories and the fusion resolver
//! - `battle`: Battle simulator and hero hooks
//! - `economy`: Heroes, boards, shops, relics, AI players and the turn driver
//! - `persistence`: Key-value storage for custom content, binary snapshots
//! - `net`: Relay message shapes for multiplayer rooms
//!
//! ## Example
//!
//! ```
//! use elemental_battlegrounds::{GameBuilder, PlayerAction, PlayerId, PlayerSetup};
//!
//! let mut game = GameBuilder::new()
//!     .player(PlayerSetup::human("Alice"))
//!     .player(PlayerSetup::ai("Bot"))
//!     .build(42)
//!     .unwrap();
//!
//! let me = PlayerId::new(0);
//! game.apply_action(me, PlayerAction::EndTurn).unwrap();
//! let report = game.resolve_round().unwrap();
//! assert_eq!(report.round, 1);
//! ```

pub mod core;
pub mod units;
pub mod fusion;
pub mod battle;
pub mod economy;
pub mod persistence;
pub mod net;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig,
    PlayerAction, ActionRecord,
    GameError, CatalogError,
};

pub use crate::units::{
    Ability, Modifiers, UnitClass, UnitDefinition, UnitInstance,
    Catalog, CustomContent, CustomUnit, LoadReport,
};

pub use crate::fusion::{alchemy_result, Category, RecipeBook, FusionResolver};

pub use crate::battle::{simulate_battle, hero_damage, BattleResult, Outcome, HeroHooks, NoHooks};

pub use crate::economy::{
    HeroState, Relic, Board, Shop, ShopOffer,
    Player, PlayerSetup, ShopPolicy, GreedyPolicy, TurnContext,
    OpponentStrategy,
    Game, GameBuilder, GameSnapshot, ActionEvent, BattleReport, Opponent, RoundReport,
};

pub use crate::persistence::{Storage, MemoryStorage, PersistenceError};

pub use crate::net::{Envelope, RelayMessage, RelayAction, RelayError};
