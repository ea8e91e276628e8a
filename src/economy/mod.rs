//! Economy and turn flow: heroes, boards, shops, relics, AI players and the
//! round driver.

pub mod hero;
pub mod relic;
pub mod board;
pub mod shop;
pub mod player;
pub mod policy;
pub mod opponents;
pub mod game;

pub use hero::HeroState;
pub use relic::Relic;
pub use board::Board;
pub use shop::{Shop, ShopOffer};
pub use player::{Player, PlayerSetup};
pub use policy::{GreedyPolicy, ShopPolicy, TurnContext};
pub use opponents::{board_size, OpponentStrategy};
pub use game::{ActionEvent, BattleReport, Game, GameBuilder, GameSnapshot, Opponent, RoundReport};
