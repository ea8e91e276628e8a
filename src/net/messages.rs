//! Relay message shapes.
//!
//! Every message travels in an [`Envelope`]:
//!
//! ```json
//! {"type": "action", "data": {...}, "roomId": "ABC123", "playerId": "p1", "timestamp": 1700000000000}
//! ```
//!
//! The transport and the room server are outside this crate; only the
//! shapes and the conversions from and to game state live here.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};
use crate::economy::{ActionEvent, BattleReport, Game, ShopOffer};
use crate::units::UnitInstance;

use super::RelayError;

/// A message with its routing data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(flatten)]
    pub message: RelayMessage,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: u64,
}

impl Envelope {
    #[must_use]
    pub fn new(message: RelayMessage, room_id: Option<String>, player_id: Option<String>, timestamp: u64) -> Self {
        Self {
            message,
            room_id,
            player_id,
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, RelayError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RelayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this message came from `player_id` itself.
    #[must_use]
    pub fn is_from(&self, player_id: &str) -> bool {
        self.player_id.as_deref() == Some(player_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum RelayMessage {
    GameState(GameStateData),
    Action(ActionData),
    BattleStart(BattleStart),
}

/// What a peer sees of a player's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateData {
    pub board: Vec<UnitInstance>,
    pub gold: i32,
    /// Current round.
    pub turn: u32,
    pub health: i32,
    #[serde(default)]
    pub shop: Vec<ShopOffer>,
}

impl GameStateData {
    /// State of `id` in `game`.
    pub fn from_game(game: &Game, id: PlayerId) -> Result<Self, GameError> {
        let player = game.player(id).ok_or(GameError::UnknownPlayer(id))?;
        Ok(Self {
            board: player.board.units().to_vec(),
            gold: player.hero.gold,
            turn: game.round(),
            health: player.hero.health,
            shop: player.shop.offers().to_vec(),
        })
    }
}

/// An action announced to the peer, so its log can show it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(flatten)]
    pub action: RelayAction,
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RelayAction {
    #[serde(rename_all = "camelCase")]
    BuyElement { element_name: String },
    FuseElements { element1: String, element2: String, result: String },
    #[serde(rename_all = "camelCase")]
    SellElement { element_name: String },
    EndTurn,
}

impl RelayAction {
    /// The announcement for an applied action. Moves, rerolls and alchemy
    /// are not announced.
    #[must_use]
    pub fn from_event(event: &ActionEvent) -> Option<Self> {
        match event {
            ActionEvent::Bought { name, .. } => Some(RelayAction::BuyElement {
                element_name: name.clone(),
            }),
            ActionEvent::Sold { name, .. } => Some(RelayAction::SellElement {
                element_name: name.clone(),
            }),
            ActionEvent::Fused { first, second, result } => Some(RelayAction::FuseElements {
                element1: first.clone(),
                element2: second.clone(),
                result: result.clone(),
            }),
            ActionEvent::TurnEnded => Some(RelayAction::EndTurn),
            ActionEvent::Moved { .. }
            | ActionEvent::Rerolled { .. }
            | ActionEvent::Distilled { .. }
            | ActionEvent::Extracted { .. } => None,
        }
    }

    /// Log line for the peer's action.
    #[must_use]
    pub fn describe(&self, player: &str) -> String {
        match self {
            RelayAction::BuyElement { element_name } => format!("{player} bought {element_name}"),
            RelayAction::FuseElements { element1, element2, result } => {
                format!("{player} fused {element1} + {element2} = {result}")
            }
            RelayAction::SellElement { element_name } => format!("{player} sold {element_name}"),
            RelayAction::EndTurn => format!("{player} ended their turn"),
        }
    }
}

/// A peer's board, ready to fight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleStart {
    pub opponent_army: Vec<UnitInstance>,
    pub opponent_name: String,
}

impl BattleStart {
    /// The army with impossible stats repaired: negative attack becomes 0
    /// and units without health are dropped.
    #[must_use]
    pub fn sanitized_army(&self) -> Vec<UnitInstance> {
        self.opponent_army
            .iter()
            .filter(|unit| unit.health > 0)
            .cloned()
            .map(|mut unit| {
                unit.attack = unit.attack.max(0);
                unit.max_health = unit.max_health.max(unit.health);
                unit
            })
            .collect()
    }

    /// Fight this army with player `id` in `game`.
    pub fn fight(&self, game: &mut Game, id: PlayerId) -> Result<BattleReport, GameError> {
        game.battle_remote(id, &self.opponent_name, &self.sanitized_army())
    }
}
