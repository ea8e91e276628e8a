//! The turn driver.
//!
//! A [`Game`] owns the catalog, the fusion resolver, every player and the
//! game RNG. A round goes like this:
//!
//! 1. `start_round`: gold is reset for the round, relic round-start hooks
//!    run, shops are rerolled, boards are trimmed to their limit, and AI
//!    players shop.
//! 2. Humans call [`Game::apply_action`] until they end their turn. Ending
//!    a turn discards anything left in the player's alchemy slots.
//! 3. Once every living player has ended their turn, [`Game::resolve_round`] pairs the living heroes at random and runs one
//!    battle per pair. The player left over fights a generated board.
//!    Survivors replace boards, heroes heal, then take damage. Dead heroes
//!    are eliminated and the next round starts unless the game is over.
//!
//! Every rejected action returns a [`GameError`] and leaves the game as it
//! was.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::battle::{simulate_battle, BattleResult, HeroHooks, Outcome};
use crate::core::{
    ActionRecord, GameConfig, GameError, GameRng, GameRngState, PlayerAction, PlayerId, PlayerMap,
};
use crate::fusion::{alchemy_result, FusionResolver, RecipeBook};
use crate::units::{Catalog, CustomContent, LoadReport, UnitDefinition, UnitInstance};

use super::hero::HeroState;
use super::opponents::OpponentStrategy;
use super::player::{Player, PlayerSetup};
use super::policy::{GreedyPolicy, ShopPolicy, TurnContext};
use super::relic::Relic;

/// Actions a computer player may take in one shop phase before its turn is
/// ended for it.
const MAX_AI_STEPS: usize = 64;

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    Bought { name: String, cost: i32 },
    Sold { name: String, refund: i32 },
    Fused { first: String, second: String, result: String },
    Moved { name: String },
    Rerolled { cost: i32 },
    /// A board unit was drained into an alchemy slot.
    Distilled { name: String },
    Extracted { inputs: Vec<String>, result: String },
    TurnEnded,
}

/// Who a player fought.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Player(PlayerId),
    Generated(OpponentStrategy),
    Remote(String),
}

/// One battle of a round, from the point of view of `player`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub player: PlayerId,
    pub opponent: Opponent,
    /// Damage `player`'s hero took.
    pub damage_taken: i32,
    /// Damage dealt to the opponent's hero.
    pub damage_dealt: i32,
    pub outcome: Outcome,
    pub log: Vec<String>,
}

/// Everything `resolve_round` did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub battles: Vec<BattleReport>,
    pub eliminated: Vec<PlayerId>,
    /// Set once at most one hero is left.
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

/// Serializable state of a game in progress.
///
/// The catalog and recipes are supplied again on restore. `units` carries
/// every definition the game knew, so units synthesized by fusion or loaded
/// at runtime are registered again if the supplied catalog lacks them.
/// Remembered fusion results are not kept, so a restored game may resolve a
/// not-yet-seen pair differently from the original.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub units: Vec<UnitDefinition>,
    pub round: u32,
    pub players: PlayerMap<Player>,
    pub rng: GameRngState,
    pub fusion_rng: GameRngState,
    pub messages: Vec<String>,
    pub history: im::Vector<ActionRecord>,
}

/// Builder for a [`Game`].
pub struct GameBuilder {
    config: GameConfig,
    catalog: Option<Catalog>,
    recipes: Option<RecipeBook>,
    players: Vec<PlayerSetup>,
    policy: Arc<dyn ShopPolicy>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: None,
            recipes: None,
            players: Vec::new(),
            policy: Arc::new(GreedyPolicy),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Defaults to [`Catalog::builtin`].
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Defaults to [`RecipeBook::builtin`].
    pub fn recipes(mut self, recipes: RecipeBook) -> Self {
        self.recipes = Some(recipes);
        self
    }

    pub fn player(mut self, setup: PlayerSetup) -> Self {
        self.players.push(setup);
        self
    }

    /// Policy used for every AI seat. Defaults to [`GreedyPolicy`].
    pub fn policy(mut self, policy: impl ShopPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Seat the players and start round 1.
    ///
    /// AI players shop immediately, so the returned game is waiting on the
    /// human players.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        let count = self.players.len();
        if !(2..=usize::from(u8::MAX)).contains(&count) {
            return Err(GameError::InvalidPlayerCount(count));
        }

        let root = GameRng::new(seed);
        let mut rng = root.for_context("game");
        let resolver = FusionResolver::new(
            self.recipes.unwrap_or_else(RecipeBook::builtin),
            root.for_context("fusion"),
            self.config.max_tier,
        );

        let config = self.config;
        let players = self
            .players
            .into_iter()
            .map(|setup| {
                let hero = HeroState::new(config.hero_health, 0);
                let mut player = Player::new(setup.name, setup.is_ai, hero, config.base_board_limit);
                player.relic = match setup.relic {
                    Some(relic) => Some(relic),
                    None if setup.is_ai => Some(Relic::random(&mut rng)),
                    None => None,
                };
                player
            })
            .collect();

        let mut game = Game {
            config,
            catalog: self.catalog.unwrap_or_else(Catalog::builtin),
            resolver,
            players: PlayerMap::from_vec(players),
            round: 0,
            rng,
            policy: self.policy,
            messages: VecDeque::new(),
            history: im::Vector::new(),
        };
        game.start_round();
        Ok(game)
    }
}

/// A game in progress.
#[derive(Clone)]
pub struct Game {
    config: GameConfig,
    catalog: Catalog,
    resolver: FusionResolver,
    players: PlayerMap<Player>,
    round: u32,
    rng: GameRng,
    policy: Arc<dyn ShopPolicy>,
    messages: VecDeque<String>,
    history: im::Vector<ActionRecord>,
}

impl Game {
    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recipes(&self) -> &RecipeBook {
        self.resolver.recipes()
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.alive_players().len() <= 1
    }

    /// The last hero standing, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.alive_players().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Whether every living player has ended their turn.
    pub fn all_turns_ended(&self) -> bool {
        self.players.iter().all(|(_, p)| !p.is_alive() || p.turn_ended)
    }

    /// Living players still shopping this round.
    pub fn pending_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive() && !p.turn_ended)
            .map(|(id, _)| id)
            .collect()
    }

    /// Recent notifications, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Every applied action since the game started.
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        &self.history
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Add custom units and fusions to this game's catalog and recipes.
    pub fn load_custom(&mut self, content: &CustomContent) -> LoadReport {
        self.catalog.load_custom(self.resolver.recipes_mut(), content)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Apply one shop-phase action for `id`.
    pub fn apply_action(&mut self, id: PlayerId, action: PlayerAction) -> Result<ActionEvent, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.players.get(id).ok_or(GameError::UnknownPlayer(id))?;
        if !player.is_alive() {
            return Err(GameError::PlayerEliminated(id));
        }
        if player.turn_ended {
            return Err(GameError::TurnAlreadyEnded(id));
        }

        let event = match &action {
            PlayerAction::Buy { slot } => self.buy(id, *slot)?,
            PlayerAction::Sell { slot } => self.sell(id, *slot)?,
            PlayerAction::Fuse { first, second } => self.fuse(id, *first, *second)?,
            PlayerAction::MoveToBack { slot } => self.move_to_back(id, *slot)?,
            PlayerAction::Reroll => self.reroll(id)?,
            PlayerAction::AddToAlchemy { slot } => self.add_to_alchemy(id, *slot)?,
            PlayerAction::ExtractAlchemy => self.extract_alchemy(id)?,
            PlayerAction::EndTurn => self.end_turn(id),
        };

        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_back(ActionRecord::new(id, action, self.round, sequence));
        let text = describe(&self.players[id].name, &event);
        self.notify(text);
        Ok(event)
    }

    fn buy(&mut self, id: PlayerId, slot: usize) -> Result<ActionEvent, GameError> {
        let tier = self.config.shop_tier(self.round);
        let player = &mut self.players[id];
        let offer = player.shop.get(slot).cloned().ok_or(GameError::InvalidShopSlot(slot))?;
        if !player.hero.can_afford(offer.cost) {
            return Err(GameError::NotEnoughGold {
                have: player.hero.gold,
                need: offer.cost,
            });
        }
        if player.board.is_full() {
            return Err(GameError::BoardFull {
                limit: player.board.limit(),
            });
        }
        let unit = self
            .catalog
            .instantiate(&offer.name)
            .ok_or_else(|| GameError::UnknownUnit(offer.name.clone()))?;

        player.hero.spend(offer.cost)?;
        player.board.push(unit)?;
        player.shop.replace_slot(slot, &self.catalog, tier, &mut self.rng);
        Ok(ActionEvent::Bought {
            name: offer.name,
            cost: offer.cost,
        })
    }

    fn sell(&mut self, id: PlayerId, slot: usize) -> Result<ActionEvent, GameError> {
        let refund = self.config.sell_value;
        let player = &mut self.players[id];
        let unit = player.board.remove(slot)?;
        player.hero.gold += refund;
        let dropped = player.board.truncate_to_limit();
        if !dropped.is_empty() {
            let name = player.name.clone();
            self.notify_dropped(&name, &dropped);
        }
        Ok(ActionEvent::Sold { name: unit.name, refund })
    }

    fn fuse(&mut self, id: PlayerId, first: usize, second: usize) -> Result<ActionEvent, GameError> {
        if first == second {
            return Err(GameError::SameSlot);
        }
        let board = &self.players[id].board;
        let a = board.get(first).ok_or(GameError::InvalidBoardSlot(first))?.name.clone();
        let b = board.get(second).ok_or(GameError::InvalidBoardSlot(second))?.name.clone();

        if !FusionResolver::can_fuse(&self.catalog, &a, &b) {
            return Err(GameError::FusionNotAllowed { first: a, second: b });
        }
        let result = self
            .resolver
            .resolve(&mut self.catalog, &a, &b)
            .ok_or_else(|| GameError::FusionNotAllowed {
                first: a.clone(),
                second: b.clone(),
            })?;
        let unit = self
            .catalog
            .instantiate(&result)
            .ok_or_else(|| GameError::UnknownUnit(result.clone()))?;

        let player = &mut self.players[id];
        player.board.fuse(first, second, unit)?;
        let dropped = player.board.truncate_to_limit();
        if !dropped.is_empty() {
            let name = player.name.clone();
            self.notify_dropped(&name, &dropped);
        }
        Ok(ActionEvent::Fused {
            first: a,
            second: b,
            result,
        })
    }

    fn move_to_back(&mut self, id: PlayerId, slot: usize) -> Result<ActionEvent, GameError> {
        let board = &mut self.players[id].board;
        let name = board.get(slot).ok_or(GameError::InvalidBoardSlot(slot))?.name.clone();
        board.move_to_back(slot)?;
        Ok(ActionEvent::Moved { name })
    }

    fn reroll(&mut self, id: PlayerId) -> Result<ActionEvent, GameError> {
        let cost = self.config.reroll_cost;
        let tier = self.config.shop_tier(self.round);
        let size = self.config.shop_size;
        let player = &mut self.players[id];
        player.hero.spend(cost)?;
        player.shop.roll(&self.catalog, tier, size, &mut self.rng);
        Ok(ActionEvent::Rerolled { cost })
    }

    fn add_to_alchemy(&mut self, id: PlayerId, slot: usize) -> Result<ActionEvent, GameError> {
        let slots = self.config.alchemy_slots;
        let player = &mut self.players[id];
        if player.alchemy.len() >= slots {
            return Err(GameError::AlchemyFull { slots });
        }
        let mut unit = player.board.remove(slot)?;
        unit.attack = 0;
        unit.health = 0;
        let name = unit.name.clone();
        player.alchemy.push(unit);

        let dropped = player.board.truncate_to_limit();
        if !dropped.is_empty() {
            let owner = player.name.clone();
            self.notify_dropped(&owner, &dropped);
        }
        Ok(ActionEvent::Distilled { name })
    }

    fn extract_alchemy(&mut self, id: PlayerId) -> Result<ActionEvent, GameError> {
        let need = self.config.alchemy_slots;
        let tier = self.config.alchemy_tier.min(self.config.max_tier);
        let player = &self.players[id];
        if player.alchemy.len() < need {
            return Err(GameError::AlchemyNotReady {
                have: player.alchemy.len(),
                need,
            });
        }
        if player.board.is_full() {
            return Err(GameError::BoardFull {
                limit: player.board.limit(),
            });
        }

        let result = alchemy_result(&self.catalog, tier, &mut self.rng)
            .ok_or_else(|| GameError::UnknownUnit(format!("tier {tier} alchemy result")))?;
        let unit = self
            .catalog
            .instantiate(&result)
            .ok_or_else(|| GameError::UnknownUnit(result.clone()))?;

        let player = &mut self.players[id];
        player.board.push(unit)?;
        let inputs = player.alchemy.drain(..).map(|unit| unit.name).collect();
        tracing::debug!(player = %id, result = %result, "alchemy extracted");
        Ok(ActionEvent::Extracted { inputs, result })
    }

    fn end_turn(&mut self, id: PlayerId) -> ActionEvent {
        let player = &mut self.players[id];
        player.turn_ended = true;
        let lost = std::mem::take(&mut player.alchemy);
        if !lost.is_empty() {
            let text = format!("{}'s alchemy slots crumble, losing {} drained units.", player.name, lost.len());
            self.notify(text);
        }
        ActionEvent::TurnEnded
    }

    /// Let every living AI player shop until its policy ends the turn.
    pub fn run_ai_turns(&mut self) {
        let ids: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| p.is_ai && p.is_alive() && !p.turn_ended)
            .map(|(id, _)| id)
            .collect();
        let policy = Arc::clone(&self.policy);

        for id in ids {
            let mut ctx = TurnContext {
                max_purchases: self.config.max_ai_purchases,
                ..TurnContext::default()
            };
            for _ in 0..MAX_AI_STEPS {
                let action = policy.next_action(&self.players[id], &self.catalog, &mut self.rng, ctx);
                match self.apply_action(id, action) {
                    Ok(ActionEvent::TurnEnded) => break,
                    Ok(ActionEvent::Bought { .. }) => ctx.purchases += 1,
                    Ok(ActionEvent::Fused { .. }) => ctx.fusions += 1,
                    Ok(_) => {}
                    Err(err) => {
                        tracing::debug!(player = %id, %err, "AI action rejected");
                        break;
                    }
                }
            }
            self.players[id].turn_ended = true;
        }
    }

    // =========================================================================
    // Rounds
    // =========================================================================

    /// Fight this round's battles and move on to the next round.
    ///
    /// Fails with [`GameError::WrongPhase`] while any living player is still
    /// shopping.
    pub fn resolve_round(&mut self) -> Result<RoundReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.all_turns_ended() {
            return Err(GameError::WrongPhase);
        }
        let round = self.round;
        let mut order = self.alive_players();
        self.rng.shuffle(&mut order);

        let mut battles = Vec::new();
        for pair in order.chunks(2) {
            match pair {
                &[a, b] => {
                    let result = self.fight_players(a, b);
                    self.notify(format!(
                        "{} vs {}: {} deals {}, {} deals {}.",
                        self.players[a].name,
                        self.players[b].name,
                        self.players[a].name,
                        result.damage_to_b(),
                        self.players[b].name,
                        result.damage_to_a(),
                    ));
                    battles.push(report(a, Opponent::Player(b), &result, true));
                    battles.push(report(b, Opponent::Player(a), &result, false));
                }
                &[a] => {
                    let strategy = OpponentStrategy::random(&mut self.rng);
                    let limit = self.players[a].board.limit();
                    let ghost = strategy.generate(&self.catalog, &self.config, round, limit, &mut self.rng);
                    let result = self.fight_board(a, &ghost);
                    self.notify(format!(
                        "{} vs a generated opponent: {} takes {} damage.",
                        self.players[a].name,
                        self.players[a].name,
                        result.damage_to_a(),
                    ));
                    battles.push(report(a, Opponent::Generated(strategy), &result, true));
                }
                _ => {}
            }
        }

        let eliminated = self.eliminate(&order);
        let game_over = self.is_over();
        let winner = self.winner();
        tracing::info!(round, battles = battles.len(), eliminated = eliminated.len(), game_over, "round resolved");

        if game_over {
            match winner {
                Some(id) => {
                    let text = format!("{} wins the game!", self.players[id].name);
                    self.notify(text);
                }
                None => self.notify("No hero survived. The game is a draw.".to_string()),
            }
        } else {
            self.start_round();
        }

        Ok(RoundReport {
            round,
            battles,
            eliminated,
            game_over,
            winner,
        })
    }

    /// Fight a board submitted by a remote peer.
    ///
    /// Only the local player's side is applied. The round does not advance;
    /// call [`Game::advance_round`] once the exchange with the peer is done.
    pub fn battle_remote(
        &mut self,
        id: PlayerId,
        opponent_name: &str,
        opponent_army: &[UnitInstance],
    ) -> Result<BattleReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.players.get(id).ok_or(GameError::UnknownPlayer(id))?;
        if !player.is_alive() {
            return Err(GameError::PlayerEliminated(id));
        }

        let result = self.fight_board(id, opponent_army);
        self.notify(format!(
            "{} vs {}: {} deals {}, {} deals {}.",
            self.players[id].name,
            opponent_name,
            self.players[id].name,
            result.damage_to_b(),
            opponent_name,
            result.damage_to_a(),
        ));
        self.eliminate(&[id]);
        Ok(report(id, Opponent::Remote(opponent_name.to_string()), &result, true))
    }

    /// Start the next round without fighting, for games whose battles are
    /// resolved elsewhere.
    pub fn advance_round(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.start_round();
        Ok(())
    }

    fn start_round(&mut self) {
        self.round += 1;
        let round = self.round;
        let gold = self.config.gold_for_round(round);
        let tier = self.config.shop_tier(round);
        let size = self.config.shop_size;

        for (_, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            player.hero.gold = gold;
            if let Some(relic) = player.relic {
                relic.round_start(&mut player.hero);
            }
            player.shop.roll(&self.catalog, tier, size, &mut self.rng);
            player.board.truncate_to_limit();
            player.turn_ended = false;
        }

        tracing::info!(round, gold, shop_tier = tier, "round started");
        self.notify(format!("Round {round} begins."));
        self.run_ai_turns();
    }

    fn fight_players(&mut self, a: PlayerId, b: PlayerId) -> BattleResult {
        let result = {
            let (pa, pb) = (&self.players[a], &self.players[b]);
            simulate_battle(
                pa.board.units(),
                pb.board.units(),
                pa.relic.as_ref().map(|r| r as &dyn HeroHooks),
                pb.relic.as_ref().map(|r| r as &dyn HeroHooks),
            )
        };
        apply_side(&mut self.players[a], result.survivors_a.clone(), result.heal_a, result.damage_to_a());
        apply_side(&mut self.players[b], result.survivors_b.clone(), result.heal_b, result.damage_to_b());
        result
    }

    fn fight_board(&mut self, id: PlayerId, opponent: &[UnitInstance]) -> BattleResult {
        let result = {
            let player = &self.players[id];
            simulate_battle(
                player.board.units(),
                opponent,
                player.relic.as_ref().map(|r| r as &dyn HeroHooks),
                None,
            )
        };
        apply_side(&mut self.players[id], result.survivors_a.clone(), result.heal_a, result.damage_to_a());
        result
    }

    fn eliminate(&mut self, ids: &[PlayerId]) -> Vec<PlayerId> {
        let dead: Vec<PlayerId> = ids
            .iter()
            .copied()
            .filter(|&id| !self.players[id].is_alive())
            .collect();
        for &id in &dead {
            let text = format!("{} has been eliminated.", self.players[id].name);
            tracing::info!(player = %id, "eliminated");
            self.notify(text);
        }
        dead
    }

    // =========================================================================
    // Messages and snapshots
    // =========================================================================

    fn notify(&mut self, text: String) {
        tracing::debug!(message = %text);
        self.messages.push_back(text);
        while self.messages.len() > self.config.message_log_len {
            self.messages.pop_front();
        }
    }

    fn notify_dropped(&mut self, player: &str, dropped: &[UnitInstance]) {
        for unit in dropped {
            self.notify(format!("{player}'s {} no longer fits on the board.", unit.name));
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            units: self.catalog.iter().cloned().collect(),
            round: self.round,
            players: self.players.clone(),
            rng: self.rng.state(),
            fusion_rng: self.resolver.rng_state(),
            messages: self.messages.iter().cloned().collect(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot, with the default AI policy.
    ///
    /// Definitions in the snapshot that `catalog` lacks are registered, in
    /// the order the original game learned them.
    pub fn restore(snapshot: GameSnapshot, mut catalog: Catalog, recipes: RecipeBook) -> Self {
        for def in snapshot.units {
            if catalog.contains(&def.name) {
                continue;
            }
            if let Err(err) = catalog.register(def) {
                tracing::warn!(%err, "snapshot unit skipped");
            }
        }
        let resolver = FusionResolver::new(
            recipes,
            GameRng::from_state(&snapshot.fusion_rng),
            snapshot.config.max_tier,
        );
        Self {
            resolver,
            catalog,
            round: snapshot.round,
            players: snapshot.players,
            rng: GameRng::from_state(&snapshot.rng),
            policy: Arc::new(GreedyPolicy),
            messages: snapshot.messages.into_iter().collect(),
            history: snapshot.history,
            config: snapshot.config,
        }
    }
}

fn apply_side(player: &mut Player, survivors: Vec<UnitInstance>, heal: i32, damage: i32) {
    player.board.replace_units(survivors);
    player.hero.heal(heal);
    player.hero.take_damage(damage);
}

fn report(player: PlayerId, opponent: Opponent, result: &BattleResult, first: bool) -> BattleReport {
    let (damage_taken, damage_dealt, outcome) = if first {
        (result.damage_to_a(), result.damage_to_b(), result.outcome())
    } else {
        let flipped = match result.outcome() {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        };
        (result.damage_to_b(), result.damage_to_a(), flipped)
    };
    BattleReport {
        player,
        opponent,
        damage_taken,
        damage_dealt,
        outcome,
        log: result.log.clone(),
    }
}

fn describe(player: &str, event: &ActionEvent) -> String {
    match event {
        ActionEvent::Bought { name, cost } => format!("{player} bought {name} for {cost} gold."),
        ActionEvent::Sold { name, refund } => format!("{player} sold {name} for {refund} gold."),
        ActionEvent::Fused { first, second, result } => {
            format!("{player} fused {first} and {second} into {result}!")
        }
        ActionEvent::Moved { name } => format!("{player} moved {name} to the back."),
        ActionEvent::Rerolled { cost } => format!("{player} rerolled the shop for {cost} gold."),
        ActionEvent::Distilled { name } => format!("{player} drained {name} into an alchemy slot."),
        ActionEvent::Extracted { result, .. } => format!("{player} extracted {result} from the alchemy slots!"),
        ActionEvent::TurnEnded => format!("{player} ended their turn."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{Shop, ShopOffer};

    fn two_humans(seed: u64) -> Game {
        GameBuilder::new()
            .player(PlayerSetup::human("Alice"))
            .player(PlayerSetup::human("Bob"))
            .build(seed)
            .unwrap()
    }

    fn set_shop(game: &mut Game, id: PlayerId, offers: &[(&str, i32)]) {
        game.players[id].shop = Shop::from_offers(
            offers
                .iter()
                .map(|(name, cost)| ShopOffer { name: (*name).to_string(), cost: *cost })
                .collect(),
        );
    }

    fn end_turns(game: &mut Game) {
        for id in game.pending_players() {
            game.apply_action(id, PlayerAction::EndTurn).unwrap();
        }
    }

    fn fill_board(game: &mut Game, id: PlayerId, names: &[&str]) {
        let units = names.iter().map(|name| game.catalog().instantiate(name).unwrap()).collect();
        game.players[id].board.replace_units(units);
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_player_count_validated() {
        let err = GameBuilder::new().player(PlayerSetup::human("Solo")).build(1);
        assert!(matches!(err, Err(GameError::InvalidPlayerCount(1))));
    }

    #[test]
    fn test_first_round_setup() {
        let game = two_humans(3);
        assert_eq!(game.round(), 1);
        for (_, player) in game.players().iter() {
            assert_eq!(player.hero.gold, 3);
            assert_eq!(player.hero.health, 20);
            assert_eq!(player.shop.len(), 5);
            assert!(player.relic.is_none());
        }
    }

    #[test]
    fn test_buy_spends_and_refills() {
        let mut game = two_humans(3);
        set_shop(&mut game, P0, &[("Fire", 3), ("Water", 3)]);
        let event = game.apply_action(P0, PlayerAction::Buy { slot: 0 }).unwrap();
        assert_eq!(event, ActionEvent::Bought { name: "Fire".into(), cost: 3 });

        let player = game.player(P0).unwrap();
        assert_eq!(player.hero.gold, 0);
        assert_eq!(player.board.len(), 1);
        assert_eq!(player.shop.len(), 2);
        assert_eq!(game.history().len(), 1);

        let err = game.apply_action(P0, PlayerAction::Buy { slot: 1 }).unwrap_err();
        assert_eq!(err, GameError::NotEnoughGold { have: 0, need: 3 });
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_buy_rejected_on_full_board() {
        let mut game = two_humans(3);
        game.players[P0].hero.gold = 100;
        for _ in 0..5 {
            set_shop(&mut game, P0, &[("Fire", 3)]);
            game.apply_action(P0, PlayerAction::Buy { slot: 0 }).unwrap();
        }
        set_shop(&mut game, P0, &[("Fire", 3)]);
        let err = game.apply_action(P0, PlayerAction::Buy { slot: 0 }).unwrap_err();
        assert_eq!(err, GameError::BoardFull { limit: 5 });
        assert_eq!(game.player(P0).unwrap().hero.gold, 85);
    }

    #[test]
    fn test_fuse_and_class_gate() {
        let mut game = two_humans(3);
        let units = ["Fire", "Water", "Gear"].map(|name| game.catalog().instantiate(name).unwrap());
        game.players[P0].board.replace_units(units.to_vec());

        let err = game.apply_action(P0, PlayerAction::Fuse { first: 0, second: 2 }).unwrap_err();
        assert_eq!(err, GameError::FusionNotAllowed { first: "Fire".into(), second: "Gear".into() });
        assert_eq!(game.player(P0).unwrap().board.len(), 3);

        let event = game.apply_action(P0, PlayerAction::Fuse { first: 1, second: 0 }).unwrap();
        assert_eq!(
            event,
            ActionEvent::Fused { first: "Water".into(), second: "Fire".into(), result: "Steam".into() }
        );
        let names: Vec<&str> = game.player(P0).unwrap().board.units().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Gear", "Steam"]);
    }

    #[test]
    fn test_sell_reroll_and_end_turn() {
        let mut game = two_humans(9);
        set_shop(&mut game, P0, &[("Fire", 3)]);
        game.apply_action(P0, PlayerAction::Buy { slot: 0 }).unwrap();
        game.apply_action(P0, PlayerAction::Sell { slot: 0 }).unwrap();
        assert_eq!(game.player(P0).unwrap().hero.gold, 1);
        assert!(game.player(P0).unwrap().board.is_empty());

        game.apply_action(P0, PlayerAction::Reroll).unwrap();
        assert_eq!(game.player(P0).unwrap().hero.gold, 0);
        assert_eq!(game.player(P0).unwrap().shop.len(), 5);

        game.apply_action(P0, PlayerAction::EndTurn).unwrap();
        let err = game.apply_action(P0, PlayerAction::Reroll).unwrap_err();
        assert_eq!(err, GameError::TurnAlreadyEnded(P0));
        assert!(!game.all_turns_ended());
    }

    #[test]
    fn test_round_applies_damage_and_advances() {
        let mut game = two_humans(5);
        let steam = game.catalog().instantiate("Steam").unwrap();
        game.players[P0].board.replace_units(vec![steam]);
        end_turns(&mut game);

        let report = game.resolve_round().unwrap();
        assert_eq!(report.round, 1);
        assert_eq!(report.battles.len(), 2);
        assert_eq!(game.round(), 2);

        // Steam is one fusion deep, so an unopposed Steam deals 1.
        assert_eq!(game.player(P1).unwrap().hero.health, 19);
        assert_eq!(game.player(P0).unwrap().hero.health, 20);
        assert_eq!(game.player(P0).unwrap().hero.gold, 4);
    }

    #[test]
    fn test_elimination_ends_game() {
        let mut game = two_humans(5);
        game.players[P1].hero.health = 1;
        let steam = game.catalog().instantiate("Steam").unwrap();
        game.players[P0].board.replace_units(vec![steam]);
        end_turns(&mut game);

        let report = game.resolve_round().unwrap();
        assert!(report.game_over);
        assert_eq!(report.eliminated, vec![P1]);
        assert_eq!(report.winner, Some(P0));
        assert_eq!(game.resolve_round(), Err(GameError::GameOver));
        assert_eq!(game.apply_action(P0, PlayerAction::EndTurn), Err(GameError::GameOver));
    }

    #[test]
    fn test_ai_players_shop() {
        let game = GameBuilder::new()
            .player(PlayerSetup::human("Alice"))
            .player(PlayerSetup::ai("Bot"))
            .build(17)
            .unwrap();
        let bot = game.player(P1).unwrap();
        assert!(bot.turn_ended);
        assert!(bot.relic.is_some());
        assert!(bot.hero.gold >= 0);
        assert!(bot.board.len() <= bot.board.limit());
    }

    #[test]
    fn test_odd_player_fights_generated_board() {
        let mut game = GameBuilder::new()
            .player(PlayerSetup::human("A"))
            .player(PlayerSetup::human("B"))
            .player(PlayerSetup::human("C"))
            .build(2)
            .unwrap();
        end_turns(&mut game);
        let report = game.resolve_round().unwrap();
        assert_eq!(report.battles.len(), 3);
        assert_eq!(
            report.battles.iter().filter(|b| matches!(b.opponent, Opponent::Generated(_))).count(),
            1
        );
    }

    #[test]
    fn test_message_log_is_bounded() {
        let mut game = two_humans(4);
        for _ in 0..20 {
            game.players[P0].hero.gold = 10;
            game.apply_action(P0, PlayerAction::Reroll).unwrap();
        }
        assert_eq!(game.messages().count(), game.config().message_log_len);
        assert_eq!(game.history().len(), 20);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut game = two_humans(12);
        set_shop(&mut game, P0, &[("Fire", 3)]);
        game.apply_action(P0, PlayerAction::Buy { slot: 0 }).unwrap();

        let snapshot = game.snapshot();
        let mut restored = Game::restore(snapshot.clone(), Catalog::builtin(), RecipeBook::builtin());
        assert_eq!(restored.snapshot(), snapshot);

        end_turns(&mut game);
        end_turns(&mut restored);
        game.resolve_round().unwrap();
        restored.resolve_round().unwrap();
        assert_eq!(restored.snapshot(), game.snapshot());
    }

    #[test]
    fn test_round_waits_for_every_turn() {
        let mut game = two_humans(6);
        assert_eq!(game.pending_players(), vec![P0, P1]);
        assert_eq!(game.resolve_round(), Err(GameError::WrongPhase));

        game.apply_action(P0, PlayerAction::EndTurn).unwrap();
        assert_eq!(game.resolve_round(), Err(GameError::WrongPhase));
        assert_eq!(game.round(), 1);

        game.apply_action(P1, PlayerAction::EndTurn).unwrap();
        assert!(game.all_turns_ended());
        assert_eq!(game.resolve_round().unwrap().round, 1);
        assert_eq!(game.pending_players(), vec![P0, P1]);
    }

    #[test]
    fn test_snapshot_keeps_synthesized_units() {
        let content: CustomContent = serde_json::from_str(r#"{"units": {}, "fusions": {"Fire+Water": "Brine"}}"#).unwrap();
        let mut game = two_humans(8);
        game.load_custom(&content);
        fill_board(&mut game, P0, &["Fire", "Water", "Fire"]);
        let event = game.apply_action(P0, PlayerAction::Fuse { first: 0, second: 1 }).unwrap();
        assert!(matches!(event, ActionEvent::Fused { ref result, .. } if result == "Brine"));

        let bytes = crate::persistence::encode_snapshot(&game.snapshot()).unwrap();
        let snapshot = crate::persistence::decode_snapshot(&bytes).unwrap();
        let mut restored = Game::restore(snapshot, Catalog::builtin(), RecipeBook::builtin());
        restored.load_custom(&content);
        assert!(restored.catalog().contains("Brine"));
        assert_eq!(restored.snapshot(), game.snapshot());

        let names: Vec<&str> = restored.player(P0).unwrap().board.units().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Fire", "Brine"]);
        assert!(restored.apply_action(P0, PlayerAction::Fuse { first: 0, second: 1 }).is_ok());
    }

    #[test]
    fn test_alchemy_drains_then_extracts() {
        let mut game = two_humans(10);
        fill_board(&mut game, P0, &["Fire", "Water", "Earth", "Air", "Fire"]);

        for _ in 0..4 {
            let event = game.apply_action(P0, PlayerAction::AddToAlchemy { slot: 0 }).unwrap();
            assert!(matches!(event, ActionEvent::Distilled { .. }));
        }
        assert_eq!(
            game.apply_action(P0, PlayerAction::ExtractAlchemy),
            Err(GameError::AlchemyNotReady { have: 4, need: 5 })
        );
        game.apply_action(P0, PlayerAction::AddToAlchemy { slot: 0 }).unwrap();

        let player = game.player(P0).unwrap();
        assert!(player.board.is_empty());
        assert!(player.alchemy.iter().all(|u| u.attack == 0 && u.health == 0));
        assert_eq!(
            game.apply_action(P0, PlayerAction::AddToAlchemy { slot: 0 }),
            Err(GameError::AlchemyFull { slots: 5 })
        );

        let event = game.apply_action(P0, PlayerAction::ExtractAlchemy).unwrap();
        assert_eq!(
            event,
            ActionEvent::Extracted {
                inputs: ["Fire", "Water", "Earth", "Air", "Fire"].map(String::from).to_vec(),
                result: "Elemental Avatar".into(),
            }
        );
        let player = game.player(P0).unwrap();
        assert!(player.alchemy.is_empty());
        assert_eq!(player.board.len(), 1);
        assert_eq!(player.board.units()[0].attack, 20);
    }

    #[test]
    fn test_alchemy_lost_at_end_of_turn() {
        let mut game = two_humans(10);
        fill_board(&mut game, P0, &["Fire", "Water"]);
        game.apply_action(P0, PlayerAction::AddToAlchemy { slot: 1 }).unwrap();
        assert_eq!(game.player(P0).unwrap().alchemy.len(), 1);

        game.apply_action(P0, PlayerAction::EndTurn).unwrap();
        let player = game.player(P0).unwrap();
        assert!(player.alchemy.is_empty());
        assert_eq!(player.board.len(), 1);
        assert!(game.messages().any(|m| m.contains("alchemy slots crumble")));
    }

    #[test]
    fn test_extract_needs_board_space() {
        let mut game = two_humans(10);
        fill_board(&mut game, P0, &["Fire", "Water", "Earth", "Air", "Fire"]);
        let drained = game.players[P0].board.units().to_vec();
        game.players[P0].alchemy = drained;
        fill_board(&mut game, P0, &["Fire", "Water", "Earth", "Air", "Fire"]);
        assert_eq!(
            game.apply_action(P0, PlayerAction::ExtractAlchemy),
            Err(GameError::BoardFull { limit: 5 })
        );
        assert_eq!(game.player(P0).unwrap().alchemy.len(), 5);
    }
}
