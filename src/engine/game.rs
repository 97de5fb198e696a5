//! The game engine: turn order, item pool, AI dispatch, termination.

use im::Vector;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, EngineError, GameConfig, GameRng, GameRngState, PlayerId};
use crate::items::{draw_pool, Item};
use crate::players::Player;
use crate::policy::{Decision, DecisionPolicy, Difficulty, TierPolicy};

use super::history::{MoveKind, MoveOutcome, MoveRecord};
use super::result::GameResult;
use super::snapshot::{GameSnapshot, ItemSnapshot, PlayerSnapshot};

/// Who sits in the seats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// A human against one AI seat (player index 1) in a two-player game.
    #[default]
    SingleOpponent,
    /// Every seat is human.
    Multiplayer,
}

/// One engine instance runs one game at a time.
///
/// ## Lifecycle
///
/// 1. `Engine::new(config)` validates the config and seeds the RNG.
/// 2. `initialize_game` (or `initialize_game_with_items`) resets everything
///    and starts a game.
/// 3. The driver issues `human_pick_fraction`, `skip_turn` or `ai_make_move`
///    until `is_game_over()`, reading `game_state()` in between.
///
/// Every command either commits fully or returns an error with the engine
/// untouched. Each committed command consumes exactly one turn.
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    rng: GameRng,
    players: Vec<Player>,
    available_items: Vec<Item>,
    current_player: PlayerId,
    turn_number: u32,
    game_over: bool,
    policy_assignments: FxHashMap<PlayerId, Difficulty>,
    history: Vector<MoveRecord>,
}

impl Engine {
    /// Create an engine seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create an engine with an injected RNG.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            players: Vec::new(),
            available_items: Vec::new(),
            current_player: PlayerId::new(0),
            turn_number: 0,
            game_over: false,
            policy_assignments: FxHashMap::default(),
            history: Vector::new(),
        })
    }

    // === Setup ===

    /// Start a new game with a freshly drawn item pool.
    pub fn initialize_game<S: AsRef<str>>(
        &mut self,
        names: &[S],
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<(), ConfigError> {
        check_player_count(names.len())?;
        let mut pool_rng = self.rng.fork();
        let items = draw_pool(&self.config, &mut pool_rng)?;
        self.start(names, mode, difficulty, items);
        Ok(())
    }

    /// Start a new game with a caller-provided item pool.
    ///
    /// Depleted items in `items` are dropped.
    pub fn initialize_game_with_items<S: AsRef<str>>(
        &mut self,
        names: &[S],
        mode: GameMode,
        difficulty: Difficulty,
        items: Vec<Item>,
    ) -> Result<(), ConfigError> {
        check_player_count(names.len())?;
        self.start(names, mode, difficulty, items);
        Ok(())
    }

    fn start<S: AsRef<str>>(
        &mut self,
        names: &[S],
        mode: GameMode,
        difficulty: Difficulty,
        mut items: Vec<Item>,
    ) {
        items.retain(|item| !item.is_depleted());

        self.players = names
            .iter()
            .map(|name| Player::new(name.as_ref(), self.config.bag_capacity))
            .collect();
        self.available_items = items;
        self.current_player = PlayerId::new(0);
        self.turn_number = 1;
        self.game_over = false;
        self.policy_assignments.clear();
        self.history = Vector::new();

        match (mode, names.len()) {
            (GameMode::SingleOpponent, 2) => {
                self.policy_assignments.insert(PlayerId::new(1), difficulty);
            }
            (GameMode::SingleOpponent, count) => {
                warn!(
                    "single-opponent mode needs exactly 2 players, got {count}; \
                     all seats are human"
                );
            }
            (GameMode::Multiplayer, _) => {}
        }

        info!(
            "game started: {} players, {} items, {} AI seats",
            self.players.len(),
            self.available_items.len(),
            self.policy_assignments.len()
        );
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Items still in the pool, in pool order.
    #[must_use]
    pub fn available_items(&self) -> &[Item] {
        &self.available_items
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    /// The player whose turn it is, or `None` before the first game.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player.index())
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True if the current seat is played by an AI policy.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.policy_assignments.contains_key(&self.current_player)
    }

    /// Difficulty of an AI seat, `None` for human seats.
    #[must_use]
    pub fn ai_difficulty(&self, player: PlayerId) -> Option<Difficulty> {
        self.policy_assignments.get(&player).copied()
    }

    /// Largest fraction of pool item `index` the current player can take.
    ///
    /// Returns 0 for an invalid index, a depleted item, or no active game.
    #[must_use]
    pub fn max_available_fraction(&self, index: usize) -> f64 {
        match (self.current_player(), self.available_items.get(index)) {
            (Some(player), Some(item)) if !item.is_depleted() => player.available_fraction(item),
            _ => 0.0,
        }
    }

    /// Result of a finished game; `None` while the game is running.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        let totals: Vec<f64> = self.players.iter().map(Player::total_value).collect();
        GameResult::from_totals(&totals)
    }

    /// Name of the unique winner, if the game is over and not drawn.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner()? {
            GameResult::Winner(id) => self.players.get(id.index()).map(Player::name),
            GameResult::Draw => None,
        }
    }

    /// Every consumed turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Checkpoint of the engine RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read-only view for renderers.
    #[must_use]
    pub fn game_state(&self) -> GameSnapshot {
        GameSnapshot {
            players: self
                .players
                .iter()
                .zip(PlayerId::all(self.players.len()))
                .map(|(player, id)| PlayerSnapshot::new(player, self.ai_difficulty(id)))
                .collect(),
            available_items: self.available_items.iter().map(ItemSnapshot::from).collect(),
            current_player: self.current_player.index(),
            turn_number: self.turn_number,
            game_over: self.game_over,
            winner: self.winner_name().map(str::to_string),
        }
    }

    // === Commands ===

    /// Current human player takes up to `fraction` of pool item `index`.
    ///
    /// The fraction is clamped to what fits in the bag.
    pub fn human_pick_fraction(
        &mut self,
        index: usize,
        fraction: f64,
    ) -> Result<MoveOutcome, EngineError> {
        if self.players.is_empty() {
            return Err(EngineError::NoActiveGame);
        }
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(EngineError::NotPlayersTurn);
        }
        let len = self.available_items.len();
        let item = self
            .available_items
            .get_mut(index)
            .ok_or(EngineError::InvalidItemIndex { index, len })?;
        if item.is_depleted() {
            return Err(EngineError::ItemDepleted);
        }

        let player = &mut self.players[self.current_player.index()];
        let max_fraction = player.available_fraction(item);
        if max_fraction <= 0.0 {
            return Err(EngineError::InsufficientCapacity);
        }
        if fraction.is_nan() {
            return Err(EngineError::InvalidFraction);
        }
        let fraction = fraction.min(max_fraction);
        if fraction <= 0.0 {
            return Err(EngineError::InvalidFraction);
        }

        let pickup = player.add_item_fraction(item, fraction)?;
        let outcome = MoveOutcome {
            player: self.current_player,
            fraction: pickup.fraction,
            fragment: pickup.fragment,
        };
        debug!("{} (turn {}): {}", self.current_player, self.turn_number, outcome);
        self.finish_pick(&outcome);
        Ok(outcome)
    }

    /// Pass the turn to the next player.
    ///
    /// Also used when the current player's bag is already full.
    pub fn skip_turn(&mut self) {
        if self.players.is_empty() {
            return;
        }
        debug!("{} (turn {}): skip", self.current_player, self.turn_number);
        self.record(MoveKind::Skip);
        self.advance_turn();
    }

    /// Let the current AI seat move.
    ///
    /// Returns `None` without consuming a turn if the seat is human. Otherwise
    /// a turn is always consumed; `None` then means the AI took nothing.
    pub fn ai_make_move(&mut self) -> Option<MoveOutcome> {
        let difficulty = self.ai_difficulty(self.current_player)?;
        let seat = self.current_player.index();

        if self.players[seat].is_full() {
            self.skip_turn();
            return None;
        }

        let policy = TierPolicy::for_tier(difficulty, self.config.policy_profile);
        let decision = policy.decide(&self.available_items, &self.players[seat], &mut self.rng);

        if let Decision::Take { index, fraction } = decision {
            let applied = match self.available_items.get_mut(index) {
                Some(item) if fraction > 0.0 => {
                    self.players[seat].add_item_fraction(item, fraction)
                }
                _ => Err(EngineError::NoViableMove),
            };
            match applied {
                Ok(pickup) => {
                    let outcome = MoveOutcome {
                        player: self.current_player,
                        fraction: pickup.fraction,
                        fragment: pickup.fragment,
                    };
                    debug!(
                        "{} [{}] (turn {}): {}",
                        self.current_player, difficulty, self.turn_number, outcome
                    );
                    self.finish_pick(&outcome);
                    return Some(outcome);
                }
                Err(err) => {
                    warn!("{} [{}] move rejected: {}", self.current_player, difficulty, err);
                }
            }
        } else {
            debug!("{} [{}]: {}", self.current_player, difficulty, EngineError::NoViableMove);
        }

        self.record(MoveKind::Declined);
        self.advance_turn();
        None
    }

    /// Change every AI seat's difficulty, effective from its next move.
    pub fn set_ai_difficulty(&mut self, difficulty: Difficulty) {
        for level in self.policy_assignments.values_mut() {
            *level = difficulty;
        }
        info!("AI difficulty set to {difficulty}");
    }

    // === Turn handling ===

    fn finish_pick(&mut self, outcome: &MoveOutcome) {
        self.record(MoveKind::from(outcome));
        self.available_items.retain(|item| !item.is_depleted());
        self.advance_turn();
    }

    fn record(&mut self, kind: MoveKind) {
        self.history.push_back(MoveRecord {
            turn: self.turn_number,
            player: self.current_player,
            kind,
        });
    }

    fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.players.len());
        self.turn_number += 1;

        let was_over = self.game_over;
        self.game_over =
            self.players.iter().all(Player::is_full) || self.available_items.is_empty();

        if self.game_over && !was_over {
            let turns = self.history.len();
            match self.winner() {
                Some(GameResult::Winner(id)) => info!("game over after {turns} turns: {id} wins"),
                _ => info!("game over after {turns} turns: draw"),
            }
        }
    }
}

fn check_player_count(count: usize) -> Result<(), ConfigError> {
    match count {
        0 => Err(ConfigError::NoPlayers),
        1..=255 => Ok(()),
        _ => Err(ConfigError::TooManyPlayers(count)),
    }
}
