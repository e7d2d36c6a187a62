//! Turn loop.
//!
//! `GameEngine::new` performs setup (shuffle, deal stocks) and leaves the
//! game in progress. Each `take_turn` refills the current hand, asks the
//! strategy for moves until it ends the turn or hits the move guard, then
//! advances the turn counter and checks for a winner. Once a winner is
//! recorded the engine refuses further turns.

use tracing::{debug, info, warn};

use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::core::player::PlayerId;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::GameState;
use crate::rules::{GameResult, IllegalMove, RulesEngine};
use crate::zones::Placement;

use super::rules::JumpboRules;
use super::strategy::{Decision, Strategy, TurnView};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished { winner: PlayerId },
}

/// What happened during one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// Turn number that was played.
    pub turn: u32,
    /// Cards drawn by the start-of-turn refill.
    pub refilled: usize,
    pub applied: u32,
    pub rejected: u32,
    /// The strategy never ended the turn and the move guard stopped it.
    pub hit_move_limit: bool,
}

/// A running Jumpbo game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    rules: JumpboRules,
    state: GameState,
    rng: GameRng,
}

impl GameEngine {
    /// Set up a game: shuffle the full card set into `draw` and deal each
    /// player's stock from it.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let root = GameRng::new(config.seed);
        let mut deal_rng = root.for_context("deal");
        let mut state = GameState::new(config.player_count);

        for card in config.card_set.cards() {
            state.table.deal_back(Placement::Draw, card)?;
        }
        state.table.shuffle(Placement::Draw, &mut deal_rng)?;

        for player in PlayerId::all(config.player_count) {
            for _ in 0..config.stock_size {
                state.deal_from_draw(player, Placement::Stock)?;
            }
        }

        info!(
            players = config.player_count,
            stock = config.stock_size,
            draw = state.draw_size(),
            seed = config.seed,
            "game set up"
        );

        Ok(Self {
            rules: JumpboRules::new(config),
            state,
            rng: root.for_context("play"),
        })
    }

    /// Pick up a saved game: a state taken from [`GameEngine::state`] and
    /// the RNG position from [`GameEngine::rng_state`]. A state that already
    /// has a winner resumes as finished.
    pub fn resume(config: GameConfig, state: GameState, rng: &GameRngState) -> Result<Self, EngineError> {
        config.validate()?;
        if state.player_count() != config.player_count {
            return Err(EngineError::PlayerCountMismatch {
                config: config.player_count,
                state: state.player_count(),
            });
        }

        debug!(turn = state.turn, seed = rng.seed, word_pos = rng.word_pos, "game resumed");
        Ok(Self {
            rules: JumpboRules::new(config),
            state,
            rng: GameRng::from_state(rng),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn rules(&self) -> &JumpboRules {
        &self.rules
    }

    /// Read-only game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.state.winner {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::InProgress,
        }
    }

    /// RNG position, for reproducing a game from a log line.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Play one turn for the current player.
    pub fn take_turn<S>(&mut self, strategy: &mut S) -> Result<TurnSummary, EngineError>
    where
        S: Strategy + ?Sized,
    {
        if self.state.winner.is_some() {
            return Err(EngineError::GameFinished);
        }

        let player = self.state.current_player();
        let mut summary = TurnSummary {
            player,
            turn: self.state.turn,
            ..TurnSummary::default()
        };
        debug!(turn = summary.turn, %player, "turn start");

        if self.config().refill_hand {
            summary.refilled = self.rules.refill_hand(&mut self.state, player, &mut self.rng)?;
        }

        let max_moves = self.config().max_moves_per_turn;
        let mut last_rejection: Option<IllegalMove> = None;
        let mut ended = false;

        for _ in 0..max_moves {
            let view = TurnView::new(&self.state, player, summary.applied, last_rejection.as_ref());
            let mv = match strategy.decide(&view) {
                Decision::EndTurn => {
                    ended = true;
                    break;
                }
                Decision::Play(mv) => mv,
            };

            match self.rules.try_apply(&mut self.state, player, &mv, &mut self.rng)? {
                Ok(outcome) => {
                    debug!(%player, %mv, ?outcome, "move applied");
                    summary.applied += 1;
                    last_rejection = None;
                    strategy.on_applied(&mv, &outcome);
                }
                Err(reason) => {
                    warn!(%player, %mv, %reason, "move rejected");
                    summary.rejected += 1;
                    strategy.on_rejected(&mv, &reason);
                    last_rejection = Some(reason);
                }
            }
        }

        if !ended {
            warn!(%player, max_moves, "move limit reached, ending turn");
            summary.hit_move_limit = true;
        }

        self.state.turn = self.state.turn.saturating_add(1);
        debug!(
            turn = summary.turn,
            %player,
            applied = summary.applied,
            rejected = summary.rejected,
            "turn end"
        );

        if let Some(GameResult::Winner(winner)) = self.rules.is_terminal(&self.state) {
            self.state.winner = Some(winner);
            info!(%winner, turns = self.state.turn, "game over");
        }

        Ok(summary)
    }

    /// Play turns until someone wins or the configured turn limit runs out.
    ///
    /// `strategies` holds one strategy per seat, in seat order. Without
    /// `max_turns` this only returns once a strategy wins, so strategies
    /// that never play need [`GameConfig::with_max_turns`].
    pub fn play_game(&mut self, strategies: &mut [Box<dyn Strategy>]) -> Result<GameResult, EngineError> {
        let expected = self.state.player_count();
        if strategies.len() != expected {
            return Err(EngineError::StrategyCount {
                expected,
                got: strategies.len(),
            });
        }

        loop {
            if let Some(winner) = self.state.winner {
                return Ok(GameResult::Winner(winner));
            }
            if let Some(max) = self.config().max_turns {
                if self.state.turn >= max {
                    info!(turns = self.state.turn, "turn limit reached without a winner");
                    return Ok(GameResult::TurnLimit { turns: self.state.turn });
                }
            }

            let seat = self.state.current_player().index();
            self.take_turn(strategies[seat].as_mut())?;
        }
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::jumpbo::EndTurnStrategy;
    use crate::rules::Move;

    fn engine(players: usize) -> GameEngine {
        GameEngine::new(GameConfig::new(players).unwrap().with_seed(11)).unwrap()
    }

    #[test]
    fn test_setup_counts() {
        for (players, stock) in [(2, 30), (3, 30), (4, 20), (5, 20)] {
            let engine = engine(players);
            let state = engine.state();

            assert_eq!(engine.status(), GameStatus::InProgress);
            assert_eq!(state.turn, 0);
            assert_eq!(state.draw_size(), 162 - players * stock);
            for player in state.players.values() {
                assert_eq!(player.stock_size(), stock);
                assert_eq!(player.hand_size(), 0);
            }
            assert_eq!(state.total_cards(), 162);
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = engine(3);
        let b = engine(3);
        assert_eq!(a.state(), b.state());

        let c = GameEngine::new(GameConfig::new(3).unwrap().with_seed(12)).unwrap();
        assert_ne!(a.state(), c.state());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::new(2).unwrap();
        config.player_count = 6;
        assert!(matches!(
            GameEngine::new(config),
            Err(EngineError::Config(crate::core::ConfigError::PlayerCount(6)))
        ));
    }

    #[test]
    fn test_turn_refills_hand() {
        let mut engine = engine(2);
        let summary = engine.take_turn(&mut EndTurnStrategy).unwrap();

        assert_eq!(summary.refilled, 5);
        assert_eq!(summary.player, PlayerId::new(0));
        assert_eq!(engine.state().player(PlayerId::new(0)).hand_size(), 5);
        assert_eq!(engine.state().draw_size(), 97);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn test_move_guard_ends_turn() {
        let mut engine = GameEngine::new(
            GameConfig::new(2).unwrap().with_max_moves_per_turn(3).with_hand_refill(false),
        )
        .unwrap();
        let mut draw_forever = |_: &TurnView<'_>| Decision::Play(Move::draw());

        let summary = engine.take_turn(&mut draw_forever).unwrap();

        assert!(summary.hit_move_limit);
        assert_eq!(summary.applied, 3);
        assert_eq!(engine.state().player(PlayerId::new(0)).hand_size(), 3);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn test_rejection_is_reported() {
        let mut engine = engine(2);
        let mut seen = Vec::new();
        let mut strategy = |view: &TurnView<'_>| {
            seen.push(view.last_rejection.cloned());
            if view.last_rejection.is_some() {
                Decision::EndTurn
            } else {
                Decision::Play(Move::discard(crate::core::Card::WILD, Placement::Build1))
            }
        };

        let summary = engine.take_turn(&mut strategy).unwrap();

        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.applied, 0);
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_none());
        assert!(matches!(seen[1], Some(IllegalMove::WrongDestination { .. })));

        // Nothing moved besides the refill
        let state = engine.state();
        assert_eq!(state.table.size(Placement::Build1).unwrap(), 0);
        assert_eq!(state.player(PlayerId::new(0)).hand_size(), 5);
        assert_eq!(state.total_cards(), 162);
    }

    #[test]
    fn test_play_game_needs_one_strategy_per_seat() {
        let mut engine = engine(3);
        let mut strategies: Vec<Box<dyn Strategy>> = vec![Box::new(EndTurnStrategy)];
        assert_eq!(
            engine.play_game(&mut strategies),
            Err(EngineError::StrategyCount { expected: 3, got: 1 })
        );
    }

    #[test]
    fn test_resume_continues_identically() {
        let mut original = engine(2);
        let mut draw_three = |view: &TurnView<'_>| {
            if view.moves_made < 3 {
                Decision::Play(Move::draw())
            } else {
                Decision::EndTurn
            }
        };
        for _ in 0..4 {
            original.take_turn(&mut draw_three).unwrap();
        }

        let mut resumed =
            GameEngine::resume(original.config().clone(), original.state().clone(), &original.rng_state()).unwrap();
        assert_eq!(resumed.rng_state(), original.rng_state());

        for _ in 0..6 {
            original.take_turn(&mut draw_three).unwrap();
            resumed.take_turn(&mut draw_three).unwrap();
        }
        assert_eq!(resumed.state(), original.state());
        assert_eq!(resumed.rng_state(), original.rng_state());
    }

    #[test]
    fn test_resume_rejects_other_table_size() {
        let saved = engine(3);
        let err = GameEngine::resume(GameConfig::new(2).unwrap(), saved.state().clone(), &saved.rng_state())
            .unwrap_err();
        assert_eq!(err, EngineError::PlayerCountMismatch { config: 2, state: 3 });
    }

    #[test]
    fn test_turn_counter_saturates() {
        let saved = engine(2);
        let mut state = saved.state().clone();
        state.turn = u32::MAX;
        let mut engine = GameEngine::resume(saved.config().clone(), state, &saved.rng_state()).unwrap();

        let summary = engine.take_turn(&mut EndTurnStrategy).unwrap();

        assert_eq!(summary.turn, u32::MAX);
        assert_eq!(engine.turn(), u32::MAX);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_display_dump() {
        let engine = engine(2);
        let dump = engine.to_string();
        assert!(dump.starts_with("Game Cards:\n"));
        assert!(dump.contains("        draw: (102)"));
        assert!(dump.contains("Player 2:"));
        assert!(dump.ends_with("WINNER: <none>\n"));
    }
}
