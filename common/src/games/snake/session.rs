use std::time::Duration;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use crate::persistence::BestScoreStore;
use super::game_state::SnakeGameState;
use super::input::{propose_direction, DirectionChange};
use super::observer::GameObserver;
use super::rules::advance;
use super::settings::SnakeSettings;
use super::types::Direction;

/// What the tick scheduler should do after a session call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerCommand {
    Keep,
    Start(Duration),
    Stop,
    Restart(Duration),
}

/// One player's game: the current state, the best score and the collaborators.
pub struct GameSession<O: GameObserver> {
    settings: SnakeSettings,
    state: SnakeGameState,
    rng: SessionRng,
    best_score: u32,
    store: Box<dyn BestScoreStore>,
    persist_best: bool,
    observer: O,
}

impl<O: GameObserver> GameSession<O> {
    pub fn new(
        settings: SnakeSettings,
        store: Box<dyn BestScoreStore>,
        observer: O,
    ) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid snake settings: {}", e))?;

        let (best_score, persist_best) = match store.load_best_score() {
            Ok(score) => (score, true),
            Err(e) => {
                log!("Best score storage unavailable, keeping it for this session only: {}", e);
                (0, false)
            }
        };

        let mut rng = SessionRng::from_optional_seed(settings.seed);
        let state = SnakeGameState::new(&settings, &mut rng);
        log!(
            "New session on {}x{} board, seed {}, best score {}",
            settings.tile_count,
            settings.tile_count,
            rng.seed(),
            best_score
        );

        let session = Self {
            settings,
            state,
            rng,
            best_score,
            store,
            persist_best,
            observer,
        };
        session.render();
        Ok(session)
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn is_best_score_persistent(&self) -> bool {
        self.persist_best
    }

    /// A direction after game over starts a fresh game heading that way.
    pub fn on_directional_input(&mut self, direction: Direction) -> SchedulerCommand {
        if self.state.is_game_over() {
            self.reset();
        }

        match propose_direction(&mut self.state, direction) {
            DirectionChange::Accepted { started: true } => {
                log!("Game started heading {:?}", direction);
                self.render();
                SchedulerCommand::Start(self.state.speed_interval())
            }
            DirectionChange::Accepted { started: false } | DirectionChange::Rejected(_) => {
                SchedulerCommand::Keep
            }
        }
    }

    pub fn on_start_or_resume(&mut self) -> SchedulerCommand {
        if self.state.is_game_over() {
            self.reset();
        }
        if self.state.is_running() {
            return SchedulerCommand::Keep;
        }

        self.state.start();
        log!("Game started");
        self.render();
        SchedulerCommand::Start(self.state.speed_interval())
    }

    pub fn on_reset_requested(&mut self) -> SchedulerCommand {
        self.reset();
        SchedulerCommand::Stop
    }

    pub fn tick(&mut self) -> SchedulerCommand {
        let outcome = advance(&mut self.state, &mut self.rng);

        if outcome.ate_food {
            self.observer.on_food_eaten();
            self.record_score();
        }

        if outcome.speed_changed {
            log!("Speed changed to {}ms", self.state.speed_interval_ms());
            self.observer.on_speed_changed(self.state.speed_interval());
        }

        self.render();

        if let Some(reason) = outcome.ended {
            self.record_score();
            log!("Game over ({:?}), final score {}", reason, self.state.score());
            self.observer.on_game_over(reason, self.state.score());
            return SchedulerCommand::Stop;
        }

        if outcome.speed_changed {
            return SchedulerCommand::Restart(self.state.speed_interval());
        }

        SchedulerCommand::Keep
    }

    fn reset(&mut self) {
        self.state = SnakeGameState::new(&self.settings, &mut self.rng);
        log!("Game reset");
        self.render();
    }

    fn record_score(&mut self) {
        let score = self.state.score();
        if score <= self.best_score {
            return;
        }

        self.best_score = score;
        if self.persist_best
            && let Err(e) = self.store.save_best_score(score)
        {
            log!("Failed to save best score {}: {}", score, e);
        }
        self.observer.on_new_best(score);
    }

    fn render(&self) {
        self.observer.render_frame(&self.state.snapshot(self.best_score));
    }
}
