use std::time::Instant;

use tracing::{debug, info, warn};

use crate::clock::{Clock, ClockEvent, ElapsedTime};
use crate::config::GameConfig;
use crate::engine::{DeathReason, Outcome, TickEngine};
use crate::error::GameError;
use crate::game::{GameState, HighScore};
use crate::grid::GridModel;
use crate::input::{Direction, InputRouter, SwipePoint};
use crate::score::ScoreStore;

/// Everything a presenter needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: &'a GameState,
    pub high_score: u32,
    /// True once this game has beaten the record that stood when it began.
    pub new_record: bool,
    pub elapsed: ElapsedTime,
}

/// Output side of a session: draws frames and overlays.
pub trait Presenter {
    /// Redraws the board and HUD from `view` alone.
    fn render(&mut self, view: &View<'_>);
    fn show_start(&mut self);
    fn show_game_over(&mut self, reason: DeathReason);
    fn hide_overlay(&mut self);
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Ready,
    Running,
    GameOver(DeathReason),
}

/// One interactive game: input, timers, engine, and score persistence.
#[derive(Debug)]
pub struct GameSession<S: ScoreStore> {
    engine: TickEngine,
    state: GameState,
    router: InputRouter,
    clock: Clock,
    high_score: HighScore,
    record_to_beat: u32,
    store: S,
    phase: Phase,
}

impl<S: ScoreStore> GameSession<S> {
    /// Builds a session for `grid` from runtime settings.
    pub fn new(config: &GameConfig, grid: GridModel, store: S) -> Result<Self, GameError> {
        let engine = match config.seed {
            Some(seed) => TickEngine::new_with_seed(grid, config.food_placement, seed),
            None => TickEngine::new(grid, config.food_placement),
        };

        Self::with_parts(
            engine,
            InputRouter::new(config.swipe_threshold),
            Clock::new(config.tick_interval, config.elapsed_interval),
            store,
        )
    }

    /// Builds a session from preconfigured parts.
    pub fn with_parts(
        mut engine: TickEngine,
        router: InputRouter,
        clock: Clock,
        store: S,
    ) -> Result<Self, GameError> {
        let state = engine.fresh_state()?;
        let high_score = HighScore::new(store.get());

        Ok(Self {
            engine,
            state,
            router,
            clock,
            high_score,
            record_to_beat: high_score.get(),
            store,
            phase: Phase::Ready,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score.get()
    }

    #[must_use]
    pub fn elapsed(&self) -> ElapsedTime {
        self.clock.elapsed()
    }

    #[must_use]
    pub fn view(&self) -> View<'_> {
        View {
            state: &self.state,
            high_score: self.high_score.get(),
            new_record: self.state.score > self.record_to_beat,
            elapsed: self.clock.elapsed(),
        }
    }

    /// Shows the start overlay over the initial board.
    pub fn open(&mut self, presenter: &mut impl Presenter) {
        presenter.render(&self.view());
        presenter.show_start();
    }

    /// Starts play from the start screen. Repeated requests are ignored.
    pub fn start(&mut self, now: Instant, presenter: &mut impl Presenter) {
        if self.phase != Phase::Ready || !self.clock.start(now) {
            return;
        }

        info!(
            rows = self.engine.grid().rows,
            cols = self.engine.grid().cols,
            "game started"
        );
        self.phase = Phase::Running;
        presenter.hide_overlay();
        presenter.render(&self.view());
    }

    /// Discards the current game and starts a fresh one immediately.
    pub fn restart(&mut self, now: Instant, presenter: &mut impl Presenter) -> Result<(), GameError> {
        self.clock.stop();
        self.state = self.engine.fresh_state()?;
        self.router.reset();
        self.record_to_beat = self.high_score.get();
        self.clock.restart(now);
        self.phase = Phase::Running;

        info!(high_score = self.high_score.get(), "game restarted");
        presenter.hide_overlay();
        presenter.render(&self.view());
        Ok(())
    }

    /// Records a directional key press.
    pub fn on_direction(&mut self, direction: Direction) {
        if let Some(accepted) = self.router.key(direction, self.state.direction) {
            debug!(?accepted, "direction queued");
        }
    }

    pub fn on_swipe_start(&mut self, point: SwipePoint) {
        self.router.swipe_start(point);
    }

    pub fn on_swipe_move(&mut self, point: SwipePoint) {
        self.router.swipe_move(point);
    }

    pub fn on_swipe_end(&mut self) {
        if let Some(accepted) = self.router.swipe_end(self.state.direction) {
            debug!(?accepted, "swipe queued");
        }
    }

    /// Fires every timer due at or before `now`.
    pub fn update(&mut self, now: Instant, presenter: &mut impl Presenter) {
        while let Some(event) = self.clock.next_event(now) {
            match event {
                ClockEvent::Tick => self.tick(presenter),
                ClockEvent::Second(_) => presenter.render(&self.view()),
            }
        }
    }

    fn tick(&mut self, presenter: &mut impl Presenter) {
        let intended = self.router.take_pending().unwrap_or(self.state.direction);

        match self.engine.step(&self.state, intended) {
            Outcome::Continue(next) => {
                if next.score > self.state.score {
                    debug!(score = next.score, length = next.snake.len(), "food eaten");
                    self.record_score(next.score);
                }
                self.state = next;
                presenter.render(&self.view());
            }
            Outcome::GameOver(reason) => {
                self.clock.stop();
                self.state.running = false;
                self.phase = Phase::GameOver(reason);

                info!(
                    ?reason,
                    score = self.state.score,
                    elapsed = %self.clock.elapsed(),
                    "game over"
                );
                presenter.render(&self.view());
                presenter.show_game_over(reason);
            }
        }
    }

    fn record_score(&mut self, score: u32) {
        if !self.high_score.observe(score) {
            return;
        }

        match self.store.set(score) {
            Ok(()) => debug!(high_score = score, "high score saved"),
            Err(error) => warn!(%error, "failed to save high score"),
        }
    }
}
