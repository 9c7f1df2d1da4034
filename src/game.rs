use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::body::Body;
use crate::collision::{collides_with_pickup, deadly_collision, DeathReason};
use crate::config::{GameConfig, GridSize};
use crate::input::GameInput;
use crate::movement::advance;
use crate::pickup::Pickup;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Paused,
    Running,
    Lost,
    QuitRequested,
}

/// What happened during one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickOutcome {
    pub ate_pickup: bool,
    pub death: Option<DeathReason>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub body: Body,
    pub pickup: Pickup,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    config: GameConfig,
    rng: StdRng,
    time_till_next_move: i64,
}

impl GameState {
    /// Creates a paused game with an entropy-seeded pickup generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let pickup = Pickup::spawn(&mut rng, config.grid);
        let body = Body::new(config.speed);
        let time_till_next_move = i64::from(body.speed());

        Self {
            body,
            pickup,
            status: GameStatus::Paused,
            death_reason: None,
            tick_count: 0,
            config,
            rng,
            time_till_next_move,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    /// Milliseconds left before the next tick fires.
    #[must_use]
    pub fn time_till_next_move(&self) -> i64 {
        self.time_till_next_move
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.status == GameStatus::QuitRequested
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Quit => self.set_status(GameStatus::QuitRequested),
            GameInput::Direction(direction) => {
                if !self.body.request_direction(direction) {
                    trace!(?direction, "ignored reversing turn");
                }
            }
            GameInput::StartPause => match self.status {
                GameStatus::Paused => self.set_status(GameStatus::Running),
                GameStatus::Running => self.set_status(GameStatus::Paused),
                GameStatus::Lost => self.restart(),
                GameStatus::QuitRequested => {}
            },
        }
    }

    /// Feeds elapsed wall-clock time into the step accumulator and runs at
    /// most one tick when it runs out.
    pub fn update(&mut self, elapsed_ms: u64) -> Option<TickOutcome> {
        if self.status != GameStatus::Running {
            return None;
        }

        let elapsed = i64::try_from(elapsed_ms).unwrap_or(i64::MAX);
        self.time_till_next_move = self.time_till_next_move.saturating_sub(elapsed);
        if self.time_till_next_move > 0 {
            return None;
        }

        let outcome = self.tick();
        self.time_till_next_move = i64::from(self.body.speed());
        outcome
    }

    /// Advances the simulation by one grid step. Does nothing unless running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.status != GameStatus::Running {
            return None;
        }

        let grid = self.config.grid;
        let length_before = self.body.len();

        advance(&mut self.body);
        self.tick_count += 1;
        trace!(tick = self.tick_count, head = ?self.body.head(), "tick");

        if self.body.len() > length_before {
            debug!(
                length = self.body.len(),
                speed_ms = self.body.speed(),
                "body grew"
            );
        }

        let ate_pickup = collides_with_pickup(&self.body, self.pickup.position);
        if ate_pickup {
            let eaten = self.pickup.position;
            self.body.queue_growth();
            self.pickup.relocate(&mut self.rng, grid);
            debug!(
                eaten = ?eaten,
                next = ?self.pickup.position,
                pending_growth = self.body.pending_growth(),
                "pickup consumed"
            );
        }

        let death = deadly_collision(&self.body, grid);
        if let Some(reason) = death {
            self.death_reason = Some(reason);
            self.set_status(GameStatus::Lost);
        }

        Some(TickOutcome { ate_pickup, death })
    }

    /// Rebuilds the body and moves the pickup. The step countdown keeps the
    /// value set by the losing tick.
    fn restart(&mut self) {
        self.body.reset();
        self.pickup.relocate(&mut self.rng, self.config.grid);
        self.death_reason = None;
        self.set_status(GameStatus::Running);
    }

    fn set_status(&mut self, next: GameStatus) {
        if self.status == next {
            return;
        }

        info!(
            from = ?self.status,
            to = ?next,
            length = self.body.len(),
            reason = ?self.death_reason,
            "game state changed"
        );
        self.status = next;
    }
}
