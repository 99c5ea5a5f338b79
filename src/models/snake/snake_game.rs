use std::{collections::VecDeque, time::Duration};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    food::{FoodItem, FoodManager},
    grid::{Cell, Grid},
    heading::Heading,
    movement::{self, CollisionKind, MoveOutcome},
    snake_config::{Result, SessionConfig},
    snake_player::Snake,
    tick_scheduler::TickScheduler,
};

/// Whether the session still accepts simulation steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Lives, score and phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub lives: u32,
    pub score: u32,
    pub phase: Phase,
}

/// What a call to [`SnakeSession::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No simulation step ran.
    Idle,
    Moved,
    Ate(Cell),
    /// A life was lost and the board was reset.
    LifeLost(CollisionKind),
    /// The last life was lost; the board is frozen.
    GameOver(CollisionKind),
}

/// A lives-bounded snake play-through.
///
/// The session is the only owner of its state. Hosts feed it a direction
/// intent through [`SnakeSession::set_heading`] and call
/// [`SnakeSession::step`] on every poll with the current session-clock time.
#[derive(Clone, Debug)]
pub struct SnakeSession {
    config: SessionConfig,
    snake: Snake,
    food: FoodManager,
    scheduler: TickScheduler,
    state: SessionState,
    rng: StdRng,
}

impl SnakeSession {
    /// Starts a session at time zero.
    ///
    /// # Errors
    ///
    /// Returns a [`super::snake_config::SnakeError`] if `config` is unusable.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        debug!("New snake session with seed {seed}: {config:?}");
        Ok(Self {
            snake: Self::initial_snake(&config),
            food: FoodManager::new(&config),
            scheduler: TickScheduler::new(config.tick_interval, Duration::ZERO),
            state: SessionState {
                lives: config.initial_lives,
                score: 0,
                phase: Phase::Playing,
            },
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    fn initial_snake(config: &SessionConfig) -> Snake {
        Snake::new(
            config.grid.center(),
            Heading::Right,
            config.initial_snake_length,
        )
    }

    /// Buffers a direction change. Reversals and input after game over are ignored.
    pub fn set_heading(&mut self, requested: Heading) {
        if self.state.phase == Phase::GameOver {
            return;
        }
        self.snake.set_heading(requested);
    }

    /// Starts over with full lives and zero score. Only acts in [`Phase::GameOver`].
    pub fn request_new_session(&mut self) {
        if self.state.phase != Phase::GameOver {
            return;
        }
        debug!("Starting a new session");
        self.state = SessionState {
            lives: self.config.initial_lives,
            score: 0,
            phase: Phase::Playing,
        };
        self.reset_board();
        self.scheduler.clear();
    }

    /// Advances the simulation if a tick is due at `now`.
    pub fn step(&mut self, now: Duration) -> StepOutcome {
        if self.state.phase == Phase::GameOver {
            return StepOutcome::Idle;
        }
        if !self.scheduler.poll(now) {
            self.food.expire_stale(now);
            return StepOutcome::Idle;
        }

        let outcome = match movement::advance(&mut self.snake, &self.config.grid, &mut self.food) {
            MoveOutcome::Collided(kind) => return self.lose_life(kind, now),
            MoveOutcome::Ate(cell) => {
                self.state.score += self.config.food_reward;
                StepOutcome::Ate(cell)
            }
            MoveOutcome::Moved => StepOutcome::Moved,
        };

        self.food.expire_stale(now);
        self.food
            .try_spawn(now, &self.config.grid, self.snake.cells(), &mut self.rng);
        outcome
    }

    fn lose_life(&mut self, kind: CollisionKind, now: Duration) -> StepOutcome {
        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives > 0 {
            debug!(
                "Snake hit {kind:?}; {} lives left, resetting board",
                self.state.lives
            );
            self.reset_board();
            self.scheduler.reset_at(now);
            StepOutcome::LifeLost(kind)
        } else {
            info!("Game over. Final score {}", self.state.score);
            self.state.phase = Phase::GameOver;
            StepOutcome::GameOver(kind)
        }
    }

    fn reset_board(&mut self) {
        self.snake = Self::initial_snake(&self.config);
        self.food.clear();
    }

    #[must_use]
    pub fn snake(&self) -> &VecDeque<Cell> {
        self.snake.cells()
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.snake.heading()
    }

    #[must_use]
    pub fn food(&self) -> &[FoodItem] {
        self.food.items()
    }

    #[must_use]
    pub fn next_spawn_deadline(&self) -> Option<Duration> {
        self.food.next_spawn_deadline()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn food_mut(&mut self) -> &mut FoodManager {
        &mut self.food
    }

    #[cfg(test)]
    pub(crate) fn set_lives(&mut self, lives: u32) {
        self.state.lives = lives;
    }
}
