//! Fixed tuning of a snake session and the crate's error type.
use std::{fmt, time::Duration};

use super::grid::Grid;

/// Play-field width in cells (320 px / 24 px tiles).
pub const GRID_WIDTH: u16 = 13;
/// Play-field height in cells (240 px / 24 px tiles).
pub const GRID_HEIGHT: u16 = 10;
/// Time between two simulation steps.
pub const MILLIS_BETWEEN_STEPS: u64 = 100;
/// Most food items alive at once.
pub const MAX_FOOD: usize = 4;
/// How long an uneaten food item stays on the board.
pub const FOOD_LIFETIME_MILLIS: u64 = 4_000;
/// Delay before the next spawn once the board is full of food.
pub const SPAWN_THROTTLE_MILLIS: u64 = 1_000;
/// Food is flagged as about to expire when less than this is left.
pub const EXPIRY_WARNING_MILLIS: u64 = 1_000;
/// Length of a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;
/// Points per food item eaten.
pub const FOOD_REWARD: u32 = 10;
/// Lives at the start of a session.
pub const INITIAL_LIVES: u32 = 3;
/// Random draws tried before falling back to scanning for free cells.
pub const SPAWN_ATTEMPTS: usize = 64;

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    InvalidGridSize,
    GridTooSmallForSnake,
    InvalidTickInterval,
    InvalidLives,
    InvalidSnakeLength,
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::InvalidGridSize => write!(f, "grid dimensions must be non-zero"),
            SnakeError::GridTooSmallForSnake => {
                write!(f, "grid cannot hold the initial snake left of its centre")
            }
            SnakeError::InvalidTickInterval => write!(f, "tick interval must be non-zero"),
            SnakeError::InvalidLives => write!(f, "a session needs at least one life"),
            SnakeError::InvalidSnakeLength => write!(f, "initial snake length must be at least 1"),
        }
    }
}

impl std::error::Error for SnakeError {}

/// Everything a [`crate::models::snake::snake_game::SnakeSession`] needs to know up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid: Grid,
    pub tick_interval: Duration,
    pub max_food: usize,
    pub food_lifetime: Duration,
    pub spawn_throttle: Duration,
    pub initial_snake_length: usize,
    pub food_reward: u32,
    pub initial_lives: u32,
    pub spawn_attempts: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            tick_interval: Duration::from_millis(MILLIS_BETWEEN_STEPS),
            max_food: MAX_FOOD,
            food_lifetime: Duration::from_millis(FOOD_LIFETIME_MILLIS),
            spawn_throttle: Duration::from_millis(SPAWN_THROTTLE_MILLIS),
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            food_reward: FOOD_REWARD,
            initial_lives: INITIAL_LIVES,
            spawn_attempts: SPAWN_ATTEMPTS,
        }
    }
}

impl SessionConfig {
    /// Default tuning on a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid: Grid::new(width, height),
            ..Default::default()
        }
    }

    /// Checks that a session can be built from this config.
    ///
    /// # Errors
    ///
    /// Returns the first [`SnakeError`] describing an unusable setting.
    pub fn validate(&self) -> Result<()> {
        if self.grid.width() == 0 || self.grid.height() == 0 {
            return Err(SnakeError::InvalidGridSize);
        }
        if self.initial_snake_length == 0 {
            return Err(SnakeError::InvalidSnakeLength);
        }
        // the snake is laid out leftwards from the centre cell
        let behind_head = self.initial_snake_length - 1;
        if usize::from(self.grid.width() / 2) < behind_head {
            return Err(SnakeError::GridTooSmallForSnake);
        }
        if self.tick_interval.is_zero() {
            return Err(SnakeError::InvalidTickInterval);
        }
        if self.initial_lives == 0 {
            return Err(SnakeError::InvalidLives);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.grid, Grid::new(13, 10));
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.max_food, 4);
        assert_eq!(config.food_lifetime, Duration::from_secs(4));
        assert_eq!(config.spawn_throttle, Duration::from_secs(1));
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_unusable_settings() {
        assert_eq!(
            SessionConfig::with_grid(0, 10).validate(),
            Err(SnakeError::InvalidGridSize)
        );
        assert_eq!(
            SessionConfig::with_grid(3, 10).validate(),
            Err(SnakeError::GridTooSmallForSnake)
        );
        assert_eq!(SessionConfig::with_grid(4, 1).validate(), Ok(()));

        let mut config = SessionConfig::default();
        config.tick_interval = Duration::ZERO;
        assert_eq!(config.validate(), Err(SnakeError::InvalidTickInterval));

        let mut config = SessionConfig::default();
        config.initial_lives = 0;
        assert_eq!(config.validate(), Err(SnakeError::InvalidLives));

        let mut config = SessionConfig::default();
        config.initial_snake_length = 0;
        assert_eq!(config.validate(), Err(SnakeError::InvalidSnakeLength));
    }
}
