use std::time::{Duration, Instant};

use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::snake::{
        grid::Cell,
        heading::Heading,
        snake_config::{Result, SessionConfig},
        snake_game::{Phase, SnakeSession, StepOutcome},
    },
    view_model::ViewModel,
    views::snake::snake_game_screen::SnakeGameMessage,
};

/// How often the host polls the session. The session's own tick gate keeps
/// the snake at a fixed speed regardless of this value.
pub const POLL_INTERVAL_MILLIS: u64 = 16;
/// Flash period for food in its final second.
pub const FLASH_PERIOD_MILLIS: u128 = 100;

/// What to draw in one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeBlock {
    Empty,
    Food,
    Head(Heading),
    Body(Heading),
}

/// Bridges `iced` messages and a [`SnakeSession`].
///
/// Owns the session clock: every timer [`Instant`] is turned into the time
/// elapsed since the view model was created.
#[derive(Debug)]
pub struct SnakeViewModel {
    session: SnakeSession,
    started: Instant,
    now: Duration,
}

impl SnakeViewModel {
    /// # Errors
    ///
    /// Returns a [`crate::models::snake::snake_config::SnakeError`] if the
    /// config cannot start a session.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            session: SnakeSession::new(config, seed)?,
            started: Instant::now(),
            now: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn session(&self) -> &SnakeSession {
        &self.session
    }

    #[must_use]
    pub fn get_time_between_polls(&self) -> u64 {
        POLL_INTERVAL_MILLIS
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.phase() == Phase::GameOver
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Score: {}  Lives: {}",
            self.session.score(),
            self.session.lives()
        )
    }

    /// Advances the session to the timer instant `at`.
    pub fn tick(&mut self, at: Instant) -> StepOutcome {
        self.now = at.saturating_duration_since(self.started);
        self.session.step(self.now)
    }

    fn handle_key(&mut self, key: &Key) {
        if self.is_game_over() {
            if matches!(key, Key::Named(Named::Space)) {
                debug!("New session requested");
                self.session.request_new_session();
            }
            return;
        }
        if let Some(heading) = Self::heading_for_key(key) {
            self.session.set_heading(heading);
        }
    }

    #[must_use]
    pub fn heading_for_key(key: &Key) -> Option<Heading> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(Heading::Up),
                Named::ArrowDown => Some(Heading::Down),
                Named::ArrowLeft => Some(Heading::Left),
                Named::ArrowRight => Some(Heading::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(Heading::Up),
                "s" | "S" => Some(Heading::Down),
                "a" | "A" => Some(Heading::Left),
                "d" | "D" => Some(Heading::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }

    /// Direction a segment faces. The head uses the buffered heading; every
    /// other segment points at the one in front of it.
    #[must_use]
    pub fn segment_heading(&self, index: usize) -> Heading {
        let snake = self.session.snake();
        if index == 0 {
            return self.session.heading();
        }
        match (snake.get(index - 1), snake.get(index)) {
            (Some(prev), Some(curr)) => {
                Heading::from_delta(prev.col - curr.col, prev.row - curr.row)
                    .unwrap_or_else(|| self.session.heading())
            }
            _ => self.session.heading(),
        }
    }

    /// Food flashes on and off during its final second.
    #[must_use]
    pub fn is_food_visible(&self, cell: Cell) -> bool {
        self.session
            .food()
            .iter()
            .find(|item| item.position == cell)
            .is_some_and(|item| {
                !item.is_expiring(self.now)
                    || (item.elapsed(self.now).as_millis() / FLASH_PERIOD_MILLIS) % 2 == 0
            })
    }

    /// Row-major snapshot of the board for rendering.
    #[must_use]
    pub fn get_backing_grid(&self) -> Vec<Vec<SnakeBlock>> {
        let grid = self.session.grid();
        let mut blocks =
            vec![vec![SnakeBlock::Empty; usize::from(grid.width())]; usize::from(grid.height())];
        let mut put = |cell: Cell, block: SnakeBlock| {
            let (Ok(col), Ok(row)) = (usize::try_from(cell.col), usize::try_from(cell.row)) else {
                warn!("Cell {cell:?} has negative coordinates; not drawing it");
                return;
            };
            if let Some(slot) = blocks.get_mut(row).and_then(|r| r.get_mut(col)) {
                *slot = block;
            }
        };
        for item in self.session.food() {
            if self.is_food_visible(item.position) {
                put(item.position, SnakeBlock::Food);
            }
        }
        // body drawn after food so a freshly eaten cell shows the snake
        for (index, cell) in self.session.snake().iter().enumerate().rev() {
            let heading = self.segment_heading(index);
            let block = if index == 0 {
                SnakeBlock::Head(heading)
            } else {
                SnakeBlock::Body(heading)
            };
            put(*cell, block);
        }
        blocks
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_message) = message;
        match snake_message {
            SnakeGameMessage::Key(key) => self.handle_key(&key),
            SnakeGameMessage::Timer(at) => {
                self.tick(at);
            }
        }
        None
    }
}
