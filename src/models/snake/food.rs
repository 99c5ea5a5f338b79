//! Time-limited food items and the policy that spawns and expires them.
use std::{collections::VecDeque, time::Duration};

use log::{trace, warn};
use rand::{seq::SliceRandom, Rng};

use super::{
    grid::{Cell, Grid},
    snake_config::{SessionConfig, EXPIRY_WARNING_MILLIS},
};

/// A single piece of food on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodItem {
    pub position: Cell,
    pub spawned_at: Duration,
    pub lifetime: Duration,
}

impl FoodItem {
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.spawned_at)
    }

    /// Time left before the item expires, zero once it has.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.lifetime.saturating_sub(self.elapsed(now))
    }

    /// `remaining / lifetime` in `[0, 1]`.
    #[must_use]
    pub fn remaining_fraction(&self, now: Duration) -> f32 {
        if self.lifetime.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f32() / self.lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// True during the final second of life, when renderers flash the item.
    #[must_use]
    pub fn is_expiring(&self, now: Duration) -> bool {
        self.remaining(now) < Duration::from_millis(EXPIRY_WARNING_MILLIS)
    }

    #[must_use]
    pub fn is_stale(&self, now: Duration) -> bool {
        self.elapsed(now) >= self.lifetime
    }
}

/// Owns every [`FoodItem`] and the deadline gating the next spawn.
#[derive(Clone, Debug)]
pub struct FoodManager {
    items: Vec<FoodItem>,
    next_spawn_deadline: Option<Duration>,
    max_food: usize,
    lifetime: Duration,
    spawn_throttle: Duration,
    spawn_attempts: usize,
}

impl FoodManager {
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.max_food),
            next_spawn_deadline: None,
            max_food: config.max_food,
            lifetime: config.food_lifetime,
            spawn_throttle: config.spawn_throttle,
            spawn_attempts: config.spawn_attempts,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_food
    }

    #[must_use]
    pub fn next_spawn_deadline(&self) -> Option<Duration> {
        self.next_spawn_deadline
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.items.iter().any(|item| item.position == cell)
    }

    /// Drops all food and forgets the spawn deadline.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_spawn_deadline = None;
    }

    /// Removes every item whose lifetime has run out at `now`.
    pub fn expire_stale(&mut self, now: Duration) {
        self.items.retain(|item| !item.is_stale(now));
    }

    /// Removes the first item sitting on `cell`. Returns whether one was eaten.
    pub fn consume(&mut self, cell: Cell) -> bool {
        match self.items.iter().position(|item| item.position == cell) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the spawn policy allows an attempt at `now`.
    #[must_use]
    pub fn can_spawn(&self, now: Duration) -> bool {
        !self.is_full() && !matches!(self.next_spawn_deadline, Some(deadline) if now < deadline)
    }

    /// Places one item when the policy allows it.
    ///
    /// While below capacity the next attempt may follow immediately; once the
    /// cap is reached further spawns wait for the throttle delay. Returns the
    /// new item's cell, or `None` if no spawn happened.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        grid: &Grid,
        snake: &VecDeque<Cell>,
        rng: &mut R,
    ) -> Option<Cell> {
        if !self.can_spawn(now) {
            return None;
        }
        let Some(position) = self.pick_free_cell(grid, snake, rng) else {
            warn!("No where left to place food");
            return None;
        };
        trace!("Spawned food at {position:?}");
        self.items.push(FoodItem {
            position,
            spawned_at: now,
            lifetime: self.lifetime,
        });
        self.next_spawn_deadline = if self.is_full() {
            Some(now + self.spawn_throttle)
        } else {
            Some(now)
        };
        Some(position)
    }

    fn is_free(&self, cell: Cell, snake: &VecDeque<Cell>) -> bool {
        !snake.contains(&cell) && !self.contains(cell)
    }

    fn pick_free_cell<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        snake: &VecDeque<Cell>,
        rng: &mut R,
    ) -> Option<Cell> {
        let width = i32::from(grid.width());
        let height = i32::from(grid.height());
        for _ in 0..self.spawn_attempts {
            let candidate = Cell::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if self.is_free(candidate, snake) {
                return Some(candidate);
            }
        }
        // crowded board: sample uniformly from what is actually left
        let available: Vec<Cell> = grid
            .cells()
            .filter(|cell| self.is_free(*cell, snake))
            .collect();
        available.choose(rng).copied()
    }
}
