//! One simulation step of the snake.
use super::{
    food::FoodManager,
    grid::{Cell, Grid},
    snake_player::Snake,
};

/// Which obstacle ended a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfCollision,
}

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The head landed on food, which was removed; the snake grew by one.
    Ate(Cell),
    /// Nothing was mutated.
    Collided(CollisionKind),
}

/// Returns the collision `new_head` would cause, if any. Every current cell
/// counts, the tail included, because the tail has not moved yet.
#[must_use]
pub fn check_collision(snake: &Snake, grid: &Grid, new_head: Cell) -> Option<CollisionKind> {
    if !grid.contains(new_head) {
        return Some(CollisionKind::Wall);
    }
    if snake.occupies(new_head) {
        return Some(CollisionKind::SelfCollision);
    }
    None
}

/// Advances `snake` one cell along its buffered heading.
///
/// Collisions are checked before anything changes. Food under the new head is
/// consumed before the tail is trimmed, and eating keeps the tail so the snake
/// grows by exactly one cell.
pub fn advance(snake: &mut Snake, grid: &Grid, food: &mut FoodManager) -> MoveOutcome {
    let new_head = snake.next_head();
    if let Some(kind) = check_collision(snake, grid, new_head) {
        return MoveOutcome::Collided(kind);
    }

    snake.push_head(new_head);
    let grow = food.consume(new_head);
    if grow {
        MoveOutcome::Ate(new_head)
    } else {
        snake.pop_tail();
        MoveOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, time::Duration};

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::models::snake::{heading::Heading, snake_config::SessionConfig};

    fn row_snake(cells: &[(i32, i32)], heading: Heading) -> Snake {
        Snake::from_cells(cells.iter().map(|&(c, r)| Cell::new(c, r)), heading)
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let config = SessionConfig::default();
        let mut food = FoodManager::new(&config);
        let mut snake = row_snake(&[(6, 5), (5, 5), (4, 5)], Heading::Right);

        assert_eq!(advance(&mut snake, &config.grid, &mut food), MoveOutcome::Moved);
        assert_eq!(
            snake.cells(),
            &VecDeque::from(vec![Cell::new(7, 5), Cell::new(6, 5), Cell::new(5, 5)])
        );
    }

    #[test]
    fn test_wall_collision_leaves_snake_untouched() {
        let config = SessionConfig::default();
        let mut food = FoodManager::new(&config);
        let mut snake = row_snake(&[(0, 5), (1, 5), (2, 5)], Heading::Left);
        let before = snake.clone();

        assert_eq!(
            advance(&mut snake, &config.grid, &mut food),
            MoveOutcome::Collided(CollisionKind::Wall)
        );
        assert_eq!(snake, before);
    }

    #[test]
    fn test_self_collision() {
        let config = SessionConfig::default();
        let mut food = FoodManager::new(&config);
        // head at (5,5) heading up into its own body at (5,4)
        let mut snake = row_snake(&[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)], Heading::Left);
        assert!(snake.set_heading(Heading::Up));

        assert_eq!(
            advance(&mut snake, &config.grid, &mut food),
            MoveOutcome::Collided(CollisionKind::SelfCollision)
        );
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_moving_into_tail_collides() {
        let config = SessionConfig::default();
        let mut food = FoodManager::new(&config);
        let mut snake = row_snake(&[(5, 5), (6, 5), (6, 4), (5, 4)], Heading::Left);
        assert!(snake.set_heading(Heading::Up));

        assert_eq!(
            advance(&mut snake, &config.grid, &mut food),
            MoveOutcome::Collided(CollisionKind::SelfCollision)
        );
    }

    #[test]
    fn test_eating_grows_by_one() {
        let config = SessionConfig::with_grid(4, 1);
        let mut food = FoodManager::new(&config);
        let mut rng = StdRng::seed_from_u64(0);
        let mut snake = row_snake(&[(2, 0), (1, 0), (0, 0)], Heading::Right);
        // the only free cell is straight ahead
        let placed = food.try_spawn(Duration::ZERO, &config.grid, snake.cells(), &mut rng);
        assert_eq!(placed, Some(Cell::new(3, 0)));

        assert_eq!(
            advance(&mut snake, &config.grid, &mut food),
            MoveOutcome::Ate(Cell::new(3, 0))
        );
        assert_eq!(snake.len(), 4);
        assert!(food.is_empty());
    }
}
