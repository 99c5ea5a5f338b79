//! The snake simulation: grid, food lifecycle, movement and session state.
//!
//! Nothing in here touches a clock, an input device or a renderer. Hosts
//! pass the current time into [`snake_game::SnakeSession::step`] and read the
//! state back through its query methods.

pub mod food;
pub mod grid;
pub mod heading;
pub mod movement;
pub mod snake_config;
pub mod snake_game;
pub mod snake_player;
pub mod tick_scheduler;
