use iced::Task;
use log::{debug, error};
use retrosnake::{app::State, views::snake::snake_game_screen::CELL_SIZE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("retrosnake=info"))
        .init();
    let seed: u64 = rand::random();
    debug!("Session seed {seed}");
    let state = State::new(seed).inspect_err(|e| error!("Could not start a session: {e}"))?;
    let cell = f32::from(CELL_SIZE);
    iced::application("Snake Game", State::update, State::view)
        .window_size(iced::Size::new(cell * 16.0, cell * 14.0))
        .subscription(State::subscription)
        .run_with(move || (state, Task::none()))?;
    Ok(())
}
