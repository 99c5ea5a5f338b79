use iced::{Element, Subscription};

use crate::{
    models::snake::snake_config::{Result, SessionConfig},
    view::View,
    views::snake::snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
};

pub struct State {
    screen: SnakeGameScreen,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeGameMessage),
}

impl State {
    /// Builds the application around a default-tuned session.
    ///
    /// # Errors
    ///
    /// Fails if the default config cannot start a session.
    pub fn new(seed: u64) -> Result<Self> {
        Ok(Self {
            screen: SnakeGameScreen::new(SessionConfig::default(), seed)?,
        })
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            State::update(state, next);
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{key::Named, Key};

    use super::*;
    use crate::models::snake::heading::Heading;

    fn key(named: Named) -> Message {
        Message::Snake(SnakeGameMessage::Key(Key::Named(named)))
    }

    #[test]
    fn test_update_routes_messages_to_the_screen() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut state = State::new(1).unwrap();
        State::update(&mut state, key(Named::ArrowUp));
        assert_eq!(state.screen.view_model().session().heading(), Heading::Up);
        State::update(&mut state, key(Named::ArrowDown));
        assert_eq!(state.screen.view_model().session().heading(), Heading::Up);
    }
}
