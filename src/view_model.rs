//! View models sit between `iced` messages and the snake session.

use crate::app::Message;

pub trait ViewModel {
    /// Applies a message to the underlying model. A returned message is fed
    /// back into the application.
    fn update(&mut self, message: Message) -> Option<Message>;
}
