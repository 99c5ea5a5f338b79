use std::time::{Duration, Instant};

use iced::{
    keyboard::{self, Key},
    time,
    widget::{column, container, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::snake::{
        heading::Heading,
        snake_config::{Result, SessionConfig},
    },
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::{SnakeBlock, SnakeViewModel},
};

/// Pixel size of one grid cell.
pub const CELL_SIZE: u16 = 24;

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    Key(Key),
    Timer(Instant),
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    /// # Errors
    ///
    /// Fails if `config` cannot start a session.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            view_model: SnakeViewModel::new(config, seed)?,
        })
    }

    #[must_use]
    pub fn view_model(&self) -> &SnakeViewModel {
        &self.view_model
    }

    fn glyph(heading: Heading) -> &'static str {
        match heading {
            Heading::Up => "^",
            Heading::Down => "v",
            Heading::Left => "<",
            Heading::Right => ">",
        }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let mut grid_view = Column::new();

        let make_container = |label: &'static str, color: Color| {
            container(text(label).color(Color::BLACK))
                .width(CELL_SIZE)
                .height(CELL_SIZE)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: Color::from_rgba(1.0, 1.0, 1.0, 0.05),
                        width: 1.0,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        for grid_row in self.view_model.get_backing_grid() {
            let mut row = Row::new();
            for entry in grid_row {
                let cell = match entry {
                    SnakeBlock::Empty => make_container(" ", Color::BLACK),
                    SnakeBlock::Food => make_container(" ", Color::from_rgb(1.0, 0.0, 0.0)),
                    SnakeBlock::Head(heading) => {
                        make_container(Self::glyph(heading), Color::from_rgb(0.0, 1.0, 0.0))
                    }
                    SnakeBlock::Body(heading) => {
                        make_container(Self::glyph(heading), Color::from_rgba(0.0, 0.7, 0.0, 0.8))
                    }
                };
                row = row.push(cell);
            }
            grid_view = grid_view.push(row);
        }

        let mut game = column![text(self.view_model.status_line()), grid_view].spacing(10);
        if self.view_model.is_game_over() {
            game = game.push(text("Game Over! Press Space to restart."));
        }

        container(game)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let timer = time::every(Duration::from_millis(
            self.view_model.get_time_between_polls(),
        ))
        .map(SnakeGameMessage::Timer)
        .map(Message::Snake);
        let keyboard =
            keyboard::on_key_press(|key, _| Some(Message::Snake(SnakeGameMessage::Key(key))));
        Subscription::batch(vec![timer, keyboard])
    }
}
