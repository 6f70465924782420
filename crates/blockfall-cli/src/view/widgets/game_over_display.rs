use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Clear, Widget},
};

use crate::view::widgets::style;

/// The "Game Over!" banner with the restart prompt, centered over its area.
#[derive(Debug, Default)]
pub struct GameOverDisplay;

impl GameOverDisplay {
    const WIDTH: u16 = 18;
    const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self
    }
}

impl Widget for GameOverDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Constraint::Length(Self::WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(Self::HEIGHT)])
            .flex(Flex::Center)
            .areas(area);

        Clear.render(area, buf);
        let text = Text::from(vec![
            Line::styled("Game Over!", style::GAME_OVER),
            Line::default(),
            Line::styled("Press R to restart", style::DEFAULT),
        ])
        .style(style::DEFAULT)
        .centered();
        text.render(area, buf);
    }
}
