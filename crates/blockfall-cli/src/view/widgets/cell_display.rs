use blockfall_engine::Cell;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::{color, style};

/// One board cell drawn as a two-column colored block.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::new(style::EMPTY_DOT, "."),
            Cell::Filled(c) => Self::new(style::bg_only(color::from_engine(c)), ""),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::Color;
    use ratatui::style::Color as TermColor;

    use super::*;

    #[test]
    fn test_filled_cell_uses_piece_color() {
        let display = CellDisplay::from_cell(Cell::Filled(Color::PURPLE));
        assert_eq!(display.style.bg, Some(TermColor::Rgb(160, 32, 240)));
        assert_eq!(display.symbol, "");
    }

    #[test]
    fn test_empty_cell_shows_dot() {
        let display = CellDisplay::from_cell(Cell::Empty);
        assert_eq!(display.symbol, ".");
    }

    #[test]
    fn test_render_fills_area() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        CellDisplay::from_cell(Cell::Filled(Color::GREEN)).render(area, &mut buf);
        for x in 0..2 {
            assert_eq!(buf[(x, 0)].bg, TermColor::Rgb(0, 255, 0));
        }
    }
}
