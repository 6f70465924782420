use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::view::widgets::style;

#[derive(Debug)]
pub struct ScoreDisplay {
    score: usize,
}

impl ScoreDisplay {
    pub fn new(score: usize) -> Self {
        Self { score }
    }

    pub fn height() -> u16 {
        1
    }
}

impl Widget for ScoreDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::styled(format!("Score: {}", self.score), style::DEFAULT).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_score() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        ScoreDisplay::new(300).render(area, &mut buf);
        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(text, "Score: 300  ");
    }
}
