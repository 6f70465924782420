use std::time::Duration;

use blockfall_engine::GameController;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    widgets::Block as BlockWidget,
};

use crate::{
    tui::{App, RenderMode, Runtime},
    view::widgets::{BoardDisplay, GameOverDisplay, KeyBinding, KeyBindingDisplay, ScoreDisplay},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Restart,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Left => Some(Self::MoveLeft),
            KeyCode::Right => Some(Self::MoveRight),
            KeyCode::Down => Some(Self::SoftDrop),
            KeyCode::Up => Some(Self::Rotate),
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Char('r' | 'R') => Some(Self::Restart),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings(game_over: bool) -> &'static [KeyBinding<'static>] {
        if game_over {
            &[(&["r"], "Restart"), (&["q", "Esc"], "Quit")]
        } else {
            &[
                (&["←", "→"], "Move"),
                (&["↓"], "Soft Drop"),
                (&["↑"], "Rotate"),
                (&["q", "Esc"], "Quit"),
            ]
        }
    }
}

/// The interactive game: keyboard in, board and score out.
#[derive(Debug)]
pub struct PlayApp {
    controller: GameController,
    frame_rate: f64,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(controller: GameController, frame_rate: f64) -> Self {
        Self {
            controller,
            frame_rate,
            is_exiting: false,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.controller.move_left(),
            Action::MoveRight => self.controller.move_right(),
            Action::SoftDrop => self.controller.soft_drop(),
            Action::Rotate => self.controller.rotate(),
            // No effect unless the game is over.
            Action::Restart => self.controller.reset(),
            Action::Quit => self.is_exiting = true,
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.frame_rate));
        runtime.set_render_mode(RenderMode::throttled_from_rate(self.frame_rate));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        if let Some(key) = event.as_key_event()
            && key.kind == KeyEventKind::Press
            && let Some(action) = Action::from_key_event(&key)
        {
            self.apply(action);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game_over = self.controller.is_game_over();
        let board_display = BoardDisplay::new(self.controller.board())
            .falling_piece(self.controller.active_piece())
            .block(BlockWidget::bordered().title(" BLOCKFALL "));

        let [score_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(ScoreDisplay::height()),
            Constraint::Length(board_display.height()),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let column = Layout::horizontal([Constraint::Length(board_display.width())])
            .flex(Flex::Center);
        let [score_area] = score_area.layout(&column);
        let [board_area] = board_area.layout(&column);

        frame.render_widget(ScoreDisplay::new(self.controller.score()), score_area);
        frame.render_widget(&board_display, board_area);
        if game_over {
            frame.render_widget(GameOverDisplay::new(), board_area);
        }
        frame.render_widget(
            KeyBindingDisplay::new(Action::bindings(game_over)),
            help_area,
        );
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        self.controller.tick(elapsed);
    }
}
