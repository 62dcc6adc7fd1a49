use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Open,
    Refresh,
    Quit,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('-') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('+') | KeyCode::Down => Action::MoveDown,
            KeyCode::Enter => Action::Open,
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }
}
