use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the player asked for by pressing a key
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// The pause/resume button
    Pause,
    /// The restart button
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Command::Left),
            KeyCode::Char('d' | 'l') | KeyCode::Right => Some(Command::Right),
            KeyCode::Char('p' | ' ') => Some(Command::Pause),
            KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }

    /// The direction to steer the snake in, if this is a movement command
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::North),
            Command::Down => Some(Direction::South),
            Command::Left => Some(Direction::West),
            Command::Right => Some(Direction::East),
            Command::Quit | Command::Pause | Command::Restart => None,
        }
    }
}
