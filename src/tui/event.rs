use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Block until the terminal produces an event the selector cares about.
pub fn next_action() -> std::io::Result<Action> {
    loop {
        if let Some(action) = translate(event::read()?) {
            return Ok(action);
        }
    }
}

/// Map a crossterm event to a selector action.
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Action::MoveUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Action::MoveDown),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(Action::MoveLeft),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(Action::MoveRight),
        (_, KeyCode::Char('s')) => Some(Action::ToggleSort),
        (_, KeyCode::Char('L')) => Some(Action::ToggleLogs),
        (_, KeyCode::Enter) => Some(Action::Remove),
        _ => None,
    }
}
