use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The transitions the picker understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    None,
}

/// Map a key press to an action
pub fn action_for_key(key: KeyEvent) -> Action {
    // Filter for Press only (Windows compatibility)
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match key.code {
        // Quit
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,
        KeyCode::Char('q') | KeyCode::Esc => Action::Cancel,

        // Navigation
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,

        KeyCode::Enter => Action::Confirm,

        _ => Action::None,
    }
}

/// Map any terminal event to an action. Only key events do anything;
/// resizes and the like just cause a redraw.
pub fn action_for_event(event: &Event) -> Action {
    match event {
        Event::Key(key) => action_for_key(*key),
        _ => Action::None,
    }
}
