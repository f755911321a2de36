use crate::ui::app::App;
use crate::ui::browser::BrowserIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the browser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    First,
    Last,
    Click,
    ToggleSidebar,
    Quit,
}

/// One entry of the key map. `hint` is what the footer shows, if anything.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub codes: &'static [KeyCode],
    pub action: Action,
    pub hint: Option<(&'static str, &'static str)>,
}

/// Browser key map. Letters match regardless of case.
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        codes: &[KeyCode::Up, KeyCode::Char('k')],
        action: Action::Up,
        hint: Some(("↑/↓", "Select")),
    },
    KeyBinding {
        codes: &[KeyCode::Down, KeyCode::Char('j')],
        action: Action::Down,
        hint: None,
    },
    KeyBinding {
        codes: &[KeyCode::Home],
        action: Action::First,
        hint: None,
    },
    KeyBinding {
        codes: &[KeyCode::End],
        action: Action::Last,
        hint: None,
    },
    KeyBinding {
        codes: &[KeyCode::Enter, KeyCode::Char(' ')],
        action: Action::Click,
        hint: Some(("Enter", "Click")),
    },
    KeyBinding {
        codes: &[KeyCode::Char('s')],
        action: Action::ToggleSidebar,
        hint: Some(("S", "Sidebar")),
    },
    KeyBinding {
        codes: &[KeyCode::Char('q'), KeyCode::Esc],
        action: Action::Quit,
        hint: Some(("Q", "Quit")),
    },
];

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c'))
            .then_some(Action::Quit);
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.codes.contains(&code))
        .map(|binding| binding.action)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = action_for(key) else {
        return;
    };

    match action {
        Action::Up => app.dispatch(BrowserIntent::MoveUp),
        Action::Down => app.dispatch(BrowserIntent::MoveDown),
        Action::First => app.dispatch(BrowserIntent::Select(0)),
        Action::Last => app.dispatch(BrowserIntent::Select(usize::MAX)),
        Action::Click => app.press(),
        Action::ToggleSidebar => app.toggle_sidebar(),
        Action::Quit => app.request_quit(),
    }
}
