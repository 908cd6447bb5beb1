use crossterm::event::{KeyCode, KeyModifiers};

/// Top-level actions available while the chat screen has focus. Keys
/// inside the booking modal are contextual and handled by the app
/// directly, section by section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    OpenBooking,
    None,
}

pub fn map_global_key(key: KeyCode, modifiers: KeyModifiers) -> Action {
    match key {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('b') => Action::OpenBooking,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_bindings() {
        assert_eq!(
            map_global_key(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit
        );
        assert_eq!(map_global_key(KeyCode::Esc, KeyModifiers::NONE), Action::Quit);
        assert_eq!(
            map_global_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        );
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        assert_eq!(
            map_global_key(KeyCode::Char('c'), KeyModifiers::NONE),
            Action::None
        );
    }

    #[test]
    fn test_feature_bindings() {
        assert_eq!(
            map_global_key(KeyCode::Char('t'), KeyModifiers::NONE),
            Action::ToggleTheme
        );
        assert_eq!(
            map_global_key(KeyCode::Char('b'), KeyModifiers::NONE),
            Action::OpenBooking
        );
    }
}
