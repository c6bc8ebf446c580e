//! Keybinding definitions

use crossterm::event::{KeyCode, KeyModifiers};

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start typing a SKU search
    EnterSearch,
    /// Clear the search term, or close the help overlay
    Cancel,
    /// Select the next store option
    NextStore,
    /// Select the previous store option
    PrevStore,
    /// Reset the store selector to ALL
    ResetStore,
    /// Move up in the table
    MoveUp,
    /// Move down in the table
    MoveDown,
    /// Jump to the first row
    Top,
    /// Jump to the last row
    Bottom,
    /// Toggle the row detail panel
    ToggleDetail,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char('s') | KeyCode::Tab => Some(Action::NextStore),
        KeyCode::Char('S') | KeyCode::BackTab => Some(Action::PrevStore),
        KeyCode::Char('a') => Some(Action::ResetStore),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Enter | KeyCode::Char('d') => Some(Action::ToggleDetail),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
