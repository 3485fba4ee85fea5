//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Toggle help
    ToggleHelp,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Previous summary tab
    PrevTab,
    /// Next summary tab
    NextTab,
    /// Switch between candidate panels
    SwitchPanel,
    /// Run the selected row's primary action
    Activate,
    /// Toggle selection of the highlighted candidate
    Toggle,
    /// Close an overlay, or follow the view's back link
    Back,
    /// Jump to a sidebar entry (0-based)
    GoTo(usize),
    /// Accept for peer review
    Accept,
    /// Open the reject dialog
    Reject,
    /// Show the AI evaluation
    Evaluation,
    /// Open the invite preview
    Invite,
    /// Open the replace dialog
    Replace,
    /// Confirm assignment / complete
    Confirm,
    /// Preview the author email of a sent-back manuscript
    Email,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTab),
        KeyCode::Tab => Some(Action::SwitchPanel),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char(c @ '1'..='6') => Some(Action::GoTo(c as usize - '1' as usize)),
        KeyCode::Char('a') => Some(Action::Accept),
        KeyCode::Char('r') => Some(Action::Reject),
        KeyCode::Char('e') => Some(Action::Evaluation),
        KeyCode::Char('i') => Some(Action::Invite),
        KeyCode::Char('x') => Some(Action::Replace),
        KeyCode::Char('c') => Some(Action::Confirm),
        KeyCode::Char('m') => Some(Action::Email),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_digits() {
        assert_eq!(normal_mode_action(KeyCode::Char('1')), Some(Action::GoTo(0)));
        assert_eq!(normal_mode_action(KeyCode::Char('6')), Some(Action::GoTo(5)));
        assert_eq!(normal_mode_action(KeyCode::Char('7')), None);
    }

    #[test]
    fn test_vim_motion() {
        assert_eq!(normal_mode_action(KeyCode::Char('j')), Some(Action::MoveDown));
        assert_eq!(normal_mode_action(KeyCode::Up), Some(Action::MoveUp));
    }
}
