//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::content::RenameField;
use crate::core::{MoveDirection, ViewType, WindowMode};

/// Edit applied to a single-line text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl TextEdit {
    /// Translate a key into a text edit
    pub fn from_key(key: KeyEvent) -> Option<TextEdit> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => Some(TextEdit::Insert(c)),
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Delete => Some(TextEdit::Delete),
            KeyCode::Left => Some(TextEdit::Left),
            KeyCode::Right => Some(TextEdit::Right),
            KeyCode::Home => Some(TextEdit::Home),
            KeyCode::End => Some(TextEdit::End),
            _ => None,
        }
    }

    pub fn apply(self, field: &mut RenameField) {
        match self {
            TextEdit::Insert(c) => field.insert(c),
            TextEdit::Backspace => field.backspace(),
            TextEdit::Delete => field.delete(),
            TextEdit::Left => field.move_left(),
            TextEdit::Right => field.move_right(),
            TextEdit::Home => field.move_home(),
            TextEdit::End => field.move_end(),
        }
    }
}

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move the selection
    Move(MoveDirection),
    /// Enter the selected folder or open the selected file
    Activate,
    /// Go to the parent folder
    GoUp,
    /// Go to the library root
    GoHome,
    /// Scroll by a number of viewport pages
    ScrollPage(i32),
    /// Clear the selection
    Deselect,
    Copy,
    Cut,
    Paste,
    Duplicate,
    NewFolder,
    StartRename,
    CommitRename,
    CancelRename,
    /// Edit the rename field or the search prompt
    Edit(TextEdit),
    /// Ask to delete the selection
    RequestDelete,
    /// Answer the delete confirmation
    Confirm(bool),
    DismissAlert,
    /// Open the search prompt
    StartSearch,
    /// Close the search prompt, keeping the query
    ConfirmSearch,
    /// Close the search prompt and clear the query
    CancelSearch,
    SetView(ViewType),
    Refresh,
}

/// Handle key event and return the resulting action.
///
/// `search_open` is true while the search prompt has input focus.
pub fn handle_key_event(mode: &WindowMode, search_open: bool, key: KeyEvent) -> KeyAction {
    if search_open {
        return handle_search_mode(key);
    }

    match mode {
        WindowMode::Browse => handle_browse_mode(key),
        WindowMode::Rename { .. } => handle_rename_mode(key),
        WindowMode::Confirm { .. } => handle_confirm_mode(key),
        WindowMode::Alert { .. } => handle_alert_mode(key),
    }
}

/// Handle keys in browse mode
fn handle_browse_mode(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Clipboard (checked before plain letters)
        KeyCode::Char('c') if ctrl => KeyAction::Copy,
        KeyCode::Char('x') if ctrl => KeyAction::Cut,
        KeyCode::Char('v') if ctrl => KeyAction::Paste,
        KeyCode::Char('d') if ctrl => KeyAction::Duplicate,
        KeyCode::Char('n') if ctrl => KeyAction::NewFolder,
        KeyCode::Char('r') if ctrl => KeyAction::Refresh,

        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Deselect,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Move(MoveDirection::Up),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Move(MoveDirection::Down),
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Move(MoveDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Move(MoveDirection::Right),
        KeyCode::Enter => KeyAction::Activate,
        KeyCode::Backspace => KeyAction::GoUp,
        KeyCode::Char('~') => KeyAction::GoHome,
        KeyCode::PageUp => KeyAction::ScrollPage(-1),
        KeyCode::PageDown => KeyAction::ScrollPage(1),

        // File operations
        KeyCode::F(2) => KeyAction::StartRename,
        KeyCode::Delete => KeyAction::RequestDelete,
        KeyCode::F(5) => KeyAction::Refresh,

        // Search and display
        KeyCode::Char('/') => KeyAction::StartSearch,
        KeyCode::Char('1') => KeyAction::SetView(ViewType::List16),
        KeyCode::Char('2') => KeyAction::SetView(ViewType::Grid32),
        KeyCode::Char('3') => KeyAction::SetView(ViewType::Grid48),
        KeyCode::Char('4') => KeyAction::SetView(ViewType::Grid64),

        _ => KeyAction::None,
    }
}

/// Handle keys while an entry is being renamed
fn handle_rename_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::CommitRename,
        KeyCode::Esc => KeyAction::CancelRename,
        _ => TextEdit::from_key(key)
            .map(KeyAction::Edit)
            .unwrap_or(KeyAction::None),
    }
}

/// Handle keys in the search prompt
fn handle_search_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::ConfirmSearch,
        KeyCode::Esc => KeyAction::CancelSearch,
        _ => TextEdit::from_key(key)
            .map(KeyAction::Edit)
            .unwrap_or(KeyAction::None),
    }
}

/// Handle keys in confirm mode
fn handle_confirm_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::Confirm(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::Confirm(false),
        _ => KeyAction::None,
    }
}

fn handle_alert_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => KeyAction::DismissAlert,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PendingAction;
    use crate::core::Rect;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_browse_keys() {
        let mode = WindowMode::Browse;
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::Up)),
            KeyAction::Move(MoveDirection::Up)
        );
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::F(2))),
            KeyAction::StartRename
        );
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::Char('3'))),
            KeyAction::SetView(ViewType::Grid48)
        );
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::Backspace)),
            KeyAction::GoUp
        );
    }

    #[test]
    fn test_ctrl_shortcuts_before_letters() {
        let mode = WindowMode::Browse;
        assert_eq!(handle_key_event(&mode, false, ctrl('c')), KeyAction::Copy);
        assert_eq!(handle_key_event(&mode, false, ctrl('x')), KeyAction::Cut);
        assert_eq!(handle_key_event(&mode, false, ctrl('v')), KeyAction::Paste);
        assert_eq!(
            handle_key_event(&mode, false, ctrl('d')),
            KeyAction::Duplicate
        );
        assert_eq!(
            handle_key_event(&mode, false, ctrl('n')),
            KeyAction::NewFolder
        );
    }

    #[test]
    fn test_rename_keys_edit_text() {
        let mode = WindowMode::Rename {
            original: PathBuf::from("a.png"),
        };
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::Char('q'))),
            KeyAction::Edit(TextEdit::Insert('q'))
        );
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::Enter)),
            KeyAction::CommitRename
        );
        assert_eq!(
            handle_key_event(&mode, false, key(KeyCode::Esc)),
            KeyAction::CancelRename
        );
    }

    #[test]
    fn test_search_prompt_takes_precedence() {
        assert_eq!(
            handle_key_event(&WindowMode::Browse, true, key(KeyCode::Char('1'))),
            KeyAction::Edit(TextEdit::Insert('1'))
        );
        assert_eq!(
            handle_key_event(&WindowMode::Browse, true, key(KeyCode::Esc)),
            KeyAction::CancelSearch
        );
    }

    #[test]
    fn test_confirm_and_alert_keys() {
        let confirm = WindowMode::Confirm {
            action: PendingAction::Delete {
                targets: vec![PathBuf::from("a.png")],
            },
        };
        assert_eq!(
            handle_key_event(&confirm, false, key(KeyCode::Char('y'))),
            KeyAction::Confirm(true)
        );
        assert_eq!(
            handle_key_event(&confirm, false, key(KeyCode::Esc)),
            KeyAction::Confirm(false)
        );

        let alert = WindowMode::Alert {
            title: "Error".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(
            handle_key_event(&alert, false, key(KeyCode::Enter)),
            KeyAction::DismissAlert
        );
    }

    #[test]
    fn test_text_edit_apply() {
        let mut field = RenameField::new("wood", Rect::default());
        TextEdit::Home.apply(&mut field);
        TextEdit::Insert('x').apply(&mut field);
        TextEdit::End.apply(&mut field);
        TextEdit::Backspace.apply(&mut field);
        assert_eq!(field.text(), "xwoo");
        assert!(TextEdit::from_key(ctrl('a')).is_none());
    }
}
