use crate::ui::app::{App, Focus};
use crate::ui::search::SearchIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Copy the selected photo's link to the clipboard.
    CopyLink,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return InputAction::None;
    }

    match app.focus() {
        Focus::Input => handle_input_key(app, key),
        Focus::Gallery => handle_gallery_key(app, key),
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Enter => app.commit_search(),
        KeyCode::Esc => app.set_focus(Focus::Gallery),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::DeleteChar),
        KeyCode::Char(_) if is_ctrl_char(key, 'u') => {
            app.dispatch_search(SearchIntent::ClearInput)
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_search(SearchIntent::InsertChar(ch))
        }
        _ => {}
    }
    InputAction::None
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Input),
        KeyCode::Char('y') => return InputAction::CopyLink,
        KeyCode::Up | KeyCode::Char('k') => app.move_rows(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_rows(1),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::PageUp => app.move_pages(-1),
        KeyCode::PageDown => app.move_pages(1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
    InputAction::None
}

/// Mouse wheel scrolls the gallery one row at a time.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.move_rows(1),
        MouseEventKind::ScrollUp => app.move_rows(-1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    #[test]
    fn typing_edits_input() {
        let mut app = App::new();
        for ch in "cat".chars() {
            handle_key(&mut app, key(KeyCode::Char(ch)));
        }
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search().input(), "ca");
        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.search().input(), "");
    }

    #[test]
    fn enter_commits_and_moves_focus() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Char('x')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.search().committed(), Some("x"));
        assert_eq!(app.focus(), Focus::Gallery);
    }

    #[test]
    fn q_types_in_input_but_quits_in_gallery() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.search().input(), "q");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn esc_leaves_input_without_quitting() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Gallery);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.should_quit());
        assert_eq!(app.focus(), Focus::Gallery);
    }

    #[test]
    fn ctrl_q_quits_anywhere() {
        let mut app = App::new();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn y_in_gallery_requests_copy() {
        let mut app = App::new();
        app.set_focus(Focus::Gallery);
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('y'))), InputAction::CopyLink);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.search().input(), "");
    }
}
