//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            handle_key_event(app, key);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Any keypress in normal mode clears the previous status line.
    if app.mode == Mode::Normal {
        app.status_message = None;
    }

    // Mode-specific handling
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::EditName => handle_edit_name_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.select_first();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
        }
        KeyCode::PageUp => {
            app.move_selection(-20);
        }
        KeyCode::PageDown => {
            app.move_selection(20);
        }

        // Checkbox toggle with cascade
        KeyCode::Char(' ') => {
            app.toggle_selected();
        }

        // Project name editing
        KeyCode::Char('n') => {
            app.mode = Mode::EditName;
        }

        // Project type cycling
        KeyCode::Tab | KeyCode::Char('t') => {
            app.cycle_project_type();
        }

        // Selection summary
        KeyCode::Enter => {
            app.confirm_selection();
        }

        // Refresh
        KeyCode::Char('r') => {
            app.refresh();
        }

        // Help
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_edit_name_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        KeyCode::Backspace => {
            app.pop_name_char();
        }
        KeyCode::Char(c) => {
            app.push_name_char(c);
        }
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateRegistry;

    fn test_app() -> App {
        App::new(TemplateRegistry::new(), "python", "proj".to_string()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_moves_selection() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected, 1);
        handle_key_event(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_space_toggles_checkbox() {
        let mut app = test_app();
        assert!(app.snapshot.as_ref().unwrap().is_checked(0));

        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.snapshot.as_ref().unwrap().is_checked(0));
    }

    #[test]
    fn test_enter_edit_name_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.mode, Mode::EditName);
    }

    #[test]
    fn test_edit_name_typing_rebuilds() {
        let mut app = test_app();
        app.mode = Mode::EditName;

        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.project_name, "projx");
        assert!(app.snapshot.is_some());

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.project_name, "proj");
    }

    #[test]
    fn test_edit_name_enter_returns_to_normal() {
        let mut app = test_app();
        app.mode = Mode::EditName;

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_tab_cycles_project_type() {
        let mut app = test_app();
        let before = app.type_index;

        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_ne!(app.type_index, before);
    }

    #[test]
    fn test_help_mode_round_trip() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.mode, Mode::Help);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_enter_reports_selection() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.status_message.as_deref().unwrap().contains("selected"));
    }
}
