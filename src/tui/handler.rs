//! Event handler for the TUI
//!
//! Routes keyboard events to the open draft form or the focused panel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FocusedPanel};
use super::dialogs;
use super::event::Event;
use crate::models::EntryKind;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.session.is_open() {
        dialogs::entry::handle_key(app, key);
        return;
    }

    if handle_global_key(app, key) {
        return;
    }

    match app.focused_panel {
        FocusedPanel::Budget => handle_budget_key(app, key),
        FocusedPanel::Incomes | FocusedPanel::Expenses => handle_list_key(app, key),
    }
}

/// Keys that work in every panel; returns true when consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('+') | KeyCode::Char('i') => app.begin_entry(EntryKind::Income),
        KeyCode::Char('-') | KeyCode::Char('e') => app.begin_entry(EntryKind::Expense),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Esc => app.clear_status(),
        _ => return false,
    }
    true
}

/// Handle keys while the budget field is focused
fn handle_budget_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_budget();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => app.type_budget_char(c),
        KeyCode::Backspace => app.budget_backspace(),
        KeyCode::Enter | KeyCode::Down => app.focus(FocusedPanel::Incomes),
        _ => {}
    }
}

/// Handle keys while an entry list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.focus(FocusedPanel::Incomes),
        KeyCode::Char('l') | KeyCode::Right => app.focus(FocusedPanel::Expenses),
        KeyCode::Char('b') => app.focus(FocusedPanel::Budget),
        KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => app.remove_selected(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Money;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_flow() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        type_str(&mut app, "7000000");
        assert_eq!(app.budget_input, "7.000.000");

        press(&mut app, KeyCode::Char('-'));
        type_str(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2000000");
        press(&mut app, KeyCode::Enter);
        assert!(!app.session.is_open());

        press(&mut app, KeyCode::Char('+'));
        type_str(&mut app, "Bonus");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "500000");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ledger.compute_remaining(), Money::from_units(5_500_000));
        assert_eq!(app.focused_panel, FocusedPanel::Incomes);
    }

    #[test]
    fn test_letters_in_draft_go_to_label() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_str(&mut app, "100");

        press(&mut app, KeyCode::Char('e'));
        // 'q', 'i' and 'e' are text while the form is open
        type_str(&mut app, "qie");
        assert_eq!(app.session.draft().unwrap().label, "qie");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_cancels_draft() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_str(&mut app, "100");

        press(&mut app, KeyCode::Char('+'));
        type_str(&mut app, "Gift");
        press(&mut app, KeyCode::Esc);

        assert!(!app.session.is_open());
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_enter_on_empty_label_keeps_form() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_str(&mut app, "100");

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        assert!(app.session.is_open());
        assert!(app.draft_error.is_some());
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_remove_row() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_str(&mut app, "100");
        app.ledger
            .add_entry(EntryKind::Expense, "Food", Some(Money::from_units(40)))
            .unwrap();

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Expenses);
        press(&mut app, KeyCode::Char('d'));

        assert!(app.ledger.entries(EntryKind::Expense).is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&settings);
        app.session.begin(EntryKind::Income);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(app.budget_input.is_empty());
    }
}
