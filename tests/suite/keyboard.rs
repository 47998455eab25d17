//! Keyboard-driven sessions through the TUI key mapping.

use crossterm::event::{Event, KeyCode};

use toss_engine::{DialogKind, Face, Focus, SessionRecord};
use toss_tui::apply_event;

use crate::common::{ctrl, key, run_to_completion, scripted_app, type_text};

#[test]
fn full_keyboard_session() {
    let mut app = scripted_app(&[Face::Heads, Face::Tails]);

    type_text(&mut app, "4");
    assert!(!apply_event(&mut app, key(KeyCode::Enter)));
    assert!(app.is_animating());
    run_to_completion(&mut app);
    assert_eq!(app.history().records(), &[SessionRecord::new(2, 2)]);

    // Input -> Toss -> History
    apply_event(&mut app, key(KeyCode::Tab));
    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::History);
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(
        app.dialog().map(|d| d.message()).as_deref(),
        Some("Session 1: Heads = 2, Tails = 2")
    );

    // Keys other than dismiss keys are swallowed by the dialog.
    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::History);
    apply_event(&mut app, key(KeyCode::Char(' ')));
    assert!(app.dialog().is_none());

    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Exit);
    assert!(apply_event(&mut app, key(KeyCode::Enter)));
}

#[test]
fn toss_button_uses_field_contents() {
    let mut app = scripted_app(&[Face::Tails]);
    type_text(&mut app, "2");
    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Toss);

    // Typing is ignored away from the field.
    type_text(&mut app, "9");
    apply_event(&mut app, key(KeyCode::Enter));
    run_to_completion(&mut app);
    assert_eq!(app.history().records(), &[SessionRecord::new(0, 2)]);
}

#[test]
fn pasted_garbage_is_reported() {
    let mut app = scripted_app(&[Face::Heads]);
    apply_event(&mut app, Event::Paste("twelve".to_string()));
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.dialog().map(|d| d.kind()), Some(DialogKind::Error));
    assert!(app.history().is_empty());
}

#[test]
fn ctrl_c_mid_session_discards_it() {
    let mut app = scripted_app(&[Face::Heads]);
    type_text(&mut app, "50");
    apply_event(&mut app, key(KeyCode::Enter));
    assert!(app.is_animating());

    assert!(apply_event(&mut app, ctrl('c')));
    assert!(app.should_quit());
    assert!(app.history().is_empty());
}
