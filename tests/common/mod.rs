//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use toss_engine::{AnimationSettings, App, Face, ScriptedCoin, Trajectory, UiOptions};

pub const STEP: Duration = Duration::from_millis(30);

/// App with a scripted coin, default animation pacing, and default options.
pub fn scripted_app(faces: &[Face]) -> App {
    App::with_settings(
        UiOptions::default(),
        AnimationSettings {
            step_delay: STEP,
            trajectory: Trajectory::default(),
        },
        Box::new(ScriptedCoin::new(faces.to_vec())),
    )
}

/// Drive the running session to completion, a minute of frame time at a time.
pub fn run_to_completion(app: &mut App) {
    for _ in 0..10_000 {
        if !app.is_animating() {
            return;
        }
        app.advance(Duration::from_secs(60));
    }
    panic!("toss session never finished");
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Type `text` into the app one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        toss_tui::apply_event(app, key(KeyCode::Char(c)));
    }
}
