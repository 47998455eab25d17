//! Config file loading and its effect on the app.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use toss_engine::{
    App, ConfigError, DEFAULT_STEP_DELAY_MS, Face, ScriptedCoin, SessionRecord, TossConfig,
};

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn config_sets_ui_options_and_animation() {
    let (_dir, path) = write_config(
        r"
[app]
ascii_only = true
high_contrast = true

[animation]
step_delay_ms = 5
amplitude_x = 8
amplitude_y = 2
",
    );
    let config = TossConfig::load_from(&path).expect("valid config");
    let app = App::new(Some(&config));

    let options = app.ui_options();
    assert!(options.ascii_only);
    assert!(options.high_contrast);
    assert!(!options.reduced_motion);

    let animation = app.animation();
    assert_eq!(animation.step_delay, Duration::from_millis(5));
    assert_eq!(animation.trajectory.amplitude_x(), 8);
    assert_eq!(animation.trajectory.amplitude_y(), 2);
}

#[test]
fn missing_config_uses_defaults() {
    let app = App::new(None);
    assert_eq!(
        app.animation().step_delay,
        Duration::from_millis(DEFAULT_STEP_DELAY_MS)
    );
    assert!(!app.ui_options().reduced_motion);
}

#[test]
fn malformed_config_reports_path() {
    let (_dir, path) = write_config("[app]\nascii_only = maybe\n");
    let err = TossConfig::load_from(&path).expect_err("invalid config");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn reduced_motion_config_skips_the_sweep() {
    let (_dir, path) = write_config("[app]\nreduced_motion = true\n");
    let config = TossConfig::load_from(&path).expect("valid config");
    let mut app = App::with_coin(Some(&config), Box::new(ScriptedCoin::new([Face::Tails])));

    app.on_toss_requested("25").expect("valid input");
    app.advance(Duration::ZERO);

    assert!(!app.is_animating());
    assert_eq!(app.history().records(), &[SessionRecord::new(0, 25)]);
    let _ = app.on_history_requested();
    assert!(app.modal_effect().is_none());
}
