//! Core engine for the coin toss simulator - state machine and animation.
//!
//! This crate contains the controller without TUI dependencies. The terminal
//! front end reads state through [`App`] accessors and feeds it user actions
//! and frame time.

mod animator;
mod app;
mod coin;
mod config;
pub mod ui;

pub use animator::{
    AnimationStep, CoinFrame, DEFAULT_AMPLITUDE_X, DEFAULT_AMPLITUDE_Y, Offset, PLACEHOLDER_FACE,
    REVEAL_ANGLE, SWEEP_STEP_DEGREES, SWEEP_STEPS, Steps, TossAnimator, Trajectory,
};
pub use app::{App, AppState, BUSY_NOTICE, MAX_STEPS_PER_TICK, TossProgress, TossRejected};
pub use coin::{CoinSource, ScriptedCoin, ThreadRngCoin};
pub use config::{
    AnimationConfig, AnimationSettings, AppConfig, ConfigError, DEFAULT_STEP_DELAY_MS, TossConfig,
    config_path,
};
pub use toss_types::{
    Face, FlipCount, InputError, SessionHistory, SessionRecord, SessionSummary, percentage,
};
pub use ui::{
    Dialog, DialogKind, DialogScroll, Focus, InputField, ModalEffect, ModalEffectKind, UiOptions,
};
