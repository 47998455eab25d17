//! View state for rendering.
//!
//! Groups what the renderer reads but the controller logic never branches on.

use std::time::{Duration, Instant};

use super::{EffectTimer, ModalEffect, UiOptions};

const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// A transient status-bar message.
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    timer: EffectTimer,
}

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timer: EffectTimer::new(NOTICE_DURATION),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub ui_options: UiOptions,
    pub modal_effect: Option<ModalEffect>,
    pub notice: Option<Notice>,
    /// Timestamp of the last frame, for animation timing.
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            ui_options: UiOptions::default(),
            modal_effect: None,
            notice: None,
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    /// Advance effect and notice timers, dropping the ones that finished.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(effect) = self.modal_effect.as_mut() {
            effect.advance(delta);
            if matches!(effect.phase(), super::AnimPhase::Completed) {
                self.modal_effect = None;
            }
        }
        if let Some(notice) = self.notice.as_mut() {
            notice.timer.advance(delta);
            if notice.timer.is_finished() {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires() {
        let mut view = ViewState::default();
        view.notice = Some(Notice::new("busy"));
        view.advance(Duration::from_millis(500));
        assert_eq!(view.notice.as_ref().map(Notice::text), Some("busy"));
        view.advance(NOTICE_DURATION);
        assert!(view.notice.is_none());
    }

    #[test]
    fn finished_effect_is_dropped() {
        let mut view = ViewState::default();
        view.modal_effect = Some(ModalEffect::pop_scale(Duration::from_millis(100)));
        view.advance(Duration::from_millis(50));
        assert!(view.modal_effect.is_some());
        view.advance(Duration::from_millis(50));
        assert!(view.modal_effect.is_none());
    }
}
