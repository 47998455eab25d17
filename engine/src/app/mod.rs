//! The controller: owns history, the text field, the running toss, and dialogs.
//!
//! `App` has two user-visible states. `Idle` accepts toss requests;
//! `Animating` rejects them with a status notice and keeps going. History
//! viewing and exit work in both states.

use std::time::{Duration, Instant};

use toss_types::{FlipCount, InputError, SessionHistory, SessionSummary};

use crate::animator::{AnimationStep, CoinFrame, TossAnimator};
use crate::coin::{CoinSource, ThreadRngCoin};
use crate::config::{AnimationSettings, TossConfig};
use crate::ui::{
    Dialog, DialogKind, DialogScroll, Focus, InputField, ModalEffect, Notice, UiOptions, ViewState,
};


const POP_DURATION: Duration = Duration::from_millis(180);
const SHAKE_DURATION: Duration = Duration::from_millis(360);

/// Upper bound on generator steps consumed per tick, so huge sessions with
/// zero delay still yield to rendering.
pub const MAX_STEPS_PER_TICK: usize = 4_096;

pub const BUSY_NOTICE: &str = "A toss is already in progress.";

/// Why a toss request did not start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TossRejected {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("A toss is already in progress.")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Animating,
}

/// Progress of the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TossProgress {
    pub completed: u64,
    pub total: u64,
}

#[derive(Debug)]
struct TossRun {
    animator: TossAnimator,
    /// Time left before the next step may be pulled.
    wait: Duration,
}

pub struct App {
    history: SessionHistory,
    coin: Box<dyn CoinSource>,
    animation: AnimationSettings,
    run: Option<TossRun>,
    coin_frame: Option<CoinFrame>,
    summary: Option<SessionSummary>,
    input: InputField,
    focus: Focus,
    dialog: Option<Dialog>,
    view: ViewState,
    should_quit: bool,
}

impl App {
    /// Build an app with a fair coin, configured from `config` when present.
    #[must_use]
    pub fn new(config: Option<&TossConfig>) -> Self {
        Self::with_coin(config, Box::new(ThreadRngCoin))
    }

    #[must_use]
    pub fn with_coin(config: Option<&TossConfig>, coin: Box<dyn CoinSource>) -> Self {
        let ui_options = config.map(TossConfig::ui_options).unwrap_or_default();
        let animation = config
            .map(TossConfig::animation_settings)
            .unwrap_or_default();
        Self::with_settings(ui_options, animation, coin)
    }

    #[must_use]
    pub fn with_settings(
        ui_options: UiOptions,
        animation: AnimationSettings,
        coin: Box<dyn CoinSource>,
    ) -> Self {
        tracing::debug!(?ui_options, ?animation, "App initialized");
        Self {
            history: SessionHistory::new(),
            coin,
            animation,
            run: None,
            coin_frame: None,
            summary: None,
            input: InputField::default(),
            focus: Focus::default(),
            dialog: None,
            view: ViewState::new(ui_options),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Validate `raw` and start a session.
    ///
    /// Input errors open an error dialog. A request while animating is
    /// rejected with a notice and leaves the running session alone.
    pub fn on_toss_requested(&mut self, raw: &str) -> Result<FlipCount, TossRejected> {
        if self.is_animating() {
            tracing::debug!("Toss request rejected: session in progress");
            self.view.notice = Some(Notice::new(BUSY_NOTICE));
            return Err(TossRejected::Busy);
        }

        let flips = match FlipCount::parse(raw) {
            Ok(flips) => flips,
            Err(err) => {
                tracing::info!(input = raw, %err, "Toss input rejected");
                let _ = self.open_dialog(Dialog::input_error(err));
                return Err(err.into());
            }
        };

        tracing::info!(flips = flips.get(), "Toss session started");
        let mut animator = TossAnimator::new(flips, self.animation.trajectory);
        if self.view.ui_options.reduced_motion {
            animator = animator.without_sweep();
        }
        self.run = Some(TossRun {
            animator,
            wait: Duration::ZERO,
        });
        Ok(flips)
    }

    /// Toss with the current contents of the text field.
    pub fn submit_input(&mut self) -> Result<FlipCount, TossRejected> {
        let raw = self.input.text().to_owned();
        self.on_toss_requested(&raw)
    }

    /// Open the history dialog and return it.
    pub fn on_history_requested(&mut self) -> &Dialog {
        let dialog = Dialog::history(self.history.listing());
        self.open_dialog(dialog)
    }

    /// Stop the interactive loop. An unfinished session is discarded.
    pub fn on_exit_requested(&mut self) {
        if let Some(run) = &self.run {
            tracing::info!(
                completed = run.animator.completed(),
                total = run.animator.flips().get(),
                "Exit requested mid-session; session discarded"
            );
        }
        self.should_quit = true;
    }

    /// Activate whatever control has focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Input | Focus::Toss => {
                let _ = self.submit_input();
            }
            Focus::History => {
                let _ = self.on_history_requested();
            }
            Focus::Exit => self.on_exit_requested(),
        }
    }

    pub fn scroll_dialog(&mut self, movement: DialogScroll) {
        if let Some(dialog) = &mut self.dialog {
            dialog.scroll(movement);
        }
    }

    /// Called by the renderer with the body rows the open dialog can show.
    pub fn update_dialog_viewport(&mut self, rows: usize) {
        if let Some(dialog) = &mut self.dialog {
            dialog.set_viewport(rows);
        }
    }

    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            self.view.modal_effect = None;
        }
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance by the wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(elapsed);
    }

    /// Advance animation, effects, and notices by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.view.advance(elapsed);
        self.advance_run(elapsed);
    }

    fn advance_run(&mut self, elapsed: Duration) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        let mut budget = elapsed;
        let mut finished = None;
        for _ in 0..MAX_STEPS_PER_TICK {
            if run.wait > budget {
                run.wait -= budget;
                break;
            }
            budget -= run.wait;
            run.wait = Duration::ZERO;

            match run.animator.next_step(&mut *self.coin) {
                Some(AnimationStep::Sweep { frame, .. }) => {
                    self.coin_frame = Some(frame);
                    run.wait = self.animation.step_delay;
                }
                Some(AnimationStep::Landed { frame, flip }) => {
                    tracing::trace!(flip, face = %frame.face, "Coin landed");
                    self.coin_frame = Some(frame);
                }
                Some(AnimationStep::Finished(summary)) => {
                    finished = Some(summary);
                    break;
                }
                None => break,
            }
        }

        if let Some(summary) = finished {
            self.finish_session(summary);
        }
    }

    fn finish_session(&mut self, summary: SessionSummary) {
        self.run = None;
        self.history.push(summary.record());
        self.summary = Some(summary);
        tracing::info!(
            session = self.history.len(),
            heads = summary.heads(),
            tails = summary.tails(),
            "Toss session finished"
        );
    }

    fn open_dialog(&mut self, dialog: Dialog) -> &Dialog {
        self.view.modal_effect = if self.view.ui_options.reduced_motion {
            None
        } else {
            Some(match dialog.kind() {
                DialogKind::Error => ModalEffect::shake(SHAKE_DURATION),
                DialogKind::Info => ModalEffect::pop_scale(POP_DURATION),
            })
        };
        self.dialog.insert(dialog)
    }

    // ------------------------------------------------------------------
    // Focus + text field
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Mutable text field, only while it has focus and no dialog is open.
    pub fn input_mut(&mut self) -> Option<&mut InputField> {
        (self.focus == Focus::Input && self.dialog.is_none()).then_some(&mut self.input)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> AppState {
        if self.run.is_some() {
            AppState::Animating
        } else {
            AppState::Idle
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state() == AppState::Animating
    }

    #[must_use]
    pub fn progress(&self) -> Option<TossProgress> {
        self.run.as_ref().map(|run| TossProgress {
            completed: run.animator.completed(),
            total: run.animator.flips().get(),
        })
    }

    #[must_use]
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Summary of the most recent finished session.
    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// Current coin display; `None` until the first toss.
    #[must_use]
    pub fn coin_frame(&self) -> Option<&CoinFrame> {
        self.coin_frame.as_ref()
    }

    #[must_use]
    pub fn input(&self) -> &InputField {
        &self.input
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.view.modal_effect.as_ref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.view.notice.as_ref().map(Notice::text)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn animation(&self) -> AnimationSettings {
        self.animation
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
