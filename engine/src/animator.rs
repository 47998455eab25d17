//! Toss animation as a frame generator.
//!
//! Each flip draws one outcome and then sweeps the coin around an ellipse:
//! angles `0, 10, ..., 350` degrees, offset `x = A·sin(θ)`, `y = -B·cos(θ)`.
//! The first half of the sweep shows the placeholder face, the second half the
//! real outcome, and a settled frame snaps the coin back to centre.
//!
//! The animator never sleeps. The caller pulls [`AnimationStep`]s and waits one
//! step delay after every [`AnimationStep::Sweep`].

use toss_types::{Face, FlipCount, SessionSummary};

use crate::coin::CoinSource;

pub const SWEEP_STEP_DEGREES: u16 = 10;
pub const SWEEP_STEPS: u16 = 360 / SWEEP_STEP_DEGREES;
/// First angle at which the real outcome is shown.
pub const REVEAL_ANGLE: u16 = 180;
pub const PLACEHOLDER_FACE: Face = Face::Heads;

pub const DEFAULT_AMPLITUDE_X: u16 = 12;
pub const DEFAULT_AMPLITUDE_Y: u16 = 4;

/// Cell offset of the coin from its resting centre. Positive `dy` is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub dx: i16,
    pub dy: i16,
}

impl Offset {
    pub const CENTER: Self = Self { dx: 0, dy: 0 };
}

/// Elliptical path the coin follows during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trajectory {
    amplitude_x: u16,
    amplitude_y: u16,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new(DEFAULT_AMPLITUDE_X, DEFAULT_AMPLITUDE_Y)
    }
}

impl Trajectory {
    #[must_use]
    pub const fn new(amplitude_x: u16, amplitude_y: u16) -> Self {
        Self {
            amplitude_x,
            amplitude_y,
        }
    }

    #[must_use]
    pub const fn amplitude_x(&self) -> u16 {
        self.amplitude_x
    }

    #[must_use]
    pub const fn amplitude_y(&self) -> u16 {
        self.amplitude_y
    }

    /// Offset at `angle_degrees`, truncated toward zero.
    #[must_use]
    pub fn offset(&self, angle_degrees: u16) -> Offset {
        let radians = f64::from(angle_degrees).to_radians();
        let dx = f64::from(self.amplitude_x) * radians.sin();
        let dy = -f64::from(self.amplitude_y) * radians.cos();
        Offset {
            dx: dx as i16,
            dy: dy as i16,
        }
    }
}

/// What the coin display shows for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinFrame {
    pub face: Face,
    pub offset: Offset,
    /// The coin has landed and sits at the centre.
    pub settled: bool,
}

impl CoinFrame {
    #[must_use]
    pub const fn landed(face: Face) -> Self {
        Self {
            face,
            offset: Offset::CENTER,
            settled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// One sweep position. Hold it for one step delay.
    Sweep { frame: CoinFrame, angle: u16 },
    /// A flip finished. The counters already include `frame.face`.
    Landed { frame: CoinFrame, flip: u64 },
    /// Every flip finished. Emitted exactly once, last.
    Finished(SessionSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BetweenFlips,
    Sweeping { outcome: Face, step: u16 },
    Done,
}

/// Drives one toss session, one step at a time.
#[derive(Debug, Clone)]
pub struct TossAnimator {
    flips: FlipCount,
    trajectory: Trajectory,
    sweep: bool,
    completed: u64,
    heads: u64,
    tails: u64,
    phase: Phase,
}

impl TossAnimator {
    #[must_use]
    pub fn new(flips: FlipCount, trajectory: Trajectory) -> Self {
        Self {
            flips,
            trajectory,
            sweep: true,
            completed: 0,
            heads: 0,
            tails: 0,
            phase: Phase::BetweenFlips,
        }
    }

    /// Skip sweep frames and emit only landings.
    #[must_use]
    pub fn without_sweep(mut self) -> Self {
        self.sweep = false;
        self
    }

    #[must_use]
    pub fn flips(&self) -> FlipCount {
        self.flips
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Counts so far, including partially animated sessions.
    #[must_use]
    pub fn tally(&self) -> SessionSummary {
        SessionSummary::new(self.heads, self.tails)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Advance by one step, drawing from `coin` at the start of each flip.
    pub fn next_step(&mut self, coin: &mut dyn CoinSource) -> Option<AnimationStep> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::BetweenFlips => {
                    if self.completed >= self.flips.get() {
                        self.phase = Phase::Done;
                        return Some(AnimationStep::Finished(self.tally()));
                    }
                    let outcome = coin.toss();
                    if !self.sweep {
                        return Some(self.land(outcome));
                    }
                    self.phase = Phase::Sweeping { outcome, step: 0 };
                }
                Phase::Sweeping { outcome, step } if step < SWEEP_STEPS => {
                    let angle = step * SWEEP_STEP_DEGREES;
                    self.phase = Phase::Sweeping {
                        outcome,
                        step: step + 1,
                    };
                    let face = if angle < REVEAL_ANGLE {
                        PLACEHOLDER_FACE
                    } else {
                        outcome
                    };
                    let frame = CoinFrame {
                        face,
                        offset: self.trajectory.offset(angle),
                        settled: false,
                    };
                    return Some(AnimationStep::Sweep { frame, angle });
                }
                Phase::Sweeping { outcome, .. } => {
                    self.phase = Phase::BetweenFlips;
                    return Some(self.land(outcome));
                }
            }
        }
    }

    /// Borrow the animator as an iterator of steps.
    pub fn steps<'a>(&'a mut self, coin: &'a mut dyn CoinSource) -> Steps<'a> {
        Steps {
            animator: self,
            coin,
        }
    }

    /// Play every remaining step without pacing and return the summary.
    pub fn run(mut self, coin: &mut dyn CoinSource) -> SessionSummary {
        while let Some(step) = self.next_step(coin) {
            if let AnimationStep::Finished(summary) = step {
                return summary;
            }
        }
        self.tally()
    }

    fn land(&mut self, outcome: Face) -> AnimationStep {
        match outcome {
            Face::Heads => self.heads += 1,
            Face::Tails => self.tails += 1,
        }
        self.completed += 1;
        AnimationStep::Landed {
            frame: CoinFrame::landed(outcome),
            flip: self.completed,
        }
    }
}

pub struct Steps<'a> {
    animator: &'a mut TossAnimator,
    coin: &'a mut dyn CoinSource,
}

impl Iterator for Steps<'_> {
    type Item = AnimationStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.animator.next_step(self.coin)
    }
}
