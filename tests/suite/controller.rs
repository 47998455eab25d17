//! Controller flows through the public engine API.

use std::time::Duration;

use toss_engine::{
    AnimationStep, App, AppState, DialogKind, Face, FlipCount, InputError, SWEEP_STEPS,
    ScriptedCoin, SessionRecord, SessionSummary, ThreadRngCoin, TossAnimator, TossRejected,
    Trajectory,
};

use crate::common::{STEP, run_to_completion, scripted_app};

#[test]
fn sessions_accumulate_in_order() {
    let mut app = scripted_app(&[Face::Heads, Face::Tails]);
    for flips in ["1", "2", "3"] {
        app.on_toss_requested(flips).expect("valid input");
        run_to_completion(&mut app);
    }

    // H | T H | T H T
    assert_eq!(
        app.history().records(),
        &[
            SessionRecord::new(1, 0),
            SessionRecord::new(1, 1),
            SessionRecord::new(1, 2),
        ]
    );
    assert_eq!(
        app.history().listing(),
        vec![
            "Session 1: Heads = 1, Tails = 0",
            "Session 2: Heads = 1, Tails = 1",
            "Session 3: Heads = 1, Tails = 2",
        ]
    );
}

#[test]
fn rejected_inputs_never_touch_history() {
    let mut app = scripted_app(&[Face::Heads]);
    app.on_toss_requested("2").expect("valid input");
    run_to_completion(&mut app);

    for (raw, err) in [
        ("two", InputError::NotANumber),
        ("1.0", InputError::NotANumber),
        ("0", InputError::NotPositive),
        ("-7", InputError::NotPositive),
    ] {
        assert_eq!(app.on_toss_requested(raw), Err(TossRejected::Input(err)));
        assert_eq!(app.dialog().map(|d| d.kind()), Some(DialogKind::Error));
        app.dismiss_dialog();
    }

    assert_eq!(app.history().records(), &[SessionRecord::new(2, 0)]);
    assert_eq!(app.summary().map(SessionSummary::total), Some(2));
}

#[test]
fn single_flip_percentages() {
    let mut app = scripted_app(&[Face::Tails]);
    app.on_toss_requested("1").expect("valid input");
    run_to_completion(&mut app);

    let summary = app.summary().expect("summary");
    assert_eq!(
        summary.lines(),
        [
            "Total Flips: 1".to_string(),
            "Heads: 0 (0.00%)".to_string(),
            "Tails: 1 (100.00%)".to_string(),
        ]
    );
}

#[test]
fn random_coin_sessions_sum_to_requested_flips() {
    let mut app = App::with_coin(None, Box::new(ThreadRngCoin));
    for flips in [1_u64, 7, 50] {
        app.on_toss_requested(&flips.to_string())
            .expect("valid input");
        run_to_completion(&mut app);
        let record = app.history().latest().expect("record");
        assert_eq!(record.total(), flips);
    }
    assert_eq!(app.history().len(), 3);
}

#[test]
fn busy_rejection_keeps_the_running_session() {
    let mut app = scripted_app(&[Face::Heads]);
    app.on_toss_requested("2").expect("valid input");
    app.advance(STEP * 10);

    assert_eq!(app.on_toss_requested("100"), Err(TossRejected::Busy));
    assert_eq!(app.on_toss_requested("abc"), Err(TossRejected::Busy));
    assert!(app.dialog().is_none());
    assert_eq!(app.progress().map(|p| p.total), Some(2));

    run_to_completion(&mut app);
    assert_eq!(app.state(), AppState::Idle);
    assert_eq!(app.history().records(), &[SessionRecord::new(2, 0)]);
    assert!(app.on_toss_requested("1").is_ok());
}

#[test]
fn progress_counts_landed_flips() {
    let mut app = scripted_app(&[Face::Tails]);
    app.on_toss_requested("3").expect("valid input");
    app.advance(Duration::ZERO);
    assert_eq!(app.progress().map(|p| p.completed), Some(0));

    // One full sweep lands the first coin.
    app.advance(STEP * u32::from(SWEEP_STEPS));
    assert_eq!(app.progress().map(|p| p.completed), Some(1));
}

#[test]
fn animator_is_usable_on_its_own() {
    let flips = FlipCount::new(2).expect("positive");
    let mut coin = ScriptedCoin::new([Face::Tails, Face::Heads]);
    let mut animator = TossAnimator::new(flips, Trajectory::new(10, 3));

    let landings: Vec<Face> = animator
        .steps(&mut coin)
        .filter_map(|step| match step {
            AnimationStep::Landed { frame, .. } => Some(frame.face),
            _ => None,
        })
        .collect();

    assert_eq!(landings, vec![Face::Tails, Face::Heads]);
    assert!(animator.is_done());
    assert_eq!(animator.tally(), SessionSummary::new(1, 1));
}
