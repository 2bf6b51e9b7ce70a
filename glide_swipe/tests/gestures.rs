// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture sequences against the swipe state machine, with synthetic frame
//! timestamps.

use std::cell::Cell;

use glide_progress::Easing;
use glide_swipe::{
    GestureSample, SwipeConfig, SwipeGestureController, SwipeOutcome, SwipeState, dismiss_channel,
};

fn drag<H: glide_swipe::DismissHandler>(
    swipe: &mut SwipeGestureController<H>,
    start_ms: u64,
    translations: &[f64],
) -> u64 {
    assert!(swipe.gesture_start(start_ms), "gesture start ignored");
    let mut now = start_ms;
    for &dx in translations {
        now += 16;
        swipe.gesture_update(now, GestureSample::new(dx));
    }
    now
}

#[test]
fn long_drag_commits_once_and_slides_off() {
    let dismissed = Cell::new(0);
    let mut swipe = SwipeGestureController::new(400.0, || dismissed.set(dismissed.get() + 1));

    let now = drag(&mut swipe, 0, &[0.0, -30.0, -60.0, -100.0]);
    assert_eq!(swipe.offset(now), -100.0);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::Committed);
    assert_eq!(dismissed.get(), 1);

    assert!(swipe.is_animating(now + 150));
    assert!(swipe.offset(now + 150) < -100.0);
    assert_eq!(swipe.offset(now + 300), -400.0);
    assert_eq!(swipe.state(now + 300), SwipeState::Committed);
}

#[test]
fn short_drag_springs_back() {
    let dismissed = Cell::new(0);
    let mut swipe = SwipeGestureController::new(400.0, || dismissed.set(dismissed.get() + 1));

    let now = drag(&mut swipe, 0, &[0.0, -20.0]);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::SpringBack);
    assert_eq!(swipe.state(now), SwipeState::Settling { target: 0.0 });
    assert_eq!(swipe.offset(now), -20.0);
    assert_eq!(swipe.offset(now + 300), 0.0);
    assert_eq!(swipe.state(now + 300), SwipeState::Idle);
    assert_eq!(dismissed.get(), 0);
}

#[test]
fn tap_never_commits() {
    let dismissed = Cell::new(0);
    let mut swipe = SwipeGestureController::new(400.0, || dismissed.set(dismissed.get() + 1));

    swipe.gesture_start(0);
    assert_eq!(swipe.gesture_end(40), SwipeOutcome::SpringBack);
    assert_eq!(swipe.state(40), SwipeState::Idle);
    assert_eq!(dismissed.get(), 0);
}

#[test]
fn threshold_is_strict() {
    let dismissed = Cell::new(0);
    let mut swipe = SwipeGestureController::new(400.0, || dismissed.set(dismissed.get() + 1));

    let now = drag(&mut swipe, 0, &[-80.0]);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::SpringBack);

    let now = drag(&mut swipe, now + 400, &[-80.5]);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::Committed);
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn committed_is_terminal() {
    let dismissed = Cell::new(0);
    let mut swipe = SwipeGestureController::new(400.0, || dismissed.set(dismissed.get() + 1));

    let now = drag(&mut swipe, 0, &[-120.0]);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::Committed);

    assert!(!swipe.gesture_start(now + 10));
    swipe.gesture_update(now + 20, GestureSample::new(50.0));
    assert_eq!(swipe.gesture_end(now + 30), SwipeOutcome::Ignored);
    swipe.gesture_cancel(now + 40);
    assert_eq!(swipe.state(now + 1_000), SwipeState::Committed);
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn redrag_during_spring_back_starts_from_current_offset() {
    let config = SwipeConfig::default().with_settle_easing(Easing::Linear);
    let mut swipe = SwipeGestureController::with_config(config, 400.0, || {});

    let now = drag(&mut swipe, 0, &[-60.0]);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::SpringBack);

    // Halfway back.
    let grab = now + 150;
    assert_eq!(swipe.offset(grab), -30.0);
    assert!(swipe.gesture_start(grab));
    assert_eq!(swipe.offset(grab), -30.0);

    swipe.gesture_update(grab + 16, GestureSample::new(-10.0));
    assert_eq!(swipe.offset(grab + 16), -40.0);
    assert_eq!(swipe.state(grab + 16), SwipeState::Dragging { offset_x: -40.0 });
}

#[test]
fn drag_beyond_clamp_stays_at_clamp() {
    let mut swipe = SwipeGestureController::new(400.0, || {});
    let now = drag(&mut swipe, 0, &[-60.0, -200.0, -400.0]);
    assert_eq!(swipe.offset(now), -128.0);
}

#[test]
fn wide_viewport_cannot_commit() {
    let dismissed = Cell::new(0);
    let mut swipe = SwipeGestureController::new(400.0, || dismissed.set(dismissed.get() + 1));
    swipe.set_viewport_width(1_024.0);
    assert_eq!(swipe.threshold(), -204.8);

    let now = drag(&mut swipe, 0, &[-500.0]);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::SpringBack);
    assert_eq!(dismissed.get(), 0);
}

#[test]
fn rotation_changes_threshold_for_later_releases() {
    let mut swipe = SwipeGestureController::new(800.0, || {});
    let now = drag(&mut swipe, 0, &[-100.0]);
    swipe.set_viewport_width(400.0);
    assert_eq!(swipe.gesture_end(now), SwipeOutcome::Committed);
    assert_eq!(swipe.offset(now + 300), -400.0);
}

#[test]
fn commit_is_handed_off_through_channel() {
    let (sender, mut rx) = dismiss_channel(42_u32);
    let mut swipe = SwipeGestureController::new(400.0, sender);

    let now = drag(&mut swipe, 0, &[-100.0]);
    assert!(rx.try_recv().is_err());
    swipe.gesture_end(now);
    assert_eq!(rx.try_recv(), Ok(42));
    assert!(rx.try_recv().is_err());
}
