#![allow(clippy::float_cmp)]

use super::*;

fn core() -> SweepCore {
    SweepCore::new(1200.0, 900.0)
}

// =============================================================
// Throttle
// =============================================================

#[test]
fn first_trigger_starts() {
    let mut sweep = core();
    assert!(sweep.try_start(0.0));
    assert!(sweep.is_playing());
}

#[test]
fn two_triggers_within_cooldown_play_once() {
    let mut sweep = core();
    let started = [sweep.try_start(1000.0), sweep.try_start(1500.0)];
    assert_eq!(started.iter().filter(|s| **s).count(), 1);
}

#[test]
fn trigger_at_cooldown_boundary_starts() {
    let mut sweep = core();
    assert!(sweep.try_start(1000.0));
    assert!(!sweep.try_start(2199.9));
    assert!(sweep.try_start(2200.0));
}

#[test]
fn throttled_trigger_does_not_extend_window() {
    let mut sweep = core();
    assert!(sweep.try_start(0.0));
    assert!(!sweep.try_start(1100.0));
    assert!(sweep.try_start(1200.0));
}

// =============================================================
// Playback
// =============================================================

#[test]
fn frames_run_until_duration_then_finish() {
    let mut sweep = core();
    sweep.try_start(100.0);
    assert!(matches!(sweep.frame(100.0), SweepFrame::Running { .. }));
    assert!(matches!(sweep.frame(550.0), SweepFrame::Running { .. }));
    assert_eq!(sweep.frame(1000.0), SweepFrame::Finished);
    assert!(!sweep.is_playing());
}

#[test]
fn frame_without_playback_is_finished() {
    assert_eq!(core().frame(0.0), SweepFrame::Finished);
}

#[test]
fn first_frame_starts_left_of_logo() {
    let mut sweep = core();
    sweep.try_start(0.0);
    assert_eq!(sweep.frame(0.0), SweepFrame::Running { transform: "translate(-1.0000 0)".into() });
}

#[test]
fn midpoint_frame_is_centered() {
    let mut sweep = core();
    sweep.try_start(0.0);
    assert_eq!(sweep.frame(450.0), SweepFrame::Running { transform: "translate(0.0000 0)".into() });
}

#[test]
fn stop_ends_playback() {
    let mut sweep = core();
    sweep.try_start(0.0);
    sweep.stop();
    assert_eq!(sweep.frame(10.0), SweepFrame::Finished);
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut sweep = SweepCore::new(1200.0, 0.0);
    sweep.try_start(0.0);
    assert_eq!(sweep.frame(0.0), SweepFrame::Finished);
}

// =============================================================
// Build flag
// =============================================================

#[test]
fn build_happens_once() {
    let mut sweep = core();
    assert!(sweep.needs_build());
    sweep.mark_built();
    assert!(!sweep.needs_build());
}

// =============================================================
// Shape
// =============================================================

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(0.5), 0.5);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert_eq!(ease_in_out(-3.0), 0.0);
    assert_eq!(ease_in_out(7.0), 1.0);
}

#[test]
fn easing_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out(f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn transform_spans_two_widths() {
    assert_eq!(gradient_transform(0.0), "translate(-1.0000 0)");
    assert_eq!(gradient_transform(1.0), "translate(1.0000 0)");
}

#[test]
fn stops_use_accent_and_fade_at_edges() {
    let stops = gradient_stops("#a78bfa");
    assert_eq!(stops.first().map(|s| s.opacity), Some(0.0));
    assert_eq!(stops.last().map(|s| s.opacity), Some(0.0));
    assert!(stops.iter().filter(|s| s.color == "#a78bfa").count() >= 2);
}
