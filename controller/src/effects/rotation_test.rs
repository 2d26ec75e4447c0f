#![allow(clippy::float_cmp)]

use super::*;

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_y, scroll_height: 3000.0, viewport_height: 1000.0 }
}

// =============================================================
// scroll_angle
// =============================================================

#[test]
fn top_is_zero_and_bottom_is_full_turn() {
    assert_eq!(scroll_angle(metrics(0.0)), 0.0);
    assert_eq!(scroll_angle(metrics(2000.0)), 360.0);
}

#[test]
fn angle_is_linear_in_scroll() {
    assert_eq!(scroll_angle(metrics(500.0)), 90.0);
    assert_eq!(scroll_angle(metrics(1000.0)), 180.0);
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(scroll_angle(metrics(-40.0)), 0.0);
    assert_eq!(scroll_angle(metrics(2600.0)), 360.0);
}

#[test]
fn short_document_does_not_rotate() {
    let m = ScrollMetrics { scroll_y: 0.0, scroll_height: 600.0, viewport_height: 900.0 };
    assert_eq!(m.max_scroll(), 0.0);
    assert_eq!(scroll_angle(m), 0.0);
}

#[test]
fn format_uses_degrees() {
    assert_eq!(format_angle(90.0), "90.00deg");
    assert_eq!(format_angle(12.346), "12.35deg");
}

// =============================================================
// RotationCore
// =============================================================

#[test]
fn frames_are_coalesced() {
    let mut core = RotationCore::new(false);
    assert!(core.request_frame());
    assert!(!core.request_frame());
    assert!(!core.request_frame());
    core.on_frame(metrics(500.0));
    assert!(core.request_frame());
}

#[test]
fn frame_yields_angle_once_per_change() {
    let mut core = RotationCore::new(false);
    core.request_frame();
    assert_eq!(core.on_frame(metrics(500.0)), Some(90.0));
    core.request_frame();
    assert_eq!(core.on_frame(metrics(500.0)), None);
    core.request_frame();
    assert_eq!(core.on_frame(metrics(1000.0)), Some(180.0));
}

#[test]
fn hidden_document_requests_no_frames() {
    let mut core = RotationCore::new(false);
    core.set_hidden(true);
    assert!(!core.request_frame());
    assert!(core.is_hidden());
}

#[test]
fn hiding_drops_pending_frame() {
    let mut core = RotationCore::new(false);
    assert!(core.request_frame());
    core.set_hidden(true);
    assert_eq!(core.on_frame(metrics(500.0)), None);
    core.set_hidden(false);
    assert!(core.request_frame());
}

#[test]
fn becoming_visible_asks_for_refresh() {
    let mut core = RotationCore::new(false);
    assert!(!core.set_hidden(false));
    assert!(!core.set_hidden(true));
    assert!(core.set_hidden(false));
}

#[test]
fn reduced_motion_holds_zero() {
    let mut core = RotationCore::new(true);
    core.request_frame();
    assert_eq!(core.on_frame(metrics(1000.0)), Some(0.0));
    core.request_frame();
    assert_eq!(core.on_frame(metrics(2000.0)), None);
}

#[test]
fn leaving_reduced_motion_resumes_rotation() {
    let mut core = RotationCore::new(true);
    core.request_frame();
    core.on_frame(metrics(1000.0));
    assert!(core.set_reduced_motion(false));
    assert!(!core.set_reduced_motion(false));
    core.request_frame();
    assert_eq!(core.on_frame(metrics(1000.0)), Some(180.0));
}
