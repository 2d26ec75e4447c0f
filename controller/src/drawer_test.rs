#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn closed() -> DrawerCore {
    DrawerCore::new(768.0, 100)
}

fn open() -> DrawerCore {
    let mut drawer = closed();
    drawer.handle(DrawerEvent::Toggle);
    drawer
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn starts_closed() {
    assert_eq!(closed().state(), DrawerState::Closed);
    assert!(!closed().is_open());
}

#[test]
fn toggle_opens_with_backdrop_and_scroll_lock() {
    let mut drawer = closed();
    let effects = drawer.handle(DrawerEvent::Toggle);
    assert!(drawer.is_open());
    assert!(effects.contains(&DrawerEffect::SetToggleExpanded(true)));
    assert!(effects.contains(&DrawerEffect::SetDrawerVisible(true)));
    assert!(effects.contains(&DrawerEffect::SetBackdropVisible(true)));
    assert!(effects.contains(&DrawerEffect::SetScrollLocked(true)));
}

#[test]
fn opening_recomputes_geometry_first_and_focuses_last() {
    let effects = closed().handle(DrawerEvent::Toggle);
    assert_eq!(effects.first(), Some(&DrawerEffect::RecomputeGeometry));
    assert_eq!(effects.last(), Some(&DrawerEffect::FocusFirstLink { delay_ms: 100 }));
}

#[test]
fn escape_closes_and_restores() {
    let mut drawer = open();
    let effects = drawer.handle(DrawerEvent::Escape);
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert!(effects.contains(&DrawerEffect::SetBackdropVisible(false)));
    assert!(effects.contains(&DrawerEffect::SetScrollLocked(false)));
    assert!(effects.contains(&DrawerEffect::SetToggleExpanded(false)));
    assert!(effects.contains(&DrawerEffect::SetDrawerVisible(false)));
}

#[test]
fn closing_cancels_pending_focus_first() {
    let effects = open().handle(DrawerEvent::BackdropClick);
    assert_eq!(effects.first(), Some(&DrawerEffect::CancelPendingFocus));
    assert_eq!(effects.last(), Some(&DrawerEffect::ReturnFocusToToggle));
}

#[test]
fn toggle_twice_closes() {
    let mut drawer = open();
    let effects = drawer.handle(DrawerEvent::Toggle);
    assert!(!drawer.is_open());
    assert!(!effects.is_empty());
}

#[test]
fn backdrop_and_link_click_close() {
    for event in [DrawerEvent::BackdropClick, DrawerEvent::LinkClick] {
        let mut drawer = open();
        drawer.handle(event);
        assert!(!drawer.is_open(), "{event:?}");
    }
}

#[test]
fn resize_to_desktop_closes() {
    let mut drawer = open();
    drawer.handle(DrawerEvent::Resize { width: 768.0 });
    assert!(!drawer.is_open());
}

#[test]
fn resize_below_breakpoint_keeps_open() {
    let mut drawer = open();
    let effects = drawer.handle(DrawerEvent::Resize { width: 767.9 });
    assert!(drawer.is_open());
    assert!(effects.is_empty());
}

#[test]
fn close_events_while_closed_are_noops() {
    for event in [
        DrawerEvent::BackdropClick,
        DrawerEvent::Escape,
        DrawerEvent::LinkClick,
        DrawerEvent::Resize { width: 1200.0 },
    ] {
        let mut drawer = closed();
        assert!(drawer.handle(event).is_empty(), "{event:?}");
        assert!(!drawer.is_open());
    }
}

#[test]
fn focus_delay_comes_from_constructor() {
    let effects = DrawerCore::new(768.0, 250).handle(DrawerEvent::Toggle);
    assert!(effects.contains(&DrawerEffect::FocusFirstLink { delay_ms: 250 }));
}

#[test]
fn escape_key_names_map_to_escape() {
    assert_eq!(DrawerEvent::from_key("Escape"), Some(DrawerEvent::Escape));
    assert_eq!(DrawerEvent::from_key("Esc"), Some(DrawerEvent::Escape));
    assert_eq!(DrawerEvent::from_key("Enter"), None);
}

// =============================================================
// Focus trap
// =============================================================

#[test]
fn tab_on_last_wraps_to_first() {
    assert_eq!(trap_tab(Some(3), 4, TabDirection::Forward), Some(0));
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    assert_eq!(trap_tab(Some(0), 4, TabDirection::Backward), Some(3));
}

#[test]
fn tab_in_the_middle_is_left_to_the_browser() {
    assert_eq!(trap_tab(Some(1), 4, TabDirection::Forward), None);
    assert_eq!(trap_tab(Some(2), 4, TabDirection::Backward), None);
}

#[test]
fn focus_outside_is_pulled_back_in() {
    assert_eq!(trap_tab(None, 4, TabDirection::Forward), Some(0));
    assert_eq!(trap_tab(None, 4, TabDirection::Backward), Some(3));
}

#[test]
fn single_focusable_element_stays_focused() {
    assert_eq!(trap_tab(Some(0), 1, TabDirection::Forward), Some(0));
    assert_eq!(trap_tab(Some(0), 1, TabDirection::Backward), Some(0));
}

#[test]
fn empty_drawer_traps_nothing() {
    assert_eq!(trap_tab(None, 0, TabDirection::Forward), None);
}

#[test]
fn shift_maps_to_backward() {
    assert_eq!(TabDirection::from_shift(true), TabDirection::Backward);
    assert_eq!(TabDirection::from_shift(false), TabDirection::Forward);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn geometry_sits_under_header() {
    let g = DrawerGeometry::from_header(64.0, 800.0);
    assert_eq!(g.top_px, 64.0);
    assert_eq!(g.max_height_px, 736.0);
    assert_eq!(g.top_css(), "64px");
    assert_eq!(g.max_height_css(), "736px");
}

#[test]
fn geometry_never_goes_negative() {
    let g = DrawerGeometry::from_header(900.0, 600.0);
    assert_eq!(g.max_height_px, 0.0);
    let g = DrawerGeometry::from_header(-5.0, 600.0);
    assert_eq!(g.top_px, 0.0);
    assert_eq!(g.max_height_px, 600.0);
}

#[test]
fn geometry_css_rounds_fractional_heights() {
    let g = DrawerGeometry::from_header(63.6, 800.0);
    assert_eq!(g.top_css(), "64px");
}
