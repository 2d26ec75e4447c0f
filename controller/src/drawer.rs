//! Mobile navigation drawer: state machine, focus trap, and geometry.
//!
//! The drawer is `Closed` until the toggle opens it. While open, the
//! backdrop, Escape, a nav link click, or a resize to desktop width all close
//! it. Each transition yields the full list of [`DrawerEffect`]s for the host;
//! an event that changes nothing yields an empty list.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

/// Whether the drawer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Input events the drawer reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    /// The menu toggle button was pressed.
    Toggle,
    /// The backdrop overlay was clicked.
    BackdropClick,
    /// Escape was pressed.
    Escape,
    /// The window was resized to `width` CSS pixels.
    Resize { width: f64 },
    /// A navigation link inside the drawer was clicked.
    LinkClick,
}

impl DrawerEvent {
    /// Map a `KeyboardEvent.key` value to a drawer event.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        matches!(key, "Escape" | "Esc").then_some(Self::Escape)
    }
}

/// Document changes for the host to apply, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEffect {
    /// Toggle button visual state and `aria-expanded`.
    SetToggleExpanded(bool),
    /// Drawer visibility and `aria-hidden`.
    SetDrawerVisible(bool),
    /// Backdrop overlay visibility.
    SetBackdropVisible(bool),
    /// Suppress or restore page scrolling.
    SetScrollLocked(bool),
    /// Re-measure the header and reposition the drawer.
    RecomputeGeometry,
    /// Focus the first drawer link after `delay_ms`.
    FocusFirstLink { delay_ms: u32 },
    /// Drop a focus transfer that has not fired yet.
    CancelPendingFocus,
    /// Move focus back to the toggle if it is inside the drawer.
    ReturnFocusToToggle,
}

/// Drawer state plus the settings that shape its transitions.
#[derive(Debug, Clone)]
pub struct DrawerCore {
    state: DrawerState,
    breakpoint_px: f64,
    focus_delay_ms: u32,
}

impl DrawerCore {
    #[must_use]
    pub fn new(breakpoint_px: f64, focus_delay_ms: u32) -> Self {
        Self { state: DrawerState::Closed, breakpoint_px, focus_delay_ms }
    }

    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Feed an event; returns the effects of the resulting transition.
    pub fn handle(&mut self, event: DrawerEvent) -> Vec<DrawerEffect> {
        let next = match (self.state, event) {
            (state, DrawerEvent::Toggle) => state.flipped(),
            (DrawerState::Open, DrawerEvent::BackdropClick | DrawerEvent::Escape | DrawerEvent::LinkClick) => {
                DrawerState::Closed
            }
            (DrawerState::Open, DrawerEvent::Resize { width }) if width >= self.breakpoint_px => DrawerState::Closed,
            (state, _) => state,
        };
        if next == self.state {
            return Vec::new();
        }
        self.state = next;
        log::debug!("[drawer] {event:?} -> {next:?}");

        match next {
            DrawerState::Open => vec![
                DrawerEffect::RecomputeGeometry,
                DrawerEffect::SetToggleExpanded(true),
                DrawerEffect::SetDrawerVisible(true),
                DrawerEffect::SetBackdropVisible(true),
                DrawerEffect::SetScrollLocked(true),
                DrawerEffect::FocusFirstLink { delay_ms: self.focus_delay_ms },
            ],
            DrawerState::Closed => vec![
                DrawerEffect::CancelPendingFocus,
                DrawerEffect::SetToggleExpanded(false),
                DrawerEffect::SetDrawerVisible(false),
                DrawerEffect::SetBackdropVisible(false),
                DrawerEffect::SetScrollLocked(false),
                DrawerEffect::ReturnFocusToToggle,
            ],
        }
    }
}

// =============================================================
// Focus trap
// =============================================================

/// Direction of a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    #[must_use]
    pub fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// Where focus must wrap to when Tab is pressed inside the open drawer.
///
/// `focused` is the index of the focused element among the drawer's
/// `focusable_count` focusable elements, or `None` when focus is outside the
/// drawer. Returns the index to focus (and suppress the default action for),
/// or `None` to let the browser move focus normally.
#[must_use]
pub fn trap_tab(focused: Option<usize>, focusable_count: usize, direction: TabDirection) -> Option<usize> {
    if focusable_count == 0 {
        return None;
    }
    let last = focusable_count - 1;
    match (direction, focused) {
        (TabDirection::Forward, None) => Some(0),
        (TabDirection::Backward, None | Some(0)) => Some(last),
        (TabDirection::Forward, Some(i)) if i >= last => Some(0),
        _ => None,
    }
}

// =============================================================
// Geometry
// =============================================================

/// Drawer placement below the fixed header, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerGeometry {
    pub top_px: f64,
    pub max_height_px: f64,
}

impl DrawerGeometry {
    /// Place the drawer directly under a header of `header_height`, filling
    /// the rest of a `viewport_height` viewport.
    #[must_use]
    pub fn from_header(header_height: f64, viewport_height: f64) -> Self {
        let top_px = header_height.max(0.0);
        let max_height_px = (viewport_height - top_px).max(0.0);
        Self { top_px, max_height_px }
    }

    #[must_use]
    pub fn top_css(&self) -> String {
        format!("{}px", self.top_px.round())
    }

    #[must_use]
    pub fn max_height_css(&self) -> String {
        format!("{}px", self.max_height_px.round())
    }
}
