//! Scroll-driven background rotation.
//!
//! The scroll position, normalized against the maximum scroll distance, maps
//! linearly onto `0..=360` degrees written to a CSS custom property. Updates
//! are coalesced to one per animation frame and paused while the document is
//! hidden.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use crate::consts::FULL_TURN_DEG;

/// Custom property consumed by the stylesheet.
pub const ROTATION_PROPERTY: &str = "--bg-rotation";

/// Scroll measurements taken in a frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// `window.scrollY`.
    pub scroll_y: f64,
    /// `document.documentElement.scrollHeight`.
    pub scroll_height: f64,
    /// `window.innerHeight`.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Maximum scroll distance; zero when the document fits the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

/// Rotation angle in degrees for `metrics`, clamped to `0..=360`.
#[must_use]
pub fn scroll_angle(metrics: ScrollMetrics) -> f64 {
    let max = metrics.max_scroll();
    if max <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / max).clamp(0.0, 1.0) * FULL_TURN_DEG
}

/// CSS value for an angle.
#[must_use]
pub fn format_angle(deg: f64) -> String {
    format!("{deg:.2}deg")
}

/// Frame coalescing and visibility state.
#[derive(Debug, Clone, Default)]
pub struct RotationCore {
    frame_pending: bool,
    hidden: bool,
    reduced_motion: bool,
    last_angle: Option<f64>,
}

impl RotationCore {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self { reduced_motion, ..Self::default() }
    }

    /// Called on scroll/resize. Returns `true` when the host should request
    /// an animation frame; `false` when one is already pending or the
    /// document is hidden.
    pub fn request_frame(&mut self) -> bool {
        if self.hidden || self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Called from the frame callback. Returns the angle to write, or `None`
    /// when it is unchanged or the document went hidden meanwhile.
    pub fn on_frame(&mut self, metrics: ScrollMetrics) -> Option<f64> {
        self.frame_pending = false;
        if self.hidden {
            return None;
        }
        let angle = if self.reduced_motion { 0.0 } else { scroll_angle(metrics) };
        if self.last_angle.is_some_and(|last| (last - angle).abs() < f64::EPSILON) {
            return None;
        }
        self.last_angle = Some(angle);
        Some(angle)
    }

    /// Record document visibility. A hidden document drops any pending frame
    /// (the host cancels it). Returns `true` when the document just became
    /// visible and the host should refresh.
    pub fn set_hidden(&mut self, hidden: bool) -> bool {
        let was_hidden = self.hidden;
        self.hidden = hidden;
        if hidden {
            self.frame_pending = false;
        }
        was_hidden && !hidden
    }

    /// Switch the reduced-motion hold. Returns `true` when the angle must be
    /// refreshed.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        let changed = self.reduced_motion != reduced;
        self.reduced_motion = reduced;
        changed
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
