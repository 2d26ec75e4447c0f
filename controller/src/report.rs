//! Error reporting: the diagnostic log line and the banner's state.
//!
//! The host owns the banner element and its auto-hide timer; this module owns
//! what the banner shows and whether a given timer is still allowed to hide
//! it. Nothing here can fail.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt::Display;

/// Write `error` to the diagnostic log under `context`.
pub fn log(error: &dyn Display, context: &str) {
    log::error!("[{context}] {error}");
}

/// Visible state of the transient error banner.
///
/// Every [`BannerState::show`] starts a new generation. An auto-hide timer
/// carries the generation it was scheduled for, so a stale timer cannot hide
/// a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    visible: bool,
    message: String,
    generation: u64,
}

impl BannerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`; returns the generation to hand to the auto-hide timer.
    pub fn show(&mut self, message: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        message.clone_into(&mut self.message);
        self.generation
    }

    /// Hide immediately.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Auto-hide for `generation`. Returns `true` when the banner was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
