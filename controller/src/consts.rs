//! Default timings and thresholds. [`crate::config::SiteConfig`] starts from these.

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width at and above which the mobile drawer is never shown.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Logo sweep ──────────────────────────────────────────────────

/// Minimum time between two sweep playbacks.
pub const SWEEP_COOLDOWN_MS: f64 = 1200.0;

/// Length of one sweep playback.
pub const SWEEP_DURATION_MS: f64 = 900.0;

// ── Timers ──────────────────────────────────────────────────────

/// How long the error banner stays visible.
pub const BANNER_HIDE_MS: u32 = 5000;

/// Delay before focus moves into a freshly opened drawer, so the opening
/// transition has rendered.
pub const DRAWER_FOCUS_DELAY_MS: u32 = 100;

/// Upper bound handed to `requestIdleCallback` for icon materialization.
pub const ICON_IDLE_TIMEOUT_MS: u32 = 500;

/// Icon materialization delay when `requestIdleCallback` is unavailable.
pub const ICON_FALLBACK_DELAY_MS: u32 = 100;

// ── Rotation ────────────────────────────────────────────────────

/// One full background turn, reached at the bottom of the document.
pub const FULL_TURN_DEG: f64 = 360.0;
