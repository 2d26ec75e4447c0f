//! Logo gloss sweep: throttling, playback progress, and gradient shape.
//!
//! The host builds a `<linearGradient>` and an overlay of the logo's stroke
//! paths once, then animates the gradient's `gradientTransform` across
//! animation frames. [`SweepCore`] decides whether a trigger may start a
//! playback and what transform each frame shows.

#[cfg(test)]
#[path = "sweep_test.rs"]
mod sweep_test;

/// `id` of the gloss gradient inside the logo's `<defs>`.
pub const GRADIENT_ID: &str = "logo-gloss-gradient";

/// Class of the overlay group holding the cloned stroke paths.
pub const OVERLAY_CLASS: &str = "logo-gloss-overlay";

/// Highlight colour blended around the accent.
const HIGHLIGHT: &str = "#ffffff";

/// One `<stop>` of the gloss gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: &'static str,
    pub color: String,
    pub opacity: f64,
}

/// Stops for a gloss band tinted by `accent`: transparent edges, a bright
/// core, accent shoulders.
#[must_use]
pub fn gradient_stops(accent: &str) -> Vec<GradientStop> {
    vec![
        GradientStop { offset: "0%", color: accent.to_owned(), opacity: 0.0 },
        GradientStop { offset: "35%", color: accent.to_owned(), opacity: 0.6 },
        GradientStop { offset: "50%", color: HIGHLIGHT.to_owned(), opacity: 1.0 },
        GradientStop { offset: "65%", color: accent.to_owned(), opacity: 0.6 },
        GradientStop { offset: "100%", color: accent.to_owned(), opacity: 0.0 },
    ]
}

/// Cubic ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// `gradientTransform` for eased `progress`: the band travels from one
/// bounding-box width left of the logo to one width right of it.
#[must_use]
pub fn gradient_transform(progress: f64) -> String {
    let offset = -1.0 + 2.0 * progress.clamp(0.0, 1.0);
    format!("translate({offset:.4} 0)")
}

/// What the host should draw on an animation frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepFrame {
    /// Still playing; apply `transform` and request another frame.
    Running { transform: String },
    /// Playback ended (or none was running); hide the overlay.
    Finished,
}

/// Throttle and playback clock for the sweep.
#[derive(Debug, Clone)]
pub struct SweepCore {
    cooldown_ms: f64,
    duration_ms: f64,
    last_started_ms: Option<f64>,
    playing_since_ms: Option<f64>,
    built: bool,
}

impl SweepCore {
    #[must_use]
    pub fn new(cooldown_ms: f64, duration_ms: f64) -> Self {
        Self { cooldown_ms, duration_ms, last_started_ms: None, playing_since_ms: None, built: false }
    }

    /// Start a playback at `now_ms` unless one started within the cooldown.
    ///
    /// Returns `false` for a throttled trigger, which the host treats as a no-op.
    pub fn try_start(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_started_ms
            && now_ms - last < self.cooldown_ms
        {
            return false;
        }
        self.last_started_ms = Some(now_ms);
        self.playing_since_ms = Some(now_ms);
        true
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing_since_ms.is_some()
    }

    /// Whether the gradient and overlay still have to be created.
    #[must_use]
    pub fn needs_build(&self) -> bool {
        !self.built
    }

    pub fn mark_built(&mut self) {
        self.built = true;
    }

    /// Advance the playback to `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> SweepFrame {
        let Some(started) = self.playing_since_ms else {
            return SweepFrame::Finished;
        };
        let t = if self.duration_ms > 0.0 { (now_ms - started) / self.duration_ms } else { 1.0 };
        if t >= 1.0 {
            self.playing_since_ms = None;
            return SweepFrame::Finished;
        }
        SweepFrame::Running { transform: gradient_transform(ease_in_out(t)) }
    }

    /// Abandon a running playback, e.g. when its frame callback was cancelled.
    pub fn stop(&mut self) {
        self.playing_since_ms = None;
    }
}
