//! Site configuration.
//!
//! Every field has a default, so an absent or partial config still yields a
//! working site. Unknown fields are ignored. [`SiteConfig::from_json`] parses
//! and validates in one step; the host reads the raw text from an inline
//! `<script type="application/json">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;
use serde::Deserialize;

use crate::consts::{
    BANNER_HIDE_MS, DRAWER_FOCUS_DELAY_MS, ICON_FALLBACK_DELAY_MS, ICON_IDLE_TIMEOUT_MS, MOBILE_BREAKPOINT_PX,
    SWEEP_COOLDOWN_MS, SWEEP_DURATION_MS,
};
use crate::error::ConfigError;
use crate::routes::{HOME_ROUTE, PageId};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Suffix of `document.title`.
    pub site_name: String,
    /// Route shown for an empty hash and used as the fallback target.
    pub home_route: String,
    /// Width at which an open drawer closes.
    pub mobile_breakpoint_px: f64,
    pub sweep_cooldown_ms: f64,
    pub sweep_duration_ms: f64,
    pub banner_hide_ms: u32,
    pub drawer_focus_delay_ms: u32,
    pub icon_idle_timeout_ms: u32,
    pub icon_fallback_delay_ms: u32,
    /// Hold decorative motion when the user prefers reduced motion.
    pub respect_reduced_motion: bool,
    /// `log` level name: `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Pagewire".to_owned(),
            home_route: HOME_ROUTE.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            sweep_cooldown_ms: SWEEP_COOLDOWN_MS,
            sweep_duration_ms: SWEEP_DURATION_MS,
            banner_hide_ms: BANNER_HIDE_MS,
            drawer_focus_delay_ms: DRAWER_FOCUS_DELAY_MS,
            icon_idle_timeout_ms: ICON_IDLE_TIMEOUT_MS,
            icon_fallback_delay_ms: ICON_FALLBACK_DELAY_MS,
            respect_reduced_motion: true,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or mistyped fields, and the
    /// errors of [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownHomeRoute`], [`ConfigError::NonPositive`], or
    /// [`ConfigError::LogLevel`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if PageId::from_route_key(&self.home_route).is_none() {
            return Err(ConfigError::UnknownHomeRoute(self.home_route.clone()));
        }
        positive("mobile_breakpoint_px", self.mobile_breakpoint_px)?;
        positive("sweep_duration_ms", self.sweep_duration_ms)?;
        positive("sweep_cooldown_ms", self.sweep_cooldown_ms)?;
        if self.banner_hide_ms == 0 {
            return Err(ConfigError::NonPositive { field: "banner_hide_ms" });
        }
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// The home page. Falls back to the built-in home route if `home_route`
    /// was never validated.
    #[must_use]
    pub fn home(&self) -> PageId {
        PageId::from_route_key(&self.home_route).unwrap_or(PageId::Hub)
    }

    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Whether decorative motion may play, given the user's reduced-motion preference.
    #[must_use]
    pub fn motion_allowed(&self, prefers_reduced_motion: bool) -> bool {
        !(self.respect_reduced_motion && prefers_reduced_motion)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 { Ok(()) } else { Err(ConfigError::NonPositive { field }) }
}
