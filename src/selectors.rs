//! Element ids, selectors, and class names the host binds to.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

// ── Ids ─────────────────────────────────────────────────────────

pub const HEADER_ID: &str = "site-header";
pub const CTA_ID: &str = "header-cta";
pub const MENU_ID: &str = "mobile-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const BACKDROP_ID: &str = "menu-backdrop";
pub const LOGO_ID: &str = "brand-logo";
pub const BANNER_ID: &str = "error-banner";
pub const BANNER_TEXT_ID: &str = "error-banner-text";
pub const BANNER_CLOSE_ID: &str = "error-banner-close";
/// Inline `<script type="application/json">` holding the site config.
pub const CONFIG_ID: &str = "site-config";

// ── Selectors ───────────────────────────────────────────────────

pub const DESKTOP_LINKS: &str = ".nav-desktop [data-page]";
pub const MOBILE_LINKS: &str = ".nav-mobile [data-page]";
pub const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";
pub const LOGO_PATHS: &str = "path";
pub const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), \
                             textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

// ── Classes ─────────────────────────────────────────────────────

/// Marks the showing page container.
pub const PAGE_ACTIVE_CLASS: &str = "active";
/// Marks the open drawer and the pressed toggle.
pub const OPEN_CLASS: &str = "is-open";
/// Marks the shown backdrop and banner.
pub const VISIBLE_CLASS: &str = "is-visible";

// ── Media ───────────────────────────────────────────────────────

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// `"true"` / `"false"` for ARIA attributes.
#[must_use]
pub fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
