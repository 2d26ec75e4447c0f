//! Error types for navigation and configuration.

/// Why a page could not be shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Neither a page id nor a route key matched.
    #[error("invalid page identifier: {0:?}")]
    InvalidIdentifier(String),
    /// The identifier resolved, but the page container is missing from the document.
    #[error("page element not found: {0}")]
    PageNotFound(String),
    /// The host failed while applying the page switch to the document.
    #[error("failed to apply page {page}: {message}")]
    Dom { page: String, message: String },
}

/// Error returned by [`crate::config::SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The raw text is not valid JSON for the config shape.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `home_route` does not name one of the route keys.
    #[error("unknown home route: {0:?}")]
    UnknownHomeRoute(String),
    /// A size or duration that must be strictly positive is not.
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
    /// `log_level` is not a `log` level name.
    #[error("unknown log level: {0:?}")]
    LogLevel(String),
}
