//! Loads the site configuration from the page.
//!
//! The config is an optional inline JSON element. A missing or empty element
//! means defaults; a present but invalid one is an error the caller logs
//! before falling back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use controller::config::SiteConfig;
use controller::error::ConfigError;

/// Parse the text of the config element, if there is one.
///
/// # Errors
///
/// Whatever [`SiteConfig::from_json`] rejects.
pub fn parse(raw: Option<&str>) -> Result<SiteConfig, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SiteConfig::default()),
        Some(text) => SiteConfig::from_json(text),
    }
}

/// Read and parse the config element from the current document.
///
/// # Errors
///
/// See [`parse`].
pub fn load() -> Result<SiteConfig, ConfigError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::selectors::CONFIG_ID))
            .and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        parse(None)
    }
}
