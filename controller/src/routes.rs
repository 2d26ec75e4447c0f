//! Static route table and per-page configuration.
//!
//! The site has exactly four pages. Each has a route key (the URL hash
//! without `#`), a container element id, and a fixed configuration: theme
//! class, call-to-action, title, and the accent colour used by the logo sweep.
//! Lookups are linear scans over [`ROUTES`]; the table is tiny.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::error::NavError;

/// One of the site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Hub,
    Products,
    Platform,
    Contact,
}

/// Fixed configuration for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    /// Class applied to `<body>` while the page is active.
    pub theme: &'static str,
    /// Label of the header call-to-action.
    pub cta_text: &'static str,
    /// `href` of the header call-to-action.
    pub cta_href: &'static str,
    /// Page part of `document.title`.
    pub title: &'static str,
    /// Accent colour of the logo gloss gradient.
    pub accent: &'static str,
}

/// A route table entry: hash key to page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub key: &'static str,
    pub page: PageId,
}

/// The route table.
pub const ROUTES: [Route; 4] = [
    Route { key: "hub", page: PageId::Hub },
    Route { key: "products", page: PageId::Products },
    Route { key: "platform", page: PageId::Platform },
    Route { key: "contact", page: PageId::Contact },
];

/// Route shown when the hash is empty, and the target of every fallback.
pub const HOME_ROUTE: &str = "hub";

const HUB: PageConfig = PageConfig {
    theme: "theme-hub",
    cta_text: "Explore Products",
    cta_href: "#products",
    title: "Hub",
    accent: "#7dd3fc",
};

const PRODUCTS: PageConfig = PageConfig {
    theme: "theme-products",
    cta_text: "Talk to Us",
    cta_href: "#contact",
    title: "Products",
    accent: "#a78bfa",
};

const PLATFORM: PageConfig = PageConfig {
    theme: "theme-platform",
    cta_text: "See Products",
    cta_href: "#products",
    title: "Platform",
    accent: "#34d399",
};

const CONTACT: PageConfig = PageConfig {
    theme: "theme-contact",
    cta_text: "Back to Hub",
    cta_href: "#hub",
    title: "Contact",
    accent: "#fbbf24",
};

impl PageId {
    /// Every page, in route table order.
    pub const ALL: [Self; 4] = [Self::Hub, Self::Products, Self::Platform, Self::Contact];

    /// The hash key for this page.
    #[must_use]
    pub fn route_key(self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::Products => "products",
            Self::Platform => "platform",
            Self::Contact => "contact",
        }
    }

    /// The `id` of the page container element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Hub => "page-hub",
            Self::Products => "page-products",
            Self::Platform => "page-platform",
            Self::Contact => "page-contact",
        }
    }

    #[must_use]
    pub fn config(self) -> &'static PageConfig {
        match self {
            Self::Hub => &HUB,
            Self::Products => &PRODUCTS,
            Self::Platform => &PLATFORM,
            Self::Contact => &CONTACT,
        }
    }

    /// Look a page up by route key.
    #[must_use]
    pub fn from_route_key(key: &str) -> Option<Self> {
        ROUTES.iter().find(|route| route.key == key).map(|route| route.page)
    }

    /// Look a page up by container element id.
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.element_id() == id)
    }
}

/// Resolve a route key or raw page id to a page.
///
/// Accepts `"products"`, `"#products"`, and `"page-products"`. A direct page
/// id match wins over a route key match.
///
/// # Errors
///
/// Returns [`NavError::InvalidIdentifier`] when nothing matches, including for
/// an empty identifier.
pub fn resolve(identifier: &str) -> Result<PageId, NavError> {
    let trimmed = identifier.trim();
    let key = trimmed.strip_prefix('#').unwrap_or(trimmed);
    PageId::from_element_id(key)
        .or_else(|| PageId::from_route_key(key))
        .ok_or_else(|| NavError::InvalidIdentifier(identifier.to_owned()))
}

/// Every theme class, so a host can clear the previous one before applying the next.
pub fn themes() -> impl Iterator<Item = &'static str> {
    PageId::ALL.into_iter().map(|page| page.config().theme)
}
