//! Navigation highlighting.
//!
//! Links carry the page they lead to in a `data-page` attribute, holding
//! either the route key (`products`) or the page id (`page-products`). Given
//! the current page, exactly one link per collection is marked: the first one
//! that matches.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::routes::PageId;

/// Attribute naming a link's target page.
pub const PAGE_ATTR: &str = "data-page";

/// Class carried by the current link.
pub const ACTIVE_CLASS: &str = "active";

/// ARIA attribute carried by the current link, with [`CURRENT_VALUE`].
pub const CURRENT_ATTR: &str = "aria-current";

pub const CURRENT_VALUE: &str = "page";

/// Whether a `data-page` value refers to `page`.
#[must_use]
pub fn link_matches(data_page: &str, page: PageId) -> bool {
    let value = data_page.trim();
    value == page.route_key() || value == page.element_id()
}

/// Marker state for each link in a collection, given each link's `data-page`.
///
/// At most one entry is `true`. Links without the attribute are never current.
#[must_use]
pub fn link_states<S: AsRef<str>>(link_pages: &[Option<S>], page: PageId) -> Vec<bool> {
    let current = link_pages
        .iter()
        .position(|value| value.as_ref().is_some_and(|v| link_matches(v.as_ref(), page)));
    (0..link_pages.len()).map(|i| Some(i) == current).collect()
}
