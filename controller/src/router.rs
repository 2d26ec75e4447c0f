//! Hash router: resolves identifiers, switches the active page, and plans the
//! side effects of a page switch.
//!
//! DESIGN
//! ======
//! [`RouterCore`] never touches the document. A successful switch returns an
//! ordered list of [`Action`]s for the host to apply; the current page is an
//! explicit field updated in the same call, so nothing has to scan the DOM to
//! find out which page is showing.
//!
//! FAILURE POLICY
//! ==============
//! A failed switch is logged, produces [`Action::ShowError`], and falls back
//! once to the home page with focus movement and smooth scrolling disabled.
//! If the failing target already was the home page there is no fallback, so
//! a broken home page cannot loop. A [`Plan`] records whether its actions are
//! already the fallback; a failure while applying one is only logged.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::error::NavError;
use crate::report;
use crate::routes::{self, PageId};

/// Banner text shown whenever a navigation fails.
pub const NAV_FAILURE_MESSAGE: &str = "Sorry, that page could not be shown. Taking you back to the hub.";

/// Side effects of a page switch beyond visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Move keyboard focus to the page's first heading.
    pub focus: bool,
    /// Animate the scroll back to the top instead of jumping.
    pub smooth_scroll: bool,
}

impl ShowOptions {
    /// Initial load and fallbacks: no focus movement, instant scroll.
    pub const QUIET: Self = Self { focus: false, smooth_scroll: false };

    /// User-driven navigation.
    pub const INTERACTIVE: Self = Self { focus: true, smooth_scroll: true };
}

/// Document mutations requested by the router, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle the `active` marker on a page container; `aria-hidden` is the inverse.
    SetPageActive { page: PageId, active: bool },
    /// Replace any theme class on `<body>` with this one.
    ApplyTheme { theme: &'static str },
    /// Update the header call-to-action.
    SetCta { text: &'static str, href: &'static str },
    /// Highlight the navigation links for this page.
    SyncNav { page: PageId },
    /// Set `document.title`.
    SetTitle { title: String },
    /// Focus the page's first heading, making it focusable if needed.
    FocusHeading { page: PageId },
    /// Scroll the viewport to the top.
    ScrollToTop { smooth: bool },
    /// Play the logo gloss sweep (throttled by the host's sweep core).
    TriggerSweep,
    /// Surface a transient error banner.
    ShowError { message: String },
}

/// Actions for one navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub actions: Vec<Action>,
    /// The actions already are the home fallback; failing to apply them must
    /// not fall back again.
    pub fallback: bool,
}

/// Router state: which page containers exist and which one is showing.
#[derive(Debug, Clone)]
pub struct RouterCore {
    site_name: String,
    home: PageId,
    present: Vec<PageId>,
    current: Option<PageId>,
}

impl RouterCore {
    #[must_use]
    pub fn new(site_name: impl Into<String>, home: PageId) -> Self {
        Self { site_name: site_name.into(), home, present: Vec::new(), current: None }
    }

    /// Record that the container for `page` exists in the document.
    pub fn register_page(&mut self, page: PageId) {
        if !self.present.contains(&page) {
            self.present.push(page);
        }
    }

    #[must_use]
    pub fn has_page(&self, page: PageId) -> bool {
        self.present.contains(&page)
    }

    /// The page shown by the last successful switch.
    #[must_use]
    pub fn current(&self) -> Option<PageId> {
        self.current
    }

    #[must_use]
    pub fn home(&self) -> PageId {
        self.home
    }

    /// Switch to the page named by `identifier`.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidIdentifier`] when the identifier does not resolve,
    /// [`NavError::PageNotFound`] when its container was never registered.
    pub fn show_page(&mut self, identifier: &str, options: ShowOptions) -> Result<Vec<Action>, NavError> {
        let page = routes::resolve(identifier)?;
        if !self.has_page(page) {
            return Err(NavError::PageNotFound(page.element_id().to_owned()));
        }

        let config = page.config();
        let mut actions = Vec::with_capacity(self.present.len() + 7);
        for other in PageId::ALL {
            if self.has_page(other) {
                actions.push(Action::SetPageActive { page: other, active: other == page });
            }
        }
        actions.push(Action::ApplyTheme { theme: config.theme });
        actions.push(Action::SetCta { text: config.cta_text, href: config.cta_href });
        actions.push(Action::SyncNav { page });
        actions.push(Action::SetTitle { title: format!("{} | {}", config.title, self.site_name) });
        if options.focus {
            actions.push(Action::FocusHeading { page });
        }
        actions.push(Action::ScrollToTop { smooth: options.smooth_scroll });
        actions.push(Action::TriggerSweep);

        self.current = Some(page);
        Ok(actions)
    }

    /// Switch pages, falling back to the home page on failure. Never fails.
    pub fn navigate(&mut self, identifier: &str, options: ShowOptions) -> Plan {
        match self.show_page(identifier, options) {
            Ok(actions) => Plan { actions, fallback: false },
            Err(err) => Plan { actions: self.recover(identifier, &err), fallback: true },
        }
    }

    /// Follow-up after applying `plan` for `identifier` failed with `err`.
    ///
    /// A first attempt recovers to the home page. A failed fallback is logged
    /// and yields an empty plan, so the home page is tried at most once.
    pub fn apply_failed(&mut self, identifier: &str, plan: &Plan, err: &NavError) -> Plan {
        if plan.fallback {
            report::log(err, "router fallback");
            return Plan { actions: Vec::new(), fallback: true };
        }
        Plan { actions: self.recover(identifier, err), fallback: true }
    }

    /// Fallback after `identifier` failed with `err`.
    pub fn recover(&mut self, identifier: &str, err: &NavError) -> Vec<Action> {
        report::log(err, "router");
        let mut actions = vec![Action::ShowError { message: NAV_FAILURE_MESSAGE.to_owned() }];
        if self.targets_home(identifier) {
            return actions;
        }
        match self.show_page(self.home.route_key(), ShowOptions::QUIET) {
            Ok(mut fallback) => actions.append(&mut fallback),
            Err(fallback_err) => report::log(&fallback_err, "router fallback"),
        }
        actions
    }

    fn targets_home(&self, identifier: &str) -> bool {
        routes::resolve(identifier).is_ok_and(|page| page == self.home)
    }
}

/// The identifier to show for a `location.hash` value; empty hashes map to `home`.
#[must_use]
pub fn initial_target(hash: &str, home: PageId) -> &str {
    let key = hash.trim().trim_start_matches('#');
    if key.is_empty() { home.route_key() } else { hash }
}
