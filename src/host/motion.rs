//! `prefers-reduced-motion` tracking.

use web_sys::{MediaQueryList, Window};

use crate::app::Shared;
use crate::host;
use crate::selectors::REDUCED_MOTION_QUERY;

pub fn query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn prefers_reduced(window: &Window) -> bool {
    query(window).is_some_and(|q| q.matches())
}

/// Re-evaluate decorative motion after the preference changed.
pub fn on_change(app: &Shared, prefers_reduced: bool) {
    let allowed = {
        let mut state = app.borrow_mut();
        let allowed = state.config.motion_allowed(prefers_reduced);
        state.motion_allowed = allowed;
        allowed
    };
    log::debug!("[motion] decorative motion {}", if allowed { "on" } else { "off" });
    if !allowed {
        host::logo::finish(app);
    }
    host::rotation::set_reduced_motion(app, !allowed);
}
