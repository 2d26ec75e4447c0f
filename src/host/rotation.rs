//! Scroll-linked background rotation, at most one update per frame.

use std::rc::Rc;

use controller::effects::rotation::{self, ROTATION_PROPERTY, ScrollMetrics};
use controller::report;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::app::Shared;
use crate::error::js_message;
use crate::frame::FrameHandle;

/// Queue a rotation update for the next frame if one is not already queued.
pub fn schedule(app: &Shared) {
    if !app.borrow_mut().rotation.request_frame() {
        return;
    }
    let shared = Rc::clone(app);
    match FrameHandle::request(move |_ts| update(&shared)) {
        Some(handle) => app.borrow_mut().pending.rotation_frame = Some(handle),
        None => update(app),
    }
}

pub fn on_visibility(app: &Shared) {
    let hidden = app.borrow().dom.document().hidden();
    let refresh = {
        let mut state = app.borrow_mut();
        let refresh = state.rotation.set_hidden(hidden);
        if hidden {
            state.pending.rotation_frame = None;
        }
        refresh
    };
    if refresh {
        schedule(app);
    }
}

pub fn set_reduced_motion(app: &Shared, reduced: bool) {
    let changed = app.borrow_mut().rotation.set_reduced_motion(reduced);
    if changed {
        schedule(app);
    }
}

fn update(app: &Shared) {
    let metrics = read_metrics().unwrap_or(ScrollMetrics { scroll_y: 0.0, scroll_height: 0.0, viewport_height: 0.0 });
    let (angle, root) = {
        let mut state = app.borrow_mut();
        let angle = state.rotation.on_frame(metrics);
        (angle, state.dom.document().document_element())
    };
    let Some(angle) = angle else { return };
    let Some(root) = root.and_then(|el| el.dyn_into::<HtmlElement>().ok()) else { return };
    if let Err(err) = root.style().set_property(ROTATION_PROPERTY, &rotation::format_angle(angle)) {
        report::log(&js_message(&err), "rotation");
    }
}

fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}
