//! Error banner. Showing it must never fail, so every step degrades to a
//! log line.

use std::rc::Rc;

use controller::report;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::app::{App, Shared};
use crate::dom;
use crate::error::js_message;
use crate::selectors::{BANNER_ID, BANNER_TEXT_ID, VISIBLE_CLASS};

/// Show `message` and hide it again after the configured delay.
pub fn show(app: &Shared, message: &str, context: &str) {
    log::warn!("[{context}] {message}");
    let Ok(mut state) = app.try_borrow_mut() else {
        log::error!("[banner] app busy, message not shown: {message}");
        return;
    };
    let generation = state.banner.show(message);
    if let Err(err) = render(&mut state) {
        report::log(&js_message(&err), "banner");
        return;
    }
    let shared = Rc::clone(app);
    let delay = state.config.banner_hide_ms;
    state.pending.banner_hide = Some(Timeout::new(delay, move || expire(&shared, generation)));
}

pub fn hide(app: &Shared) {
    let Ok(mut state) = app.try_borrow_mut() else { return };
    state.banner.hide();
    state.pending.banner_hide = None;
    if let Err(err) = render(&mut state) {
        report::log(&js_message(&err), "banner");
    }
}

fn expire(app: &Shared, generation: u64) {
    let Ok(mut state) = app.try_borrow_mut() else { return };
    if state.banner.expire(generation)
        && let Err(err) = render(&mut state)
    {
        report::log(&js_message(&err), "banner");
    }
}

fn render(app: &mut App) -> Result<(), JsValue> {
    let Some(banner) = app.dom.by_id(BANNER_ID) else { return Ok(()) };
    let visible = app.banner.is_visible();
    if let Some(text) = app.dom.by_id(BANNER_TEXT_ID) {
        text.set_text_content(Some(app.banner.message()));
    }
    dom::set_class(&banner, VISIBLE_CLASS, visible)?;
    dom::set_aria_hidden(&banner, !visible)
}
