//! Deferred icon rendering through the page's icon library, when present.

use controller::report;
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::app::Shared;
use crate::error::js_message;
use crate::frame::IdleHandle;

/// Render icons when the browser is idle, or after a short delay where idle
/// callbacks are unsupported. Either way the pending callback is owned by the
/// app.
pub fn schedule(app: &Shared) {
    let (idle_timeout, fallback_delay) = {
        let state = app.borrow();
        (state.config.icon_idle_timeout_ms, state.config.icon_fallback_delay_ms)
    };

    match IdleHandle::request(idle_timeout, create_icons) {
        Ok(Some(handle)) => {
            app.borrow_mut().pending.icons_idle = Some(handle);
            return;
        }
        Ok(None) => {}
        Err(err) => report::log(&js_message(&err), "icons"),
    }
    app.borrow_mut().pending.icons = Some(Timeout::new(fallback_delay, create_icons));
}

fn create_icons() {
    let Some(window) = web_sys::window() else { return };
    let library = match Reflect::get(&window, &JsValue::from_str("lucide")) {
        Ok(value) if value.is_object() => value,
        _ => {
            log::debug!("[icons] icon library not loaded");
            return;
        }
    };
    let Some(create) = method(&library, "createIcons") else {
        log::debug!("[icons] icon library has no createIcons");
        return;
    };
    if let Err(err) = create.call0(&library) {
        report::log(&js_message(&err), "icons");
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name)).ok()?.dyn_into::<Function>().ok()
}
