//! Page-wide handlers for uncaught errors and unhandled promise rejections.
//! They only log; the page keeps running.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{ErrorEvent, Event, PromiseRejectionEvent};

use crate::error::js_message;

/// Install both handlers for the page lifetime.
pub fn install() {
    let Some(window) = web_sys::window() else { return };

    let on_error = Closure::wrap(Box::new(|event: Event| {
        let message = event.dyn_ref::<ErrorEvent>().map_or_else(|| event.type_(), ErrorEvent::message);
        log::error!("[global] uncaught error: {message}");
    }) as Box<dyn FnMut(Event)>);

    let on_rejection = Closure::wrap(Box::new(|event: Event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map_or_else(|| event.type_(), |rejection| js_message(&rejection.reason()));
        log::error!("[global] unhandled rejection: {reason}");
    }) as Box<dyn FnMut(Event)>);

    for (name, handler) in [("error", on_error), ("unhandledrejection", on_rejection)] {
        if let Err(err) = window.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref()) {
            log::warn!("[global] could not listen for {name}: {}", js_message(&err));
        }
        handler.forget();
    }
}
