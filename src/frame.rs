//! Cancellable `requestAnimationFrame` and `requestIdleCallback` handles.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::js_message;

/// A scheduled animation frame. Dropping the handle cancels the frame.
pub struct FrameHandle {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl FrameHandle {
    /// Run `f` on the next animation frame. `None` when frames are unavailable.
    pub fn request(f: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(f64)>);
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(Self { id, _callback: callback }),
            Err(err) => {
                log::warn!("[frame] requestAnimationFrame failed: {}", js_message(&err));
                None
            }
        }
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

/// A scheduled idle callback. Dropping the handle cancels the callback.
pub struct IdleHandle {
    id: JsValue,
    _callback: Closure<dyn FnMut()>,
}

impl IdleHandle {
    /// Run `f` when the browser is idle, at the latest after `timeout_ms`.
    ///
    /// `Ok(None)` when the browser has no idle callbacks.
    pub fn request(timeout_ms: u32, f: impl FnMut() + 'static) -> Result<Option<Self>, JsValue> {
        let Some(window) = web_sys::window() else { return Ok(None) };
        let Some(request_idle) = window_method(&window, "requestIdleCallback") else { return Ok(None) };
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("timeout"), &JsValue::from(timeout_ms))?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = request_idle.call2(&window, callback.as_ref(), &options)?;
        Ok(Some(Self { id, _callback: callback }))
    }
}

impl Drop for IdleHandle {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else { return };
        let Some(cancel) = window_method(&window, "cancelIdleCallback") else { return };
        if let Err(err) = cancel.call1(&window, &self.id) {
            log::debug!("[frame] cancelIdleCallback failed: {}", js_message(&err));
        }
    }
}

fn window_method(window: &web_sys::Window, name: &str) -> Option<Function> {
    Reflect::get(window, &JsValue::from_str(name)).ok()?.dyn_into::<Function>().ok()
}
