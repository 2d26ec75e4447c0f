//! Host errors and conversion of browser exceptions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Why startup could not complete.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("no window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// A browser call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<JsValue> for InitError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

/// Human-readable text for a thrown browser value.
#[cfg(feature = "hydrate")]
pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
