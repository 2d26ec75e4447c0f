//! Gloss sweep across the brand logo.
//!
//! The gradient and the overlay of cloned logo paths are built the first
//! time a sweep plays; later sweeps only refresh the stop colors for the
//! current page's accent.

use std::rc::Rc;

use controller::effects::sweep::{self, GRADIENT_ID, OVERLAY_CLASS, SweepFrame};
use controller::report;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::app::{App, Shared};
use crate::dom;
use crate::error::js_message;
use crate::frame::FrameHandle;
use crate::selectors::{LOGO_ID, LOGO_PATHS, SVG_NS};

/// Start a sweep unless motion is off or one played too recently.
pub fn play(app: &Shared) {
    {
        let mut state = app.borrow_mut();
        if !state.motion_allowed {
            return;
        }
        if !state.sweep.try_start(js_sys::Date::now()) {
            log::debug!("[logo] sweep throttled");
            return;
        }
        match prepare(&mut state) {
            Ok(true) => {}
            Ok(false) => {
                state.sweep.stop();
                return;
            }
            Err(err) => {
                state.sweep.stop();
                report::log(&js_message(&err), "logo");
                return;
            }
        }
    }
    schedule_frame(app);
}

/// End any running sweep and hide the overlay.
pub fn finish(app: &Shared) {
    let logo = {
        let mut state = app.borrow_mut();
        state.sweep.stop();
        state.pending.sweep_frame = None;
        state.dom.by_id(LOGO_ID)
    };
    let Some(logo) = logo else { return };
    if let Err(err) = reset(&logo) {
        report::log(&js_message(&err), "logo");
    }
}

fn schedule_frame(app: &Shared) {
    let shared = Rc::clone(app);
    let handle = FrameHandle::request(move |_ts| step(&shared));
    if handle.is_none() {
        finish(app);
        return;
    }
    app.borrow_mut().pending.sweep_frame = handle;
}

fn step(app: &Shared) {
    let frame = app.borrow_mut().sweep.frame(js_sys::Date::now());
    match frame {
        SweepFrame::Running { transform } => {
            let gradient = app.borrow().dom.document().get_element_by_id(GRADIENT_ID);
            if let Some(gradient) = gradient
                && let Err(err) = gradient.set_attribute("gradientTransform", &transform)
            {
                report::log(&js_message(&err), "logo");
            }
            schedule_frame(app);
        }
        SweepFrame::Finished => finish(app),
    }
}

/// Build or refresh the sweep artifacts. `false` when there is no logo.
fn prepare(app: &mut App) -> Result<bool, JsValue> {
    let Some(logo) = app.dom.by_id(LOGO_ID) else { return Ok(false) };
    let accent = app.router.current().unwrap_or_else(|| app.router.home()).config().accent;
    let document = app.dom.document().clone();

    if app.sweep.needs_build() {
        build(&document, &logo, accent)?;
        app.sweep.mark_built();
    } else if let Some(gradient) = document.get_element_by_id(GRADIENT_ID) {
        fill_stops(&document, &gradient, accent)?;
    }

    if let Some(overlay) = overlay(&logo)? {
        overlay.set_attribute("opacity", "1")?;
    }
    Ok(true)
}

fn build(document: &Document, logo: &Element, accent: &str) -> Result<(), JsValue> {
    let defs = match logo.query_selector("defs")? {
        Some(defs) => defs,
        None => {
            let defs = document.create_element_ns(Some(SVG_NS), "defs")?;
            logo.insert_before(&defs, logo.first_child().as_ref())?;
            defs
        }
    };

    let gradient = document.create_element_ns(Some(SVG_NS), "linearGradient")?;
    gradient.set_id(GRADIENT_ID);
    for (name, value) in [("x1", "0"), ("y1", "0"), ("x2", "1"), ("y2", "0"), ("gradientUnits", "objectBoundingBox")] {
        gradient.set_attribute(name, value)?;
    }
    gradient.set_attribute("gradientTransform", &sweep::gradient_transform(0.0))?;
    fill_stops(document, &gradient, accent)?;
    defs.append_child(&gradient)?;

    let overlay = document.create_element_ns(Some(SVG_NS), "g")?;
    overlay.set_attribute("class", OVERLAY_CLASS)?;
    overlay.set_attribute("aria-hidden", "true")?;
    overlay.set_attribute("pointer-events", "none")?;
    overlay.set_attribute("opacity", "0")?;
    let stroke = format!("url(#{GRADIENT_ID})");
    for path in dom::query_all(logo, LOGO_PATHS)? {
        let clone = path.clone_node_with_deep(true)?;
        if let Some(clone) = clone.dyn_ref::<Element>() {
            clone.remove_attribute("id")?;
            clone.set_attribute("stroke", &stroke)?;
            clone.set_attribute("fill", "none")?;
        }
        overlay.append_child(&clone)?;
    }
    logo.append_child(&overlay)?;
    Ok(())
}

fn fill_stops(document: &Document, gradient: &Element, accent: &str) -> Result<(), JsValue> {
    gradient.set_text_content(None);
    for stop in sweep::gradient_stops(accent) {
        let el = document.create_element_ns(Some(SVG_NS), "stop")?;
        el.set_attribute("offset", stop.offset)?;
        el.set_attribute("stop-color", &stop.color)?;
        el.set_attribute("stop-opacity", &stop.opacity.to_string())?;
        gradient.append_child(&el)?;
    }
    Ok(())
}

fn overlay(logo: &Element) -> Result<Option<Element>, JsValue> {
    logo.query_selector(&format!(".{OVERLAY_CLASS}"))
}

fn reset(logo: &Element) -> Result<(), JsValue> {
    if let Some(overlay) = overlay(logo)? {
        overlay.set_attribute("opacity", "0")?;
    }
    if let Some(gradient) = logo.query_selector(&format!("#{GRADIENT_ID}"))? {
        gradient.set_attribute("gradientTransform", &sweep::gradient_transform(0.0))?;
    }
    Ok(())
}
