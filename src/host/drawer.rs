//! Mobile navigation drawer: applies drawer effects and keeps focus inside
//! the open menu.

use std::rc::Rc;

use controller::drawer::{self, DrawerEffect, DrawerEvent, DrawerGeometry, TabDirection};
use controller::report;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, KeyboardEvent, Node};

use crate::app::Shared;
use crate::dom;
use crate::error::js_message;
use crate::selectors::{BACKDROP_ID, FOCUSABLE, HEADER_ID, MENU_ID, MENU_TOGGLE_ID, OPEN_CLASS, VISIBLE_CLASS, bool_attr};

pub fn handle(app: &Shared, event: DrawerEvent) {
    let effects = app.borrow_mut().drawer.handle(event);
    for effect in effects {
        if let Err(err) = apply(app, effect) {
            report::log(&js_message(&err), "drawer");
        }
    }
}

fn apply(app: &Shared, effect: DrawerEffect) -> Result<(), JsValue> {
    match effect {
        DrawerEffect::SetToggleExpanded(open) => {
            let Some(toggle) = app.borrow_mut().dom.by_id(MENU_TOGGLE_ID) else { return Ok(()) };
            dom::set_class(&toggle, OPEN_CLASS, open)?;
            toggle.set_attribute("aria-expanded", bool_attr(open))
        }
        DrawerEffect::SetDrawerVisible(open) => {
            let Some(menu) = app.borrow_mut().dom.by_id(MENU_ID) else { return Ok(()) };
            dom::set_class(&menu, OPEN_CLASS, open)?;
            dom::set_aria_hidden(&menu, !open)
        }
        DrawerEffect::SetBackdropVisible(visible) => {
            let Some(backdrop) = app.borrow_mut().dom.by_id(BACKDROP_ID) else { return Ok(()) };
            dom::set_class(&backdrop, VISIBLE_CLASS, visible)?;
            dom::set_aria_hidden(&backdrop, !visible)
        }
        DrawerEffect::SetScrollLocked(locked) => {
            let Some(body) = app.borrow().dom.body() else { return Ok(()) };
            let style = body.style();
            if locked { style.set_property("overflow", "hidden") } else { style.remove_property("overflow").map(|_| ()) }
        }
        DrawerEffect::RecomputeGeometry => {
            update_geometry(app);
            Ok(())
        }
        DrawerEffect::FocusFirstLink { delay_ms } => {
            let shared = Rc::clone(app);
            let timeout = Timeout::new(delay_ms, move || focus_first_link(&shared));
            app.borrow_mut().pending.drawer_focus = Some(timeout);
            Ok(())
        }
        DrawerEffect::CancelPendingFocus => {
            app.borrow_mut().pending.drawer_focus = None;
            Ok(())
        }
        DrawerEffect::ReturnFocusToToggle => return_focus(app),
    }
}

/// Position the drawer under the header and cap it to the viewport.
pub fn update_geometry(app: &Shared) {
    let (header, menu) = {
        let mut state = app.borrow_mut();
        (state.dom.by_id(HEADER_ID), state.dom.by_id(MENU_ID))
    };
    let Some(menu) = menu.and_then(|m| m.dyn_into::<HtmlElement>().ok()) else { return };
    let header_height = header
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |h| f64::from(h.offset_height()));
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let geometry = DrawerGeometry::from_header(header_height, viewport_height);
    let style = menu.style();
    let applied = style
        .set_property("top", &geometry.top_css())
        .and_then(|()| style.set_property("max-height", &geometry.max_height_css()));
    if let Err(err) = applied {
        report::log(&js_message(&err), "drawer geometry");
    }
}

/// Wrap Tab and Shift+Tab around the open drawer's focusable elements.
pub fn trap_focus(app: &Shared, event: &KeyboardEvent) {
    let (menu, document) = {
        let mut state = app.borrow_mut();
        if !state.drawer.is_open() {
            return;
        }
        (state.dom.by_id(MENU_ID), state.dom.document().clone())
    };
    let Some(menu) = menu else { return };
    let focusables = match dom::query_all(&menu, FOCUSABLE) {
        Ok(found) => found,
        Err(err) => {
            report::log(&js_message(&err), "drawer focus");
            return;
        }
    };
    let focused = document
        .active_element()
        .and_then(|active| focusables.iter().position(|el| *el == active));
    let direction = TabDirection::from_shift(event.shift_key());

    if let Some(index) = drawer::trap_tab(focused, focusables.len(), direction) {
        event.prevent_default();
        if let Some(target) = focusables.get(index)
            && let Err(err) = dom::focus(target)
        {
            report::log(&js_message(&err), "drawer focus");
        }
    }
}

fn focus_first_link(app: &Shared) {
    let menu = {
        let mut state = app.borrow_mut();
        if !state.drawer.is_open() {
            return;
        }
        state.dom.by_id(MENU_ID)
    };
    let Some(menu) = menu else { return };
    match menu.query_selector(FOCUSABLE) {
        Ok(Some(first)) => {
            if let Err(err) = dom::focus(&first) {
                report::log(&js_message(&err), "drawer focus");
            }
        }
        Ok(None) => {}
        Err(err) => report::log(&js_message(&err), "drawer focus"),
    }
}

/// Move focus back to the toggle if it was left inside the closed drawer.
fn return_focus(app: &Shared) -> Result<(), JsValue> {
    let (menu, toggle, active) = {
        let mut state = app.borrow_mut();
        let active = state.dom.document().active_element();
        (state.dom.by_id(MENU_ID), state.dom.by_id(MENU_TOGGLE_ID), active)
    };
    let (Some(menu), Some(toggle)) = (menu, toggle) else { return Ok(()) };
    let inside = active.is_some_and(|el| {
        let node: &Node = &el;
        menu.contains(Some(node))
    });
    if inside { dom::focus(&toggle) } else { Ok(()) }
}
