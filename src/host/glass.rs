//! Frosted-glass cards: stencil layer plus content wrapper.

use controller::effects::stencil::{self, BLUR_PROPERTIES, CARD_SELECTOR, CONTENT_CLASS, CardSnapshot, STENCIL_CLASS, StencilPlan};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::app::Shared;
use crate::dom;

/// Prepare every glass card in the document. Returns how many changed.
pub fn augment_cards(app: &Shared) -> Result<usize, JsValue> {
    let document = app.borrow().dom.document().clone();
    let Some(window) = web_sys::window() else { return Ok(0) };
    let mut changed = 0;
    for card in dom::elements(&document.query_selector_all(CARD_SELECTOR)?) {
        let plan = stencil::plan(&snapshot(&window, &card)?);
        if plan.changes_structure() {
            changed += 1;
        }
        apply(&document, &card, plan)?;
    }
    Ok(changed)
}

fn snapshot(window: &Window, card: &Element) -> Result<CardSnapshot, JsValue> {
    let position = match window.get_computed_style(card)? {
        Some(style) => style.get_property_value("position")?,
        None => String::new(),
    };
    Ok(CardSnapshot {
        has_stencil: card.query_selector(&format!(":scope > .{STENCIL_CLASS}"))?.is_some(),
        has_wrapper: card.query_selector(&format!(":scope > .{CONTENT_CLASS}"))?.is_some(),
        position,
    })
}

fn apply(document: &Document, card: &Element, plan: StencilPlan) -> Result<(), JsValue> {
    // Wrap before inserting the stencil so the stencil stays out of the wrapper.
    if plan.wrap_children {
        let wrapper = document.create_element("div")?;
        wrapper.set_class_name(CONTENT_CLASS);
        let children = card.child_nodes();
        let nodes: Vec<Node> = (0..children.length()).filter_map(|i| children.get(i)).collect();
        for node in nodes {
            let is_stencil = node
                .dyn_ref::<Element>()
                .is_some_and(|el| el.class_list().contains(STENCIL_CLASS));
            if !is_stencil {
                wrapper.append_child(&node)?;
            }
        }
        card.append_child(&wrapper)?;
    }
    if plan.create_stencil {
        let layer = document.create_element("div")?;
        layer.set_class_name(STENCIL_CLASS);
        layer.set_attribute("aria-hidden", "true")?;
        card.insert_before(&layer, card.first_child().as_ref())?;
    }

    let Some(card) = card.dyn_ref::<HtmlElement>() else { return Ok(()) };
    let style = card.style();
    if plan.clear_blur {
        for property in BLUR_PROPERTIES {
            style.set_property(property, "none")?;
        }
    }
    if plan.set_relative {
        style.set_property("position", "relative")?;
    }
    Ok(())
}
