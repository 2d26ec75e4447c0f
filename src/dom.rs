//! Element lookup cache and small DOM helpers.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::error::js_message;
use crate::selectors::bool_attr;

/// Lookups keyed by id or selector, kept for the page lifetime.
///
/// The markup is static, so an element found once stays valid. Misses are
/// not remembered.
pub struct ElementCache {
    document: Document,
    by_id: HashMap<&'static str, Element>,
    by_selector: HashMap<&'static str, Vec<Element>>,
}

impl ElementCache {
    pub fn new(document: Document) -> Self {
        Self { document, by_id: HashMap::new(), by_selector: HashMap::new() }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn by_id(&mut self, id: &'static str) -> Option<Element> {
        if let Some(el) = self.by_id.get(id) {
            return Some(el.clone());
        }
        let el = self.document.get_element_by_id(id)?;
        self.by_id.insert(id, el.clone());
        Some(el)
    }

    /// Every element matching `selector`; empty when none match.
    pub fn all(&mut self, selector: &'static str) -> Vec<Element> {
        if let Some(found) = self.by_selector.get(selector) {
            return found.clone();
        }
        match self.document.query_selector_all(selector) {
            Ok(list) => {
                let found = elements(&list);
                if !found.is_empty() {
                    self.by_selector.insert(selector, found.clone());
                }
                found
            }
            Err(err) => {
                log::warn!("[dom] bad selector {selector}: {}", js_message(&err));
                Vec::new()
            }
        }
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn set_aria_hidden(el: &Element, hidden: bool) -> Result<(), JsValue> {
    el.set_attribute("aria-hidden", bool_attr(hidden))
}

/// Focus `el` if it is an HTML element; SVG and others are skipped.
pub fn focus(el: &Element) -> Result<(), JsValue> {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.focus(),
        None => Ok(()),
    }
}
