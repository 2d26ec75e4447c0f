//! Applies router actions to the page sections, header, and navigation.

use controller::error::NavError;
use controller::nav;
use controller::router::{Action, ShowOptions};
use controller::routes::{self, PageId};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::app::{App, Shared};
use crate::dom::{self, ElementCache};
use crate::error::js_message;
use crate::host;
use crate::selectors::{CTA_ID, DESKTOP_LINKS, HEADINGS, MOBILE_LINKS, PAGE_ACTIVE_CLASS};

/// Show the page for `identifier`, falling back to the home page when that
/// fails.
pub fn navigate(app: &Shared, identifier: &str, options: ShowOptions) {
    let mut plan = app.borrow_mut().router.navigate(identifier, options);
    // Ends after at most one fallback: a failed fallback yields an empty plan.
    while let Err(err) = apply(app, &plan.actions) {
        plan = app.borrow_mut().router.apply_failed(identifier, &plan, &err);
    }
}

fn apply(app: &Shared, actions: &[Action]) -> Result<(), NavError> {
    for action in actions {
        match action {
            Action::TriggerSweep => host::logo::play(app),
            Action::ShowError { message } => host::banner::show(app, message, "router"),
            other => apply_dom(&mut app.borrow_mut(), other)?,
        }
    }
    Ok(())
}

fn apply_dom(app: &mut App, action: &Action) -> Result<(), NavError> {
    let result = match action {
        Action::SetPageActive { page, active } => set_page_active(&mut app.dom, *page, *active),
        Action::ApplyTheme { theme } => apply_theme(&app.dom, theme),
        Action::SetCta { text, href } => set_cta(&mut app.dom, text, href),
        Action::SyncNav { page } => sync_nav(&mut app.dom, *page),
        Action::SetTitle { title } => {
            app.dom.document().set_title(title);
            Ok(())
        }
        Action::FocusHeading { page } => focus_heading(&mut app.dom, *page),
        Action::ScrollToTop { smooth } => {
            scroll_to_top(*smooth);
            Ok(())
        }
        Action::TriggerSweep | Action::ShowError { .. } => Ok(()),
    };
    result.map_err(|err| NavError::Dom {
        page: app.router.current().map_or("unknown", PageId::element_id).to_owned(),
        message: js_message(&err),
    })
}

fn set_page_active(dom: &mut ElementCache, page: PageId, active: bool) -> Result<(), JsValue> {
    let Some(container) = dom.by_id(page.element_id()) else {
        return Err(JsValue::from_str(&format!("page container #{} is gone", page.element_id())));
    };
    dom::set_class(&container, PAGE_ACTIVE_CLASS, active)?;
    dom::set_aria_hidden(&container, !active)
}

fn apply_theme(dom: &ElementCache, theme: &str) -> Result<(), JsValue> {
    let Some(body) = dom.body() else { return Ok(()) };
    let classes = body.class_list();
    for other in routes::themes() {
        classes.remove_1(other)?;
    }
    classes.add_1(theme)
}

fn set_cta(dom: &mut ElementCache, text: &str, href: &str) -> Result<(), JsValue> {
    let Some(cta) = dom.by_id(CTA_ID) else { return Ok(()) };
    cta.set_text_content(Some(text));
    cta.set_attribute("href", href)
}

fn sync_nav(dom: &mut ElementCache, page: PageId) -> Result<(), JsValue> {
    for selector in [DESKTOP_LINKS, MOBILE_LINKS] {
        let links = dom.all(selector);
        let targets: Vec<Option<String>> = links.iter().map(|link| link.get_attribute(nav::PAGE_ATTR)).collect();
        for (link, current) in links.iter().zip(nav::link_states(&targets, page)) {
            dom::set_class(link, nav::ACTIVE_CLASS, current)?;
            if current {
                link.set_attribute(nav::CURRENT_ATTR, nav::CURRENT_VALUE)?;
            } else {
                link.remove_attribute(nav::CURRENT_ATTR)?;
            }
        }
    }
    Ok(())
}

fn focus_heading(dom: &mut ElementCache, page: PageId) -> Result<(), JsValue> {
    let Some(container) = dom.by_id(page.element_id()) else { return Ok(()) };
    let Some(heading) = container.query_selector(HEADINGS)? else { return Ok(()) };
    if !heading.has_attribute("tabindex") {
        heading.set_attribute("tabindex", "-1")?;
    }
    dom::focus(&heading)
}

fn scroll_to_top(smooth: bool) {
    let Some(window) = web_sys::window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Instant });
    window.scroll_to_with_scroll_to_options(&options);
}
