//! Application context and startup wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`App`] owns every controller core, the element cache, and all
//! pending timers and frames. It is shared as `Rc<RefCell<App>>` with the
//! event listener closures. The app owns those closures in turn, so the
//! value lives for the page lifetime without a global.
//!
//! Handlers never hold a borrow across a call into another host module.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use controller::config::SiteConfig;
use controller::drawer::{DrawerCore, DrawerEvent};
use controller::effects::rotation::RotationCore;
use controller::effects::sweep::SweepCore;
use controller::report::{self, BannerState};
use controller::router::{RouterCore, ShowOptions, initial_target};
use controller::routes::PageId;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent, Window};

use crate::dom::ElementCache;
use crate::error::InitError;
use crate::frame::{FrameHandle, IdleHandle};
use crate::host;
use crate::selectors::{BACKDROP_ID, BANNER_CLOSE_ID, MENU_TOGGLE_ID, MOBILE_LINKS};

pub type Shared = Rc<RefCell<App>>;

/// Shown when part of startup failed and the page runs degraded.
pub const INIT_FAILURE_MESSAGE: &str = "Some features failed to load. The page may not behave as expected.";

pub struct App {
    pub config: SiteConfig,
    pub dom: ElementCache,
    pub router: RouterCore,
    pub drawer: DrawerCore,
    pub sweep: SweepCore,
    pub rotation: RotationCore,
    pub banner: BannerState,
    /// Decorative motion enabled, after the reduced-motion preference.
    pub motion_allowed: bool,
    pub pending: Pending,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

/// Timers and frames owned by the app. Replacing or clearing a slot cancels it.
#[derive(Default)]
pub struct Pending {
    pub drawer_focus: Option<Timeout>,
    pub banner_hide: Option<Timeout>,
    pub icons: Option<Timeout>,
    pub icons_idle: Option<IdleHandle>,
    pub sweep_frame: Option<FrameHandle>,
    pub rotation_frame: Option<FrameHandle>,
}

/// Build the app from the document and run startup.
///
/// # Errors
///
/// Only when there is no window or document. Later failures are reported on
/// the banner and startup continues.
pub fn mount(config: SiteConfig) -> Result<Shared, InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    let motion_allowed = config.motion_allowed(host::motion::prefers_reduced(&window));
    let mut dom = ElementCache::new(document);
    let mut router = RouterCore::new(config.site_name.clone(), config.home());
    for page in PageId::ALL {
        if dom.by_id(page.element_id()).is_some() {
            router.register_page(page);
        } else {
            log::warn!("[init] missing page container #{}", page.element_id());
        }
    }

    let app = Rc::new(RefCell::new(App {
        drawer: DrawerCore::new(config.mobile_breakpoint_px, config.drawer_focus_delay_ms),
        sweep: SweepCore::new(config.sweep_cooldown_ms, config.sweep_duration_ms),
        rotation: RotationCore::new(!motion_allowed),
        banner: BannerState::new(),
        motion_allowed,
        pending: Pending::default(),
        listeners: Vec::new(),
        config,
        dom,
        router,
    }));

    initialize(&app, &window);
    Ok(app)
}

fn initialize(app: &Shared, window: &Window) {
    host::drawer::update_geometry(app);

    match host::glass::augment_cards(app) {
        Ok(count) => log::debug!("[glass] prepared {count} cards"),
        Err(err) => init_failed(app, &crate::error::js_message(&err), "glass"),
    }

    let hash = window.location().hash().unwrap_or_default();
    let home = app.borrow().router.home();
    host::pages::navigate(app, initial_target(&hash, home), ShowOptions::QUIET);

    if let Err(err) = wire(app, window) {
        init_failed(app, &InitError::from(err), "listeners");
    }

    host::rotation::schedule(app);
    host::icons::schedule(app);
}

fn init_failed(app: &Shared, err: &dyn Display, context: &str) {
    report::log(err, context);
    host::banner::show(app, INIT_FAILURE_MESSAGE, context);
}

fn wire(app: &Shared, window: &Window) -> Result<(), JsValue> {
    let document = app.borrow().dom.document().clone();

    listen(app, window, "hashchange", false, |app, _| {
        let hash = web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
        let home = app.borrow().router.home();
        host::pages::navigate(app, initial_target(&hash, home), ShowOptions::INTERACTIVE);
    })?;

    let (toggle, backdrop, close) = {
        let mut state = app.borrow_mut();
        (state.dom.by_id(MENU_TOGGLE_ID), state.dom.by_id(BACKDROP_ID), state.dom.by_id(BANNER_CLOSE_ID))
    };
    if let Some(toggle) = toggle {
        listen(app, &toggle, "click", false, |app, _| host::drawer::handle(app, DrawerEvent::Toggle))?;
    } else {
        log::debug!("[init] no menu toggle; drawer disabled");
    }
    if let Some(backdrop) = backdrop {
        listen(app, &backdrop, "click", false, |app, _| host::drawer::handle(app, DrawerEvent::BackdropClick))?;
    }
    if let Some(close) = close {
        listen(app, &close, "click", false, |app, _| host::banner::hide(app))?;
    }
    let links = app.borrow_mut().dom.all(MOBILE_LINKS);
    for link in &links {
        listen(app, link, "click", false, |app, _| host::drawer::handle(app, DrawerEvent::LinkClick))?;
    }

    listen(app, &document, "keydown", false, |app, event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
        let key = event.key();
        if let Some(drawer_event) = DrawerEvent::from_key(&key) {
            host::drawer::handle(app, drawer_event);
        } else if key == "Tab" {
            host::drawer::trap_focus(app, event);
        }
    })?;

    listen(app, window, "resize", false, |app, _| {
        host::drawer::update_geometry(app);
        let width = web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|w| w.as_f64());
        if let Some(width) = width {
            host::drawer::handle(app, DrawerEvent::Resize { width });
        }
        host::rotation::schedule(app);
    })?;
    listen(app, window, "scroll", true, |app, _| host::rotation::schedule(app))?;
    listen(app, &document, "visibilitychange", false, |app, _| host::rotation::on_visibility(app))?;

    if let Some(query) = host::motion::query(window) {
        let watched = query.clone();
        listen(app, &query, "change", false, move |app, _| host::motion::on_change(app, watched.matches()))?;
    }
    Ok(())
}

/// Attach `handler` to `target`. The closure is kept alive by the app.
fn listen(
    app: &Shared,
    target: &EventTarget,
    event: &str,
    passive: bool,
    mut handler: impl FnMut(&Shared, &Event) + 'static,
) -> Result<(), JsValue> {
    let shared = Rc::clone(app);
    let callback = Closure::wrap(Box::new(move |ev: Event| handler(&shared, &ev)) as Box<dyn FnMut(Event)>);
    if passive {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
    } else {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    }
    app.borrow_mut().listeners.push(callback);
    Ok(())
}
