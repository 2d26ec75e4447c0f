//! # pagewire
//!
//! WebAssembly controller for the site's static markup: hash routing between
//! the four page sections, themes, the mobile navigation drawer, and the
//! decorative effects.
//!
//! Decisions live in the browser-free `controller` crate. This crate is the
//! host: it binds `web-sys` events to the controller cores and applies what
//! they return to the document. Browser code compiles only with the
//! `hydrate` feature; without it the crate still exposes config loading and
//! the selector table so native tests run.

pub mod config;
pub mod error;
pub mod selectors;

#[cfg(feature = "hydrate")]
mod app;
#[cfg(feature = "hydrate")]
mod dom;
#[cfg(feature = "hydrate")]
mod frame;
#[cfg(feature = "hydrate")]
mod host;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point, run when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded.as_ref().map_or_else(|_| controller::config::SiteConfig::default(), Clone::clone);
    if let Some(level) = config.level_filter().to_level() {
        let _ = console_log::init_with_level(level);
    }
    if let Err(err) = &loaded {
        log::warn!("[config] {err}; using defaults");
    }

    host::globals::install();

    match app::mount(config) {
        Ok(_app) => log::info!("[init] controller mounted"),
        Err(err) => log::error!("[init] {err}"),
    }
}
