//! Browser-free core of the site controller.
//!
//! Every component here is a small state machine or a pure function that
//! returns data (actions, plans, angles) for a host to apply to the DOM. The
//! host crate owns the `web-sys` bindings and feeds browser events in; this
//! crate decides what should change. Nothing here touches the browser, so the
//! whole crate is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`routes`] | Static route table and per-page configuration |
//! | [`router`] | Page switching, fallback policy, and the [`router::Action`] list |
//! | [`nav`] | Desktop/mobile navigation highlighting |
//! | [`drawer`] | Mobile drawer state machine, focus trap, and geometry |
//! | [`effects`] | Logo sweep, scroll rotation, and glass-card stencils |
//! | [`report`] | Error logging and banner state |
//! | [`config`] | Site configuration with defaults and validation |
//! | [`error`] | Error enums shared by the components |
//! | [`consts`] | Default timings and thresholds |

pub mod config;
pub mod consts;
pub mod drawer;
pub mod effects;
pub mod error;
pub mod nav;
pub mod report;
pub mod router;
pub mod routes;
