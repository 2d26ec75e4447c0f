//! Decorative effects.
//!
//! Each effect splits into a core here (timing, throttling, geometry,
//! idempotence decisions) and a host binding that performs the DOM work.

pub mod rotation;
pub mod stencil;
pub mod sweep;
