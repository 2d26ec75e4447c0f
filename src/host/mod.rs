//! Browser bindings: each module applies one controller core to the document.

pub mod banner;
pub mod drawer;
pub mod glass;
pub mod globals;
pub mod icons;
pub mod logo;
pub mod motion;
pub mod pages;
pub mod rotation;
