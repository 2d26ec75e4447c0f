//! Glass-card stencil augmentation.
//!
//! Every glass card gets a stencil layer as its first child and a content
//! wrapper around everything else. The blur is moved off the card itself and
//! the card becomes a positioning context for the stencil. The host takes a
//! [`CardSnapshot`] of each card, asks [`plan`] what is missing, and applies
//! only that, so running the augmentation again on the same markup creates
//! nothing new.

#[cfg(test)]
#[path = "stencil_test.rs"]
mod stencil_test;

/// Selector matching every glass card.
pub const CARD_SELECTOR: &str = ".glass-card";

/// Class of the stencil layer.
pub const STENCIL_CLASS: &str = "glass-stencil";

/// Class of the wrapper around the card's own content.
pub const CONTENT_CLASS: &str = "glass-content";

/// Blur properties cleared from the card.
pub const BLUR_PROPERTIES: [&str; 2] = ["backdrop-filter", "-webkit-backdrop-filter"];

/// What a card looks like right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSnapshot {
    /// A direct child carries [`STENCIL_CLASS`].
    pub has_stencil: bool,
    /// A direct child carries [`CONTENT_CLASS`].
    pub has_wrapper: bool,
    /// Computed `position` of the card.
    pub position: String,
}

/// Work needed to bring a card into augmented shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct StencilPlan {
    /// Insert a stencil layer as the first child.
    pub create_stencil: bool,
    /// Move every child except the stencil into a new content wrapper.
    pub wrap_children: bool,
    /// Clear [`BLUR_PROPERTIES`] on the card.
    pub clear_blur: bool,
    /// Set `position: relative` on the card.
    pub set_relative: bool,
}

impl StencilPlan {
    /// Whether the plan adds or moves any element.
    #[must_use]
    pub fn changes_structure(&self) -> bool {
        self.create_stencil || self.wrap_children
    }
}

/// Plan the augmentation of one card.
#[must_use]
pub fn plan(card: &CardSnapshot) -> StencilPlan {
    let position = card.position.trim();
    StencilPlan {
        create_stencil: !card.has_stencil,
        wrap_children: !card.has_wrapper,
        clear_blur: true,
        set_relative: position.is_empty() || position == "static",
    }
}
