//! Icon-only button
//!
//! ```ignore
//! cn::button_icon("close")
//!     .title("Remove selected option")
//!     .class("slds-input__icon slds-input__icon_right")
//! ```

use strata_layout::prelude::*;

/// Default location of the utility icon sprite
pub const UTILITY_SPRITE: &str = "/assets/icons/utility-sprite/svg/symbols.svg";

/// Button rendering a single sprite icon plus assistive text
#[derive(Clone, Debug)]
pub struct ButtonIcon {
    symbol: String,
    sprite: String,
    title: Option<String>,
    assistive_text: Option<String>,
    class: Option<String>,
}

impl ButtonIcon {
    /// Create a button for the given sprite symbol (e.g. `"close"`)
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            sprite: UTILITY_SPRITE.to_string(),
            title: None,
            assistive_text: None,
            class: None,
        }
    }

    /// Override the sprite sheet path
    pub fn sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Tooltip text; also used as assistive text unless one is set
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn assistive_text(mut self, text: impl Into<String>) -> Self {
        self.assistive_text = Some(text.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl ElementBuilder for ButtonIcon {
    fn build(&self) -> Node {
        let icon = el("svg")
            .class("slds-button__icon")
            .attr("aria-hidden", "true")
            .child(el("use").attr("xlink:href", format!("{}#{}", self.sprite, self.symbol)));

        let assistive = self.assistive_text.clone().or_else(|| self.title.clone());

        el("button")
            .class("slds-button slds-button_icon")
            .class(self.class.clone().unwrap_or_default())
            .attr_opt("title", self.title.clone())
            .child(icon)
            .child_opt(assistive.map(|a| el("span").class("slds-assistive-text").child(text(a))))
            .build()
    }
}

/// Create an icon-only button
pub fn button_icon(symbol: impl Into<String>) -> ButtonIcon {
    ButtonIcon::new(symbol)
}
