//! Spinner component for loading indicators
//!
//! # Example
//!
//! ```ignore
//! use strata_cn::prelude::*;
//!
//! cn::spinner()
//!
//! // Brand colored, extra small, positioned inside an input
//! cn::spinner()
//!     .variant(SpinnerVariant::Brand)
//!     .size(SpinnerSize::XSmall)
//!     .class("slds-input__spinner")
//! ```

use strata_layout::prelude::*;

/// Spinner size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    XXSmall,
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::XXSmall => "slds-spinner_xx-small",
            SpinnerSize::XSmall => "slds-spinner_x-small",
            SpinnerSize::Small => "slds-spinner_small",
            SpinnerSize::Medium => "slds-spinner_medium",
            SpinnerSize::Large => "slds-spinner_large",
        }
    }
}

/// Spinner color variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerVariant {
    #[default]
    Base,
    Brand,
    Inverse,
}

impl SpinnerVariant {
    fn class(&self) -> Option<&'static str> {
        match self {
            SpinnerVariant::Base => None,
            SpinnerVariant::Brand => Some("slds-spinner_brand"),
            SpinnerVariant::Inverse => Some("slds-spinner_inverse"),
        }
    }
}

/// Loading indicator
#[derive(Clone, Debug)]
pub struct Spinner {
    size: SpinnerSize,
    variant: SpinnerVariant,
    class: Option<String>,
    assistive_text: String,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            size: SpinnerSize::default(),
            variant: SpinnerVariant::default(),
            class: None,
            assistive_text: "Loading".to_string(),
        }
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: SpinnerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Extra classes appended after the size/variant classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Text announced to screen readers (default: "Loading")
    pub fn assistive_text(mut self, text: impl Into<String>) -> Self {
        self.assistive_text = text.into();
        self
    }
}

impl ElementBuilder for Spinner {
    fn build(&self) -> Node {
        let classes = ClassList::new("slds-spinner")
            .add_opt(self.variant.class())
            .add(self.size.class())
            .add_opt(self.class.clone());

        div()
            .role("status")
            .classes(classes)
            .child(
                el("span")
                    .class("slds-assistive-text")
                    .child(text(self.assistive_text.clone())),
            )
            .child(div().class("slds-spinner__dot-a"))
            .child(div().class("slds-spinner__dot-b"))
            .build()
    }
}

/// Create a loading spinner
pub fn spinner() -> Spinner {
    Spinner::new()
}
