//! Label component - form element label
//!
//! # Example
//!
//! ```ignore
//! use strata_cn::prelude::*;
//!
//! // Visible label bound to an input
//! cn::label("Account").for_id("combobox-id-1")
//!
//! // Hidden from sight, still read by screen readers
//! cn::label("Account").hidden(true)
//! ```

use strata_layout::prelude::*;

/// Text used when no label is supplied
pub const DEFAULT_LABEL: &str = "Relate to";

/// Form element label
#[derive(Clone, Debug, Default)]
pub struct Label {
    text: Option<String>,
    for_id: Option<String>,
    hidden: bool,
}

impl Label {
    /// Create a new label with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a label that falls back to the default text
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Set or clear the label text
    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    /// Bind the label to a control id
    pub fn for_id(mut self, id: impl Into<String>) -> Self {
        self.for_id = Some(id.into());
        self
    }

    /// Bind the label to an optional control id
    pub fn for_id_opt(mut self, id: Option<String>) -> Self {
        self.for_id = id;
        self
    }

    /// Visually hide the label (kept for assistive technology)
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// The text that will be rendered
    pub fn display_text(&self) -> &str {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_LABEL,
        }
    }
}

impl ElementBuilder for Label {
    fn build(&self) -> Node {
        el("label")
            .class("slds-form-element__label")
            .class_if(self.hidden, "slds-assistive-text")
            .attr_opt("for", self.for_id.clone())
            .child(text(self.display_text()))
            .build()
    }
}

/// Create a form element label
pub fn label(text: impl Into<String>) -> Label {
    Label::new(text)
}
