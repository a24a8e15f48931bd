//! Stateless building blocks of the combobox markup
//!
//! ```text
//! ComboboxGroupContainer        (group variant only)
//! └── ComboboxContainer
//!     └── ComboboxFormElement   role="combobox"
//!         ├── ComboboxInput     role="none"
//!         │   ├── left icon
//!         │   ├── <input role="textbox">
//!         │   ├── right icon
//!         │   └── icon group (spinner, close button)
//!         └── dropdown
//! ```

use strata_layout::prelude::*;

use super::options::{ComboboxPosition, DropdownType, InputIconPosition};
use crate::components::button_icon::button_icon;
use crate::components::input::input;
use crate::components::spinner::{spinner, SpinnerSize, SpinnerVariant};

/// `aria-controls` written when the caller supplied none (or an empty id)
pub const MISSING_LISTBOX_ID: &str = "please-provide-listbox-id-here";

/// Placeholder used with `autocomplete`
pub const AUTOCOMPLETE_PLACEHOLDER: &str = "Search...";

/// Placeholder used without `autocomplete`
pub const SELECT_PLACEHOLDER: &str = "Select an Option";

/// Title and assistive text of the close button
pub const REMOVE_SELECTION_TEXT: &str = "Remove selected option";

// =============================================================================
// Containers
// =============================================================================

/// `div.slds-combobox_container`
#[derive(Default)]
pub struct ComboboxContainer {
    position: Option<ComboboxPosition>,
    has_selection: bool,
    class: Option<String>,
    children: Vec<Node>,
}

impl ComboboxContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair the container with an addon on the other side
    pub fn position(mut self, position: Option<ComboboxPosition>) -> Self {
        self.position = position;
        self
    }

    pub fn has_selection(mut self, has_selection: bool) -> Self {
        self.has_selection = has_selection;
        self
    }

    pub fn class(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

impl ElementBuilder for ComboboxContainer {
    fn build(&self) -> Node {
        let classes = ClassList::new("slds-combobox_container")
            .add_opt(
                self.position
                    .map(|p| format!("slds-combobox-addon_{}", p.as_str())),
            )
            .add_if(self.has_selection, "slds-has-selection")
            .add_opt(self.class.clone());

        div()
            .classes(classes)
            .children(self.children.iter().cloned())
            .build()
    }
}

/// `div.slds-combobox-group`, wrapping the addon and the container
#[derive(Default)]
pub struct ComboboxGroupContainer {
    has_selection: bool,
    children: Vec<Node>,
}

impl ComboboxGroupContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_selection(mut self, has_selection: bool) -> Self {
        self.has_selection = has_selection;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

impl ElementBuilder for ComboboxGroupContainer {
    fn build(&self) -> Node {
        div()
            .class("slds-combobox-group")
            .class_if(self.has_selection, "slds-has-selection")
            .children(self.children.iter().cloned())
            .build()
    }
}

// =============================================================================
// Combobox element
// =============================================================================

/// The `role="combobox"` element
pub struct ComboboxFormElement {
    dropdown_type: DropdownType,
    open: bool,
    static_listbox: bool,
    aria_controls: Option<String>,
    id: Option<String>,
    children: Vec<Node>,
}

impl ComboboxFormElement {
    pub fn new(dropdown_type: DropdownType) -> Self {
        Self {
            dropdown_type,
            open: false,
            static_listbox: false,
            aria_controls: None,
            id: None,
            children: Vec::new(),
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn static_listbox(mut self, static_listbox: bool) -> Self {
        self.static_listbox = static_listbox;
        self
    }

    pub fn aria_controls(mut self, id: Option<String>) -> Self {
        self.aria_controls = id;
        self
    }

    pub fn id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

impl ElementBuilder for ComboboxFormElement {
    fn build(&self) -> Node {
        div()
            .class("slds-combobox")
            .class_if(
                !self.static_listbox,
                "slds-dropdown-trigger slds-dropdown-trigger_click",
            )
            .class_if(self.open, "slds-is-open")
            .attr_opt("aria-controls", self.aria_controls.clone())
            .aria("expanded", if self.open { "true" } else { "false" })
            .aria("haspopup", self.dropdown_type.as_str())
            .attr_opt("id", self.id.clone())
            .role("combobox")
            .children(self.children.iter().cloned())
            .build()
    }
}

// =============================================================================
// Input
// =============================================================================

/// The text input with its icons, spinner and close button
#[derive(Default)]
pub struct ComboboxInput {
    pub id: Option<String>,
    pub class: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub has_focus: bool,
    pub autocomplete: bool,
    pub show_close_button: bool,
    pub is_loading: bool,
    pub icon_position: Option<InputIconPosition>,
    pub left_icon: Option<Node>,
    pub right_icon: Option<Node>,
    pub tab_index: Option<i32>,
    pub readonly: bool,
    pub auto_focus: bool,
    pub aria_controls: Option<String>,
    pub aria_activedescendant: Option<String>,
    pub disabled: bool,
}

impl ComboboxInput {
    /// Whether any icon (or the close button) pads the input
    pub fn has_input_icon(&self) -> bool {
        self.left_icon.is_some() || self.right_icon.is_some() || self.show_close_button
    }

    /// The placeholder that will be rendered
    pub fn effective_placeholder(&self) -> &str {
        match self.placeholder.as_deref() {
            Some(placeholder) if !placeholder.is_empty() => placeholder,
            _ if self.autocomplete => AUTOCOMPLETE_PLACEHOLDER,
            _ => SELECT_PLACEHOLDER,
        }
    }

    fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    fn icon_group(&self) -> Div {
        let group = div().class("slds-input__icon-group slds-input__icon-group_right");
        let group = if self.is_loading {
            group.child(
                spinner()
                    .variant(SpinnerVariant::Brand)
                    .size(SpinnerSize::XSmall)
                    .class("slds-input__spinner"),
            )
        } else {
            group
        };

        group.child(
            button_icon("close")
                .class("slds-input__icon slds-input__icon_right")
                .title(REMOVE_SELECTION_TEXT)
                .assistive_text(REMOVE_SELECTION_TEXT),
        )
    }
}

impl ElementBuilder for ComboboxInput {
    fn build(&self) -> Node {
        let container_classes = ClassList::new("slds-combobox__form-element")
            .add_if(self.has_input_icon(), "slds-input-has-icon")
            .add_opt(self.icon_position.map(|p| p.class()))
            .add_opt(self.class.clone());

        let input_classes = ClassList::new("slds-combobox__input")
            .add_if(self.has_focus, "slds-has-focus")
            .add_if(self.has_value(), "slds-combobox__input-value");

        let field = input()
            .classes(input_classes)
            .id_opt(self.id.clone())
            .attr_opt("aria-activedescendant", self.aria_activedescendant.clone())
            .attr_opt("aria-autocomplete", self.autocomplete.then_some("list"))
            .attr(
                "aria-controls",
                self.aria_controls
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .unwrap_or(MISSING_LISTBOX_ID),
            )
            .attr("autocomplete", "off")
            .attr("role", "textbox")
            .attr("type", "text")
            .placeholder(self.effective_placeholder())
            .readonly(self.readonly)
            .value(self.value.clone())
            .tab_index(self.tab_index)
            .auto_focus(self.auto_focus)
            .disabled(self.disabled);

        div()
            .classes(container_classes)
            .role("none")
            .child_opt(self.left_icon.clone())
            .child(field)
            .child_opt(self.right_icon.clone())
            .child_opt(self.show_close_button.then(|| self.icon_group()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_element(node: &Node) -> Option<&ElementNode> {
        node.find_by_role("textbox")
    }

    #[test]
    fn test_container_classes() {
        let node = ComboboxContainer::new()
            .position(Some(ComboboxPosition::End))
            .has_selection(true)
            .class(Some("custom".into()))
            .build();

        assert_eq!(
            node.as_element().and_then(|e| e.attr("class")),
            Some("slds-combobox_container slds-combobox-addon_end slds-has-selection custom")
        );
    }

    #[test]
    fn test_group_container_classes() {
        let plain = ComboboxGroupContainer::new().build();
        let selected = ComboboxGroupContainer::new().has_selection(true).build();

        assert_eq!(
            plain.as_element().and_then(|e| e.attr("class")),
            Some("slds-combobox-group")
        );
        assert!(selected
            .as_element()
            .is_some_and(|e| e.has_class("slds-has-selection")));
    }

    #[test]
    fn test_form_element_closed() {
        let html = ComboboxFormElement::new(DropdownType::Listbox).render_html();
        assert_eq!(
            html,
            concat!(
                r#"<div class="slds-combobox slds-dropdown-trigger slds-dropdown-trigger_click" "#,
                r#"aria-expanded="false" aria-haspopup="listbox" role="combobox"></div>"#
            )
        );
    }

    #[test]
    fn test_form_element_open_static() {
        let node = ComboboxFormElement::new(DropdownType::Dialog)
            .open(true)
            .static_listbox(true)
            .aria_controls(Some("listbox-1".into()))
            .id(Some("combobox-1".into()))
            .build();
        let shell = node.find_by_role("combobox");

        assert_eq!(shell.and_then(|s| s.attr("class")), Some("slds-combobox slds-is-open"));
        assert_eq!(shell.and_then(|s| s.attr("aria-expanded")), Some("true"));
        assert_eq!(shell.and_then(|s| s.attr("aria-haspopup")), Some("dialog"));
        assert_eq!(shell.and_then(|s| s.attr("aria-controls")), Some("listbox-1"));
        assert_eq!(shell.and_then(|s| s.attr("id")), Some("combobox-1"));
    }

    #[test]
    fn test_input_defaults() {
        let node = ComboboxInput::default().build();
        let field = input_element(&node);

        assert_eq!(field.and_then(|f| f.attr("type")), Some("text"));
        assert_eq!(field.and_then(|f| f.attr("autocomplete")), Some("off"));
        assert_eq!(field.and_then(|f| f.attr("placeholder")), Some("Select an Option"));
        assert_eq!(
            field.and_then(|f| f.attr("aria-controls")),
            Some(MISSING_LISTBOX_ID)
        );
        assert!(field.is_some_and(|f| !f.has_attr("aria-autocomplete")));
        assert_eq!(
            node.as_element().and_then(|e| e.attr("class")),
            Some("slds-combobox__form-element")
        );
        assert_eq!(node.as_element().and_then(|e| e.attr("role")), Some("none"));
    }

    #[test]
    fn test_empty_aria_controls_uses_fallback() {
        let node = ComboboxInput {
            aria_controls: Some(String::new()),
            ..Default::default()
        }
        .build();
        assert_eq!(
            input_element(&node).and_then(|f| f.attr("aria-controls")),
            Some(MISSING_LISTBOX_ID)
        );
    }

    #[test]
    fn test_input_autocomplete() {
        let node = ComboboxInput {
            autocomplete: true,
            ..Default::default()
        }
        .build();
        let field = input_element(&node);

        assert_eq!(field.and_then(|f| f.attr("aria-autocomplete")), Some("list"));
        assert_eq!(field.and_then(|f| f.attr("placeholder")), Some("Search..."));
    }

    #[test]
    fn test_empty_placeholder_uses_default() {
        let input = ComboboxInput {
            placeholder: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(input.effective_placeholder(), SELECT_PLACEHOLDER);
    }

    #[test]
    fn test_input_value_and_focus_classes() {
        let node = ComboboxInput {
            value: Some("Acme".into()),
            has_focus: true,
            ..Default::default()
        }
        .build();
        let field = input_element(&node);

        assert!(field.is_some_and(|f| f.has_class("slds-combobox__input-value")));
        assert!(field.is_some_and(|f| f.has_class("slds-has-focus")));
        assert_eq!(field.and_then(|f| f.attr("value")), Some("Acme"));
    }

    #[test]
    fn test_empty_value_has_no_value_class() {
        let node = ComboboxInput {
            value: Some(String::new()),
            ..Default::default()
        }
        .build();
        assert!(input_element(&node).is_some_and(|f| !f.has_class("slds-combobox__input-value")));
    }

    #[test]
    fn test_icons_add_padding_classes() {
        let node = ComboboxInput {
            left_icon: Some(raw("<span class=\"left-icon\"></span>").build()),
            icon_position: Some(InputIconPosition::Left),
            ..Default::default()
        }
        .build();

        assert_eq!(
            node.as_element().and_then(|e| e.attr("class")),
            Some("slds-combobox__form-element slds-input-has-icon slds-input-has-icon_left")
        );
        let html = node.to_html();
        let icon_at = html.find("left-icon");
        let input_at = html.find("<input");
        assert!(icon_at < input_at);
    }

    #[test]
    fn test_close_button_with_spinner() {
        let node = ComboboxInput {
            show_close_button: true,
            is_loading: true,
            ..Default::default()
        }
        .build();

        assert!(node.find_by_class("slds-input__icon-group_right").is_some());
        assert!(node.find_by_class("slds-input__spinner").is_some());
        let button = node.find_by_tag("button");
        assert_eq!(button.and_then(|b| b.attr("title")), Some(REMOVE_SELECTION_TEXT));
        assert!(node
            .as_element()
            .is_some_and(|e| e.has_class("slds-input-has-icon")));
    }

    #[test]
    fn test_loading_without_close_button_renders_nothing() {
        let node = ComboboxInput {
            is_loading: true,
            ..Default::default()
        }
        .build();

        assert!(node.find_by_role("status").is_none());
        assert!(node.find_by_tag("button").is_none());
    }
}
