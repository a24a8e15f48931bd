//! Markup and interaction contract of the combobox components

use strata_cn::components::combobox::MISSING_LISTBOX_ID;
use strata_cn::prelude::*;
use strata_cn::{ComboboxProps, ComboboxVariant};

fn listbox() -> Raw {
    raw(r#"<div id="listbox-id-1" class="slds-dropdown slds-dropdown_fluid" role="listbox"></div>"#)
}

fn single(scope: &Scope) -> Combobox {
    cn::combobox(scope, "lookup", listbox(), DropdownType::Listbox).id("combobox-id-1")
}

fn grouped(scope: &Scope) -> ComboboxGroup {
    cn::combobox_group(
        scope,
        "switcher",
        listbox(),
        DropdownType::Listbox,
        raw(r#"<div class="slds-listbox_object-switcher"></div>"#),
        AddonPosition::Start,
        ComboboxPosition::End,
    )
}

fn shell_attr(node: &Node, name: &str) -> Option<String> {
    node.find_by_role("combobox")
        .and_then(|s| s.attr(name))
        .map(str::to_string)
}

fn input_attr(node: &Node, name: &str) -> Option<String> {
    node.find_by_role("textbox")
        .and_then(|s| s.attr(name))
        .map(str::to_string)
}

#[test]
fn aria_expanded_follows_open_flag_and_focus() {
    for (is_open, focused) in [(false, false), (true, false), (false, true), (true, true)] {
        let scope = Scope::new();
        let lookup = single(&scope).open(is_open).has_interactions(true);
        if focused {
            lookup.handle_event(&mut Event::focus());
        }

        let expected = if is_open || focused { "true" } else { "false" };
        assert_eq!(
            shell_attr(&lookup.build(), "aria-expanded").as_deref(),
            Some(expected),
            "is_open={is_open} focused={focused}"
        );
    }
}

#[test]
fn aria_haspopup_is_dropdown_type() {
    let scope = Scope::new();
    for dropdown_type in [DropdownType::Listbox, DropdownType::Dialog] {
        let node = cn::combobox(&scope, "lookup", listbox(), dropdown_type).build();
        assert_eq!(
            shell_attr(&node, "aria-haspopup").as_deref(),
            Some(dropdown_type.as_str())
        );

        let node = cn::combobox_group(
            &scope,
            "switcher",
            listbox(),
            dropdown_type,
            raw("<span></span>"),
            AddonPosition::End,
            ComboboxPosition::Start,
        )
        .build();
        assert_eq!(
            shell_attr(&node, "aria-haspopup").as_deref(),
            Some(dropdown_type.as_str())
        );
    }
}

#[test]
fn focus_then_blur_round_trips() {
    let scope = Scope::new();

    let before = single(&scope).has_interactions(true).focus_state();
    assert!(single(&scope).has_interactions(true).handle_event(&mut Event::focus()));
    assert!(single(&scope).has_interactions(true).handle_event(&mut Event::blur()));
    let after = single(&scope).has_interactions(true).focus_state();

    assert_eq!(before, after);
    assert_eq!(after, FocusState::Unfocused);
}

#[test]
fn group_focus_round_trips() {
    let scope = Scope::new();
    let group = grouped(&scope).has_interactions(true);

    group.handle_event(&mut Event::focus());
    assert!(group.is_open());
    group.handle_event(&mut Event::blur());
    assert!(!group.is_open());
}

#[test]
fn events_without_interactions_change_nothing() {
    let scope = Scope::new();
    let lookup = single(&scope);
    let before = lookup.render_html();

    let mut focus = Event::focus();
    assert!(!lookup.handle_event(&mut focus));
    assert!(!focus.default_prevented());
    assert!(!lookup.handle_event(&mut Event::blur()));

    assert_eq!(single(&scope).render_html(), before);
    assert!(!scope.is_dirty());
}

#[test]
fn interactions_prevent_default_and_request_rebuild() {
    let scope = Scope::new();
    let lookup = single(&scope).has_interactions(true);

    let mut focus = Event::focus();
    lookup.handle_event(&mut focus);
    assert!(focus.default_prevented());
    assert!(scope.take_dirty());

    // No transition, no rebuild
    lookup.handle_event(&mut Event::focus());
    assert!(!scope.is_dirty());
}

#[test]
fn placeholder_defaults() {
    let scope = Scope::new();

    let search = single(&scope).autocomplete(true).build();
    assert_eq!(input_attr(&search, "placeholder").as_deref(), Some("Search..."));
    assert_eq!(input_attr(&search, "aria-autocomplete").as_deref(), Some("list"));

    let select = single(&scope).build();
    assert_eq!(input_attr(&select, "placeholder").as_deref(), Some("Select an Option"));
    assert_eq!(input_attr(&select, "aria-autocomplete"), None);

    let custom = single(&scope).autocomplete(true).placeholder("Find accounts").build();
    assert_eq!(input_attr(&custom, "placeholder").as_deref(), Some("Find accounts"));
}

#[test]
fn close_button_and_spinner() {
    let scope = Scope::new();

    let loading = single(&scope).show_close_button(true).loading(true).build();
    assert!(loading.find_by_class("slds-spinner").is_some());
    assert!(loading
        .find_by_tag("button")
        .is_some_and(|b| b.attr("title") == Some("Remove selected option")));

    for is_loading in [false, true] {
        let hidden = single(&scope).show_close_button(false).loading(is_loading).build();
        assert!(hidden.find_by_class("slds-spinner").is_none());
        assert!(hidden.find_by_tag("button").is_none());
    }

    let idle = single(&scope).show_close_button(true).build();
    assert!(idle.find_by_class("slds-spinner").is_none());
    assert!(idle.find_by_tag("button").is_some());
}

#[test]
fn group_selections_follow_has_selection() {
    let scope = Scope::new();
    let pills = || raw(r#"<div class="slds-listbox_selection-group"></div>"#);

    let without = grouped(&scope).listbox_of_selections(pills()).build();
    assert!(!without.contains_raw("slds-listbox_selection-group"));

    let with = grouped(&scope)
        .has_selection(true)
        .listbox_of_selections(pills())
        .build();
    assert!(with.contains_raw("slds-listbox_selection-group"));
}

#[test]
fn single_selections_render_whenever_supplied() {
    let scope = Scope::new();
    let node = single(&scope)
        .listbox_of_selections(raw(r#"<div class="slds-listbox_selection-group"></div>"#))
        .build();
    assert!(node.contains_raw("slds-listbox_selection-group"));
}

#[test]
fn aria_controls_fallback() {
    let scope = Scope::new();

    let missing = single(&scope).build();
    assert_eq!(
        input_attr(&missing, "aria-controls").as_deref(),
        Some(MISSING_LISTBOX_ID)
    );
    assert_eq!(MISSING_LISTBOX_ID, "please-provide-listbox-id-here");

    let supplied = single(&scope).aria_controls("listbox-id-1").build();
    assert_eq!(input_attr(&supplied, "aria-controls").as_deref(), Some("listbox-id-1"));
}

#[test]
fn empty_aria_controls_falls_back() {
    let scope = Scope::new();

    let empty = single(&scope).aria_controls("").build();
    assert_eq!(
        input_attr(&empty, "aria-controls").as_deref(),
        Some(MISSING_LISTBOX_ID)
    );

    let props = ComboboxProps {
        dropdown: Some("<div></div>".into()),
        dropdown_type: Some(DropdownType::Listbox),
        aria_controls: Some(String::new()),
        ..Default::default()
    };
    let node = props
        .mount(&scope, "from-file", ComboboxVariant::Combobox)
        .build();
    assert_eq!(
        input_attr(&node, "aria-controls").as_deref(),
        Some(MISSING_LISTBOX_ID)
    );
}

#[test]
fn input_icons_and_positions() {
    let scope = Scope::new();
    let node = single(&scope)
        .left_input_icon(raw(r#"<span class="left-icon"></span>"#))
        .right_input_icon(raw(r#"<span class="right-icon"></span>"#))
        .input_icon_position(InputIconPosition::LeftRight)
        .input_container_class_name("extra")
        .build();

    let container = node.find_by_class("slds-combobox__form-element");
    assert!(container.is_some_and(|c| c.has_class("slds-input-has-icon")
        && c.has_class("slds-input-has-icon_left-right")
        && c.has_class("extra")));
    assert!(node.contains_raw("left-icon") && node.contains_raw("right-icon"));
}

#[test]
fn static_listbox_drops_trigger_classes() {
    let scope = Scope::new();
    let node = single(&scope).static_listbox(true).build();

    let shell = node.find_by_role("combobox");
    assert!(shell.is_some_and(|s| !s.has_class("slds-dropdown-trigger")));
    assert!(shell.is_some_and(|s| !s.has_class("slds-dropdown-trigger_click")));
}

#[test]
fn input_pass_through_options() {
    let scope = Scope::new();
    let node = single(&scope)
        .value("Acme")
        .readonly(true)
        .auto_focus(true)
        .disabled(true)
        .tab_index(0)
        .has_focus(true)
        .aria_activedescendant("option-1")
        .build();

    let field = node.find_by_role("textbox");
    assert!(field.is_some_and(|f| f.has_attr("readonly")
        && f.has_attr("autofocus")
        && f.has_attr("disabled")
        && f.has_class("slds-has-focus")
        && f.has_class("slds-combobox__input-value")));
    assert_eq!(input_attr(&node, "tabindex").as_deref(), Some("0"));
    assert_eq!(input_attr(&node, "value").as_deref(), Some("Acme"));
    assert_eq!(input_attr(&node, "aria-activedescendant").as_deref(), Some("option-1"));
}

#[test]
fn label_options() {
    let scope = Scope::new();
    let node = single(&scope)
        .label("Account")
        .hide_label(true)
        .form_class_name("slds-form-element_stacked")
        .build();

    let label = node.find_by_tag("label");
    assert_eq!(label.map(|l| l.text_content()).as_deref(), Some("Account"));
    assert!(label.is_some_and(|l| l.has_class("slds-assistive-text")));
    assert_eq!(label.and_then(|l| l.attr("for")), Some("combobox-id-1"));
    assert!(node
        .as_element()
        .is_some_and(|e| e.has_class("slds-form-element_stacked")));
}

#[test]
fn instances_keep_separate_focus() {
    let scope = Scope::new();
    let a = cn::combobox(&scope, "a", listbox(), DropdownType::Listbox).has_interactions(true);
    let b = cn::combobox(&scope, "b", listbox(), DropdownType::Listbox).has_interactions(true);

    a.handle_event(&mut Event::focus());
    assert!(a.is_open());
    assert!(!b.is_open());
}

#[test]
fn text_is_escaped() {
    let scope = Scope::new();
    let html = single(&scope).label("R&D <team>").value("\"quoted\"").render_html();

    assert!(html.contains("R&amp;D &lt;team&gt;"));
    assert!(html.contains(r#"value="&quot;quoted&quot;""#));
}
