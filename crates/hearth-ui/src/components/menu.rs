//! Menu items, selections and the action machine shared by dropdown-menu,
//! context-menu and menubar
//!
//! Every interactive item posts to `{base}/action` with an `action` field
//! and an optional `value`:
//!
//! | action | effect |
//! |---|---|
//! | `toggle-{name}` | flip a checkbox item |
//! | `select-{group}` | set a radio group to `value` |
//! | `activate` | run the item whose value is `value` and close the menu |
//! | `open-sub-{name}` | open a submenu, keeping its parent open |
//! | `close-sub` | close submenu `value`, or all of them |

use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub enum MenuItem {
    Item {
        label: String,
        value: String,
        shortcut: Option<String>,
        disabled: bool,
        destructive: bool,
    },
    Checkbox {
        name: String,
        label: String,
        default: bool,
    },
    RadioGroup {
        group: String,
        /// `(value, label)` pairs
        options: Vec<(String, String)>,
        default: Option<String>,
    },
    Label(String),
    Separator,
    Sub {
        name: String,
        label: String,
        items: Vec<MenuItem>,
    },
}

impl MenuItem {
    pub fn item(label: impl Into<String>, value: impl Into<String>) -> Self {
        MenuItem::Item {
            label: label.into(),
            value: value.into(),
            shortcut: None,
            disabled: false,
            destructive: false,
        }
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>, default: bool) -> Self {
        MenuItem::Checkbox {
            name: name.into(),
            label: label.into(),
            default,
        }
    }

    pub fn radio_group<V, L>(
        group: impl Into<String>,
        options: impl IntoIterator<Item = (V, L)>,
        default: Option<&str>,
    ) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        MenuItem::RadioGroup {
            group: group.into(),
            options: options
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            default: default.map(str::to_string),
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        MenuItem::Label(label.into())
    }

    pub fn separator() -> Self {
        MenuItem::Separator
    }

    pub fn sub(
        name: impl Into<String>,
        label: impl Into<String>,
        items: impl IntoIterator<Item = MenuItem>,
    ) -> Self {
        MenuItem::Sub {
            name: name.into(),
            label: label.into(),
            items: items.into_iter().collect(),
        }
    }

    /// Keyboard hint shown at the end of a plain item.
    pub fn shortcut(mut self, keys: impl Into<String>) -> Self {
        if let MenuItem::Item { shortcut, .. } = &mut self {
            *shortcut = Some(keys.into());
        }
        self
    }

    pub fn disabled(mut self) -> Self {
        if let MenuItem::Item { disabled, .. } = &mut self {
            *disabled = true;
        }
        self
    }

    pub fn destructive(mut self) -> Self {
        if let MenuItem::Item { destructive, .. } = &mut self {
            *destructive = true;
        }
        self
    }
}

/// Checkbox and radio choices, which survive the menu closing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSelections {
    pub checks: BTreeMap<String, bool>,
    pub radios: BTreeMap<String, String>,
}

impl MenuSelections {
    /// Defaults declared by `items`, submenus included.
    pub fn from_items(items: &[MenuItem]) -> Self {
        let mut selections = Self::default();
        selections.seed(items);
        selections
    }

    fn seed(&mut self, items: &[MenuItem]) {
        for item in items {
            match item {
                MenuItem::Checkbox { name, default, .. } => {
                    self.checks.insert(name.clone(), *default);
                }
                MenuItem::RadioGroup {
                    group,
                    default: Some(default),
                    ..
                } => {
                    self.radios.insert(group.clone(), default.clone());
                }
                MenuItem::Sub { items, .. } => self.seed(items),
                _ => {}
            }
        }
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checks.get(name).copied().unwrap_or(false)
    }

    pub fn selected(&self, group: &str) -> Option<&str> {
        self.radios.get(group).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
    /// Pointer position recorded by context menus
    pub position: Option<(f64, f64)>,
    pub open_subs: BTreeSet<String>,
    pub selections: MenuSelections,
}

impl MenuState {
    pub fn new(items: &[MenuItem]) -> Self {
        Self {
            selections: MenuSelections::from_items(items),
            ..Self::default()
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.position = None;
        self.open_subs.clear();
    }
}

/// Result of applying a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Nothing matched; state is unchanged
    Ignored,
    Changed,
    /// An item ran; the caller should close the menu and announce it
    Activated(String),
}

fn find_checkbox<'a>(items: &'a [MenuItem], wanted: &str) -> Option<&'a MenuItem> {
    find(items, &|item| matches!(item, MenuItem::Checkbox { name, .. } if name == wanted))
}

fn find<'a>(items: &'a [MenuItem], pred: &dyn Fn(&MenuItem) -> bool) -> Option<&'a MenuItem> {
    for item in items {
        if pred(item) {
            return Some(item);
        }
        if let MenuItem::Sub { items, .. } = item {
            if let Some(found) = find(items, pred) {
                return Some(found);
            }
        }
    }
    None
}

/// Apply `action` (with optional `value`) to the selections and open
/// submenus. Unknown actions, names and disabled items are ignored.
pub fn apply_action(
    items: &[MenuItem],
    selections: &mut MenuSelections,
    open_subs: &mut BTreeSet<String>,
    action_name: &str,
    arg: Option<&str>,
) -> MenuOutcome {
    if let Some(check_name) = action_name.strip_prefix("toggle-") {
        if find_checkbox(items, check_name).is_none() {
            return MenuOutcome::Ignored;
        }
        let entry = selections.checks.entry(check_name.to_string()).or_insert(false);
        *entry = !*entry;
        return MenuOutcome::Changed;
    }

    if let Some(group_name) = action_name.strip_prefix("select-") {
        let Some(choice) = arg else {
            return MenuOutcome::Ignored;
        };
        let known = find(items, &|item| match item {
            MenuItem::RadioGroup { group, options, .. } => {
                group == group_name && options.iter().any(|(v, _)| v == choice)
            }
            _ => false,
        });
        if known.is_none() {
            return MenuOutcome::Ignored;
        }
        selections
            .radios
            .insert(group_name.to_string(), choice.to_string());
        return MenuOutcome::Changed;
    }

    if let Some(sub_name) = action_name.strip_prefix("open-sub-") {
        let known = find(items, &|item| matches!(item, MenuItem::Sub { name, .. } if name == sub_name));
        if known.is_none() {
            return MenuOutcome::Ignored;
        }
        return if open_subs.insert(sub_name.to_string()) {
            MenuOutcome::Changed
        } else {
            MenuOutcome::Ignored
        };
    }

    match action_name {
        "activate" => {
            let Some(wanted) = arg else {
                return MenuOutcome::Ignored;
            };
            let enabled = find(items, &|item| {
                matches!(item, MenuItem::Item { value, disabled: false, .. } if value == wanted)
            });
            match enabled {
                Some(_) => MenuOutcome::Activated(wanted.to_string()),
                None => MenuOutcome::Ignored,
            }
        }
        "close-sub" => {
            let removed = match arg {
                Some(sub_name) => open_subs.remove(sub_name),
                None => {
                    let had_any = !open_subs.is_empty();
                    open_subs.clear();
                    had_any
                }
            };
            if removed {
                MenuOutcome::Changed
            } else {
                MenuOutcome::Ignored
            }
        }
        _ => MenuOutcome::Ignored,
    }
}

/// Applies an action to a single open menu, closing it on activation.
pub fn apply_to_menu(
    items: &[MenuItem],
    state: &mut MenuState,
    action_name: &str,
    arg: Option<&str>,
) -> MenuOutcome {
    let outcome = apply_action(
        items,
        &mut state.selections,
        &mut state.open_subs,
        action_name,
        arg,
    );
    if let MenuOutcome::Activated(_) = outcome {
        state.close();
    }
    outcome
}

/// `HX-Trigger` payload announcing an activated item.
pub fn select_event(menu_id: &str, selected: &str) -> Value {
    json!({ "menuSelect": { "id": menu_id, "value": selected } })
}

/// Single-menu widgets served by the shared `open`/`close`/`action` routes.
pub trait MenuWidget: SwapWidget<State = MenuState> {
    fn menu_items(&self) -> &[MenuItem];

    /// Open the menu. Pointer coordinates are ignored unless the widget
    /// positions itself at the pointer.
    fn open(&self, state: &mut MenuState, _x: Option<f64>, _y: Option<f64>) {
        state.open = true;
        state.open_subs.clear();
    }
}

const ITEM_CLASSES: &str = "relative flex cursor-default select-none items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-none transition-colors hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground data-[disabled]:pointer-events-none data-[disabled]:opacity-50";

pub(crate) const CONTENT_CLASSES: &str =
    "min-w-[8rem] overflow-hidden rounded-md border bg-popover p-1 text-popover-foreground shadow-md";

/// Renders menu entries whose actions post to `{base}/action` with `extra`
/// merged into `hx-vals` (the menubar adds the menu name).
pub struct MenuRenderer<'a> {
    pub region: &'a Region,
    pub selections: &'a MenuSelections,
    pub open_subs: &'a BTreeSet<String>,
    pub extra: Map<String, Value>,
}

impl<'a> MenuRenderer<'a> {
    pub fn new(
        region: &'a Region,
        selections: &'a MenuSelections,
        open_subs: &'a BTreeSet<String>,
    ) -> Self {
        Self {
            region,
            selections,
            open_subs,
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: &str, v: impl Into<String>) -> Self {
        self.extra.insert(key.to_string(), Value::String(v.into()));
        self
    }

    fn post(&self, action_name: &str, arg: Option<&str>) -> Node {
        let mut vals = self.extra.clone();
        vals.insert("action".to_string(), Value::String(action_name.to_string()));
        if let Some(arg) = arg {
            vals.insert("value".to_string(), Value::String(arg.to_string()));
        }
        group([self.region.post("action"), hx_vals(Value::Object(vals))])
    }

    pub fn items(&self, items: &[MenuItem]) -> Node {
        map(items, |item| self.item(item))
    }

    fn item(&self, item: &MenuItem) -> Node {
        match item {
            MenuItem::Item {
                label: item_label,
                value: item_value,
                shortcut,
                disabled: is_disabled,
                destructive,
            } => div([
                role("menuitem"),
                class(cn!(
                    ITEM_CLASSES,
                    cn_if(*destructive, "text-destructive focus:text-destructive", "")
                )),
                tab_index(-1),
                if_(*is_disabled, data("disabled", "")),
                if_(*is_disabled, aria("disabled", "true")),
                if_with(!*is_disabled, || self.post("activate", Some(item_value.as_str()))),
                text(item_label.clone()),
                match shortcut {
                    Some(keys) => span([
                        class("ml-auto text-xs tracking-widest opacity-60"),
                        text(keys.clone()),
                    ]),
                    None => Node::empty(),
                },
            ]),
            MenuItem::Checkbox {
                name: check_name,
                label: item_label,
                ..
            } => {
                let on = self.selections.is_checked(check_name);
                div([
                    role("menuitemcheckbox"),
                    class(cn!(ITEM_CLASSES, "pl-8")),
                    tab_index(-1),
                    aria_bool("checked", on),
                    data_state(if on { "checked" } else { "unchecked" }),
                    self.post(&format!("toggle-{check_name}"), None),
                    span([
                        class("absolute left-2 flex h-3.5 w-3.5 items-center justify-center"),
                        if_with(on, || crate::icons::check("h-4 w-4")),
                    ]),
                    text(item_label.clone()),
                ])
            }
            MenuItem::RadioGroup {
                group: group_name,
                options,
                ..
            } => {
                let current = self.selections.selected(group_name);
                div([
                    role("group"),
                    map(options, |(option_value, option_label)| {
                        let on = current == Some(option_value.as_str());
                        div([
                            role("menuitemradio"),
                            class(cn!(ITEM_CLASSES, "pl-8")),
                            tab_index(-1),
                            aria_bool("checked", on),
                            data_state(if on { "checked" } else { "unchecked" }),
                            self.post(&format!("select-{group_name}"), Some(option_value.as_str())),
                            span([
                                class("absolute left-2 flex h-3.5 w-3.5 items-center justify-center"),
                                if_with(on, || crate::icons::dot("h-2 w-2 fill-current")),
                            ]),
                            text(option_label.clone()),
                        ])
                    }),
                ])
            }
            MenuItem::Label(heading) => div([
                class("px-2 py-1.5 text-sm font-semibold"),
                text(heading.clone()),
            ]),
            MenuItem::Separator => div([
                role("separator"),
                class("-mx-1 my-1 h-px bg-muted"),
            ]),
            MenuItem::Sub {
                name: sub_name,
                label: item_label,
                items,
            } => {
                let is_open = self.open_subs.contains(sub_name);
                div([
                    class("relative"),
                    if_with(is_open, || {
                        group([
                            self.post("close-sub", Some(sub_name.as_str())),
                            hx_trigger("mouseleave"),
                        ])
                    }),
                    div([
                        role("menuitem"),
                        class(cn!(ITEM_CLASSES, cn_if(is_open, "bg-accent", ""))),
                        tab_index(-1),
                        aria("haspopup", "menu"),
                        aria_bool("expanded", is_open),
                        data_state(if is_open { "open" } else { "closed" }),
                        if_with(!is_open, || {
                            group([
                                self.post(&format!("open-sub-{sub_name}"), None),
                                hx_trigger("click, mouseenter"),
                            ])
                        }),
                        text(item_label.clone()),
                        crate::icons::chevron_right("ml-auto h-4 w-4"),
                    ]),
                    if_with(is_open, || {
                        div([
                            role("menu"),
                            class(cn!("absolute left-full top-0 z-50 ml-1", CONTENT_CLASSES)),
                            data_state("open"),
                            data("side", "right"),
                            self.items(items),
                        ])
                    }),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::label("Appearance"),
            MenuItem::checkbox("status-bar", "Status Bar", true),
            MenuItem::checkbox("panel", "Panel", false),
            MenuItem::separator(),
            MenuItem::radio_group(
                "position",
                [("top", "Top"), ("bottom", "Bottom")],
                Some("bottom"),
            ),
            MenuItem::item("Profile", "profile").shortcut("⇧⌘P"),
            MenuItem::item("Billing", "billing").disabled(),
            MenuItem::sub(
                "invite",
                "Invite users",
                [MenuItem::item("Email", "email"), MenuItem::checkbox("notify", "Notify", false)],
            ),
        ]
    }

    fn state() -> MenuState {
        let mut state = MenuState::new(&items());
        state.open = true;
        state
    }

    #[test]
    fn defaults_seed_selections_including_submenus() {
        let state = state();
        assert!(state.selections.is_checked("status-bar"));
        assert!(!state.selections.is_checked("panel"));
        assert_eq!(state.selections.checks.get("notify"), Some(&false));
        assert_eq!(state.selections.selected("position"), Some("bottom"));
    }

    #[test]
    fn toggle_flips_checkbox_and_keeps_menu_open() {
        let mut state = state();
        let outcome = apply_to_menu(&items(), &mut state, "toggle-panel", None);
        assert_eq!(outcome, MenuOutcome::Changed);
        assert!(state.selections.is_checked("panel"));
        assert!(state.open);
    }

    #[test]
    fn select_rejects_values_outside_group() {
        let mut state = state();
        assert_eq!(
            apply_to_menu(&items(), &mut state, "select-position", Some("left")),
            MenuOutcome::Ignored
        );
        assert_eq!(
            apply_to_menu(&items(), &mut state, "select-position", Some("top")),
            MenuOutcome::Changed
        );
        assert_eq!(state.selections.selected("position"), Some("top"));
    }

    #[test]
    fn activate_closes_menu() {
        let mut state = state();
        state.open_subs.insert("invite".to_string());
        let outcome = apply_to_menu(&items(), &mut state, "activate", Some("email"));
        assert_eq!(outcome, MenuOutcome::Activated("email".to_string()));
        assert!(!state.open);
        assert!(state.open_subs.is_empty());
    }

    #[test]
    fn disabled_and_unknown_actions_are_ignored() {
        let mut state = state();
        let before = state.clone();
        for (action_name, arg) in [
            ("activate", Some("billing")),
            ("activate", Some("missing")),
            ("toggle-missing", None),
            ("open-sub-missing", None),
            ("explode", None),
        ] {
            assert_eq!(
                apply_to_menu(&items(), &mut state, action_name, arg),
                MenuOutcome::Ignored
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn submenus_open_without_closing_parent() {
        let mut state = state();
        apply_to_menu(&items(), &mut state, "open-sub-invite", None);
        assert!(state.open);
        assert!(state.open_subs.contains("invite"));

        apply_to_menu(&items(), &mut state, "close-sub", Some("invite"));
        assert!(state.open_subs.is_empty());
    }

    #[test]
    fn rendered_items_post_actions() {
        let region = Region::new("menu", "/menu");
        let state = state();
        let html = MenuRenderer::new(&region, &state.selections, &state.open_subs)
            .items(&items())
            .to_string();
        assert!(html.contains(r#"role="menuitemcheckbox""#));
        assert!(html.contains(r#"hx-vals="{&quot;action&quot;:&quot;toggle-panel&quot;}""#));
        assert!(html.contains("⇧⌘P"));
        assert!(html.contains(r#"aria-disabled="true""#));
    }

    #[test]
    fn select_event_payload() {
        assert_eq!(
            select_event("menu", "profile").to_string(),
            r#"{"menuSelect":{"id":"menu","value":"profile"}}"#
        );
    }
}
