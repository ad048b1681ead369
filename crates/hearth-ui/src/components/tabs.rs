//! Tab list with one visible panel

use super::slider::Orientation;
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde_json::json;

#[derive(Debug, Clone)]
pub struct Tab {
    pub value: String,
    pub label: String,
    pub content: Vec<Node>,
    pub disabled: bool,
}

impl Tab {
    pub fn new(tab_value: impl Into<String>, tab_label: impl Into<String>) -> Self {
        Self {
            value: tab_value.into(),
            label: tab_label.into(),
            content: Vec::new(),
            disabled: false,
        }
    }

    pub fn content(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(nodes);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    pub active: String,
}

#[derive(Debug, Clone, Default)]
pub struct Tabs {
    pub tabs: Vec<Tab>,
    pub default_value: Option<String>,
    pub orientation: Orientation,
    pub class: String,
}

impl Tabs {
    pub fn new(tabs: impl IntoIterator<Item = Tab>) -> Self {
        Self {
            tabs: tabs.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn default_value(mut self, tab_value: impl Into<String>) -> Self {
        self.default_value = Some(tab_value.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Activate `tab_value`. Unknown or disabled tabs are ignored.
    pub fn select(&self, state: &mut TabsState, tab_value: &str) -> bool {
        let known = self
            .tabs
            .iter()
            .any(|t| t.value == tab_value && !t.disabled);
        if known {
            state.active = tab_value.to_string();
        }
        known
    }
}

impl SwapWidget for Tabs {
    type State = TabsState;
    const KIND: &'static str = "tabs";

    fn initial_state(&self) -> TabsState {
        let preferred = self
            .default_value
            .as_deref()
            .filter(|v| self.tabs.iter().any(|t| t.value == *v && !t.disabled));
        let active = preferred
            .or_else(|| self.tabs.iter().find(|t| !t.disabled).map(|t| t.value.as_str()))
            .unwrap_or_default()
            .to_string();
        TabsState { active }
    }

    fn render(&self, region: &Region, state: &TabsState) -> Node {
        let vertical = self.orientation == Orientation::Vertical;
        region.container([
            data("orientation", self.orientation.as_str()),
            class(cn!(cn_if(vertical, "flex gap-4", ""), self.class)),
            div([
                role("tablist"),
                aria("orientation", self.orientation.as_str()),
                class(cn!(
                    "inline-flex items-center justify-center rounded-lg bg-muted p-1 text-muted-foreground",
                    cn_if(vertical, "h-auto flex-col", "h-9")
                )),
                map(&self.tabs, |tab| {
                    let is_active = tab.value == state.active;
                    button([
                        id(region.child_id(&format!("tab-{}", tab.value))),
                        type_("button"),
                        role("tab"),
                        aria_bool("selected", is_active),
                        aria("controls", region.child_id(&format!("panel-{}", tab.value))),
                        data_state(if is_active { "active" } else { "inactive" }),
                        tab_index(if is_active { 0 } else { -1 }),
                        if_(tab.disabled, disabled()),
                        class("inline-flex items-center justify-center whitespace-nowrap rounded-md px-3 py-1 text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow"),
                        region.post("select"),
                        hx_vals(json!({ "value": tab.value })),
                        text(tab.label.clone()),
                    ])
                }),
            ]),
            map(self.tabs.iter().filter(|t| t.value == state.active), |tab| {
                div([
                    id(region.child_id(&format!("panel-{}", tab.value))),
                    role("tabpanel"),
                    aria("labelledby", region.child_id(&format!("tab-{}", tab.value))),
                    data_state("active"),
                    tab_index(0),
                    class("mt-2 focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring"),
                    group(tab.content.clone()),
                ])
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Tabs {
        Tabs::new([
            Tab::new("account", "Account").content([text("Make changes to your account here.")]),
            Tab::new("password", "Password").content([text("Change your password here.")]),
            Tab::new("billing", "Billing").disabled(true),
        ])
    }

    #[test]
    fn first_enabled_tab_is_default() {
        assert_eq!(tabs().initial_state().active, "account");
        assert_eq!(
            tabs().default_value("password").initial_state().active,
            "password"
        );
        assert_eq!(
            tabs().default_value("billing").initial_state().active,
            "account"
        );
    }

    #[test]
    fn select_ignores_unknown_and_disabled() {
        let tabs = tabs();
        let mut state = tabs.initial_state();
        assert!(tabs.select(&mut state, "password"));
        assert!(!tabs.select(&mut state, "billing"));
        assert!(!tabs.select(&mut state, "nope"));
        assert_eq!(state.active, "password");
    }

    #[test]
    fn only_active_panel_renders() {
        let tabs = tabs();
        let mut state = tabs.initial_state();
        tabs.select(&mut state, "password");
        let html = tabs.render(&Region::new("t", "/t"), &state).to_string();
        assert!(html.contains(r#"id="t-panel-password" role="tabpanel""#));
        assert!(!html.contains(r#"id="t-panel-account""#));
        assert!(html.contains(r#"aria-selected="true" aria-controls="t-panel-password""#));
    }
}
