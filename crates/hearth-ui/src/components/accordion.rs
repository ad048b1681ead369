//! Accordion with single or multiple open items
//!
//! ```
//! use hearth_ui::components::{Accordion, AccordionItem, AccordionType};
//! use hearth_ui::SwapWidget;
//!
//! let accordion = Accordion::new(AccordionType::Single)
//!     .collapsible(true)
//!     .items([AccordionItem::new("a", "Is it accessible?")]);
//! let mut state = accordion.initial_state();
//! accordion.toggle(&mut state, "a");
//! assert!(state.open.contains("a"));
//! ```

use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccordionType {
    #[default]
    Single,
    Multiple,
}

#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub value: String,
    pub title: String,
    pub content: Vec<Node>,
    pub disabled: bool,
}

impl AccordionItem {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            content: Vec::new(),
            disabled: false,
        }
    }

    pub fn content(mut self, content: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(content);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    pub kind: AccordionType,
    /// Whether the open item of a `single` accordion can be closed again
    pub collapsible: bool,
    pub items: Vec<AccordionItem>,
    pub default_open: Vec<String>,
    pub class: String,
}

impl Accordion {
    pub fn new(kind: AccordionType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = AccordionItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn default_open<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.default_open = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn enabled_item(&self, item_value: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.value == item_value && !item.disabled)
    }

    /// Apply a click on `item_value`. Returns whether the open set changed.
    pub fn toggle(&self, state: &mut AccordionState, item_value: &str) -> bool {
        if !self.enabled_item(item_value) {
            debug!(item = item_value, "Ignoring toggle of unknown or disabled accordion item");
            return false;
        }

        let is_open = state.open.contains(item_value);
        match self.kind {
            AccordionType::Multiple => {
                if is_open {
                    state.open.remove(item_value);
                } else {
                    state.open.insert(item_value.to_string());
                }
                true
            }
            AccordionType::Single => {
                if is_open {
                    if !self.collapsible {
                        return false;
                    }
                    state.open.clear();
                } else {
                    state.open.clear();
                    state.open.insert(item_value.to_string());
                }
                true
            }
        }
    }
}

impl SwapWidget for Accordion {
    type State = AccordionState;
    const KIND: &'static str = "accordion";

    fn initial_state(&self) -> AccordionState {
        let wanted = self
            .default_open
            .iter()
            .filter(|v| self.items.iter().any(|item| item.value == **v));
        let open = match self.kind {
            AccordionType::Single => wanted.take(1).cloned().collect(),
            AccordionType::Multiple => wanted.cloned().collect(),
        };
        AccordionState { open }
    }

    fn render(&self, region: &Region, state: &AccordionState) -> Node {
        region.container([
            class(cn!("w-full", self.class)),
            data("orientation", "vertical"),
            map(&self.items, |item| {
                let is_open = state.open.contains(&item.value);
                let open_state = if is_open { "open" } else { "closed" };
                let trigger_id = region.child_id(&format!("trigger-{}", item.value));
                let content_id = region.child_id(&format!("content-{}", item.value));
                div([
                    class("border-b"),
                    data_state(open_state),
                    if_(item.disabled, data("disabled", "")),
                    h3([
                        class("flex"),
                        button([
                            id(trigger_id.clone()),
                            type_("button"),
                            class("flex flex-1 items-center justify-between py-4 text-sm font-medium transition-all hover:underline disabled:pointer-events-none disabled:opacity-50 [&[data-state=open]>svg]:rotate-180"),
                            aria_bool("expanded", is_open),
                            aria("controls", content_id.clone()),
                            data_state(open_state),
                            if_(item.disabled, disabled()),
                            region.post("toggle"),
                            hx_vals(json!({ "item": item.value })),
                            text(item.title.clone()),
                            crate::icons::chevron_down(
                                "h-4 w-4 shrink-0 text-muted-foreground transition-transform duration-200",
                            ),
                        ]),
                    ]),
                    div([
                        id(content_id),
                        role("region"),
                        aria("labelledby", trigger_id),
                        data_state(open_state),
                        class(cn!(
                            "overflow-hidden text-sm",
                            cn_if(is_open, "animate-accordion-down", "hidden")
                        )),
                        div([class("pb-4 pt-0"), group(item.content.clone())]),
                    ]),
                ])
            }),
        ])
    }
}
