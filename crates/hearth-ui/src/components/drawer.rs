//! Bottom drawer with a drag handle

use super::overlay::{self, Overlay, OverlayState};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Drawer {
    pub title: String,
    pub description: String,
    pub body: Vec<Node>,
    pub cancel_label: String,
    pub confirm_label: String,
    pub confirm_event: Option<String>,
    pub class: String,
}

impl Drawer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            body: Vec::new(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Submit".to_string(),
            confirm_event: None,
            class: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn body(mut self, body: impl IntoIterator<Item = Node>) -> Self {
        self.body.extend(body);
        self
    }

    pub fn actions(mut self, cancel: impl Into<String>, confirm: impl Into<String>) -> Self {
        self.cancel_label = cancel.into();
        self.confirm_label = confirm.into();
        self
    }

    pub fn confirm_event(mut self, event: impl Into<String>) -> Self {
        self.confirm_event = Some(event.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl SwapWidget for Drawer {
    type State = OverlayState;
    const KIND: &'static str = "drawer";

    fn initial_state(&self) -> OverlayState {
        OverlayState::default()
    }

    fn render(&self, region: &Region, state: &OverlayState) -> Node {
        if !state.open {
            return region.empty();
        }

        region.container([
            overlay::modal_attrs(region, "dialog", !self.description.is_empty()),
            overlay::backdrop(region, true),
            overlay::escape_listener(region),
            div([
                class(cn!(
                    "fixed inset-x-0 bottom-0 z-50 mt-24 flex h-auto flex-col rounded-t-[10px] border bg-background",
                    self.class
                )),
                data_state("open"),
                data("vaul-drawer-direction", "bottom"),
                div([
                    class("mx-auto mt-4 h-2 w-[100px] shrink-0 cursor-grab rounded-full bg-muted"),
                    aria("hidden", "true"),
                ]),
                div([
                    class("mx-auto w-full max-w-sm"),
                    div([
                        class("p-4"),
                        overlay::heading(region, &self.title, &self.description, "text-center sm:text-left"),
                    ]),
                    div([class("p-4 pb-0"), group(self.body.clone())]),
                    div([
                        class("mt-auto p-4"),
                        overlay::footer(region, &self.cancel_label, &self.confirm_label),
                    ]),
                ]),
            ]),
        ])
    }
}

impl Overlay for Drawer {
    fn confirm_event(&self) -> Option<&str> {
        self.confirm_event.as_deref()
    }
}
