//! Click-to-open popover

use super::button::{button_classes, ButtonSize, ButtonVariant};
use super::floating::{FloatingState, Placement};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Popover {
    pub trigger_label: String,
    pub trigger_variant: ButtonVariant,
    pub content: Vec<Node>,
    pub placement: Placement,
    pub class: String,
}

impl Popover {
    pub fn new(trigger_label: impl Into<String>) -> Self {
        Self {
            trigger_label: trigger_label.into(),
            trigger_variant: ButtonVariant::Outline,
            content: Vec::new(),
            placement: Placement::default(),
            class: String::new(),
        }
    }

    pub fn content(mut self, content: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(content);
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn trigger_variant(mut self, variant: ButtonVariant) -> Self {
        self.trigger_variant = variant;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl SwapWidget for Popover {
    type State = FloatingState;
    const KIND: &'static str = "popover";

    fn initial_state(&self) -> FloatingState {
        FloatingState::default()
    }

    fn render(&self, region: &Region, state: &FloatingState) -> Node {
        let content_id = region.child_id("content");
        region.container([
            class("relative inline-block"),
            data_state(if state.open { "open" } else { "closed" }),
            button([
                type_("button"),
                class(button_classes(self.trigger_variant, ButtonSize::Default, "")),
                aria("haspopup", "dialog"),
                aria_bool("expanded", state.open),
                aria("controls", content_id.clone()),
                region.post("toggle"),
                text(self.trigger_label.clone()),
            ]),
            if_with(state.open, || {
                group([
                    div([
                        class("fixed inset-0 z-40"),
                        aria("hidden", "true"),
                        region.post("close"),
                    ]),
                    div([
                        id(content_id),
                        role("dialog"),
                        data_state("open"),
                        self.placement.data_attrs(),
                        self.placement.position(
                            state,
                            &cn!(
                                "w-72 rounded-md border bg-popover p-4 text-popover-foreground shadow-md outline-none",
                                self.class
                            ),
                        ),
                        region.post("close"),
                        hx_trigger("keyup[key=='Escape'] from:body"),
                        group(self.content.clone()),
                    ]),
                ])
            }),
        ])
    }
}
