//! Hover tooltip
//!
//! The trigger posts `open` on `mouseenter` after `delay_ms`; leaving the
//! region posts `close`.

use super::floating::{FloatingState, Placement, Side};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Tooltip {
    pub trigger: Vec<Node>,
    pub content: String,
    pub placement: Placement,
    pub delay_ms: u64,
    pub class: String,
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            trigger: Vec::new(),
            content: content.into(),
            placement: Placement {
                side: Side::Top,
                ..Placement::default()
            },
            delay_ms: 300,
            class: String::new(),
        }
    }

    pub fn trigger(mut self, trigger: impl IntoIterator<Item = Node>) -> Self {
        self.trigger.extend(trigger);
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl SwapWidget for Tooltip {
    type State = FloatingState;
    const KIND: &'static str = "tooltip";

    fn initial_state(&self) -> FloatingState {
        FloatingState::default()
    }

    fn render(&self, region: &Region, state: &FloatingState) -> Node {
        let content_id = region.child_id("content");
        region.container([
            class("relative inline-block"),
            data_state(if state.open { "delayed-open" } else { "closed" }),
            if_with(state.open, || {
                group([region.post("close"), hx_trigger("mouseleave")])
            }),
            span([
                class("inline-flex"),
                if_(state.open, aria("describedby", content_id.clone())),
                if_with(!state.open, || {
                    group([
                        region.post("open"),
                        hx_trigger(format!("mouseenter delay:{}ms, focusin", self.delay_ms)),
                    ])
                }),
                group(self.trigger.clone()),
            ]),
            if_with(state.open, || {
                div([
                    id(content_id),
                    role("tooltip"),
                    data_state("delayed-open"),
                    self.placement.data_attrs(),
                    self.placement.position(
                        state,
                        &cn!(
                            "overflow-hidden whitespace-nowrap rounded-md bg-primary px-3 py-1.5 text-xs text-primary-foreground animate-in fade-in-0 zoom-in-95",
                            self.class
                        ),
                    ),
                    text(self.content.clone()),
                ])
            }),
        ])
    }
}
