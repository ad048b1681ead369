//! Hover card: a richer tooltip with separate open and close delays

use super::floating::{FloatingState, Placement};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct HoverCard {
    pub trigger: Vec<Node>,
    pub content: Vec<Node>,
    pub placement: Placement,
    pub open_delay_ms: u64,
    pub close_delay_ms: u64,
    pub class: String,
}

impl HoverCard {
    pub fn new() -> Self {
        Self {
            trigger: Vec::new(),
            content: Vec::new(),
            placement: Placement::default(),
            open_delay_ms: 700,
            close_delay_ms: 300,
            class: String::new(),
        }
    }

    pub fn trigger(mut self, trigger: impl IntoIterator<Item = Node>) -> Self {
        self.trigger.extend(trigger);
        self
    }

    pub fn content(mut self, content: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(content);
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn delays(mut self, open_ms: u64, close_ms: u64) -> Self {
        self.open_delay_ms = open_ms;
        self.close_delay_ms = close_ms;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Default for HoverCard {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapWidget for HoverCard {
    type State = FloatingState;
    const KIND: &'static str = "hover-card";

    fn initial_state(&self) -> FloatingState {
        FloatingState::default()
    }

    fn render(&self, region: &Region, state: &FloatingState) -> Node {
        region.container([
            class("relative inline-block"),
            data_state(if state.open { "open" } else { "closed" }),
            if_with(state.open, || {
                group([
                    region.post("close"),
                    hx_trigger(format!("mouseleave delay:{}ms", self.close_delay_ms)),
                ])
            }),
            span([
                class("inline-flex"),
                if_with(!state.open, || {
                    group([
                        region.post("open"),
                        hx_trigger(format!("mouseenter delay:{}ms", self.open_delay_ms)),
                    ])
                }),
                group(self.trigger.clone()),
            ]),
            if_with(state.open, || {
                div([
                    id(region.child_id("content")),
                    data_state("open"),
                    self.placement.data_attrs(),
                    self.placement.position(
                        state,
                        &cn!(
                            "w-64 rounded-md border bg-popover p-4 text-popover-foreground shadow-md outline-none",
                            self.class
                        ),
                    ),
                    group(self.content.clone()),
                ])
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_drive_both_triggers() {
        let card = HoverCard::new().delays(200, 100).trigger([text("@nextjs")]);
        let region = Region::new("hc", "/hc");

        let closed = card.render(&region, &FloatingState::default()).to_string();
        assert!(closed.contains(r#"hx-trigger="mouseenter delay:200ms""#));

        let open = card
            .render(&region, &FloatingState { open: true, anchor: None })
            .to_string();
        assert!(open.contains(r#"hx-trigger="mouseleave delay:100ms""#));
        assert!(open.contains(r#"id="hc-content""#));
    }
}
