//! Dropdown menu anchored to a trigger button

use super::button::{button_classes, ButtonSize, ButtonVariant};
use super::floating::{FloatingState, Placement};
use super::menu::{MenuItem, MenuRenderer, MenuState, MenuWidget, CONTENT_CLASSES};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct DropdownMenu {
    pub trigger_label: String,
    pub trigger_variant: ButtonVariant,
    pub items: Vec<MenuItem>,
    pub placement: Placement,
    pub class: String,
}

impl DropdownMenu {
    pub fn new(trigger_label: impl Into<String>) -> Self {
        Self {
            trigger_label: trigger_label.into(),
            trigger_variant: ButtonVariant::Outline,
            items: Vec::new(),
            placement: Placement::default(),
            class: String::new(),
        }
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items.extend(items);
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

impl SwapWidget for DropdownMenu {
    type State = MenuState;
    const KIND: &'static str = "dropdown-menu";

    fn initial_state(&self) -> MenuState {
        MenuState::new(&self.items)
    }

    fn render(&self, region: &Region, state: &MenuState) -> Node {
        let content_id = region.child_id("content");
        region.container([
            class("relative inline-block text-left"),
            data_state(if state.open { "open" } else { "closed" }),
            button([
                type_("button"),
                class(button_classes(self.trigger_variant, ButtonSize::Default, "")),
                aria("haspopup", "menu"),
                aria_bool("expanded", state.open),
                aria("controls", content_id.clone()),
                region.post(if state.open { "close" } else { "open" }),
                text(self.trigger_label.clone()),
                crate::icons::chevron_down("ml-1 h-4 w-4 opacity-50"),
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
                        role("menu"),
                        aria("orientation", "vertical"),
                        data_state("open"),
                        self.placement.data_attrs(),
                        self.placement.position(
                            &FloatingState {
                                open: true,
                                anchor: None,
                            },
                            &cn!(CONTENT_CLASSES, self.class),
                        ),
                        region.post("close"),
                        hx_trigger("keyup[key=='Escape'] from:body"),
                        MenuRenderer::new(region, &state.selections, &state.open_subs)
                            .items(&self.items),
                    ]),
                ])
            }),
        ])
    }
}

impl MenuWidget for DropdownMenu {
    fn menu_items(&self) -> &[MenuItem] {
        &self.items
    }
}
