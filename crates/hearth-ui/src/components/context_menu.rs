//! Right-click menu opened at the pointer

use super::menu::{MenuItem, MenuRenderer, MenuState, MenuWidget, CONTENT_CLASSES};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct ContextMenu {
    /// Content of the right-clickable area
    pub area: Vec<Node>,
    pub items: Vec<MenuItem>,
    pub class: String,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self {
            area: vec![text("Right click here")],
            items: Vec::new(),
            class: String::new(),
        }
    }

    pub fn area(mut self, area: impl IntoIterator<Item = Node>) -> Self {
        self.area = area.into_iter().collect();
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Open at the pointer; coordinates are kept only when both are finite.
    pub fn open_at(&self, state: &mut MenuState, x: Option<f64>, y: Option<f64>) {
        state.open = true;
        state.open_subs.clear();
        state.position = match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        };
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapWidget for ContextMenu {
    type State = MenuState;
    const KIND: &'static str = "context-menu";

    fn initial_state(&self) -> MenuState {
        MenuState::new(&self.items)
    }

    fn render(&self, region: &Region, state: &MenuState) -> Node {
        region.container([
            class("relative"),
            data_state(if state.open { "open" } else { "closed" }),
            div([
                class("flex h-[150px] w-[300px] items-center justify-center rounded-md border border-dashed text-sm"),
                region.post("open"),
                hx_trigger("contextmenu"),
                hx_vals_js("{x: event.clientX, y: event.clientY}"),
                hx_on("contextmenu", "event.preventDefault()"),
                group(self.area.clone()),
            ]),
            if_with(state.open, || {
                let (x, y) = state.position.unwrap_or((0.0, 0.0));
                group([
                    div([
                        class("fixed inset-0 z-40"),
                        aria("hidden", "true"),
                        region.post("close"),
                        hx_trigger("click, contextmenu"),
                        hx_on("contextmenu", "event.preventDefault()"),
                    ]),
                    div([
                        id(region.child_id("content")),
                        role("menu"),
                        data_state("open"),
                        class(cn!("fixed z-50 w-64", CONTENT_CLASSES, self.class)),
                        style(format!("left: {x}px; top: {y}px;")),
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

impl MenuWidget for ContextMenu {
    fn menu_items(&self) -> &[MenuItem] {
        &self.items
    }

    fn open(&self, state: &mut MenuState, x: Option<f64>, y: Option<f64>) {
        self.open_at(state, x, y);
    }
}
