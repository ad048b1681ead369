//! Side sheet

use super::overlay::{self, Overlay, OverlayState};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetSide::Top => "top",
            SheetSide::Right => "right",
            SheetSide::Bottom => "bottom",
            SheetSide::Left => "left",
        }
    }

    fn classes(&self) -> &'static str {
        match self {
            SheetSide::Top => "inset-x-0 top-0 border-b",
            SheetSide::Bottom => "inset-x-0 bottom-0 border-t",
            SheetSide::Left => "inset-y-0 left-0 h-full w-3/4 border-r sm:max-w-sm",
            SheetSide::Right => "inset-y-0 right-0 h-full w-3/4 border-l sm:max-w-sm",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sheet {
    pub side: SheetSide,
    pub title: String,
    pub description: String,
    pub body: Vec<Node>,
    pub cancel_label: String,
    pub confirm_label: String,
    pub confirm_event: Option<String>,
    pub class: String,
}

impl Sheet {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            side: SheetSide::default(),
            title: title.into(),
            description: String::new(),
            body: Vec::new(),
            cancel_label: String::new(),
            confirm_label: "Save changes".to_string(),
            confirm_event: None,
            class: String::new(),
        }
    }

    pub fn side(mut self, side: SheetSide) -> Self {
        self.side = side;
        self
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

impl SwapWidget for Sheet {
    type State = OverlayState;
    const KIND: &'static str = "sheet";

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
                    "fixed z-50 gap-4 bg-background p-6 shadow-lg transition ease-in-out",
                    self.side.classes(),
                    self.class
                )),
                data_state("open"),
                data("side", self.side.as_str()),
                overlay::heading(region, &self.title, &self.description, "text-center sm:text-left"),
                div([class("grid gap-4 py-4"), group(self.body.clone())]),
                overlay::footer(region, &self.cancel_label, &self.confirm_label),
                overlay::close_button(region),
            ]),
        ])
    }
}

impl Overlay for Sheet {
    fn confirm_event(&self) -> Option<&str> {
        self.confirm_event.as_deref()
    }
}
