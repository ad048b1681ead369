//! Horizontal menubar: several named menus, at most one open

use super::menu::{apply_action, MenuItem, MenuOutcome, MenuRenderer, MenuSelections, CONTENT_CLASSES};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde_json::json;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct MenubarMenu {
    pub name: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

impl MenubarMenu {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        items: impl IntoIterator<Item = MenuItem>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            items: items.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenubarState {
    pub active: Option<String>,
    pub open_subs: BTreeSet<String>,
    pub selections: MenuSelections,
}

#[derive(Debug, Clone, Default)]
pub struct Menubar {
    pub menus: Vec<MenubarMenu>,
    pub class: String,
}

impl Menubar {
    pub fn new(menus: impl IntoIterator<Item = MenubarMenu>) -> Self {
        Self {
            menus: menus.into_iter().collect(),
            class: String::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn menu(&self, menu_name: &str) -> Option<&MenubarMenu> {
        self.menus.iter().find(|m| m.name == menu_name)
    }

    /// Toggle `menu_name`: open it, or close it when it is already active.
    /// Unknown menus are ignored.
    pub fn open(&self, state: &mut MenubarState, menu_name: &str) -> bool {
        if self.menu(menu_name).is_none() {
            return false;
        }
        state.open_subs.clear();
        if state.active.as_deref() == Some(menu_name) {
            state.active = None;
        } else {
            state.active = Some(menu_name.to_string());
        }
        true
    }

    pub fn close(&self, state: &mut MenubarState) {
        state.active = None;
        state.open_subs.clear();
    }

    /// Apply a menu action within `menu_name`. Activation closes the bar.
    pub fn action(
        &self,
        state: &mut MenubarState,
        menu_name: &str,
        action_name: &str,
        arg: Option<&str>,
    ) -> MenuOutcome {
        let Some(menu) = self.menu(menu_name) else {
            return MenuOutcome::Ignored;
        };
        let outcome = apply_action(
            &menu.items,
            &mut state.selections,
            &mut state.open_subs,
            action_name,
            arg,
        );
        if let MenuOutcome::Activated(_) = outcome {
            self.close(state);
        }
        outcome
    }

    fn trigger(&self, region: &Region, state: &MenubarState, menu: &MenubarMenu) -> Node {
        let is_open = state.active.as_deref() == Some(menu.name.as_str());
        let trigger_spec = if state.active.is_some() && !is_open {
            "click, mouseenter"
        } else {
            "click"
        };
        button([
            type_("button"),
            role("menuitem"),
            class(cn!(
                "flex cursor-default select-none items-center rounded-sm px-3 py-1 text-sm font-medium outline-none focus:bg-accent focus:text-accent-foreground",
                cn_if(is_open, "bg-accent text-accent-foreground", "")
            )),
            aria("haspopup", "menu"),
            aria_bool("expanded", is_open),
            data_state(if is_open { "open" } else { "closed" }),
            region.post("open"),
            hx_trigger(trigger_spec),
            hx_vals(json!({ "menu": menu.name })),
            text(menu.label.clone()),
        ])
    }
}

impl SwapWidget for Menubar {
    type State = MenubarState;
    const KIND: &'static str = "menubar";

    fn initial_state(&self) -> MenubarState {
        let all: Vec<MenuItem> = self
            .menus
            .iter()
            .flat_map(|m| m.items.iter().cloned())
            .collect();
        MenubarState {
            selections: MenuSelections::from_items(&all),
            ..MenubarState::default()
        }
    }

    fn render(&self, region: &Region, state: &MenubarState) -> Node {
        region.container([
            role("menubar"),
            class(cn!(
                "relative flex h-9 items-center space-x-1 rounded-md border bg-background p-1 shadow-sm",
                self.class
            )),
            if_with(state.active.is_some(), || {
                div([
                    class("fixed inset-0 z-40"),
                    aria("hidden", "true"),
                    region.post("close"),
                ])
            }),
            if_with(state.active.is_some(), || {
                div([
                    class("hidden"),
                    region.post("close"),
                    hx_trigger("keyup[key=='Escape'] from:body"),
                ])
            }),
            map(&self.menus, |menu| {
                let is_open = state.active.as_deref() == Some(menu.name.as_str());
                div([
                    class("relative z-50"),
                    self.trigger(region, state, menu),
                    if_with(is_open, || {
                        div([
                            id(region.child_id(&menu.name)),
                            role("menu"),
                            data_state("open"),
                            class(cn!("absolute left-0 top-full mt-2 w-56", CONTENT_CLASSES)),
                            MenuRenderer::new(region, &state.selections, &state.open_subs)
                                .with_extra("menu", menu.name.clone())
                                .items(&menu.items),
                        ])
                    }),
                ])
            }),
        ])
    }
}
