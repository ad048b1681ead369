//! Collapsible application sidebar with a mobile sheet
//!
//! The open flag is mirrored into a cookie named by `storage_key`; the first
//! render fetches `{base}/state` on load so the server can restore it.

use super::button::{button_classes, ButtonSize, ButtonVariant};
use super::overlay::BACKDROP_CLASSES;
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};

/// Cookie lifetime in seconds (7 days).
pub const COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarSide {
    #[default]
    Left,
    Right,
}

impl SidebarSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarSide::Left => "left",
            SidebarSide::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarVariant {
    #[default]
    Sidebar,
    Floating,
    Inset,
}

impl SidebarVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarVariant::Sidebar => "sidebar",
            SidebarVariant::Floating => "floating",
            SidebarVariant::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collapse {
    #[default]
    Offcanvas,
    Icon,
    None,
}

impl Collapse {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collapse::Offcanvas => "offcanvas",
            Collapse::Icon => "icon",
            Collapse::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub mobile_open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            open: true,
            mobile_open: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SidebarItem {
    pub label: String,
    pub href: String,
    pub icon: Option<Node>,
    pub active: bool,
}

impl SidebarItem {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: link.into(),
            icon: None,
            active: false,
        }
    }

    pub fn icon(mut self, icon: Node) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SidebarGroup {
    pub label: String,
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new(label: impl Into<String>, items: impl IntoIterator<Item = SidebarItem>) -> Self {
        Self {
            label: label.into(),
            items: items.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    pub side: SidebarSide,
    pub variant: SidebarVariant,
    pub collapsible: Collapse,
    pub storage_key: String,
    pub default_open: bool,
    pub header: Vec<Node>,
    pub groups: Vec<SidebarGroup>,
    pub footer: Vec<Node>,
    pub class: String,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            side: SidebarSide::default(),
            variant: SidebarVariant::default(),
            collapsible: Collapse::default(),
            storage_key: "sidebar_state".to_string(),
            default_open: true,
            header: Vec::new(),
            groups: Vec::new(),
            footer: Vec::new(),
            class: String::new(),
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(mut self, side: SidebarSide) -> Self {
        self.side = side;
        self
    }

    pub fn variant(mut self, variant: SidebarVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn collapsible(mut self, collapsible: Collapse) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn header(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.header.extend(nodes);
        self
    }

    pub fn groups(mut self, groups: impl IntoIterator<Item = SidebarGroup>) -> Self {
        self.groups.extend(groups);
        self
    }

    pub fn footer(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.footer.extend(nodes);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Seed state from the stored cookie value; anything but `true`/`false`
    /// falls back to `default_open`.
    pub fn restore(&self, state: &mut SidebarState, stored: Option<&str>) {
        state.open = match stored {
            Some("true") => true,
            Some("false") => false,
            _ => self.default_open,
        };
        if self.collapsible == Collapse::None {
            state.open = true;
        }
    }

    /// Flip the desktop sidebar. A non-collapsible sidebar stays open.
    pub fn toggle(&self, state: &mut SidebarState) -> bool {
        if self.collapsible == Collapse::None {
            return false;
        }
        state.open = !state.open;
        true
    }

    pub fn set_mobile(&self, state: &mut SidebarState, open: bool) {
        state.mobile_open = open;
    }

    /// `Set-Cookie` value persisting the open flag.
    pub fn cookie(&self, state: &SidebarState) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}",
            self.storage_key, state.open, COOKIE_MAX_AGE
        )
    }

    /// First render on a page: also fetches the stored state on load.
    pub fn render_initial(&self, region: &Region, state: &SidebarState) -> Node {
        self.render_region(region, state, true)
    }

    fn menu(&self, show_labels: bool) -> Node {
        map(&self.groups, |grp| {
            div([
                class("relative flex w-full min-w-0 flex-col p-2"),
                if_with(show_labels, || {
                    div([
                        class("flex h-8 shrink-0 items-center rounded-md px-2 text-xs font-medium text-sidebar-foreground/70"),
                        text(grp.label.clone()),
                    ])
                }),
                ul([
                    class("flex w-full min-w-0 flex-col gap-1"),
                    map(&grp.items, |item| {
                        li([
                            class("relative"),
                            a([
                                href(item.href.clone()),
                                class("flex w-full items-center gap-2 overflow-hidden rounded-md p-2 text-left text-sm outline-none hover:bg-sidebar-accent hover:text-sidebar-accent-foreground data-[active=true]:bg-sidebar-accent data-[active=true]:font-medium"),
                                data("active", item.active.to_string()),
                                if_(item.active, aria("current", "page")),
                                if_(!show_labels, title(item.label.clone())),
                                item.icon.clone().unwrap_or_default(),
                                if show_labels {
                                    span([text(item.label.clone())])
                                } else {
                                    span([class("sr-only"), text(item.label.clone())])
                                },
                            ]),
                        ])
                    }),
                ]),
            ])
        })
    }

    /// The mobile sheet region, `{id}-mobile`.
    pub fn render_mobile(&self, region: &Region, open: bool) -> Node {
        let mobile_id = region.child_id("mobile");
        if !open {
            return div([id(mobile_id)]);
        }
        let close = group([
            hx_get(format!("{}?close=true", region.path("mobile"))),
            hx_target(format!("#{mobile_id}")),
            hx_swap(Swap::OuterHtml),
        ]);
        let edge = match self.side {
            SidebarSide::Left => "inset-y-0 left-0 border-r",
            SidebarSide::Right => "inset-y-0 right-0 border-l",
        };
        div([
            id(mobile_id),
            class("md:hidden"),
            data_state("open"),
            div([class(BACKDROP_CLASSES), aria("hidden", "true"), close.clone()]),
            div([
                class("hidden"),
                close.clone(),
                hx_trigger("keyup[key=='Escape'] from:body"),
            ]),
            div([
                role("dialog"),
                aria("modal", "true"),
                aria("label", "Sidebar"),
                data("side", self.side.as_str()),
                class(cn!(
                    "fixed z-50 flex h-full w-72 flex-col bg-sidebar p-0 text-sidebar-foreground shadow-lg",
                    edge
                )),
                button([
                    type_("button"),
                    class("absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100"),
                    close,
                    crate::icons::x("h-4 w-4"),
                    span([class("sr-only"), text("Close")]),
                ]),
                div([class("flex flex-col gap-2 p-2"), group(self.header.clone())]),
                div([class("flex min-h-0 flex-1 flex-col overflow-auto"), self.menu(true)]),
                div([class("flex flex-col gap-2 p-2"), group(self.footer.clone())]),
            ]),
        ])
    }

    fn render_region(&self, region: &Region, state: &SidebarState, initial: bool) -> Node {
        let expanded = state.open || self.collapsible == Collapse::None;
        let show_labels = expanded || self.collapsible != Collapse::Icon;
        let width = match (expanded, self.collapsible) {
            (true, _) | (false, Collapse::None) => "w-64",
            (false, Collapse::Icon) => "w-12",
            (false, Collapse::Offcanvas) => "w-0 overflow-hidden",
        };
        let frame = match self.variant {
            SidebarVariant::Sidebar => match self.side {
                SidebarSide::Left => "border-r",
                SidebarSide::Right => "border-l",
            },
            SidebarVariant::Floating => "m-2 rounded-lg border shadow",
            SidebarVariant::Inset => "m-2",
        };

        region.container([
            class(cn!("group peer flex text-sidebar-foreground", self.class)),
            data_state(if expanded { "expanded" } else { "collapsed" }),
            data("collapsible", if expanded { "" } else { self.collapsible.as_str() }),
            data("variant", self.variant.as_str()),
            data("side", self.side.as_str()),
            if_with(initial, || group([region.get("state"), hx_trigger("load")])),
            div([
                class("hidden"),
                region.post("toggle"),
                hx_trigger("keydown[(ctrlKey||metaKey)&&key=='b'] from:body"),
            ]),
            aside([
                class(cn!(
                    "hidden h-svh flex-col bg-sidebar transition-[width] duration-200 ease-linear md:flex",
                    width,
                    frame
                )),
                div([class("flex flex-col gap-2 p-2"), group(self.header.clone())]),
                div([class("flex min-h-0 flex-1 flex-col gap-2 overflow-auto"), self.menu(show_labels)]),
                div([class("flex flex-col gap-2 p-2"), group(self.footer.clone())]),
            ]),
            div([
                class("flex items-start gap-1 p-2"),
                if_with(self.collapsible != Collapse::None, || {
                    button([
                        type_("button"),
                        class(button_classes(ButtonVariant::Ghost, ButtonSize::Icon, "hidden h-7 w-7 md:inline-flex")),
                        aria_bool("expanded", expanded),
                        region.post("toggle"),
                        crate::icons::panel_left("h-4 w-4"),
                        span([class("sr-only"), text("Toggle Sidebar")]),
                    ])
                }),
                button([
                    type_("button"),
                    class(button_classes(ButtonVariant::Ghost, ButtonSize::Icon, "h-7 w-7 md:hidden")),
                    aria_bool("expanded", state.mobile_open),
                    hx_get(region.path("mobile")),
                    hx_target(format!("#{}", region.child_id("mobile"))),
                    hx_swap(Swap::OuterHtml),
                    crate::icons::panel_left("h-4 w-4"),
                    span([class("sr-only"), text("Open Sidebar")]),
                ]),
            ]),
            self.render_mobile(region, state.mobile_open),
        ])
    }
}

impl SwapWidget for Sidebar {
    type State = SidebarState;
    const KIND: &'static str = "sidebar";

    fn initial_state(&self) -> SidebarState {
        SidebarState {
            open: self.default_open || self.collapsible == Collapse::None,
            mobile_open: false,
        }
    }

    fn render(&self, region: &Region, state: &SidebarState) -> Node {
        self.render_region(region, state, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Sidebar {
        Sidebar::new().groups([SidebarGroup::new(
            "Platform",
            [
                SidebarItem::new("Home", "/").active(true),
                SidebarItem::new("Inbox", "/inbox"),
            ],
        )])
    }

    #[test]
    fn toggle_flips_and_cookie_follows() {
        let sidebar = sidebar();
        let mut state = sidebar.initial_state();
        assert!(state.open);
        assert!(sidebar.toggle(&mut state));
        assert!(!state.open);
        assert_eq!(
            sidebar.cookie(&state),
            "sidebar_state=false; Path=/; Max-Age=604800"
        );
    }

    #[test]
    fn non_collapsible_ignores_toggle() {
        let sidebar = sidebar().collapsible(Collapse::None);
        let mut state = sidebar.initial_state();
        assert!(!sidebar.toggle(&mut state));
        assert!(state.open);
    }

    #[test]
    fn restore_reads_cookie_value() {
        let sidebar = sidebar().default_open(true);
        let mut state = sidebar.initial_state();
        sidebar.restore(&mut state, Some("false"));
        assert!(!state.open);
        sidebar.restore(&mut state, Some("true"));
        assert!(state.open);
        sidebar.restore(&mut state, Some("garbage"));
        assert!(state.open);
    }

    #[test]
    fn only_initial_render_loads_state() {
        let sidebar = sidebar();
        let region = Region::new("sb", "/sb");
        let state = sidebar.initial_state();

        let first = sidebar.render_initial(&region, &state).to_string();
        assert!(first.contains(r#"hx-get="/sb/state""#));
        assert!(first.contains(r#"hx-trigger="load""#));

        let later = sidebar.render(&region, &state).to_string();
        assert!(!later.contains(r#"hx-trigger="load""#));
        assert!(later.contains("keydown[(ctrlKey||metaKey)&amp;&amp;key=='b'] from:body"));
    }

    #[test]
    fn collapsed_icon_sidebar_hides_labels() {
        let sidebar = sidebar().collapsible(Collapse::Icon);
        let state = SidebarState {
            open: false,
            mobile_open: false,
        };
        let html = sidebar.render(&Region::new("sb", "/sb"), &state).to_string();
        assert!(html.contains(r#"data-state="collapsed" data-collapsible="icon""#));
        assert!(html.contains(r#"title="Inbox""#));
        assert!(html.contains(r#"<span class="sr-only">Inbox</span>"#));
    }

    #[test]
    fn mobile_region_open_and_closed() {
        let sidebar = sidebar();
        let region = Region::new("sb", "/sb");
        assert_eq!(
            sidebar.render_mobile(&region, false).to_string(),
            r#"<div id="sb-mobile"></div>"#
        );
        let open = sidebar.render_mobile(&region, true).to_string();
        assert!(open.contains(r#"role="dialog""#));
        assert!(open.contains(r##"hx-get="/sb/mobile?close=true" hx-target="#sb-mobile""##));
    }
}
