//! Site navigation with hover/focus dropdown panels
//!
//! Panels open through CSS (`group-hover`, `group-focus-within`), so the menu
//! needs no server round trip.

use hearth_html::prelude::*;

const TRIGGER_CLASSES: &str = "group/trigger inline-flex h-9 w-max items-center justify-center rounded-md bg-background px-4 py-2 text-sm font-medium transition-colors hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground focus:outline-none";

#[derive(Debug, Clone)]
pub struct NavLink {
    pub title: String,
    pub href: String,
    pub description: String,
}

impl NavLink {
    pub fn new(link_title: impl Into<String>, target_href: impl Into<String>) -> Self {
        Self {
            title: link_title.into(),
            href: target_href.into(),
            description: String::new(),
        }
    }

    pub fn description(mut self, copy: impl Into<String>) -> Self {
        self.description = copy.into();
        self
    }
}

#[derive(Debug, Clone)]
pub enum NavEntry {
    Link { label: String, href: String, active: bool },
    Panel { label: String, links: Vec<NavLink>, columns: usize },
}

#[derive(Debug, Clone, Default)]
pub struct NavigationMenu {
    pub entries: Vec<NavEntry>,
    pub class: String,
}

impl NavigationMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(mut self, label_text: impl Into<String>, target_href: impl Into<String>, active: bool) -> Self {
        self.entries.push(NavEntry::Link {
            label: label_text.into(),
            href: target_href.into(),
            active,
        });
        self
    }

    pub fn panel(mut self, label_text: impl Into<String>, links: impl IntoIterator<Item = NavLink>) -> Self {
        self.entries.push(NavEntry::Panel {
            label: label_text.into(),
            links: links.into_iter().collect(),
            columns: 2,
        });
        self
    }

    /// Column count of the most recently added panel.
    pub fn columns(mut self, n: usize) -> Self {
        if let Some(NavEntry::Panel { columns, .. }) = self.entries.last_mut() {
            *columns = n.clamp(1, 3);
        }
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn entry(entry: &NavEntry) -> Node {
        match entry {
            NavEntry::Link { label: link_label, href: link, active } => li([a([
                href(link.clone()),
                if_(*active, aria("current", "page")),
                if_(*active, data("active", "true")),
                class(cn!(TRIGGER_CLASSES, cn_if(*active, "bg-accent/50", ""))),
                text(link_label.clone()),
            ])]),
            NavEntry::Panel { label: panel_label, links, columns } => li([
                class("group relative"),
                button([
                    type_("button"),
                    aria("haspopup", "true"),
                    class(cn!(TRIGGER_CLASSES, "gap-1")),
                    text(panel_label.clone()),
                    crate::icons::chevron_down(
                        "relative top-px ml-1 h-3 w-3 transition duration-300 group-hover:rotate-180 group-focus-within:rotate-180",
                    ),
                ]),
                div([
                    class("invisible absolute left-0 top-full z-50 pt-1.5 opacity-0 transition group-hover:visible group-hover:opacity-100 group-focus-within:visible group-focus-within:opacity-100"),
                    ul([
                        class(cn!(
                            "grid w-[400px] gap-3 rounded-md border bg-popover p-4 text-popover-foreground shadow md:w-[500px]",
                            match *columns {
                                1 => "grid-cols-1",
                                2 => "md:grid-cols-2",
                                _ => "md:grid-cols-3",
                            }
                        )),
                        map(links, |item| {
                            li([a([
                                href(item.href.clone()),
                                class("block select-none space-y-1 rounded-md p-3 leading-none no-underline outline-none transition-colors hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground"),
                                div([class("text-sm font-medium leading-none"), text(item.title.clone())]),
                                if_with(!item.description.is_empty(), || {
                                    p([
                                        class("line-clamp-2 text-sm leading-snug text-muted-foreground"),
                                        text(item.description.clone()),
                                    ])
                                }),
                            ])])
                        }),
                    ]),
                ]),
            ]),
        }
    }
}

impl Component for NavigationMenu {
    fn view(&self) -> Node {
        nav([
            aria("label", "Main"),
            class(cn!("relative z-10 flex max-w-max flex-1 items-center justify-center", self.class)),
            ul([
                class("group/list flex flex-1 list-none items-center justify-center gap-1"),
                map(&self.entries, Self::entry),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_open_by_css() {
        let html = NavigationMenu::new()
            .panel(
                "Components",
                [
                    NavLink::new("Alert Dialog", "/docs/alert-dialog")
                        .description("A modal dialog that interrupts the user."),
                    NavLink::new("Hover Card", "/docs/hover-card"),
                ],
            )
            .columns(1)
            .link("Docs", "/docs", true)
            .view()
            .to_string();
        assert!(html.contains(r#"<li class="group relative"><button type="button" aria-haspopup="true""#));
        assert!(html.contains("group-hover:visible"));
        assert!(html.contains("grid-cols-1"));
        assert!(html.contains(r#"<a href="/docs" aria-current="page" data-active="true""#));
        assert_eq!(html.matches("line-clamp-2").count(), 1);
    }
}
