//! Command palette: a search box over grouped items
//!
//! Typing sends `GET {base}/search?q=…`; the response is the list interior
//! swapped into `#{id}-list`.

use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct CommandItem {
    pub label: String,
    pub value: String,
    pub keywords: Vec<String>,
    pub shortcut: Option<String>,
    pub href: Option<String>,
    pub icon: Option<Node>,
    pub disabled: bool,
}

impl CommandItem {
    pub fn new(item_label: impl Into<String>, item_value: impl Into<String>) -> Self {
        Self {
            label: item_label.into(),
            value: item_value.into(),
            ..Self::default()
        }
    }

    pub fn keywords<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }

    pub fn href(mut self, link: impl Into<String>) -> Self {
        self.href = Some(link.into());
        self
    }

    pub fn icon(mut self, icon: Node) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Case-insensitive substring match on the label or any keyword.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.label.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone)]
pub struct CommandGroup {
    pub heading: String,
    pub items: Vec<CommandItem>,
}

impl CommandGroup {
    pub fn new(heading: impl Into<String>, items: impl IntoIterator<Item = CommandItem>) -> Self {
        Self {
            heading: heading.into(),
            items: items.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Command {
    pub placeholder: String,
    pub empty_message: String,
    pub groups: Vec<CommandGroup>,
    pub class: String,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            placeholder: "Type a command or search...".to_string(),
            empty_message: "No results found.".to_string(),
            groups: Vec::new(),
            class: String::new(),
        }
    }
}

impl Command {
    pub fn new(groups: impl IntoIterator<Item = CommandGroup>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, hint: impl Into<String>) -> Self {
        self.placeholder = hint.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Groups with at least one matching item, in declaration order.
    pub fn search(&self, query: &str) -> Vec<(&CommandGroup, Vec<&CommandItem>)> {
        let needle = query.trim().to_lowercase();
        self.groups
            .iter()
            .filter_map(|grp| {
                let hits: Vec<&CommandItem> =
                    grp.items.iter().filter(|item| item.matches(&needle)).collect();
                (!hits.is_empty()).then_some((grp, hits))
            })
            .collect()
    }

    fn item(&self, item: &CommandItem) -> Node {
        let body = group([
            item.icon.clone().unwrap_or_default(),
            span([text(item.label.clone())]),
            match &item.shortcut {
                Some(keys) => span([
                    class("ml-auto text-xs tracking-widest text-muted-foreground"),
                    text(keys.clone()),
                ]),
                None => Node::empty(),
            },
        ]);
        let classes = "relative flex cursor-default select-none items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-none hover:bg-accent hover:text-accent-foreground data-[disabled=true]:pointer-events-none data-[disabled=true]:opacity-50";
        let attrs = group([
            role("option"),
            data("value", item.value.clone()),
            data("disabled", item.disabled.to_string()),
            aria_bool("disabled", item.disabled),
            class(classes),
        ]);
        match &item.href {
            Some(link) if !item.disabled => a([href(link.clone()), attrs, body]),
            _ => div([attrs, body]),
        }
    }

    /// The list interior for `query`.
    pub fn render_list(&self, query: &str) -> Node {
        let found = self.search(query);
        if found.is_empty() {
            return div([
                class("py-6 text-center text-sm"),
                role("status"),
                text(self.empty_message.clone()),
            ]);
        }
        let last = found.len() - 1;
        map(found.into_iter().enumerate(), |(n, (grp, hits))| {
            group([
                div([
                    role("group"),
                    aria("label", grp.heading.clone()),
                    class("overflow-hidden p-1 text-foreground"),
                    div([
                        class("px-2 py-1.5 text-xs font-medium text-muted-foreground"),
                        text(grp.heading.clone()),
                    ]),
                    map(hits, |item| self.item(item)),
                ]),
                if_with(n < last, || {
                    div([role("separator"), class("-mx-1 h-px bg-border")])
                }),
            ])
        })
    }
}

impl SwapWidget for Command {
    type State = ();
    const KIND: &'static str = "command";

    fn initial_state(&self) {}

    fn render(&self, region: &Region, _state: &()) -> Node {
        let list_id = region.child_id("list");
        region.container([
            class(cn!(
                "flex h-full w-full flex-col overflow-hidden rounded-md border bg-popover text-popover-foreground shadow-md",
                self.class
            )),
            div([
                class("flex items-center border-b px-3"),
                crate::icons::search("mr-2 h-4 w-4 shrink-0 opacity-50"),
                input([
                    type_("search"),
                    name("q"),
                    placeholder(self.placeholder.clone()),
                    autocomplete("off"),
                    role("combobox"),
                    aria_bool("expanded", true),
                    aria("controls", list_id.clone()),
                    class("flex h-10 w-full rounded-md bg-transparent py-3 text-sm outline-none placeholder:text-muted-foreground"),
                    hx_get(region.path("search")),
                    hx_target(format!("#{list_id}")),
                    hx_swap(Swap::InnerHtml),
                    hx_trigger("input changed delay:150ms, search"),
                ]),
            ]),
            div([
                id(list_id),
                role("listbox"),
                class("max-h-[300px] overflow-y-auto overflow-x-hidden"),
                self.render_list(""),
            ]),
        ])
    }
}
