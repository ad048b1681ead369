//! Breadcrumb trail

use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
    pub crumbs: Vec<Crumb>,
    /// Keep this many trailing crumbs and collapse the middle
    pub max_items: Option<usize>,
    pub class: String,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(mut self, label_text: impl Into<String>, target_href: impl Into<String>) -> Self {
        self.crumbs.push(Crumb {
            label: label_text.into(),
            href: Some(target_href.into()),
        });
        self
    }

    /// The current page; rendered without a link.
    pub fn page(mut self, label_text: impl Into<String>) -> Self {
        self.crumbs.push(Crumb {
            label: label_text.into(),
            href: None,
        });
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.max_items = Some(n.max(2));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// The root crumb, an ellipsis marker (`None`), then the tail.
    fn visible(&self) -> Vec<Option<&Crumb>> {
        match self.max_items {
            Some(limit) if self.crumbs.len() > limit => {
                let tail = &self.crumbs[self.crumbs.len() - (limit - 1)..];
                std::iter::once(self.crumbs.first())
                    .chain(std::iter::once(None))
                    .chain(tail.iter().map(Some))
                    .collect()
            }
            _ => self.crumbs.iter().map(Some).collect(),
        }
    }
}

impl Component for Breadcrumb {
    fn view(&self) -> Node {
        let shown = self.visible();
        let last = shown.len().saturating_sub(1);
        nav([
            aria("label", "breadcrumb"),
            if_(!self.class.is_empty(), class(self.class.clone())),
            ol([
                class("flex flex-wrap items-center gap-1.5 break-words text-sm text-muted-foreground sm:gap-2.5"),
                map(shown.into_iter().enumerate(), |(i, crumb)| {
                    group([
                        li([
                            class("inline-flex items-center gap-1.5"),
                            match crumb {
                                None => span([
                                    role("presentation"),
                                    aria("hidden", "true"),
                                    class("flex h-9 w-9 items-center justify-center"),
                                    crate::icons::more_horizontal("h-4 w-4"),
                                    span([class("sr-only"), text("More")]),
                                ]),
                                Some(Crumb { label: crumb_label, href: Some(link) }) if i != last => a([
                                    href(link.clone()),
                                    class("transition-colors hover:text-foreground"),
                                    text(crumb_label.clone()),
                                ]),
                                Some(Crumb { label: crumb_label, .. }) => span([
                                    role("link"),
                                    aria("disabled", "true"),
                                    aria("current", "page"),
                                    class("font-normal text-foreground"),
                                    text(crumb_label.clone()),
                                ]),
                            },
                        ]),
                        if_with(i != last, || {
                            li([
                                role("presentation"),
                                aria("hidden", "true"),
                                class("[&>svg]:h-3.5 [&>svg]:w-3.5"),
                                crate::icons::chevron_right(""),
                            ])
                        }),
                    ])
                }),
            ]),
        ])
    }
}
