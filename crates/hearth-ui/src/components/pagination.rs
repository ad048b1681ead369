//! Page links with ellipses
//!
//! Links are plain anchors built from an href template; pair them with
//! `hx-boost` on a parent when the page body should swap in place.

use super::button::{button_classes, ButtonSize, ButtonVariant};
use hearth_html::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Pages to show around `current` (1-based). First and last are always
/// present; gaps wider than one page collapse into an ellipsis.
pub fn page_window(current: usize, total: usize, siblings: usize) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    // first + last + current + both sibling runs + two ellipses
    if total <= siblings * 2 + 5 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let lo = current.saturating_sub(siblings).max(2);
    let hi = (current + siblings).min(total - 1);
    let mut slots = vec![PageSlot::Page(1)];
    match lo {
        2 => {}
        3 => slots.push(PageSlot::Page(2)),
        _ => slots.push(PageSlot::Ellipsis),
    }
    slots.extend((lo..=hi).map(PageSlot::Page));
    match total - 1 - hi {
        0 => {}
        1 => slots.push(PageSlot::Page(total - 1)),
        _ => slots.push(PageSlot::Ellipsis),
    }
    slots.push(PageSlot::Page(total));
    slots
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub current: usize,
    pub total: usize,
    pub siblings: usize,
    /// Link template; `{page}` is replaced by the page number
    pub href_template: String,
    pub class: String,
}

impl Pagination {
    pub fn new(current: usize, total: usize, href_template: impl Into<String>) -> Self {
        Self {
            current,
            total,
            siblings: 1,
            href_template: href_template.into(),
            class: String::new(),
        }
    }

    pub fn siblings(mut self, n: usize) -> Self {
        self.siblings = n;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn href_for(&self, page: usize) -> String {
        self.href_template.replace("{page}", &page.to_string())
    }

    fn edge(&self, page: Option<usize>, forward: bool) -> Node {
        let (caption, icon, aria_label) = if forward {
            ("Next", crate::icons::chevron_right("h-4 w-4"), "Go to next page")
        } else {
            ("Previous", crate::icons::chevron_left("h-4 w-4"), "Go to previous page")
        };
        let body = if forward {
            group([span([text(caption)]), icon])
        } else {
            group([icon, span([text(caption)])])
        };
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Default, "gap-1");
        li([match page {
            Some(target_page) => a([
                href(self.href_for(target_page)),
                aria("label", aria_label),
                class(classes),
                body,
            ]),
            None => span([
                aria("disabled", "true"),
                aria("label", aria_label),
                class(cn!(classes, "pointer-events-none opacity-50")),
                body,
            ]),
        }])
    }
}

impl Component for Pagination {
    fn view(&self) -> Node {
        let current = self.current.clamp(1, self.total.max(1));
        nav([
            role("navigation"),
            aria("label", "pagination"),
            class(cn!("mx-auto flex w-full justify-center", self.class)),
            ul([
                class("flex flex-row items-center gap-1"),
                self.edge((current > 1).then(|| current - 1), false),
                map(page_window(current, self.total, self.siblings), |slot| match slot {
                    PageSlot::Page(n) => {
                        let active = n == current;
                        li([a([
                            href(self.href_for(n)),
                            if_(active, aria("current", "page")),
                            class(button_classes(
                                if active {
                                    ButtonVariant::Outline
                                } else {
                                    ButtonVariant::Ghost
                                },
                                ButtonSize::Icon,
                                "",
                            )),
                            text(n.to_string()),
                        ])])
                    }
                    PageSlot::Ellipsis => li([span([
                        aria("hidden", "true"),
                        class("flex h-9 w-9 items-center justify-center"),
                        crate::icons::more_horizontal("h-4 w-4"),
                        span([class("sr-only"), text("More pages")]),
                    ])]),
                }),
                self.edge((current < self.total).then(|| current + 1), true),
            ]),
        ])
    }
}
