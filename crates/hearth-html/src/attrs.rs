//! Attribute shortcuts
//!
//! Valued attributes take anything string-like; boolean attributes take no
//! argument and serialize name-only.

use crate::node::{attr, bool_attr, Node};

macro_rules! valued {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $name(value: impl Into<String>) -> Node {
                attr($key, value)
            }
        )*
    };
}

macro_rules! boolean {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $name() -> Node {
                bool_attr($key)
            }
        )*
    };
}

valued! {
    class => "class",
    id => "id",
    href => "href",
    type_ => "type",
    name => "name",
    value => "value",
    placeholder => "placeholder",
    for_ => "for",
    role => "role",
    target => "target",
    src => "src",
    alt => "alt",
    style => "style",
    method => "method",
    action => "action",
    lang => "lang",
    charset => "charset",
    title => "title",
    rel => "rel",
    content => "content",
    autocomplete => "autocomplete",
    inputmode => "inputmode",
    pattern => "pattern",
    width => "width",
    height => "height",
    view_box => "viewBox",
    fill => "fill",
    stroke => "stroke",
    d => "d",
}

boolean! {
    disabled => "disabled",
    checked => "checked",
    required => "required",
    readonly => "readonly",
    multiple => "multiple",
    autofocus => "autofocus",
    selected => "selected",
    hidden => "hidden",
}

pub fn tab_index(index: i32) -> Node {
    attr("tabindex", index.to_string())
}

pub fn max_length(n: usize) -> Node {
    attr("maxlength", n.to_string())
}

pub fn rows(n: usize) -> Node {
    attr("rows", n.to_string())
}

pub fn min(v: impl ToString) -> Node {
    attr("min", v.to_string())
}

pub fn max(v: impl ToString) -> Node {
    attr("max", v.to_string())
}

pub fn step(v: impl ToString) -> Node {
    attr("step", v.to_string())
}

/// `data-{key}="value"`
pub fn data(key: &str, value: impl Into<String>) -> Node {
    attr(format!("data-{key}"), value)
}

/// `aria-{key}="value"`
pub fn aria(key: &str, value: impl Into<String>) -> Node {
    attr(format!("aria-{key}"), value)
}

/// `data-state`, the attribute CSS keys off for open/closed/checked styling.
pub fn data_state(state: impl Into<String>) -> Node {
    data("state", state)
}

/// `true`/`false` string for ARIA boolean attributes.
pub fn aria_bool(key: &str, v: bool) -> Node {
    aria(key, if v { "true" } else { "false" })
}
