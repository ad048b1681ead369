//! HTMX attribute vocabulary
//!
//! The `hx-*` attributes that drive fragment swaps, plus the `sse-connect`
//! attribute of the SSE extension.

use crate::node::{attr, bool_attr, Node};
use std::fmt;

/// How a response replaces its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swap {
    /// Replace the target element itself; the response must carry the ID.
    #[default]
    OuterHtml,
    /// Replace only the target's children.
    InnerHtml,
    BeforeEnd,
    AfterBegin,
    /// Swap nothing; used when only headers or out-of-band fragments matter.
    None,
}

impl Swap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Swap::OuterHtml => "outerHTML",
            Swap::InnerHtml => "innerHTML",
            Swap::BeforeEnd => "beforeend",
            Swap::AfterBegin => "afterbegin",
            Swap::None => "none",
        }
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn hx_get(path: impl Into<String>) -> Node {
    attr("hx-get", path)
}

pub fn hx_post(path: impl Into<String>) -> Node {
    attr("hx-post", path)
}

pub fn hx_put(path: impl Into<String>) -> Node {
    attr("hx-put", path)
}

pub fn hx_delete(path: impl Into<String>) -> Node {
    attr("hx-delete", path)
}

pub fn hx_target(selector: impl Into<String>) -> Node {
    attr("hx-target", selector)
}

pub fn hx_swap(mode: Swap) -> Node {
    attr("hx-swap", mode.as_str())
}

/// `hx-swap` with modifiers, e.g. `outerHTML swap:200ms`.
pub fn hx_swap_with(mode: Swap, modifiers: &str) -> Node {
    if modifiers.is_empty() {
        hx_swap(mode)
    } else {
        attr("hx-swap", format!("{} {}", mode.as_str(), modifiers))
    }
}

pub fn hx_trigger(spec: impl Into<String>) -> Node {
    attr("hx-trigger", spec)
}

/// `hx-vals` from a JSON value.
pub fn hx_vals(vals: serde_json::Value) -> Node {
    attr("hx-vals", vals.to_string())
}

/// `hx-vals` evaluated client-side (`js:{...}`).
pub fn hx_vals_js(expr: impl AsRef<str>) -> Node {
    attr("hx-vals", format!("js:{}", expr.as_ref()))
}

pub fn hx_include(selector: impl Into<String>) -> Node {
    attr("hx-include", selector)
}

pub fn hx_indicator(selector: impl Into<String>) -> Node {
    attr("hx-indicator", selector)
}

pub fn hx_swap_oob() -> Node {
    attr("hx-swap-oob", "true")
}

pub fn hx_ext(ext: impl Into<String>) -> Node {
    attr("hx-ext", ext)
}

/// `hx-on:{event}` inline handler.
pub fn hx_on(event: &str, script: impl Into<String>) -> Node {
    attr(format!("hx-on:{event}"), script)
}

pub fn hx_disabled_elt(selector: impl Into<String>) -> Node {
    attr("hx-disabled-elt", selector)
}

pub fn hx_boost() -> Node {
    bool_attr("hx-boost")
}

pub fn sse_connect(path: impl Into<String>) -> Node {
    attr("sse-connect", path)
}

/// Response header names understood by the HTMX client.
pub mod headers {
    pub const HX_TRIGGER: &str = "HX-Trigger";
    pub const HX_RESWAP: &str = "HX-Reswap";
    pub const HX_RETARGET: &str = "HX-Retarget";
    pub const HX_REQUEST: &str = "HX-Request";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::button;
    use serde_json::json;

    #[test]
    fn swap_modes_match_htmx_names() {
        assert_eq!(Swap::OuterHtml.to_string(), "outerHTML");
        assert_eq!(Swap::InnerHtml.to_string(), "innerHTML");
        assert_eq!(Swap::BeforeEnd.to_string(), "beforeend");
        assert_eq!(Swap::AfterBegin.to_string(), "afterbegin");
        assert_eq!(Swap::None.to_string(), "none");
    }

    #[test]
    fn vals_are_escaped_json() {
        let node = button([hx_post("/x"), hx_vals(json!({"item": "a"}))]);
        assert_eq!(
            node.to_string(),
            r#"<button hx-post="/x" hx-vals="{&quot;item&quot;:&quot;a&quot;}"></button>"#
        );
    }

    #[test]
    fn swap_modifiers_are_appended() {
        let node = button([hx_swap_with(Swap::OuterHtml, "swap:200ms")]);
        assert_eq!(
            node.to_string(),
            r#"<button hx-swap="outerHTML swap:200ms"></button>"#
        );
    }

    #[test]
    fn hx_on_builds_event_key() {
        let node = button([hx_on("click", "go()")]);
        assert_eq!(node.to_string(), r#"<button hx-on:click="go()"></button>"#);
    }
}
