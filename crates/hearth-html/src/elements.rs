//! Element shortcuts
//!
//! Each function is `el("tag", children)`. Names that collide with Rust
//! keywords or prelude items carry a trailing underscore (`main_`) or a
//! suffix (`text_el` for SVG `<text>`).

use crate::node::{el, raw, Node};

macro_rules! elements {
    ($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
                el($tag, children)
            }
        )*
    };
}

elements! {
    // Document
    html => "html",
    head => "head",
    body => "body",
    title_el => "title",
    meta => "meta",
    link => "link",
    script => "script",
    style_el => "style",
    template => "template",

    // Sectioning
    div => "div",
    span => "span",
    section => "section",
    header => "header",
    footer => "footer",
    main_ => "main",
    article => "article",
    nav => "nav",
    aside => "aside",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    p => "p",
    a => "a",
    pre => "pre",
    code => "code",
    kbd => "kbd",
    small => "small",
    strong => "strong",
    em => "em",
    br => "br",
    hr => "hr",
    img => "img",

    // Lists
    ol => "ol",
    ul => "ul",
    li => "li",

    // Forms
    form => "form",
    button => "button",
    input => "input",
    label => "label",
    textarea => "textarea",
    select => "select",
    option => "option",
    fieldset => "fieldset",
    legend => "legend",

    // Tables
    table => "table",
    caption => "caption",
    thead => "thead",
    tbody => "tbody",
    tfoot => "tfoot",
    tr => "tr",
    th => "th",
    td => "td",

    // SVG
    svg => "svg",
    g => "g",
    path => "path",
    circle => "circle",
    line => "line",
    polyline => "polyline",
    rect => "rect",
    /// SVG `<text>`; plain text content is [`crate::text`].
    text_el => "text",
}

pub fn doctype() -> Node {
    raw("<!DOCTYPE html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::class;
    use crate::node::text;

    #[test]
    fn shortcuts_use_their_tag() {
        assert_eq!(div([]).to_string(), "<div></div>");
        assert_eq!(main_([]).to_string(), "<main></main>");
        assert_eq!(text_el([text("1")]).to_string(), "<text>1</text>");
    }

    #[test]
    fn void_shortcuts_have_no_closing_tag() {
        assert_eq!(input([class("x")]).to_string(), r#"<input class="x">"#);
        assert_eq!(hr([]).to_string(), "<hr>");
        assert_eq!(img([]).to_string(), "<img>");
    }

    #[test]
    fn doctype_is_raw() {
        assert_eq!(doctype().to_string(), "<!DOCTYPE html>");
    }
}
