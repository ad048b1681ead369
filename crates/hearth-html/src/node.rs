//! HTML node tree and streaming serializer
//!
//! A [`Node`] is a value: building one has no side effects, and nothing is
//! written until [`Node::render`] (or `Display`) walks the tree. Attributes
//! may appear anywhere in an element's child list; serialization pulls them
//! forward into the opening tag in source order.

use crate::escape::{write_escaped_attr, write_escaped_text};
use std::borrow::Cow;
use std::fmt;
use std::io;

/// Elements that never get a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Attribute(Attribute),
    Text(String),
    Raw(String),
    Group(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Cow<'static, str>,
    pub children: Vec<Node>,
}

/// A single `key="value"` pair, or a bare boolean attribute when `value` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: Cow<'static, str>,
    pub value: Option<String>,
}

impl Element {
    pub fn is_void(&self) -> bool {
        is_void(&self.tag)
    }

    /// Attributes in source order, looking through nested groups.
    pub fn attributes(&self) -> Vec<&Attribute> {
        let mut out = Vec::new();
        collect_attributes(&self.children, &mut out);
        out
    }
}

fn collect_attributes<'a>(children: &'a [Node], out: &mut Vec<&'a Attribute>) {
    for child in children {
        match child {
            Node::Attribute(a) => out.push(a),
            Node::Group(nested) => collect_attributes(nested, out),
            _ => {}
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

impl Node {
    pub fn empty() -> Self {
        Node::Group(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Node::Group(children) => children.iter().all(Node::is_empty),
            Node::Text(s) | Node::Raw(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Look up the first attribute with `key` on an element.
    pub fn attr(&self, key: &str) -> Option<&Attribute> {
        match self {
            Node::Element(el) => el.attributes().into_iter().find(|a| a.key == key),
            _ => None,
        }
    }

    /// Append children to an element or group. Other variants are wrapped
    /// into a group.
    pub fn with(self, extra: impl IntoIterator<Item = Node>) -> Node {
        match self {
            Node::Element(mut el) => {
                el.children.extend(extra);
                Node::Element(el)
            }
            Node::Group(mut children) => {
                children.extend(extra);
                Node::Group(children)
            }
            other => {
                let mut children = vec![other];
                children.extend(extra);
                Node::Group(children)
            }
        }
    }

    /// Stream the serialized HTML into `w`.
    pub fn render<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        let mut adapter = IoAdapter {
            inner: w,
            error: None,
        };
        match write_node(self, &mut adapter) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(adapter
                .error
                .take()
                .unwrap_or_else(|| io::Error::other("formatter error while rendering node"))),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Group(children)
    }
}

impl From<Option<Node>> for Node {
    fn from(node: Option<Node>) -> Self {
        node.unwrap_or_else(Node::empty)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Group(iter.into_iter().collect())
    }
}

struct IoAdapter<'a, W: io::Write> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

fn write_node<W: fmt::Write>(node: &Node, w: &mut W) -> fmt::Result {
    match node {
        Node::Element(el) => write_element(el, w),
        // A stray attribute outside an element has nowhere to go.
        Node::Attribute(_) => Ok(()),
        Node::Text(s) => write_escaped_text(w, s),
        Node::Raw(s) => w.write_str(s),
        Node::Group(children) => children.iter().try_for_each(|c| write_node(c, w)),
    }
}

fn write_element<W: fmt::Write>(el: &Element, w: &mut W) -> fmt::Result {
    w.write_char('<')?;
    w.write_str(&el.tag)?;
    write_attributes(&el.children, w)?;
    w.write_char('>')?;

    if el.is_void() {
        return Ok(());
    }

    write_content(&el.children, w)?;

    w.write_str("</")?;
    w.write_str(&el.tag)?;
    w.write_char('>')
}

fn write_attributes<W: fmt::Write>(children: &[Node], w: &mut W) -> fmt::Result {
    for child in children {
        match child {
            Node::Attribute(attr) => {
                w.write_char(' ')?;
                w.write_str(&attr.key)?;
                if let Some(value) = &attr.value {
                    w.write_str("=\"")?;
                    write_escaped_attr(w, value)?;
                    w.write_char('"')?;
                }
            }
            Node::Group(nested) => write_attributes(nested, w)?,
            _ => {}
        }
    }
    Ok(())
}

fn write_content<W: fmt::Write>(children: &[Node], w: &mut W) -> fmt::Result {
    for child in children {
        match child {
            Node::Attribute(_) => {}
            Node::Group(nested) => write_content(nested, w)?,
            other => write_node(other, w)?,
        }
    }
    Ok(())
}

pub fn el(tag: impl Into<Cow<'static, str>>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Element(Element {
        tag: tag.into(),
        children: children.into_iter().collect(),
    })
}

pub fn attr(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Node {
    Node::Attribute(Attribute {
        key: key.into(),
        value: Some(value.into()),
    })
}

/// Name-only attribute such as `disabled`.
pub fn bool_attr(key: impl Into<Cow<'static, str>>) -> Node {
    Node::Attribute(Attribute {
        key: key.into(),
        value: None,
    })
}

pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

pub fn raw(s: impl Into<String>) -> Node {
    Node::Raw(s.into())
}

pub fn group(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Group(children.into_iter().collect())
}

/// `node` when `cond` holds, otherwise nothing (not even attributes).
pub fn if_(cond: bool, node: Node) -> Node {
    if cond {
        node
    } else {
        Node::empty()
    }
}

/// Lazy form of [`if_`] for nodes that are expensive to build.
pub fn if_with(cond: bool, f: impl FnOnce() -> Node) -> Node {
    if cond {
        f()
    } else {
        Node::empty()
    }
}

/// Render any iterator of items into a group.
pub fn map<T>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> Node) -> Node {
    Node::Group(items.into_iter().map(f).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_with_attributes_and_text() {
        let node = el(
            "a",
            [attr("href", "/x"), text("go"), attr("class", "link")],
        );
        assert_eq!(node.to_string(), r#"<a href="/x" class="link">go</a>"#);
    }

    #[test]
    fn boolean_attribute_has_no_value() {
        let node = el("input", [bool_attr("disabled"), attr("type", "text")]);
        assert_eq!(node.to_string(), r#"<input disabled type="text">"#);
    }

    #[test]
    fn void_element_drops_content() {
        let node = el("br", [text("ignored")]);
        assert_eq!(node.to_string(), "<br>");
    }

    #[test]
    fn void_detection_is_case_insensitive() {
        assert!(is_void("IMG"));
        assert!(!is_void("div"));
    }

    #[test]
    fn if_false_emits_nothing() {
        let node = el("div", [if_(false, attr("hidden", "")), if_(false, text("x"))]);
        assert_eq!(node.to_string(), "<div></div>");
    }

    #[test]
    fn if_true_attribute_group_is_hoisted() {
        let node = el(
            "div",
            [
                text("body"),
                group([attr("id", "a"), attr("class", "b")]),
            ],
        );
        assert_eq!(node.to_string(), r#"<div id="a" class="b">body</div>"#);
    }

    #[test]
    fn mixed_group_splits_attributes_from_content() {
        let node = el("p", [group([text("a"), attr("id", "g")]), text("b")]);
        assert_eq!(node.to_string(), r#"<p id="g">ab</p>"#);
    }

    #[test]
    fn empty_group_renders_nothing() {
        let node = el("p", [Node::empty(), text("x")]);
        assert_eq!(node.to_string(), "<p>x</p>");
    }

    #[test]
    fn raw_is_not_escaped() {
        let node = el("div", [raw("<svg></svg>"), text("<b>")]);
        assert_eq!(node.to_string(), "<div><svg></svg>&lt;b&gt;</div>");
    }

    #[test]
    fn duplicate_attributes_are_kept_in_order() {
        let node = el("div", [attr("class", "a"), attr("class", "b")]);
        assert_eq!(node.to_string(), r#"<div class="a" class="b"></div>"#);
    }

    #[test]
    fn stray_attribute_renders_nothing() {
        assert_eq!(attr("id", "x").to_string(), "");
    }

    #[test]
    fn render_streams_to_io_writer() {
        let node = group([el("b", [text("1")]), el("i", [text("2")])]);
        let mut out = Vec::new();
        node.render(&mut out).unwrap();
        assert_eq!(out, b"<b>1</b><i>2</i>");
    }

    #[test]
    fn render_surfaces_writer_errors() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = el("div", [text("x")]).render(&mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn with_appends_to_element() {
        let node = el("ul", []).with([el("li", [text("a")])]);
        assert_eq!(node.to_string(), "<ul><li>a</li></ul>");
    }

    #[test]
    fn attr_lookup_finds_first_match() {
        let node = el("div", [attr("id", "one"), attr("id", "two")]);
        assert_eq!(node.attr("id").and_then(|a| a.value.as_deref()), Some("one"));
        assert!(node.attr("class").is_none());
    }

    #[test]
    fn is_empty_checks_nested_groups() {
        assert!(group([Node::empty(), text("")]).is_empty());
        assert!(!group([text("x")]).is_empty());
    }
}
