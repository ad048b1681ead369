//! Target regions and the swap-widget contract
//!
//! A [`Region`] is the ID-bearing element a widget owns on the page plus the
//! base path its routes live under. Every response for the widget re-emits
//! the region's wrapper so later `outerHTML` swaps still find it.

use hearth_html::prelude::*;

/// HTTP verb an interactive element uses to reach a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: String,
    base: String,
}

impl Region {
    pub fn new(id: impl Into<String>, base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            id: id.into(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `{prefix}/{widget}/{id}`, the conventional base for a widget instance.
    pub fn conventional(prefix: &str, widget: &str, id: impl Into<String>) -> Self {
        let id = id.into();
        let base = format!("{}/{}/{}", prefix.trim_end_matches('/'), widget, id);
        Self { id, base }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Route path for `action`.
    pub fn path(&self, action: &str) -> String {
        format!("{}/{}", self.base, action)
    }

    /// CSS selector for the region (`#id`).
    pub fn target(&self) -> String {
        format!("#{}", self.id)
    }

    /// Derived element ID, `{id}-{suffix}`.
    pub fn child_id(&self, suffix: &str) -> String {
        format!("{}-{}", self.id, suffix)
    }

    /// The region wrapper with the given children.
    pub fn container(&self, children: impl IntoIterator<Item = Node>) -> Node {
        div([id(self.id.clone())]).with(children)
    }

    /// The region with no children: `<div id="{id}"></div>`.
    pub fn empty(&self) -> Node {
        div([id(self.id.clone())])
    }

    /// Attributes that send `verb {base}/{action}` and swap the whole region.
    pub fn swap(&self, verb: Verb, action: &str) -> Node {
        let path = self.path(action);
        let request = match verb {
            Verb::Get => hx_get(path),
            Verb::Post => hx_post(path),
            Verb::Delete => hx_delete(path),
        };
        group([request, hx_target(self.target()), hx_swap(Swap::OuterHtml)])
    }

    pub fn post(&self, action: &str) -> Node {
        self.swap(Verb::Post, action)
    }

    pub fn get(&self, action: &str) -> Node {
        self.swap(Verb::Get, action)
    }
}

/// A widget whose region is re-rendered by server routes.
///
/// Handlers never render from live state: they mutate under a lock, take a
/// clone, and call [`SwapWidget::render`] on the clone.
pub trait SwapWidget: Send + Sync + 'static {
    type State: Clone + Send + Sync + 'static;

    /// Short widget name used in conventional paths and log fields.
    const KIND: &'static str;

    fn initial_state(&self) -> Self::State;

    /// The complete region for `state`, wrapper included.
    fn render(&self, region: &Region, state: &Self::State) -> Node;
}

/// Out-of-band fragment: an element that replaces whatever has the same ID.
pub fn oob(element_id: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    div([id(element_id), hx_swap_oob()]).with(children)
}

/// Out-of-band message for a validating interaction's feedback element.
///
/// Errors carry `role="alert"` and the destructive text class so they stand
/// out from success copy.
pub fn feedback(element_id: impl Into<String>, ok: bool, message: impl Into<String>) -> Node {
    oob(
        element_id,
        [
            aria("live", "polite"),
            data_state(if ok { "success" } else { "error" }),
            p([
                if_(!ok, role("alert")),
                class(cn!(
                    "text-sm font-medium",
                    cn_if(ok, "text-emerald-600", "text-destructive")
                )),
                text(message),
            ]),
        ],
    )
}
