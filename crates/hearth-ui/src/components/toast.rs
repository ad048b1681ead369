//! Toast container (sonner)
//!
//! The container keeps an ordered list of toasts per region. Every render
//! computes each toast's remaining lifetime from its creation time, so a
//! re-render caused by another toast does not restart the timers.

use super::button::{button_classes, ButtonSize, ButtonVariant};
use crate::region::{Region, SwapWidget};
use chrono::{DateTime, Utc};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Info,
    Warning,
    Error,
    Loading,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
            ToastKind::Loading => "loading",
        }
    }

    fn icon(&self) -> Node {
        match self {
            ToastKind::Default => Node::empty(),
            ToastKind::Success => crate::icons::circle_check("h-4 w-4"),
            ToastKind::Info => crate::icons::info("h-4 w-4"),
            ToastKind::Warning => crate::icons::alert_triangle("h-4 w-4"),
            ToastKind::Error => crate::icons::circle_x("h-4 w-4"),
            ToastKind::Loading => crate::icons::loader("h-4 w-4 animate-spin"),
        }
    }

    fn rich_classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "border-emerald-200 bg-emerald-50 text-emerald-700",
            ToastKind::Info => "border-blue-200 bg-blue-50 text-blue-700",
            ToastKind::Warning => "border-amber-200 bg-amber-50 text-amber-700",
            ToastKind::Error => "border-red-200 bg-red-50 text-red-700",
            ToastKind::Default | ToastKind::Loading => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastAction {
    pub label: String,
    /// Client event fired (`HX-Trigger`) when the action is taken
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub duration_ms: Option<u64>,
    pub action: Option<ToastAction>,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// A toast with a fresh v4 UUID, created now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: ToastKind::Default,
            title: title.into(),
            description: None,
            duration_ms: None,
            action: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, toast_id: impl Into<String>) -> Self {
        self.id = toast_id.into();
        self
    }

    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn action(mut self, label: impl Into<String>, event: impl Into<String>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            event: event.into(),
        });
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Milliseconds left before auto-dismiss at `now`, or `None` when the
    /// toast stays until dismissed.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> Option<u64> {
        if self.kind == ToastKind::Loading {
            return None;
        }
        let duration = self.duration_ms?;
        let age = now.signed_duration_since(self.created_at).num_milliseconds().max(0);
        let age = u64::try_from(age).unwrap_or(0);
        Some(duration.saturating_sub(age))
    }
}

/// Client-supplied toast IDs end up in URLs and element IDs.
pub fn is_valid_toast_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= 64
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl ToastList {
    /// Append `toast`; a toast with the same ID is replaced in place.
    pub fn add(&mut self, toast: Toast) {
        match self.toasts.iter_mut().find(|t| t.id == toast.id) {
            Some(existing) => *existing = toast,
            None => self.toasts.push(toast),
        }
    }

    /// Remove by ID. Missing IDs are fine; returns whether anything was removed.
    pub fn dismiss(&mut self, toast_id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != toast_id);
        self.toasts.len() != before
    }

    /// Remove the toast and hand back its action, if it has one.
    pub fn take_action(&mut self, toast_id: &str) -> Option<ToastAction> {
        let index = self.toasts.iter().position(|t| t.id == toast_id)?;
        self.toasts.remove(index).action
    }

    /// The newest `limit` toasts, oldest first.
    pub fn visible(&self, limit: usize) -> &[Toast] {
        let start = self.toasts.len().saturating_sub(limit);
        &self.toasts[start..]
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }

    fn is_top(&self) -> bool {
        matches!(
            self,
            ToastPosition::TopLeft | ToastPosition::TopCenter | ToastPosition::TopRight
        )
    }

    fn classes(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-0 left-0",
            ToastPosition::TopCenter => "top-0 left-1/2 -translate-x-1/2",
            ToastPosition::TopRight => "top-0 right-0",
            ToastPosition::BottomLeft => "bottom-0 left-0",
            ToastPosition::BottomCenter => "bottom-0 left-1/2 -translate-x-1/2",
            ToastPosition::BottomRight => "bottom-0 right-0",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sonner {
    pub position: ToastPosition,
    /// How many of the newest toasts are rendered
    pub visible: usize,
    pub default_duration_ms: u64,
    pub rich_colors: bool,
    pub close_button: bool,
    pub class: String,
}

impl Default for Sonner {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            visible: 3,
            default_duration_ms: 4000,
            rich_colors: false,
            close_button: true,
            class: String::new(),
        }
    }
}

impl Sonner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn visible(mut self, limit: usize) -> Self {
        self.visible = limit.max(1);
        self
    }

    pub fn default_duration_ms(mut self, ms: u64) -> Self {
        self.default_duration_ms = ms;
        self
    }

    pub fn rich_colors(mut self, on: bool) -> Self {
        self.rich_colors = on;
        self
    }

    pub fn close_button(mut self, on: bool) -> Self {
        self.close_button = on;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Page-level mount: a stable element holding the SSE connection that
    /// wraps the swappable region, so list swaps never reconnect the stream.
    pub fn mount(&self, region: &Region, state: &ToastList) -> Node {
        div([
            id(region.child_id("stream")),
            hx_ext("sse"),
            sse_connect(region.path("stream")),
            self.render(region, state),
        ])
    }

    /// Attributes that delete `toast_id` and swap the region.
    fn dismiss_attrs(&self, region: &Region, toast_id: &str) -> Node {
        group([
            hx_delete(format!("{}?id={}", region.path("dismiss"), toast_id)),
            hx_target(region.target()),
            hx_swap(Swap::OuterHtml),
        ])
    }

    fn toast(&self, region: &Region, toast: &Toast, now: DateTime<Utc>) -> Node {
        let kind_classes = if self.rich_colors {
            toast.kind.rich_classes()
        } else {
            ""
        };
        li([
            id(region.child_id(&format!("toast-{}", toast.id))),
            role("status"),
            aria("live", "polite"),
            aria("atomic", "true"),
            data("type", toast.kind.as_str()),
            data_state("open"),
            class(cn!(
                "pointer-events-auto relative flex w-full items-center gap-3 rounded-md border bg-background p-4 text-foreground shadow-lg",
                kind_classes
            )),
            toast.kind.icon(),
            div([
                class("grid flex-1 gap-1"),
                div([class("text-sm font-semibold"), text(toast.title.clone())]),
                match &toast.description {
                    Some(copy) => div([class("text-sm opacity-90"), text(copy.clone())]),
                    None => Node::empty(),
                },
            ]),
            match &toast.action {
                Some(act) => button([
                    type_("button"),
                    class(button_classes(ButtonVariant::Default, ButtonSize::Sm, "h-6 px-2")),
                    region.post("action"),
                    hx_vals(json!({ "id": toast.id })),
                    text(act.label.clone()),
                ]),
                None => Node::empty(),
            },
            if_with(self.close_button, || {
                button([
                    type_("button"),
                    class("absolute right-1 top-1 rounded-md p-1 text-foreground/50 opacity-70 hover:text-foreground hover:opacity-100"),
                    aria("label", "Close toast"),
                    self.dismiss_attrs(region, &toast.id),
                    crate::icons::x("h-3 w-3"),
                ])
            }),
            match toast.remaining_ms(now) {
                Some(0) => div([
                    class("hidden"),
                    self.dismiss_attrs(region, &toast.id),
                    hx_trigger("load"),
                ]),
                Some(left) => div([
                    class("hidden"),
                    self.dismiss_attrs(region, &toast.id),
                    hx_trigger(format!("load delay:{left}ms")),
                ]),
                None => Node::empty(),
            },
        ])
    }

    /// The region as of `now`.
    pub fn render_at(&self, region: &Region, state: &ToastList, now: DateTime<Utc>) -> Node {
        region.container([
            class(cn!(
                "fixed z-[100] flex max-h-screen w-full flex-col gap-2 p-4 sm:max-w-[420px]",
                self.position.classes(),
                self.class
            )),
            aria("label", "Notifications"),
            data("position", self.position.as_str()),
            div([
                class("hidden"),
                region.get("list"),
                hx_trigger("sse:toastUpdate"),
            ]),
            ol([
                class(cn!(
                    "flex flex-col gap-2",
                    cn_if(self.position.is_top(), "flex-col-reverse", "")
                )),
                map(state.visible(self.visible), |t| self.toast(region, t, now)),
            ]),
        ])
    }
}

impl SwapWidget for Sonner {
    type State = ToastList;
    const KIND: &'static str = "sonner";

    fn initial_state(&self) -> ToastList {
        ToastList::default()
    }

    fn render(&self, region: &Region, state: &ToastList) -> Node {
        self.render_at(region, state, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn lifecycle_add_then_dismiss() {
        let mut list = ToastList::default();
        list.add(Toast::new("Saved").with_id("T1").duration_ms(3000));
        assert_eq!(list.len(), 1);

        assert!(list.dismiss("T1"));
        assert!(list.is_empty());
        assert!(!list.dismiss("T1"));
    }

    #[test]
    fn add_with_existing_id_replaces_in_place() {
        let mut list = ToastList::default();
        list.add(Toast::new("a").with_id("one"));
        list.add(Toast::new("b").with_id("two"));
        list.add(Toast::new("Uploaded").with_id("one").kind(ToastKind::Success));

        assert_eq!(list.len(), 2);
        assert_eq!(list.toasts[0].title, "Uploaded");
        assert_eq!(list.toasts[0].kind, ToastKind::Success);
    }

    #[test]
    fn take_action_removes_toast() {
        let mut list = ToastList::default();
        list.add(Toast::new("Deleted").with_id("t").action("Undo", "undo-delete"));
        let act = list.take_action("t");
        assert_eq!(act.map(|a| a.event), Some("undo-delete".to_string()));
        assert!(list.is_empty());
        assert_eq!(list.take_action("t"), None);
    }

    #[test]
    fn visible_keeps_newest() {
        let mut list = ToastList::default();
        for n in 0..5 {
            list.add(Toast::new(n.to_string()).with_id(format!("t{n}")));
        }
        let ids: Vec<&str> = list.visible(3).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t3", "t4"]);
        assert_eq!(list.visible(10).len(), 5);
    }

    #[test]
    fn remaining_counts_down_from_creation() {
        let toast = Toast::new("x").duration_ms(3000).created_at(at(0));
        assert_eq!(toast.remaining_ms(at(0)), Some(3000));
        assert_eq!(toast.remaining_ms(at(1200)), Some(1800));
        assert_eq!(toast.remaining_ms(at(5000)), Some(0));
    }

    #[test]
    fn loading_and_unbounded_toasts_never_expire() {
        let loading = Toast::new("x").kind(ToastKind::Loading).duration_ms(10).created_at(at(0));
        assert_eq!(loading.remaining_ms(at(99_999)), None);
        assert_eq!(Toast::new("y").remaining_ms(Utc::now()), None);
    }

    #[test]
    fn client_ids_are_restricted() {
        assert!(is_valid_toast_id("T1"));
        assert!(is_valid_toast_id("toast_2-b"));
        assert!(!is_valid_toast_id(""));
        assert!(!is_valid_toast_id("a b"));
        assert!(!is_valid_toast_id("x\"><script>"));
    }

    #[test]
    fn render_schedules_dismiss_with_remaining_time() {
        let sonner = Sonner::new();
        let region = Region::new("toasts", "/toast");
        let mut list = ToastList::default();
        list.add(Toast::new("Event created").with_id("T1").duration_ms(3000).created_at(at(0)));

        let html = sonner.render_at(&region, &list, at(1000)).to_string();
        assert!(html.contains(r#"<li id="toasts-toast-T1" role="status""#));
        assert!(html.contains(r#"hx-delete="/toast/dismiss?id=T1""#));
        assert!(html.contains(r#"hx-trigger="load delay:2000ms""#));
        assert!(html.contains(r#"hx-get="/toast/list""#));
        assert!(html.contains(r#"hx-trigger="sse:toastUpdate""#));
    }

    #[test]
    fn empty_list_renders_empty_ol() {
        let sonner = Sonner::new();
        let html = sonner
            .render_at(&Region::new("toasts", "/toast"), &ToastList::default(), at(0))
            .to_string();
        assert!(html.contains(r#"<ol class="flex flex-col gap-2"></ol>"#));
    }

    #[test]
    fn mount_wraps_region_in_stream_element() {
        let sonner = Sonner::new().position(ToastPosition::TopCenter);
        let html = sonner
            .mount(&Region::new("toasts", "/toast"), &ToastList::default())
            .to_string();
        assert!(html.starts_with(r#"<div id="toasts-stream" hx-ext="sse" sse-connect="/toast/stream"><div id="toasts""#));
        assert!(html.contains(r#"data-position="top-center""#));
    }
}
