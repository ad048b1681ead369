//! Toast container routes and the server-push hub

use super::Mount;
use crate::error::{Result, WebError};
use crate::events::{sse_stream, Hub, TOAST_UPDATE};
use crate::fragment::Fragment;
use crate::params::{lenient, Params};
use crate::store::Store;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::Router;
use hearth_html::Node;
use hearth_ui::components::toast::is_valid_toast_id;
use hearth_ui::components::{Sonner, Toast, ToastKind, ToastList};
use hearth_ui::Region;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// A toast container plus the hub its stream listens on.
#[derive(Clone)]
pub struct ToastMount {
    mount: Mount<Sonner>,
    hub: Hub,
    keepalive: Duration,
}

impl ToastMount {
    pub fn new(
        store: Store<ToastList>,
        widget: Sonner,
        region: Region,
        hub: Hub,
        keepalive: Duration,
    ) -> Self {
        Self {
            mount: Mount::new(store, widget, region),
            hub,
            keepalive,
        }
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// The page-level element: the SSE connection wrapping the region.
    pub fn page(&self) -> Node {
        let state = self.mount.snapshot();
        self.mount.widget.mount(&self.mount.region, &state)
    }

    /// Add a toast from server code and tell connected clients to refetch.
    pub fn push(&self, toast: Toast) -> ToastList {
        let toast_id = toast.id.clone();
        let state = self.mount.update("add", |_, s| s.add(toast));
        self.notify("add", &toast_id);
        state
    }

    fn notify(&self, what: &str, toast_id: &str) {
        self.hub
            .publish(self.mount.id(), TOAST_UPDATE, format!("{what}:{toast_id}"));
    }
}

#[derive(Debug, Deserialize)]
struct AddToast {
    id: Option<String>,
    #[serde(default)]
    kind: ToastKind,
    title: String,
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    duration_ms: Option<u64>,
    action_label: Option<String>,
    action_event: Option<String>,
}

impl AddToast {
    fn into_toast(self, default_duration_ms: u64) -> Result<Toast> {
        let mut toast = Toast::new(self.title).kind(self.kind);
        if let Some(requested) = self.id.filter(|i| !i.is_empty()) {
            if !is_valid_toast_id(&requested) {
                return Err(WebError::BadRequest(format!("invalid toast id: {requested}")));
            }
            toast = toast.with_id(requested);
        }
        if let Some(copy) = self.description.filter(|d| !d.trim().is_empty()) {
            toast = toast.description(copy);
        }
        match self.duration_ms {
            Some(ms) => toast = toast.duration_ms(ms),
            None if self.kind != ToastKind::Loading => {
                toast = toast.duration_ms(default_duration_ms)
            }
            None => {}
        }
        if let (Some(action_label), Some(event)) = (self.action_label, self.action_event) {
            toast = toast.action(action_label, event);
        }
        Ok(toast)
    }
}

#[derive(Debug, Deserialize)]
struct ToastId {
    id: String,
}

pub fn routes(toasts: ToastMount) -> Router {
    let mount = &toasts.mount;
    Router::new()
        .route(&mount.path("list"), get(list))
        .route(&mount.path("add"), post(add))
        .route(&mount.path("dismiss"), delete(dismiss))
        .route(&mount.path("action"), post(action))
        .route(&mount.path("stream"), get(stream))
        .with_state(toasts)
}

async fn list(State(toasts): State<ToastMount>) -> Result<Fragment> {
    let state = toasts.mount.snapshot();
    Ok(toasts.mount.fragment(&state))
}

async fn add(State(toasts): State<ToastMount>, Params(req): Params<AddToast>) -> Result<Fragment> {
    let toast = req.into_toast(toasts.mount.widget.default_duration_ms)?;
    info!(id = %toast.id, kind = toast.kind.as_str(), "Toast added");
    let state = toasts.push(toast);
    Ok(toasts.mount.fragment(&state))
}

/// Missing IDs succeed silently.
async fn dismiss(State(toasts): State<ToastMount>, Params(req): Params<ToastId>) -> Result<Fragment> {
    let (removed, state) = toasts.mount.update_with("dismiss", |_, s| s.dismiss(&req.id));
    if removed {
        toasts.notify("dismiss", &req.id);
    }
    Ok(toasts.mount.fragment(&state))
}

async fn action(State(toasts): State<ToastMount>, Params(req): Params<ToastId>) -> Result<Fragment> {
    let (taken, state) = toasts.mount.update_with("action", |_, s| s.take_action(&req.id));
    let fragment = toasts.mount.fragment(&state);
    Ok(match taken {
        Some(act) => {
            toasts.notify("dismiss", &req.id);
            fragment.trigger(act.event)
        }
        None => fragment,
    })
}

async fn stream(State(toasts): State<ToastMount>) -> impl IntoResponse {
    sse_stream(&toasts.hub, toasts.mount.id(), toasts.keepalive)
}
