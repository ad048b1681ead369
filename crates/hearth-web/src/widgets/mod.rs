//! Route registration for interactive widgets
//!
//! Every module exposes `routes(store, widget, region) -> Router`. Routes
//! are registered at `region.path(action)`; merge the routers of every
//! widget on the page into the application router.

mod alert_dialog;
mod calendar;
mod carousel;
mod chart;
mod command;
mod disclosure;
mod floating;
mod input_otp;
mod menu;
mod overlay;
mod sidebar;
mod slider;
mod table;
mod tabs;
mod toast;

use crate::fragment::Fragment;
use crate::store::Store;
use hearth_ui::{Region, SwapWidget};
use std::sync::Arc;
use tracing::debug;

pub use alert_dialog::routes as alert_dialog_routes;
pub use calendar::routes as calendar_routes;
pub use carousel::routes as carousel_routes;
pub use chart::routes as chart_routes;
pub use command::routes as command_routes;
pub use disclosure::{accordion_routes, collapsible_routes};
pub use floating::routes as floating_routes;
pub use input_otp::routes as input_otp_routes;
pub use menu::{menu_routes, menubar_routes};
pub use overlay::routes as overlay_routes;
pub use sidebar::{cookie_value, routes as sidebar_routes};
pub use slider::routes as slider_routes;
pub use table::routes as table_routes;
pub use tabs::routes as tabs_routes;
pub use toast::{routes as toast_routes, ToastMount};

/// A widget instance bound to its region and state store; the axum state of
/// its routes.
pub struct Mount<W: SwapWidget> {
    pub widget: Arc<W>,
    pub region: Arc<Region>,
    pub store: Store<W::State>,
}

impl<W: SwapWidget> Clone for Mount<W> {
    fn clone(&self) -> Self {
        Self {
            widget: Arc::clone(&self.widget),
            region: Arc::clone(&self.region),
            store: self.store.clone(),
        }
    }
}

impl<W: SwapWidget> Mount<W> {
    pub fn new(store: Store<W::State>, widget: W, region: Region) -> Self {
        Self {
            widget: Arc::new(widget),
            region: Arc::new(region),
            store,
        }
    }

    pub fn id(&self) -> &str {
        self.region.id()
    }

    pub fn path(&self, action: &str) -> String {
        self.region.path(action)
    }

    pub fn snapshot(&self) -> W::State {
        self.store
            .snapshot(self.region.id(), || self.widget.initial_state())
    }

    /// Apply `f` and return the resulting state; `f`'s own result is dropped.
    pub fn update<R>(&self, action: &str, f: impl FnOnce(&W, &mut W::State) -> R) -> W::State {
        self.update_with(action, f).1
    }

    /// Apply `f` under the widget's lock; returns its result and a snapshot.
    pub fn update_with<R>(
        &self,
        action: &str,
        f: impl FnOnce(&W, &mut W::State) -> R,
    ) -> (R, W::State) {
        debug!(widget = W::KIND, id = self.region.id(), action, "Applying action");
        let widget = &*self.widget;
        self.store
            .update_with(self.region.id(), || widget.initial_state(), |state| f(widget, state))
    }

    /// The full region for `state`.
    pub fn fragment(&self, state: &W::State) -> Fragment {
        Fragment::new(self.widget.render(&self.region, state))
    }
}
