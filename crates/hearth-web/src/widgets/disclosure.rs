//! Accordion and collapsible toggles

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{Accordion, AccordionState, Collapsible, CollapsibleState};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ToggleItem {
    item: String,
}

pub fn accordion_routes(store: Store<AccordionState>, widget: Accordion, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("toggle"), post(toggle_item))
        .with_state(mount)
}

async fn toggle_item(
    State(mount): State<Mount<Accordion>>,
    Params(req): Params<ToggleItem>,
) -> Result<Fragment> {
    let state = mount.update("toggle", |accordion, s| {
        accordion.toggle(s, &req.item);
    });
    Ok(mount.fragment(&state))
}

pub fn collapsible_routes(
    store: Store<CollapsibleState>,
    widget: Collapsible,
    region: Region,
) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("toggle"), post(toggle_open))
        .with_state(mount)
}

async fn toggle_open(State(mount): State<Mount<Collapsible>>) -> Result<Fragment> {
    let state = mount.update("toggle", |_, s| s.open = !s.open);
    Ok(mount.fragment(&state))
}
