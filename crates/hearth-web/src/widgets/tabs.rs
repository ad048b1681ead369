use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{Tabs, TabsState};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Select {
    value: String,
}

pub fn routes(store: Store<TabsState>, widget: Tabs, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("select"), post(select))
        .with_state(mount)
}

async fn select(State(mount): State<Mount<Tabs>>, Params(req): Params<Select>) -> Result<Fragment> {
    let state = mount.update("select", |tabs, s| tabs.select(s, &req.value));
    Ok(mount.fragment(&state))
}
