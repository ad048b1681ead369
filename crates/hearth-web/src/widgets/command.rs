use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use hearth_ui::components::Command;
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Search {
    #[serde(default)]
    q: String,
}

/// `GET {base}/search?q=` answers with the list interior only.
pub fn routes(widget: Command, region: Region) -> Router {
    let mount = Mount::new(Store::new(), widget, region);
    Router::new()
        .route(&mount.path("search"), get(search))
        .with_state(mount)
}

async fn search(State(mount): State<Mount<Command>>, Params(req): Params<Search>) -> Result<Fragment> {
    Ok(Fragment::new(mount.widget.render_list(&req.q)))
}
