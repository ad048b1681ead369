use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::store::Store;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use hearth_ui::components::Chart;
use hearth_ui::Region;

/// `GET {base}/data` re-renders the region from the chart's source.
pub fn routes(widget: Chart, region: Region) -> Router {
    let mount = Mount::new(Store::new(), widget, region);
    Router::new()
        .route(&mount.path("data"), get(data))
        .with_state(mount)
}

async fn data(State(mount): State<Mount<Chart>>) -> Result<Fragment> {
    let fresh = mount.widget.current_data();
    Ok(Fragment::new(mount.widget.render_data(&mount.region, &fresh)))
}
