//! open / close / confirm for dialog, drawer and sheet

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{Overlay, OverlayState};
use hearth_ui::Region;

pub fn routes<W: Overlay>(store: Store<OverlayState>, widget: W, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("open"), post(open::<W>))
        .route(&mount.path("close"), post(close::<W>))
        .route(&mount.path("confirm"), post(confirm::<W>))
        .with_state(mount)
}

async fn open<W: Overlay>(State(mount): State<Mount<W>>) -> Result<Fragment> {
    let state = mount.update("open", |_, s| s.open());
    Ok(mount.fragment(&state))
}

async fn close<W: Overlay>(State(mount): State<Mount<W>>) -> Result<Fragment> {
    let state = mount.update("close", |_, s| s.close());
    Ok(mount.fragment(&state))
}

async fn confirm<W: Overlay>(State(mount): State<Mount<W>>) -> Result<Fragment> {
    let state = mount.update("confirm", |_, s| s.close());
    let fragment = mount.fragment(&state);
    Ok(match mount.widget.confirm_event() {
        Some(event) => fragment.trigger(event),
        None => fragment,
    })
}
