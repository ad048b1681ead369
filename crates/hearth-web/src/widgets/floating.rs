//! open / close / toggle for popover, tooltip and hover-card

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::{lenient, Params};
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::FloatingState;
use hearth_ui::{Region, SwapWidget};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Anchor {
    #[serde(default, deserialize_with = "lenient::optional_number")]
    x: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    y: Option<f64>,
}

pub fn routes<W>(store: Store<FloatingState>, widget: W, region: Region) -> Router
where
    W: SwapWidget<State = FloatingState>,
{
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("open"), post(open::<W>))
        .route(&mount.path("close"), post(close::<W>))
        .route(&mount.path("toggle"), post(toggle::<W>))
        .with_state(mount)
}

async fn open<W: SwapWidget<State = FloatingState>>(
    State(mount): State<Mount<W>>,
    Params(anchor): Params<Anchor>,
) -> Result<Fragment> {
    let state = mount.update("open", |_, s| s.open_at(anchor.x, anchor.y));
    Ok(mount.fragment(&state))
}

async fn close<W: SwapWidget<State = FloatingState>>(
    State(mount): State<Mount<W>>,
) -> Result<Fragment> {
    let state = mount.update("close", |_, s| s.close());
    Ok(mount.fragment(&state))
}

async fn toggle<W: SwapWidget<State = FloatingState>>(
    State(mount): State<Mount<W>>,
) -> Result<Fragment> {
    let state = mount.update("toggle", |_, s| s.toggle());
    Ok(mount.fragment(&state))
}
