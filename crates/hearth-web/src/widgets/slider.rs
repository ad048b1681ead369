//! track / set / key for the slider

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::{lenient, Params};
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{Slider, SliderState};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Track {
    #[serde(deserialize_with = "lenient::number")]
    percent: f64,
}

#[derive(Debug, Deserialize)]
struct SetValue {
    #[serde(deserialize_with = "lenient::number")]
    index: usize,
    #[serde(deserialize_with = "lenient::number")]
    value: f64,
}

#[derive(Debug, Deserialize)]
struct Key {
    #[serde(deserialize_with = "lenient::number")]
    index: usize,
    key: String,
}

pub fn routes(store: Store<SliderState>, widget: Slider, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("track"), post(track))
        .route(&mount.path("set"), post(set))
        .route(&mount.path("key"), post(key))
        .with_state(mount)
}

async fn track(State(mount): State<Mount<Slider>>, Params(req): Params<Track>) -> Result<Fragment> {
    let state = mount.update("track", |_, s| {
        s.track(req.percent);
    });
    Ok(mount.fragment(&state))
}

async fn set(State(mount): State<Mount<Slider>>, Params(req): Params<SetValue>) -> Result<Fragment> {
    let state = mount.update("set", |_, s| {
        s.set(req.index, req.value);
    });
    Ok(mount.fragment(&state))
}

async fn key(State(mount): State<Mount<Slider>>, Params(req): Params<Key>) -> Result<Fragment> {
    let state = mount.update("key", |_, s| {
        s.key(req.index, &req.key);
    });
    Ok(mount.fragment(&state))
}
