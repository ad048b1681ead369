//! prev / next / goto / toggle-play for the carousel

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::{lenient, Params};
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{Carousel, CarouselState};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Slide {
    #[serde(deserialize_with = "lenient::number")]
    index: usize,
}

pub fn routes(store: Store<CarouselState>, widget: Carousel, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("prev"), post(prev))
        .route(&mount.path("next"), post(next))
        .route(&mount.path("goto"), post(goto))
        .route(&mount.path("toggle-play"), post(toggle_play))
        .with_state(mount)
}

async fn prev(State(mount): State<Mount<Carousel>>) -> Result<Fragment> {
    let state = mount.update("prev", |carousel, s| carousel.prev(s));
    Ok(mount.fragment(&state))
}

async fn next(State(mount): State<Mount<Carousel>>) -> Result<Fragment> {
    let state = mount.update("next", |carousel, s| carousel.next(s));
    Ok(mount.fragment(&state))
}

async fn goto(State(mount): State<Mount<Carousel>>, Params(req): Params<Slide>) -> Result<Fragment> {
    let state = mount.update("goto", |carousel, s| carousel.go_to(s, req.index));
    Ok(mount.fragment(&state))
}

async fn toggle_play(State(mount): State<Mount<Carousel>>) -> Result<Fragment> {
    let state = mount.update("toggle-play", |carousel, s| carousel.toggle_play(s));
    Ok(mount.fragment(&state))
}
