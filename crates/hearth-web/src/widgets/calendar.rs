//! prev / next / select for the calendar

use super::Mount;
use crate::error::{Result, WebError};
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::calendar::parse_date;
use hearth_ui::components::{Calendar, CalendarState};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Day {
    date: String,
}

pub fn routes(store: Store<CalendarState>, widget: Calendar, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("prev"), post(prev))
        .route(&mount.path("next"), post(next))
        .route(&mount.path("select"), post(select))
        .with_state(mount)
}

async fn prev(State(mount): State<Mount<Calendar>>) -> Result<Fragment> {
    let state = mount.update("prev", |calendar, s| calendar.prev(s));
    Ok(mount.fragment(&state))
}

async fn next(State(mount): State<Mount<Calendar>>) -> Result<Fragment> {
    let state = mount.update("next", |calendar, s| calendar.next(s));
    Ok(mount.fragment(&state))
}

async fn select(State(mount): State<Mount<Calendar>>, Params(req): Params<Day>) -> Result<Fragment> {
    let date = parse_date(&req.date)
        .ok_or_else(|| WebError::BadRequest(format!("invalid date: {}", req.date)))?;
    let state = mount.update("select", |calendar, s| calendar.select(s, date));
    Ok(mount.fragment(&state))
}
