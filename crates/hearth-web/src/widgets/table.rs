//! sort / filter / page / page-size / select / select-page for the table

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::{lenient, Params};
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{Table, TableState};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Column {
    column: String,
}

#[derive(Debug, Deserialize)]
struct Filter {
    column: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(deserialize_with = "lenient::number")]
    page: usize,
}

#[derive(Debug, Deserialize)]
struct PageSize {
    #[serde(deserialize_with = "lenient::number")]
    size: usize,
}

#[derive(Debug, Deserialize)]
struct Row {
    row: String,
}

pub fn routes(store: Store<TableState>, widget: Table, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("sort"), post(sort))
        .route(&mount.path("filter"), post(filter))
        .route(&mount.path("page"), post(page))
        .route(&mount.path("page-size"), post(page_size))
        .route(&mount.path("select"), post(select))
        .route(&mount.path("select-page"), post(select_page))
        .with_state(mount)
}

async fn sort(State(mount): State<Mount<Table>>, Params(req): Params<Column>) -> Result<Fragment> {
    let state = mount.update("sort", |table, s| {
        table.sort(s, &req.column);
    });
    Ok(mount.fragment(&state))
}

async fn filter(State(mount): State<Mount<Table>>, Params(req): Params<Filter>) -> Result<Fragment> {
    let state = mount.update("filter", |table, s| {
        table.filter(s, &req.column, &req.value);
    });
    Ok(mount.fragment(&state))
}

async fn page(State(mount): State<Mount<Table>>, Params(req): Params<Page>) -> Result<Fragment> {
    let state = mount.update("page", |table, s| table.go_to_page(s, req.page));
    Ok(mount.fragment(&state))
}

async fn page_size(
    State(mount): State<Mount<Table>>,
    Params(req): Params<PageSize>,
) -> Result<Fragment> {
    let state = mount.update("page-size", |table, s| {
        table.set_page_size(s, req.size);
    });
    Ok(mount.fragment(&state))
}

async fn select(State(mount): State<Mount<Table>>, Params(req): Params<Row>) -> Result<Fragment> {
    let state = mount.update("select", |table, s| {
        table.select(s, &req.row);
    });
    Ok(mount.fragment(&state))
}

async fn select_page(State(mount): State<Mount<Table>>) -> Result<Fragment> {
    let state = mount.update("select-page", |table, s| table.select_page(s));
    Ok(mount.fragment(&state))
}
