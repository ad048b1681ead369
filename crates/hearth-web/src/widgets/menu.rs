//! Menu routes: dropdown and context menus share one router, the menubar
//! has its own because every action names the menu it belongs to

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::{lenient, Params};
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::menu::{apply_to_menu, select_event};
use hearth_ui::components::{Menubar, MenubarState, MenuOutcome, MenuState, MenuWidget};
use hearth_ui::Region;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Pointer {
    #[serde(default, deserialize_with = "lenient::optional_number")]
    x: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    y: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Action {
    action: String,
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MenuName {
    menu: String,
}

#[derive(Debug, Deserialize)]
struct MenubarAction {
    menu: String,
    action: String,
    value: Option<String>,
}

/// Adds the `menuSelect` trigger when an item was activated.
fn announce(fragment: Fragment, menu_id: &str, outcome: &MenuOutcome) -> Fragment {
    match outcome {
        MenuOutcome::Activated(selected) => fragment.trigger_json(&select_event(menu_id, selected)),
        MenuOutcome::Changed | MenuOutcome::Ignored => fragment,
    }
}

pub fn menu_routes<W: MenuWidget>(store: Store<MenuState>, widget: W, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("open"), post(open::<W>))
        .route(&mount.path("close"), post(close::<W>))
        .route(&mount.path("action"), post(action::<W>))
        .with_state(mount)
}

async fn open<W: MenuWidget>(
    State(mount): State<Mount<W>>,
    Params(pointer): Params<Pointer>,
) -> Result<Fragment> {
    let state = mount.update("open", |menu, s| menu.open(s, pointer.x, pointer.y));
    Ok(mount.fragment(&state))
}

async fn close<W: MenuWidget>(State(mount): State<Mount<W>>) -> Result<Fragment> {
    let state = mount.update("close", |_, s| s.close());
    Ok(mount.fragment(&state))
}

async fn action<W: MenuWidget>(
    State(mount): State<Mount<W>>,
    Params(req): Params<Action>,
) -> Result<Fragment> {
    let (outcome, state) = mount.update_with("action", |menu, s| {
        apply_to_menu(menu.menu_items(), s, &req.action, req.value.as_deref())
    });
    Ok(announce(mount.fragment(&state), mount.id(), &outcome))
}

pub fn menubar_routes(store: Store<MenubarState>, widget: Menubar, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("open"), post(bar_open))
        .route(&mount.path("close"), post(bar_close))
        .route(&mount.path("action"), post(bar_action))
        .with_state(mount)
}

async fn bar_open(
    State(mount): State<Mount<Menubar>>,
    Params(req): Params<MenuName>,
) -> Result<Fragment> {
    let state = mount.update("open", |bar, s| bar.open(s, &req.menu));
    Ok(mount.fragment(&state))
}

async fn bar_close(State(mount): State<Mount<Menubar>>) -> Result<Fragment> {
    let state = mount.update("close", |bar, s| bar.close(s));
    Ok(mount.fragment(&state))
}

async fn bar_action(
    State(mount): State<Mount<Menubar>>,
    Params(req): Params<MenubarAction>,
) -> Result<Fragment> {
    let (outcome, state) = mount.update_with("action", |bar, s| {
        bar.action(s, &req.menu, &req.action, req.value.as_deref())
    });
    Ok(announce(mount.fragment(&state), mount.id(), &outcome))
}
