//! Sidebar routes with cookie-backed open state

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use hearth_ui::components::{Sidebar, SidebarState};
use hearth_ui::Region;
use serde::Deserialize;

/// The value of cookie `cookie_name` from the request's `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|line| line.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == cookie_name)
        .map(|(_, v)| v.trim().to_string())
}

#[derive(Debug, Default, Deserialize)]
struct Mobile {
    #[serde(default)]
    close: bool,
}

pub fn routes(store: Store<SidebarState>, widget: Sidebar, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("state"), get(state))
        .route(&mount.path("toggle"), post(toggle))
        .route(&mount.path("mobile"), get(mobile))
        .with_state(mount)
}

async fn state(State(mount): State<Mount<Sidebar>>, headers: HeaderMap) -> Result<Fragment> {
    let stored = cookie_value(&headers, &mount.widget.storage_key);
    let state = mount.update("state", |sidebar, s| sidebar.restore(s, stored.as_deref()));
    Ok(mount.fragment(&state))
}

async fn toggle(State(mount): State<Mount<Sidebar>>) -> Result<Fragment> {
    let state = mount.update("toggle", |sidebar, s| sidebar.toggle(s));
    Ok(mount
        .fragment(&state)
        .header(SET_COOKIE, mount.widget.cookie(&state)))
}

async fn mobile(State(mount): State<Mount<Sidebar>>, Params(req): Params<Mobile>) -> Result<Fragment> {
    let state = mount.update("mobile", |sidebar, s| sidebar.set_mobile(s, !req.close));
    Ok(Fragment::new(
        mount.widget.render_mobile(&mount.region, state.mobile_open),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie_value_finds_named_pair() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; sidebar_state=false"));
        assert_eq!(cookie_value(&headers, "sidebar_state").as_deref(), Some("false"));
        assert_eq!(cookie_value(&headers, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_reads_every_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("b=2"));
        assert_eq!(cookie_value(&headers, "b").as_deref(), Some("2"));
    }
}
