//! The gallery page and a few of its mounted routes

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use hearth_cli::gallery;
use hearth_config::{ServerConfig, UiConfig};
use tower::ServiceExt;

fn app() -> Router {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    hearth_web::build_app(&ServerConfig::default(), gallery(&UiConfig::default(), today))
}

async fn call(method: Method, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_every_widget() {
    let (status, body) = call(Method::GET, "/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(body.contains("htmx.org"));
    for region_id in [
        r#"id="dialog""#,
        r#"id="alert-dialog""#,
        r#"id="slider""#,
        r#"id="sidebar""#,
        r#"id="sales""#,
        r#"id="toasts""#,
        r#"id="command-list""#,
    ] {
        assert!(body.contains(region_id), "missing {region_id}");
    }
    assert!(body.contains(r#"sse-connect="/htmx/sonner/toasts/stream""#));
    assert!(body.contains(r#"hx-trigger="load""#));
}

#[tokio::test]
async fn widget_routes_live_under_the_prefix() {
    let (status, body) = call(Method::POST, "/htmx/dialog/dialog/open", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"role="dialog""#));

    let (status, body) = call(Method::GET, "/htmx/command/command/search?q=emoji", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Search Emoji"));
    assert!(!body.contains("Calendar"));
}

#[tokio::test]
async fn health_is_mounted() {
    let (status, body) = call(Method::GET, "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "hearth");
}
