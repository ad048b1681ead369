//! End-to-end fragment swaps through the widget routers

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use hearth_ui::components::calendar::parse_date;
use hearth_ui::components::{
    Accordion, AccordionItem, AccordionType, AlertDialog, Calendar, Carousel, Dialog,
    DropdownMenu, InputOtp, MenuItem, Popover, Sidebar, Slider, Sonner, Tab, Table, TableColumn,
    TableRow, Tabs,
};
use hearth_ui::{Region, SwapWidget};
use hearth_web::events::Hub;
use hearth_web::fragment::HTML_CONTENT_TYPE;
use hearth_web::widgets::{
    accordion_routes, alert_dialog_routes, calendar_routes, carousel_routes, floating_routes,
    input_otp_routes, menu_routes, overlay_routes, sidebar_routes, slider_routes, table_routes,
    tabs_routes, toast_routes, ToastMount,
};
use hearth_web::Store;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Reply {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

async fn send(app: &Router, method: Method, uri: &str, form: &str) -> Reply {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(form.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Reply {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn post(app: &Router, uri: &str, form: &str) -> Reply {
    send(app, Method::POST, uri, form).await
}

async fn get(app: &Router, uri: &str) -> Reply {
    send(app, Method::GET, uri, "").await
}

#[tokio::test]
async fn dialog_close_is_idempotent() {
    let app = overlay_routes(
        Store::new(),
        Dialog::new("Edit profile"),
        Region::new("dlg", "/dlg"),
    );

    let opened = post(&app, "/dlg/open", "").await;
    assert_eq!(opened.status, StatusCode::OK);
    assert_eq!(opened.header("content-type"), Some(HTML_CONTENT_TYPE));
    assert!(opened.body.starts_with(r#"<div id="dlg""#));
    assert!(opened.body.contains(r#"role="dialog""#));

    for _ in 0..2 {
        let closed = post(&app, "/dlg/close", "").await;
        assert_eq!(closed.status, StatusCode::OK);
        assert_eq!(closed.body, r#"<div id="dlg"></div>"#);
    }
}

#[tokio::test]
async fn dialog_confirm_fires_declared_event() {
    let app = overlay_routes(
        Store::new(),
        Dialog::new("Save").confirm_event("profile-saved"),
        Region::new("dlg", "/dlg"),
    );
    post(&app, "/dlg/open", "").await;
    let confirmed = post(&app, "/dlg/confirm", "").await;
    assert_eq!(confirmed.header("hx-trigger"), Some("profile-saved"));
    assert_eq!(confirmed.body, r#"<div id="dlg"></div>"#);
}

#[tokio::test]
async fn range_slider_thumbs_cannot_cross() {
    let app = slider_routes(
        Store::new(),
        Slider::new("price").values([20, 80]),
        Region::new("price", "/price"),
    );
    let reply = post(&app, "/price/set", "index=0&value=90").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(r#"name="price[0]" value="80""#));
    assert!(reply.body.contains(r#"name="price[1]" value="80""#));
}

#[tokio::test]
async fn slider_rejects_unparseable_values() {
    let app = slider_routes(
        Store::new(),
        Slider::new("volume"),
        Region::new("volume", "/volume"),
    );
    let reply = post(&app, "/volume/set", "index=0&value=loud").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);

    let untouched = post(&app, "/volume/key", "index=0&key=Home").await;
    assert!(untouched.body.contains(r#"aria-valuenow="0""#));
}

fn people() -> Table {
    Table::new([
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("role", "Role"),
    ])
    .rows([
        TableRow::new("1", [("name", "Ada"), ("role", "Engineer")]),
        TableRow::new("2", [("name", "Grace"), ("role", "Admiral")]),
    ])
}

#[tokio::test]
async fn table_sort_cycles_through_three_states() {
    let app = table_routes(Store::new(), people(), Region::new("people", "/people"));
    for expected in ["ascending", "descending", "none", "ascending"] {
        let reply = post(&app, "/people/sort", "column=name").await;
        assert_eq!(reply.status, StatusCode::OK);
        assert!(
            reply.body.contains(&format!(r#"aria-sort="{expected}""#)),
            "expected {expected}"
        );
    }
}

#[tokio::test]
async fn missing_parameter_is_a_bad_request() {
    let app = table_routes(Store::new(), people(), Region::new("people", "/people"));
    let reply = post(&app, "/people/sort", "").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.body.contains("column"));
}

fn toasts() -> (Router, Hub) {
    let hub = Hub::new();
    let mount = ToastMount::new(
        Store::new(),
        Sonner::new(),
        Region::new("toasts", "/toasts"),
        hub.clone(),
        Duration::from_secs(30),
    );
    (toast_routes(mount), hub)
}

#[tokio::test]
async fn toast_lifecycle() {
    let (app, _hub) = toasts();

    let added = post(&app, "/toasts/add", "id=T1&title=Saved&duration_ms=3000").await;
    assert_eq!(added.status, StatusCode::OK);

    let listed = get(&app, "/toasts/list").await;
    assert!(listed.body.contains(r#"id="toasts-toast-T1""#));
    assert!(listed.body.contains("Saved"));

    let dismissed = send(&app, Method::DELETE, "/toasts/dismiss?id=T1", "").await;
    assert_eq!(dismissed.status, StatusCode::OK);

    let listed = get(&app, "/toasts/list").await;
    assert!(!listed.body.contains("toasts-toast-T1"));

    let again = send(&app, Method::DELETE, "/toasts/dismiss?id=T1", "").await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn toast_add_publishes_update() {
    let (app, hub) = toasts();
    let mut events = hub.subscribe("toasts");
    post(&app, "/toasts/add", "id=T2&title=Hello").await;
    let event = events.recv().await.unwrap();
    assert_eq!(event.name, hearth_web::events::TOAST_UPDATE);
}

#[tokio::test]
async fn toast_rejects_bad_id() {
    let (app, _hub) = toasts();
    let reply = post(&app, "/toasts/add", "id=%3Cscript%3E&title=x").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toast_action_fires_its_event() {
    let (app, _hub) = toasts();
    post(
        &app,
        "/toasts/add",
        "id=T3&title=Deleted&action_label=Undo&action_event=undo-delete",
    )
    .await;
    let reply = post(&app, "/toasts/action", "id=T3").await;
    assert_eq!(reply.header("hx-trigger"), Some("undo-delete"));
    assert!(!reply.body.contains("toasts-toast-T3"));
}

fn alert() -> Router {
    alert_dialog_routes(
        Store::new(),
        AlertDialog::new("Delete project")
            .confirm_token("DELETE")
            .confirm_event("project-deleted"),
        Region::new("ad", "/ad"),
    )
}

#[tokio::test]
async fn alert_validate_answers_out_of_band() {
    let app = alert();
    post(&app, "/ad/open", "").await;

    let wrong = post(&app, "/ad/validate", "confirmation=delete").await;
    assert!(wrong.body.starts_with(r#"<button id="ad-confirm""#));
    assert!(wrong.body.contains(r#"disabled aria-disabled="true""#));
    assert!(wrong.body.ends_with(r#"hx-swap-oob="true">Continue</button>"#));

    let right = post(&app, "/ad/validate", "confirmation=DELETE").await;
    assert!(right.body.contains(r#"aria-disabled="false""#));
    assert!(right.body.contains(r#"hx-swap-oob="true""#));
}

#[tokio::test]
async fn alert_confirm_rejects_then_accepts() {
    let app = alert();
    post(&app, "/ad/open", "").await;

    let rejected = post(&app, "/ad/confirm", "confirmation=nope").await;
    assert_eq!(rejected.status, StatusCode::OK);
    assert!(rejected.header("hx-trigger").is_none());
    assert!(rejected
        .body
        .contains(r#"<div id="ad-feedback" hx-swap-oob="true""#));
    assert!(rejected.body.contains(r#"role="alert""#));

    let accepted = post(&app, "/ad/confirm", "confirmation=DELETE").await;
    assert_eq!(accepted.header("hx-trigger"), Some("project-deleted"));
    assert_eq!(accepted.body, r#"<div id="ad"></div>"#);
}

#[tokio::test]
async fn sidebar_toggle_sets_cookie() {
    let app = sidebar_routes(Store::new(), Sidebar::new(), Region::new("sb", "/sb"));

    let toggled = post(&app, "/sb/toggle", "").await;
    assert_eq!(
        toggled.header("set-cookie"),
        Some("sidebar_state=false; Path=/; Max-Age=604800")
    );
    assert!(toggled.body.contains(r#"data-state="collapsed""#));
}

#[tokio::test]
async fn sidebar_state_restores_from_cookie() {
    let app = sidebar_routes(Store::new(), Sidebar::new(), Region::new("sb", "/sb"));
    let request = Request::builder()
        .uri("/sb/state")
        .header(header::COOKIE, "theme=dark; sidebar_state=false")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains(r#"data-state="collapsed""#));
    assert!(!body.contains(r#"hx-trigger="load""#));
}

#[tokio::test]
async fn sidebar_mobile_sheet_opens_and_closes() {
    let app = sidebar_routes(Store::new(), Sidebar::new(), Region::new("sb", "/sb"));
    let opened = get(&app, "/sb/mobile").await;
    assert!(opened.body.contains(r#"data-state="open""#));
    let closed = get(&app, "/sb/mobile?close=true").await;
    assert_eq!(closed.body, r#"<div id="sb-mobile"></div>"#);
}

fn otp() -> Router {
    input_otp_routes(
        InputOtp::new("otp", 4).verifier(|code: &str| code == "1234"),
        Region::new("otp", "/otp"),
    )
}

#[tokio::test]
async fn otp_success_fires_verified_event() {
    let reply = post(&otp(), "/otp/verify", "otp-0=1&otp-1=2&otp-2=3&otp-3=4").await;
    assert_eq!(reply.header("hx-trigger"), Some("otp-verified"));
    assert!(reply
        .body
        .starts_with(r#"<div id="otp-feedback" hx-swap-oob="true""#));
    assert!(reply.body.contains(r#"data-state="success""#));
}

#[tokio::test]
async fn otp_failure_is_an_error_fragment() {
    let short = post(&otp(), "/otp/verify", "otp-0=1&otp-1=2").await;
    assert!(short.header("hx-trigger").is_none());
    assert!(short.body.contains("Enter all 4 characters."));

    let wrong = post(&otp(), "/otp/verify", "otp-0=9&otp-1=9&otp-2=9&otp-3=9").await;
    assert!(wrong.body.contains(r#"role="alert""#));
    assert!(wrong.body.contains("text-destructive"));
}

#[tokio::test]
async fn menu_activation_announces_selection() {
    let menu = DropdownMenu::new("Account").items([
        MenuItem::item("Profile", "profile"),
        MenuItem::item("Billing", "billing").disabled(),
    ]);
    let app = menu_routes(Store::new(), menu, Region::new("acct", "/acct"));

    post(&app, "/acct/open", "").await;
    let disabled = post(&app, "/acct/action", "action=activate&value=billing").await;
    assert!(disabled.header("hx-trigger").is_none());

    let chosen = post(&app, "/acct/action", "action=activate&value=profile").await;
    let payload: Value = serde_json::from_str(chosen.header("hx-trigger").unwrap()).unwrap();
    assert_eq!(payload["menuSelect"]["id"], "acct");
    assert_eq!(payload["menuSelect"]["value"], "profile");
    assert!(chosen.body.contains(r#"data-state="closed""#));
}

#[tokio::test]
async fn mounted_widgets_start_from_initial_state() {
    let widget = Slider::new("volume");
    let expected = widget
        .render(&Region::new("volume", "/volume"), &widget.initial_state())
        .to_string();
    let store = Store::new();
    let app = slider_routes(store.clone(), widget, Region::new("volume", "/volume"));
    let reply = post(&app, "/volume/key", "index=0&key=Tab").await;
    assert_eq!(reply.body, expected);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn popover_opens_at_pointer_and_toggles_closed() {
    let app = floating_routes(Store::new(), Popover::new("Open"), Region::new("pop", "/pop"));

    let opened = post(&app, "/pop/open", "x=10&y=20").await;
    assert_eq!(opened.status, StatusCode::OK);
    assert!(opened.body.contains("position: fixed; left: 10px; top: 24px;"));

    let closed = post(&app, "/pop/toggle", "").await;
    assert!(!closed.body.contains(r#"data-state="open""#));
    assert!(!closed.body.contains("position: fixed"));
}

#[tokio::test]
async fn single_accordion_keeps_one_item_open() {
    let accordion = Accordion::new(AccordionType::Single).items([
        AccordionItem::new("a", "First"),
        AccordionItem::new("b", "Second"),
        AccordionItem::new("c", "Third").disabled(true),
    ]);
    let app = accordion_routes(Store::new(), accordion, Region::new("acc", "/acc"));

    post(&app, "/acc/toggle", "item=a").await;
    let b_open = r#"id="acc-content-b" role="region" aria-labelledby="acc-trigger-b" data-state="open""#;
    let reply = post(&app, "/acc/toggle", "item=b").await;
    assert_eq!(reply.body.matches(r#"aria-expanded="true""#).count(), 1);
    assert!(reply.body.contains(b_open));

    let reply = post(&app, "/acc/toggle", "item=c").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(b_open));
}

#[tokio::test]
async fn carousel_goto_ignores_out_of_range() {
    let carousel = (1..=3).fold(Carousel::new(), |c, n| {
        c.slide([hearth_html::prelude::text(n.to_string())])
    });
    let app = carousel_routes(Store::new(), carousel, Region::new("car", "/car"));

    let reply = post(&app, "/car/goto", "index=2").await;
    assert!(reply.body.contains(r#"aria-label="Go to slide 3" aria-current="true""#));

    let reply = post(&app, "/car/goto", "index=9").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(r#"aria-label="Go to slide 3" aria-current="true""#));

    let reply = post(&app, "/car/goto", "index=last").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tabs_skip_disabled_tabs() {
    let tabs = Tabs::new([
        Tab::new("account", "Account"),
        Tab::new("password", "Password"),
        Tab::new("billing", "Billing").disabled(true),
    ]);
    let app = tabs_routes(Store::new(), tabs, Region::new("t", "/t"));

    let reply = post(&app, "/t/select", "value=password").await;
    assert!(reply.body.contains(r#"id="t-panel-password""#));

    let reply = post(&app, "/t/select", "value=billing").await;
    assert!(reply.body.contains(r#"id="t-panel-password""#));
    assert!(!reply.body.contains(r#"id="t-panel-billing""#));
}

#[tokio::test]
async fn calendar_select_moves_month_and_rejects_bad_dates() {
    let today = parse_date("2026-10-18").unwrap();
    let app = calendar_routes(Store::new(), Calendar::new(today), Region::new("cal", "/cal"));

    let reply = post(&app, "/cal/select", "date=2026-11-02").await;
    assert!(reply.body.contains("November 2026"));

    let reply = post(&app, "/cal/prev", "").await;
    assert!(reply.body.contains("October 2026"));

    let reply = post(&app, "/cal/select", "date=someday").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.body.contains("invalid date"));
}
