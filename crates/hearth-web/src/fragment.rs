//! HTML fragment responses
//!
//! A [`Fragment`] is the primary node for the request's target plus any
//! out-of-band nodes, with the `HX-*` headers that signal other widgets.

use crate::error::{Result, WebError};
use axum::http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use hearth_html::Node;
use serde_json::Value;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");
pub const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");

#[derive(Debug, Default)]
pub struct Fragment {
    primary: Node,
    out_of_band: Vec<Node>,
    trigger: Option<String>,
    reswap: Option<String>,
    headers: Vec<(HeaderName, String)>,
}

impl Fragment {
    pub fn new(primary: Node) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    /// No primary content; pair with `hx-swap="none"` or out-of-band nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append an out-of-band node. It must already carry `hx-swap-oob`.
    pub fn oob(mut self, node: Node) -> Self {
        self.out_of_band.push(node);
        self
    }

    /// `HX-Trigger` with a plain event name.
    pub fn trigger(mut self, event: impl Into<String>) -> Self {
        self.trigger = Some(event.into());
        self
    }

    /// `HX-Trigger` with a JSON object mapping event names to details.
    pub fn trigger_json(mut self, payload: &Value) -> Self {
        self.trigger = Some(payload.to_string());
        self
    }

    /// `HX-Reswap`, overriding the client's declared swap.
    pub fn reswap(mut self, spec: impl Into<String>) -> Self {
        self.reswap = Some(spec.into());
        self
    }

    pub fn header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn trigger_value(&self) -> Option<&str> {
        self.trigger.as_deref()
    }

    /// Serialize the body: primary first, then out-of-band nodes.
    pub fn body(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.primary
            .render(&mut buf)
            .map_err(|e| WebError::Render(e.to_string()))?;
        for node in &self.out_of_band {
            node.render(&mut buf)
                .map_err(|e| WebError::Render(e.to_string()))?;
        }
        String::from_utf8(buf).map_err(|e| WebError::Render(e.to_string()))
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
        let named = [
            (HX_TRIGGER, self.trigger.as_deref()),
            (HX_RESWAP, self.reswap.as_deref()),
        ];
        let extra = self
            .headers
            .iter()
            .map(|(name, v)| (name.clone(), Some(v.as_str())));
        for (name, v) in named.into_iter().chain(extra) {
            let Some(v) = v else { continue };
            let header_value = HeaderValue::from_str(v)
                .map_err(|e| WebError::Render(format!("invalid {name} header: {e}")))?;
            map.append(name, header_value);
        }
        Ok(map)
    }
}

impl IntoResponse for Fragment {
    fn into_response(self) -> Response {
        let built = self
            .header_map()
            .and_then(|headers| self.body().map(|body| (headers, body)));
        match built {
            Ok((headers, body)) => (StatusCode::OK, headers, body).into_response(),
            Err(err) => err.into_response(),
        }
    }
}

impl From<Node> for Fragment {
    fn from(primary: Node) -> Self {
        Fragment::new(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::SET_COOKIE;
    use hearth_html::prelude::*;
    use hearth_ui::oob;
    use serde_json::json;

    #[test]
    fn body_is_primary_then_oob() {
        let fragment = Fragment::new(div([id("a"), text("main")]))
            .oob(oob("b", [text("side")]));
        assert_eq!(
            fragment.body().unwrap(),
            r#"<div id="a">main</div><div id="b" hx-swap-oob="true">side</div>"#
        );
    }

    #[test]
    fn headers_are_set() {
        let response = Fragment::empty()
            .trigger_json(&json!({"menuSelect": {"id": "m", "value": "copy"}}))
            .reswap("outerHTML swap:200ms")
            .header(SET_COOKIE, "sidebar_state=false; Path=/")
            .into_response();
        let headers = response.headers();
        assert_eq!(headers[CONTENT_TYPE], HTML_CONTENT_TYPE);
        assert_eq!(
            headers[HX_TRIGGER],
            r#"{"menuSelect":{"id":"m","value":"copy"}}"#
        );
        assert_eq!(headers[HX_RESWAP], "outerHTML swap:200ms");
        assert_eq!(headers[SET_COOKIE], "sidebar_state=false; Path=/");
    }

    #[test]
    fn unencodable_header_is_a_render_error() {
        let response = Fragment::empty().trigger("bad\nname").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
