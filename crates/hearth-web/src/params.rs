//! Request parameter extraction
//!
//! HTMX sends parameters in the query string for GET and DELETE and as a
//! form body otherwise; `hx-vals` may also arrive as JSON when the json-enc
//! extension is in use. [`Params`] accepts all three and maps every
//! rejection to a 400.

use crate::error::WebError;
use axum::extract::{FromRequest, Query, Request};
use axum::http::{header::CONTENT_TYPE, Method};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default)]
pub struct Params<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().starts_with("application/json"))
}

impl<S, T> FromRequest<S> for Params<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if matches!(*req.method(), Method::GET | Method::HEAD | Method::DELETE) {
            let Query(params) = Query::<T>::try_from_uri(req.uri())
                .map_err(|e| WebError::BadRequest(e.body_text()))?;
            return Ok(Params(params));
        }
        if is_json(&req) {
            let Json(params) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| WebError::BadRequest(e.body_text()))?;
            return Ok(Params(params));
        }
        let Form(params) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| WebError::BadRequest(e.body_text()))?;
        Ok(Params(params))
    }
}

/// Accepts numbers sent as strings, which is how form bodies carry them.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Typed(T),
        Text(String),
    }

    pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Deserialize<'de>,
        T::Err: std::fmt::Display,
    {
        match Raw::<T>::deserialize(deserializer)? {
            Raw::Typed(v) => Ok(v),
            Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }

    pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Deserialize<'de>,
        T::Err: std::fmt::Display,
    {
        match Option::<Raw<T>>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Typed(v)) => Ok(Some(v)),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
