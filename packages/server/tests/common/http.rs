//! Minimal in-process HTTP client that drives the router with `oneshot`.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct ApiClient {
    app: Router,
}

impl ApiClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    /// Send a request and decode the response body as JSON.
    ///
    /// Empty bodies (204, null reads) decode to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.request(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, uri, token, None).await
    }
}
