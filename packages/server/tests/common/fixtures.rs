//! Test fixtures for creating test data through the public API.

use anyhow::{bail, Result};
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use super::http::ApiClient;

/// Unique email per call so tests can safely share one database.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Sign up a fresh user and return their access token.
pub async fn signup_user(client: &ApiClient, email: &str, password: &str) -> Result<String> {
    let (status, body) = client
        .post(
            "/auth/signup",
            None,
            json!({ "email": email, "password": password }),
        )
        .await?;

    if status != StatusCode::CREATED {
        bail!("signup failed with status {status}: {body}");
    }

    match body["access_token"].as_str() {
        Some(token) => Ok(token.to_string()),
        None => bail!("signup response missing access_token: {body}"),
    }
}

/// Create a bookmark through the API and return the response body.
pub async fn create_bookmark(
    client: &ApiClient,
    token: &str,
    title: &str,
    link: &str,
) -> Result<Value> {
    let (status, body) = client
        .post(
            "/bookmarks",
            Some(token),
            json!({ "title": title, "link": link }),
        )
        .await?;

    if status != StatusCode::CREATED {
        bail!("bookmark creation failed with status {status}: {body}");
    }

    Ok(body)
}
