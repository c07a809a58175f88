use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{middleware::Next, response::Response};
use tracing::debug;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::auth::JwtService;

/// Authenticated user information from a verified JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

/// JWT authentication middleware
///
/// Extracts the token from the Authorization header, verifies it, and adds
/// `AuthUser` to request extensions. Requests without a valid token continue
/// without `AuthUser`; protected handlers reject them at extraction time, so
/// no workflow ever runs for an unauthenticated caller.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!(user_id = %user.user_id, "authenticated request");
        request.extensions_mut().insert(user);
    } else {
        debug!("no valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the JWT from a request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Accept both "Bearer <token>" and a raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        user_id: claims.user_id,
        email: claims.email,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string(), 15)
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt = jwt_service();
        let user_id = Uuid::new_v4();
        let token = jwt.create_token(user_id, "user@example.com").unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt);
        assert!(auth_user.is_some());
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt = jwt_service();
        let user_id = Uuid::new_v4();
        let token = jwt.create_token(user_id, "user@example.com").unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", token)
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt);
        assert!(auth_user.is_some());
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_no_auth_header() {
        let jwt = jwt_service();
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt);
        assert!(auth_user.is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt = jwt_service();
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt);
        assert!(auth_user.is_none());
    }
}
