//! Application setup and server configuration.

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{get, patch, post};
use axum::{middleware, Router};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    create_bookmark, delete_bookmark, edit_bookmark, edit_user, get_bookmark_by_id, get_bookmarks,
    get_self, health_handler, signin, signup,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, jwt_service: Arc<JwtService>) -> Router {
    let state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    // CORS: browser clients send the bearer token in a header
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .route("/users/get-self", get(get_self))
        .route("/users/edit", patch(edit_user))
        .route("/bookmarks", get(get_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark_by_id)
                .patch(edit_bookmark)
                .delete(delete_bookmark),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
