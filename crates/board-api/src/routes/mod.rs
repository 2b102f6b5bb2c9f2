//! Route definitions

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};

use crate::handlers::{comments, health, method_not_allowed, reactions};
use crate::middleware::cors;
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(board_routes())
        .merge(health_routes())
}

/// Comment and reaction routes, wrapped in CORS
pub fn board_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments",
            // HEAD would otherwise be served by the GET handler
            get(comments::list_comments)
                .post(comments::create_comment)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/reactions",
            post(reactions::add_reaction).fallback(method_not_allowed),
        )
        .layer(middleware::from_fn(cors))
}

/// Health check route (no CORS)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/healthz", any(health::health_check))
}
