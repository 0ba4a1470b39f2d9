//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    bill_handler, council_handler, event_handler, events_handler, health_handler, member_handler,
    search_handler,
};
use crate::server::static_files;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let state = AppState { db_pool: pool };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/council", get(council_handler))
        .route("/api/members/:slug", get(member_handler))
        .route("/api/events", get(events_handler))
        .route("/api/events/:slug", get(event_handler))
        .route("/api/legislation/:slug", get(bill_handler))
        .route("/api/search", get(search_handler))
        // Everything else is the embedded site shell
        .fallback(static_files::serve_site)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
