//! eventdesk API — HTTP surface over the event repository.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Build the full application router with tracing and CORS layers.
#[must_use]
pub fn app(state: state::AppState) -> Router {
    // TODO: restrict CORS origins once the deployment origin is known.
    Router::new()
        .merge(routes::health::router())
        .merge(routes::events::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
