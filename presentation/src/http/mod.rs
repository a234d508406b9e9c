//! HTTP server module

mod api;
mod error;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use api::{HealthResponse, QuestionRequest};
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/question", post(api::question))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
