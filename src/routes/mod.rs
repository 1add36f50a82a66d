//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter UI calls `/api/filters/initial` with its URL query string and
//! receives the aggregated initial state. Date display goes through
//! `/api/dates/humanize`. Every request is traced.

pub mod dates;
pub mod filters;

#[cfg(test)]
pub(crate) mod test_helpers;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/filters/initial", get(filters::initial_state))
        .route("/api/dates/humanize", get(dates::humanize_date))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
