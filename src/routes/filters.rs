//! Initial filter state route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::warn;

use crate::error::{ErrorBody, ErrorCode};
use crate::filters::{FilterRequest, InitialStateView, resolve};
use crate::state::AppState;

/// `GET /api/filters/initial` — resolve the selected identifiers in the
/// query string (`category=`, `attribute.<slug>=`, ...) into options.
///
/// Dimensions whose query failed are listed under `failures`; a result that
/// does not match its dimension fails the whole request with 502.
pub async fn initial_state(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<InitialStateView>, (StatusCode, Json<ErrorBody>)> {
    let request = FilterRequest::from_query_pairs(pairs);
    match resolve(state.source.as_ref(), &request, state.dispatch).await {
        Ok(aggregation) => Ok(Json(InitialStateView::settled(aggregation))),
        Err(err) => {
            warn!(code = err.error_code(), error = %err, "filters: initial state failed");
            Err((StatusCode::BAD_GATEWAY, Json(ErrorBody::from_error(&err))))
        }
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
