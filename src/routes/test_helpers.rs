//! Router harness for route tests.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::filters::DispatchConfig;
use crate::filters::test_helpers::MockSource;
use crate::state::AppState;

pub(crate) fn test_app(source: impl Into<Arc<MockSource>>) -> axum::Router {
    let dispatch = DispatchConfig { max_attempts: 1, backoff: Duration::ZERO };
    let source: Arc<MockSource> = source.into();
    super::app(AppState::new(source, dispatch))
}

pub(crate) async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}
