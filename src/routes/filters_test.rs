use std::sync::Arc;

use serde_json::json;

use crate::filters::test_helpers::MockSource;
use crate::graphql::GraphqlError;
use crate::routes::test_helpers::{get_json, test_app};
use axum::http::StatusCode;

#[tokio::test]
async fn empty_query_returns_empty_state_without_dispatch() {
    let source = Arc::new(MockSource::new());
    let (status, body) = get_json(test_app(source.clone()), "/api/filters/initial").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loading"], false);
    assert_eq!(body["data"]["category"], json!([]));
    assert_eq!(body["data"]["attribute"], json!({}));
    assert!(body.get("failures").is_none());
    assert_eq!(source.calls().len(), 0);
}

#[tokio::test]
async fn resolves_each_dimension_from_query_string() {
    let uri = "/api/filters/initial?category=hats&channel=ch2&attribute.color=red&attribute.color=blue&sort=name";
    let (status, body) = get_json(test_app(MockSource::new()), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"], json!([{ "label": "Hats", "value": "id-hats", "slug": "hats" }]));
    assert_eq!(body["data"]["channel"], json!([{ "label": "Channel Two", "value": "Q2g6Mg==", "slug": "ch2" }]));
    let choices: Vec<&str> = body["data"]["attribute"]["color"]["choices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(choices, vec!["Red", "Blue"]);
    assert_eq!(body["data"]["attribute"]["color"]["inputType"], "DROPDOWN");
}

#[tokio::test]
async fn failed_dimension_is_reported_alongside_data() {
    let source = MockSource::new();
    source.script("_SearchCategoriesOperands", Err(GraphqlError::Graphql(vec!["boom".into()])));
    let (status, body) = get_json(test_app(source), "/api/filters/initial?category=hats&collection=summer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"], json!([]));
    assert_eq!(body["data"]["collection"][0]["label"], "Summer");
    assert_eq!(body["failures"]["category"]["code"], "E_GRAPHQL");
    assert_eq!(body["failures"]["category"]["attempts"], 1);
}

#[tokio::test]
async fn mismatched_result_is_bad_gateway() {
    let source = MockSource::new();
    source.script("_SearchCategoriesOperands", Ok(json!({ "collections": { "edges": [] } })));
    let (status, body) = get_json(test_app(source), "/api/filters/initial?category=hats").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "E_CLASSIFY_MISMATCH");
    assert_eq!(body["retryable"], false);
}
