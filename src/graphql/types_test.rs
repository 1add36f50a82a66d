use super::*;
use crate::error::ErrorCode;

#[test]
fn retryable_transport_and_server_errors() {
    assert!(GraphqlError::Request("connection reset".into()).retryable());
    assert!(GraphqlError::Response { status: 429, body: String::new() }.retryable());
    assert!(GraphqlError::Response { status: 503, body: String::new() }.retryable());
}

#[test]
fn client_errors_are_not_retryable() {
    assert!(!GraphqlError::Response { status: 400, body: String::new() }.retryable());
    assert!(!GraphqlError::Parse("eof".into()).retryable());
    assert!(!GraphqlError::Graphql(vec!["denied".into()]).retryable());
}

#[test]
fn graphql_error_joins_messages() {
    let err = GraphqlError::Graphql(vec!["first".into(), "second".into()]);
    assert_eq!(err.to_string(), "GraphQL errors: first; second");
    assert_eq!(err.error_code(), "E_GRAPHQL");
}

#[test]
fn attribute_node_reads_camel_case_and_nested_choices() {
    let node: AttributeNode = serde_json::from_value(serde_json::json!({
        "id": "QXR0cmlidXRlOjE=",
        "name": "Color",
        "slug": "color",
        "inputType": "DROPDOWN",
        "choices": { "edges": [ { "node": { "id": "v1", "name": "Red", "slug": "red" } } ] }
    }))
    .unwrap();
    assert_eq!(node.input_type.as_deref(), Some("DROPDOWN"));
    let choices = node.choices.unwrap();
    assert_eq!(choices.edges.len(), 1);
    assert_eq!(choices.edges[0].node.slug.as_deref(), Some("red"));
}

#[test]
fn named_node_tolerates_missing_slug_and_null_name() {
    let node: NamedNode = serde_json::from_value(serde_json::json!({ "id": "1", "name": null })).unwrap();
    assert_eq!(node.id, "1");
    assert!(node.name.is_none());
    assert!(node.slug.is_none());
}
