//! Shop API GraphQL client.
//!
//! Thin HTTP wrapper: POSTs `{query, operationName, variables}` and unwraps
//! the `{data, errors}` envelope. Pure parsing in `parse_envelope` for
//! testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::config::GraphqlConfig;
use super::queries::Operation;
use super::types::{GraphqlError, OperandSource};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GraphqlClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GraphqlClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: GraphqlConfig) -> Result<Self, GraphqlError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GraphqlError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_url: config.api_url, token: config.token })
    }

    /// Build a client from environment variables (see [`GraphqlConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the config is incomplete or the HTTP client fails.
    pub fn from_env() -> Result<Self, GraphqlError> {
        Self::new(GraphqlConfig::from_env()?)
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn post(&self, operation: &Operation) -> Result<Value, GraphqlError> {
        let variables = operation.variables();
        let body = GqlRequest { query: operation.document(), operation_name: operation.name(), variables: &variables };

        let mut request = self.http.post(&self.api_url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GraphqlError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GraphqlError::Request(e.to_string()))?;

        if status != 200 {
            return Err(GraphqlError::Response { status, body: text });
        }

        debug!(operation = operation.name(), bytes = text.len(), "graphql: response received");
        parse_envelope(&text)
    }
}

#[async_trait::async_trait]
impl OperandSource for GraphqlClient {
    async fn execute(&self, operation: &Operation) -> Result<Value, GraphqlError> {
        self.post(operation).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GqlRequest<'a> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GqlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GqlErrorItem>>,
}

#[derive(Deserialize)]
struct GqlErrorItem {
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Unwrap the GraphQL envelope. Partial data with errors is kept; errors
/// with no data, or with every top-level field nulled, fail the operation.
fn parse_envelope(json: &str) -> Result<Value, GraphqlError> {
    let envelope: GqlEnvelope = serde_json::from_str(json).map_err(|e| GraphqlError::Parse(e.to_string()))?;
    let messages: Vec<String> = envelope
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    match envelope.data {
        Some(data) if !messages.is_empty() && all_fields_null(&data) => {
            debug!(errors = ?messages, "graphql: every requested field failed");
            Err(GraphqlError::Graphql(messages))
        }
        Some(data) if !data.is_null() => {
            if !messages.is_empty() {
                warn!(errors = ?messages, "graphql: partial data returned with errors");
            }
            Ok(data)
        }
        _ if !messages.is_empty() => Err(GraphqlError::Graphql(messages)),
        _ => Err(GraphqlError::Parse("response carried neither data nor errors".into())),
    }
}

/// True for `null` and for objects whose fields are all `null`.
fn all_fields_null(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(fields) => fields.values().all(Value::is_null),
        _ => false,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
