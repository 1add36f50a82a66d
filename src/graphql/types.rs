//! GraphQL types — transport errors, the `OperandSource` seam, and the node
//! shapes returned by the operand queries.

use serde::Deserialize;

use super::queries::Operation;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by GraphQL client operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphqlError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The API endpoint environment variable is not set.
    #[error("missing API endpoint: env var {var} not set")]
    MissingEndpoint { var: String },

    /// The env var named as holding the API token is not set.
    #[error("missing API token: env var {var} not set")]
    MissingToken { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the API failed before a response arrived.
    #[error("API request failed: {0}")]
    Request(String),

    /// The API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The API answered with GraphQL errors and no data.
    #[error("GraphQL errors: {}", .0.join("; "))]
    Graphql(Vec<String>),
}

impl crate::error::ErrorCode for GraphqlError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingEndpoint { .. } => "E_MISSING_ENDPOINT",
            Self::MissingToken { .. } => "E_MISSING_TOKEN",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_API_REQUEST",
            Self::Response { .. } => "E_API_RESPONSE",
            Self::Parse(_) => "E_API_PARSE",
            Self::Graphql(_) => "E_GRAPHQL",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// OPERAND SOURCE TRAIT
// =============================================================================

/// Executes one operand query and returns the GraphQL `data` object.
/// Enables mocking in tests.
#[async_trait::async_trait]
pub trait OperandSource: Send + Sync {
    /// Run `operation` against the API.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphqlError`] if the transport fails, the status is not
    /// successful, or the envelope carries errors and no data.
    async fn execute(&self, operation: &Operation) -> Result<serde_json::Value, GraphqlError>;
}

// =============================================================================
// NODE SHAPES
// =============================================================================

/// Cursor-pagination envelope. Only the edges are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Collection, category, product type, or attribute choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Channels come back as a flat list, not a connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelNode {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub choices: Option<Connection<NamedNode>>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
