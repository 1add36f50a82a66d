//! GraphQL API configuration parsed from environment variables.

use super::types::GraphqlError;

pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_API_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeouts: ApiTimeouts,
}

impl GraphqlConfig {
    /// Build typed API config from environment variables.
    ///
    /// Required:
    /// - `DASHBOARD_API_URL`: GraphQL endpoint, `http://` or `https://`
    ///
    /// Optional:
    /// - `DASHBOARD_API_TOKEN_ENV`: names the env var holding a bearer token
    /// - `DASHBOARD_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `DASHBOARD_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is missing or malformed, or the named
    /// token variable is not set.
    pub fn from_env() -> Result<Self, GraphqlError> {
        let api_url = std::env::var("DASHBOARD_API_URL")
            .map_err(|_| GraphqlError::MissingEndpoint { var: "DASHBOARD_API_URL".into() })?;
        let api_url = parse_api_url(&api_url)?;

        let token = match std::env::var("DASHBOARD_API_TOKEN_ENV") {
            Ok(key_var) => {
                Some(std::env::var(&key_var).map_err(|_| GraphqlError::MissingToken { var: key_var.clone() })?)
            }
            Err(_) => None,
        };

        let timeouts = ApiTimeouts {
            request_secs: env_parse_u64("DASHBOARD_API_REQUEST_TIMEOUT_SECS", DEFAULT_API_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("DASHBOARD_API_CONNECT_TIMEOUT_SECS", DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, token, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

// The trailing slash is kept: the shop API routes `/graphql/` and `/graphql` differently.
fn parse_api_url(raw: &str) -> Result<String, GraphqlError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(GraphqlError::ConfigParse(format!(
            "invalid DASHBOARD_API_URL '{trimmed}' (expected an http:// or https:// URL)"
        )))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
